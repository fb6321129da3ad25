use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);

            ui.label(
                egui::RichText::new("Dashboard")
                    .size(28.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(12.0);

            ui.label(egui::RichText::new("Connexion OK.").color(colors::SUCCESS));
            ui.add_space(24.0);

            if let Some(ref user) = state.auth_state.user {
                ui.label(
                    egui::RichText::new(&user.name)
                        .size(18.0)
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(4.0);
                ui.label(egui::RichText::new(&user.email).color(colors::TEXT_SECONDARY));
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("Rôle : {}", user.role.as_str()))
                        .color(colors::TEXT_SECONDARY),
                );
            }
        });
    });
}
