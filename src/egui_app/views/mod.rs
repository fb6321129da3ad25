use eframe::egui;

use crate::egui_app::auth::AuthPhase;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub mod dashboard_view;
pub mod login_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🔒 Authgate").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.auth_state.phase == AuthPhase::LoggedIn {
                        if ui.button("Déconnexion").clicked() {
                            state.logout();
                        }
                        if let Some(ref user) = state.auth_state.user {
                            ui.colored_label(colors::TEXT_SECONDARY, &user.email);
                        }
                    }
                });
            });
        });
}

/// Route protection: the phase alone decides which view is shown
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.auth_state.phase {
            AuthPhase::LoggedOut => login_view::render(ui, state),
            AuthPhase::Loading => render_loading(ui),
            AuthPhase::LoggedIn => dashboard_view::render(ui, state),
        });
}

fn render_loading(ui: &mut egui::Ui) {
    let available_rect = ui.available_rect_before_wrap();
    ui.vertical_centered(|ui| {
        ui.add_space((available_rect.height() - 40.0).max(0.0) / 2.0);
        ui.label(
            egui::RichText::new("Chargement…")
                .size(18.0)
                .color(colors::TEXT_SECONDARY),
        );
    });
}
