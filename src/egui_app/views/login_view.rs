use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Fill the entire background first
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = 260.0;
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🔒 Authgate")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new("Connexion")
                    .size(24.0)
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.auth_state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 110.0;

            // Email field
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Email :").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            // Password field
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Mot de passe :").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .text_color(colors::TEXT_LIGHT),
                );
            });

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 140.0;
                ui.add_space((available_rect.width() - button_width) / 2.0);

                let label = if state.auth_state.is_logging_in {
                    "Connexion..."
                } else {
                    "Se connecter"
                };
                let button = egui::Button::new(
                    egui::RichText::new(label).color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);

                let response = ui.add_enabled(
                    !state.auth_state.is_logging_in,
                    |ui: &mut egui::Ui| ui.add_sized([button_width, 32.0], button),
                );
                if response.clicked() {
                    state.handle_login();
                }
            });
        });
    });
}
