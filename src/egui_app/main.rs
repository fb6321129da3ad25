/**
 * egui Native Desktop App - Main Entry Point
 *
 * Drives the authentication flow: drains background auth results each
 * frame, then renders the top bar and whichever view the auth phase
 * selects.
 */
use eframe::egui;

use authgate::egui_app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Authgate",
        options,
        Box::new(|_cc| Ok(Box::new(AuthgateApp::default()))),
    )
}

/// Main application state
struct AuthgateApp {
    state: AppState,
}

impl Default for AuthgateApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for AuthgateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.process_auth_events();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
