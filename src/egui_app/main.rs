/**
 * egui Native Desktop App - Main Entry Point
 *
 * Implements eframe::App for the login client.
 */
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use loginflow::egui_app::theme::styles;
use loginflow::egui_app::{views, AppState, Config, GraphqlAuthClient};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let client = GraphqlAuthClient::new(&config)?;
    tracing::info!(endpoint = client.endpoint(), "Starting login client");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([520.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Login",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(LoginApp {
                state: AppState::new(config, Arc::new(client)),
            }))
        }),
    )?;

    Ok(())
}

struct LoginApp {
    state: AppState,
}

impl eframe::App for LoginApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.tick(now);

        views::render_main_panel(ctx, &mut self.state, now);

        // Poll while a request is out, and animate the toast bar until its
        // deadline so expiry fires without input.
        if self.state.flow.is_busy() {
            ctx.request_repaint_after(FRAME_INTERVAL);
        } else if let Some(deadline) = self.state.flow.toaster().deadline() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            ctx.request_repaint_after(remaining.min(FRAME_INTERVAL));
        }
    }
}
