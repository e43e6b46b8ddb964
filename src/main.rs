// Product Scout GUI - Main Entry Point
// Native desktop front-end for AI-generated product market research

mod state;
mod ui;

use eframe::egui;
use product_scout_backend::config::Config;
use product_scout_backend::research::{GeminiClient, ResearchOrchestrator, Submission};
use state::AppState;
use std::sync::Arc;
use ui::render_app_layout;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Missing credentials are fatal before any window opens
    let config = Config::from_env()?;
    let client = GeminiClient::new(&config.gemini)?;
    let orchestrator = Arc::new(ResearchOrchestrator::new(
        Arc::new(client),
        config.research.max_idea_length,
    ));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Product Scout AI")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Product Scout AI",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(ProductScoutApp::new(orchestrator, runtime))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}

/// Main application struct
/// Renders from the orchestrator's state and forwards submissions to it
struct ProductScoutApp {
    /// Edited idea and UI preferences
    state: AppState,
    /// Owns the request state machine
    orchestrator: Arc<ResearchOrchestrator>,
    /// Runs submissions off the UI thread
    runtime: tokio::runtime::Runtime,
}

impl ProductScoutApp {
    /// Create a new application instance
    fn new(orchestrator: Arc<ResearchOrchestrator>, runtime: tokio::runtime::Runtime) -> Self {
        Self {
            state: AppState::new(),
            orchestrator,
            runtime,
        }
    }

    /// Start a submission for the current idea
    /// The orchestrator rejects blank ideas itself, so this never pre-filters
    fn submit(&self, ctx: &egui::Context) -> tokio::task::JoinHandle<()> {
        let orchestrator = self.orchestrator.clone();
        let idea = self.state.idea.clone();
        let ctx = ctx.clone();
        tracing::info!(idea_len = idea.len(), "Dispatching research submission");
        self.runtime.spawn(async move {
            if let Submission::Superseded = orchestrator.submit(&idea).await {
                tracing::debug!("Research submission superseded by a newer one");
            }
            ctx.request_repaint();
        })
    }
}

impl eframe::App for ProductScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let request = self.orchestrator.state();
        if render_app_layout(ctx, &mut self.state, &request) {
            // Completion triggers its own repaint
            let _ = self.submit(ctx);
            ctx.request_repaint();
        }
        if request.is_loading() {
            // Keep the spinner moving
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
