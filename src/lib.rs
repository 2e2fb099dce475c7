use std::sync::Arc;

use axum::Router;

pub mod api;
pub mod config;
pub mod groq;
pub mod logbook;
pub mod prompt;

pub use api::build_app;
pub use config::AppConfig;
pub use groq::GroqClient;
pub use logbook::InteractionLog;

/// Shared per-request dependencies. Cheap to clone; the client and the log
/// are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub groq: Arc<GroqClient>,
    pub log: Arc<InteractionLog>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            groq: Arc::new(GroqClient::new(
                &config.api_key,
                &config.model,
                &config.base_url,
                config.timeout_ms,
            )),
            log: Arc::new(InteractionLog::new(&config.log_file)),
        }
    }
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server failed");
}
