use tracing::info;

use helalgpt_service::{build_app, run_server, AppConfig, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let state = AppState::new(&config);
    let app = build_app(state);

    info!("serving {} on 0.0.0.0:{port}", config.model);
    run_server(app, port).await;
}
