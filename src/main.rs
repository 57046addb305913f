use gungnir::server::{self, config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gungnir=info,tower_http=info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let compute = startup::build_compute_client(&config).unwrap();
    let listener = startup::bind_listener(&config).await.unwrap();

    tracing::info!("Starting server on {}", config.listen_addr);

    let router = server::router::routes().with_state(AppState::new(compute, config));

    axum::serve(listener, router).await.unwrap();
}
