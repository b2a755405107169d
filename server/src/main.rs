mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing `.env` file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let leptos_options = match config::leptos_options() {
        Ok(options) => options,
        Err(e) => {
            tracing::error!(error = %e, "invalid leptos configuration");
            std::process::exit(1);
        }
    };

    let config = match config::ServerConfig::from_env(leptos_options.site_addr) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = routes::app(leptos_options);
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "carfindr listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
