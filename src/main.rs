use battlog::commands::Cli;
use battlog::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("battlog=debug")))
            .with_target(false)
            .init();
    }

    if let Err(e) = Cli::menu().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
