mod chat;
mod cli;
mod env_file;
mod init;
mod terminal;

use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file before anything reads the environment
    env_file::load_dotenv();

    let args = cli::parse();

    // Config first so its log level can apply; report failures once logging is up
    let loaded = match &args.config {
        Some(path) => guru_config::load_config_from(path),
        None => guru_config::load_config(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (guru_config::GuruConfig::default(), Some(e)),
    };

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = match log_directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Grammar Guru v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = guru_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let orchestrator = match init::build_orchestrator(&config, &args) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            eprintln!("guru: {e}");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(terminal::run(orchestrator, config.chat.confirm_reset)) {
        tracing::error!("Chat loop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
