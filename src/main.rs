use clap::Parser;
use glossa::cli::{Cli, Commands};
use glossa::types::config::Config;
use glossa::GlossaResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> GlossaResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        // Use config value if no flag was specified
        config.general.log_level.clone()
    };

    // Initialize logging with appropriate level
    let filter = EnvFilter::from_default_env().add_directive(
        format!("glossa={}", log_level)
            .parse()
            .unwrap_or_else(|_| "glossa=info".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            glossa::cli::commands::init(path).await?;
        }
        Commands::Translate { texts, from, to } => {
            glossa::cli::commands::translate(&texts, &from, &to, &config).await?;
        }
        Commands::Status => {
            glossa::cli::commands::status(&config).await?;
        }
        Commands::Config => {
            glossa::cli::commands::config_cmd(&cli.config).await?;
        }
        Commands::Doctor => {
            glossa::cli::commands::doctor(&config).await?;
        }
        Commands::Version => {
            glossa::cli::commands::version();
        }
    }

    Ok(())
}
