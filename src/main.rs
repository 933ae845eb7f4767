use a11ylens::{cli, config, errors};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let result = match cli.command {
        cli::Commands::Run(args) => cli::run::handle_run(args, cli.quiet).await,
        cli::Commands::Analyze(args) => cli::analyze::handle_analyze(args, cli.quiet).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        let class = e.classify();
        tracing::debug!(error_type = class.error_type, fatal = class.fatal, "Run aborted");
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::A11yError> {
    let path = std::path::PathBuf::from(&args.config);
    let parsed = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    println!("  command: {}", parsed.command().display());
    println!("  timeout: {}s", parsed.timeout().as_secs());
    Ok(())
}
