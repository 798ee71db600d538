use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use learnloop::cli::{Cli, Command};
use learnloop::commands;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so piped output stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let ok = match cli.command {
        Command::Plans { command } => commands::plans::run(&cli.global, command).await,
        Command::Progress { command } => commands::progress::run(&cli.global, command).await,
        Command::Notifications { command } => {
            commands::notifications::run(&cli.global, command).await
        }
        Command::Session { command } => commands::session::run(command),
    };

    if !ok {
        std::process::exit(1);
    }
}
