mod commands;
mod error;
mod k8s;
mod models;
mod utils;
use clap::{Parser, Subcommand};
use colored::*;
use k8s::KubeOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
// Invoked by kubectl as `kubectl helper ...`
#[command(
    name = "kubectl-helper",
    about = "Helper commands for kubectl",
    author,
    version,
    long_about = None
)]
struct Cli {
    /// Path to the kubeconfig file to use instead of the default discovery
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,
    /// Name of the kubeconfig context to use
    #[arg(long, global = true)]
    context: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pods containing SEARCH_PATTERN in their name, along with IP and node info
    Ip {
        /// Case-insensitive substring of the pod name
        #[arg(value_name = "SEARCH_PATTERN")]
        pattern: Option<String>,
        /// Namespace to filter pods. Searches all namespaces if omitted.
        #[arg(short, long)]
        namespace: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` directives, falling back to `warn` when none are given.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // kube is built with rustls; pick the crypto provider once per process.
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls crypto provider"))?;

    let kube_opts = KubeOptions {
        kubeconfig: cli.kubeconfig,
        context: cli.context,
    };

    match cli.command {
        Commands::Ip { pattern, namespace } => {
            commands::ip::run(&kube_opts, namespace, pattern).await?;
        }
    }
    Ok(())
}
