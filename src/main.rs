//! Egress Verify: check DNS and HTTPS egress to the endpoints a cluster install needs.

mod catalog;
mod egress;
mod probe;
mod reporter;
mod runtime;
mod summary;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "egress-verify",
    about = "Verify resources are configured correctly for cluster install"
)]
struct Cli {
    /// Use a specific credentials profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify resources are configured correctly for cluster install
    #[command(subcommand)]
    Verify(Verify),
}

#[derive(Subcommand, Debug)]
enum Verify {
    /// Verify egress is ok for cluster install
    #[command(
        long_about = "Verify egress checks whether DNS and egress access works to a set of domains/urls.",
        after_help = "Example:\n  # Verify egress is configured correctly\n  egress-verify verify egress"
    )]
    Egress(EgressArgs),
}

#[derive(Args, Debug)]
struct EgressArgs {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode
    #[arg(long)]
    pub quiet: bool,

    /// Request timeout per URL in seconds
    #[arg(long, default_value_t = probe::DEFAULT_PROBE_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl EgressArgs {
    fn options(&self) -> egress::EgressOptions {
        egress::EgressOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let rt = runtime::Runtime::new(cli.profile);

    match cli.command {
        Command::Verify(Verify::Egress(args)) => egress::run(&rt, &args.options()).await,
    }
}
