use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linrgb::session;

#[derive(Parser)]
#[command(name = "linrgb")]
#[command(about = "Convert an sRGB color to linear RGB")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a color as "r g b" with each channel in [0, 1] (default)
    Simple,
    /// Choose between decimal, 8-bit integer and hex input
    Multi {
        /// Input format selector (0 = decimal, 1 = integer, 2 = hex); prompts when omitted
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout only carries prompts and the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linrgb=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    let linear = match cli.command {
        None | Some(Commands::Simple) => session::run_simple(stdin, stdout)?,
        Some(Commands::Multi { format }) => {
            session::run_multi(stdin, stdout, format.as_deref())?
        }
    };
    tracing::debug!(%linear, "Conversion complete");

    Ok(())
}
