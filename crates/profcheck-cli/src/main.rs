mod analyze;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "profcheck-cli")]
#[command(about = "Offline fake-profile analysis from screenshots or OCR text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a profile and print the verdict as JSON
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        followers: Option<u64>,

        #[arg(long)]
        following: Option<u64>,

        #[arg(long)]
        posts: Option<u64>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        /// All posts were made on the same day
        #[arg(long)]
        posted_same_day: bool,
    },
    /// Print the fields read from a screenshot or OCR text as JSON
    Extract {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where profile text comes from. Both are optional for `analyze`, where
/// typed fields alone are enough.
#[derive(Debug, Args, PartialEq, Eq)]
#[group(multiple = false)]
struct SourceArgs {
    /// Screenshot to run through OCR
    #[arg(long)]
    image: Option<PathBuf>,

    /// Pre-recognized text file, or `-` for stdin
    #[arg(long)]
    text: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = profcheck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            source,
            followers,
            following,
            posts,
            username,
            bio,
            posted_same_day,
        } => {
            let overrides = profcheck_core::FieldOverrides {
                followers,
                following,
                posts,
                username,
                bio,
            };
            analyze::run_analyze(&config, &source, &overrides, posted_same_day).await?;
        }
        Commands::Extract { source } => {
            if source.image.is_none() && source.text.is_none() {
                anyhow::bail!("extract needs --image or --text");
            }
            analyze::run_extract(&config, &source).await?;
        }
    }

    Ok(())
}
