//! Postwright CLI - caption an image with Gemini and share it to LinkedIn.
//!
//! # Usage
//!
//! ```bash
//! # Caption and publish
//! postwright post --image desk.jpg --prompt "first day at the new job"
//!
//! # Preview a caption without publishing
//! postwright caption --image desk.jpg --prompt "first day at the new job"
//!
//! # Check which account a token belongs to
//! postwright whoami
//!
//! # View configuration
//! postwright config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Postwright - caption an image and share it to your LinkedIn feed.
#[derive(Parser, Debug)]
#[command(name = "postwright")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a caption and publish it with the image
    Post(cli::post::PostArgs),

    /// Generate a caption only
    Caption(cli::caption::CaptionArgs),

    /// Show the LinkedIn member an access token belongs to
    Whoami(cli::whoami::WhoamiArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match postwright_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `postwright config path`."
            );
            postwright_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Postwright v{}", postwright_core::VERSION);

    match cli.command {
        Commands::Post(args) => cli::post::execute(args).await,
        Commands::Caption(args) => cli::caption::execute(args).await,
        Commands::Whoami(args) => cli::whoami::execute(args).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
