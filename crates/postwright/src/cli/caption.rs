//! The `postwright caption` command: generate a caption without posting.

use clap::Args;
use std::path::PathBuf;

use super::setup::{build_pipeline, load_config};

/// Arguments for the `caption` command.
#[derive(Args, Debug)]
pub struct CaptionArgs {
    /// Image to caption
    #[arg(short, long)]
    pub image: PathBuf,

    /// What the image is about
    #[arg(short, long, default_value = "")]
    pub prompt: String,

    /// MIME type of the image (defaults to the configured type)
    #[arg(long)]
    pub mime_type: Option<String>,
}

/// Execute the caption command.
pub async fn execute(args: CaptionArgs) -> anyhow::Result<()> {
    let config = load_config(args.mime_type.as_deref())?;
    let postwright = build_pipeline(&config)?;

    let caption = postwright
        .caption_only(&args.prompt, Some(args.image.as_path()))
        .await?;
    println!("{caption}");
    Ok(())
}
