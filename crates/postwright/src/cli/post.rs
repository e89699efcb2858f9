//! The `postwright post` command: caption an image and publish it.

use clap::Args;
use console::style;
use postwright_core::Submission;
use std::path::PathBuf;

use super::setup::{build_pipeline, load_config, require_token};

/// Arguments for the `post` command.
#[derive(Args, Debug)]
pub struct PostArgs {
    /// Image to caption and share
    #[arg(short, long)]
    pub image: PathBuf,

    /// What the image is about (used as context for the caption)
    #[arg(short, long, default_value = "")]
    pub prompt: String,

    /// LinkedIn access token
    #[arg(long, env = "LINKEDIN_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// MIME type of the image (defaults to the configured type)
    #[arg(long)]
    pub mime_type: Option<String>,

    /// Generate the caption but do not publish
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the post command.
pub async fn execute(args: PostArgs) -> anyhow::Result<()> {
    let config = load_config(args.mime_type.as_deref())?;
    let token = if args.dry_run {
        String::new()
    } else {
        require_token(args.token)?
    };
    let postwright = build_pipeline(&config)?;

    if args.dry_run {
        let caption = postwright
            .caption_only(&args.prompt, Some(args.image.as_path()))
            .await?;
        println!("{caption}");
        eprintln!("{}", style("Dry run: nothing was published.").yellow());
        return Ok(());
    }

    let report = postwright
        .submit(&Submission {
            credential: token,
            prompt: args.prompt,
            image_path: Some(args.image),
        })
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.caption);
    eprintln!(
        "{} Posted to LinkedIn as {}{}",
        style("✓").green().bold(),
        report
            .identity
            .name
            .as_deref()
            .unwrap_or(&report.identity.subject_id),
        report
            .outcome
            .post_id
            .as_deref()
            .map(|id| format!(" ({id})"))
            .unwrap_or_default()
    );
    Ok(())
}
