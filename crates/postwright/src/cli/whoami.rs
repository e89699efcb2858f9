//! The `postwright whoami` command: check which member a token belongs to.

use clap::Args;
use postwright_core::FeedPublisher;

use super::setup::{load_config, require_token};

/// Arguments for the `whoami` command.
#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// LinkedIn access token
    #[arg(long, env = "LINKEDIN_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Execute the whoami command.
pub async fn execute(args: WhoamiArgs) -> anyhow::Result<()> {
    let token = require_token(args.token)?;
    let config = load_config(None)?;

    let identity = FeedPublisher::new(&config.publish)?
        .resolve_identity(&token)
        .await?;

    println!("{}", identity.person_urn());
    if let Some(name) = &identity.name {
        println!("name:  {name}");
    }
    if let Some(email) = &identity.email {
        println!("email: {email}");
    }
    Ok(())
}
