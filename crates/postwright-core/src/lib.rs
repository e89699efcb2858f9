//! Postwright Core - caption an image and share it to LinkedIn.
//!
//! A submission is a strict, single-attempt chain of remote calls:
//!
//! ```text
//! Image + prompt → Gemini caption → LinkedIn userinfo → registerUpload → PUT image → ugcPosts
//! ```
//!
//! Any failure stops the chain and is reported with the stage that failed
//! and the remote service's raw response.
//!
//! # Usage
//!
//! ```rust,ignore
//! use postwright_core::{config::require_secret, Config, Postwright, Submission};
//!
//! #[tokio::main]
//! async fn main() -> postwright_core::Result<()> {
//!     let config = Config::load()?;
//!     let api_key = require_secret(&config.caption.api_key)?;
//!     let postwright = Postwright::from_config(&config, &api_key)?;
//!
//!     let report = postwright
//!         .submit(&Submission {
//!             credential: "AQX...".into(),
//!             prompt: "first day at the new job".into(),
//!             image_path: Some("./desk.jpg".into()),
//!         })
//!         .await?;
//!     println!("{}", report.caption);
//!     Ok(())
//! }
//! ```

pub mod caption;
pub mod config;
pub mod error;
mod http;
pub mod publish;
pub mod workflow;

pub use caption::{CaptionGenerator, CaptionProvider, GeminiProvider};
pub use config::Config;
pub use error::{
    CaptionError, CaptionErrorCategory, ConfigError, PostwrightError, PublishError, PublishStage,
    Result,
};
pub use publish::{FeedPublisher, PublishOutcome, UserIdentity};
pub use workflow::{Postwright, Submission, SubmissionReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
