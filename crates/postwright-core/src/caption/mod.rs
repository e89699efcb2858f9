//! Caption generation for shared images.
//!
//! A [`CaptionGenerator`] validates the image, renders the instruction
//! template and hands one request to a [`CaptionProvider`]. The only
//! provider today is Gemini's `generateContent` API.

pub(crate) mod gemini;
pub(crate) mod generator;
pub(crate) mod prompt;
pub(crate) mod provider;

pub use gemini::GeminiProvider;
pub use generator::{read_image, CaptionGenerator};
pub use prompt::{build_prompt, CAPTION_INSTRUCTIONS};
pub use provider::{CaptionProvider, CaptionRequest, ImageInput};
