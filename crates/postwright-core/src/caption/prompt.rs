//! Instruction template sent alongside every image.

/// Fixed writing instructions for the caption model.
pub const CAPTION_INSTRUCTIONS: &str = "You're a professional content writer crafting a single \
high-quality LinkedIn post. Given the image and topic, write a detailed, thoughtful, motivational \
caption suitable for a LinkedIn post. Make it sound natural, inspiring, and related to career, \
mindset, or growth. Don't add any markdown, have a clean plain text, emojis if needed. Add 3–5 \
relevant hashtags. Return only the post text. No text before or after.";

/// Combine the fixed instructions with the caller's image context.
pub fn build_prompt(context: &str) -> String {
    format!("{CAPTION_INSTRUCTIONS}\n\nImage context: {context}")
}
