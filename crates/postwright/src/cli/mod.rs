//! Command implementations.

pub mod caption;
pub mod config;
pub mod post;
pub mod setup;
pub mod whoami;
