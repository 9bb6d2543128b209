//! Word lists for Scrapple
//!
//! Provides the embedded default dictionary plus loading of custom word files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
