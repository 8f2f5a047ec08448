//! Helper functions for presenting posts
//!
//! URL building and date formatting shared by the commands.

mod date;
mod url;

pub use date::*;
pub use url::*;
