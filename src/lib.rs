pub mod check;
pub mod config;
pub mod domain;
pub mod error;
pub mod release;
pub mod ui;
pub mod version;

pub use error::{Result, TryReleaseError};
