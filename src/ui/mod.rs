//! User interface module - terminal output.

pub mod formatter;

pub use formatter::{
    display_error, display_platform, display_update_status, display_version,
    format_update_status,
};
