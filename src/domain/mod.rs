//! Domain logic - pure rules independent of the network

pub mod release;
pub mod version;

pub use release::{Project, Release};
pub use version::{compare, SemVer};
