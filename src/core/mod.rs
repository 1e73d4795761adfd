//! # Core Module
//!
//! Shared-ownership primitives used throughout the crate.
//!
//! ## Key Components
//! - `MtResource`: Thread-safe reference-counted resource with read-write locking,
//!   used to share one host world between the server and every player on it

pub mod mt_resource;

pub use mt_resource::MtResource;
