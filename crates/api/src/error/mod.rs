//! Error handling for the signature engine

pub mod types;
pub mod validate;

pub use types::{Error, Result};
