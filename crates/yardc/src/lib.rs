#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod signing;
pub mod telemetry;

pub use config::Config;
pub use signing::{SigningError, TokenSigner, VerificationError};
