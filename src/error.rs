//! Error types shared by the animator, the materials and the config loader.

use thiserror::Error;

/// Errors produced while building processors, materials or configs.
///
/// An absent input mesh is *not* an error: the animator simply produces no
/// output for that frame.
#[derive(Error, Debug)]
pub enum Error {
    /// Phong shininess must be a finite, non-negative exponent.
    #[error("Invalid shininess exponent: {0} (must be finite and >= 0)")]
    InvalidShininess(f32),

    /// A float property was set to NaN or an infinity.
    #[error("Property '{identifier}' cannot take non-finite value {value}")]
    NonFiniteProperty {
        /// Identifier of the property being set
        identifier: String,
        /// The rejected value
        value: f32,
    },

    /// The config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON config could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
