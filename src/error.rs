// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::indicator::MIN_VISIBLE_DOT_COUNT;

#[derive(Debug, Clone)]
pub enum Error {
    /// The indicator was configured with fewer visible dots than the hard
    /// floor of [`MIN_VISIBLE_DOT_COUNT`].
    VisibleDotCount { requested: usize },
    Io(String),
    Toml(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::VisibleDotCount { requested } => write!(
                f,
                "visible dot count cannot be smaller than {} (got {})",
                MIN_VISIBLE_DOT_COUNT, requested
            ),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Toml(e) => write!(f, "TOML Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Toml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
