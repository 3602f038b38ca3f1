// SPDX-License-Identifier: MPL-2.0
use crate::domain::surface::SurfaceId;
use crate::pill::PillId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The host surface has no area, so the pill cannot be centred on it.
    DegenerateSurface { width: f32, height: f32 },
    /// The configured text does not fit inside the pill.
    FontTooLarge { text_size: f32, height: f32 },
    /// A pill dimension is zero.
    InvalidSize { width: f32, height: f32 },
    UnknownSurface(SurfaceId),
    UnknownPill(PillId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::DegenerateSurface { width, height } => {
                write!(f, "Surface must have a non-zero size (got {}x{})", width, height)
            }
            Error::FontTooLarge { text_size, height } => write!(
                f,
                "Text size {} does not fit in a pill of height {}",
                text_size, height
            ),
            Error::InvalidSize { width, height } => {
                write!(f, "Pill size must be non-zero (got {}x{})", width, height)
            }
            Error::UnknownSurface(id) => write!(f, "No surface attached with id {}", id),
            Error::UnknownPill(id) => write!(f, "No pill registered with id {}", id),
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
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
