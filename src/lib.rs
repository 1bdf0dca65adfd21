#![doc = include_str!("../README.md")]

pub(crate) mod error;
pub(crate) mod frames;
pub(crate) mod indicator;
pub(crate) mod line;
pub(crate) mod paint;
pub(crate) mod render;

#[cfg(test)]
mod test;

/// Re-exports of all public types.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::frames::Frames;
    pub use crate::indicator::Indicator;
}

pub use crate::prelude::*;
