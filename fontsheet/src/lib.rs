pub mod types;
pub mod error;
pub mod image;
pub mod grid;
pub mod bits;
pub mod encode;
pub mod emit;
#[cfg(feature = "serde")]
pub mod config;
pub mod sheet;
