//! Port traits for the boundaries the validator's callers cross.
//!
//! The validator itself is pure; only record loading and asset loading touch
//! the outside world, and they do so through these traits. Implementations
//! live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::{FileSystem, PortError};
