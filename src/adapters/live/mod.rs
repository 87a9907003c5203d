//! Live adapters backed by the real system.

pub mod filesystem;

pub use filesystem::LiveFileSystem;
