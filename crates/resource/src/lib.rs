//! Resource providers for the condominium report engine.
//!
//! This crate provides platform-specific implementations of the
//! `ResourceProvider` trait from condo-traits.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: Loads uploaded media from a local directory
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from condo-traits:
//! - [`InMemoryResourceProvider`]: Pre-populated in-memory storage

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use condo_traits::InMemoryResourceProvider;
