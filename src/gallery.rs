//! Gallery module: remote file descriptors and their classification.
//!
//! A gallery is a flat list of `{name, hash}` descriptors served by a
//! hash-addressed file registry. This module knows how to list it, how to
//! fetch an asset's bytes, and how to pick a decorative backdrop image.

mod client;
mod model;
mod pick;

pub use client::*;
pub use model::*;
pub use pick::*;
