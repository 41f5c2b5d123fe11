//! Application module: exposes the player widget model.
//!
//! The `App` model lives in `app::model` and holds the viewed file, the
//! gallery snapshot and all playback-facing widget state.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
