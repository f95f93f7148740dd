//! Pixel Forge — procedural pixel-art asset generation for games.
//!
//! Deterministically synthesizes scene backgrounds, character sprites, and
//! interactive-element icons from symbolic type names, caches the encoded
//! results per namespaced identifier, and enriches nested game data with the
//! resolved images — no art pipeline, no network, no asset files at runtime.

pub mod core;
pub mod schema;
