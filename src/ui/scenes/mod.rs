//! The three-level demo hierarchy: app → intermediate → leaf.
//!
//! Each scene is a feature module in the usual MVI layout:
//! - `state.rs` - Scene state and its route union
//! - `intent.rs` - Local, routed and external intents
//! - `reducer.rs` - State transitions and route case bindings

pub mod app;
pub mod intermediate;
pub mod leaf;
