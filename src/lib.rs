//! Hierarchical scene navigation driven by composable reducers.
//!
//! A tree of scenes, each owning an optional child route, is driven by one
//! store. Parents forward route intents only to the child that is currently
//! active; intents addressed to a child that is no longer shown are dropped
//! and reported instead of being applied to whatever replaced it.

pub mod config;
pub mod console;
pub mod logging;
pub mod ui;
