//! Base trait for scene state in MVI architecture.

use std::fmt::Debug;

/// Marker trait for scene state objects.
///
/// States should be:
/// - Cloneable (views read snapshots, never the live tree)
/// - Comparable (PartialEq for detecting changes)
/// - Constructible empty (Default is the "nothing presented" state)
pub trait UiState: Clone + PartialEq + Debug + Default + Send + 'static {}
