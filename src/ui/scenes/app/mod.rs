//! Root scene: pushes one of two intermediate scenes and accepts deep links.

mod intent;
mod reducer;
mod state;

pub use intent::{AppIntent, AppRouteIntent};
pub use reducer::{AppReducer, IntermediateACase, IntermediateBCase};
pub use state::{AppRoute, AppRouteTag, AppState};
