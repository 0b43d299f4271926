//! Intermediate scene: presents a single leaf as a sheet.

mod intent;
mod reducer;
mod state;

pub use intent::{IntermediateIntent, IntermediateRouteIntent};
pub use reducer::{IntermediateReducer, LeafCase};
pub use state::{IntermediateRoute, IntermediateRouteTag, IntermediateState};
