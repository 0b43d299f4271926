//! Leaf scene: no children, only asks to be dismissed.

mod intent;
mod reducer;
mod state;

pub use intent::LeafIntent;
pub use reducer::LeafReducer;
pub use state::LeafState;
