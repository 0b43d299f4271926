//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every scene of the navigation tree is built from these traits.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │          └──→ Effect         │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Snapshot of one scene, including its optional child route
//! - **Intent**: User actions, child intents and external events
//! - **Reducer**: Mutates state in place and describes follow-up work
//! - **Effect**: Follow-up intents and diagnostics for the store to handle

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::{Command, Effect};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
