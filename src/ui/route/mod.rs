//! Route unions and parent/child scene composition.
//!
//! A scene owns at most one active child, stored as `Option<Route>`. Route
//! intents addressed to a child are forwarded through a [`RouteScope`], which
//! only delivers them while the parent's slot still holds that child's case.

mod case;
mod diagnostic;
mod scope;
mod union;

pub use case::{ChildState, RouteCase};
pub use diagnostic::Diagnostic;
pub use scope::{RouteScope, ScopeOutcome};
pub use union::{Presents, RouteUnion, Routed, TagOf};
