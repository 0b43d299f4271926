use std::fmt::Debug;

use crate::ui::mvi::Reducer;

use super::union::{RouteUnion, TagOf};

pub type ChildState<C> = <<C as RouteCase>::Child as Reducer>::State;

/// Binds one variant of a parent's route to the child reducer living in it.
///
/// Implementations are zero-sized markers; all methods are plain projections
/// between the parent's route/intent enums and the child's state/intent.
pub trait RouteCase {
    /// The parent's route union.
    type Route: RouteUnion;

    /// The parent's wrapped route-intent enum.
    type RouteIntent: Debug;

    /// Reducer for the child scene stored in this case.
    type Child: Reducer;

    const TAG: TagOf<Self::Route>;

    fn state(route: &Self::Route) -> Option<&<Self::Child as Reducer>::State>;

    fn state_mut(route: &mut Self::Route) -> Option<&mut <Self::Child as Reducer>::State>;

    /// Unwrap a route intent addressed to this case, or hand it back.
    fn extract(
        intent: Self::RouteIntent,
    ) -> Result<<Self::Child as Reducer>::Intent, Self::RouteIntent>;

    fn embed(intent: <Self::Child as Reducer>::Intent) -> Self::RouteIntent;
}
