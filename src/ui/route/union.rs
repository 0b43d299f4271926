use std::fmt::Debug;

use crate::ui::mvi::{Intent, UiState};

use super::case::{ChildState, RouteCase};

/// Closed set of "child is active with this payload" variants.
pub trait RouteUnion: Clone + PartialEq + Debug + Send + 'static {
    /// Payload-free identifier of a variant.
    type Tag: Copy + Eq + Debug + Send + 'static;

    /// Variant discriminant. Total; never looks at the payload.
    fn tag(&self) -> Self::Tag;
}

pub type TagOf<R> = <R as RouteUnion>::Tag;

/// Scene state that owns an optional child route.
pub trait Routed: UiState {
    type Route: RouteUnion;

    fn route(&self) -> Option<&Self::Route>;

    fn route_mut(&mut self) -> &mut Option<Self::Route>;

    /// `None` when no child is active.
    fn route_tag(&self) -> Option<TagOf<Self::Route>> {
        self.route().map(RouteUnion::tag)
    }

    /// Child state for case `C`, if `C` is the active case.
    fn case_state<C>(&self) -> Option<&ChildState<C>>
    where
        C: RouteCase<Route = Self::Route>,
    {
        self.route().and_then(C::state)
    }
}

/// Intents of a scene that can present or dismiss its children.
pub trait Presents: Intent {
    type Tag: Copy + Eq + Debug + Send + 'static;

    /// The "present `tag`: `presented`" intent.
    fn presentation(tag: Self::Tag, presented: bool) -> Self;
}
