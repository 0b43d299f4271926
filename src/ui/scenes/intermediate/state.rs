use crate::ui::mvi::UiState;
use crate::ui::route::{RouteUnion, Routed};
use crate::ui::scenes::leaf::LeafState;

use super::reducer::LeafCase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntermediateRoute {
    Leaf(LeafState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntermediateRouteTag {
    Leaf,
}

impl RouteUnion for IntermediateRoute {
    type Tag = IntermediateRouteTag;

    fn tag(&self) -> Self::Tag {
        match self {
            IntermediateRoute::Leaf(_) => IntermediateRouteTag::Leaf,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntermediateState {
    pub route: Option<IntermediateRoute>,
    /// "A" or "B"
    pub letter_id: String,
}

impl UiState for IntermediateState {}

impl Routed for IntermediateState {
    type Route = IntermediateRoute;

    fn route(&self) -> Option<&Self::Route> {
        self.route.as_ref()
    }

    fn route_mut(&mut self) -> &mut Option<Self::Route> {
        &mut self.route
    }
}

impl IntermediateState {
    pub fn new(letter_id: impl Into<String>) -> Self {
        Self {
            route: None,
            letter_id: letter_id.into(),
        }
    }

    /// Same scene with its leaf already presented.
    pub fn with_leaf(letter_id: impl Into<String>) -> Self {
        let letter_id = letter_id.into();
        Self {
            route: Some(IntermediateRoute::Leaf(LeafState::new(letter_id.clone()))),
            letter_id,
        }
    }

    pub fn leaf(&self) -> Option<&LeafState> {
        self.case_state::<LeafCase>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_ignores_payload() {
        let a = IntermediateRoute::Leaf(LeafState::new("A"));
        let b = IntermediateRoute::Leaf(LeafState::new("B"));
        assert_ne!(a, b);
        assert_eq!(a.tag(), b.tag());
    }

    #[test]
    fn new_has_no_route() {
        let state = IntermediateState::new("A");
        assert!(state.route_tag().is_none());
        assert!(state.leaf().is_none());
    }

    #[test]
    fn with_leaf_shares_letter() {
        let state = IntermediateState::with_leaf("B");
        assert_eq!(state.route_tag(), Some(IntermediateRouteTag::Leaf));
        assert_eq!(state.leaf().map(|leaf| leaf.letter_id.as_str()), Some("B"));
    }
}
