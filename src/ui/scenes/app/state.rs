use std::fmt;

use crate::ui::mvi::UiState;
use crate::ui::route::{RouteUnion, Routed};
use crate::ui::scenes::intermediate::IntermediateState;

use super::reducer::{IntermediateACase, IntermediateBCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    IntermediateA(IntermediateState),
    IntermediateB(IntermediateState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRouteTag {
    IntermediateA,
    IntermediateB,
}

impl RouteUnion for AppRoute {
    type Tag = AppRouteTag;

    fn tag(&self) -> Self::Tag {
        match self {
            AppRoute::IntermediateA(_) => AppRouteTag::IntermediateA,
            AppRoute::IntermediateB(_) => AppRouteTag::IntermediateB,
        }
    }
}

impl AppRoute {
    /// Wrap `state` in the variant named by `tag`.
    pub fn from_tag(tag: AppRouteTag, state: IntermediateState) -> Self {
        match tag {
            AppRouteTag::IntermediateA => AppRoute::IntermediateA(state),
            AppRouteTag::IntermediateB => AppRoute::IntermediateB(state),
        }
    }
}

impl AppRouteTag {
    /// Letter carried by scenes presented under this variant.
    pub fn letter_id(self) -> &'static str {
        match self {
            AppRouteTag::IntermediateA => "A",
            AppRouteTag::IntermediateB => "B",
        }
    }
}

impl fmt::Display for AppRouteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppRouteTag::IntermediateA => f.write_str("intermediate-a"),
            AppRouteTag::IntermediateB => f.write_str("intermediate-b"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub route: Option<AppRoute>,
}

impl UiState for AppState {}

impl Routed for AppState {
    type Route = AppRoute;

    fn route(&self) -> Option<&Self::Route> {
        self.route.as_ref()
    }

    fn route_mut(&mut self) -> &mut Option<Self::Route> {
        &mut self.route
    }
}

impl AppState {
    pub fn intermediate_a(&self) -> Option<&IntermediateState> {
        self.case_state::<IntermediateACase>()
    }

    pub fn intermediate_b(&self) -> Option<&IntermediateState> {
        self.case_state::<IntermediateBCase>()
    }
}
