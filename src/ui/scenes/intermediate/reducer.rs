use crate::ui::mvi::{Effect, Reducer};
use crate::ui::route::{Presents, RouteCase, RouteScope, Routed};
use crate::ui::scenes::leaf::{LeafIntent, LeafReducer, LeafState};

use super::intent::{IntermediateIntent, IntermediateRouteIntent};
use super::state::{IntermediateRoute, IntermediateRouteTag, IntermediateState};

const SCENE: &str = "IntermediateScene";

/// [`IntermediateRoute::Leaf`] bound to [`LeafReducer`].
pub struct LeafCase;

impl RouteCase for LeafCase {
    type Route = IntermediateRoute;
    type RouteIntent = IntermediateRouteIntent;
    type Child = LeafReducer;

    const TAG: IntermediateRouteTag = IntermediateRouteTag::Leaf;

    fn state(route: &IntermediateRoute) -> Option<&LeafState> {
        match route {
            IntermediateRoute::Leaf(state) => Some(state),
        }
    }

    fn state_mut(route: &mut IntermediateRoute) -> Option<&mut LeafState> {
        match route {
            IntermediateRoute::Leaf(state) => Some(state),
        }
    }

    fn extract(intent: IntermediateRouteIntent) -> Result<LeafIntent, IntermediateRouteIntent> {
        match intent {
            IntermediateRouteIntent::Leaf(intent) => Ok(intent),
        }
    }

    fn embed(intent: LeafIntent) -> IntermediateRouteIntent {
        IntermediateRouteIntent::Leaf(intent)
    }
}

pub struct IntermediateReducer;

impl Reducer for IntermediateReducer {
    type State = IntermediateState;
    type Intent = IntermediateIntent;

    fn reduce(state: &mut Self::State, intent: Self::Intent) -> Effect<Self::Intent> {
        match intent {
            IntermediateIntent::PresentLeaf(true) => {
                let leaf = LeafState::new(state.letter_id.clone());
                *state.route_mut() = Some(IntermediateRoute::Leaf(leaf));
                Effect::none()
            }

            IntermediateIntent::PresentLeaf(false) => {
                *state.route_mut() = None;
                Effect::none()
            }

            IntermediateIntent::Route(intent) => {
                let (effect, outcome) = RouteScope::new(SCENE, state.route_mut(), intent)
                    .case::<LeafCase>()
                    .finish();
                let mut effect = effect.map(IntermediateIntent::Route);
                if let Some(tag) = outcome.dismissed() {
                    effect.merge(Self::reduce(
                        state,
                        IntermediateIntent::presentation(tag, false),
                    ));
                }
                effect
            }

            // Parent takes care of this
            IntermediateIntent::Dismiss => Effect::none(),
        }
    }
}
