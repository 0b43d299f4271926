use crate::ui::mvi::{Effect, Reducer};
use crate::ui::route::{Presents, RouteCase, RouteScope, RouteUnion, Routed};
use crate::ui::scenes::intermediate::{IntermediateIntent, IntermediateReducer, IntermediateState};

use super::intent::{AppIntent, AppRouteIntent};
use super::state::{AppRoute, AppRouteTag, AppState};

const SCENE: &str = "AppScene";

/// [`AppRoute::IntermediateA`] bound to [`IntermediateReducer`].
pub struct IntermediateACase;

impl RouteCase for IntermediateACase {
    type Route = AppRoute;
    type RouteIntent = AppRouteIntent;
    type Child = IntermediateReducer;

    const TAG: AppRouteTag = AppRouteTag::IntermediateA;

    fn state(route: &AppRoute) -> Option<&IntermediateState> {
        match route {
            AppRoute::IntermediateA(state) => Some(state),
            _ => None,
        }
    }

    fn state_mut(route: &mut AppRoute) -> Option<&mut IntermediateState> {
        match route {
            AppRoute::IntermediateA(state) => Some(state),
            _ => None,
        }
    }

    fn extract(intent: AppRouteIntent) -> Result<IntermediateIntent, AppRouteIntent> {
        match intent {
            AppRouteIntent::IntermediateA(intent) => Ok(intent),
            other => Err(other),
        }
    }

    fn embed(intent: IntermediateIntent) -> AppRouteIntent {
        AppRouteIntent::IntermediateA(intent)
    }
}

/// [`AppRoute::IntermediateB`] bound to [`IntermediateReducer`].
pub struct IntermediateBCase;

impl RouteCase for IntermediateBCase {
    type Route = AppRoute;
    type RouteIntent = AppRouteIntent;
    type Child = IntermediateReducer;

    const TAG: AppRouteTag = AppRouteTag::IntermediateB;

    fn state(route: &AppRoute) -> Option<&IntermediateState> {
        match route {
            AppRoute::IntermediateB(state) => Some(state),
            _ => None,
        }
    }

    fn state_mut(route: &mut AppRoute) -> Option<&mut IntermediateState> {
        match route {
            AppRoute::IntermediateB(state) => Some(state),
            _ => None,
        }
    }

    fn extract(intent: AppRouteIntent) -> Result<IntermediateIntent, AppRouteIntent> {
        match intent {
            AppRouteIntent::IntermediateB(intent) => Ok(intent),
            other => Err(other),
        }
    }

    fn embed(intent: IntermediateIntent) -> AppRouteIntent {
        AppRouteIntent::IntermediateB(intent)
    }
}

pub struct AppReducer;

impl AppReducer {
    fn present(state: &mut AppState, tag: AppRouteTag, presented: bool) -> Effect<AppIntent> {
        *state.route_mut() =
            presented.then(|| AppRoute::from_tag(tag, IntermediateState::new(tag.letter_id())));
        Effect::none()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: &mut Self::State, intent: Self::Intent) -> Effect<Self::Intent> {
        match intent {
            AppIntent::PresentIntermediateA(presented) => {
                Self::present(state, AppRouteTag::IntermediateA, presented)
            }

            AppIntent::PresentIntermediateB(presented) => {
                Self::present(state, AppRouteTag::IntermediateB, presented)
            }

            AppIntent::Route(intent) => {
                let (effect, outcome) = RouteScope::new(SCENE, state.route_mut(), intent)
                    .case::<IntermediateACase>()
                    .case::<IntermediateBCase>()
                    .finish();
                let mut effect = effect.map(AppIntent::Route);
                if let Some(tag) = outcome.dismissed() {
                    effect.merge(Self::reduce(state, AppIntent::presentation(tag, false)));
                }
                effect
            }

            AppIntent::OpenDeepLink(target) => {
                // Back door: replaces the whole subtree in one write. Intents
                // a view already sent for the previous route arrive stale and
                // are dropped by the route scope.
                let previous = state.route().map(RouteUnion::tag);
                tracing::info!(?previous, %target, "applying deep link");
                *state.route_mut() = Some(target.into_route());
                Effect::none()
            }
        }
    }
}
