use crate::ui::mvi::{Effect, Intent, Reducer};

use super::case::RouteCase;
use super::diagnostic::Diagnostic;
use super::union::{RouteUnion, TagOf};

/// What happened to a route intent after it went through a [`RouteScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeOutcome<T> {
    /// No registered case claimed the intent.
    Unclaimed,

    /// The active child reduced the intent.
    Delivered(T),

    /// The active child reduced its own dismiss intent.
    Dismissed(T),

    /// The intent was addressed to a case other than the active one and was
    /// dropped.
    Stale { active: Option<T>, addressed: T },
}

impl<T: Copy> ScopeOutcome<T> {
    /// Tag of the child asking to be dismissed, if any.
    pub fn dismissed(&self) -> Option<T> {
        match self {
            ScopeOutcome::Dismissed(tag) => Some(*tag),
            _ => None,
        }
    }
}

/// Forwards a parent's route intent to the child reducer of the active case.
///
/// ```ignore
/// let (effect, outcome) = RouteScope::new("AppScene", state.route_mut(), intent)
///     .case::<IntermediateACase>()
///     .case::<IntermediateBCase>()
///     .finish();
/// ```
///
/// The child is reduced in place inside the parent's slot. An intent whose
/// case is not the active one is dropped, logged and reported as
/// [`Diagnostic::StaleRoute`]; it never touches the active subtree.
pub struct RouteScope<'a, R: RouteUnion, I> {
    scene: &'static str,
    route: &'a mut Option<R>,
    pending: Option<I>,
    effect: Effect<I>,
    outcome: ScopeOutcome<TagOf<R>>,
}

impl<'a, R: RouteUnion, I> RouteScope<'a, R, I> {
    pub fn new(scene: &'static str, route: &'a mut Option<R>, intent: I) -> Self {
        Self {
            scene,
            route,
            pending: Some(intent),
            effect: Effect::none(),
            outcome: ScopeOutcome::Unclaimed,
        }
    }

    /// Register case `C`. Once one case has claimed the intent, later
    /// cases are skipped.
    pub fn case<C>(mut self) -> Self
    where
        C: RouteCase<Route = R, RouteIntent = I>,
    {
        let Some(intent) = self.pending.take() else {
            return self;
        };
        let child_intent = match C::extract(intent) {
            Ok(child_intent) => child_intent,
            Err(other) => {
                self.pending = Some(other);
                return self;
            }
        };

        let active = self.route.as_ref().map(RouteUnion::tag);
        match self.route.as_mut().and_then(C::state_mut) {
            Some(child) => {
                let dismiss = child_intent.is_dismiss();
                tracing::debug!(
                    scene = self.scene,
                    case = ?C::TAG,
                    intent = ?child_intent,
                    "forwarding route intent"
                );
                let effect = <C::Child as Reducer>::reduce(child, child_intent);
                self.effect.merge(effect.map(C::embed));
                self.outcome = if dismiss {
                    ScopeOutcome::Dismissed(C::TAG)
                } else {
                    ScopeOutcome::Delivered(C::TAG)
                };
            }
            None => {
                tracing::warn!(
                    scene = self.scene,
                    active = ?active,
                    addressed = ?C::TAG,
                    intent = ?child_intent,
                    "received a child intent while the route was set to a different case; dropped"
                );
                self.effect.merge(Effect::report(Diagnostic::StaleRoute {
                    scene: self.scene,
                    active: active.map(|tag| format!("{tag:?}")),
                    addressed: format!("{:?}", C::TAG),
                }));
                self.outcome = ScopeOutcome::Stale {
                    active,
                    addressed: C::TAG,
                };
            }
        }
        self
    }

    pub fn finish(self) -> (Effect<I>, ScopeOutcome<TagOf<R>>)
    where
        I: std::fmt::Debug,
    {
        if let Some(intent) = &self.pending {
            tracing::debug!(scene = self.scene, ?intent, "route intent matched no case");
        }
        (self.effect, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::scenes::app::{
        AppRoute, AppRouteIntent, AppRouteTag, IntermediateACase, IntermediateBCase,
    };
    use crate::ui::scenes::intermediate::{IntermediateIntent, IntermediateState};

    fn scope(
        route: &mut Option<AppRoute>,
        intent: AppRouteIntent,
    ) -> (Effect<AppRouteIntent>, ScopeOutcome<AppRouteTag>) {
        RouteScope::new("AppScene", route, intent)
            .case::<IntermediateACase>()
            .case::<IntermediateBCase>()
            .finish()
    }

    #[test]
    fn delivers_to_active_case() {
        let mut route = Some(AppRoute::IntermediateA(IntermediateState::new("A")));
        let (effect, outcome) = scope(
            &mut route,
            AppRouteIntent::IntermediateA(IntermediateIntent::PresentLeaf(true)),
        );
        assert!(effect.is_none());
        assert_eq!(outcome, ScopeOutcome::Delivered(AppRouteTag::IntermediateA));
        let Some(AppRoute::IntermediateA(child)) = route else {
            panic!("expected IntermediateA");
        };
        assert!(child.leaf().is_some());
    }

    #[test]
    fn dismiss_is_reported_as_dismissed() {
        let mut route = Some(AppRoute::IntermediateB(IntermediateState::new("B")));
        let (_, outcome) = scope(
            &mut route,
            AppRouteIntent::IntermediateB(IntermediateIntent::Dismiss),
        );
        assert_eq!(outcome.dismissed(), Some(AppRouteTag::IntermediateB));
        // The scope itself never clears the slot.
        assert!(route.is_some());
    }

    #[test]
    fn other_case_is_dropped_and_reported() {
        let mut route = Some(AppRoute::IntermediateB(IntermediateState::new("B")));
        let before = route.clone();
        let (effect, outcome) = scope(
            &mut route,
            AppRouteIntent::IntermediateA(IntermediateIntent::PresentLeaf(true)),
        );
        assert_eq!(route, before);
        assert_eq!(
            outcome,
            ScopeOutcome::Stale {
                active: Some(AppRouteTag::IntermediateB),
                addressed: AppRouteTag::IntermediateA,
            }
        );
        assert_eq!(effect.diagnostics().count(), 1);
        assert_eq!(effect.follow_ups().count(), 0);
    }

    #[test]
    fn empty_slot_is_stale() {
        let mut route = None;
        let (_, outcome) = scope(
            &mut route,
            AppRouteIntent::IntermediateA(IntermediateIntent::Dismiss),
        );
        assert_eq!(
            outcome,
            ScopeOutcome::Stale {
                active: None,
                addressed: AppRouteTag::IntermediateA,
            }
        );
        assert!(outcome.dismissed().is_none());
        assert!(route.is_none());
    }
}
