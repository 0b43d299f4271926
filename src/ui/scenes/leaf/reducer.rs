use crate::ui::mvi::{Effect, Reducer};

use super::intent::LeafIntent;
use super::state::LeafState;

pub struct LeafReducer;

impl Reducer for LeafReducer {
    type State = LeafState;
    type Intent = LeafIntent;

    fn reduce(_state: &mut Self::State, intent: Self::Intent) -> Effect<Self::Intent> {
        match intent {
            // Parent takes care of this
            LeafIntent::Dismiss => Effect::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::Intent;

    #[test]
    fn dismiss_leaves_state_alone() {
        let mut state = LeafState::new("A");
        let effect = LeafReducer::reduce(&mut state, LeafIntent::Dismiss);
        assert!(effect.is_none());
        assert_eq!(state, LeafState::new("A"));
    }

    #[test]
    fn dismiss_is_flagged() {
        assert!(LeafIntent::Dismiss.is_dismiss());
    }
}
