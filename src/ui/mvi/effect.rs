//! Effects returned by reducers.

use crate::ui::route::Diagnostic;

/// One unit of follow-up work produced by a reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<I> {
    /// Feed an intent back into the store, behind everything already queued.
    Send(I),

    /// Record a diagnostic. The reducer has already logged it.
    Report(Diagnostic),
}

/// Zero or more commands for the store to carry out after a reduction.
///
/// Scene reducers in this crate only ever report diagnostics; `Send` is kept
/// so a reducer can schedule work without re-entering the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect<I> {
    commands: Vec<Command<I>>,
}

impl<I> Default for Effect<I> {
    fn default() -> Self {
        Self::none()
    }
}

impl<I> Effect<I> {
    pub fn none() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn send(intent: I) -> Self {
        Self {
            commands: vec![Command::Send(intent)],
        }
    }

    pub fn report(diagnostic: Diagnostic) -> Self {
        Self {
            commands: vec![Command::Report(diagnostic)],
        }
    }

    /// Append `other`'s commands after this effect's.
    pub fn merge(&mut self, other: Effect<I>) {
        self.commands.extend(other.commands);
    }

    /// Re-address follow-up intents, e.g. wrap a child intent for its parent.
    pub fn map<J>(self, mut f: impl FnMut(I) -> J) -> Effect<J> {
        Effect {
            commands: self
                .commands
                .into_iter()
                .map(|command| match command {
                    Command::Send(intent) => Command::Send(f(intent)),
                    Command::Report(diagnostic) => Command::Report(diagnostic),
                })
                .collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn follow_ups(&self) -> impl Iterator<Item = &I> {
        self.commands.iter().filter_map(|command| match command {
            Command::Send(intent) => Some(intent),
            Command::Report(_) => None,
        })
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.commands.iter().filter_map(|command| match command {
            Command::Report(diagnostic) => Some(diagnostic),
            Command::Send(_) => None,
        })
    }

    pub fn into_commands(self) -> Vec<Command<I>> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stale() -> Diagnostic {
        Diagnostic::StaleRoute {
            scene: "test",
            active: None,
            addressed: "Leaf".to_string(),
        }
    }

    #[test]
    fn none_is_empty() {
        let effect: Effect<u8> = Effect::none();
        assert!(effect.is_none());
        assert_eq!(effect, Effect::default());
    }

    #[test]
    fn map_rewraps_follow_ups_and_keeps_reports() {
        let mut effect = Effect::send(1u8);
        effect.merge(Effect::report(stale()));
        effect.merge(Effect::send(2u8));

        let mapped = effect.map(|n| format!("wrapped {n}"));
        let follow_ups: Vec<_> = mapped.follow_ups().cloned().collect();
        assert_eq!(follow_ups, vec!["wrapped 1", "wrapped 2"]);
        assert_eq!(mapped.diagnostics().count(), 1);
    }

    #[test]
    fn merge_preserves_order() {
        let mut effect = Effect::send('a');
        effect.merge(Effect::send('b'));
        assert_eq!(
            effect.into_commands(),
            vec![Command::Send('a'), Command::Send('b')]
        );
    }
}
