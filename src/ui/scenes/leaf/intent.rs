use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafIntent {
    /// User pressed Dismiss. Handled by the parent.
    Dismiss,
}

impl Intent for LeafIntent {
    fn is_dismiss(&self) -> bool {
        matches!(self, LeafIntent::Dismiss)
    }
}
