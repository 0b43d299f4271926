use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafState {
    /// "A" or "B", inherited from the presenting scene.
    pub letter_id: String,
}

impl UiState for LeafState {}

impl LeafState {
    pub fn new(letter_id: impl Into<String>) -> Self {
        Self {
            letter_id: letter_id.into(),
        }
    }
}
