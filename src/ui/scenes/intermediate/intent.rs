use crate::ui::mvi::Intent;
use crate::ui::route::Presents;
use crate::ui::scenes::leaf::LeafIntent;

use super::state::IntermediateRouteTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntermediateIntent {
    /// User pressed Dismiss. Handled by the parent.
    Dismiss,

    /// Show (`true`) or hide (`false`) the leaf sheet.
    PresentLeaf(bool),

    /// Intent for the active child.
    Route(IntermediateRouteIntent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntermediateRouteIntent {
    Leaf(LeafIntent),
}

impl Intent for IntermediateIntent {
    fn is_dismiss(&self) -> bool {
        matches!(self, IntermediateIntent::Dismiss)
    }
}

impl Presents for IntermediateIntent {
    type Tag = IntermediateRouteTag;

    fn presentation(tag: Self::Tag, presented: bool) -> Self {
        match tag {
            IntermediateRouteTag::Leaf => IntermediateIntent::PresentLeaf(presented),
        }
    }
}
