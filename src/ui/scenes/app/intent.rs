use crate::ui::deep_link::DeepLinkTarget;
use crate::ui::mvi::Intent;
use crate::ui::route::Presents;
use crate::ui::scenes::intermediate::IntermediateIntent;

use super::state::AppRouteTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIntent {
    PresentIntermediateA(bool),
    PresentIntermediateB(bool),

    /// Intent for the active child.
    Route(AppRouteIntent),

    /// Deep link already resolved by the adapter. Writes the route directly.
    OpenDeepLink(DeepLinkTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRouteIntent {
    IntermediateA(IntermediateIntent),
    IntermediateB(IntermediateIntent),
}

impl Intent for AppIntent {}

impl Presents for AppIntent {
    type Tag = AppRouteTag;

    fn presentation(tag: Self::Tag, presented: bool) -> Self {
        match tag {
            AppRouteTag::IntermediateA => AppIntent::PresentIntermediateA(presented),
            AppRouteTag::IntermediateB => AppIntent::PresentIntermediateB(presented),
        }
    }
}
