//! Intent builders shared by the integration tests.

#![allow(dead_code)]

use scene_nav::config::StoreConfig;
use scene_nav::ui::scenes::app::{AppIntent, AppReducer, AppRouteIntent, AppRouteTag, AppState};
use scene_nav::ui::scenes::intermediate::{IntermediateIntent, IntermediateRouteIntent};
use scene_nav::ui::scenes::leaf::LeafIntent;
use scene_nav::ui::store::Store;

pub fn store() -> Store<AppReducer> {
    Store::new(AppState::default(), StoreConfig::default())
}

/// `intent` wrapped for intermediate scene `tag`.
pub fn to_intermediate(tag: AppRouteTag, intent: IntermediateIntent) -> AppIntent {
    AppIntent::Route(match tag {
        AppRouteTag::IntermediateA => AppRouteIntent::IntermediateA(intent),
        AppRouteTag::IntermediateB => AppRouteIntent::IntermediateB(intent),
    })
}

/// `intent` wrapped for the leaf under intermediate scene `tag`.
pub fn to_leaf(tag: AppRouteTag, intent: LeafIntent) -> AppIntent {
    to_intermediate(tag, IntermediateIntent::Route(IntermediateRouteIntent::Leaf(intent)))
}
