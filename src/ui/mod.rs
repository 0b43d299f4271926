pub mod deep_link;
pub mod mvi;
pub mod presentation;
pub mod route;
pub mod scenes;
pub mod store;
