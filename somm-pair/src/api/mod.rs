//! API handlers for somm-pair

pub mod health;
pub mod menu;
pub mod recommend;

pub use health::health_routes;
pub use menu::menu_routes;
pub use recommend::recommend_routes;
