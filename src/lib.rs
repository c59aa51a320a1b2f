// Library exports for voy
// The binary and the integration tests both drive the board through these modules

pub mod analytics;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod posts;
pub mod render;
pub mod state;
pub mod view;
