use crate::config::ServerConfig;

pub mod calculate;
pub mod health;
pub mod page;

pub struct AppState {
    pub config: ServerConfig,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

pub use calculate::{calculate_get, calculate_post};
pub use health::health;
pub use page::page_handler;
