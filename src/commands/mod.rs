//! Command implementations for waypath

pub mod dispatch;
pub mod grid;
pub mod ladder;
pub mod render;
pub mod route;

use waypath_core::config::WaypathConfig;
use waypath_core::graph::SearchOptions;

/// Settings resolved once per invocation and shared by every command
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: WaypathConfig,
    pub opts: SearchOptions,
}
