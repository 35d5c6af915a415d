//! Stat Roller - character stat editor built on rolling number inputs
//!
//! The panel owns the confirmed stat values. Its `RollingInput` widgets only
//! ever request changes; the panel applies them and pushes the result back.

pub mod config;
pub mod constants;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod message;
pub mod panel;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use message::{Message, StatKind};
pub use panel::StatsPanel;
