//! Widget implementations

mod rolling_input;

pub use rolling_input::{rolling_input, RollingInput, RollingInputConfig};
