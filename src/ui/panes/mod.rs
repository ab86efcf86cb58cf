//! TUI pane rendering modules
//!
//! - [`bars`]: the array as a bar chart, colored by step state
//! - [`info`]: algorithm name, complexity, fun fact, speed and search value
//! - [`log`]: most recent step records
//! - [`status`]: status bar with keybindings and run state
//!
//! Each pane module exports a single stateless `render_*` function.

pub mod bars;
pub mod info;
pub mod log;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use info::{render_info_pane, InfoRenderData};
pub use log::render_log_pane;
pub use status::render_status_bar;
