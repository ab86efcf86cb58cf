//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, search value input
//! - **[`panes`]**: stateless render functions for each visible pane (bars,
//!   info, step log, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`RunController`] and the receiving end of its observer channel, then call
//! [`App::run`] to start the event loop.
//!
//! [`RunController`]: crate::engine::controller::RunController
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
