//! # Introduction
//!
//! sortty runs classic sorting and searching algorithms one observable step at
//! a time. Every comparison and mutation becomes a step record; the records are
//! paced by a user-adjustable speed and rendered as a bar chart in a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! RunController → worker thread → driver → StepEmitter → Board + observers → TUI
//! ```
//!
//! 1. [`engine`]: step records, pacing, cancellation, the shared board and
//!    the run controller that enforces a single active run.
//! 2. [`algorithms`]: the seven instrumented drivers and their catalog data.
//! 3. [`config`]: array and speed settings handed to the controller.
//! 4. [`history`]: bounded log of recent step records.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorting: bubble, selection, insertion, merge, quick.
//! Searching: linear, binary (over a sorted copy of the array).

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod history;
pub mod ui;
