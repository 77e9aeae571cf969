//! TUI Loop (workspace facade crate).
//!
//! Re-exports the member crates under `tui_loop::{types,term,input,engine}` so
//! games and the `tui-loop` binary depend on a single package.

pub use tui_loop_engine as engine;
pub use tui_loop_input as input;
pub use tui_loop_term as term;
pub use tui_loop_types as types;
