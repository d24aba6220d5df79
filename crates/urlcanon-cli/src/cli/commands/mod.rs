//! CLI command handlers. Each command is in its own file.

mod batch;
mod completions;
mod man;
mod process;

pub use batch::run_batch;
pub use completions::run_completions;
pub use man::run_man;
pub use process::run_process;
