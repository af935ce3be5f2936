//! CLI command handlers. Each command is in its own file.

mod completions;
mod dict;
mod fetch;

pub use completions::{run_completions, run_man};
pub use dict::{run_dict, DictAction};
pub use fetch::run_fetch;
