//! CLI command handlers, one file per subcommand.

mod completions;
mod get;
mod list;

pub use completions::run_completions;
pub use get::run_get;
pub use list::run_list;
