//! CLI domain: parse, route and output only.

mod output;
mod parse;
mod route;

pub use output::{map_error, open_sink};
pub use parse::{Cli, Commands};
pub use route::RunContext;
