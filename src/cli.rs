//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; a single route table dispatches to the application service.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_application_json, format_application_list};
pub use route::{read_payload, RunContext};
