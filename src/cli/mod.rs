pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, GenerateArgs, ListArgs, RenderArgs, ShowArgs};
pub use output::{OutputFormat, OutputFormatter};
