use crate::registry::Category;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Browse the view variant gallery and stamp out new variants
#[derive(Parser, Debug)]
#[command(
    name = "satlens",
    about = "Browse the view variant gallery and stamp out new variants",
    version,
    author,
    long_about = "satlens lists, inspects and renders the registered view variants of the \
                  practice gallery, and generates new variants by cloning a base component."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "List registered variants",
        long_about = "Lists registered variants in id order. Experimental variants are hidden \
                      unless --all is given.\n\n\
                      Examples:\n  \
                      satlens list\n  \
                      satlens list --category question --tag topics\n  \
                      satlens list --all --format json"
    )]
    List(ListArgs),

    #[command(about = "Show one variant's metadata")]
    Show(ShowArgs),

    #[command(
        about = "Render practice data with a variant",
        long_about = "Renders a JSON view data file with the given variant and prints the markup. \
                      If the id is not registered, the default variant of the data's category \
                      is used instead.\n\n\
                      Examples:\n  \
                      satlens render 3 --data questions.json"
    )]
    Render(RenderArgs),

    #[command(
        about = "Generate variants from base components",
        long_about = "Clones base components into new variants, writes their registration \
                      stubs and lists them in the aggregation file. Without --specs the \
                      built-in batch is generated.\n\n\
                      Examples:\n  \
                      satlens generate\n  \
                      satlens generate --specs variants.toml --dry-run\n  \
                      satlens generate --views-dir src/views --strict"
    )]
    Generate(GenerateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    #[arg(short = 'c', long, value_parser = parse_category, help = "Only this category")]
    pub category: Option<Category>,

    #[arg(short = 't', long, help = "Only variants carrying this tag")]
    pub tag: Option<String>,

    #[arg(short = 'a', long, help = "Include experimental variants")]
    pub all: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    #[arg(value_name = "ID", help = "Variant id")]
    pub id: u32,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    #[arg(value_name = "ID", help = "Variant id")]
    pub id: u32,

    #[arg(short = 'd', long, value_name = "FILE", help = "JSON view data file")]
    pub data: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Views directory holding base/ and generated/ (default: SATLENS_VIEWS_DIR or src/views)"
    )]
    pub views_dir: Option<PathBuf>,

    #[arg(short = 's', long, value_name = "FILE", help = "TOML file of [[variant]] specs")]
    pub specs: Option<PathBuf>,

    #[arg(long, help = "Compute everything, write nothing")]
    pub dry_run: bool,

    #[arg(long, help = "Fail a spec when an anchor is missing or ambiguous")]
    pub strict: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}
