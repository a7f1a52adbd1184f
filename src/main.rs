use satlens::cli::commands::{CliArgs, Commands};
use satlens::cli::handlers::{handle_generate, handle_list, handle_render, handle_show};
use satlens::util::{init_logging, LoggingConfig};
use satlens::{SatlensConfig, VERSION};

use clap::Parser;
use tracing::{debug, error};

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_args(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("satlens v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = match SatlensConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    debug!("{}", config);

    let exit_code = match &args.command {
        Commands::List(list_args) => handle_list(list_args, &config),
        Commands::Show(show_args) => handle_show(show_args, &config),
        Commands::Render(render_args) => handle_render(render_args, &config),
        Commands::Generate(generate_args) => handle_generate(generate_args, &config),
    };

    std::process::exit(exit_code);
}
