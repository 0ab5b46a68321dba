use anyhow::Result;
use derek::cli::{self, CliCommand};
use derek::config::Config;
use derek::context::StandardContext;
use derek::logging;
use std::env;

fn main() -> Result<()> {
    let args = cli::parse_args(env::args().skip(1))?;
    match args.command {
        CliCommand::Help => {
            cli::print_help("derek-tui");
            return Ok(());
        }
        CliCommand::Export | CliCommand::Import(_) => {
            eprintln!("export/import are console commands. Use 'derek --help'.");
            std::process::exit(2);
        }
        CliCommand::Run => {}
    }

    let ctx = StandardContext::new(args.root);
    let cfg = match Config::load_or_default(&ctx) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };
    logging::init(&ctx, cfg.log_level_filter())?;

    derek::tui::run(&ctx)
}
