use anyhow::{Context, Result};
use derek::cli::{self, CliCommand};
use derek::config::Config;
use derek::context::StandardContext;
use derek::logging;
use derek::session::Session;
use derek::storage::LocalStorage;
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let args = cli::parse_args(env::args().skip(1))?;
    if args.command == CliCommand::Help {
        cli::print_help("derek");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root);
    let cfg = match Config::load_or_default(&ctx) {
        Ok(c) => c,
        Err(e) => {
            // Syntax or permission problem: report it rather than silently using defaults.
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };
    logging::init(&ctx, cfg.log_level_filter())?;

    let mut session = Session::open(&ctx)?;

    match args.command {
        CliCommand::Export => {
            print!("{}", session.export_text());
            Ok(())
        }
        CliCommand::Import(file) => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {:?}", file))?;
            let tasks = LocalStorage::parse_text(&content)
                .with_context(|| format!("Failed to import {:?}", file))?;
            let count = session.import(tasks)?;
            println!("Imported {} task(s) into {:?}", count, session.storage().path());
            Ok(())
        }
        CliCommand::Run | CliCommand::Help => run_console(&mut session),
    }
}

fn run_console(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.greeting())?;
    for line in stdin.lock().lines() {
        let line = line?;
        let reply = session.handle(&line);
        writeln!(stdout, "{}", reply.text)?;
        stdout.flush()?;
        if reply.exit {
            return Ok(());
        }
    }

    // EOF without "bye": still keep whatever was typed.
    if let Err(e) = session.save() {
        log::error!("Save on EOF failed: {:#}", e);
        eprintln!("Warning: Derek could not save your tasks: {}", e);
    }
    Ok(())
}
