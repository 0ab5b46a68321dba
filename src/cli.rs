// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and help text.
use crate::command::CommandKind;
use anyhow::{Result, anyhow};
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run,
    Help,
    Export,
    Import(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub command: CliCommand,
}

/// Parses `args` without the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut root = None;
    let mut command = CliCommand::Run;
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => command = CliCommand::Help,
            "-r" | "--root" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("{} needs a directory argument", arg))?;
                root = Some(PathBuf::from(path));
            }
            "export" => command = CliCommand::Export,
            "import" => {
                let file = args
                    .next()
                    .ok_or_else(|| anyhow!("import needs a file argument"))?;
                command = CliCommand::Import(PathBuf::from(file));
            }
            other => return Err(anyhow!("Unknown argument '{}'. Try --help.", other)),
        }
    }

    Ok(CliArgs { root, command })
}

pub fn print_help(binary_name: &str) {
    let is_tui = binary_name.contains("tui");

    println!(
        "Derek v{} - A grumpy but reliable task tracker ({})",
        env!("CARGO_PKG_VERSION"),
        if is_tui { "TUI" } else { "console" }
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    if !is_tui {
        println!("    {} export [--root <path>]", binary_name);
        println!("    {} import <file.txt> [--root <path>]", binary_name);
    }
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    if !is_tui {
        println!("EXPORT / IMPORT:");
        println!(
            "    {} export > backup.txt     Write tasks to stdout, one per line",
            binary_name
        );
        println!(
            "    {} import backup.txt       Append tasks from an exported file",
            binary_name
        );
        println!();
    }
    println!("COMMANDS:");
    for kind in CommandKind::iter() {
        println!("    {:<64}{}", kind.usage(), kind.summary());
    }
    println!();
    println!("EXAMPLES:");
    println!("    todo read book");
    println!("    deadline submit report /by 2/12/2024 18:00");
    println!("    event trip /from 1/1/2025 10:00 /to 2/1/2025 10:00");
    println!("    mark 2");
    println!("    find report");
    if is_tui {
        println!();
        println!("KEYS:");
        println!("    Enter: Send   Esc: Quit   PgUp/PgDn: Scroll conversation");
    }
    println!();
    println!("MORE INFO:");
    println!("    License:    GPL-3.0");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_run() {
        let args = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(args.command, CliCommand::Run);
        assert_eq!(args.root, None);
    }

    #[test]
    fn test_root_and_subcommands() {
        let args = parse_args(["--root", "/tmp/d", "export"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/tmp/d")));
        assert_eq!(args.command, CliCommand::Export);

        let args = parse_args(["import", "tasks.txt", "-r", "x"]).unwrap();
        assert_eq!(args.command, CliCommand::Import(PathBuf::from("tasks.txt")));
        assert_eq!(args.root, Some(PathBuf::from("x")));

        assert_eq!(parse_args(["-h"]).unwrap().command, CliCommand::Help);
    }

    #[test]
    fn test_missing_values_and_unknowns() {
        assert!(parse_args(["--root"]).is_err());
        assert!(parse_args(["import"]).is_err());
        assert!(parse_args(["--verbose"]).is_err());
    }
}
