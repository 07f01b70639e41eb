//! Rolodex CLI
//!
//! Command-line interface for the Rolodex contact book

use clap::{Parser, Subcommand};
use std::io;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rolodex")]
#[command(about = "Rolodex - keep track of the people you know", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive session (default)
    Repl,
    /// Execute the given command lines and exit
    Run(commands::run::RunArgs),
}

fn main() {
    let cli = Cli::parse();
    let mut logic = commands::start(&cli.global);

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        None | Some(Commands::Repl) => {
            commands::repl::execute(&mut logic, io::stdin().lock(), &mut io::stdout())
                .map_err(Into::into)
        }
        Some(Commands::Run(args)) => commands::run::execute(&mut logic, args, &mut io::stdout()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
