//! Scripted session
//!
//! Usage: rolodex run <COMMAND>...
//!
//! Each argument is one interaction, so a confirmation answer is passed as
//! its own argument: `rolodex run "delete 1" y`.

use super::render_result;
use clap::Args;
use rolodex_engine::LogicManager;
use std::io::Write;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Command lines to execute in order
    #[arg(required = true, num_args = 1..)]
    pub commands: Vec<String>,
}

/// Execute every command, stopping at the first failure or `exit`
pub fn execute<W: Write>(
    logic: &mut LogicManager,
    args: RunArgs,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    for command in &args.commands {
        let result = logic.execute(command)?;
        render_result(out, logic, command, &result)?;
        if result.is_exit() {
            break;
        }
    }
    if logic.is_awaiting_confirmation() {
        writeln!(out, "Confirmation still pending; nothing was changed.")?;
    }
    Ok(())
}
