//! Interactive session
//!
//! Usage: rolodex [repl]

use super::render_result;
use rolodex_engine::LogicManager;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";
const CONFIRM_PROMPT: &str = "(y/n) > ";

/// Read commands line by line until `exit` or end of input
pub fn execute<R: BufRead, W: Write>(
    logic: &mut LogicManager,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "Address book loaded from {} ({} persons). Type 'help' for usage.",
        logic.address_book_file_path().display(),
        logic.model().address_book().len()
    )?;

    let mut lines = input.lines();
    loop {
        let prompt = if logic.is_awaiting_confirmation() {
            CONFIRM_PROMPT
        } else {
            PROMPT
        };
        write!(out, "{}", prompt)?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        match logic.execute(&line) {
            Ok(result) => {
                render_result(out, logic, &line, &result)?;
                if result.is_exit() {
                    break;
                }
            }
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
    Ok(())
}
