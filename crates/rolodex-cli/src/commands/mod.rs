//! Subcommand implementations and shared start-up

pub mod repl;
pub mod run;

use clap::Args;
use rolodex_core::commands::{find, view};
use rolodex_core::logging_facility::{self, Profile};
use rolodex_core::{CommandResult, UserPrefs};
use rolodex_engine::{init_logic, LogicManager};
use rolodex_store::prefs::{read_user_prefs, save_user_prefs, DEFAULT_PREFS_FILE};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Preferences file
    #[arg(long, global = true, default_value = DEFAULT_PREFS_FILE)]
    pub prefs: PathBuf,

    /// Keep both data files under this directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log to stderr with this profile (development or production)
    #[arg(long, global = true)]
    pub log_profile: Option<Profile>,

    /// Start with an empty address book when no data file exists
    #[arg(long, global = true)]
    pub no_sample_data: bool,
}

/// Initialise logging, load preferences and build the engine
pub fn start(args: &GlobalArgs) -> LogicManager {
    match args.log_profile {
        Some(profile) => logging_facility::init(profile),
        None if std::env::var_os("RUST_LOG").is_some() => {
            logging_facility::init(Profile::Development)
        }
        None => {}
    }

    let mut prefs = load_prefs(&args.prefs);
    if let Some(dir) = &args.data_dir {
        prefs = prefs.with_data_dir(dir);
    }
    init_logic(prefs, !args.no_sample_data)
}

/// Missing file: defaults, written back. Malformed file: defaults.
fn load_prefs(path: &Path) -> UserPrefs {
    match read_user_prefs(path) {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            let prefs = UserPrefs::default();
            if let Err(err) = save_user_prefs(path, &prefs) {
                tracing::warn!(path = %path.display(), "could not write preferences: {}", err);
            }
            prefs
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "using default preferences: {}", err);
            UserPrefs::default()
        }
    }
}

/// Whether `input` asks for the displayed list to be shown
fn shows_list(input: &str) -> bool {
    matches!(
        input.split_whitespace().next(),
        Some(view::LIST_COMMAND_WORD) | Some(find::COMMAND_WORD)
    )
}

/// Print a successful result, followed by the filtered list or help text
/// when the command asked for it
pub fn render_result<W: Write>(
    out: &mut W,
    logic: &LogicManager,
    input: &str,
    result: &CommandResult,
) -> io::Result<()> {
    writeln!(out, "{}", result.feedback())?;
    if result.is_show_help() {
        writeln!(out, "{}", view::help_text())?;
    }
    if !result.needs_confirmation() && shows_list(input) {
        for (i, person) in logic.filtered_persons().iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, person)?;
        }
    }
    Ok(())
}
