//! Start-up: build the initial model from whatever is on disk

use rolodex_core::{AddressBook, CommandHistory, ExError, Model, UserPrefs};
use rolodex_store::seed::sample_address_book;
use rolodex_store::{JsonStorage, Storage};

use crate::logic_manager::LogicManager;

/// Load the address book and command history through `storage`
///
/// - no address book file: the bundled sample data, or an empty book when
///   `use_sample_data` is false
/// - unreadable or corrupt address book file: an empty book, with a warning
/// - missing or unreadable history: an empty history
pub fn init_model(storage: &dyn Storage, prefs: UserPrefs, use_sample_data: bool) -> Model {
    let path = storage.address_book_file_path().display().to_string();
    let address_book = match storage.read_address_book() {
        Ok(Some(book)) => {
            tracing::info!(path = %path, person_count = book.len(), "address book loaded");
            book
        }
        Ok(None) if use_sample_data => {
            tracing::info!(path = %path, "data file not found, starting with sample data");
            sample_address_book().unwrap_or_else(|err| {
                warn_load_failure(&path, &err);
                AddressBook::new()
            })
        }
        Ok(None) => {
            tracing::info!(path = %path, "data file not found, starting empty");
            AddressBook::new()
        }
        Err(err) => {
            warn_load_failure(&path, &err);
            AddressBook::new()
        }
    };

    let history = match storage.read_command_history() {
        Ok(history) => history.unwrap_or_default(),
        Err(err) => {
            let history_path = storage.command_history_file_path().display().to_string();
            warn_load_failure(&history_path, &err);
            CommandHistory::new()
        }
    };

    Model::new(address_book, prefs).with_command_history(history)
}

fn warn_load_failure(path: &str, err: &ExError) {
    tracing::warn!(
        path = %path,
        err.kind = ?err.kind(),
        err.code = err.code(),
        "could not load data file, starting with an empty collection: {}",
        err.message()
    );
}

/// Build a ready-to-use engine over JSON files at the preference locations
pub fn init_logic(prefs: UserPrefs, use_sample_data: bool) -> LogicManager {
    let storage = JsonStorage::from_prefs(&prefs);
    let model = init_model(&storage, prefs, use_sample_data);
    LogicManager::new(model, Box::new(storage))
}
