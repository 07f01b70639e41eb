use rolodex_core::model::{Address, Email, Name, Person, Phone};
use rolodex_core::{AddressBook, CommandHistory, ExError, ExErrorKind, Model, UserPrefs};
use rolodex_engine::LogicManager;
use rolodex_store::Storage;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// What the in-memory store has seen
#[derive(Debug, Default)]
pub struct MemoryState {
    pub book: Option<AddressBook>,
    pub history: Option<CommandHistory>,
    pub fail_book_save: Option<ExErrorKind>,
    pub fail_history_save: Option<ExErrorKind>,
    pub book_saves: usize,
    pub history_saves: usize,
}

/// Storage that keeps everything in memory and fails on demand
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    pub state: Arc<Mutex<MemoryState>>,
    book_path: PathBuf,
    history_path: PathBuf,
}

#[allow(dead_code)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState::default())),
            book_path: PathBuf::from("/mem/addressbook.json"),
            history_path: PathBuf::from("/mem/commandhistory.json"),
        }
    }

    pub fn fail_book_with(&self, kind: ExErrorKind) {
        self.state.lock().unwrap().fail_book_save = Some(kind);
    }

    pub fn fail_history_with(&self, kind: ExErrorKind) {
        self.state.lock().unwrap().fail_history_save = Some(kind);
    }

    pub fn saved_book(&self) -> Option<AddressBook> {
        self.state.lock().unwrap().book.clone()
    }

    pub fn saved_history(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .history
            .as_ref()
            .map(|h| h.entries().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn save_counts(&self) -> (usize, usize) {
        let state = self.state.lock().unwrap();
        (state.book_saves, state.history_saves)
    }
}

fn failure(kind: ExErrorKind, op: &str, path: &Path) -> ExError {
    ExError::new(kind)
        .with_op(op)
        .with_path(path.display().to_string())
        .with_message("disk full")
}

impl Storage for MemoryStorage {
    fn address_book_file_path(&self) -> &Path {
        &self.book_path
    }

    fn read_address_book(&self) -> rolodex_store::Result<Option<AddressBook>> {
        Ok(self.state.lock().unwrap().book.clone())
    }

    fn save_address_book(&self, address_book: &AddressBook) -> rolodex_store::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(kind) = state.fail_book_save {
            return Err(failure(kind, "save_address_book", &self.book_path));
        }
        state.book_saves += 1;
        state.book = Some(address_book.clone());
        Ok(())
    }

    fn command_history_file_path(&self) -> &Path {
        &self.history_path
    }

    fn read_command_history(&self) -> rolodex_store::Result<Option<CommandHistory>> {
        Ok(self.state.lock().unwrap().history.clone())
    }

    fn save_command_history(&self, history: &CommandHistory) -> rolodex_store::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(kind) = state.fail_history_save {
            return Err(failure(kind, "save_command_history", &self.history_path));
        }
        state.history_saves += 1;
        state.history = Some(history.clone());
        Ok(())
    }
}

#[allow(dead_code)]
pub fn person(name: &str) -> Person {
    Person::new(
        Name::parse(name).unwrap(),
        Phone::parse("94351253").unwrap(),
        Email::parse("someone@example.com").unwrap(),
        Address::parse("123, Jurong West Ave 6").unwrap(),
    )
}

/// An engine over `names`, returning the storage handle for inspection
#[allow(dead_code)]
pub fn logic_with(names: &[&str]) -> (LogicManager, MemoryStorage) {
    let storage = MemoryStorage::new();
    let book = AddressBook::from_persons(names.iter().map(|n| person(n)).collect()).unwrap();
    let model = Model::new(book, UserPrefs::default());
    (
        LogicManager::new(model, Box::new(storage.clone())),
        storage,
    )
}

#[allow(dead_code)]
pub fn names(logic: &LogicManager) -> Vec<String> {
    logic
        .model()
        .address_book()
        .persons()
        .iter()
        .map(|p| p.name.to_string())
        .collect()
}

pub const SIX: [&str; 6] = [
    "Alice Pauline",
    "Benson Meier",
    "Carl Kurz",
    "Daniel Meier",
    "Elle Meyer",
    "Fiona Kunz",
];
