//! Domain state owned by the engine for the life of a process

use crate::errors::Result;
use crate::model::{AddressBook, CommandHistory, Person, PersonPredicate, UserPrefs};

/// Model - the mutable in-memory record collection, its filtered view and
/// the command-history log
///
/// The filtered view is not stored; [`Model::filtered_persons`] recomputes it
/// from the current predicate on every call, so it can never go stale.
/// Not thread-safe on its own; the engine serialises access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    address_book: AddressBook,
    predicate: PersonPredicate,
    command_history: CommandHistory,
    user_prefs: UserPrefs,
}

impl Model {
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        let command_history = CommandHistory::with_limit(user_prefs.history_limit);
        Self {
            address_book,
            predicate: PersonPredicate::ShowAll,
            command_history,
            user_prefs,
        }
    }

    /// Replace the command history, applying the configured bound
    pub fn with_command_history(mut self, mut history: CommandHistory) -> Self {
        history.set_limit(self.user_prefs.history_limit);
        self.command_history = history;
        self
    }

    // ===== Records =====

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn set_address_book(&mut self, address_book: &AddressBook) {
        self.address_book.reset_data(address_book);
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    /// Append a person and reset the view so the new record is visible
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePerson` if the same person already exists.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        self.address_book.add_person(person)?;
        self.update_filtered_person_list(PersonPredicate::ShowAll);
        Ok(())
    }

    /// Re-insert a person at a known position in the book
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePerson` if the same person already exists.
    pub fn insert_person(&mut self, position: usize, person: Person) -> Result<()> {
        self.address_book.insert_person(position, person)
    }

    /// Remove a person, returning the position it occupied in the book
    ///
    /// # Errors
    ///
    /// Returns `PersonNotFound` if the person is absent.
    pub fn delete_person(&mut self, person: &Person) -> Result<usize> {
        self.address_book.remove_person(person)
    }

    /// # Errors
    ///
    /// Returns `PersonNotFound` or `DuplicatePerson`, see
    /// [`AddressBook::set_person`].
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        self.address_book.set_person(target, edited)
    }

    // ===== Filtered view =====

    /// The displayed projection, in address-book order
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|p| self.predicate.test(p))
            .collect()
    }

    pub fn predicate(&self) -> &PersonPredicate {
        &self.predicate
    }

    pub fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        self.predicate = predicate;
    }

    // ===== Command history =====

    pub fn command_history(&self) -> &CommandHistory {
        &self.command_history
    }

    pub fn add_to_command_history(&mut self, command_text: &str) {
        self.command_history.add(command_text);
    }

    // ===== Preferences =====

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }
}
