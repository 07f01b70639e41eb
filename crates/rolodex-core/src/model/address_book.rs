use serde::{Deserialize, Serialize};

use super::Person;
use crate::errors::{Result, RolodexError};

/// AddressBook - ordered collection of unique persons
///
/// Uniqueness is by [`Person::is_same_person`]. Order is insertion order and
/// is what the unfiltered view displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedAddressBook", into = "SerializedAddressBook")]
pub struct AddressBook {
    persons: Vec<Person>,
}

/// On-disk shape of an address book; duplicates are rejected on conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedAddressBook {
    pub persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            persons: Vec::new(),
        }
    }

    /// Build a book from a list of persons
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePerson` if two entries are the same person.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Position of the record equal to `person`, if present
    pub fn position_of(&self, person: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p == person)
    }

    /// Append a person
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePerson` if the same person is already present.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        if self.has_person(&person) {
            return Err(RolodexError::DuplicatePerson {
                name: person.name.to_string(),
            });
        }
        self.persons.push(person);
        Ok(())
    }

    /// Insert a person at `position`, clamped to the end of the list
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePerson` if the same person is already present.
    pub fn insert_person(&mut self, position: usize, person: Person) -> Result<()> {
        if self.has_person(&person) {
            return Err(RolodexError::DuplicatePerson {
                name: person.name.to_string(),
            });
        }
        let position = position.min(self.persons.len());
        self.persons.insert(position, person);
        Ok(())
    }

    /// Replace `target` with `edited` in place
    ///
    /// # Errors
    ///
    /// Returns `PersonNotFound` if `target` is absent, or `DuplicatePerson` if
    /// `edited` collides with a different existing person.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let position = self
            .position_of(target)
            .ok_or_else(|| RolodexError::PersonNotFound {
                name: target.name.to_string(),
            })?;

        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != position && p.is_same_person(&edited));
        if collides {
            return Err(RolodexError::DuplicatePerson {
                name: edited.name.to_string(),
            });
        }

        self.persons[position] = edited;
        Ok(())
    }

    /// Remove the record equal to `person`, returning its former position
    ///
    /// # Errors
    ///
    /// Returns `PersonNotFound` if no such record exists.
    pub fn remove_person(&mut self, person: &Person) -> Result<usize> {
        let position = self
            .position_of(person)
            .ok_or_else(|| RolodexError::PersonNotFound {
                name: person.name.to_string(),
            })?;
        self.persons.remove(position);
        Ok(position)
    }

    /// Replace the whole contents with `other`'s
    pub fn reset_data(&mut self, other: &AddressBook) {
        self.persons = other.persons.clone();
    }
}

impl TryFrom<SerializedAddressBook> for AddressBook {
    type Error = RolodexError;

    fn try_from(value: SerializedAddressBook) -> Result<Self> {
        AddressBook::from_persons(value.persons)
    }
}

impl From<AddressBook> for SerializedAddressBook {
    fn from(value: AddressBook) -> Self {
        SerializedAddressBook {
            persons: value.persons,
        }
    }
}
