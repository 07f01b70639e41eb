use std::collections::BTreeSet;

use crate::commands::CommandResult;
use crate::errors::{Result, RolodexError};
use crate::model::{
    Address, Birthday, Email, Index, Name, Nickname, Notes, Person, PersonPredicate, Phone,
    Relationship, Tag,
};
use crate::state::Model;

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the person identified \
    by the index number used in the displayed person list. \
    Existing values will be overwritten by the input values.\n\
    Parameters: INDEX (must be a positive integer) \
    [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [b/BIRTHDAY] [nn/NICKNAME] [r/RELATIONSHIP] [nt/NOTES] [t/TAG]...\n\
    Example: edit 1 p/91234567 e/johndoe@example.com";

/// Fields to overwrite; `None` keeps the existing value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub birthday: Option<Birthday>,
    pub nickname: Option<Nickname>,
    pub relationship: Option<Relationship>,
    pub notes: Option<Notes>,
    /// `Some(empty)` clears all tags
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.birthday.is_some()
            || self.nickname.is_some()
            || self.relationship.is_some()
            || self.notes.is_some()
            || self.tags.is_some()
    }

    /// The person that results from applying this descriptor to `person`
    pub fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| person.address.clone()),
            birthday: self.birthday.clone().or_else(|| person.birthday.clone()),
            nickname: self.nickname.clone().or_else(|| person.nickname.clone()),
            relationship: self
                .relationship
                .clone()
                .or_else(|| person.relationship.clone()),
            notes: self.notes.clone().or_else(|| person.notes.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}

/// Edits the person at a displayed index; undo restores the original
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
    /// (original, edited) once applied
    applied: Option<(Person, Person)>,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self {
            index,
            descriptor,
            applied: None,
        }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditPersonDescriptor {
        &self.descriptor
    }

    pub(crate) fn execute(&mut self, model: &mut Model) -> Result<CommandResult> {
        if !self.descriptor.is_any_field_edited() {
            return Err(RolodexError::NoFieldEdited);
        }

        let original = model
            .filtered_persons()
            .get(self.index.zero_based())
            .map(|p| (*p).clone())
            .ok_or(RolodexError::InvalidPersonDisplayedIndex {
                index: self.index.one_based(),
            })?;
        let edited = self.descriptor.apply(&original);

        model.set_person(&original, edited.clone())?;
        model.update_filtered_person_list(PersonPredicate::ShowAll);

        let feedback = format!("Edited Person: {}", edited);
        self.applied = Some((original, edited));
        Ok(CommandResult::new(feedback))
    }

    pub(crate) fn undo(&self, model: &mut Model) -> Result<()> {
        if let Some((original, edited)) = &self.applied {
            model.set_person(edited, original.clone())?;
        }
        Ok(())
    }
}
