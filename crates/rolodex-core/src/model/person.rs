use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::fields::{Address, Birthday, Email, Name, Nickname, Notes, Phone, Relationship, Tag};

/// Person - a single record in the address book
///
/// Two persons are the *same person* when their names match ignoring case;
/// that weaker notion drives duplicate detection, while `==` compares every
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<Nickname>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,

    /// Tags, kept sorted so formatting and serialization are deterministic
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    /// Create a person with the mandatory fields and nothing else
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            birthday: None,
            nickname: None,
            relationship: None,
            notes: None,
            tags: BTreeSet::new(),
        }
    }

    /// Weak identity used for duplicate detection
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.as_str().eq_ignore_ascii_case(other.name.as_str())
    }
}

/// Single-line rendering used in command feedback
impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, "; Birthday: {}", birthday)?;
        }
        if let Some(nickname) = &self.nickname {
            write!(f, "; Nickname: {}", nickname)?;
        }
        if let Some(relationship) = &self.relationship {
            write!(f, "; Relationship: {}", relationship)?;
        }
        if let Some(notes) = &self.notes {
            write!(f, "; Notes: {}", notes)?;
        }
        f.write_str("; Tags: ")?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
