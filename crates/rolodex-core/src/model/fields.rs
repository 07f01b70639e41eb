//! Validated value types for the fields of a [`Person`](super::Person)
//!
//! Every type parses from a trimmed string or fails with its constraint
//! message. Deserialization goes through the same check, so a tampered data
//! file is rejected on load rather than producing an invalid record.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, RolodexError};

macro_rules! string_field {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse a raw value, trimming surrounding whitespace
            ///
            /// # Errors
            ///
            /// Returns `InvalidField` carrying the constraint message.
            pub fn parse(raw: &str) -> Result<Self> {
                let trimmed = raw.trim();
                if !Self::is_valid(trimmed) {
                    return Err(RolodexError::invalid_field($label, Self::MESSAGE_CONSTRAINTS));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = RolodexError;

            fn try_from(value: String) -> Result<Self> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_field!(
    /// A person's name: alphanumeric words separated by spaces
    Name,
    "name"
);
string_field!(Phone, "phone");
string_field!(Email, "email");
string_field!(Address, "address");
string_field!(
    /// Date of birth in `DD/MM/YYYY`
    Birthday,
    "birthday"
);
string_field!(Nickname, "nickname");
string_field!(Relationship, "relationship");
string_field!(Notes, "notes");
string_field!(Tag, "tag");

fn is_alphanumeric_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid(s: &str) -> bool {
        !s.is_empty()
            && s
                .split(' ')
                .filter(|w| !w.is_empty())
                .all(is_alphanumeric_word)
    }

    /// Whitespace-separated words of the name
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(s: &str) -> bool {
        s.len() >= 3 && s.chars().all(|c| c.is_ascii_digit())
    }
}

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        where the local-part contains only alphanumerics and the special characters +_.- \
        (not at the start or end), and the domain is made of labels separated by periods, \
        ending with a label of at least 2 characters";

    pub fn is_valid(s: &str) -> bool {
        let Some((local, domain)) = s.split_once('@') else {
            return false;
        };
        let special = |c: char| matches!(c, '+' | '_' | '.' | '-');
        let local_ok = !local.is_empty()
            && local.chars().all(|c| c.is_alphanumeric() || special(c))
            && !local.starts_with(special)
            && !local.ends_with(special);

        let labels: Vec<&str> = domain.split('.').collect();
        let domain_ok = labels.iter().all(|label| {
            !label.is_empty()
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        }) && labels.last().is_some_and(|last| last.len() >= 2);

        local_ok && domain_ok
    }
}

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn is_valid(s: &str) -> bool {
        !s.trim().is_empty()
    }
}

impl Birthday {
    pub const DATE_FORMAT: &'static str = "%d/%m/%Y";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Birthdays should be a valid date in the format DD/MM/YYYY and must not be in the future";

    pub fn is_valid(s: &str) -> bool {
        s.len() == 10
            && NaiveDate::parse_from_str(s, Self::DATE_FORMAT)
                .is_ok_and(|date| date <= Local::now().date_naive())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, Self::DATE_FORMAT).ok()
    }
}

impl Nickname {
    pub const MAX_LEN: usize = 30;
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Nicknames should not be blank and should be at most 30 characters long";

    pub fn is_valid(s: &str) -> bool {
        !s.is_empty() && s.chars().count() <= Self::MAX_LEN
    }
}

impl Relationship {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Relationships should be alphanumeric";

    pub fn is_valid(s: &str) -> bool {
        is_alphanumeric_word(s)
    }
}

impl Notes {
    pub const MAX_LEN: usize = 200;
    pub const MESSAGE_CONSTRAINTS: &'static str = "Notes should be at most 200 characters long";

    pub fn is_valid(s: &str) -> bool {
        s.chars().count() <= Self::MAX_LEN
    }
}

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn is_valid(s: &str) -> bool {
        is_alphanumeric_word(s)
    }
}
