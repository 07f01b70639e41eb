use super::{Name, Person};

/// Filter that defines the displayed projection of the address book
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonPredicate {
    #[default]
    ShowAll,
    ShowNone,
    /// Matches when any keyword equals a whole word of the name, ignoring case
    NameContainsKeywords(Vec<String>),
    /// Matches exactly the listed names
    Exactly(Vec<Name>),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::ShowAll => true,
            PersonPredicate::ShowNone => false,
            PersonPredicate::NameContainsKeywords(keywords) => keywords.iter().any(|keyword| {
                person
                    .name
                    .words()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
            }),
            PersonPredicate::Exactly(names) => names.contains(&person.name),
        }
    }
}
