pub mod address_book;
pub mod command_history;
pub mod fields;
pub mod index;
pub mod person;
pub mod predicate;
pub mod user_prefs;

pub use address_book::AddressBook;
pub use command_history::CommandHistory;
pub use fields::{Address, Birthday, Email, Name, Nickname, Notes, Phone, Relationship, Tag};
pub use index::Index;
pub use person::Person;
pub use predicate::PersonPredicate;
pub use user_prefs::UserPrefs;
