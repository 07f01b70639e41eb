//! Bundled sample data
//!
//! Shown on first launch, when no address book file exists yet.

use crate::errors::{seed_validation, Result};
use rolodex_core::AddressBook;

const SAMPLE_ADDRESS_BOOK: &str = include_str!("sample_addressbook.yaml");

/// Parse an address book from YAML
///
/// Field constraints and duplicate detection apply exactly as for a data
/// file.
pub fn parse_seed_str(content: &str) -> Result<AddressBook> {
    serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))
}

/// The address book shipped with the application
pub fn sample_address_book() -> Result<AddressBook> {
    parse_seed_str(SAMPLE_ADDRESS_BOOK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_core::ExErrorKind;

    #[test]
    fn test_sample_parses() {
        let book = sample_address_book().unwrap();
        assert_eq!(book.len(), 6);
        assert_eq!(book.persons()[0].name.as_str(), "Alex Yeoh");
    }

    #[test]
    fn test_duplicate_in_seed_rejected() {
        let yaml = r#"
persons:
  - name: Amy Bee
    phone: "85355255"
    email: amy@gmail.com
    address: 123, Jurong West Ave 6
  - name: amy bee
    phone: "85355255"
    email: amy@gmail.com
    address: 123, Jurong West Ave 6
"#;
        let err = parse_seed_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::DataLoad);
    }

    #[test]
    fn test_invalid_field_in_seed_rejected() {
        let yaml = r#"
persons:
  - name: Amy Bee
    phone: not-a-phone
    email: amy@gmail.com
    address: 123, Jurong West Ave 6
"#;
        assert!(parse_seed_str(yaml).is_err());
    }
}
