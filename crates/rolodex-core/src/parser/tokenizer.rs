//! Prefix tokenizer for `n/NAME p/PHONE ...` style arguments

use std::collections::HashMap;

use crate::errors::{Result, RolodexError};

/// An argument prefix such as `n/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_BIRTHDAY: Prefix = Prefix::new("b/");
pub const PREFIX_NICKNAME: Prefix = Prefix::new("nn/");
pub const PREFIX_RELATIONSHIP: Prefix = Prefix::new("r/");
pub const PREFIX_NOTES: Prefix = Prefix::new("nt/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// Every prefix that carries at most one value
pub const SINGLE_VALUED_PREFIXES: [Prefix; 8] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BIRTHDAY,
    PREFIX_NICKNAME,
    PREFIX_RELATIONSHIP,
    PREFIX_NOTES,
];

/// Tokenized arguments: the text before the first prefix plus every value
/// seen for each prefix, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// # Errors
    ///
    /// Returns `DuplicatePrefixes` naming every prefix in `prefixes` that
    /// was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<()> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(Prefix::as_str)
            .collect();
        if duplicated.is_empty() {
            return Ok(());
        }
        Err(RolodexError::DuplicatePrefixes {
            prefixes: duplicated.join(" "),
        })
    }
}

/// Split `args` on the given prefixes
///
/// A prefix only counts at the very start of `args` or right after
/// whitespace, so `a/` inside an email address is not a prefix.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    let mut previous: Option<char> = None;
    for (i, c) in args.char_indices() {
        if previous.map_or(true, char::is_whitespace) {
            if let Some(prefix) = prefixes.iter().find(|p| args[i..].starts_with(p.as_str())) {
                positions.push((i, *prefix));
            }
        }
        previous = Some(c);
    }

    let preamble_end = positions.first().map_or(args.len(), |(i, _)| *i);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (n, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(n + 1).map_or(args.len(), |(i, _)| *i);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Prefix; 9] = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_BIRTHDAY,
        PREFIX_NICKNAME,
        PREFIX_RELATIONSHIP,
        PREFIX_NOTES,
        PREFIX_TAG,
    ];

    #[test]
    fn test_preamble_and_values() {
        let map = tokenize(" 1 n/Amy Bee p/911 t/friend t/owesMoney", &ALL);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("Amy Bee"));
        assert_eq!(map.value(PREFIX_PHONE), Some("911"));
        assert_eq!(map.all_values(PREFIX_TAG), ["friend", "owesMoney"]);
        assert!(!map.contains(PREFIX_EMAIL));
    }

    #[test]
    fn test_prefix_needs_leading_whitespace() {
        let map = tokenize(" e/amy@a/b.com a/Block 123", &ALL);
        assert_eq!(map.value(PREFIX_EMAIL), Some("amy@a/b.com"));
        assert_eq!(map.value(PREFIX_ADDRESS), Some("Block 123"));
    }

    #[test]
    fn test_longer_prefixes_are_distinct() {
        let map = tokenize(" n/Amy nn/Ames nt/likes tea", &ALL);
        assert_eq!(map.value(PREFIX_NAME), Some("Amy"));
        assert_eq!(map.value(PREFIX_NICKNAME), Some("Ames"));
        assert_eq!(map.value(PREFIX_NOTES), Some("likes tea"));
    }

    #[test]
    fn test_duplicate_single_valued_prefix_rejected() {
        let map = tokenize(" n/Amy n/Bob p/123 p/456", &ALL);
        let err = map
            .verify_no_duplicate_prefixes_for(&SINGLE_VALUED_PREFIXES)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ p/"
        );
    }
}
