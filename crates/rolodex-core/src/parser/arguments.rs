//! Per-command argument parsers
//!
//! Each parser receives the text after the command word and either builds
//! the command or fails with a parse error.

use std::collections::BTreeSet;

use crate::commands::{
    add, delete, edit, find, AddCommand, DeleteCommand, EditCommand, EditPersonDescriptor,
    FindCommand,
};
use crate::errors::{Result, RolodexError};
use crate::model::{
    Address, Birthday, Email, Index, Name, Nickname, Notes, Person, Phone, Relationship, Tag,
};
use crate::parser::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_ADDRESS, PREFIX_BIRTHDAY, PREFIX_EMAIL,
    PREFIX_NAME, PREFIX_NICKNAME, PREFIX_NOTES, PREFIX_PHONE, PREFIX_RELATIONSHIP, PREFIX_TAG,
    SINGLE_VALUED_PREFIXES,
};

const PERSON_PREFIXES: [Prefix; 9] = [
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

/// Parse a one-based index
///
/// # Errors
///
/// Returns `InvalidIndex` unless the trimmed input is a non-zero unsigned
/// integer.
pub fn parse_index(raw: &str) -> Result<Index> {
    let trimmed = raw.trim();
    let invalid = || RolodexError::InvalidIndex {
        input: trimmed.to_string(),
    };
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(invalid)
}

fn parse_optional<T>(
    map: &ArgumentMultimap,
    prefix: Prefix,
    parse: fn(&str) -> Result<T>,
) -> Result<Option<T>> {
    map.value(prefix).map(parse).transpose()
}

fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>> {
    values.iter().map(|v| Tag::parse(v)).collect()
}

/// `add n/NAME p/PHONE e/EMAIL a/ADDRESS [b/] [nn/] [r/] [nt/] [t/]...`
///
/// # Errors
///
/// Returns `InvalidCommandFormat` when a mandatory prefix is missing or a
/// preamble is present, `DuplicatePrefixes` or `InvalidField` otherwise.
pub fn parse_add(args: &str) -> Result<AddCommand> {
    let map = tokenize(args, &PERSON_PREFIXES);
    let mandatory = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.preamble().is_empty() || !mandatory.iter().all(|p| map.contains(*p)) {
        return Err(RolodexError::invalid_format(add::MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED_PREFIXES)?;

    let mut person = Person::new(
        Name::parse(map.value(PREFIX_NAME).unwrap_or_default())?,
        Phone::parse(map.value(PREFIX_PHONE).unwrap_or_default())?,
        Email::parse(map.value(PREFIX_EMAIL).unwrap_or_default())?,
        Address::parse(map.value(PREFIX_ADDRESS).unwrap_or_default())?,
    );
    person.birthday = parse_optional(&map, PREFIX_BIRTHDAY, Birthday::parse)?;
    person.nickname = parse_optional(&map, PREFIX_NICKNAME, Nickname::parse)?;
    person.relationship = parse_optional(&map, PREFIX_RELATIONSHIP, Relationship::parse)?;
    person.notes = parse_optional(&map, PREFIX_NOTES, Notes::parse)?;
    person.tags = parse_tags(map.all_values(PREFIX_TAG))?;

    Ok(AddCommand::new(person))
}

/// `edit INDEX [n/] [p/] [e/] [a/] [b/] [nn/] [r/] [nt/] [t/]...`
///
/// A lone empty `t/` clears all tags.
///
/// # Errors
///
/// Returns `InvalidCommandFormat` for a missing or malformed index,
/// `NoFieldEdited` when no field is given, or a field error.
pub fn parse_edit(args: &str) -> Result<EditCommand> {
    let map = tokenize(args, &PERSON_PREFIXES);
    let index = parse_index(map.preamble())
        .map_err(|_| RolodexError::invalid_format(edit::MESSAGE_USAGE))?;
    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED_PREFIXES)?;

    let tag_values = map.all_values(PREFIX_TAG);
    let tags = match tag_values {
        [] => None,
        [only] if only.is_empty() => Some(BTreeSet::new()),
        values => Some(parse_tags(values)?),
    };

    let descriptor = EditPersonDescriptor {
        name: parse_optional(&map, PREFIX_NAME, Name::parse)?,
        phone: parse_optional(&map, PREFIX_PHONE, Phone::parse)?,
        email: parse_optional(&map, PREFIX_EMAIL, Email::parse)?,
        address: parse_optional(&map, PREFIX_ADDRESS, Address::parse)?,
        birthday: parse_optional(&map, PREFIX_BIRTHDAY, Birthday::parse)?,
        nickname: parse_optional(&map, PREFIX_NICKNAME, Nickname::parse)?,
        relationship: parse_optional(&map, PREFIX_RELATIONSHIP, Relationship::parse)?,
        notes: parse_optional(&map, PREFIX_NOTES, Notes::parse)?,
        tags,
    };
    if !descriptor.is_any_field_edited() {
        return Err(RolodexError::NoFieldEdited);
    }

    Ok(EditCommand::new(index, descriptor))
}

/// `delete INDEX [MORE_INDICES]...`
///
/// # Errors
///
/// Returns `InvalidCommandFormat` if no index is given or any index is not
/// a non-zero unsigned integer.
pub fn parse_delete(args: &str) -> Result<DeleteCommand> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(RolodexError::invalid_format(delete::MESSAGE_USAGE));
    }
    let indices = tokens
        .into_iter()
        .map(parse_index)
        .collect::<Result<Vec<_>>>()
        .map_err(|_| RolodexError::invalid_format(delete::MESSAGE_USAGE))?;
    Ok(DeleteCommand::new(indices))
}

/// `find KEYWORD [MORE_KEYWORDS]...`
///
/// # Errors
///
/// Returns `InvalidCommandFormat` if no keyword is given.
pub fn parse_find(args: &str) -> Result<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(RolodexError::invalid_format(find::MESSAGE_USAGE));
    }
    Ok(FindCommand::new(keywords))
}
