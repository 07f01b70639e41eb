use rolodex_core::model::{Address, AddressBook, Email, Name, Person, Phone, Tag, UserPrefs};
use rolodex_core::{
    parse_command, CommandContext, CommandResult, Model, Result, UndoTracker,
};

/// Build a person from raw field values, panicking on invalid test data
#[allow(dead_code)]
pub fn person(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Person {
    let mut p = Person::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        Address::parse(address).unwrap(),
    );
    p.tags = tags.iter().map(|t| Tag::parse(t).unwrap()).collect();
    p
}

/// The seven persons used across the suite, in book order
#[allow(dead_code)]
pub fn typical_persons() -> Vec<Person> {
    vec![
        person(
            "Alice Pauline",
            "94351253",
            "alice@example.com",
            "123, Jurong West Ave 6, #08-111",
            &["friends"],
        ),
        person(
            "Benson Meier",
            "98765432",
            "johnd@example.com",
            "311, Clementi Ave 2, #02-25",
            &["owesMoney", "friends"],
        ),
        person("Carl Kurz", "95352563", "heinz@example.com", "wall street", &[]),
        person(
            "Daniel Meier",
            "87652533",
            "cornelia@example.com",
            "10th street",
            &["friends"],
        ),
        person("Elle Meyer", "9482224", "werner@example.com", "michegan ave", &[]),
        person("Fiona Kunz", "9482427", "lydia@example.com", "little tokyo", &[]),
        person("George Best", "9482442", "anna@example.com", "4th street", &[]),
    ]
}

/// A model holding the first `n` typical persons
#[allow(dead_code)]
pub fn model_with(n: usize) -> Model {
    let persons = typical_persons().into_iter().take(n).collect();
    Model::new(
        AddressBook::from_persons(persons).unwrap(),
        UserPrefs::default(),
    )
}

/// Names currently in the book, in book order
#[allow(dead_code)]
pub fn book_names(model: &Model) -> Vec<String> {
    model
        .address_book()
        .persons()
        .iter()
        .map(|p| p.name.to_string())
        .collect()
}

/// Parse and execute one command line, answering any confirmation with
/// `confirm`, and record undoable commands the way the engine does
#[allow(dead_code)]
pub fn run(
    model: &mut Model,
    tracker: &mut UndoTracker,
    input: &str,
    confirm: bool,
) -> Result<CommandResult> {
    let mut command = parse_command(input)?;
    let mut result = command.execute(CommandContext {
        model: &mut *model,
        undo_tracker: &mut *tracker,
    })?;

    if let Some(mut pending) = result.take_pending() {
        if !confirm {
            return Ok(pending.execute_aborted());
        }
        let confirmed = pending.execute_confirmed(model)?;
        if let Some(undoable) = pending.into_undoable() {
            tracker.push(undoable);
        }
        return Ok(confirmed);
    }

    if let Some(undoable) = command.into_undoable() {
        tracker.push(undoable);
    }
    Ok(result)
}
