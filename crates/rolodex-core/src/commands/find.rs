use crate::commands::CommandResult;
use crate::errors::Result;
use crate::model::PersonPredicate;
use crate::state::Model;

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all persons whose names contain any of \
    the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice bob charlie";

#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        model.update_filtered_person_list(PersonPredicate::NameContainsKeywords(
            self.keywords.clone(),
        ));
        Ok(CommandResult::new(format!(
            "{} persons listed!",
            model.filtered_persons().len()
        )))
    }
}
