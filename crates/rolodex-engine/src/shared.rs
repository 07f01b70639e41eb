//! Serialised access to a [`LogicManager`]

use std::sync::{Mutex, MutexGuard};

use rolodex_core::{CommandResult, Result, RolodexError};

use crate::logic_manager::LogicManager;

/// A [`LogicManager`] behind a single mutex
///
/// Every interaction, including the save that follows it, runs while the
/// lock is held, so two callers never interleave a command and a
/// confirmation.
#[derive(Debug)]
pub struct SharedLogic {
    inner: Mutex<LogicManager>,
}

impl SharedLogic {
    pub fn new(logic: LogicManager) -> Self {
        Self {
            inner: Mutex::new(logic),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, LogicManager>> {
        self.inner.lock().map_err(|_| RolodexError::Internal {
            message: "logic manager lock poisoned".to_string(),
        })
    }

    /// # Errors
    ///
    /// See [`LogicManager::execute`]; also `Internal` if a previous holder
    /// panicked.
    pub fn execute(&self, command_text: &str) -> Result<CommandResult> {
        self.lock()?.execute(command_text)
    }

    /// Read state under the lock
    ///
    /// # Errors
    ///
    /// Returns `Internal` if a previous holder panicked.
    pub fn read<R>(&self, f: impl FnOnce(&LogicManager) -> R) -> Result<R> {
        Ok(f(&*self.lock()?))
    }

    pub fn into_inner(self) -> Result<LogicManager> {
        self.inner.into_inner().map_err(|_| RolodexError::Internal {
            message: "logic manager lock poisoned".to_string(),
        })
    }
}
