// Command trait definition

use thiserror::Error;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while executing or reverting a command
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    /// Command execution failed
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
    /// Reverting the command failed
    #[error("unexecute failed: {0}")]
    UnexecuteFailed(String),
    /// Invalid state for this operation
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Trait for the editor's executable, undoable actions
///
/// Every document-changing operation the shell exposes through a menu or
/// toolbar entry implements this trait. Commands run synchronously on the
/// event-handling thread of one editor session.
///
/// # Thread Safety
/// Commands must be Send as they may be constructed away from the session
/// thread.
///
/// # Example
/// ```no_run
/// use designer_commands::command::trait_def::{Command, CommandError, CommandResult};
/// use std::sync::{Arc, Mutex};
///
/// struct SetTitleCommand {
///     document_title: Arc<Mutex<String>>,
///     new_title: String,
///     old_title: Option<String>,
/// }
///
/// impl Command for SetTitleCommand {
///     fn label(&self) -> &str {
///         "Set Title"
///     }
///
///     fn execute(&mut self) -> CommandResult<()> {
///         let mut title = self
///             .document_title
///             .lock()
///             .map_err(|_| CommandError::InvalidState("title lock poisoned".into()))?;
///         self.old_title = Some(title.clone());
///         *title = self.new_title.clone();
///         Ok(())
///     }
///
///     fn unexecute(&mut self) -> CommandResult<()> {
///         let old = self
///             .old_title
///             .take()
///             .ok_or_else(|| CommandError::UnexecuteFailed("no old title stored".into()))?;
///         let mut title = self
///             .document_title
///             .lock()
///             .map_err(|_| CommandError::InvalidState("title lock poisoned".into()))?;
///         *title = old;
///         Ok(())
///     }
///
///     fn clone_command(&self) -> Box<dyn Command> {
///         Box::new(SetTitleCommand {
///             document_title: Arc::clone(&self.document_title),
///             new_title: self.new_title.clone(),
///             old_title: None,
///         })
///     }
/// }
/// ```
pub trait Command: Send {
    /// Stable registry key and undo-menu name for this command
    fn label(&self) -> &str;

    /// Execute the command
    ///
    /// Should store whatever prior state `unexecute` needs before mutating
    /// the document.
    fn execute(&mut self) -> CommandResult<()>;

    /// Revert the command
    ///
    /// Restores the state observed by the last `execute` call.
    fn unexecute(&mut self) -> CommandResult<()>;

    /// Produce an independent instance carrying the same parameters
    ///
    /// Each invocation of a logical action runs on its own clone, so
    /// recorded history entries never alias live parameter edits.
    fn clone_command(&self) -> Box<dyn Command>;
}

impl Clone for Box<dyn Command> {
    fn clone(&self) -> Self {
        self.clone_command()
    }
}
