use crate::{Application, Editor};

mod copy;
mod cut;
mod paste;
mod undo;

/// The kinds of action a [Command] can perform.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum CommandType {
    Copy,
    Cut,
    Paste,
    Undo,
}

/// A single user action against an [Application], together with the text it
/// needs to restore when undone.
#[derive(Debug)]
pub struct Command {
    pub command_type: CommandType,
    /// Document text captured right before the command mutated it
    backup: String,
}

impl Command {
    pub fn new(command_type: CommandType) -> Self {
        Command {
            command_type,
            backup: String::new(),
        }
    }

    pub fn copy() -> Self {
        Self::new(CommandType::Copy)
    }

    pub fn cut() -> Self {
        Self::new(CommandType::Cut)
    }

    pub fn paste() -> Self {
        Self::new(CommandType::Paste)
    }

    pub fn undo_last() -> Self {
        Self::new(CommandType::Undo)
    }

    pub fn backup(&self) -> &str {
        &self.backup
    }

    /// Records the editor's current text so that [Command::undo] can restore it.
    /// Must run before any mutation of the text.
    fn save_backup(&mut self, editor: &Editor) {
        self.backup = editor.text().to_string();
    }

    /// Runs the command against `app`.
    ///
    /// Returns `true` if the command changed the document and belongs in the
    /// undo history, `false` otherwise.
    ///
    /// # Arguments
    ///
    /// * `app` - the [Application] owning the active editor and clipboard
    pub fn execute(&mut self, app: &mut Application) -> bool {
        match self.command_type {
            CommandType::Copy => copy::execute(app),
            CommandType::Cut => cut::execute(self, app),
            CommandType::Paste => paste::execute(self, app),
            CommandType::Undo => undo::execute(app),
        }
    }

    /// Restores the text saved by the last backup. The selection is only
    /// re-clamped, not restored.
    pub fn undo(&self, editor: &mut Editor) {
        editor.set_text(self.backup.clone());
    }
}
