use crate::{Command, CommandHistory, Editor};

/// Owns the active [Editor], the shared clipboard and the undo history, and
/// runs commands against them.
pub struct Application {
    /// Shared scratch buffer written by copy and cut, read by paste
    clipboard: String,
    /// The editor every command acts upon
    active_editor: Editor,
    /// Commands that changed the document, most recent last
    history: CommandHistory,
}

impl Application {
    pub fn new(editor: Editor) -> Self {
        Self::with_history(editor, CommandHistory::new())
    }

    pub fn with_history(editor: Editor, history: CommandHistory) -> Self {
        Self {
            clipboard: String::new(),
            active_editor: editor,
            history,
        }
    }

    /// Executes `command`, keeping it in the history iff it changed the document.
    ///
    /// # Arguments
    ///
    /// * `command` - a freshly constructed [Command]
    pub fn execute_command(&mut self, mut command: Command) {
        let changed = command.execute(self);
        tracing::debug!(
            target: "quill::app",
            command = ?command.command_type,
            changed,
            "executed command"
        );

        if changed {
            self.history.push(command);
        }
    }

    /// Reverts the most recent change. Does nothing if there is nothing to undo.
    pub fn undo(&mut self) {
        if let Some(command) = self.history.pop() {
            command.undo(&mut self.active_editor);
            tracing::debug!(
                target: "quill::app",
                command = ?command.command_type,
                remaining = self.history.len(),
                "undid command"
            );
        } else {
            tracing::trace!(target: "quill::app", "nothing to undo");
        }
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    pub fn set_clipboard(&mut self, contents: String) {
        self.clipboard = contents;
    }

    pub fn active_editor(&self) -> &Editor {
        &self.active_editor
    }

    pub fn active_editor_mut(&mut self) -> &mut Editor {
        &mut self.active_editor
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}
