use crate::Application;

/// Puts the current selection on the clipboard. Never changes the document.
pub(super) fn execute(app: &mut Application) -> bool {
    let selection = app.active_editor().get_selection().to_string();
    app.set_clipboard(selection);
    false
}

#[cfg(test)]
mod test {
    use crate::{Application, Command, Editor};

    #[test]
    fn test_copy() {
        let mut app = Application::new(Editor::new("Hello World"));
        app.active_editor_mut().set_selection(6, 11);
        app.execute_command(Command::copy());

        assert_eq!(app.clipboard(), "World");
        assert_eq!(app.active_editor().text(), "Hello World");
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_copy_empty_selection_clears_clipboard() {
        let mut app = Application::new(Editor::new("Hello World"));
        app.set_clipboard("stale".to_string());
        app.execute_command(Command::copy());
        assert_eq!(app.clipboard(), "");
    }
}
