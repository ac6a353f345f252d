use super::Command;
use crate::Application;

pub(super) fn execute(command: &mut Command, app: &mut Application) -> bool {
    command.save_backup(app.active_editor());
    let selection = app.active_editor().get_selection().to_string();
    app.set_clipboard(selection);
    app.active_editor_mut().delete_selection();
    true
}
