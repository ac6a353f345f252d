use super::Command;
use crate::Application;

pub(super) fn execute(command: &mut Command, app: &mut Application) -> bool {
    command.save_backup(app.active_editor());
    let clipboard = app.clipboard().to_string();
    app.active_editor_mut().replace_selection(&clipboard);
    true
}
