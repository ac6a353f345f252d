use crate::Application;

/// Undoes the most recent change. The undo itself is never recorded.
pub(super) fn execute(app: &mut Application) -> bool {
    app.undo();
    false
}
