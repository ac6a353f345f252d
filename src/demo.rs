use crate::{Application, Command, CommandHistory, Config, Editor};

/// Plays copy, cut, paste and undo against a fresh [Application] and describes
/// the state after each step, joined by `" | "`.
///
/// # Arguments
///
/// * `config` - the initial text, selections and history limit to use
pub fn run(config: &Config) -> String {
    let [start, end] = config.selection;
    let mut editor = Editor::new(&config.text);
    editor.set_selection(start, end);

    let history = CommandHistory::with_limit(config.history_limit);
    let mut app = Application::with_history(editor, history);
    let mut checkpoints = Vec::new();

    app.execute_command(Command::copy());
    checkpoints.push(format!("copy: clipboard={:?}", app.clipboard()));

    app.execute_command(Command::cut());
    checkpoints.push(format!(
        "cut: text={:?} clipboard={:?}",
        app.active_editor().text(),
        app.clipboard()
    ));

    app.active_editor_mut()
        .set_selection(config.paste_at, config.paste_at);
    app.execute_command(Command::paste());
    checkpoints.push(format!("paste: text={:?}", app.active_editor().text()));

    app.execute_command(Command::undo_last());
    checkpoints.push(format!("undo: text={:?}", app.active_editor().text()));

    checkpoints.join(" | ")
}

#[cfg(test)]
mod test {
    use super::run;
    use crate::Config;

    #[test]
    fn test_default_scenario() {
        assert_eq!(
            run(&Config::default()),
            r#"copy: clipboard="World" | cut: text="Hello " clipboard="World" | paste: text="HelloWorld " | undo: text="Hello ""#
        );
    }

    #[test]
    fn test_paste_after_trailing_space() {
        let config = Config {
            paste_at: 6,
            ..Config::default()
        };
        assert_eq!(
            run(&config),
            r#"copy: clipboard="World" | cut: text="Hello " clipboard="World" | paste: text="Hello World" | undo: text="Hello ""#
        );
    }

    #[test]
    fn test_out_of_range_selection() {
        let config = Config {
            text: String::from("abc"),
            selection: [-5, 99],
            paste_at: 99,
            history_limit: Some(0),
        };
        assert_eq!(
            run(&config),
            r#"copy: clipboard="abc" | cut: text="" clipboard="abc" | paste: text="abc" | undo: text="abc""#
        );
    }
}
