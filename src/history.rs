use crate::Command;
use bounded_vec_deque::BoundedVecDeque;

/// The stack of executed commands that changed the document.
pub struct CommandHistory {
    history: BoundedVecDeque<Command>,
    /// Maximum number of retained commands, if any
    limit: Option<usize>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Constructs an unbounded history.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Constructs a history that keeps at most `limit` commands, evicting the
    /// oldest first. A limit of zero retains nothing.
    ///
    /// # Arguments
    ///
    /// * `limit` - the maximum number of commands, or `None` for unbounded
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            history: BoundedVecDeque::with_capacity(0, limit.unwrap_or(usize::MAX).max(1)),
            limit,
        }
    }

    pub fn push(&mut self, command: Command) {
        if self.limit == Some(0) {
            tracing::debug!(
                target: "quill::history",
                command = ?command.command_type,
                "history disabled, dropping command"
            );
            return;
        }

        if let Some(evicted) = self.history.push_back(command) {
            tracing::debug!(
                target: "quill::history",
                evicted = ?evicted.command_type,
                limit = ?self.limit,
                "history full, dropped oldest command"
            );
        }
    }

    /// Removes and returns the most recent command, or `None` if empty.
    pub fn pop(&mut self) -> Option<Command> {
        self.history.pop_back()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod test {
    use super::CommandHistory;
    use crate::{Command, CommandType};

    #[test]
    fn test_push_pop_order() {
        let mut history = CommandHistory::new();
        history.push(Command::cut());
        history.push(Command::paste());
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop().map(|c| c.command_type), Some(CommandType::Paste));
        assert_eq!(history.pop().map(|c| c.command_type), Some(CommandType::Cut));
        assert!(history.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut history = CommandHistory::default();
        assert!(history.pop().is_none());
        assert!(history.pop().is_none());
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn test_unbounded_growth() {
        let mut history = CommandHistory::new();
        (0..1000).for_each(|_| history.push(Command::paste()));
        assert_eq!(history.len(), 1000);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = CommandHistory::with_limit(Some(2));
        history.push(Command::cut());
        history.push(Command::paste());
        history.push(Command::paste());
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop().map(|c| c.command_type), Some(CommandType::Paste));
        assert_eq!(history.pop().map(|c| c.command_type), Some(CommandType::Paste));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_zero_limit_retains_nothing() {
        let mut history = CommandHistory::with_limit(Some(0));
        history.push(Command::cut());
        assert!(history.is_empty());
        assert_eq!(history.limit(), Some(0));
    }
}
