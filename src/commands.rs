//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Visible state changed; the host should re-render
    Redraw,
    /// Write a layout record in the background.
    /// Sends `Msg::Layout(LayoutMsg::PersistCompleted)` when done
    PersistLayout { key: String, contents: String },
    /// Register the shared pointer-down listener with the host
    AttachPointerListener,
    /// Remove the shared pointer-down listener from the host
    DetachPointerListener,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, flattening away no-ops
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Writes report back through a message; nothing visible yet
            Cmd::PersistLayout { .. } => false,
            Cmd::AttachPointerListener | Cmd::DetachPointerListener => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Iterate the leaf commands of a (possibly nested) batch
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_drops_none() {
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::None]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]), Cmd::Redraw);
    }

    #[test]
    fn test_needs_redraw_through_batch() {
        let cmd = Cmd::batch(vec![Cmd::AttachPointerListener, Cmd::Redraw]);
        assert!(cmd.needs_redraw());
        assert!(!Cmd::DetachPointerListener.needs_redraw());
    }

    #[test]
    fn test_flatten_nested() {
        let cmd = Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::Batch(vec![Cmd::DetachPointerListener, Cmd::None]),
        ]);
        assert_eq!(cmd.flatten(), vec![Cmd::Redraw, Cmd::DetachPointerListener]);
    }
}
