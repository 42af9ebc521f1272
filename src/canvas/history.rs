use super::path::CanvasPath;

/// Undoable edits to the canvas' path list
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasCommand {
    /// Appends a finished path
    AddPath(CanvasPath),
    /// Removes every path. Holds what was removed so undo can restore it.
    Clear { removed: Vec<CanvasPath> },
}

impl CanvasCommand {
    pub fn execute(&mut self, paths: &mut Vec<CanvasPath>) {
        match self {
            CanvasCommand::AddPath(path) => paths.push(path.clone()),
            CanvasCommand::Clear { removed } => *removed = std::mem::take(paths),
        }
    }

    pub fn undo(&mut self, paths: &mut Vec<CanvasPath>) {
        match self {
            CanvasCommand::AddPath(_) => {
                paths.pop();
            }
            CanvasCommand::Clear { removed } => *paths = std::mem::take(removed),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CanvasCommand::AddPath(_) => "Add Path",
            CanvasCommand::Clear { .. } => "Clear",
        }
    }
}

/// Manages the history of executed commands for undo/redo functionality
#[derive(Debug, Default)]
pub struct CanvasHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<CanvasCommand>,
    /// Stack of commands that can be redone
    redo_stack: Vec<CanvasCommand>,
}

impl CanvasHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and record it
    pub fn execute(&mut self, mut command: CanvasCommand, paths: &mut Vec<CanvasPath>) {
        command.execute(paths);
        self.undo_stack.push(command);
        // A new edit invalidates anything that was undone
        self.redo_stack.clear();
    }

    /// Undo the last executed command. Returns false if there was nothing to undo.
    pub fn undo(&mut self, paths: &mut Vec<CanvasPath>) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        command.undo(paths);
        log::debug!("Undid {}", command.name());
        self.redo_stack.push(command);
        true
    }

    /// Redo the last undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self, paths: &mut Vec<CanvasPath>) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.execute(paths);
        log::debug!("Redid {}", command.name());
        self.undo_stack.push(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
