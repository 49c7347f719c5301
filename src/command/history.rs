use super::Command;
use crate::document::Document;
use crate::element::ElementType;

/// The redo side of the undo/redo pair.
///
/// The display list doubles as the undo stack: undo pops its last entry
/// onto `redo_stack`, redo pops it back. History does not branch, so any
/// commit throws the redo stack away.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    redo_stack: Vec<ElementType>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self {
            redo_stack: Vec::new(),
        }
    }

    /// Commit a finished gesture to the document.
    pub fn execute(&mut self, command: Command, document: &mut Document) {
        log::info!("Committing {}", command.name());
        document.add_element(command.into_element());
        self.redo_stack.clear();
    }

    /// Move the newest element onto the redo stack. Returns false when
    /// there was nothing to undo.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        match document.remove_last_element() {
            Some(element) => {
                log::info!("Undo {}", element.element_type());
                self.redo_stack.push(element);
                true
            }
            None => false,
        }
    }

    /// Reinstate the most recently undone element at the end of the
    /// document. Returns false when the redo stack was empty.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(element) => {
                log::info!("Redo {}", element.element_type());
                document.add_element(element);
                true
            }
            None => false,
        }
    }

    /// Empty both the document and the redo stack
    pub fn clear(&mut self, document: &mut Document) {
        log::info!(
            "Clearing {} elements and {} redo entries",
            document.len(),
            self.redo_stack.len()
        );
        document.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self, document: &Document) -> bool {
        !document.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undone elements, oldest undo first
    pub fn redo_stack(&self) -> &[ElementType] {
        &self.redo_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Stroke;
    use egui::{Color32, Pos2};

    fn stroke_at(y: f32) -> Command {
        Command::AddStroke(Stroke::new(
            vec![Pos2::new(0.0, y), Pos2::new(10.0, y)],
            1.0,
            Color32::BLACK,
        ))
    }

    #[test]
    fn test_undo_then_redo_restores() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();
        history.execute(stroke_at(1.0), &mut document);

        assert!(history.undo(&mut document));
        assert!(document.is_empty());
        assert_eq!(history.redo_stack().len(), 1);

        assert!(history.redo(&mut document));
        assert_eq!(document.len(), 1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();
        assert!(!history.undo(&mut document));
        assert!(!history.redo(&mut document));
        assert!(document.is_empty());
    }

    #[test]
    fn test_commit_discards_redo() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();
        history.execute(stroke_at(1.0), &mut document);
        history.undo(&mut document);
        history.execute(stroke_at(2.0), &mut document);

        assert!(!history.can_redo());
        assert!(!history.redo(&mut document));
        assert_eq!(document.len(), 1);
        assert_eq!(document.elements()[0], stroke_at(2.0).into_element());
    }

    #[test]
    fn test_redo_is_lifo() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();
        history.execute(stroke_at(1.0), &mut document);
        history.execute(stroke_at(2.0), &mut document);
        history.undo(&mut document);
        history.undo(&mut document);

        history.redo(&mut document);
        assert_eq!(document.elements(), &[stroke_at(1.0).into_element()]);
        history.redo(&mut document);
        assert_eq!(
            document.elements(),
            &[stroke_at(1.0).into_element(), stroke_at(2.0).into_element()]
        );
    }

    #[test]
    fn test_clear_then_undo_is_noop() {
        let mut document = Document::new();
        let mut history = CommandHistory::new();
        history.execute(stroke_at(1.0), &mut document);
        history.execute(stroke_at(2.0), &mut document);
        history.undo(&mut document);

        history.clear(&mut document);
        assert!(!history.undo(&mut document));
        assert!(!history.redo(&mut document));
        assert!(document.is_empty());
    }
}
