use egui::{Context, Key, KeyboardShortcut, Modifiers};

use super::InputEvent;
use crate::state::EditorContext;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Routes a canvas input event to the matching session handler
pub fn route_event(event: &InputEvent, context: &mut EditorContext) {
    match *event {
        InputEvent::PointerDown { position } => context.pointer_down(position),
        InputEvent::PointerMove { position } => context.pointer_move(position),
        InputEvent::PointerUp => context.pointer_up(),
        InputEvent::PointerLeave => context.pointer_leave(),
    }
}

/// Undo/redo keyboard shortcuts
pub fn handle_shortcuts(ctx: &Context, context: &mut EditorContext) {
    // Check the shift variant first, consume_shortcut ignores extra modifiers.
    let (redo, undo) = ctx.input_mut(|input| {
        let redo = input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT);
        let undo = input.consume_shortcut(&UNDO);
        (redo, undo)
    });

    if redo {
        context.redo();
    } else if undo {
        context.undo();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchConfig;
    use egui::Pos2;

    #[test]
    fn test_leave_finishes_stroke() {
        let mut context = EditorContext::new(SketchConfig::default());
        let events = [
            InputEvent::PointerDown {
                position: Pos2::new(1.0, 1.0),
            },
            InputEvent::PointerMove {
                position: Pos2::new(4.0, 1.0),
            },
            InputEvent::PointerLeave,
        ];
        for event in &events {
            route_event(event, &mut context);
        }
        assert_eq!(context.document().len(), 1);
    }
}
