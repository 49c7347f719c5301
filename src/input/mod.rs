use egui::{Context, Pos2, Rect};

mod router;
pub use router::{handle_shortcuts, route_event};

/// Pointer events in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas, pressed or not
    PointerMove { position: Pos2 },
    /// Primary button was released over the canvas
    PointerUp,
    /// Pointer left the canvas, or something was opened on top of it
    PointerLeave,
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug)]
pub struct InputHandler {
    /// Last pointer position inside the canvas, canvas-local
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect: Rect::NOTHING,
        }
    }

    /// Update the canvas rectangle (e.g. if the layout moved it)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Option<Pos2> {
        self.canvas_rect
            .contains(pos)
            .then(|| pos - self.canvas_rect.min.to_vec2())
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// `reachable` is false while another layer (a window, a popup) covers
    /// the pointer; the canvas then behaves as if the pointer had left.
    pub fn process_input(&mut self, ctx: &Context, reachable: bool) -> Vec<InputEvent> {
        ctx.input(|input| {
            let hover = input.pointer.hover_pos().filter(|_| reachable);
            self.translate(
                hover,
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        })
    }

    /// Within a frame, movement is reported before presses and releases.
    fn translate(&mut self, hover: Option<Pos2>, pressed: bool, released: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let local = hover.and_then(|pos| self.to_local(pos));

        match local {
            Some(position) => {
                if Some(position) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { position });
                }
                if pressed {
                    events.push(InputEvent::PointerDown { position });
                }
                if released {
                    events.push(InputEvent::PointerUp);
                }
            }
            None if self.last_pointer_pos.is_some() => {
                events.push(InputEvent::PointerLeave);
            }
            None => {}
        }

        self.last_pointer_pos = local;
        events
    }
}
