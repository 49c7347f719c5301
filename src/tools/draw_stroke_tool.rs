use egui::{Color32, Pos2};

use super::{DrawStrokeHelper, Tool};
use crate::command::Command;
use crate::element::Renderable;
use crate::preview::LivePreview;

/// The two pen widths offered by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thickness {
    Thin,
    Thick,
}

impl Thickness {
    pub const ALL: [Thickness; 2] = [Thickness::Thin, Thickness::Thick];

    pub fn label(self) -> &'static str {
        match self {
            Thickness::Thin => "Thin",
            Thickness::Thick => "Thick",
        }
    }
}

/// Freehand pen. Holds the in-progress buffer between pointer down and up.
#[derive(Debug, Clone)]
pub struct DrawStrokeTool {
    thickness: Thickness,
    width: f32,
    color: Color32,
    current_stroke: Option<DrawStrokeHelper>,
}

impl DrawStrokeTool {
    pub fn new(thickness: Thickness, width: f32, color: Color32) -> Self {
        Self {
            thickness,
            width,
            color,
            current_stroke: None,
        }
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn current_stroke(&self) -> Option<&DrawStrokeHelper> {
        self.current_stroke.as_ref()
    }
}

impl Tool for DrawStrokeTool {
    fn name(&self) -> &'static str {
        "DrawStroke"
    }

    fn deactivate(&mut self) {
        if self.current_stroke.take().is_some() {
            log::debug!("Discarding unfinished stroke");
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        log::debug!("Stroke started at {pos:?}");
        self.current_stroke = Some(DrawStrokeHelper::new(pos, self.width, self.color));
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2) {
        if let Some(stroke) = &mut self.current_stroke {
            stroke.add_point(pos);
        }
    }

    fn on_pointer_up(&mut self) -> Option<Command> {
        let stroke = self.current_stroke.take()?;
        log::debug!("Stroke finished with {} points", stroke.points().len());
        Some(Command::AddStroke(stroke.into_stroke()))
    }

    fn is_gesture_active(&self) -> bool {
        self.current_stroke.is_some()
    }

    fn in_progress(&self) -> Option<&dyn Renderable> {
        self.current_stroke
            .as_ref()
            .map(|stroke| stroke as &dyn Renderable)
    }

    fn preview(&self, position: Pos2) -> LivePreview {
        LivePreview::brush(position, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thin_pen() -> DrawStrokeTool {
        DrawStrokeTool::new(Thickness::Thin, 1.0, Color32::BLACK)
    }

    #[test]
    fn test_gesture_builds_stroke() {
        let mut tool = thin_pen();
        assert!(tool.on_pointer_down(Pos2::new(10.0, 10.0)).is_none());
        tool.on_pointer_move(Pos2::new(20.0, 10.0));
        assert!(tool.is_gesture_active());

        let Some(Command::AddStroke(stroke)) = tool.on_pointer_up() else {
            panic!("expected a stroke");
        };
        assert_eq!(stroke.points(), &[Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0)]);
        assert_eq!(stroke.thickness(), 1.0);
        assert!(!tool.is_gesture_active());
    }

    #[test]
    fn test_move_without_gesture_records_nothing() {
        let mut tool = thin_pen();
        tool.on_pointer_move(Pos2::new(20.0, 10.0));
        assert!(tool.current_stroke().is_none());
        assert!(tool.on_pointer_up().is_none());
    }

    #[test]
    fn test_deactivate_discards_buffer() {
        let mut tool = thin_pen();
        tool.on_pointer_down(Pos2::new(1.0, 1.0));
        tool.deactivate();
        assert!(tool.on_pointer_up().is_none());
    }
}
