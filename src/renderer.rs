use crate::element::{ElementType, Renderable};
use crate::surface::DrawingSurface;

/// Which flavour of repaint the last mutation asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedrawKind {
    /// Display list only
    #[default]
    Full,
    /// Display list plus the live preview or in-progress stroke on top
    Interim,
}

/// The redraw coordinator.
///
/// Every repaint starts from a cleared surface and replays the whole
/// display list in order; nothing is repainted incrementally.
#[derive(Debug, Default)]
pub struct Renderer {
    frames_drawn: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self { frames_drawn: 0 }
    }

    /// Clear `surface`, paint `elements` oldest first, then `overlay` last.
    pub fn paint(
        surface: &mut dyn DrawingSurface,
        elements: &[ElementType],
        overlay: Option<&dyn Renderable>,
    ) {
        surface.clear();
        for element in elements {
            element.draw(surface);
        }
        if let Some(overlay) = overlay {
            overlay.draw(surface);
        }
    }

    pub fn redraw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        elements: &[ElementType],
        overlay: Option<&dyn Renderable>,
    ) {
        Self::paint(surface, elements, overlay);
        self.frames_drawn += 1;
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}
