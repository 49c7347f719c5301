use crate::element::ElementType;

/// The display list: everything currently visible, in paint order.
///
/// Later entries paint over earlier ones. Entries only arrive through a
/// commit and only leave through undo or clear.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<ElementType>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn add_element(&mut self, element: ElementType) {
        self.elements.push(element);
    }

    pub fn remove_last_element(&mut self) -> Option<ElementType> {
        self.elements.pop()
    }

    pub fn elements(&self) -> &[ElementType] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
