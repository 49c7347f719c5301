use std::cell::RefCell;
use std::fmt;

use crate::event::{EditorEvent, EventHandler};

/// Fan-out of [`EditorEvent`]s to subscribed handlers.
///
/// Handlers run in subscription order, inside `emit`, before the emitting
/// operation returns. An event emitted from inside a handler is dropped.
#[derive(Default)]
pub struct EventBus {
    subscribers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        match self.subscribers.try_borrow_mut() {
            Ok(mut subscribers) => subscribers.push(handler),
            Err(_) => log::warn!("Handler subscribed during dispatch was ignored"),
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers
            .try_borrow()
            .map_or(0, |subscribers| subscribers.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to every handler. Returns how many saw it.
    pub fn emit(&self, event: EditorEvent) -> usize {
        let Ok(mut subscribers) = self.subscribers.try_borrow_mut() else {
            log::warn!("Dropped {event:?}: emitted during dispatch");
            return 0;
        };
        log::trace!("{event:?} -> {} handlers", subscribers.len());
        let mut delivered = 0;
        for handler in subscribers.iter_mut() {
            handler.handle_event(&event);
            delivered += 1;
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_handlers_see_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let bus = EventBus::new();
        let sink = Rc::clone(&seen);
        bus.subscribe(Box::new(move |event: &EditorEvent| {
            sink.borrow_mut().push(event.clone());
        }));

        assert_eq!(bus.emit(EditorEvent::DrawingChanged), 1);
        bus.emit(EditorEvent::ToolMoved {
            position: egui::Pos2::new(1.0, 2.0),
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], EditorEvent::DrawingChanged);
    }

    #[test]
    fn test_emit_during_dispatch_is_dropped() {
        let bus = Rc::new(EventBus::new());
        let inner = Rc::downgrade(&bus);
        let nested = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&nested);
        bus.subscribe(Box::new(move |_: &EditorEvent| {
            if let Some(bus) = inner.upgrade() {
                *sink.borrow_mut() = Some(bus.emit(EditorEvent::DrawingChanged));
            }
        }));

        assert_eq!(bus.emit(EditorEvent::DrawingChanged), 1);
        assert_eq!(*nested.borrow(), Some(0));
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn test_empty_bus_delivers_nothing() {
        let bus = EventBus::new();
        assert!(bus.is_empty());
        assert_eq!(bus.emit(EditorEvent::DrawingChanged), 0);
    }
}
