/// Host events the scene reacts to. Coordinates are CSS pixels relative
/// to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A click (primary button) at (x, y).
    Click { x: f32, y: f32 },
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// Host callbacks push into it; the frame callback reads it once and drains it.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events in arrival order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
