/// Inline style applied to observed elements before they are seen.
pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// One-shot reveal tracking for a list of observed elements, indexed in
/// the order they were registered.
///
/// The visibility threshold belongs to the observer that produces the
/// reports. Any intersecting report reveals, so elements far taller than
/// the viewport still appear.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    states: Vec<RevealState>,
}

impl ScrollReveal {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; count],
        }
    }

    /// Feed one intersection report. Returns `true` only on the report that
    /// flips the element to revealed; later reports never hide it again.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            log::warn!("reveal: unknown element index {index}");
            return false;
        };
        if *state == RevealState::Revealed || !intersecting {
            return false;
        }
        *state = RevealState::Revealed;
        true
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
