use glam::Vec2;

use crate::components::body::OrbitingBody;

/// Screen-space caption bound to one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Index of the bound body in the scene.
    pub body: usize,
    pub text: String,
    /// Anchor in CSS pixels (top-left origin). The host centers the element on it.
    pub screen: Vec2,
    pub visible: bool,
}

impl Label {
    /// Class name of the host element.
    pub const CLASS: &'static str = "planet-label";

    /// Inline `transform` that centers the element on its anchor.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translate({}px, {}px)",
            self.screen.x, self.screen.y
        )
    }

    pub fn css_display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }
}

/// One label per body, index-aligned with the scene's body list.
#[derive(Debug, Clone, Default)]
pub struct LabelLayer {
    labels: Vec<Label>,
}

impl LabelLayer {
    pub fn for_bodies(bodies: &[OrbitingBody]) -> Self {
        let labels = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| Label {
                body: i,
                text: body.desc.name.clone(),
                screen: Vec2::ZERO,
                visible: false,
            })
            .collect();
        Self { labels }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Label> {
        self.labels.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
