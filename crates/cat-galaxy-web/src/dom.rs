use cat_galaxy::{Label, LabelLayer};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Label elements inside `#labels-container`, index-aligned with the
/// scene's label layer.
pub struct LabelElements {
    elements: Vec<HtmlElement>,
}

impl LabelElements {
    /// Create one `div.planet-label` per label. `None` (logged) when the
    /// container is missing, which turns labels into a no-op.
    pub fn create(document: &Document, labels: &LabelLayer) -> Option<Self> {
        let Some(container) = document.get_element_by_id("labels-container") else {
            log::warn!("labels: #labels-container not found, labels disabled");
            return None;
        };
        match Self::build(document, &container, labels) {
            Ok(elements) => Some(Self { elements }),
            Err(e) => {
                log::warn!("labels: could not create elements: {e:?}");
                None
            }
        }
    }

    fn build(
        document: &Document,
        container: &web_sys::Element,
        labels: &LabelLayer,
    ) -> Result<Vec<HtmlElement>, JsValue> {
        labels
            .iter()
            .map(|label| {
                let el = document.create_element("div")?.dyn_into::<HtmlElement>()?;
                el.set_class_name(Label::CLASS);
                el.set_text_content(Some(&label.text));
                el.style().set_property("display", "none")?;
                container.append_child(&el)?;
                Ok(el)
            })
            .collect()
    }

    /// Copy anchors and visibility from the layer onto the elements.
    pub fn apply(&self, labels: &LabelLayer) {
        for (el, label) in self.elements.iter().zip(labels.iter()) {
            let style = el.style();
            let _ = style.set_property("display", label.css_display());
            if label.visible {
                let _ = style.set_property("transform", &label.css_transform());
            }
        }
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => log::info!("opened {url}"),
        Ok(None) => log::warn!("popup blocked for {url}"),
        Err(e) => log::warn!("window.open failed for {url}: {e:?}"),
    }
}
