//! Headline typing and scroll reveal, driven by browser timers and an
//! `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use cat_galaxy::page::reveal;
use cat_galaxy::{PageConfig, ScrollReveal, Typewriter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Type the headline into `#typing-text`, first character now and one more
/// per delay. Missing element: no-op.
pub fn start_typewriter(document: &Document, config: &PageConfig) {
    let Some(target) = document.get_element_by_id("typing-text") else {
        log::warn!("typewriter: #typing-text not found");
        return;
    };
    target.set_text_content(Some(""));
    let tw = Typewriter::new(&config.headline, config.type_delay_ms);
    type_next(target, Rc::new(RefCell::new(tw)));
}

fn type_next(target: Element, tw: Rc<RefCell<Typewriter>>) {
    let (next, done, delay) = {
        let mut tw = tw.borrow_mut();
        let next = tw.next_char();
        (next, tw.is_done(), tw.delay_ms())
    };
    if let Some(c) = next {
        let _ = target.append_with_str_1(c.encode_utf8(&mut [0; 4]));
    }
    if done {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(move || type_next(target, tw));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay as i32,
    ) {
        log::warn!("typewriter: setTimeout failed: {e:?}");
    }
}

/// Hide every element matching the reveal selectors and fade each one in
/// the first time enough of it scrolls into view.
pub fn start_scroll_reveal(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(&config.reveal_query())?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            elements.push(el);
        }
    }
    if elements.is_empty() {
        log::warn!("reveal: nothing matches {}", config.reveal_query());
        return Ok(());
    }

    for (i, el) in elements.iter().enumerate() {
        let style = el.style();
        style.set_property("opacity", reveal::HIDDEN_OPACITY)?;
        style.set_property("transform", reveal::HIDDEN_TRANSFORM)?;
        style.set_property("transition", reveal::TRANSITION)?;
        el.set_attribute(REVEAL_INDEX_ATTR, &i.to_string())?;
    }

    let state = Rc::new(RefCell::new(ScrollReveal::new(elements.len())));
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                let revealed = state.borrow_mut().observe(index, entry.is_intersecting());
                if revealed {
                    if let Ok(el) = target.clone().dyn_into::<HtmlElement>() {
                        let style = el.style();
                        let _ = style.set_property("opacity", reveal::SHOWN_OPACITY);
                        let _ = style.set_property("transform", reveal::SHOWN_TRANSFORM);
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    for el in &elements {
        observer.observe(el);
    }
    on_intersect.forget();
    log::info!("reveal: observing {} elements", elements.len());
    Ok(())
}
