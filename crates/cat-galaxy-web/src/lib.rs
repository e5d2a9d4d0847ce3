pub mod canvas;
pub mod dom;
pub mod page;
pub mod runner;

pub use canvas::Canvas2dRenderer;
pub use runner::GalaxyRunner;

use std::cell::RefCell;
use std::rc::Rc;

use cat_galaxy::{AssetManifest, GalaxyConfig, GalaxyContext, GalaxyEvent, InputEvent, PageConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlImageElement, MouseEvent, Window};

use dom::LabelElements;

struct App {
    runner: GalaxyRunner<Canvas2dRenderer>,
    labels: Option<LabelElements>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Run `f` against the live scene. `None` before `galaxy_init` has built one.
fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn to_js(err: cat_galaxy::GalaxyError) -> JsValue {
    log::error!("{err}");
    JsValue::from_str(&err.to_string())
}

/// Start the page with built-in defaults.
#[wasm_bindgen]
pub fn galaxy_init() -> Result<(), JsValue> {
    start(
        GalaxyConfig::default(),
        AssetManifest::default(),
        PageConfig::default(),
    )
}

/// Start the page with JSON overrides. Empty strings keep the defaults.
#[wasm_bindgen]
pub fn galaxy_init_with_config(
    config_json: &str,
    manifest_json: &str,
    page_json: &str,
) -> Result<(), JsValue> {
    let config = if config_json.is_empty() {
        GalaxyConfig::default()
    } else {
        GalaxyConfig::from_json(config_json).map_err(to_js)?
    };
    let manifest = if manifest_json.is_empty() {
        AssetManifest::default()
    } else {
        AssetManifest::from_json(manifest_json).map_err(to_js)?
    };
    let page = if page_json.is_empty() {
        PageConfig::default()
    } else {
        PageConfig::from_json(page_json).map_err(to_js)?
    };
    start(config, manifest, page)
}

#[wasm_bindgen]
pub fn galaxy_pointer_move(x: f32, y: f32) {
    with_app(|app| app.runner.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn galaxy_click(x: f32, y: f32) {
    with_app(|app| app.runner.push_input(InputEvent::Click { x, y }));
}

#[wasm_bindgen]
pub fn galaxy_resize(width: f32, height: f32) {
    with_app(|app| app.runner.push_input(InputEvent::Resize { width, height }));
}

fn start(config: GalaxyConfig, manifest: AssetManifest, page: PageConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    page::start_typewriter(&document, &page);
    if let Err(e) = page::start_scroll_reveal(&document, &page) {
        log::warn!("reveal disabled: {e:?}");
    }

    let Some(canvas) = document
        .get_element_by_id("particles")
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::warn!("galaxy: canvas #particles not found, scene disabled");
        return Ok(());
    };

    start_scene(&window, document, canvas, config, &manifest)?;
    log::info!("cat-galaxy: initialized");
    Ok(())
}

fn start_scene(
    window: &Window,
    document: Document,
    canvas: HtmlCanvasElement,
    config: GalaxyConfig,
    manifest: &AssetManifest,
) -> Result<(), JsValue> {
    let (width, height) = window_size(window);
    let config = config.with_measured_viewport(width, height);

    let seed = js_sys::Date::now() as u64 ^ (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let ctx = GalaxyContext::new(config, seed).map_err(to_js)?;

    let texture = HtmlImageElement::new()?;
    let path = manifest.texture.clone();
    let on_error = Closure::<dyn FnMut()>::new(move || {
        log::warn!("texture {path} failed to load, drawing flat sprites");
    });
    texture.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
    texture.set_src(&manifest.texture);

    let labels = LabelElements::create(&document, &ctx.labels);
    let renderer = Canvas2dRenderer::new(canvas, document, texture)?;
    let runner = GalaxyRunner::new(ctx, renderer);
    APP.with(|cell| *cell.borrow_mut() = Some(App { runner, labels }));

    register_listeners(window)?;
    start_frame_loop(window)
}

fn window_size(window: &Window) -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (read(window.inner_width()), read(window.inner_height()))
}

fn register_listeners(window: &Window) -> Result<(), JsValue> {
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(window) = web_sys::window() {
            let (width, height) = window_size(&window);
            galaxy_resize(width, height);
        }
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |evt: MouseEvent| {
        galaxy_pointer_move(evt.client_x() as f32, evt.client_y() as f32);
    });
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |evt: MouseEvent| {
        galaxy_click(evt.client_x() as f32, evt.client_y() as f32);
    });
    window.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

/// One animation frame: tick the scene, sync label elements and act on
/// open requests.
fn frame() {
    let events = with_app(|app| {
        let events = app.runner.tick();
        if let Some(labels) = &app.labels {
            labels.apply(app.runner.labels());
        }
        events
    });
    for event in events.into_iter().flatten() {
        match event {
            GalaxyEvent::OpenUrl { url, .. } => dom::open_in_new_tab(&url),
        }
    }
}

fn start_frame_loop(window: &Window) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    *slot.borrow_mut() = Some(Closure::new(move || {
        frame();
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed, animation stopped: {e:?}");
            }
        }
    }));

    let first = slot.borrow();
    let cb = first
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}
