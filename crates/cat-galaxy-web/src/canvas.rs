use std::collections::HashMap;
use std::f64::consts::TAU;

use cat_galaxy::renderer::traits::StarStyle;
use cat_galaxy::{Color, FrameData, Renderer, SpriteInstance, StarVertex};
use glam::{Mat4, Vec3, Vec4};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
}

/// A point projected to CSS pixels, with its distance in front of the eye.
struct Projected {
    x: f64,
    y: f64,
    depth: f32,
}

/// World-to-CSS-pixel mapping for one frame.
struct Projection {
    view_proj: Mat4,
    view: Mat4,
    focal: f32,
    width: f32,
    height: f32,
}

impl Projection {
    fn from_frame(frame: &FrameData) -> Self {
        Self {
            view_proj: Mat4::from_cols_array_2d(&frame.camera.view_proj),
            view: Mat4::from_cols_array_2d(&frame.camera.view),
            focal: frame.camera.focal,
            width: frame.viewport.width,
            height: frame.viewport.height,
        }
    }

    /// `None` behind the eye or past the far plane.
    fn project(&self, point: Vec3) -> Option<Projected> {
        let clip = self.view_proj * Vec4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if ndc.z >= 1.0 {
            return None;
        }
        Some(Projected {
            x: f64::from((ndc.x * 0.5 + 0.5) * self.width),
            y: f64::from((-ndc.y * 0.5 + 0.5) * self.height),
            depth: -self.view.transform_point3(point).z,
        })
    }
}

/// Painter's-algorithm renderer on a 2D canvas: stars first, then sprites
/// in the back-to-front order the scene already sorted them in.
pub struct Canvas2dRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    document: Document,
    texture: HtmlImageElement,
    /// Texture multiplied by a tint, keyed by packed `0xRRGGBB`.
    tinted: HashMap<u32, HtmlCanvasElement>,
    width: u32,
    height: u32,
    dpr: f64,
}

impl Canvas2dRenderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        document: Document,
        texture: HtmlImageElement,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("not a 2d context"))?;

        Ok(Self {
            canvas,
            ctx,
            document,
            texture,
            tinted: HashMap::new(),
            width: 0,
            height: 0,
            dpr: device_pixel_ratio(),
        })
    }

    fn texture_ready(&self) -> bool {
        self.texture.complete() && self.texture.natural_width() > 0
    }

    /// The shared texture tinted by `color`, built once per color.
    fn tinted_texture(&mut self, color: Color) -> Option<HtmlCanvasElement> {
        let key = color.to_hex();
        if let Some(canvas) = self.tinted.get(&key) {
            return Some(canvas.clone());
        }
        if !self.texture_ready() {
            return None;
        }
        match self.build_tinted(color) {
            Ok(canvas) => {
                self.tinted.insert(key, canvas.clone());
                Some(canvas)
            }
            Err(e) => {
                log::warn!("canvas2d: tint {} failed: {e:?}", color.css());
                None
            }
        }
    }

    fn build_tinted(&self, color: Color) -> Result<HtmlCanvasElement, JsValue> {
        let w = self.texture.natural_width();
        let h = self.texture.natural_height();
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(w);
        canvas.set_height(h);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let (w, h) = (f64::from(w), f64::from(h));
        ctx.draw_image_with_html_image_element_and_dw_and_dh(&self.texture, 0.0, 0.0, w, h)?;
        ctx.set_global_composite_operation("multiply")?;
        ctx.set_fill_style_str(&color.css());
        ctx.fill_rect(0.0, 0.0, w, h);
        // multiply leaves the tint on transparent pixels; cut back to the texture's alpha
        ctx.set_global_composite_operation("destination-in")?;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(&self.texture, 0.0, 0.0, w, h)?;
        Ok(canvas)
    }

    fn draw_stars(&self, stars: &[StarVertex], style: StarStyle, proj: &Projection) {
        self.ctx.set_fill_style_str(&style.color.css());
        let scale = proj.height * 0.5;
        for star in stars {
            let Some(p) = proj.project(Vec3::new(star.x, star.y, star.z)) else {
                continue;
            };
            self.ctx.set_global_alpha(f64::from(style.alpha_at(p.depth)));
            let size = f64::from((style.size * scale / p.depth).max(0.5));
            self.ctx.fill_rect(p.x - size * 0.5, p.y - size * 0.5, size, size);
        }
    }

    fn draw_sprite(&mut self, sprite: &SpriteInstance, proj: &Projection) {
        let Some(p) = proj.project(Vec3::new(sprite.x, sprite.y, sprite.z)) else {
            return;
        };
        let size = f64::from(sprite.size * proj.focal * proj.height * 0.5 / p.depth);
        let alpha = f64::from(sprite.visible_alpha());
        if size < 0.5 || alpha <= 0.0 {
            return;
        }
        let tint = Color::rgb(sprite.r, sprite.g, sprite.b);

        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        let placed = self
            .ctx
            .translate(p.x, p.y)
            .and_then(|_| self.ctx.rotate(f64::from(sprite.screen_rotation())));
        if placed.is_ok() {
            match self.tinted_texture(tint) {
                Some(image) => {
                    let half = size * 0.5;
                    let _ = self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
                        &image, -half, -half, size, size,
                    );
                }
                None => {
                    // texture not loaded (or failed): flat disc in the tint color
                    self.ctx.set_fill_style_str(&tint.css());
                    self.ctx.begin_path();
                    let _ = self.ctx.arc(0.0, 0.0, size * 0.5, 0.0, TAU);
                    self.ctx.fill();
                }
            }
        }
        self.ctx.restore();
    }
}

impl Renderer for Canvas2dRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn resize(&mut self, width: u32, height: u32) {
        let dpr = device_pixel_ratio();
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        // backing store in physical pixels, drawing ops in CSS pixels
        self.canvas.set_width((f64::from(width) * dpr) as u32);
        self.canvas.set_height((f64::from(height) * dpr) as u32);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
        if self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).is_err() {
            log::warn!("canvas2d: could not apply pixel ratio {dpr}");
        }
        log::debug!("canvas2d: {width}x{height} @{dpr}x");
    }

    fn draw(&mut self, frame: &FrameData) {
        // browser zoom or a monitor change moves the pixel ratio without a resize
        if device_pixel_ratio() != self.dpr {
            self.resize(self.width, self.height);
        }
        let proj = Projection::from_frame(frame);

        let (w, h) = (f64::from(proj.width), f64::from(proj.height));
        self.ctx.set_global_alpha(1.0);
        match frame.background {
            Some(color) => {
                self.ctx.set_fill_style_str(&color.css());
                self.ctx.fill_rect(0.0, 0.0, w, h);
            }
            None => self.ctx.clear_rect(0.0, 0.0, w, h),
        }

        self.draw_stars(frame.stars, frame.star_style, &proj);
        for sprite in frame.sprites {
            self.draw_sprite(sprite, &proj);
        }
        self.ctx.set_global_alpha(1.0);
    }
}
