use cat_galaxy::renderer::traits::StarStyle;
use cat_galaxy::{
    FrameData, GalaxyContext, GalaxyEvent, InputEvent, InputQueue, LabelLayer, RenderBuffer,
    Renderer, Viewport,
};

/// Wires the scene to a drawing backend.
///
/// The web entry point keeps one runner in a `thread_local!` and drives it
/// from `requestAnimationFrame`, because wasm-bindgen cannot export generic
/// structs directly.
pub struct GalaxyRunner<R: Renderer> {
    ctx: GalaxyContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    renderer: R,
    /// Viewport the renderer was last sized for.
    sized_for: Viewport,
}

impl<R: Renderer> GalaxyRunner<R> {
    pub fn new(ctx: GalaxyContext, mut renderer: R) -> Self {
        let viewport = ctx.viewport;
        renderer.resize(viewport.width as u32, viewport.height as u32);
        let render_buffer = RenderBuffer::with_capacity(ctx.scene.len() + 1);
        log::info!("runner: {} backend", renderer.backend());
        Self {
            ctx,
            input: InputQueue::new(),
            render_buffer,
            renderer,
            sized_for: viewport,
        }
    }

    /// Queue a host event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the scene, draw it, and return what the host
    /// should act on.
    pub fn tick(&mut self) -> Vec<GalaxyEvent> {
        self.ctx.update(&self.input);
        self.input.drain();

        if self.ctx.viewport != self.sized_for {
            self.sized_for = self.ctx.viewport;
            self.renderer
                .resize(self.sized_for.width as u32, self.sized_for.height as u32);
        }

        self.ctx.build_render_buffer(&mut self.render_buffer);
        let stars = &self.ctx.scene.stars;
        self.renderer.draw(&FrameData {
            camera: self.render_buffer.camera,
            sprites: &self.render_buffer.sprites,
            stars: &stars.points,
            star_style: StarStyle::new(stars, self.ctx.config.fog_density),
            background: self.ctx.config.background(),
            viewport: self.ctx.viewport,
        });

        self.ctx.take_events()
    }

    pub fn labels(&self) -> &LabelLayer {
        &self.ctx.labels
    }

    pub fn context(&self) -> &GalaxyContext {
        &self.ctx
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
