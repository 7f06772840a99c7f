use glam::{Mat4, Vec2};
use web_sys::{
    wasm_bindgen::{JsCast, JsValue},
    HtmlCanvasElement, Performance, WebGl2RenderingContext as GL,
};

use super::{Drawable, GlContext, RenderContext, ShaderProgram};
use crate::{
    camera::Camera,
    error::Error,
    event::{InputQueue, PointerState},
    event_callback::{EventCallback, PointerListener},
    utils::{get_or_create_canvas, performance},
};

/// Something with a resizable pixel size, such as a `<canvas>`.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Resizes the backing store.
    fn set_size(&self, width: u32, height: u32);
}

impl Surface for HtmlCanvasElement {
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn set_size(&self, width: u32, height: u32) {
        self.set_width(width);
        self.set_height(height);
    }
}

/// Options for the [`Renderer`].
#[derive(Debug)]
pub struct RendererOptions {
    /// The canvas element ID.
    canvas_id: Option<String>,
    /// Override the canvas size.
    size: Option<(u32, u32)>,
    /// Clear colour.
    clear_color: [f32; 4],
    /// Measure performance using the `performance` API.
    measure_performance: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            canvas_id: None,
            size: None,
            clear_color: [0.2, 0.2, 0.2, 1.0],
            measure_performance: false,
        }
    }
}

impl RendererOptions {
    /// Constructs a new [`RendererOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the id of the `<canvas>` to render into.
    ///
    /// Without an id a canvas is created under `<body>`.
    pub fn canvas_id(mut self, id: &str) -> Self {
        self.canvas_id = Some(id.to_string());
        self
    }

    /// Sets the size of the canvas, in pixels.
    pub fn size(mut self, size: (u32, u32)) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the colour the frame is cleared to.
    pub fn clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    /// Records a `performance` measure for every rendered frame.
    pub fn measure_performance(mut self, enabled: bool) -> Self {
        self.measure_performance = enabled;
        self
    }
}

/// Frame renderer.
///
/// Clears the surface, pushes the per-frame matrices and pointer state to a
/// [`ShaderProgram`] and draws each [`Drawable`] with it.
#[derive(Debug)]
pub struct Renderer<G: GlContext, S: Surface> {
    /// Graphics context.
    context: RenderContext<G>,
    /// Render target.
    surface: S,
    /// Pointer events waiting for the next frame.
    input: InputQueue,
    /// Pointer state as of the last frame.
    pointer: PointerState,
    /// Pointer listener, removed on drop.
    _listener: Option<PointerListener>,
    /// Performance measurement.
    performance: Option<Performance>,
}

impl Renderer<GL, HtmlCanvasElement> {
    /// Constructs a new [`Renderer`] drawing into `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        Self::new_with_canvas(canvas, RendererOptions::default())
    }

    /// Constructs a new [`Renderer`] with the given options.
    pub fn new_with_options(options: RendererOptions) -> Result<Self, Error> {
        let canvas = get_or_create_canvas(options.canvas_id.as_deref())?;
        Self::new_with_canvas(canvas, options)
    }

    fn new_with_canvas(canvas: HtmlCanvasElement, options: RendererOptions) -> Result<Self, Error> {
        let gl = canvas
            .get_context("webgl2")?
            .ok_or(Error::UnableToRetrieveWebGl2Context)?
            .dyn_into::<GL>()
            .map_err(JsValue::from)?;

        let mut renderer = Self::with_context(RenderContext::new(gl), canvas.clone());
        renderer._listener = Some(EventCallback::new_pointer(
            canvas.into(),
            renderer.input.clone(),
        )?);

        if let Some((width, height)) = options.size {
            renderer.set_size(width, height);
        }
        let [r, g, b, a] = options.clear_color;
        renderer.set_clear_color(r, g, b, a);
        if options.measure_performance {
            renderer.performance = performance();
        }
        Ok(renderer)
    }
}

impl<G: GlContext, S: Surface> Renderer<G, S> {
    /// Constructs a [`Renderer`] over an existing context and surface.
    ///
    /// No pointer listener is installed; feed events through
    /// [`Renderer::input`].
    pub fn with_context(context: RenderContext<G>, surface: S) -> Self {
        Self {
            context,
            surface,
            input: InputQueue::new(),
            pointer: PointerState::default(),
            _listener: None,
            performance: None,
        }
    }

    /// Returns the rendering context.
    pub fn context(&self) -> &RenderContext<G> {
        &self.context
    }

    /// Returns the render target.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns a handle to the pointer event queue.
    pub fn input(&self) -> InputQueue {
        self.input.clone()
    }

    /// Returns the pointer state as of the last frame.
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Sets the colour used by [`Renderer::clear`].
    pub fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.context.gl().clear_color(r, g, b, a);
    }

    /// Resizes the surface.
    ///
    /// Camera matrices are the caller's business.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.surface.set_size(width, height);
    }

    /// Returns the surface size in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.surface.size()
    }

    /// Sets the viewport to cover `width` x `height` pixels.
    pub fn set_viewport(&self, width: u32, height: u32) {
        self.context.gl().viewport(0, 0, width as i32, height as i32);
    }

    /// Clears the colour and depth buffers.
    pub fn clear(&self) {
        self.context.gl().clear();
    }

    /// Folds queued pointer events into the pointer state.
    pub fn process_input(&mut self) {
        for event in self.input.drain() {
            self.pointer.apply(&event);
        }
    }

    /// Renders one frame.
    ///
    /// Uniforms are pushed once, then every drawable is drawn in order at the
    /// origin. The combined `u_ViewProj` is built from the camera's initial
    /// view matrix; `u_View` carries the live one.
    pub fn render(
        &mut self,
        camera: &Camera,
        program: &ShaderProgram<G>,
        drawables: &[&dyn Drawable<G>],
    ) {
        self.measure_begin("render");
        self.process_input();

        let ctx = &self.context;
        let view_proj = *camera.projection_matrix() * *camera.initial_view_matrix();
        let (width, height) = self.surface.size();

        program.set_model_matrix(ctx, &Mat4::IDENTITY);
        program.set_view_proj_matrix(ctx, &view_proj);
        program.set_view_matrix(ctx, camera.view_matrix());
        program.set_mouse(ctx, self.pointer.mouse);
        program.set_drag(ctx, self.pointer.drag);
        program.set_projection_matrix(ctx, camera.projection_matrix());
        program.set_screen_size(ctx, Vec2::new(width as f32, height as f32));

        for drawable in drawables {
            program.draw(ctx, *drawable);
        }
        self.measure_end("render");
    }

    /// Measures the beginning of a performance mark.
    fn measure_begin(&self, label: &str) {
        if let Some(performance) = &self.performance {
            performance.mark(label).unwrap_or_default();
        }
    }

    /// Measures the end of a performance mark.
    fn measure_end(&self, label: &str) {
        if let Some(performance) = &self.performance {
            performance
                .measure_with_start_mark(label, label)
                .unwrap_or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{PointerEvent, PointerEventKind};
    use crate::geometry;
    use crate::gl::testing::{Call, RecordingGl};
    use crate::gl::{DrawMode, Mesh};
    use glam::Vec3;
    use std::cell::Cell;

    #[derive(Debug, Default)]
    struct FakeSurface(Cell<(u32, u32)>);

    impl Surface for FakeSurface {
        fn size(&self) -> (u32, u32) {
            self.0.get()
        }

        fn set_size(&self, width: u32, height: u32) {
            self.0.set((width, height));
        }
    }

    type TestRenderer = Renderer<RecordingGl, FakeSurface>;

    fn setup() -> (TestRenderer, ShaderProgram<RecordingGl>, Mesh<RecordingGl>) {
        let mut renderer = Renderer::with_context(
            RenderContext::new(RecordingGl::default()),
            FakeSurface::default(),
        );
        renderer.set_size(800, 600);
        let program = ShaderProgram::from_sources(renderer.context(), "", "").unwrap();
        let mesh = Mesh::create(renderer.context(), &geometry::square(Vec3::ZERO)).unwrap();
        renderer.context().gl().reset();
        (renderer, program, mesh)
    }

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 1.0, 3.0), Vec3::ZERO)
    }

    fn draws(renderer: &TestRenderer) -> usize {
        renderer
            .context()
            .gl()
            .count(|c| matches!(c, Call::DrawElements(..)))
    }

    #[test]
    fn empty_frame_clears_and_pushes_uniforms() {
        let (mut renderer, program, _) = setup();
        renderer.set_clear_color(0.2, 0.2, 0.2, 1.0);
        renderer.clear();
        renderer.render(&camera(), &program, &[]);

        let gl = renderer.context().gl();
        assert_eq!(gl.count(|c| *c == Call::Clear), 1);
        for name in ["u_Model", "u_ModelInvTr", "u_ViewProj", "u_View", "u_Proj"] {
            assert!(gl.last_mat4(name).is_some(), "{name} not pushed");
        }
        for name in ["u_Mouse", "u_Drag", "screenSize"] {
            assert!(gl.last_vec2(name).is_some(), "{name} not pushed");
        }
        assert_eq!(draws(&renderer), 0);
    }

    #[test]
    fn cleared_empty_frame_is_uniform_clear_color() {
        let (mut renderer, program, _) = setup();
        renderer.set_clear_color(0.2, 0.2, 0.2, 1.0);
        renderer.clear();
        renderer.render(&camera(), &program, &[]);

        let gl = renderer.context().gl();
        assert_eq!(gl.framebuffer(), Some([0.2, 0.2, 0.2, 1.0]));
        assert_eq!(gl.last_vec2("screenSize"), Some([800.0, 600.0]));
        assert_eq!(draws(&renderer), 0);
    }

    #[test]
    fn one_draw_per_drawable_after_all_uniforms() {
        let (mut renderer, program, mesh) = setup();
        renderer.render(&camera(), &program, &[&mesh]);
        let uniforms_for_one = renderer.context().gl().count(Call::is_uniform);
        renderer.context().gl().reset();

        renderer.render(&camera(), &program, &[&mesh, &mesh, &mesh]);

        let calls = renderer.context().gl().calls();
        let first_draw = calls
            .iter()
            .position(|c| matches!(c, Call::DrawElements(..)))
            .unwrap();
        assert_eq!(draws(&renderer), 3);
        assert!(!calls[first_draw..].iter().any(Call::is_uniform));
        assert_eq!(calls.iter().filter(|c| c.is_uniform()).count(), uniforms_for_one);
        assert!(calls.contains(&Call::DrawElements(DrawMode::Triangles, 6)));
    }

    #[test]
    fn view_proj_uses_initial_view() {
        let (mut renderer, program, _) = setup();
        let mut camera = camera();
        camera.look_at(Vec3::new(2.0, 2.0, 2.0), Vec3::ZERO);
        camera.update();

        renderer.render(&camera, &program, &[]);

        let gl = renderer.context().gl();
        let expected = *camera.projection_matrix() * *camera.initial_view_matrix();
        assert_eq!(gl.last_mat4("u_ViewProj"), Some(expected.to_cols_array()));
        assert_eq!(
            gl.last_mat4("u_View"),
            Some(camera.view_matrix().to_cols_array())
        );
        assert_eq!(gl.last_mat4("u_Model"), Some(Mat4::IDENTITY.to_cols_array()));
    }

    #[test]
    fn queued_pointer_events_apply_on_render() {
        let (mut renderer, program, _) = setup();
        let input = renderer.input();
        input.push(PointerEvent::new(PointerEventKind::Moved, 10.0, 20.0));
        input.push(PointerEvent::new(PointerEventKind::Pressed, 10.0, 20.0));
        input.push(PointerEvent::new(PointerEventKind::Moved, 30.0, 40.0));
        input.push(PointerEvent::new(PointerEventKind::Released, 30.0, 40.0));
        input.push(PointerEvent::new(PointerEventKind::Moved, 50.0, 60.0));

        renderer.render(&camera(), &program, &[]);

        let gl = renderer.context().gl();
        assert_eq!(gl.last_vec2("u_Mouse"), Some([50.0, 60.0]));
        assert_eq!(gl.last_vec2("u_Drag"), Some([30.0, 40.0]));
        assert!(input.is_empty());
    }

    #[test]
    fn pointer_events_wait_for_the_next_frame() {
        let (mut renderer, program, _) = setup();
        renderer.render(&camera(), &program, &[]);
        renderer
            .input()
            .push(PointerEvent::new(PointerEventKind::Moved, 1.0, 2.0));

        assert_eq!(renderer.pointer().mouse, Vec2::ZERO);
        renderer.render(&camera(), &program, &[]);
        assert_eq!(renderer.pointer().mouse, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn viewport_covers_requested_size() {
        let (renderer, _, _) = setup();
        renderer.set_viewport(640, 480);
        assert!(renderer
            .context()
            .gl()
            .calls()
            .contains(&Call::Viewport(0, 0, 640, 480)));
    }
}
