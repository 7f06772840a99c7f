//! A [`GlContext`] that records every call instead of talking to a GPU.

use std::cell::{Cell, RefCell};

use super::{BufferTarget, DrawMode, GlContext, ShaderStage};
use crate::gl::shader::{Attribute, Uniform};

/// One recorded graphics call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(ShaderStage),
    CompileShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(u32),
    UniformMat4(&'static str, [f32; 16]),
    UniformVec2(&'static str, [f32; 2]),
    UniformVec4(&'static str, [f32; 4]),
    UniformFloat(&'static str, f32),
    EnableAttrib(u32),
    DisableAttrib(u32),
    AttribPointer(u32, i32),
    CreateBuffer(u32),
    BindBuffer(BufferTarget, u32),
    BufferF32(BufferTarget, usize),
    BufferU32(BufferTarget, usize),
    DrawElements(DrawMode, i32),
    ClearColor([f32; 4]),
    Clear,
    Viewport(i32, i32, i32, i32),
    EnableDepthTest,
}

impl Call {
    /// Returns `true` for uniform uploads.
    pub(crate) fn is_uniform(&self) -> bool {
        matches!(
            self,
            Call::UniformMat4(..)
                | Call::UniformVec2(..)
                | Call::UniformVec4(..)
                | Call::UniformFloat(..)
        )
    }
}

/// Records calls and emulates just enough state for assertions.
///
/// By default the "linked" program declares every attribute and uniform the
/// crate knows about; attribute locations follow declaration order.
#[derive(Debug)]
pub(crate) struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    last_handle: Cell<u32>,
    attributes: Vec<&'static str>,
    uniforms: Vec<&'static str>,
    compile_error: Option<String>,
    link_error: Option<String>,
    clear_color: Cell<[f32; 4]>,
    framebuffer: Cell<Option<[f32; 4]>>,
    refuse_buffers: Cell<bool>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self {
            calls: RefCell::default(),
            last_handle: Cell::new(0),
            attributes: Attribute::ALL.iter().map(|a| a.name()).collect(),
            uniforms: Uniform::ALL.iter().map(|u| u.name()).collect(),
            compile_error: None,
            link_error: None,
            clear_color: Cell::new([0.0; 4]),
            framebuffer: Cell::new(None),
            refuse_buffers: Cell::new(false),
        }
    }
}

impl RecordingGl {
    /// Declares only the given attributes.
    pub(crate) fn with_attributes(mut self, names: &[&'static str]) -> Self {
        self.attributes = names.to_vec();
        self
    }

    /// Declares only the given uniforms.
    pub(crate) fn with_uniforms(mut self, names: &[&'static str]) -> Self {
        self.uniforms = names.to_vec();
        self
    }

    /// Makes every compilation fail with `log`.
    pub(crate) fn failing_compile(mut self, log: &str) -> Self {
        self.compile_error = Some(log.to_string());
        self
    }

    /// Makes every link fail with `log`.
    pub(crate) fn failing_link(mut self, log: &str) -> Self {
        self.link_error = Some(log.to_string());
        self
    }

    /// Makes `create_buffer` fail from now on, or succeed again.
    pub(crate) fn refuse_buffers(&self, refuse: bool) {
        self.refuse_buffers.set(refuse);
    }

    /// Returns a copy of every call so far.
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Forgets every call so far.
    pub(crate) fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Counts the calls matching `predicate`.
    pub(crate) fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    /// Returns the last value uploaded to the named matrix uniform.
    pub(crate) fn last_mat4(&self, name: &str) -> Option<[f32; 16]> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::UniformMat4(n, value) if *n == name => Some(*value),
            _ => None,
        })
    }

    /// Returns the last value uploaded to the named vec2 uniform.
    pub(crate) fn last_vec2(&self, name: &str) -> Option<[f32; 2]> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::UniformVec2(n, value) if *n == name => Some(*value),
            _ => None,
        })
    }

    /// The colour every pixel holds after the last clear, if any.
    pub(crate) fn framebuffer(&self) -> Option<[f32; 4]> {
        self.framebuffer.get()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_handle(&self) -> u32 {
        let handle = self.last_handle.get() + 1;
        self.last_handle.set(handle);
        handle
    }
}

impl GlContext for RecordingGl {
    type Program = u32;
    type Shader = u32;
    type Buffer = u32;
    type UniformLocation = &'static str;

    fn create_shader(&self, stage: ShaderStage) -> Option<u32> {
        self.record(Call::CreateShader(stage));
        Some(self.next_handle())
    }

    fn compile_shader(&self, shader: &u32, _source: &str) -> bool {
        self.record(Call::CompileShader(*shader));
        self.compile_error.is_none()
    }

    fn shader_info_log(&self, _shader: &u32) -> String {
        self.compile_error.clone().unwrap_or_default()
    }

    fn create_program(&self) -> Option<u32> {
        let handle = self.next_handle();
        self.record(Call::CreateProgram(handle));
        Some(handle)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.record(Call::AttachShader(*program, *shader));
    }

    fn link_program(&self, program: &u32) -> bool {
        self.record(Call::LinkProgram(*program));
        self.link_error.is_none()
    }

    fn program_info_log(&self, _program: &u32) -> String {
        self.link_error.clone().unwrap_or_default()
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> Option<u32> {
        self.attributes
            .iter()
            .position(|declared| *declared == name)
            .map(|index| index as u32)
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<&'static str> {
        self.uniforms.iter().copied().find(|declared| *declared == name)
    }

    fn use_program(&self, program: &u32) {
        self.record(Call::UseProgram(*program));
    }

    fn uniform_mat4(&self, location: &&'static str, value: &[f32; 16]) {
        self.record(Call::UniformMat4(*location, *value));
    }

    fn uniform_vec2(&self, location: &&'static str, value: [f32; 2]) {
        self.record(Call::UniformVec2(*location, value));
    }

    fn uniform_vec4(&self, location: &&'static str, value: [f32; 4]) {
        self.record(Call::UniformVec4(*location, value));
    }

    fn uniform_float(&self, location: &&'static str, value: f32) {
        self.record(Call::UniformFloat(*location, value));
    }

    fn enable_vertex_attrib(&self, index: u32) {
        self.record(Call::EnableAttrib(index));
    }

    fn disable_vertex_attrib(&self, index: u32) {
        self.record(Call::DisableAttrib(index));
    }

    fn vertex_attrib_f32(&self, index: u32, components: i32) {
        self.record(Call::AttribPointer(index, components));
    }

    fn create_buffer(&self) -> Option<u32> {
        if self.refuse_buffers.get() {
            return None;
        }
        let handle = self.next_handle();
        self.record(Call::CreateBuffer(handle));
        Some(handle)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &u32) {
        self.record(Call::BindBuffer(target, *buffer));
    }

    fn buffer_f32(&self, target: BufferTarget, data: &[f32]) {
        self.record(Call::BufferF32(target, data.len()));
    }

    fn buffer_u32(&self, target: BufferTarget, data: &[u32]) {
        self.record(Call::BufferU32(target, data.len()));
    }

    fn draw_elements_u32(&self, mode: DrawMode, count: i32) {
        self.record(Call::DrawElements(mode, count));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.clear_color.set([r, g, b, a]);
        self.record(Call::ClearColor([r, g, b, a]));
    }

    fn clear(&self) {
        self.framebuffer.set(Some(self.clear_color.get()));
        self.record(Call::Clear);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn enable_depth_test(&self) {
        self.record(Call::EnableDepthTest);
    }
}
