//! ## Graphics
//!
//! Everything that talks to the GPU goes through [`GlContext`], a narrow
//! trait covering the calls this crate makes. [`web_sys::WebGl2RenderingContext`]
//! implements it for the browser; tests use a recording implementation.
//!
//! - [`RenderContext`]: owns the [`GlContext`] and remembers which
//!   [`ShaderProgram`] is bound.
//! - [`ShaderProgram`]: a linked program with its attribute and uniform
//!   locations looked up once.
//! - [`Drawable`]: anything with vertex/index buffers that can be drawn.
//! - [`Renderer`]: clears the frame, pushes per-frame uniforms and draws.

/// Rendering context and program binding.
mod context;

/// Drawables and GPU meshes.
pub mod drawable;

/// Shader stages and programs.
pub mod shader;

/// Frame renderer.
pub mod renderer;

/// [`GlContext`] implementation for WebGL2.
mod webgl2;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ProgramId, RenderContext};
pub use drawable::{Drawable, Mesh};
pub use renderer::{Renderer, RendererOptions, Surface};
pub use shader::{Attribute, ColorSlot, Shader, ShaderProgram, Uniform};

use std::fmt::Debug;
use web_sys::WebGl2RenderingContext as GL;

/// A shader pipeline stage.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum ShaderStage {
    /// Vertex shader.
    Vertex = GL::VERTEX_SHADER,
    /// Fragment shader.
    Fragment = GL::FRAGMENT_SHADER,
}

/// Draw mode.
///
/// This enum lists the primitive types accepted by `drawElements()`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum DrawMode {
    /// Draw as points.
    Points = GL::POINTS,
    /// Draw as a line strip.
    LineStrip = GL::LINE_STRIP,
    /// Draw as a line loop.
    LineLoop = GL::LINE_LOOP,
    /// Draw as lines.
    Lines = GL::LINES,
    /// Draw as a triangle strip.
    TriangleStrip = GL::TRIANGLE_STRIP,
    /// Draw as a triangle fan.
    TriangleFan = GL::TRIANGLE_FAN,
    /// Draw as triangles.
    Triangles = GL::TRIANGLES,
}

/// Buffer binding point.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum BufferTarget {
    /// Vertex attribute data.
    Array = GL::ARRAY_BUFFER,
    /// Index data.
    ElementArray = GL::ELEMENT_ARRAY_BUFFER,
}

/// The subset of a WebGL-style API used by this crate.
///
/// Uniform uploads, attribute setup and draw calls cannot fail; only object
/// creation, compilation and linking report failure.
pub trait GlContext {
    /// Linked program handle.
    type Program: Debug;
    /// Shader object handle.
    type Shader: Debug;
    /// Buffer object handle.
    type Buffer: Debug;
    /// Uniform location handle.
    type UniformLocation: Debug;

    /// Creates an empty shader object for the given stage.
    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;

    /// Uploads `source` and compiles it. Returns the compile status.
    fn compile_shader(&self, shader: &Self::Shader, source: &str) -> bool;

    /// Returns the compiler diagnostics for `shader`.
    fn shader_info_log(&self, shader: &Self::Shader) -> String;

    /// Creates an empty program object.
    fn create_program(&self) -> Option<Self::Program>;

    /// Attaches a compiled shader to a program.
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);

    /// Links the program. Returns the link status.
    fn link_program(&self, program: &Self::Program) -> bool;

    /// Returns the linker diagnostics for `program`.
    fn program_info_log(&self, program: &Self::Program) -> String;

    /// Looks up a vertex attribute. `None` if the program does not declare it.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;

    /// Looks up a uniform. `None` if the program does not declare it.
    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;

    /// Makes `program` current.
    fn use_program(&self, program: &Self::Program);

    /// Uploads a column-major 4x4 matrix.
    fn uniform_mat4(&self, location: &Self::UniformLocation, value: &[f32; 16]);

    /// Uploads a 2-component vector.
    fn uniform_vec2(&self, location: &Self::UniformLocation, value: [f32; 2]);

    /// Uploads a 4-component vector.
    fn uniform_vec4(&self, location: &Self::UniformLocation, value: [f32; 4]);

    /// Uploads a scalar.
    fn uniform_float(&self, location: &Self::UniformLocation, value: f32);

    /// Enables the vertex attribute array at `index`.
    fn enable_vertex_attrib(&self, index: u32);

    /// Disables the vertex attribute array at `index`.
    fn disable_vertex_attrib(&self, index: u32);

    /// Describes the bound array buffer as tightly packed `f32` vectors of
    /// `components` elements, starting at offset zero.
    fn vertex_attrib_f32(&self, index: u32, components: i32);

    /// Creates an empty buffer object.
    fn create_buffer(&self) -> Option<Self::Buffer>;

    /// Binds `buffer` to `target`.
    fn bind_buffer(&self, target: BufferTarget, buffer: &Self::Buffer);

    /// Uploads `f32` data to the buffer bound at `target`.
    fn buffer_f32(&self, target: BufferTarget, data: &[f32]);

    /// Uploads `u32` data to the buffer bound at `target`.
    fn buffer_u32(&self, target: BufferTarget, data: &[u32]);

    /// Issues an indexed draw with 32-bit unsigned indices.
    fn draw_elements_u32(&self, mode: DrawMode, count: i32);

    /// Sets the colour used by [`GlContext::clear`].
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);

    /// Clears the colour and depth buffers.
    fn clear(&self);

    /// Sets the viewport rectangle.
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    /// Enables depth testing.
    fn enable_depth_test(&self);
}
