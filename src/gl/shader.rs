use glam::{Mat4, Vec2, Vec4};

use super::{Drawable, GlContext, ProgramId, RenderContext, ShaderStage};
use crate::error::Error;

/// A vertex attribute declared by the demo shaders.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Attribute {
    /// `vs_Pos`, homogeneous vertex position.
    Pos,
    /// `vs_Nor`, vertex normal.
    Nor,
    /// `vs_Col`, vertex colour.
    Col,
}

impl Attribute {
    /// Number of attributes.
    pub const COUNT: usize = 3;

    /// Every attribute, in declaration order.
    pub const ALL: [Attribute; Self::COUNT] = [Attribute::Pos, Attribute::Nor, Attribute::Col];

    /// The name used in shader source.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Pos => "vs_Pos",
            Attribute::Nor => "vs_Nor",
            Attribute::Col => "vs_Col",
        }
    }
}

/// A uniform declared by the demo shaders.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Uniform {
    /// `u_Model`
    Model,
    /// `u_ModelInvTr`, derived from the model matrix.
    ModelInvTr,
    /// `u_ViewProj`
    ViewProj,
    /// `u_Proj`
    Proj,
    /// `u_View`
    View,
    /// `u_Time`
    Time,
    /// `u_Mouse`
    Mouse,
    /// `u_Drag`
    Drag,
    /// `u_Freq`
    Freq,
    /// `u_Amp`
    Amp,
    /// `u_Wave`
    Wave,
    /// `c0`
    C0,
    /// `c1`
    C1,
    /// `c2`
    C2,
    /// `c3`
    C3,
    /// `c4`
    C4,
    /// `screenSize`
    ScreenSize,
}

impl Uniform {
    /// Number of uniforms.
    pub const COUNT: usize = 17;

    /// Every uniform.
    pub const ALL: [Uniform; Self::COUNT] = [
        Uniform::Model,
        Uniform::ModelInvTr,
        Uniform::ViewProj,
        Uniform::Proj,
        Uniform::View,
        Uniform::Time,
        Uniform::Mouse,
        Uniform::Drag,
        Uniform::Freq,
        Uniform::Amp,
        Uniform::Wave,
        Uniform::C0,
        Uniform::C1,
        Uniform::C2,
        Uniform::C3,
        Uniform::C4,
        Uniform::ScreenSize,
    ];

    /// The name used in shader source. Case-sensitive.
    pub const fn name(self) -> &'static str {
        match self {
            Uniform::Model => "u_Model",
            Uniform::ModelInvTr => "u_ModelInvTr",
            Uniform::ViewProj => "u_ViewProj",
            Uniform::Proj => "u_Proj",
            Uniform::View => "u_View",
            Uniform::Time => "u_Time",
            Uniform::Mouse => "u_Mouse",
            Uniform::Drag => "u_Drag",
            Uniform::Freq => "u_Freq",
            Uniform::Amp => "u_Amp",
            Uniform::Wave => "u_Wave",
            Uniform::C0 => "c0",
            Uniform::C1 => "c1",
            Uniform::C2 => "c2",
            Uniform::C3 => "c3",
            Uniform::C4 => "c4",
            Uniform::ScreenSize => "screenSize",
        }
    }
}

/// The five colour uniforms, named after the role they play in the shader.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ColorSlot {
    /// `c0`
    Inner,
    /// `c1`
    Outer1,
    /// `c2`
    Outer2,
    /// `c3`
    Outer3,
    /// `c4`
    Background,
}

impl ColorSlot {
    /// Every slot, `c0` first.
    pub const ALL: [ColorSlot; 5] = [
        ColorSlot::Inner,
        ColorSlot::Outer1,
        ColorSlot::Outer2,
        ColorSlot::Outer3,
        ColorSlot::Background,
    ];

    /// The uniform backing this slot.
    pub const fn uniform(self) -> Uniform {
        match self {
            ColorSlot::Inner => Uniform::C0,
            ColorSlot::Outer1 => Uniform::C1,
            ColorSlot::Outer2 => Uniform::C2,
            ColorSlot::Outer3 => Uniform::C3,
            ColorSlot::Background => Uniform::C4,
        }
    }
}

/// A compiled shader stage.
#[derive(Debug)]
pub struct Shader<G: GlContext> {
    inner: G::Shader,
}

impl<G: GlContext> Shader<G> {
    /// Compiles `source` as a `stage` shader.
    ///
    /// Fails with [`Error::ShaderCompilation`] carrying the driver's log.
    pub fn compile(
        ctx: &RenderContext<G>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, Error> {
        let gl = ctx.gl();
        let inner = gl.create_shader(stage).ok_or(Error::UnableToCreateShader)?;
        if !gl.compile_shader(&inner, source) {
            return Err(Error::ShaderCompilation(gl.shader_info_log(&inner)));
        }
        Ok(Self { inner })
    }
}

enum UniformValue<'a> {
    Mat4(&'a Mat4),
    Vec2(Vec2),
    Vec4(Vec4),
    Float(f32),
}

/// A linked shader program.
///
/// Attribute and uniform locations are looked up once when linking. A name the
/// shader does not declare is stored as `None` and every operation touching it
/// is silently skipped.
#[derive(Debug)]
pub struct ShaderProgram<G: GlContext> {
    id: ProgramId,
    program: G::Program,
    attributes: [Option<u32>; Attribute::COUNT],
    uniforms: [Option<G::UniformLocation>; Uniform::COUNT],
}

impl<G: GlContext> ShaderProgram<G> {
    /// Links `shaders` into a program.
    ///
    /// Fails with [`Error::ProgramLink`] carrying the driver's log.
    pub fn link(ctx: &RenderContext<G>, shaders: &[Shader<G>]) -> Result<Self, Error> {
        let gl = ctx.gl();
        let program = gl.create_program().ok_or(Error::UnableToCreateProgram)?;
        for shader in shaders {
            gl.attach_shader(&program, &shader.inner);
        }
        if !gl.link_program(&program) {
            return Err(Error::ProgramLink(gl.program_info_log(&program)));
        }

        let attributes = Attribute::ALL.map(|attr| gl.attrib_location(&program, attr.name()));
        let uniforms = Uniform::ALL.map(|uniform| gl.uniform_location(&program, uniform.name()));

        let missing = Uniform::ALL
            .iter()
            .zip(&uniforms)
            .filter(|(_, location)| location.is_none())
            .map(|(uniform, _)| uniform.name())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            log::debug!("program does not use uniforms: {}", missing.join(", "));
        }

        Ok(Self {
            id: ctx.next_program_id(),
            program,
            attributes,
            uniforms,
        })
    }

    /// Compiles a vertex and a fragment shader and links them.
    pub fn from_sources(
        ctx: &RenderContext<G>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, Error> {
        let shaders = [
            Shader::compile(ctx, ShaderStage::Vertex, vertex_source)?,
            Shader::compile(ctx, ShaderStage::Fragment, fragment_source)?,
        ];
        Self::link(ctx, &shaders)
    }

    /// Returns the program's id within its [`RenderContext`].
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Returns the location of `attribute`, if the program declares it.
    pub fn attribute_location(&self, attribute: Attribute) -> Option<u32> {
        self.attributes[attribute as usize]
    }

    /// Returns `true` if the program declares `uniform`.
    pub fn has_uniform(&self, uniform: Uniform) -> bool {
        self.uniforms[uniform as usize].is_some()
    }

    /// Makes this program current, unless it already is.
    pub fn use_program(&self, ctx: &RenderContext<G>) {
        ctx.bind_program(self.id, &self.program);
    }

    /// Sets `u_Model` and derives `u_ModelInvTr` from it.
    pub fn set_model_matrix(&self, ctx: &RenderContext<G>, model: &Mat4) {
        self.set(ctx, Uniform::Model, UniformValue::Mat4(model));
        if self.has_uniform(Uniform::ModelInvTr) {
            let model_inv_tr = model.transpose().inverse();
            self.set(ctx, Uniform::ModelInvTr, UniformValue::Mat4(&model_inv_tr));
        }
    }

    /// Sets `u_ViewProj`.
    pub fn set_view_proj_matrix(&self, ctx: &RenderContext<G>, view_proj: &Mat4) {
        self.set(ctx, Uniform::ViewProj, UniformValue::Mat4(view_proj));
    }

    /// Sets `u_View`.
    pub fn set_view_matrix(&self, ctx: &RenderContext<G>, view: &Mat4) {
        self.set(ctx, Uniform::View, UniformValue::Mat4(view));
    }

    /// Sets `u_Proj`.
    pub fn set_projection_matrix(&self, ctx: &RenderContext<G>, projection: &Mat4) {
        self.set(ctx, Uniform::Proj, UniformValue::Mat4(projection));
    }

    /// Sets `u_Mouse`.
    pub fn set_mouse(&self, ctx: &RenderContext<G>, mouse: Vec2) {
        self.set(ctx, Uniform::Mouse, UniformValue::Vec2(mouse));
    }

    /// Sets `u_Drag`.
    pub fn set_drag(&self, ctx: &RenderContext<G>, drag: Vec2) {
        self.set(ctx, Uniform::Drag, UniformValue::Vec2(drag));
    }

    /// Sets `screenSize`.
    pub fn set_screen_size(&self, ctx: &RenderContext<G>, size: Vec2) {
        self.set(ctx, Uniform::ScreenSize, UniformValue::Vec2(size));
    }

    /// Sets one of the colour uniforms `c0`..`c4`.
    pub fn set_color(&self, ctx: &RenderContext<G>, slot: ColorSlot, color: Vec4) {
        self.set(ctx, slot.uniform(), UniformValue::Vec4(color));
    }

    /// Sets `u_Time`.
    pub fn set_time(&self, ctx: &RenderContext<G>, time: f32) {
        self.set(ctx, Uniform::Time, UniformValue::Float(time));
    }

    /// Sets `u_Freq`.
    pub fn set_frequency(&self, ctx: &RenderContext<G>, frequency: f32) {
        self.set(ctx, Uniform::Freq, UniformValue::Float(frequency));
    }

    /// Sets `u_Amp`.
    pub fn set_amplitude(&self, ctx: &RenderContext<G>, amplitude: f32) {
        self.set(ctx, Uniform::Amp, UniformValue::Float(amplitude));
    }

    /// Sets `u_Wave`.
    pub fn set_wavelength(&self, ctx: &RenderContext<G>, wavelength: f32) {
        self.set(ctx, Uniform::Wave, UniformValue::Float(wavelength));
    }

    /// Draws `drawable` with a single indexed draw call.
    ///
    /// Position and normal arrays are enabled only for the duration of the
    /// call; no vertex attribute array is left enabled afterwards.
    pub fn draw(&self, ctx: &RenderContext<G>, drawable: &dyn Drawable<G>) {
        self.use_program(ctx);
        let gl = ctx.gl();

        let pos = self.enable_attribute(gl, Attribute::Pos, || drawable.bind_pos(gl));
        let nor = self.enable_attribute(gl, Attribute::Nor, || drawable.bind_nor(gl));

        drawable.bind_idx(gl);
        gl.draw_elements_u32(drawable.draw_mode(), drawable.elem_count());

        for location in [pos, nor].into_iter().flatten() {
            gl.disable_vertex_attrib(location);
        }
    }

    /// Enables `attribute` if the program declares it and `bind` succeeds.
    fn enable_attribute(
        &self,
        gl: &G,
        attribute: Attribute,
        bind: impl FnOnce() -> bool,
    ) -> Option<u32> {
        let location = self.attribute_location(attribute)?;
        if !bind() {
            return None;
        }
        gl.enable_vertex_attrib(location);
        gl.vertex_attrib_f32(location, 4);
        Some(location)
    }

    fn set(&self, ctx: &RenderContext<G>, uniform: Uniform, value: UniformValue<'_>) {
        self.use_program(ctx);
        let Some(location) = &self.uniforms[uniform as usize] else {
            return;
        };
        let gl = ctx.gl();
        match value {
            UniformValue::Mat4(m) => gl.uniform_mat4(location, &m.to_cols_array()),
            UniformValue::Vec2(v) => gl.uniform_vec2(location, v.to_array()),
            UniformValue::Vec4(v) => gl.uniform_vec4(location, v.to_array()),
            UniformValue::Float(f) => gl.uniform_float(location, f),
        }
    }
}
