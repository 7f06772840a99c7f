use super::{BufferTarget, DrawMode, GlContext, RenderContext};
use crate::error::Error;
use crate::geometry::MeshData;

/// Something that can be drawn with one indexed draw call.
///
/// Each `bind_*` method binds the corresponding buffer and returns `false`
/// when the drawable has no such buffer.
pub trait Drawable<G: GlContext> {
    /// Binds the position buffer.
    fn bind_pos(&self, gl: &G) -> bool;

    /// Binds the normal buffer.
    fn bind_nor(&self, gl: &G) -> bool;

    /// Binds the index buffer.
    fn bind_idx(&self, gl: &G) -> bool;

    /// Primitive type used for drawing.
    fn draw_mode(&self) -> DrawMode;

    /// Number of indices to draw.
    fn elem_count(&self) -> i32;
}

/// GPU-resident buffers for one mesh.
///
/// Buffers are uploaded once by [`Mesh::create`] and never updated.
#[derive(Debug)]
pub struct Mesh<G: GlContext> {
    pos: Option<G::Buffer>,
    nor: Option<G::Buffer>,
    col: Option<G::Buffer>,
    idx: Option<G::Buffer>,
    count: i32,
    draw_mode: DrawMode,
}

impl<G: GlContext> Mesh<G> {
    /// Uploads `data` into freshly created buffers.
    ///
    /// Empty normal or colour arrays produce no buffer.
    pub fn create(ctx: &RenderContext<G>, data: &MeshData) -> Result<Self, Error> {
        let gl = ctx.gl();
        let upload_f32 = |values: &[f32]| -> Result<Option<G::Buffer>, Error> {
            if values.is_empty() {
                return Ok(None);
            }
            let buffer = gl.create_buffer().ok_or(Error::UnableToCreateBuffer)?;
            gl.bind_buffer(BufferTarget::Array, &buffer);
            gl.buffer_f32(BufferTarget::Array, values);
            Ok(Some(buffer))
        };

        let pos = upload_f32(&data.positions)?;
        let nor = upload_f32(&data.normals)?;
        let col = upload_f32(&data.colors)?;

        let idx = gl.create_buffer().ok_or(Error::UnableToCreateBuffer)?;
        gl.bind_buffer(BufferTarget::ElementArray, &idx);
        gl.buffer_u32(BufferTarget::ElementArray, &data.indices);

        log::debug!(
            "uploaded mesh: {} vertices, {} indices",
            data.vertex_count(),
            data.indices.len()
        );

        Ok(Self {
            pos,
            nor,
            col,
            idx: Some(idx),
            count: element_count(data.indices.len())?,
            draw_mode: data.draw_mode,
        })
    }

    /// Binds the colour buffer.
    pub fn bind_col(&self, gl: &G) -> bool {
        bind(gl, BufferTarget::Array, self.col.as_ref())
    }
}

impl<G: GlContext> Drawable<G> for Mesh<G> {
    fn bind_pos(&self, gl: &G) -> bool {
        bind(gl, BufferTarget::Array, self.pos.as_ref())
    }

    fn bind_nor(&self, gl: &G) -> bool {
        bind(gl, BufferTarget::Array, self.nor.as_ref())
    }

    fn bind_idx(&self, gl: &G) -> bool {
        bind(gl, BufferTarget::ElementArray, self.idx.as_ref())
    }

    fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    fn elem_count(&self) -> i32 {
        self.count
    }
}

/// Converts an index count to the `GLsizei` taken by `drawElements`.
fn element_count(len: usize) -> Result<i32, Error> {
    i32::try_from(len).map_err(|_| Error::TooManyIndices(len))
}

fn bind<G: GlContext>(gl: &G, target: BufferTarget, buffer: Option<&G::Buffer>) -> bool {
    match buffer {
        Some(buffer) => {
            gl.bind_buffer(target, buffer);
            true
        }
        None => false,
    }
}
