use std::cell::Cell;
use std::num::NonZeroU32;

use super::GlContext;

/// Identifies a [`ShaderProgram`](super::ShaderProgram) within one
/// [`RenderContext`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ProgramId(NonZeroU32);

/// Owns the graphics context and the "currently bound program" marker.
///
/// Every program operation goes through a shared reference to this type, so
/// redundant `useProgram` calls are skipped without any global state.
#[derive(Debug)]
pub struct RenderContext<G: GlContext> {
    gl: G,
    bound_program: Cell<Option<ProgramId>>,
    last_program_id: Cell<u32>,
}

impl<G: GlContext> RenderContext<G> {
    /// Constructs a new [`RenderContext`].
    pub fn new(gl: G) -> Self {
        Self {
            gl,
            bound_program: Cell::new(None),
            last_program_id: Cell::new(0),
        }
    }

    /// Returns the underlying graphics context.
    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// Returns the program bound by the last [`RenderContext::bind_program`].
    pub fn bound_program(&self) -> Option<ProgramId> {
        self.bound_program.get()
    }

    /// Makes `program` current unless it already is.
    pub(crate) fn bind_program(&self, id: ProgramId, program: &G::Program) {
        if self.bound_program.get() != Some(id) {
            self.gl.use_program(program);
            self.bound_program.set(Some(id));
        }
    }

    /// Hands out a fresh id for a newly linked program.
    pub(crate) fn next_program_id(&self) -> ProgramId {
        let next = self.last_program_id.get().saturating_add(1);
        self.last_program_id.set(next);
        ProgramId(NonZeroU32::new(next).unwrap_or(NonZeroU32::MAX))
    }
}
