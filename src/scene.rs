//! The demo scene: one backdrop quad at the origin.

use glam::Vec3;

use crate::{
    error::Error,
    geometry,
    gl::{Drawable, GlContext, Mesh, RenderContext},
};

/// Half the side of the backdrop quad.
///
/// Large enough to fill the view from the demo camera at any common aspect
/// ratio.
pub const BACKDROP_HALF_EXTENT: f32 = 10.0;

/// The drawables rendered every frame.
#[derive(Debug)]
pub struct Scene<G: GlContext> {
    backdrop: Mesh<G>,
}

impl<G: GlContext> Scene<G> {
    /// Uploads the scene geometry.
    pub fn load(ctx: &RenderContext<G>) -> Result<Self, Error> {
        let backdrop = Mesh::create(ctx, &geometry::quad(Vec3::ZERO, BACKDROP_HALF_EXTENT))?;
        Ok(Self { backdrop })
    }

    /// Rebuilds the scene in place.
    ///
    /// On failure the current scene is kept and `false` is returned.
    pub fn reload(&mut self, ctx: &RenderContext<G>) -> bool {
        match Self::load(ctx) {
            Ok(scene) => {
                *self = scene;
                log::info!("scene reloaded");
                true
            }
            Err(error) => {
                log::warn!("scene reload failed, keeping the current scene: {error}");
                false
            }
        }
    }

    /// Returns the drawables in draw order.
    pub fn drawables(&self) -> [&dyn Drawable<G>; 1] {
        [&self.backdrop]
    }
}
