//! ## Wavefire
//!
//! A real-time WebGL2 wave shader demo. A backdrop quad filling the view is drawn
//! every animation frame with a fragment shader driven by time, pointer input and a
//! panel of user-tunable parameters.
//!
//! The pieces, bottom-up:
//!
//! - [`gl`]: the graphics seam, shader programs, meshes and the [`Renderer`].
//! - [`geometry`]: CPU-side mesh data (square, cube, icosphere).
//! - [`camera`]: perspective look-at camera.
//! - [`scene`]: the drawables rendered every frame.
//! - [`event`]: pointer events and the per-frame input queue.
//! - [`controls`] and [`panel`]: frame parameters and the DOM panel editing them.
//! - [`render`]: the `requestAnimationFrame` loop.
//!
//! [`Renderer`]: gl::Renderer

pub mod camera;

/// Browser console logging.
pub mod console;

pub mod controls;

/// Error type.
pub mod error;

/// Pointer input.
pub mod event;

/// DOM listener lifetimes.
mod event_callback;

/// Mesh generators.
pub mod geometry;

pub mod gl;

pub mod panel;

/// Animation loop.
pub mod render;

pub mod scene;

/// Browser helpers.
pub mod utils;

/// Bundled GLSL ES 3.00 sources.
pub mod shaders {
    /// Vertex stage declaring `vs_Pos`, `vs_Nor`, `vs_Col` and the matrix uniforms.
    pub const VERTEX_SHADER: &str = include_str!("shaders/custom-vert.glsl");

    /// Fragment stage rendering the animated flame.
    pub const FRAGMENT_SHADER: &str = include_str!("shaders/custom-frag.glsl");
}

pub use camera::Camera;
pub use controls::Controls;
pub use error::Error;
pub use gl::{Renderer, RendererOptions};
pub use panel::ControlPanel;
pub use render::run_animation_loop;

// Re-export the crates used in the public API.
pub use glam;
pub use web_sys;
