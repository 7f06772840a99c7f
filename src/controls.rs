//! User-tunable frame parameters.

use glam::Vec4;

use crate::gl::{ColorSlot, GlContext, RenderContext, ShaderProgram};

/// An 8-bit RGB colour.
pub type Rgb = [u8; 3];

/// Bounds and step of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Range {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamps `value` into the range and snaps it to the nearest step.
    pub fn snap(&self, value: f32) -> f32 {
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// Range of [`Controls::frequency`].
pub const FREQUENCY_RANGE: Range = Range::new(1.0, 5.0, 0.5);
/// Range of [`Controls::amplitude`].
pub const AMPLITUDE_RANGE: Range = Range::new(2.0, 3.0, 0.2);
/// Range of [`Controls::wavelength`].
pub const WAVELENGTH_RANGE: Range = Range::new(0.5, 5.0, 0.5);

/// Parameters sampled once per frame and pushed to the shader program.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// `u_Freq`
    pub frequency: f32,
    /// `u_Amp`
    pub amplitude: f32,
    /// `u_Wave`
    pub wavelength: f32,
    colors: [Rgb; 5],
    reload_requested: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 3.0,
            wavelength: 1.0,
            colors: [
                [255, 255, 0],
                [255, 50, 50],
                [130, 0, 225],
                [30, 80, 220],
                [255, 205, 220],
            ],
            reload_requested: false,
        }
    }
}

impl Controls {
    /// Returns the colour picked for `slot`.
    pub fn color(&self, slot: ColorSlot) -> Rgb {
        self.colors[slot as usize]
    }

    /// Picks the colour for `slot`.
    pub fn set_color(&mut self, slot: ColorSlot, color: Rgb) {
        self.colors[slot as usize] = color;
    }

    /// Returns the value pushed to the slot's uniform.
    ///
    /// The inner and first outer colours are boosted so the flame core
    /// saturates; the scale also lands in the alpha channel.
    pub fn color_uniform(&self, slot: ColorSlot) -> Vec4 {
        let scale = match slot {
            ColorSlot::Inner => 2.5,
            ColorSlot::Outer1 => 1.5,
            _ => 1.0,
        };
        let [r, g, b] = self.color(slot).map(|channel| channel as f32 / 255.0 * scale);
        Vec4::new(r, g, b, scale)
    }

    /// Asks the driver to rebuild the scene on the next frame.
    pub fn request_reload(&mut self) {
        self.reload_requested = true;
    }

    /// Returns whether a reload was requested, clearing the request.
    pub fn take_reload(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Pushes colours and wave parameters to `program`.
    pub fn apply<G: GlContext>(&self, ctx: &RenderContext<G>, program: &ShaderProgram<G>) {
        for slot in ColorSlot::ALL {
            program.set_color(ctx, slot, self.color_uniform(slot));
        }
        program.set_frequency(ctx, self.frequency);
        program.set_amplitude(ctx, self.amplitude);
        program.set_wavelength(ctx, self.wavelength);
    }
}
