/// Ring of scale presets around a base scale.
///
/// Step `n` maps to `base * (1 - (n - 1) * step)`, so step 1 is the base,
/// step 0 slightly larger and step 2 slightly smaller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSelector {
    base: f32,
    step: f32,
    presets: u8,
    current: u8,
}

impl ScaleSelector {
    pub fn new(base: f32, step: f32, presets: u8, current: u8) -> Self {
        let presets = presets.max(1);
        Self {
            base,
            step,
            presets,
            current: current % presets,
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn scale(&self) -> f32 {
        self.base * (1.0 - (self.current as f32 - 1.0) * self.step)
    }

    /// Advance to the next preset, wrapping, and return its scale.
    pub fn next(&mut self) -> f32 {
        self.current = (self.current + 1) % self.presets;
        self.scale()
    }
}
