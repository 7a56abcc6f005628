use eframe::egui::{ecolor::Hsva, Color32};
use tracing::debug;

/// Resampling interval while the portrait is hovered, in seconds
pub const SAMPLE_INTERVAL: f64 = 0.05;

/// Visual parameters of the guide portrait
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileParams {
    pub border_scale: f32,
    pub shadow_intensity: f32,
    pub shadow_opacity: f32,
    pub image_scale: f32,
    /// Degrees
    pub image_rotate: f32,
    pub image_contrast: f32,
    pub overlay_opacity: f32,
    /// HSL hue in degrees
    pub border_hue: f32,
    /// HSL lightness, 0..1
    pub border_lightness: f32,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            border_scale: 1.0,
            shadow_intensity: 20.0,
            shadow_opacity: 0.5,
            image_scale: 1.0,
            image_rotate: 0.0,
            image_contrast: 1.0,
            overlay_opacity: 0.0,
            border_hue: 204.0,
            border_lightness: 0.33,
        }
    }
}

impl ProfileParams {
    /// Hovered parameters at `time` seconds
    fn at(time: f64) -> Self {
        let ms = time * 1000.0;
        let wave = |period_ms: f64| (ms / period_ms).sin() as f32;
        Self {
            border_scale: 1.0 + wave(300.0) * 0.02,
            shadow_intensity: 30.0 + wave(200.0) * 10.0,
            shadow_opacity: 0.6 + wave(400.0) * 0.2,
            image_scale: 1.15 + wave(500.0) * 0.03,
            image_rotate: wave(800.0) * 2.0,
            image_contrast: 1.1 + wave(600.0) * 0.05,
            overlay_opacity: 0.3 + wave(350.0) * 0.15,
            border_hue: 200.0 + wave(1000.0) * 10.0,
            border_lightness: 0.40 + wave(700.0) * 0.05,
        }
    }

    /// Border colour with 70% saturation
    pub fn border_color(&self) -> Color32 {
        let (s, l) = (0.7_f32, self.border_lightness);
        let value = l + s * l.min(1.0 - l);
        let saturation = if value > 0.0 { 2.0 * (1.0 - l / value) } else { 0.0 };
        Hsva::new(self.border_hue / 360.0, saturation, value, 1.0).into()
    }
}

/// Hover-driven portrait animation.
///
/// While hovered the parameters are resampled at most every
/// [`SAMPLE_INTERVAL`]; leaving resets them to rest at once.
#[derive(Debug, Clone, Default)]
pub struct ProfileAnimation {
    params: ProfileParams,
    last_sample: Option<f64>,
}

impl ProfileAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, hovered: bool, time: f64) -> ProfileParams {
        if !hovered {
            if self.last_sample.take().is_some() {
                debug!("Portrait hover ended, resetting animation");
                self.params = ProfileParams::default();
            }
            return self.params;
        }

        let due = self
            .last_sample
            .map_or(true, |last| time - last >= SAMPLE_INTERVAL);
        if due {
            self.params = ProfileParams::at(time);
            self.last_sample = Some(time);
        }
        self.params
    }

    pub fn is_animating(&self) -> bool {
        self.last_sample.is_some()
    }
}
