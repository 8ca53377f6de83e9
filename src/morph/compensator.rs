use super::overlay::{self, DebugPrimitive, OverlaySettings};
use super::ping_pong;
use crate::align::{analyze, AnalyzeOptions, CentroidAndDirection, Compensation};
use crate::field::{Color, Field2D};
use log::warn;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Slowest allowed automatic progress speed.
pub const MIN_PROGRESS_SPEED: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphSettings {
    pub analysis: AnalyzeOptions,
    /// Drive progress automatically with a 0 → 1 → 0 ping-pong.
    pub auto_progress: bool,
    /// Progress units per second in automatic mode.
    pub progress_speed: f32,
}

impl Default for MorphSettings {
    fn default() -> Self {
        Self {
            analysis: AnalyzeOptions::default(),
            auto_progress: false,
            progress_speed: 0.2,
        }
    }
}

/// Values a morph renderer consumes each frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphUniforms {
    pub movement_compensation: Vector2<f32>,
    pub progress: f32,
    pub rotation_compensation: f32,
    pub cur_center: Vector2<f32>,
}

#[derive(Clone, Debug)]
pub struct MorphCompensator {
    settings: MorphSettings,
    compensation: Compensation,
    progress: f32,
    elapsed: f32,
    time_offset: f32,
    prev_auto: bool,
}

impl MorphCompensator {
    /// Analyze both keyframes. A missing keyframe falls back to the default
    /// analysis with a warning.
    pub fn new(
        start: Option<&Field2D<Color>>,
        end: Option<&Field2D<Color>>,
        settings: MorphSettings,
    ) -> Self {
        let mut this = Self {
            settings,
            compensation: Compensation::default(),
            progress: 0.0,
            elapsed: 0.0,
            time_offset: 0.0,
            prev_auto: settings.auto_progress,
        };
        this.recalculate(start, end);
        this
    }

    /// Re-run both analyses, e.g. after a keyframe or the threshold changed.
    pub fn recalculate(&mut self, start: Option<&Field2D<Color>>, end: Option<&Field2D<Color>>) {
        let from = self.analyze_keyframe(start, "start");
        let to = self.analyze_keyframe(end, "end");
        self.compensation = Compensation::between(from, to);
    }

    fn analyze_keyframe(&self, image: Option<&Field2D<Color>>, role: &str) -> CentroidAndDirection {
        match image {
            Some(img) => analyze(
                img,
                self.settings.analysis.threshold,
                self.settings.analysis.channel,
            ),
            None => {
                warn!("{role} keyframe missing, using default centroid and direction");
                CentroidAndDirection::default()
            }
        }
    }

    pub fn settings(&self) -> &MorphSettings {
        &self.settings
    }

    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Takes effect on the next [`step`](Self::step); automatic mode resumes
    /// from the current progress.
    pub fn set_auto_progress(&mut self, enabled: bool) {
        self.settings.auto_progress = enabled;
    }

    pub fn set_progress_speed(&mut self, speed: f32) {
        self.settings.progress_speed = speed.max(MIN_PROGRESS_SPEED);
    }

    /// Advance the clock by `dt` seconds and return the uniforms for this frame.
    pub fn step(&mut self, dt: f32) -> MorphUniforms {
        self.elapsed += dt.max(0.0);
        let speed = self.settings.progress_speed.max(MIN_PROGRESS_SPEED);
        if self.settings.auto_progress != self.prev_auto {
            self.prev_auto = self.settings.auto_progress;
            if self.settings.auto_progress {
                self.time_offset = self.elapsed * speed - self.progress;
            }
        }
        if self.settings.auto_progress {
            self.progress = ping_pong(self.elapsed * speed - self.time_offset, 1.0);
        }
        self.uniforms()
    }

    pub fn uniforms(&self) -> MorphUniforms {
        MorphUniforms {
            movement_compensation: self.compensation.movement,
            progress: self.progress,
            rotation_compensation: self.compensation.rotation,
            cur_center: self.compensation.from.centroid,
        }
    }

    /// Debug primitives for the current state in overlay world space.
    pub fn debug_overlay(&self, settings: &OverlaySettings) -> Vec<DebugPrimitive> {
        overlay::build(&self.compensation, self.progress, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(horizontal: bool, offset: usize) -> Field2D<Color> {
        Field2D::from_fn(32, 32, |x, y| {
            let (along, across) = if horizontal { (x, y) } else { (y, x) };
            if (4..28).contains(&along) && (offset..offset + 4).contains(&across) {
                Color::rgb(0.0, 1.0, 0.0)
            } else {
                Color::BLACK
            }
        })
    }

    #[test]
    fn quarter_turn_between_perpendicular_bars() {
        let comp = MorphCompensator::new(
            Some(&bar(true, 10)),
            Some(&bar(false, 10)),
            MorphSettings::default(),
        );
        let rot = comp.compensation().rotation.abs();
        assert!((rot - std::f32::consts::FRAC_PI_2).abs() < 1e-3, "rot={rot}");
    }

    #[test]
    fn manual_progress_is_not_advanced_by_step() {
        let mut comp = MorphCompensator::new(None, None, MorphSettings::default());
        comp.set_progress(0.4);
        let u = comp.step(1.0);
        assert_eq!(u.progress, 0.4);
        assert_eq!(u.movement_compensation, Vector2::zeros());
    }

    #[test]
    fn auto_progress_resumes_from_current_value() {
        let mut comp = MorphCompensator::new(None, None, MorphSettings::default());
        comp.set_progress(0.3);
        comp.step(0.5);
        comp.set_auto_progress(true);
        let first = comp.step(0.0);
        assert!((first.progress - 0.3).abs() < 1e-5);
        let mut seen_top = false;
        for _ in 0..200 {
            let p = comp.step(0.1).progress;
            assert!((0.0..=1.0).contains(&p));
            seen_top |= p > 0.95;
        }
        assert!(seen_top);
    }

    #[test]
    fn movement_follows_centroids() {
        let comp = MorphCompensator::new(
            Some(&bar(true, 4)),
            Some(&bar(true, 20)),
            MorphSettings::default(),
        );
        let u = comp.uniforms();
        assert!((u.movement_compensation.y - 0.5).abs() < 1e-4);
        assert!(u.movement_compensation.x.abs() < 1e-5);
    }
}
