use crate::error::{Error, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Number of jump passes run by default; covers fields up to 2^15 pixels wide.
pub const DEFAULT_ITERATIONS: usize = 15;

/// Order of jump offsets across passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpSchedule {
    /// Pass `i` jumps by `2^i` for a fixed number of passes.
    #[default]
    LevelIndexed,
    /// Classic JFA: `2^(k-1), ..., 2, 1` with `k = ceil(log2(max(w, h)))`.
    /// The iteration count is ignored.
    Halving,
}

impl JumpSchedule {
    /// Jump offsets (in pixels) for each pass over a `w × h` field.
    pub fn offsets(&self, iterations: usize, w: usize, h: usize) -> Vec<i64> {
        match self {
            JumpSchedule::LevelIndexed => (0..iterations)
                .map(|level| 1i64 << level.min(62))
                .collect(),
            JumpSchedule::Halving => {
                let k = ceil_log2(w.max(h));
                (0..k).rev().map(|level| 1i64 << level).collect()
            }
        }
    }
}

/// Fewest level-indexed passes that carry a seed across a `w × h` field.
pub fn min_iterations(w: usize, h: usize) -> usize {
    ceil_log2(w.max(h)) as usize
}

fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Options for the jump-flood distance transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JfaOptions {
    /// Pass count for [`JumpSchedule::LevelIndexed`].
    pub iterations: usize,
    pub schedule: JumpSchedule,
}

impl Default for JfaOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            schedule: JumpSchedule::LevelIndexed,
        }
    }
}

impl JfaOptions {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_schedule(mut self, schedule: JumpSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn offsets(&self, w: usize, h: usize) -> Vec<i64> {
        self.schedule.offsets(self.iterations, w, h)
    }

    /// Whether every pixel can receive any seed's coordinate.
    pub fn covers(&self, w: usize, h: usize) -> bool {
        match self.schedule {
            JumpSchedule::LevelIndexed => self.iterations >= min_iterations(w, h),
            JumpSchedule::Halving => true,
        }
    }

    /// Entry-point check. A level-indexed schedule without passes is an
    /// error; one too short for the field only warns, since pixels near
    /// seeds are still exact.
    pub fn validate(&self, w: usize, h: usize) -> Result<()> {
        if self.schedule == JumpSchedule::LevelIndexed && self.iterations == 0 {
            return Err(Error::invalid("jfa iterations must be at least 1"));
        }
        if !self.covers(w, h) {
            warn!(
                "jfa iterations={} below the {} needed for {}x{}; distant pixels read as unreachable",
                self.iterations,
                min_iterations(w, h),
                w,
                h
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_indexed_offsets_grow_by_powers_of_two() {
        let offsets = JfaOptions::default().offsets(64, 64);
        assert_eq!(offsets.len(), DEFAULT_ITERATIONS);
        assert_eq!(offsets[0], 1);
        assert_eq!(offsets[5], 32);
        assert_eq!(offsets[14], 1 << 14);
    }

    #[test]
    fn halving_offsets_cover_largest_dimension() {
        let opts = JfaOptions::default().with_schedule(JumpSchedule::Halving);
        assert_eq!(opts.offsets(64, 10), vec![32, 16, 8, 4, 2, 1]);
        assert_eq!(opts.offsets(65, 10), vec![64, 32, 16, 8, 4, 2, 1]);
        assert!(opts.offsets(1, 1).is_empty());
    }

    #[test]
    fn zero_level_passes_are_rejected() {
        let opts = JfaOptions::default().with_iterations(0);
        assert!(matches!(opts.validate(32, 32), Err(Error::InvalidInput(_))));
        let halving = opts.with_schedule(JumpSchedule::Halving);
        assert!(halving.validate(32, 32).is_ok());
    }

    #[test]
    fn short_schedule_is_reported_as_not_covering() {
        assert_eq!(min_iterations(64, 64), 6);
        assert_eq!(min_iterations(65, 3), 7);
        let short = JfaOptions::default().with_iterations(3);
        assert!(!short.covers(64, 64));
        assert!(short.validate(64, 64).is_ok());
        assert!(JfaOptions::default().covers(4096, 4096));
        assert!(short.covers(8, 5));
    }

    #[test]
    fn schedule_deserializes_snake_case() {
        let opts: JfaOptions = serde_json::from_str(r#"{"schedule":"halving"}"#).unwrap();
        assert_eq!(opts.schedule, JumpSchedule::Halving);
        assert_eq!(opts.iterations, DEFAULT_ITERATIONS);
    }
}
