//! Serializable timing and batch reports for the command-line tools.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

/// Timing entry describing one stage of a tool run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }

    /// Run `f`, recording its wall time under `label`.
    pub fn time<T>(&mut self, label: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let t0 = Instant::now();
        let out = f();
        self.push(label, t0.elapsed().as_secs_f64() * 1000.0);
        out
    }
}

/// Input that a batch action skipped, with the reason.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedInput {
    pub input: PathBuf,
    pub reason: String,
}

/// Outcome of a batch action over several inputs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedInput>,
    pub timing: TimingBreakdown,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_records_stage_and_total() {
        let mut t = TimingBreakdown::default();
        let v = t.time("square", || 7 * 7);
        t.push("fixed", 2.0);
        assert_eq!(v, 49);
        assert_eq!(t.stages.len(), 2);
        assert!(t.total_ms >= 2.0);
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = BatchReport::default();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"totalMs\""));
        assert!(report.all_succeeded());
    }
}
