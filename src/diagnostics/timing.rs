use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock duration of one pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Per-stage timings of one detector run, in execution order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `stage`, record its duration under `label` and return its output.
    pub fn time<T>(&mut self, label: &str, stage: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = stage();
        self.stages.push(StageTiming {
            label: label.to_string(),
            elapsed_ms: elapsed_ms(start),
        });
        out
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_recorded_in_order() {
        let mut t = TimingBreakdown::default();
        let a = t.time("first", || 1);
        let b = t.time("second", || 2);
        assert_eq!((a, b), (1, 2));
        let labels: Vec<&str> = t.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["first", "second"]);
        assert!(t.stages.iter().all(|s| s.elapsed_ms >= 0.0));
    }
}
