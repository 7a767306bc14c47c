//! Value prediction statistics collection and reporting.
//!
//! This module tracks performance metrics for a value predictor run. It provides:
//! 1. **Counts:** Lookups, predictions attempted, correct and incorrect predictions.
//! 2. **Derived metrics:** Accuracy (correct / predicted) and coverage (predicted / lookups).
//! 3. **Reporting:** A sectioned text report and JSON serialization.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

/// Value prediction statistics.
///
/// One `record` call corresponds to one lookup/update pair issued by the driver.
#[derive(Clone, Debug, Serialize)]
pub struct VpuStats {
    #[serde(skip)]
    start_time: Instant,
    /// Name of the predictor the statistics were collected for.
    pub predictor: &'static str,
    /// Number of lookups issued.
    pub lookups: u64,
    /// Lookups for which the predictor supplied a value.
    pub predicted: u64,
    /// Lookups for which the predictor declined to predict.
    pub not_predicted: u64,
    /// Predictions that matched the true value.
    pub correct: u64,
    /// Predictions that did not match the true value.
    pub incorrect: u64,
    /// Number of updates applied to the predictor.
    pub updates: u64,
}

impl Default for VpuStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            predictor: "",
            lookups: 0,
            predicted: 0,
            not_predicted: 0,
            correct: 0,
            incorrect: 0,
            updates: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"vpu"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "vpu"];

/// Returns `num / den` as a fraction, or zero when `den` is zero.
fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl VpuStats {
    /// Creates an empty statistics record for the named predictor.
    pub fn new(predictor: &'static str) -> Self {
        Self {
            predictor,
            ..Self::default()
        }
    }

    /// Records the outcome of one lookup/update pair.
    ///
    /// `correct` is ignored when `predicted` is false.
    pub fn record(&mut self, predicted: bool, correct: bool) {
        self.lookups += 1;
        self.updates += 1;
        if !predicted {
            self.not_predicted += 1;
        } else if correct {
            self.predicted += 1;
            self.correct += 1;
        } else {
            self.predicted += 1;
            self.incorrect += 1;
        }
    }

    /// Fraction of attempted predictions that were correct.
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.predicted)
    }

    /// Fraction of lookups for which a prediction was attempted.
    pub fn coverage(&self) -> f64 {
        ratio(self.predicted, self.lookups)
    }

    /// Writes the requested report sections to `out`.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors from `out`.
    pub fn write_sections(&self, out: &mut impl fmt::Write, sections: &[String]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();

        if want("summary") {
            let rate = if seconds > 0.0 {
                (self.lookups as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            writeln!(out, "==========================================================")?;
            writeln!(out, "VALUE PREDICTION STATISTICS")?;
            writeln!(out, "==========================================================")?;
            writeln!(out, "predictor                {}", self.predictor)?;
            writeln!(out, "host_seconds             {seconds:.4} s")?;
            writeln!(out, "host_rate                {rate:.2} klookups/s")?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("vpu") {
            writeln!(out, "VALUE PREDICTION")?;
            writeln!(out, "  vp.lookups             {}", self.lookups)?;
            writeln!(out, "  vp.predicted           {}", self.predicted)?;
            writeln!(out, "  vp.not_predicted       {}", self.not_predicted)?;
            writeln!(out, "  vp.correct             {}", self.correct)?;
            writeln!(out, "  vp.incorrect           {}", self.incorrect)?;
            writeln!(out, "  vp.updates             {}", self.updates)?;
            writeln!(out, "  vp.accuracy            {:.2}%", 100.0 * self.accuracy())?;
            writeln!(out, "  vp.coverage            {:.2}%", 100.0 * self.coverage())?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        Ok(())
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"` or `"vpu"`.
    /// Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let mut report = String::new();
        if self.write_sections(&mut report, sections).is_ok() {
            print!("{report}");
        }
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

impl fmt::Display for VpuStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sections(f, &[])
    }
}
