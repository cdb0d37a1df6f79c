use std::fmt;

/// Outcome category reported back to the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Timeout,
    Crashed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunStatus::Success => "SUCCESS",
            RunStatus::Timeout => "TIMEOUT",
            RunStatus::Crashed => "CRASHED",
        };
        f.write_str(label)
    }
}

/// Normalized result of one solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub status: RunStatus,

    /// CPU seconds reported by the solver.
    pub runtime: f64,

    /// Number of search steps taken.
    pub runlength: u64,

    /// Mean best solution quality (unsatisfied clauses for SAPS).
    pub best_solution: u64,

    /// Seed echoed from the request.
    pub seed: i64,
}

impl RunResult {
    /// Values reported when the solver output contains none of the labels.
    pub fn defaults(cutoff_time: f64, seed: i64) -> Self {
        Self {
            status: RunStatus::Crashed,
            runtime: cutoff_time,
            runlength: 0,
            best_solution: 0,
            seed,
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Result of algorithm run: {}, {}, {}, {}, {}",
            self.status,
            format_seconds(self.runtime),
            self.runlength,
            self.best_solution,
            self.seed
        )
    }
}

/// Format a float the way Ruby's `Float#to_s` does, which is what
/// configurators have always parsed from SAPS wrappers.
///
/// Whole numbers keep a trailing `.0` (`5.0`, `4.2`). Magnitudes below
/// `1e-4` or from `1e16` up switch to `1.0e-05` / `1.0e+16` notation.
pub fn format_seconds(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        let mantissa = if mantissa.contains('.') {
            mantissa.to_string()
        } else {
            format!("{}.0", mantissa)
        };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
