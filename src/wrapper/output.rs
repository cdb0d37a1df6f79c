use std::io::BufRead;

use crate::error::Result;
use crate::models::{RunResult, RunStatus};

const SUCCESSFUL_RUNS: &str = "SuccessfulRuns = ";
const CPU_TIME_MEAN: &str = "CPUTime_Mean = ";
const STEPS_MEAN: &str = "Steps_Mean = ";
const BEST_SOLUTION_MEAN: &str = "BestSolution_Mean = ";

/// Scan ubcsat statistics output into a run result.
///
/// Each label is looked for on every line; a later occurrence overwrites an
/// earlier one. Fields whose label never shows up keep the value from
/// `defaults`.
pub fn parse_solver_output<R: BufRead>(mut reader: R, defaults: RunResult) -> Result<RunResult> {
    let mut result = defaults;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        if let Some(solved) = labelled_integer(line, SUCCESSFUL_RUNS) {
            result.status = if solved > 0 {
                RunStatus::Success
            } else {
                RunStatus::Timeout
            };
        }
        if let Some(rest) = labelled_rest(line, CPU_TIME_MEAN) {
            result.runtime = leading_float(rest);
        }
        if let Some(steps) = labelled_integer(line, STEPS_MEAN) {
            result.runlength = steps;
        }
        if let Some(best) = labelled_integer(line, BEST_SOLUTION_MEAN) {
            result.best_solution = best;
        }
    }

    Ok(result)
}

/// First `<label><digits>` in the line.
fn labelled_integer(line: &str, label: &str) -> Option<u64> {
    line.match_indices(label).find_map(|(start, _)| {
        let rest = &line[start + label.len()..];
        let digits_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        rest[..digits_len].parse().ok()
    })
}

/// Everything after the first occurrence of the label.
fn labelled_rest<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.find(label).map(|start| &line[start + label.len()..])
}

/// Parse the longest numeric prefix, `0.0` if there is none.
fn leading_float(text: &str) -> f64 {
    let text = text.trim_start();
    let candidate_len = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(text.len());

    (1..=candidate_len)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
        .unwrap_or(0.0)
}
