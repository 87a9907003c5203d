//! Validation of untyped input against the time-series record shape.
//!
//! [`validate`] stops at the first failing constraint and returns either a
//! [`TimeSeriesRecord`] or the [`ValidationError`] for that constraint.
//! [`check_all`] runs every constraint independently and returns a
//! per-check pass/fail report.
//!
//! Constraints, in order:
//! 1. `steps` is a sequence of objects with a finite numeric `y`.
//! 2. `hazard` is a sequence of booleans.
//! 3. `steps` and `hazard` have the same length.
//! 4. `hazardDescription` is a string (the legacy key `hazardDescriptionn`
//!    is read when the corrected one is absent).
//! 5. `startDate` parses as an absolute date/time.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::record::{
    parse_start_date, type_name, HazardFlag, Sample, TimeSeriesRecord, ValidationError,
    ValidationErrorKind,
};

const STEPS: &str = "steps";
const HAZARD: &str = "hazard";
const DESCRIPTION: &str = "hazardDescription";
const LEGACY_DESCRIPTION: &str = "hazardDescriptionn";
const START_DATE: &str = "startDate";

/// Validates `input` and builds an immutable record.
///
/// # Errors
///
/// Returns the first failing constraint as a [`ValidationError`].
pub fn validate(input: &Value) -> Result<TimeSeriesRecord, ValidationError> {
    let object = as_object(input)?;
    let steps = check_steps(object)?;
    let hazard = check_hazard(object)?;
    check_lengths(steps.len(), hazard.len())?;
    let description = check_description(object)?;
    let start_date = check_start_date(object)?;
    Ok(TimeSeriesRecord::new(steps, hazard, description, start_date))
}

/// Result of a single constraint check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the constraint.
    pub name: String,
    /// Whether the constraint held.
    pub passed: bool,
    /// Detail message; the error text on failure.
    pub detail: String,
    /// The failure, if any.
    pub error: Option<ValidationError>,
}

impl CheckResult {
    fn pass(name: &str, detail: String) -> Self {
        Self { name: name.to_string(), passed: true, detail, error: None }
    }

    fn fail(name: &str, error: ValidationError) -> Self {
        let detail = error.to_string();
        Self { name: name.to_string(), passed: false, detail, error: Some(error) }
    }

    fn skipped(name: &str, detail: &str) -> Self {
        Self { name: name.to_string(), passed: false, detail: detail.to_string(), error: None }
    }

    fn from_result<T>(
        name: &str,
        result: Result<T, ValidationError>,
        describe: impl FnOnce(&T) -> String,
    ) -> Self {
        match result {
            Ok(value) => Self::pass(name, describe(&value)),
            Err(err) => Self::fail(name, err),
        }
    }
}

/// Aggregated result of running every constraint against one input.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Where the input came from (file path or `-`).
    pub source: String,
    /// Per-constraint results, in check order.
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    /// Returns `true` if every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Returns only the checks that failed.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    /// Returns every validation error found, in check order.
    #[must_use]
    pub fn errors(&self) -> Vec<&ValidationError> {
        self.checks.iter().filter_map(|c| c.error.as_ref()).collect()
    }
}

/// Runs every constraint against `input`, collecting all failures.
///
/// The length check only runs when both sequences are well-formed; otherwise
/// it is reported as failed and skipped.
#[must_use]
pub fn check_all(source: &str, input: &Value) -> ValidationReport {
    let object = match as_object(input) {
        Ok(object) => object,
        Err(err) => {
            return ValidationReport {
                source: source.to_string(),
                checks: vec![CheckResult::fail("record", err)],
            };
        }
    };

    let steps = check_steps(object);
    let hazard = check_hazard(object);
    let lengths = match (&steps, &hazard) {
        (Ok(steps), Ok(hazard)) => CheckResult::from_result(
            "lengths",
            check_lengths(steps.len(), hazard.len()),
            |_| format!("{} samples, {} flags", steps.len(), hazard.len()),
        ),
        _ => CheckResult::skipped("lengths", "skipped: steps or hazard is malformed"),
    };

    let checks = vec![
        CheckResult::from_result(STEPS, steps, |s| format!("{} samples", s.len())),
        CheckResult::from_result(HAZARD, hazard, |h| format!("{} flags", h.len())),
        lengths,
        CheckResult::from_result(DESCRIPTION, check_description(object), |d| {
            format!("{} chars", d.chars().count())
        }),
        CheckResult::from_result(START_DATE, check_start_date(object), DateTime::to_rfc3339),
    ];

    ValidationReport { source: source.to_string(), checks }
}

/// Formats a [`ValidationReport`] as a human-readable report.
#[must_use]
pub fn format_report(report: &ValidationReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Record: {}", report.source));
    lines.push(String::new());
    for check in &report.checks {
        let status = if check.passed { "PASS" } else { "FAIL" };
        lines.push(format!("  [{status}] {}", check.name));
        for detail_line in check.detail.lines() {
            lines.push(format!("         {detail_line}"));
        }
    }
    lines.push(String::new());
    let overall = if report.passed() { "PASSED" } else { "FAILED" };
    lines.push(format!("Result: {overall}"));
    lines.join("\n")
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input.as_object().ok_or_else(|| {
        ValidationError::new(
            "$",
            ValidationErrorKind::NotAnObject,
            format!("expected an object, found {}", type_name(input)),
        )
    })
}

fn required<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a Value, ValidationError> {
    object.get(field).ok_or_else(|| ValidationError::missing(field))
}

fn check_steps(object: &Map<String, Value>) -> Result<Vec<Sample>, ValidationError> {
    let raw = required(object, STEPS)?;
    let items = raw.as_array().ok_or_else(|| ValidationError::wrong_type(STEPS, "array", raw))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let field = format!("{STEPS}[{index}]");
            let sample =
                item.as_object().ok_or_else(|| ValidationError::wrong_type(&field, "object", item))?;
            let field = format!("{field}.y");
            let y = sample.get("y").ok_or_else(|| ValidationError::missing(&field))?;
            let value = y.as_f64().ok_or_else(|| ValidationError::wrong_type(&field, "number", y))?;
            if !value.is_finite() {
                return Err(ValidationError::new(
                    field,
                    ValidationErrorKind::NotFinite,
                    format!("expected a finite number, found {value}"),
                ));
            }
            Ok(Sample { y: value })
        })
        .collect()
}

fn check_hazard(object: &Map<String, Value>) -> Result<Vec<HazardFlag>, ValidationError> {
    let raw = required(object, HAZARD)?;
    let items = raw.as_array().ok_or_else(|| ValidationError::wrong_type(HAZARD, "array", raw))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_bool().map(HazardFlag).ok_or_else(|| {
                ValidationError::wrong_type(format!("{HAZARD}[{index}]"), "boolean", item)
            })
        })
        .collect()
}

fn check_lengths(steps: usize, hazard: usize) -> Result<(), ValidationError> {
    if steps == hazard {
        return Ok(());
    }
    Err(ValidationError::new(
        HAZARD,
        ValidationErrorKind::LengthMismatch { steps, hazard },
        format!("length mismatch: steps has {steps} entries, hazard has {hazard}"),
    ))
}

fn check_description(object: &Map<String, Value>) -> Result<String, ValidationError> {
    let (field, raw) = match object.get(DESCRIPTION) {
        Some(raw) => (DESCRIPTION, raw),
        None => match object.get(LEGACY_DESCRIPTION) {
            Some(raw) => (LEGACY_DESCRIPTION, raw),
            None => return Err(ValidationError::missing(DESCRIPTION)),
        },
    };
    raw.as_str().map(str::to_string).ok_or_else(|| ValidationError::wrong_type(field, "string", raw))
}

fn check_start_date(object: &Map<String, Value>) -> Result<DateTime<Utc>, ValidationError> {
    let raw = required(object, START_DATE)?;
    parse_start_date(raw).ok_or_else(|| {
        let shown = match raw {
            Value::String(text) => format!("{text:?}"),
            other => type_name(other).to_string(),
        };
        ValidationError::new(
            START_DATE,
            ValidationErrorKind::InvalidDate,
            format!("not a valid absolute date/time: {shown}"),
        )
    })
}
