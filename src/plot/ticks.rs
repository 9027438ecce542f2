use crate::{
    data::Cohort,
    error::{ReportError, Result},
};
use log::error;
use std::ops::Range;

pub const NUM_X_TICKS: usize = 10;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// `num` points evenly spaced in log10 space between `min` and `max`. The
/// endpoints are exactly `min` and `max`.
pub fn log_spaced_ticks(min: f64, max: f64, num: usize) -> Vec<f64> {
    match num {
        0 => return vec![],
        1 => return vec![min],
        _ => {}
    }

    let log_min = min.log10();
    let step = (max.log10() - log_min) / (num - 1) as f64;

    (0..num)
        .map(|i| match i {
            0 => min,
            i if i == num - 1 => max,
            i => 10f64.powf(log_min + step * i as f64),
        })
        .collect()
}

fn cohort_node_range(cohort: &Cohort) -> Result<(u64, u64)> {
    cohort.node_range().ok_or_else(|| {
        error!(
            "cannot compute ticks for an empty cohort (cohort={})",
            cohort.baseline
        );
        ReportError::EmptyCohort(cohort.baseline)
    })
}

/// Smallest and largest node count across both cohorts.
pub fn node_span(inc_enabled: &Cohort, traditional: &Cohort) -> Result<(u64, u64)> {
    let (inc_min, inc_max) = cohort_node_range(inc_enabled)?;
    let (trad_min, trad_max) = cohort_node_range(traditional)?;
    let min = inc_min.min(trad_min);
    let max = inc_max.max(trad_max);

    if min == 0 {
        error!("node counts must be positive for a log-scaled axis");
        return Err(ReportError::NonPositiveNodes(min));
    }

    Ok((min, max))
}

pub fn x_ticks(inc_enabled: &Cohort, traditional: &Cohort) -> Result<Vec<f64>> {
    let (min, max) = node_span(inc_enabled, traditional)?;
    Ok(log_spaced_ticks(min as f64, max as f64, NUM_X_TICKS))
}

/// Range for the log-scaled node axis. Both ends must be positive.
pub fn x_axis_range(min: f64, max: f64) -> Range<f64> {
    if min >= max {
        return (min / 2.0)..(max * 2.0);
    }

    let margin = (max.log10() - min.log10()) * AXIS_MARGIN;
    10f64.powf(min.log10() - margin)..10f64.powf(max.log10() + margin)
}

/// Range for the linear metric axis, covering all `values`.
pub fn y_axis_range(values: &[f64]) -> Range<f64> {
    if values.is_empty() {
        return 0.0..1.0;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min >= max {
        let pad = (min.abs() * AXIS_MARGIN).max(1.0);
        return (min - pad)..(max + pad);
    }

    let margin = (max - min) * AXIS_MARGIN;
    (min - margin)..(max + margin)
}

/// Integer part of `value` with comma thousands separators.
pub fn format_thousands(value: f64) -> String {
    let digits = (value.trunc() as i64).unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if value <= -1.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Labels for the metric axis: integers without decimals, the rest with two.
pub fn format_metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
