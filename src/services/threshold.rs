use crate::domain::models::{
    ActiveLimit, AgeUnit, DependencyCoordinate, Lookup, ThresholdPolicy, TimestampResult,
    Violation,
};
use crate::services::age_info::{describe, generate_timestamp_map};
use crate::services::duration::{elapsed_millis, whole_units};
use crate::services::registry::TimestampSource;
use tracing::{debug, warn};

#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("No limiters selected")]
    NoLimiter,
    #[error("More than one limiter used.")]
    MultipleLimiters,
    #[error("Dependencies do not meet age requirements, see logs")]
    Violations(Vec<Violation>),
}

impl ThresholdPolicy {
    pub fn active_limit(&self) -> Result<ActiveLimit, CheckError> {
        let set: Vec<ActiveLimit> = [
            (self.years, AgeUnit::Years),
            (self.days, AgeUnit::Days),
            (self.hours, AgeUnit::Hours),
            (self.minutes, AgeUnit::Minutes),
        ]
        .into_iter()
        .filter(|(limit, _)| *limit != 0)
        .map(|(limit, unit)| ActiveLimit { limit, unit })
        .collect();
        match set.as_slice() {
            [] => Err(CheckError::NoLimiter),
            [one] => Ok(*one),
            _ => Err(CheckError::MultipleLimiters),
        }
    }
}

/// Flags every published dependency whose age, counted in whole units of the
/// active limit, is at least that limit. Failed and not-found lookups are skipped.
pub fn find_violations(
    timestamps: &[TimestampResult],
    limit: ActiveLimit,
    now: i64,
) -> Vec<Violation> {
    let mut out = Vec::new();
    for r in timestamps {
        let Lookup::Published(ts) = r.lookup else {
            warn!(
                "{}: no publish time ({}), skipped by age check",
                r.coordinate,
                describe(r.lookup, now)
            );
            continue;
        };
        let age = whole_units(elapsed_millis(now, ts), limit.unit);
        debug!("{} is {} {} old", r.coordinate, age, limit.unit);
        if age >= limit.limit {
            out.push(Violation {
                dependency: r.coordinate.name(),
                limit: limit.limit,
                unit: limit.unit,
                age: describe(r.lookup, now),
            });
        }
    }
    out
}

pub fn evaluate(
    timestamps: &[TimestampResult],
    policy: &ThresholdPolicy,
    now: i64,
) -> Result<(), CheckError> {
    let limit = policy.active_limit()?;
    let violations = find_violations(timestamps, limit, now);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CheckError::Violations(violations))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub limit: ActiveLimit,
    pub checked: usize,
}

/// Validates the policy, then resolves and evaluates the selected dependencies.
/// An invalid policy returns before the source is consulted.
pub fn run_check(
    deps: &[DependencyCoordinate],
    ignore: Option<&str>,
    source: &dyn TimestampSource,
    workers: usize,
    policy: &ThresholdPolicy,
    now: i64,
) -> Result<CheckSummary, CheckError> {
    let limit = policy.active_limit()?;
    let timestamps = generate_timestamp_map(deps, ignore, source, workers);
    evaluate(&timestamps, policy, now)?;
    Ok(CheckSummary {
        limit,
        checked: timestamps.len(),
    })
}
