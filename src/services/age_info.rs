use crate::domain::constants::{HTTP_ERROR_TEXT, NOT_FOUND_TEXT};
use crate::domain::models::{
    AgeMap, DependencyCoordinate, DurationBreakdown, Lookup, TimestampResult,
};
use crate::services::duration::elapsed_millis;
use crate::services::registry::TimestampSource;
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

fn is_ignored(dep: &DependencyCoordinate, ignore: Option<&str>) -> bool {
    match ignore {
        Some(p) if !p.is_empty() => dep.group.contains(p) || dep.artifact.contains(p),
        _ => false,
    }
}

/// Drops ignored and repeated coordinates, keeping first occurrences in order.
pub fn select_dependencies(
    deps: &[DependencyCoordinate],
    ignore: Option<&str>,
) -> Vec<DependencyCoordinate> {
    let mut seen = HashSet::new();
    deps.iter()
        .filter(|d| !is_ignored(d, ignore))
        .filter(|d| seen.insert((*d).clone()))
        .cloned()
        .collect()
}

fn resolve_all(
    deps: Vec<DependencyCoordinate>,
    source: &dyn TimestampSource,
    workers: usize,
) -> Vec<TimestampResult> {
    if deps.is_empty() {
        return Vec::new();
    }
    let workers = workers.clamp(1, deps.len());
    let chunk = deps.len().div_ceil(workers);

    let resolve = |part: &[DependencyCoordinate]| -> Vec<TimestampResult> {
        part.iter()
            .map(|dep| {
                let lookup = source.lookup(dep);
                debug!("{} -> {} ms", dep, lookup.sentinel());
                TimestampResult {
                    coordinate: dep.clone(),
                    lookup,
                }
            })
            .collect()
    };

    if workers == 1 {
        return resolve(deps.as_slice());
    }

    std::thread::scope(|s| {
        let handles: Vec<_> = deps
            .chunks(chunk)
            .map(|part| s.spawn(move || resolve(part)))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| match h.join() {
                Ok(results) => results,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

/// Resolves every selected dependency and orders the results by their sentinel
/// value, ascending. Failed lookups (`-1`) come first, then not-found (`0`).
pub fn generate_timestamp_map(
    deps: &[DependencyCoordinate],
    ignore: Option<&str>,
    source: &dyn TimestampSource,
    workers: usize,
) -> Vec<TimestampResult> {
    let selected = select_dependencies(deps, ignore);
    let mut results = resolve_all(selected, source, workers);
    results.sort_by_key(|r| r.lookup.sentinel());
    results
}

pub fn describe(lookup: Lookup, now: i64) -> String {
    match lookup {
        Lookup::Failed => HTTP_ERROR_TEXT.to_string(),
        Lookup::NotFound => NOT_FOUND_TEXT.to_string(),
        Lookup::Published(ts) => {
            DurationBreakdown::from_millis(elapsed_millis(now, ts)).describe()
        }
    }
}

pub fn age_map_from(results: &[TimestampResult], now: i64) -> AgeMap {
    let mut map = AgeMap::default();
    for r in results {
        map.insert(r.coordinate.name(), describe(r.lookup, now));
    }
    map
}

/// Name -> age description for every selected dependency, in timestamp-map order.
pub fn generate_age_map(
    deps: &[DependencyCoordinate],
    ignore: Option<&str>,
    source: &dyn TimestampSource,
    workers: usize,
    now: i64,
) -> AgeMap {
    let results = generate_timestamp_map(deps, ignore, source, workers);
    age_map_from(&results, now)
}
