use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One declared dependency, identified by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct DependencyCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl DependencyCoordinate {
    pub fn new(group: &str, artifact: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
        }
    }

    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Outcome of a single registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Publish time of the exact version, epoch milliseconds.
    Published(i64),
    /// Registry answered but listed no document for the version.
    NotFound,
    /// Transport error, non-200 status or unparsable body.
    Failed,
}

impl Lookup {
    /// Legacy numeric form: the timestamp, `0` for not found, `-1` for failure.
    /// Doubles as the ordering key of the age map.
    pub fn sentinel(&self) -> i64 {
        match self {
            Lookup::Published(ts) => *ts,
            Lookup::NotFound => 0,
            Lookup::Failed => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampResult {
    pub coordinate: DependencyCoordinate,
    pub lookup: Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationBreakdown {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeEntry {
    pub name: String,
    pub age: String,
}

/// Name -> age description, iterated in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AgeMap {
    entries: Vec<AgeEntry>,
}

impl AgeMap {
    /// Inserts at the end, or replaces the value in place when the name is already present.
    pub fn insert(&mut self, name: String, age: String) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            existing.age = age;
        } else {
            self.entries.push(AgeEntry { name, age });
        }
    }

    pub fn entries(&self) -> &[AgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    Years,
    Days,
    Hours,
    Minutes,
}

impl fmt::Display for AgeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgeUnit::Years => "years",
            AgeUnit::Days => "days",
            AgeUnit::Hours => "hours",
            AgeUnit::Minutes => "minutes",
        };
        f.write_str(s)
    }
}

/// Age limits as configured; exactly one must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThresholdPolicy {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLimit {
    pub limit: u64,
    pub unit: AgeUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub dependency: String,
    pub limit: u64,
    pub unit: AgeUnit,
    pub age: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is older than ({}) {}: {}",
            self.dependency, self.limit, self.unit, self.age
        )
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub registry: Option<String>,
    #[serde(default)]
    pub ignore: Option<String>,
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub registry: String,
    pub ignore: Option<String>,
    pub workers: usize,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default)]
    pub dependencies: Vec<DependencyCoordinate>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub dependencies: &'a [AgeEntry],
}
