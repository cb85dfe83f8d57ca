use crate::domain::constants::DEFAULT_MANIFEST;
use crate::domain::models::{DependencyCoordinate, Manifest};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("invalid dependency coordinate (expected group:artifact:version): {0}")]
    InvalidCoordinate(String),
    #[error("manifest not found: {0}")]
    Missing(PathBuf),
}

pub fn parse_coordinate(raw: &str) -> Result<DependencyCoordinate, ManifestError> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    match parts.as_slice() {
        [g, a, v] if !g.is_empty() && !a.is_empty() && !v.is_empty() => {
            Ok(DependencyCoordinate::new(g, a, v))
        }
        _ => Err(ManifestError::InvalidCoordinate(raw.to_string())),
    }
}

/// Reads an explicit manifest, or `./dependencies.toml` when present.
pub fn load_manifest(path: Option<&Path>) -> anyhow::Result<Manifest> {
    let path = match path {
        Some(p) if !p.exists() => return Err(ManifestError::Missing(p.to_path_buf()).into()),
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(DEFAULT_MANIFEST);
            if !p.exists() {
                return Ok(Manifest::default());
            }
            p
        }
    };
    let raw = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}

/// Manifest dependencies followed by `--dependency` flags, in order.
pub fn collect_dependencies(
    manifest: &Manifest,
    extra: &[String],
) -> anyhow::Result<Vec<DependencyCoordinate>> {
    let mut out = manifest.dependencies.clone();
    for raw in extra {
        out.push(parse_coordinate(raw)?);
    }
    Ok(out)
}
