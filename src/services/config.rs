use crate::cli::Cli;
use crate::domain::constants::{DEFAULT_REGISTRY, DEFAULT_WORKERS};
use crate::domain::models::{ConfigFile, Settings};
use std::path::{Path, PathBuf};
use tracing::debug;

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/depage/config.toml"))
}

/// Loads `path`, or `~/.config/depage/config.toml` when it exists.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    debug!("loading config from {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// CLI flags win over the config file; the file wins over built-in defaults.
pub fn resolve_settings(cli: &Cli, file: ConfigFile) -> Settings {
    Settings {
        registry: cli
            .registry
            .clone()
            .or(file.registry)
            .unwrap_or_else(|| DEFAULT_REGISTRY.to_string()),
        ignore: cli.ignore.clone().or(file.ignore),
        workers: cli.workers.or(file.workers).unwrap_or(DEFAULT_WORKERS).max(1),
        timeout_secs: file.timeout_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::parse_from(["depage", "--registry", "http://local", "show"]);
        let file: ConfigFile = toml::from_str(
            r#"
            registry = "http://from-file"
            ignore = "internal"
            workers = 0
            timeout_secs = 5
            "#,
        )
        .unwrap();
        let s = resolve_settings(&cli, file);
        assert_eq!(s.registry, "http://local");
        assert_eq!(s.ignore.as_deref(), Some("internal"));
        assert_eq!(s.workers, 1);
        assert_eq!(s.timeout_secs, Some(5));
    }

    #[test]
    fn defaults_apply_without_config() {
        let cli = Cli::parse_from(["depage", "show"]);
        let s = resolve_settings(&cli, ConfigFile::default());
        assert_eq!(s.registry, DEFAULT_REGISTRY);
        assert_eq!(s.workers, DEFAULT_WORKERS);
        assert!(s.ignore.is_none());
    }
}
