use std::fs;
use std::path::{Path, PathBuf};

use edu_standards_core::{ConfigError, EngineConfig};
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// Config file looked up in the input directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "edu-standards.config.yaml";

/// A request file with its path and raw content.
pub struct RequestFile {
    pub path: String,
    pub content: String,
}

/// Project configuration: engine overrides plus optional source globs.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(flatten)]
    pub engine: EngineConfig,
}

/// Load the explicit config, or `edu-standards.config.yaml` from the input
/// directory, or fall back to the built-in defaults.
pub fn load_config(explicit: Option<&Path>, input_path: &Path) -> Result<ProjectConfig, CliError> {
    let config_path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None if input_path.is_dir() => {
            let candidate = input_path.join(CONFIG_FILE_NAME);
            candidate.exists().then_some(candidate)
        }
        None => None,
    };

    let Some(config_path) = config_path else {
        return Ok(ProjectConfig::default());
    };

    let yaml = read_text(&config_path)?;
    let mut config: ProjectConfig = if yaml.trim().is_empty() {
        ProjectConfig::default()
    } else {
        serde_yaml::from_str(&yaml).map_err(ConfigError::from)?
    };
    config.engine = config.engine.normalized();
    config.engine.check()?;

    debug!(path = %config_path.display(), "config loaded");
    Ok(config)
}

/// Read request files from a path (file or directory).
pub fn read_request_files(
    input_path: &Path,
    config: &ProjectConfig,
) -> Result<Vec<RequestFile>, CliError> {
    if !input_path.exists() {
        return Err(CliError::NotFound(input_path.display().to_string()));
    }

    if input_path.is_file() {
        return Ok(vec![RequestFile {
            path: input_path.to_string_lossy().to_string(),
            content: read_text(input_path)?,
        }]);
    }

    let patterns: Vec<String> = match config.sources {
        Some(ref s) if !s.is_empty() => s.clone(),
        _ => vec!["**/*.json".to_string()],
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for pattern in &patterns {
        let full_pattern = input_path.join(pattern);
        let pattern_str = full_pattern.to_string_lossy().replace('\\', "/");
        let mut matched: Vec<PathBuf> = Vec::new();
        for entry in glob::glob(&pattern_str)? {
            let path = entry?;
            if path.is_file() && !paths.contains(&path) && !matched.contains(&path) {
                matched.push(path);
            }
        }
        matched.sort();
        paths.extend(matched);
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(RequestFile {
            content: read_text(&path)?,
            path: path.to_string_lossy().to_string(),
        });
    }

    debug!(count = files.len(), "request files collected");
    Ok(files)
}

pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}
