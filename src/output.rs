//! Artifact persistence
//!
//! Writes rendered scripts to disk as `{dir}/{prefix}{agent_name}.py`.

use std::fs;
use std::path::{Path, PathBuf};

use bim_types::ElementKind;
use tracing::info;

use crate::config::BimConfig;
use crate::error::{BimError, BimResult};

#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
    prefix: String,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &BimConfig) -> Self {
        Self::new(&config.output_dir, &config.file_prefix)
    }

    /// Target path for a kind's artifact
    pub fn path_for(&self, kind: ElementKind) -> PathBuf {
        self.dir
            .join(format!("{}{}.py", self.prefix, kind.agent_name()))
    }

    /// Write an artifact under the configured directory, returning its path
    pub fn write(&self, kind: ElementKind, artifact: &str) -> BimResult<PathBuf> {
        self.write_to(&self.path_for(kind), artifact)
    }

    /// Write an artifact to an explicit path, creating parent directories
    pub fn write_to(&self, path: &Path, artifact: &str) -> BimResult<PathBuf> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, artifact).map_err(|source| BimError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Wrote {} bytes to {}", artifact.len(), path.display());
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_uses_prefix_and_agent_name() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path().join("out"), "output_");

        let path = writer.write(ElementKind::Beam, "print('beam')\n").unwrap();
        assert_eq!(path, dir.path().join("out").join("output_beam_agent.py"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "print('beam')\n");
    }

    #[test]
    fn test_write_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::from_config(&BimConfig::default());
        let target = dir.path().join("nested").join("script.py");

        let path = writer.write_to(&target, "# é\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "# é\n");
    }

    #[test]
    fn test_write_into_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let writer = ArtifactWriter::new(&blocker, "x_");
        assert!(writer.write(ElementKind::Wall, "code").is_err());
    }
}
