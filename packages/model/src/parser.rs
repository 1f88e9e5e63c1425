use crate::SessionDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// On-disk encodings a session document may arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFormat {
    Json,
    Yaml,
    Toml,
}

impl SessionFormat {
    /// Filenames probed, in priority order, when only a directory is given.
    pub const CANDIDATES: &'static [(&'static str, SessionFormat)] = &[
        ("itrm.toml", SessionFormat::Toml),
        ("itrm.json", SessionFormat::Json),
        ("itrm.yaml", SessionFormat::Yaml),
        ("itrm.yml", SessionFormat::Yaml),
    ];

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| anyhow::anyhow!("cannot infer session format, {} has no extension", path.display()))?;
        extension.to_lowercase().parse()
    }

    fn deserialize(self, content: &str) -> Result<SessionDocument> {
        match self {
            SessionFormat::Json => {
                serde_json::from_str(content).context("malformed JSON session document")
            }
            SessionFormat::Yaml => {
                serde_yaml::from_str(content).context("malformed YAML session document")
            }
            SessionFormat::Toml => {
                toml::from_str(content).context("malformed TOML session document")
            }
        }
    }
}

impl FromStr for SessionFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(SessionFormat::Json),
            "yaml" | "yml" => Ok(SessionFormat::Yaml),
            "toml" => Ok(SessionFormat::Toml),
            other => anyhow::bail!("unsupported session format: .{other}"),
        }
    }
}

/// Loads session documents from wherever an assessment keeps them: an
/// explicit file, a pasted string, or a working directory holding one of
/// the `itrm.*` candidates.
pub struct SessionParser;

impl SessionParser {
    /// Read and decode a session file, inferring the format from its
    /// extension.
    pub fn parse_file(path: &Path) -> Result<SessionDocument> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read session file {}", path.display()))?;
        Self::parse(&content, SessionFormat::from_path(path)?)
    }

    /// Decode session content already in memory.
    pub fn parse(content: &str, format: SessionFormat) -> Result<SessionDocument> {
        format.deserialize(content)
    }

    /// Probe `dir` for a session file, `itrm.toml` winning over the JSON
    /// and YAML spellings.
    pub fn find_session(dir: &Path) -> Result<(PathBuf, SessionFormat)> {
        SessionFormat::CANDIDATES
            .iter()
            .map(|(filename, format)| (dir.join(filename), *format))
            .find(|(path, _)| path.exists())
            .ok_or_else(|| anyhow::anyhow!("no itrm session file in {}", dir.display()))
    }
}
