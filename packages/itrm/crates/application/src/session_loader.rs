use anyhow::{Context, Result};
use domain::session::SessionContext;
use itrm_model::parser::SessionParser;
use std::path::Path;
use tracing::debug;

/// Load a session document from an explicit file path.
pub fn load_session_file(path: &Path) -> Result<SessionContext> {
    let document = SessionParser::parse_file(path)
        .with_context(|| format!("Failed to load session from {}", path.display()))?;

    let ctx = SessionContext::new(document);
    debug!(session_id = %ctx.id(), path = %path.display(), "session loaded");
    Ok(ctx)
}

/// Load a session by candidate search in a directory (itrm.toml first).
pub fn load_session_dir(dir: &Path) -> Result<SessionContext> {
    let (path, _format) = SessionParser::find_session(dir)?;
    load_session_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_session_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("itrm.toml"),
            "baseline_revenue = 1000000.0\n[[components]]\nname = \"NetApp\"\n",
        )
        .unwrap();

        let ctx = load_session_dir(dir.path()).unwrap();
        assert_eq!(ctx.baseline_revenue(), 1_000_000.0);
        assert_eq!(ctx.components().len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_session_file(Path::new("/nonexistent/itrm.toml")).is_err());
    }
}
