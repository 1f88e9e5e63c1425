pub mod dashboard;
pub mod schema;
pub mod simulate;
pub mod template;
pub mod whatif;

use anyhow::Result;
use itrm::domain::session::SessionContext;
use std::path::PathBuf;

/// Resolve a session context from an explicit `--session` path or by
/// candidate search in the current directory.
pub fn resolve_session(session: Option<&PathBuf>) -> Result<SessionContext> {
    match session {
        Some(path) if path.is_dir() => itrm::application::load_session_dir(path),
        Some(path) => itrm::application::load_session_file(path),
        None => {
            let cwd = std::env::current_dir()?;
            itrm::application::load_session_dir(&cwd)
        }
    }
}
