//! Fire-and-forget process launches (Godot editor, Vite dev server).

use std::io;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

/// Spawn `program` detached from the request that asked for it.
///
/// No handle is kept: the caller cannot query or stop the process later.
/// Tokio reaps the child in the background once it exits.
pub fn spawn_detached(program: &str, args: &[&str], cwd: &Path) -> io::Result<u32> {
    let child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(false)
        .spawn()?;

    let pid = child.id().unwrap_or_default();
    tracing::info!(program = %program, pid, cwd = %cwd.display(), "Launched detached process");
    Ok(pid)
}

/// Try each candidate in order and return the first one that spawns.
///
/// Candidates that do not exist are skipped; any other spawn error is
/// returned immediately.
pub fn spawn_first<'a>(
    candidates: &'a [String],
    args: &[&str],
    cwd: &Path,
) -> io::Result<Option<&'a str>> {
    for candidate in candidates {
        match spawn_detached(candidate, args, cwd) {
            Ok(_) => return Ok(Some(candidate.as_str())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(candidate = %candidate, "Executable not found, trying next");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_first_skips_missing_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![
            "/definitely/not/a/godot".to_string(),
            "true".to_string(),
        ];

        let launched = spawn_first(&candidates, &[], dir.path()).unwrap();
        assert_eq!(launched, Some("true"));
    }

    #[tokio::test]
    async fn test_spawn_first_none_found() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec!["/no/such/binary".to_string()];
        assert_eq!(spawn_first(&candidates, &[], dir.path()).unwrap(), None);
    }
}
