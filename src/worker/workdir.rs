// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Working-directory discovery for the worker process.
//!
//! Deployment convenience only: when the config injects no explicit
//! `working_dir`, the bridge falls back to walking upward from the running
//! binary's directory until it finds the checkout root, recognized by the
//! presence of both the Python package directory and the service directory.

use std::path::{Path, PathBuf};

use crate::config::consts::WORKDIR_SEARCH_DEPTH;
use crate::errors::WorkerError;

/// Directory marking the worker's Python package root.
const SCRIPT_ROOT_MARKER: &str = "aiparser";
/// Directory marking the service root alongside the worker package.
const SERVICE_ROOT_MARKER: &str = "backend";

/// Resolves the worker root by a bounded upward walk.
///
/// Starts at the running executable's directory, then falls back to the
/// current directory (covers running the binary straight from a checkout).
/// Fails with [`WorkerError::EnvironmentNotFound`] rather than guessing.
pub fn discover_worker_root() -> Result<PathBuf, WorkerError> {
    let mut searched = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(base) = exe.parent() {
            searched.push(base.display().to_string());
            if let Some(root) = search_upward(base, WORKDIR_SEARCH_DEPTH) {
                return Ok(root);
            }
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        searched.push(cwd.display().to_string());
        if is_worker_root(&cwd) {
            return Ok(cwd);
        }
    }

    Err(WorkerError::EnvironmentNotFound {
        searched: searched.join(", "),
    })
}

/// Walks up at most `max_levels` ancestors (inclusive of `start`) looking
/// for a worker root.
pub(crate) fn search_upward(start: &Path, max_levels: usize) -> Option<PathBuf> {
    let mut current = Some(start);
    for _ in 0..max_levels {
        let dir = current?;
        if is_worker_root(dir) {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

fn is_worker_root(dir: &Path) -> bool {
    dir.join(SCRIPT_ROOT_MARKER).is_dir() && dir.join(SERVICE_ROOT_MARKER).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_worker_root(root: &Path) {
        fs::create_dir_all(root.join(SCRIPT_ROOT_MARKER)).unwrap();
        fs::create_dir_all(root.join(SERVICE_ROOT_MARKER)).unwrap();
    }

    #[test]
    fn finds_root_from_nested_start() {
        let tmp = tempfile::tempdir().unwrap();
        make_worker_root(tmp.path());
        let nested = tmp.path().join("backend/bin/Debug");
        fs::create_dir_all(&nested).unwrap();

        let found = search_upward(&nested, WORKDIR_SEARCH_DEPTH).unwrap();
        assert_eq!(found, tmp.path());
    }

    #[test]
    fn finds_root_when_start_is_root() {
        let tmp = tempfile::tempdir().unwrap();
        make_worker_root(tmp.path());

        let found = search_upward(tmp.path(), WORKDIR_SEARCH_DEPTH).unwrap();
        assert_eq!(found, tmp.path());
    }

    #[test]
    fn requires_both_markers() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join(SCRIPT_ROOT_MARKER)).unwrap();

        assert!(search_upward(tmp.path(), WORKDIR_SEARCH_DEPTH).is_none());
    }

    #[test]
    fn walk_is_bounded() {
        let tmp = tempfile::tempdir().unwrap();
        make_worker_root(tmp.path());

        // Deeper than the bound allows: a/b/... 12 levels below the root.
        let mut deep = tmp.path().to_path_buf();
        for _ in 0..12 {
            deep = deep.join("a");
        }
        fs::create_dir_all(&deep).unwrap();

        assert!(search_upward(&deep, WORKDIR_SEARCH_DEPTH).is_none());
        assert!(search_upward(&deep, 20).is_some());
    }
}
