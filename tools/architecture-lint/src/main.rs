//! CLI entry point for the repo-local architecture lint.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};

fn main() -> ExitCode {
    let Some(root) = workspace_root() else {
        let _ = writeln!(
            io::stderr().lock(),
            "unable to locate workspace root (directory containing a workspace Cargo.toml)"
        );
        return ExitCode::FAILURE;
    };
    match architecture_lint::lint_crate_sources(&root.join("presignup")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr().lock(), "{err}");
            ExitCode::FAILURE
        }
    }
}

/// First ancestor declaring `[workspace]`, searched from `CARGO_WORKSPACE_DIR`,
/// then the current directory, then this crate's manifest directory.
fn workspace_root() -> Option<Utf8PathBuf> {
    let candidates = [
        env::var("CARGO_WORKSPACE_DIR").ok().map(Utf8PathBuf::from),
        env::current_dir()
            .ok()
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok()),
        Some(Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|start| find_workspace_root(&start))
}

fn find_workspace_root(start: &Utf8Path) -> Option<Utf8PathBuf> {
    start
        .ancestors()
        .find(|dir| declares_workspace(&dir.join("Cargo.toml")))
        .map(Utf8Path::to_path_buf)
}

fn declares_workspace(manifest: &Utf8Path) -> bool {
    fs::read_to_string(manifest).is_ok_and(|contents| contents.contains("[workspace]"))
}
