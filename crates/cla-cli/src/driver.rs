//! File discovery, per-file checking, and diagnostic rendering for the
//! command-line driver.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cla_common::{CHECKER, Diagnostic, LineMap};
use colored::Colorize;
use rustpython_parser::{Parse, ast};
use walkdir::WalkDir;

use crate::args::OutputFormat;

/// Outcome of checking a set of paths.
pub struct RunResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Files that could not be read or parsed. These do not abort the run.
    pub failed_files: Vec<(PathBuf, String)>,
}

impl RunResult {
    pub fn exit_code(&self) -> i32 {
        if !self.failed_files.is_empty() {
            2
        } else if !self.diagnostics.is_empty() {
            1
        } else {
            0
        }
    }
}

/// Expand the given paths into the list of Python files to check.
///
/// Directories are walked recursively; results are sorted so runs are
/// deterministic. Explicit file arguments are taken as-is, whatever their
/// extension.
pub fn discover_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let p = entry.path();
                if p.is_file() && p.extension().is_some_and(|ext| ext == "py") {
                    files.push(p.to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files
}

/// Parse and check a single file.
pub fn check_file(path: &Path) -> Result<Vec<Diagnostic>> {
    let display = path.display().to_string();
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {display}"))?;
    let body = ast::Suite::parse(&source, &display)
        .map_err(|e| anyhow::anyhow!("parse error in {display}: {e}"))?;
    let line_map = LineMap::new(&source);
    Ok(cla_checker::check_module(&body, &display, &line_map))
}

/// Check every file reachable from `paths`.
pub fn run(paths: &[PathBuf]) -> RunResult {
    let files = discover_files(paths);
    tracing::info!(files = files.len(), "starting check");

    let mut diagnostics = Vec::new();
    let mut failed_files = Vec::new();
    for file in files {
        match check_file(&file) {
            Ok(mut file_diags) => diagnostics.append(&mut file_diags),
            Err(e) => {
                tracing::warn!(file = %file.display(), error = %e, "skipping file");
                failed_files.push((file, e.to_string()));
            }
        }
    }
    RunResult {
        diagnostics,
        failed_files,
    }
}

/// Render diagnostics in the requested format.
pub fn render(result: &RunResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for diag in &result.diagnostics {
                let rest = diag
                    .message_text
                    .strip_prefix(diag.code)
                    .unwrap_or(&diag.message_text);
                out.push_str(&format!(
                    "{}:{}:{}: {}{}\n",
                    diag.file,
                    diag.line,
                    diag.column,
                    diag.code.yellow().bold(),
                    rest
                ));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&result.diagnostics)
                .context("failed to serialize diagnostics")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render the `--list-rules` surface from the immutable registration record.
pub fn render_rule_listing() -> String {
    let mut out = format!("{} {}\n", CHECKER.name, CHECKER.version);
    for rule in CHECKER.rules {
        out.push_str(&format!("  {}  {}\n", rule.code, rule.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).expect("create temp file");
        f.write_all(contents.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn discovers_only_python_files_in_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "a.py", "x = 1\n");
        write_file(dir.path(), "b.txt", "not python\n");
        write_file(dir.path(), "c.py", "y = 2\n");

        let files = discover_files(&[dir.path().to_path_buf()]);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.py", "c.py"]);
    }

    #[test]
    fn check_file_reports_violations_with_positions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(
            dir.path(),
            "board.py",
            "class Board:\n    def reset(self):\n        self.xy = (0, 0)\n",
        );

        let diags = check_file(&path).expect("check succeeds");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 3);
        assert_eq!(
            diags[0].message_text,
            "CLA001 attribute 'xy' not defined prior to assignment"
        );
    }

    #[test]
    fn parse_failure_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(dir.path(), "broken.py", "def broken(:\n");
        assert!(check_file(&path).is_err());

        let result = run(&[path]);
        assert_eq!(result.exit_code(), 2);
        assert_eq!(result.failed_files.len(), 1);
    }

    #[test]
    fn exit_codes_reflect_outcome() {
        let dir = tempfile::tempdir().expect("tempdir");
        let clean = write_file(dir.path(), "clean.py", "class A:\n    x: int = 0\n");
        let result = run(std::slice::from_ref(&clean));
        assert_eq!(result.exit_code(), 0);

        let dirty = write_file(
            dir.path(),
            "dirty.py",
            "class B:\n    def m(self):\n        self.x = 1\n",
        );
        let result = run(&[dirty]);
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn rule_listing_names_checker_and_rules() {
        let listing = render_rule_listing();
        assert!(listing.starts_with("cla "));
        assert!(listing.contains("CLA001"));
    }
}
