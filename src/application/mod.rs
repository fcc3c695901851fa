/// Application layer.
///
/// Orchestrates parsing, checking, and reporting over one target path and
/// folds per-file outcomes into a process exit code. The checker core only
/// ever sees one already-parsed tree at a time.

use std::path::Path;

use rayon::prelude::*;

use crate::domain::checker::Checker;
use crate::infrastructure::source_loader::SourceLoader;
use crate::ports::{DiagnosticReporter, SourceParser};

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const TOO_FEW_ARGUMENTS: i32 = 1;
    pub const ARGUMENT_EMPTY: i32 = 2;
    pub const FILE_NOT_FOUND: i32 = 3;
    pub const CHECK_FAILED: i32 = 4;
    pub const PARSE_ERROR: i32 = 5;
}

pub struct CheckUsecase<'a> {
    pub parser: &'a (dyn SourceParser + Sync),
    pub reporter: &'a (dyn DiagnosticReporter + Sync),
}

impl<'a> CheckUsecase<'a> {
    /// Check a file, or every `.cs` file under a directory.
    pub fn run(&self, target: &str) -> i32 {
        let path = Path::new(target);
        if path.is_dir() {
            let files = match SourceLoader::load_directory(path) {
                Ok(files) => files,
                Err(e) => {
                    eprintln!("[awaitcheck] {:#}", e);
                    return exit_codes::FILE_NOT_FOUND;
                }
            };
            let codes: Vec<i32> = files
                .par_iter()
                .map(|(file, source)| self.check_source(file, source))
                .collect();
            fold_exit_codes(&codes)
        } else {
            self.run_file(target)
        }
    }

    /// Check a single file path.
    pub fn run_file(&self, path: &str) -> i32 {
        if !Path::new(path).is_file() {
            return exit_codes::FILE_NOT_FOUND;
        }
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("[awaitcheck] Cannot read {}: {}", path, e);
                return exit_codes::FILE_NOT_FOUND;
            }
        };
        self.check_source(path, &source)
    }

    fn check_source(&self, path: &str, source: &str) -> i32 {
        let tree = match self.parser.parse(source, path) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("[awaitcheck] {:#}", e);
                return exit_codes::PARSE_ERROR;
            }
        };
        let results = Checker::check(&tree, source);
        let rendered = self.reporter.render(path, &results);
        if !rendered.is_empty() {
            // One print call per file keeps a file's block contiguous even
            // when files are checked from worker threads.
            print!("{}", rendered);
        }
        if results.iter().any(|r| !r.properly_configured) {
            exit_codes::CHECK_FAILED
        } else {
            exit_codes::OK
        }
    }
}

/// Fold per-file exit codes into the run's exit code. CHECK_FAILED beats OK
/// but never masks a more specific error reported for another file.
pub fn fold_exit_codes(codes: &[i32]) -> i32 {
    let mut result = exit_codes::OK;
    for &code in codes {
        if code == exit_codes::OK {
            continue;
        }
        if result == exit_codes::OK
            || (result == exit_codes::CHECK_FAILED && code != exit_codes::CHECK_FAILED)
        {
            result = code;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_keeps_ok_when_all_files_pass() {
        assert_eq!(fold_exit_codes(&[0, 0, 0]), exit_codes::OK);
        assert_eq!(fold_exit_codes(&[]), exit_codes::OK);
    }

    #[test]
    fn fold_reports_check_failure_over_ok() {
        assert_eq!(
            fold_exit_codes(&[exit_codes::OK, exit_codes::CHECK_FAILED, exit_codes::OK]),
            exit_codes::CHECK_FAILED
        );
    }

    #[test]
    fn fold_never_masks_a_specific_error_with_check_failure() {
        assert_eq!(
            fold_exit_codes(&[exit_codes::PARSE_ERROR, exit_codes::CHECK_FAILED]),
            exit_codes::PARSE_ERROR
        );
        assert_eq!(
            fold_exit_codes(&[exit_codes::CHECK_FAILED, exit_codes::PARSE_ERROR]),
            exit_codes::PARSE_ERROR
        );
    }

    #[test]
    fn fold_keeps_the_first_specific_error() {
        assert_eq!(
            fold_exit_codes(&[exit_codes::FILE_NOT_FOUND, exit_codes::PARSE_ERROR]),
            exit_codes::FILE_NOT_FOUND
        );
    }
}
