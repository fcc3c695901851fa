/// End-to-end tests: the application layer over real files on disk,
/// verifying exit-code aggregation across a directory tree.

use std::fs;
use std::path::Path;

use awaitcheck::application::{exit_codes, fold_exit_codes, CheckUsecase};
use awaitcheck::domain::checker::Checker;
use awaitcheck::infrastructure::source_loader::SourceLoader;
use awaitcheck::infrastructure::CSharpParser;
use awaitcheck::ports::reporters::TextReporter;
use awaitcheck::ports::{DiagnosticReporter, SourceParser};
use rayon::prelude::*;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn usecase_run(target: &Path) -> i32 {
    let parser = CSharpParser;
    let reporter = TextReporter;
    let usecase = CheckUsecase {
        parser: &parser,
        reporter: &reporter,
    };
    usecase.run(&target.display().to_string())
}

const CLEAN: &str = r#"
class Clean
{
    async System.Threading.Tasks.Task M()
    {
        await Foo().ConfigureAwait(false);
    }
}
"#;

const OFFENDING: &str = r#"
class Offending
{
    async System.Threading.Tasks.Task M()
    {
        await Foo();
    }
}
"#;

#[test]
fn clean_file_exits_ok() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Clean.cs");
    write_file(&file, CLEAN);
    assert_eq!(usecase_run(&file), exit_codes::OK);
}

#[test]
fn offending_file_fails_the_check() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Offending.cs");
    write_file(&file, OFFENDING);
    assert_eq!(usecase_run(&file), exit_codes::CHECK_FAILED);
}

#[test]
fn missing_file_is_reported_as_such() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Nope.cs");
    assert_eq!(usecase_run(&file), exit_codes::FILE_NOT_FOUND);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Broken.cs");
    write_file(&file, "class Broken { async Task M( {");
    assert_eq!(usecase_run(&file), exit_codes::PARSE_ERROR);
}

#[test]
fn one_offending_file_fails_the_whole_directory() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("Clean.cs"), CLEAN);
    write_file(&dir.path().join("sub/Offending.cs"), OFFENDING);
    assert_eq!(usecase_run(dir.path()), exit_codes::CHECK_FAILED);
}

#[test]
fn directory_of_clean_files_exits_ok() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("A.cs"), CLEAN);
    write_file(&dir.path().join("sub/B.cs"), CLEAN);
    assert_eq!(usecase_run(dir.path()), exit_codes::OK);
}

#[test]
fn parse_error_is_not_masked_by_a_later_check_failure() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("ABroken.cs"), "class Broken { async Task M( {");
    write_file(&dir.path().join("Offending.cs"), OFFENDING);
    assert_eq!(usecase_run(dir.path()), exit_codes::PARSE_ERROR);
}

#[test]
fn parallel_directory_run_matches_sequential_per_file_runs() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("A.cs"), CLEAN);
    write_file(&dir.path().join("B.cs"), OFFENDING);
    write_file(&dir.path().join("sub/C.cs"), OFFENDING);

    // The directory run checks files from rayon workers.
    let parallel_code = usecase_run(dir.path());

    let parser = CSharpParser;
    let reporter = TextReporter;
    let usecase = CheckUsecase {
        parser: &parser,
        reporter: &reporter,
    };
    let files = SourceLoader::load_directory(dir.path()).unwrap();
    let sequential: Vec<i32> = files.iter().map(|(path, _)| usecase.run_file(path)).collect();
    assert_eq!(parallel_code, fold_exit_codes(&sequential));

    // Per-file rendered diagnostics agree between a parallel pass and a
    // plain loop over the same file list.
    let render = |path: &str, source: &str| {
        let tree = parser.parse(source, path).unwrap();
        reporter.render(path, &Checker::check(&tree, source))
    };
    let par_rendered: Vec<String> = files
        .par_iter()
        .map(|(path, source)| render(path, source))
        .collect();
    let seq_rendered: Vec<String> = files
        .iter()
        .map(|(path, source)| render(path, source))
        .collect();
    assert_eq!(par_rendered, seq_rendered);
}

#[test]
fn offending_files_in_build_output_are_ignored() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("Clean.cs"), CLEAN);
    write_file(&dir.path().join("obj/Gen.cs"), OFFENDING);
    assert_eq!(usecase_run(dir.path()), exit_codes::OK);
}
