// Command-line entry point for awaitcheck.

use clap::Parser;

use awaitcheck::application::{exit_codes, CheckUsecase};
use awaitcheck::domain::checker::Checker;
use awaitcheck::infrastructure::source_loader::SourceLoader;
use awaitcheck::infrastructure::CSharpParser;
use awaitcheck::ports::reporters::{JsonReporter, TextReporter};
use awaitcheck::ports::{DiagnosticReporter, SourceParser};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File or directory to check (directories are searched for *.cs)
    #[arg(required = false)]
    path: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Print each file's parse tree instead of checking it
    #[arg(long)]
    dump_tree: bool,
}

fn main() {
    let cli = Cli::parse();

    let Some(mut path) = cli.path else {
        eprintln!("Usage: awaitcheck <path>");
        std::process::exit(exit_codes::TOO_FEW_ARGUMENTS);
    };

    if path.trim().is_empty() {
        eprintln!("[awaitcheck] Path argument is empty");
        std::process::exit(exit_codes::ARGUMENT_EMPTY);
    }

    while path.ends_with('/') || path.ends_with('\\') {
        path.pop();
    }

    if cli.dump_tree {
        std::process::exit(dump_trees(&path));
    }

    if let Err(e) = awaitcheck::infrastructure::concurrency::init_thread_pool() {
        eprintln!("[awaitcheck] {:#}", e);
    }

    let parser = CSharpParser;
    let text = TextReporter;
    let json = JsonReporter;
    let reporter: &(dyn DiagnosticReporter + Sync) = match cli.format.as_str() {
        "json" => &json,
        _ => &text,
    };

    let usecase = CheckUsecase {
        parser: &parser,
        reporter,
    };
    std::process::exit(usecase.run(&path));
}

fn dump_trees(path: &str) -> i32 {
    let target = std::path::Path::new(path);
    let files = if target.is_dir() {
        match SourceLoader::load_directory(target) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("[awaitcheck] {:#}", e);
                return exit_codes::FILE_NOT_FOUND;
            }
        }
    } else if target.is_file() {
        match std::fs::read_to_string(target) {
            Ok(source) => vec![(path.to_string(), source)],
            Err(e) => {
                eprintln!("[awaitcheck] Cannot read {}: {}", path, e);
                return exit_codes::FILE_NOT_FOUND;
            }
        }
    } else {
        return exit_codes::FILE_NOT_FOUND;
    };

    for (file, source) in &files {
        match CSharpParser.parse(source, file) {
            Ok(tree) => {
                println!("{}:", file);
                print!("{}", Checker::debug_list_tree(&tree, source));
            }
            Err(e) => {
                eprintln!("[awaitcheck] {:#}", e);
                return exit_codes::PARSE_ERROR;
            }
        }
    }
    exit_codes::OK
}
