//! tinylisp driver - interactive REPL and script runner.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use tinylisp::{Environment, LispError, evaluate, read_all};

fn usage() {
    println!("usage: tinylisp [--help|-h] [--nobanner|-q] [script]");
    println!();
    println!("With a script argument, evaluates the file and exits;");
    println!("otherwise starts an interactive session.");
    println!();
    println!("Builtins (bound under their one-letter names):");
    println!("  c  construct   prepend a value to a list");
    println!("  h  head        first element of a list");
    println!("  t  tail        everything after the first element");
    println!("  s  subtract    integer subtraction");
    println!("  l  less-than   1 if ordered before, else 0");
    println!("  e  equal       1 if structurally equal, else 0");
    println!("  v  eval        evaluate the result of an expression");
    println!("  q  quote       return an expression unevaluated");
    println!("  i  if          short-circuit ternary conditional");
    println!("  d  define      bind a global name");
}

fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("could not read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let forms = match read_all(&source) {
        Ok(forms) => forms,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut env = Environment::new();
    for form in &forms {
        // An evaluation failure is reported and the run continues with
        // the next form, as in interactive use.
        match evaluate(&mut env, form) {
            Ok(result) => println!("{result}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }
    ExitCode::SUCCESS
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tinylisp_history"))
}

fn repl(banner: bool) -> ExitCode {
    if banner {
        println!("tinylisp - integers, symbols, lists, and ten builtins");
        println!("(h for head; -h on the command line for help)");
        println!();
    }

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("could not start line editor: {err}");
            return ExitCode::FAILURE;
        }
    };
    let history = history_path();
    if let Some(ref path) = history {
        let _ = editor.load_history(path);
    }

    let mut env = Environment::new();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "> " } else { ". " };
        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                buffer.clear();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        };
        buffer.push_str(&line);
        buffer.push('\n');

        match read_all(&buffer) {
            // An open list keeps collecting lines under the continuation
            // prompt.
            Err(LispError::UnexpectedEof) => continue,
            Err(err) => {
                eprintln!("error: {err}");
                buffer.clear();
            }
            Ok(forms) => {
                if !forms.is_empty() {
                    let _ = editor.add_history_entry(buffer.trim_end());
                }
                for form in &forms {
                    match evaluate(&mut env, form) {
                        Ok(result) => println!("{result}"),
                        Err(err) => eprintln!("error: {err}"),
                    }
                }
                buffer.clear();
            }
        }
    }

    if let Some(ref path) = history {
        let _ = editor.save_history(path);
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut banner = true;
    let mut script = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                usage();
                return ExitCode::SUCCESS;
            }
            "--nobanner" | "-q" => banner = false,
            _ => script = Some(arg),
        }
    }

    match script {
        Some(path) => run_file(&path),
        None => repl(banner),
    }
}
