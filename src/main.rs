use std::{fs, path::PathBuf, process::ExitCode, rc::Rc};

use clap::Parser;
use luminary::{
    STDIN_FILE_NAME,
    error::Error,
    interpreter::evaluator::{
        context::Context,
        core::{DEFAULT_MAX_DEPTH, Interpreter, InterpreterOptions},
    },
    run_source,
};
use tracing_subscriber::{EnvFilter, fmt};

/// Prompt shown before each REPL line.
const PROMPT: &str = "\x1b[33mluminary %\x1b[37m ";

/// Resets terminal colours after a rendered error.
const RESET: &str = "\x1b[0m";

/// luminary is a small dynamically-typed scripting language.
///
/// Without a script or `--eval`, starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run.
    file: Option<PathBuf>,

    /// Runs the given source instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Maximum depth of nested function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the log level, warn by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    let options = InterpreterOptions { max_depth: args.max_depth };
    let mut interpreter = Interpreter::new().with_options(options);
    let context = Context::global();

    if let Some(source) = args.eval {
        return run_script(&source, STDIN_FILE_NAME, &mut interpreter, &context);
    }

    if let Some(path) = args.file {
        let Ok(source) = fs::read_to_string(&path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        return run_script(&source, &path.to_string_lossy(), &mut interpreter, &context);
    }

    repl(&mut interpreter, &context)
}

fn run_script(source: &str,
              file_name: &str,
              interpreter: &mut Interpreter,
              context: &Rc<Context>)
              -> ExitCode {
    match run_source(source, file_name, interpreter, context) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        },
    }
}

/// Reads, evaluates and prints lines until `exit` or end of input.
fn repl(interpreter: &mut Interpreter, context: &Rc<Context>) -> ExitCode {
    loop {
        let line = match interpreter.read_line(PROMPT) {
            Ok(Some(line)) => line,
            Ok(None) => {
                println!("{RESET}");
                return ExitCode::SUCCESS;
            },
            Err(err) => {
                eprintln!("Failed to read input: {err}");
                return ExitCode::FAILURE;
            },
        };
        if line.trim() == "exit" {
            print!("{RESET}");
            return ExitCode::SUCCESS;
        }
        if line.trim().is_empty() {
            continue;
        }

        match run_source(&line, STDIN_FILE_NAME, interpreter, context) {
            Ok(Some(value)) if !value.is_null() => println!("{value}"),
            Ok(_) => {},
            Err(err) => report(&err),
        }
    }
}

fn report(err: &Error) {
    eprintln!("{err}{RESET}");
}
