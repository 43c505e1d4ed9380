//! Command-line entrypoint for Glyph: chooses between a line-oriented REPL and straight-through
//! file execution. Everything interesting — lexing, parsing, evaluation — lives in the library;
//! this binary is deliberately thin, consuming only `Parser::parse_program` and
//! `evaluator::eval`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use log::error;

use glyph::environment::Environment;
use glyph::evaluator;
use glyph::lexer::Lexer;
use glyph::object::Object;
use glyph::parser::Parser;

const PROMPT: &str = ">> ";

/// Interpreter for the (rather small and very experimental) Glyph scripting language.
#[derive(ClapParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to a Glyph source file to run. Omit to start the REPL.
    #[arg(index = 1)]
    file: Option<PathBuf>,

    /// Raise the log level (repeatable: -v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).unwrap();

    let exit_ok = match cli.file {
        Some(path) => run_file(&path),
        None => run_repl(),
    };

    if exit_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads, parses and evaluates a whole source file. Returns `false` on I/O error, parse errors,
/// or a runtime error value — all of which the CLI reports as a non-zero exit.
fn run_file(path: &PathBuf) -> bool {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            error!("could not read {}: {err}", path.display());
            return false;
        }
    };

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();
    if !report_parse_errors(parser.errors()) {
        return false;
    }

    let env = Environment::new();
    let result = evaluator::eval(&program, &env);
    if let Object::Error(_) = &result {
        eprintln!("{}", result.inspect());
        return false;
    }

    true
}

/// One line, one program: each line typed at the prompt is lexed, parsed and evaluated fresh
/// against the REPL's persistent environment. `exit` or EOF (Ctrl-D) ends the session.
fn run_repl() -> bool {
    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{PROMPT}");
        if stdout.flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return true, // EOF
            Ok(_) => {}
            Err(err) => {
                error!("error reading from stdin: {err}");
                return false;
            }
        }

        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            return true;
        }

        let mut parser = Parser::new(Lexer::new(line));
        let program = parser.parse_program();
        if !report_parse_errors(parser.errors()) {
            continue;
        }

        let result = evaluator::eval(&program, &env);
        if !matches!(result, Object::Null) {
            println!("{}", result.inspect());
        }
    }
}

/// Prints accumulated parser errors in the REPL/file-driver's shared format. Returns `true` when
/// there were none (i.e. it's safe to evaluate).
fn report_parse_errors(errors: &[String]) -> bool {
    if errors.is_empty() {
        return true;
    }

    eprintln!("Error(s) occurred!");
    for error in errors {
        eprintln!("\t{error}");
    }
    false
}
