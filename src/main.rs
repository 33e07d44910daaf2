use std::{
    fs::File,
    io::{self, BufReader},
    process,
};

use clap::Parser;
use rpcalc::interpreter::{evaluator::Interpreter, lexer::core::tokenize};

/// rpcalc evaluates reverse-Polish-notation arithmetic read from files or
/// standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input files, evaluated in argument order against one shared stack;
    /// `-` names standard input. With no files given, standard input is
    /// read.
    files: Vec<String>,
}

/// Tokenizes and runs one source. An unreadable source is reported and
/// skipped; a runtime error is fatal for the whole batch.
fn process_source(path: &str, interpreter: &mut Interpreter) {
    let tokens = if path == "-" {
        tokenize(io::stdin().lock())
    } else {
        match File::open(path) {
            Ok(file) => tokenize(BufReader::new(file)),
            Err(e) => {
                eprintln!("Could not open '{path}': {e}");
                return;
            },
        }
    };

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Could not read '{path}': {e}");
            return;
        },
    };

    if let Err(e) = interpreter.run(&tokens) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn main() {
    let args = Args::parse();

    let mut interpreter = Interpreter::new();
    interpreter.setup();

    if args.files.is_empty() {
        process_source("-", &mut interpreter);
    } else {
        for path in &args.files {
            process_source(path, &mut interpreter);
        }
    }

    interpreter.teardown();
}
