use std::{fs, process::ExitCode};

use clap::Parser;
use rpncalc::{Error, compile, eval_postfix, evaluate, render};

/// rpncalc evaluates arithmetic expressions with `+ - * / ^` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix form of each expression before its result.
    /// Expressions that cannot be converted only print their error.
    #[arg(short, long)]
    postfix: bool,

    /// The expression, or the path of the file when `--file` is given.
    #[arg(required = true, num_args = 1..)]
    contents: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let contents = args.contents.join(" ");

    let expressions: Vec<String> = if args.file {
        match fs::read_to_string(&contents) {
            Ok(text) => text.lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(String::from)
                            .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![contents]
    };

    let mut status = ExitCode::SUCCESS;
    for expression in &expressions {
        match run(expression, args.postfix) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                log::info!("failed to evaluate {expression:?}: {e:?}");
                eprintln!("{e}");
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}

/// Evaluates one expression, printing its postfix form first when asked.
fn run(expression: &str, show_postfix: bool) -> Result<f64, Error> {
    if !show_postfix || expression.is_empty() {
        return evaluate(expression);
    }

    let postfix = compile(expression)?;
    println!("{}", render(&postfix));
    Ok(eval_postfix(&postfix)?)
}
