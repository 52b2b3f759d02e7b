use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use arcane::{
    errors::errors::{Error, ErrorTip},
    parser::parser::parse,
};
use log::{debug, info};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            print_banner();
            match repl(io::stdin().lock(), io::stdout().lock()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Failed to run repl: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: {} [file]", args[0]);
            ExitCode::FAILURE
        }
    }
}

fn print_banner() {
    let user = env::var("USER").unwrap_or_else(|_| String::from("there"));

    println!(
        "
=========================================
Hello {user}!

This is Arcane Programming Language!

Feel free to type in commands
=========================================
"
    );
}

fn repl(input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, ">>> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;

        let (parser, program) = parse(line);

        if !parser.errors().is_empty() {
            writeln!(out, "Parser Errors:")?;
            for msg in parser.errors() {
                writeln!(out, "\t - {}", msg)?;
            }
            continue;
        }

        writeln!(out, "{}", program)?;
    }
}

fn run_file(path: &str) -> ExitCode {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!("parsing {}", path);
    let (parser, program) = parse(source);
    debug!("{} statements", program.statements.len());

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            display_error(error);
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn display_error(error: &Error) {
    /*
        Error: UnexpectedToken (did you miss a semicolon?)
           | expected next token to be ;, got let instead
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("   | {}", error);
}
