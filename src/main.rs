use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, error, info};
use spi::{
    error::Error,
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, tokenize},
        parser::parse,
    },
};

/// spi evaluates integer arithmetic expressions with `+ - * /`, unary signs
/// and parentheses. Without an expression it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a path and evaluate every non-empty line of it.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream before the result.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed tree before the result.
    #[arg(short, long)]
    ast: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate, or a file path with `--file`.
    contents: Option<String>,
}

fn init_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let colors = ColoredLevelConfig::new().error(Color::Red)
                                          .warn(Color::Yellow)
                                          .info(Color::Green)
                                          .debug(Color::Blue)
                                          .trace(Color::Magenta);

    fern::Dispatch::new().format(move |out, message, record| {
                             out.finish(format_args!("{:<5} [{}] {}",
                                                     colors.color(record.level()),
                                                     record.target(),
                                                     message));
                         })
                         .level(level)
                         .chain(io::stderr())
                         .apply()
}

fn print_tokens(source: &str) {
    for item in tokenize(source) {
        match item {
            Ok((token, position)) => {
                println!("{position:>4}  {token}");
                if token == Token::Eof {
                    break;
                }
            },
            Err(_) => break,
        }
    }
}

/// Runs the pipeline stage by stage so `--tokens` and `--ast` can show the
/// intermediate results.
fn run(source: &str, args: &Args) -> Result<i64, Error> {
    if args.tokens {
        print_tokens(source);
    }
    let tree = parse(tokenize(source))?;
    if args.ast {
        println!("{tree}");
    }
    Ok(evaluate(&tree)?)
}

/// Builds a line with a `^` under the character at byte offset `position`.
fn caret(source: &str, position: usize) -> String {
    let column = source.get(..position)
                       .map_or(0, |prefix| prefix.chars().count());
    format!("{}^", " ".repeat(column))
}

fn report(source: &str, args: &Args) -> bool {
    match run(source, args) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            if let Some(position) = e.position() {
                eprintln!("{source}\n{}", caret(source, position));
            }
            eprintln!("{e}");
            false
        },
    }
}

fn repl(args: &Args) {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("calc> ");
        if io::stdout().flush().is_err() {
            break;
        }
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                error!("Failed to read from stdin: {e}");
                break;
            },
        }
        let source = line.trim();
        if source.is_empty() {
            continue;
        }
        report(source, args);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logger(args.verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let Some(contents) = &args.contents else {
        info!("No expression given, starting interactive prompt");
        repl(&args);
        return ExitCode::SUCCESS;
    };

    let ok = if args.file {
        let Ok(script) = fs::read_to_string(contents) else {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty())
              .fold(true, |ok, line| report(line, &args) && ok)
    } else {
        report(contents, &args)
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
