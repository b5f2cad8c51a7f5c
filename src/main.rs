use bigcalc::{command::Command, interpreter::evaluator::core::Context};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};

/// bigcalc evaluates integer expressions of any size, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Trace verbosity: 0 silent, 1 phases, 2 every step.
    #[arg(short, long, default_value_t = 0)]
    log_level: u8,

    /// Reject characters that are not part of any token.
    #[arg(short, long)]
    strict: bool,

    /// Evaluate these lines in order and exit instead of starting the shell.
    #[arg(short, long)]
    eval: Vec<String>,
}

/// What the shell does after a line.
enum Flow {
    Continue,
    Stop,
}

fn handle_line(context: &mut Context, line: &str) -> Flow {
    match Command::parse(line) {
        Command::Help => println!("The program evaluates the expression."),
        Command::Exit => return Flow::Stop,
        Command::LogLevel(Some(level)) => {
            if context.verbosity > 0 {
                println!("Setting loglevel to {level}");
            }
            context.verbosity = level;
        },
        Command::LogLevel(None) | Command::Empty => {},
        Command::Unknown(_) => println!("Unknown command"),
        Command::Expression(expression) => match context.evaluate(expression) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => {
                println!("Invalid expression");
                if context.verbosity > 0 {
                    eprintln!("{e}");
                }
            },
        },
    }
    Flow::Continue
}

fn main() {
    let args = Args::parse();

    let mut context = Context::new().with_verbosity(args.log_level)
                                    .with_strict(args.strict)
                                    .with_sink(|message: &str| println!("{message}"));

    if !args.eval.is_empty() {
        for line in &args.eval {
            if let Flow::Stop = handle_line(&mut context, line) {
                break;
            }
        }
        return;
    }

    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
                                             eprintln!("Failed to start the line editor: {e}");
                                             std::process::exit(1);
                                         });

    loop {
        match editor.readline("") {
            Ok(line) => {
                if !line.is_empty()
                   && let Err(e) = editor.add_history_entry(line.as_str())
                   && context.verbosity > 0
                {
                    eprintln!("Failed to record history: {e}");
                }
                if let Flow::Stop = handle_line(&mut context, &line) {
                    break;
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }

    println!("Bye!");
}
