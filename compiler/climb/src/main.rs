use std::io::{self, IsTerminal, Write};

use clap::{Args, Parser, Subcommand};
use climb::{
    read_expression_line, render_error, token_listing, InputError, ReplSession, Report, Settings,
    DEFAULT_MAX_INPUT,
};
use climb_lexer::DEFAULT_MAX_NUMBER_DIGITS;
use climb_parser::parser::DEFAULT_MAX_DEPTH;
use climb_parser::{evaluate_with, explain_with};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "climb",
    version,
    about = "Evaluate single-line integer expressions",
    long_about = "climb evaluates one line of integer arithmetic by precedence climbing.\n\n\
        Operators: + - (precedence 10), * / % (20), ^ (30, right-associative,\n\
        bitwise XOR). A '-' at the start, after an operator or after '(' negates.\n\
        Whitespace is ignored. Arithmetic wraps on 32-bit overflow.\n\n\
        EXAMPLES:\n\
        \n  climb '2 + 3 * 4'              Prints Result: 14\n\
        \n  climb explain '2 ^ 3 ^ 4'      Prints (2 ^ (3 ^ 4))\n\
        \n  climb tokens -- '-5 * (1 - 2)' Dump the token sequence\n\
        \n  climb repl                     Start interactive REPL\n\
        \n  echo '7 % 3' | climb --json    Evaluate stdin, report as JSON"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print a JSON report instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Longest accepted input line, in characters
    #[arg(
        long,
        value_name = "N",
        env = "CLIMB_MAX_INPUT",
        default_value_t = DEFAULT_MAX_INPUT,
        global = true
    )]
    max_input: usize,

    /// Digits kept per number; the rest of a longer run is dropped
    #[arg(
        long,
        value_name = "N",
        env = "CLIMB_MAX_DIGITS",
        default_value_t = DEFAULT_MAX_NUMBER_DIGITS,
        global = true
    )]
    max_digits: usize,

    /// Maximum nesting of subexpressions
    #[arg(
        long,
        value_name = "N",
        env = "CLIMB_MAX_DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH,
        global = true
    )]
    max_depth: usize,

    #[command(flatten)]
    input: ExprArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an expression and print its value
    Eval(ExprArgs),

    /// Print the token sequence of an expression
    Tokens(ExprArgs),

    /// Print an expression fully parenthesized
    #[command(
        long_about = "Print the grouping the evaluator chooses, e.g. '8-3-2' as '((8 - 3) - 2)'.\n\
            Nothing is computed, so division by zero is not reported."
    )]
    Explain(ExprArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        long_about = "Start an interactive session. Every line is evaluated on its own.\n\n\
            Commands:\n\
            \n  :help            Show available REPL commands\n\
            \n  :tokens <expr>   Show the tokens of an expression\n\
            \n  :explain <expr>  Show the grouping of an expression\n\
            \n  :quit            Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone, Default)]
struct ExprArgs {
    /// Expression to evaluate (one line is read from stdin if omitted)
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    expr: Vec<String>,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            max_input: self.max_input,
            max_digits: self.max_digits,
            max_depth: self.max_depth,
        }
    }

    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG takes precedence over -v
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// The expression from the command line, or one line from stdin.
fn read_expression(args: &ExprArgs, settings: &Settings) -> Result<String, InputError> {
    if !args.expr.is_empty() {
        let expr = args.expr.join(" ");
        settings.check_length(&expr)?;
        return Ok(expr);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("Enter the expression: ");
        io::stdout().flush()?;
    }
    read_expression_line(stdin.lock(), settings)
}

fn print_report(report: &Report) -> i32 {
    match report.to_json() {
        Ok(json) => {
            println!("{json}");
            if report.is_ok() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("error: failed to serialize report: {e}");
            2
        }
    }
}

fn run_eval(input: &str, settings: &Settings, mode: OutputMode) -> i32 {
    if mode == OutputMode::Json {
        return print_report(&Report::evaluate(input, settings));
    }
    match evaluate_with(input, &settings.eval_config()) {
        Ok(value) => {
            println!("Result: {value}");
            0
        }
        Err(err) => {
            eprintln!("{}", render_error(&err, input));
            1
        }
    }
}

fn run_tokens(input: &str, settings: &Settings, mode: OutputMode) -> i32 {
    if mode == OutputMode::Json {
        return print_report(&Report::tokens(input, settings));
    }
    match token_listing(input, settings) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token}");
            }
            0
        }
        Err(err) => {
            eprintln!("{}", render_error(&err, input));
            1
        }
    }
}

fn run_explain(input: &str, settings: &Settings, mode: OutputMode) -> i32 {
    if mode == OutputMode::Json {
        return print_report(&Report::explain(input, settings));
    }
    match explain_with(input, &settings.eval_config()) {
        Ok(grouping) => {
            println!("{grouping}");
            0
        }
        Err(err) => {
            eprintln!("{}", render_error(&err, input));
            1
        }
    }
}

fn run_repl(settings: Settings) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(settings);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_with_input<F>(args: &ExprArgs, settings: &Settings, run: F) -> i32
where
    F: FnOnce(&str) -> i32,
{
    match read_expression(args, settings) {
        Ok(input) => {
            debug!("evaluating {input:?}");
            run(&input)
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings();
    let mode = cli.output_mode();
    info!("settings: {settings:?}");

    match cli.command {
        None => run_with_input(&cli.input, &settings, |s| run_eval(s, &settings, mode)),
        Some(Command::Eval(args)) => {
            run_with_input(&args, &settings, |s| run_eval(s, &settings, mode))
        }
        Some(Command::Tokens(args)) => {
            run_with_input(&args, &settings, |s| run_tokens(s, &settings, mode))
        }
        Some(Command::Explain(args)) => {
            run_with_input(&args, &settings, |s| run_explain(s, &settings, mode))
        }
        Some(Command::Repl) => run_repl(settings),
    }
}

fn main() {
    std::process::exit(run_cli());
}
