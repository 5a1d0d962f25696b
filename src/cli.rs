use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use twenty_four::solver::constants::{DEFAULT_COUNT, DEFAULT_TARGET, TOLERANCE};
use twenty_four::{
    ExpressionSolver, Notation, SolverConfig, StreamingAggregator, format_solution, split_numbers,
    validate_count,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Operator symbols used in the printed solutions
#[derive(Debug, Clone, ValueEnum)]
pub enum NotationArg {
    Ascii,
    Unicode,
}

impl NotationArg {
    pub fn to_notation(&self) -> Notation {
        match self {
            NotationArg::Ascii => Notation::Ascii,
            NotationArg::Unicode => Notation::Unicode,
        }
    }
}

/// Twenty-four - combine integers with + - * / to reach a target
#[derive(Parser, Debug)]
#[command(name = "twenty-four")]
#[command(about = "Find every distinct arithmetic expression that combines the given integers into a target value")]
#[command(version)]
pub struct CliArgs {
    /// Integers to combine; without them the program starts prompting
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Target value to reach
    #[arg(short, long, default_value_t = DEFAULT_TARGET)]
    pub target: f64,

    /// How many integers each query must contain
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Operator symbols used in the output
    #[arg(long, value_enum, default_value = "ascii")]
    pub notation: NotationArg,

    /// Spread the search over all cores and print the solutions sorted
    #[arg(short, long)]
    pub parallel: bool,

    /// Solve the numbers given on the command line and exit
    #[arg(long)]
    pub once: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<i64>,
    pub target: f64,
    pub count: usize,
    pub notation: Notation,
    pub parallel: bool,
    pub once: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    if args.count == 0 {
        anyhow::bail!("The count of numbers per query must be at least 1");
    }

    Ok(CliConfig {
        numbers: args.numbers,
        target: args.target,
        count: args.count,
        notation: args.notation.to_notation(),
        parallel: args.parallel,
        once: args.once,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Solve one query and print the result
fn report(solver: &ExpressionSolver, config: &CliConfig, numbers: &[i64]) {
    let target = solver.config().target;

    let found = if config.parallel {
        let solutions = solver.solve_parallel(numbers, config.notation);
        for text in &solutions {
            println!("{}", format_solution(text, target));
        }
        !solutions.is_empty()
    } else {
        let mut sink = StreamingAggregator::new(config.notation, |text: &str| {
            println!("{}", format_solution(text, target));
        });
        solver.solve_into(numbers, &mut sink)
    };

    if !found {
        println!("No solution.");
    }
}

/// Prompt for queries until the user quits
fn interactive(solver: &ExpressionSolver, config: &CliConfig) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to start line editor")?;
    let prompt = format!("\n> Input {} integers: ", config.count);

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "q" {
                    break;
                }
                editor
                    .add_history_entry(line)
                    .context("Failed to record history")?;

                match split_numbers(line).and_then(|numbers| {
                    validate_count(&numbers, config.count)?;
                    Ok(numbers)
                }) {
                    Ok(numbers) => report(solver, config, &numbers),
                    Err(err) => eprintln!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("Failed to read input"),
        }
    }

    eprintln!("\nBye bye");
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new(SolverConfig {
        target: config.target,
        tolerance: TOLERANCE,
    });

    if !config.numbers.is_empty() {
        info!(
            "Searching for expressions using {:?} that equal {}",
            config.numbers, config.target
        );

        match validate_count(&config.numbers, config.count) {
            Ok(()) => report(&solver, &config, &config.numbers),
            Err(err) => {
                warn!("Ignoring command-line numbers: {}", err);
                eprintln!("Wrong number of arguments. Ignore.");
            }
        }

        if config.once {
            return Ok(());
        }
    }

    interactive(&solver, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["twenty-four", "1", "2", "3", "4", "-t", "10"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.numbers, vec![1, 2, 3, 4]);
            assert_eq!(args.target, 10.0);
            assert_eq!(args.count, DEFAULT_COUNT);
            assert!(!args.parallel);
            assert!(matches!(args.notation, NotationArg::Ascii));
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_negative_numbers() {
        let args = CliArgs::try_parse_from(["twenty-four", "--once", "-3", "9", "2", "1"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.numbers, vec![-3, 9, 2, 1]);
            assert!(args.once);
        }
    }

    #[test]
    fn test_cli_args_defaults_without_numbers() {
        let args = CliArgs::try_parse_from(["twenty-four", "--notation", "unicode", "-p"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.numbers.is_empty());
            assert_eq!(args.target, DEFAULT_TARGET);
            assert!(args.parallel);
            assert_eq!(args.notation.to_notation(), Notation::Unicode);
        }
    }

    #[test]
    fn test_cli_args_reject_non_integers() {
        assert!(CliArgs::try_parse_from(["twenty-four", "1", "two"]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
