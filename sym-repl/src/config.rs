use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

/// How much is logged to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Evaluate, differentiate, and simplify expressions, and tabulate boolean formulas.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sym-repl", version, about, long_about = None)]
pub struct Config {
    /// The most verbose log level printed to stderr
    #[arg(long = "log", value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print the LaTeX rendering of every result as well
    #[arg(long)]
    pub latex: bool,

    /// A file whose lines are run as input, instead of reading interactively
    pub file: Option<PathBuf>,
}
