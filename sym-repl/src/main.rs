mod config;
mod error;
mod session;

use clap::Parser;
use config::Config;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};

/// Runs one line and prints its output or error. Returns false if the line failed.
fn run_line(session: &mut Session, line: &str) -> bool {
    match session.execute(line) {
        Ok(Some(out)) => {
            println!("{}", out);
            true
        },
        Ok(None) => true,
        Err(err) => {
            err.report_to_stderr();
            false
        },
    }
}

/// Runs every line of a script, skipping comments that start with `#`. Returns false if any line
/// failed.
fn run_script(session: &mut Session, script: &str) -> bool {
    script.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .fold(true, |ok, line| run_line(session, line) && ok)
}

/// Runs the interactive REPL until end of input.
fn run_interactive(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    println!("type :help for a list of commands");

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        run_line(session, &input);
    }
}

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(err) = TermLogger::init(
        config.log_level.into(),
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("could not start logging: {}", err);
    }
    log::debug!("{:?}", config);

    let mut session = Session::new(config.latex);

    let ok = if let Some(path) = &config.file {
        // run source file
        match fs::read_to_string(path) {
            Ok(script) => run_script(&mut session, &script),
            Err(err) => {
                eprintln!("error: could not read `{}`: {}", path.display(), err);
                false
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut script = String::new();
        match io::stdin().read_to_string(&mut script) {
            Ok(_) => run_script(&mut session, &script),
            Err(err) => {
                eprintln!("error: could not read stdin: {}", err);
                false
            },
        }
    } else {
        match run_interactive(&mut session) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("{}", err);
                false
            },
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
