//! Entry point for the demo binary.
//!
//! Each subcommand runs one prompt and prints its result to stdout. A
//! user abort maps to exit status 130 here, at the application boundary,
//! while the library itself only ever reports it as an error value.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;

use promptkit::cli::{Args, Command, load_entries, parse_item};
use promptkit::{Confirm, Input, PromptError, Select, Spinner};

/// Exit status reported when the user aborts an interaction.
const STATUS_ABORTED: u8 = 130;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(err.downcast_ref::<PromptError>(), Some(e) if e.is_abort()) {
                return ExitCode::from(STATUS_ABORTED);
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Select {
            items,
            file,
            title,
            help_bar,
        } => {
            let entries = match file {
                Some(path) => load_entries(&path)?,
                None => items.iter().map(|item| parse_item(item)).collect(),
            };
            let mut select = Select::new(entries).show_help(help_bar);
            if let Some(title) = title {
                select = select.title(title);
            }
            let payload = select.run()?;
            println!("{payload}");
        }
        Command::Confirm {
            title,
            yes,
            no,
            help_bar,
        } => {
            let answer = Confirm::new(title)
                .affirmative(yes)
                .negative(no)
                .show_help(help_bar)
                .run()?;
            println!("{}", if answer { "yes" } else { "no" });
        }
        Command::Input {
            title,
            placeholder,
            help_bar,
        } => {
            let mut input = Input::new().show_help(help_bar);
            if let Some(title) = title {
                input = input.title(title);
            }
            if let Some(placeholder) = placeholder {
                input = input.placeholder(placeholder);
            }
            let value = input.run()?;
            println!("{value}");
        }
        Command::Spin { text, done, millis } => {
            let spinner = Spinner::new(text).done_text(done).start();
            thread::sleep(Duration::from_millis(millis));
            spinner.stop()?;
        }
    }
    Ok(())
}
