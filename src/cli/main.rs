//! Command-line interface entry point for `StudyHub`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use study_hub::config::Config;
use study_hub::info;
use study_hub::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // `stored` mirrors the config file; `config` adds this run's CLI overrides
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Pomodoro { cycles } => commands::pomodoro::run(&config, cycles),
        Command::Focus {
            subjects,
            track,
            seconds,
        } => commands::focus::run(&subjects, track.as_deref(), seconds),
        Command::Gpa { entries } => commands::gpa::run(&entries),
        Command::Wellness {
            sleep,
            study,
            stress,
        } => commands::wellness::run(sleep, study, stress),
        Command::Quote { random } => commands::quote::run(random),
        Command::Spin { topics } => commands::spin::run(&topics),
        Command::Flashcards { cards } => commands::flashcards::run(&cards),
        Command::Notes => commands::notes::run(),
        Command::Papers => commands::papers::run(),
        Command::Theme { subcommand } => commands::theme::run(subcommand, &mut stored),
    }
}
