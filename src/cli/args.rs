//! CLI argument definitions for `StudyHub`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use study_hub::config::ConfigOverrides;
use study_hub::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `focus_minutes`, `theme`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ThemeSubcommand {
    /// Print the stored theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Store an explicit theme
    Set {
        /// `light` or `dark`
        #[arg(value_name = "THEME")]
        theme: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Run a live pomodoro countdown.
    ///
    /// Durations come from the `[timer]` config section.
    Pomodoro {
        /// Stop after this many completed focus periods (runs until Ctrl-C when omitted)
        #[arg(long, value_name = "N")]
        cycles: Option<u32>,
    },
    /// Track focus time for a subject, then print the distribution.
    Focus {
        /// Subjects to register (repeatable)
        #[arg(long = "subject", value_name = "NAME", required = true)]
        subjects: Vec<String>,

        /// Subject to track (defaults to the first one)
        #[arg(long, value_name = "NAME")]
        track: Option<String>,

        /// Seconds to track for (runs until Ctrl-C when omitted)
        #[arg(long, value_name = "N")]
        seconds: Option<u64>,
    },
    /// Compute a GPA from `GRADE:CREDITS` pairs (credits default to 3).
    Gpa {
        /// Entries such as `A:3`, `B+:4` or `C`
        #[arg(value_name = "GRADE[:CREDITS]", num_args = 1.., required = true)]
        entries: Vec<String>,
    },
    /// Get feedback on sleep, study and stress.
    Wellness {
        /// Hours of sleep per night (0-12)
        #[arg(long, value_name = "HOURS", default_value_t = 7.0)]
        sleep: f32,

        /// Hours of study per day (0-12)
        #[arg(long, value_name = "HOURS", default_value_t = 4.0)]
        study: f32,

        /// Stress level (1-10)
        #[arg(long, value_name = "LEVEL", default_value_t = 5)]
        stress: u8,
    },
    /// Print the quote of the day.
    Quote {
        /// Pick a random quote instead
        #[arg(long)]
        random: bool,
    },
    /// Spin the topic wheel.
    Spin {
        /// Topics to choose from
        #[arg(value_name = "TOPIC", num_args = 1.., required = true)]
        topics: Vec<String>,
    },
    /// Study a flashcard deck interactively.
    ///
    /// Commands on stdin: n(ext), p(rev), f(lip), s(huffle), q(uit).
    Flashcards {
        /// Cards as `QUESTION=ANSWER`
        #[arg(value_name = "QUESTION=ANSWER", num_args = 1.., required = true)]
        cards: Vec<String>,
    },
    /// Keep coloured sticky notes for this session.
    ///
    /// Commands on stdin: a(dd) TITLE | CONTENT, c(olor) COLOR, e(dit) N,
    /// s(ave) TITLE | CONTENT, x (cancel edit), r(emove) N, l(ist), q(uit).
    Notes,
    /// Track completed past papers per subject.
    ///
    /// Commands on stdin: s(ubject) NAME, u(se) N, d(rop) N, a(dd) CODE,
    /// t(oggle) N, r(emove) N, l(ist), q(uit).
    Papers,
    /// Show or change the light/dark theme preference.
    Theme {
        #[command(subcommand)]
        subcommand: Option<ThemeSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studyhub",
    about = "StudyHub student productivity widgets",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override focus period length in minutes
    #[arg(long = "focus-minutes", value_name = "MINUTES", value_parser = clap::value_parser!(u32).range(1..))]
    pub focus_minutes: Option<u32>,

    /// Override break period length in minutes
    #[arg(long = "break-minutes", value_name = "MINUTES", value_parser = clap::value_parser!(u32).range(1..))]
    pub break_minutes: Option<u32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override for that value.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            focus_minutes: self.focus_minutes,
            break_minutes: self.break_minutes,
        }
    }
}
