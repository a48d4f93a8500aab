//! Theme command handler

use crate::args::ThemeSubcommand;
use study_hub::config::Config;
use study_hub::core::theme::Theme;
use study_hub::{error, info};

fn store(config: &mut Config, theme: Theme) {
    config.set_theme(theme);
    if let Err(e) = config.save() {
        error!("saving theme failed: {e}");
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
    info!("theme set to {theme}");
    println!("✓ Theme: {theme}");
}

/// Show, toggle or set the stored theme
pub fn run(subcommand: Option<ThemeSubcommand>, config: &mut Config) {
    match subcommand {
        None | Some(ThemeSubcommand::Show) => println!("{}", config.theme()),
        Some(ThemeSubcommand::Toggle) => {
            let mut theme = config.theme();
            store(config, theme.toggle());
        }
        Some(ThemeSubcommand::Set { theme }) => match theme.parse::<Theme>() {
            Ok(theme) => store(config, theme),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        },
    }
}
