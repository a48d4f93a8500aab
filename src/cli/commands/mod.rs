//! CLI command handlers for `StudyHub`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod flashcards;
pub mod focus;
pub mod gpa;
pub mod notes;
pub mod papers;
pub mod pomodoro;
pub mod quote;
pub mod spin;
pub mod theme;
pub mod wellness;

/// Split an input line into its command word and the trimmed remainder
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    line.split_once(char::is_whitespace)
        .map_or((line, ""), |(cmd, rest)| (cmd, rest.trim()))
}

/// Parse a 1-based position into an index below `len`
pub fn parse_position(arg: &str, len: usize) -> Option<usize> {
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&index| index < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("  a  Physics  HL "), ("a", "Physics  HL"));
        assert_eq!(split_command("l"), ("l", ""));
        assert_eq!(split_command("   "), ("", ""));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1", 3), Some(0));
        assert_eq!(parse_position("3", 3), Some(2));
        assert_eq!(parse_position("4", 3), None);
        assert_eq!(parse_position("0", 3), None);
        assert_eq!(parse_position("x", 3), None);
    }
}
