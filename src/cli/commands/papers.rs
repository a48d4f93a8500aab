//! Interactive past-paper tracker

use super::{parse_position, split_command};
use std::io::{self, BufRead, Write};
use study_hub::core::models::{PaperSubject, PaperTracker, RecordId};
use study_hub::debug;

const HELP: &str = "Commands: s NAME, u N, d N, a CODE, t N, r N, l, q";

fn list<W: Write>(tracker: &PaperTracker, out: &mut W) -> io::Result<()> {
    if tracker.subjects().is_empty() {
        return writeln!(out, "(no subjects)");
    }
    let selected = tracker.selected().map(PaperSubject::id);
    for (index, subject) in tracker.subjects().iter().enumerate() {
        let marker = if selected == Some(subject.id()) { ">" } else { " " };
        writeln!(
            out,
            "{marker}{}. {} ({}/{})",
            index + 1,
            subject.name,
            subject.completed_count(),
            subject.paper_count()
        )?;
    }
    if let Some(subject) = tracker.selected() {
        for (index, paper) in subject.papers().iter().enumerate() {
            let mark = if paper.completed { "x" } else { " " };
            writeln!(out, "    {}. [{mark}] {}", index + 1, paper.code)?;
        }
    }
    Ok(())
}

/// Selected subject id and the id of its paper at 1-based position `arg`
fn selected_paper(tracker: &PaperTracker, arg: &str) -> Option<(RecordId, RecordId)> {
    let subject = tracker.selected()?;
    let index = parse_position(arg, subject.paper_count())?;
    Some((subject.id(), subject.papers()[index].id()))
}

fn subject_at(tracker: &PaperTracker, arg: &str) -> Option<RecordId> {
    parse_position(arg, tracker.subjects().len()).map(|i| tracker.subjects()[i].id())
}

/// Drive `tracker` from line commands until `q` or end of input
///
/// Subject commands (`s`, `u`, `d`) take positions in the subject list;
/// paper commands (`a`, `t`, `r`) act on the selected subject.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `out`.
pub fn track<R: BufRead, W: Write>(
    tracker: &mut PaperTracker,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let (cmd, rest) = split_command(&line);
        let changed = match cmd {
            "s" | "subject" => tracker.add_subject(rest).is_some(),
            "u" | "use" => subject_at(tracker, rest).is_some_and(|id| tracker.select(id)),
            "d" | "drop" => subject_at(tracker, rest).is_some_and(|id| tracker.remove_subject(id)),
            "a" | "add" => {
                if tracker.selected().is_none() {
                    writeln!(out, "(select a subject first)")?;
                    continue;
                }
                tracker.add_paper(rest).is_some()
            }
            "t" | "toggle" => selected_paper(tracker, rest)
                .and_then(|(subject, paper)| tracker.toggle_paper(subject, paper))
                .is_some(),
            "r" | "remove" => selected_paper(tracker, rest)
                .is_some_and(|(subject, paper)| tracker.remove_paper(subject, paper)),
            "l" | "list" => true,
            "q" | "quit" => break,
            "" => continue,
            _ => {
                writeln!(out, "{HELP}")?;
                continue;
            }
        };
        if changed {
            list(tracker, out)?;
        } else {
            writeln!(out, "(nothing matched '{}')", line.trim())?;
        }
        debug!("papers: {} subject(s)", tracker.subjects().len());
    }
    Ok(())
}

/// Track past papers over stdin
pub fn run() {
    let mut tracker = PaperTracker::new();
    println!("{HELP}");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = track(&mut tracker, stdin.lock(), &mut stdout) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    let (done, total) = tracker.subjects().iter().fold((0, 0), |(done, total), s| {
        (done + s.completed_count(), total + s.paper_count())
    });
    println!("✓ {done}/{total} paper(s) completed");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> (PaperTracker, Vec<String>) {
        let mut tracker = PaperTracker::new();
        let mut out = Vec::new();
        track(&mut tracker, script.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        (tracker, text.lines().map(ToString::to_string).collect())
    }

    #[test]
    fn test_add_papers_needs_a_subject() {
        let (tracker, lines) = session("a 2019 P1\ns Physics\na 2019 P1\n");
        assert_eq!(lines[0], "(select a subject first)");
        assert_eq!(lines[1], ">1. Physics (0/0)");
        assert_eq!(lines[2], ">1. Physics (0/1)");
        assert_eq!(lines[3], "    1. [ ] 2019 P1");
        assert_eq!(tracker.subjects()[0].paper_count(), 1);
    }

    #[test]
    fn test_toggle_and_remove_update_counts() {
        let (tracker, lines) =
            session("s Maths\na P1\na P2\nt 2\nl\nt 2\nt 9\nr 1\nq\nt 1\n");
        // After the first toggle
        assert_eq!(lines[6], ">1. Maths (1/2)");
        assert_eq!(lines[8], "    2. [x] P2");
        assert!(lines.contains(&"(nothing matched 't 9')".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("    1. [ ] P2"));
        let subject = &tracker.subjects()[0];
        assert_eq!((subject.completed_count(), subject.paper_count()), (0, 1));
    }

    #[test]
    fn test_select_and_drop_subjects() {
        let (tracker, lines) = session("s Physics\ns Chemistry\nu 1\nd 1\nu 3\na P1\n");
        assert_eq!(lines[3], ">1. Physics (0/0)");
        assert_eq!(lines[4], " 2. Chemistry (0/0)");
        // Dropping the selected subject clears the selection
        assert_eq!(lines[5], " 1. Chemistry (0/0)");
        assert_eq!(lines[6], "(nothing matched 'u 3')");
        assert_eq!(lines[7], "(select a subject first)");
        assert_eq!(tracker.subjects().len(), 1);
        assert!(tracker.selected().is_none());
    }
}
