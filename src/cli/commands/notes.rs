//! Interactive note board

use super::{parse_position, split_command};
use std::io::{self, BufRead, Write};
use study_hub::core::models::{NoteBoard, NoteColor, NoteDraft};
use study_hub::debug;

const HELP: &str = "Commands: a TITLE | CONTENT, c COLOR, e N, s TITLE | CONTENT, x, r N, l, q";

/// Title and content from `TITLE | CONTENT` (content may be omitted)
fn fields(rest: &str) -> (&str, &str) {
    rest.split_once('|')
        .map_or((rest, ""), |(title, content)| (title.trim(), content.trim()))
}

fn list<W: Write>(board: &NoteBoard, out: &mut W) -> io::Result<()> {
    if board.notes().is_empty() {
        return writeln!(out, "(no notes)");
    }
    for (index, note) in board.notes().iter().enumerate() {
        let marker = if board.editing() == Some(note.id()) { "*" } else { " " };
        writeln!(
            out,
            "{marker}{}. [{}] {}: {}",
            index + 1,
            note.color,
            note.title,
            note.content
        )?;
    }
    Ok(())
}

/// Drive `board` from line commands until `q` or end of input
///
/// `c` picks the colour used by the next add or save. `e` loads a note into
/// the edit slot (and its colour into the picker), `s` saves it, `x` cancels.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `out`.
pub fn manage<R: BufRead, W: Write>(
    board: &mut NoteBoard,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut color = NoteColor::default();
    for line in input.lines() {
        let line = line?;
        let (cmd, rest) = split_command(&line);
        match cmd {
            "a" | "add" => {
                let (title, content) = fields(rest);
                match board.add(&NoteDraft::new(title, content, color)) {
                    Some(_) => list(board, out)?,
                    None => writeln!(out, "(a note needs a title or content)")?,
                }
            }
            "c" | "color" => match rest.parse::<NoteColor>() {
                Ok(picked) => {
                    color = picked;
                    writeln!(out, "Color: {color} ({})", color.hex())?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "e" | "edit" => {
                let id = parse_position(rest, board.notes().len()).map(|i| board.notes()[i].id());
                match id.and_then(|id| board.start_editing(id)) {
                    Some(draft) => {
                        color = draft.color;
                        writeln!(out, "Editing: {} | {}", draft.title, draft.content)?;
                    }
                    None => writeln!(out, "(no note {rest})")?,
                }
            }
            "s" | "save" => {
                let (title, content) = fields(rest);
                if board.save_edit(&NoteDraft::new(title, content, color)) {
                    list(board, out)?;
                } else {
                    writeln!(out, "(nothing is being edited)")?;
                }
            }
            "x" | "cancel" => {
                board.cancel_edit();
                writeln!(out, "Edit cancelled")?;
            }
            "r" | "remove" => {
                let id = parse_position(rest, board.notes().len()).map(|i| board.notes()[i].id());
                if id.is_some_and(|id| board.remove(id)) {
                    list(board, out)?;
                } else {
                    writeln!(out, "(no note {rest})")?;
                }
            }
            "l" | "list" => list(board, out)?,
            "q" | "quit" => break,
            "" => {}
            _ => writeln!(out, "{HELP}")?,
        }
        debug!("notes: {} saved, editing {:?}", board.notes().len(), board.editing());
    }
    Ok(())
}

/// Manage notes over stdin
pub fn run() {
    let mut board = NoteBoard::new();
    println!("{HELP}");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = manage(&mut board, stdin.lock(), &mut stdout) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!("✓ {} note(s)", board.notes().len());
}
