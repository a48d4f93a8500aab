//! Interactive flashcard study loop

use rand::Rng;
use std::io::{self, BufRead, Write};
use study_hub::core::models::{CardFace, Deck};
use study_hub::{debug, warn};

/// Build a deck from `QUESTION=ANSWER` pairs, skipping malformed ones
pub fn build_deck(cards: &[String]) -> Deck {
    let mut deck = Deck::new();
    for raw in cards {
        let added = raw
            .split_once('=')
            .and_then(|(question, answer)| deck.add(question, answer));
        if added.is_none() {
            warn!("skipping card '{raw}': expected QUESTION=ANSWER");
        }
    }
    deck
}

fn show<W: Write>(deck: &Deck, out: &mut W) -> io::Result<()> {
    let side = match deck.face() {
        CardFace::Question => "Q",
        CardFace::Answer => "A",
    };
    writeln!(
        out,
        "[{}/{}] {side}: {}",
        deck.cursor() + 1,
        deck.len(),
        deck.visible_text().unwrap_or_default()
    )
}

/// Drive `deck` from line commands until `q` or end of input
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `out`.
pub fn study<R: BufRead, W: Write, G: Rng + ?Sized>(
    deck: &mut Deck,
    input: R,
    out: &mut W,
    rng: &mut G,
) -> io::Result<()> {
    show(deck, out)?;
    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "n" | "next" => {
                if !deck.next() {
                    writeln!(out, "(last card)")?;
                }
            }
            "p" | "prev" => {
                if !deck.prev() {
                    writeln!(out, "(first card)")?;
                }
            }
            "f" | "flip" => deck.flip(),
            "s" | "shuffle" => {
                if !deck.shuffle(rng) {
                    writeln!(out, "(need at least two cards to shuffle)")?;
                }
            }
            "q" | "quit" => break,
            "" => continue,
            other => {
                writeln!(out, "Unknown command '{other}' (n, p, f, s, q)")?;
                continue;
            }
        }
        debug!("deck cursor {} face {:?}", deck.cursor(), deck.face());
        show(deck, out)?;
    }
    Ok(())
}

/// Study `cards` over stdin
pub fn run(cards: &[String]) {
    let mut deck = build_deck(cards);
    if deck.is_empty() {
        eprintln!("✗ No valid cards (use QUESTION=ANSWER)");
        std::process::exit(1);
    }

    println!("Commands: n(ext), p(rev), f(lip), s(huffle), q(uit)");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = study(&mut deck, stdin.lock(), &mut stdout, &mut rand::thread_rng()) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!("✓ Studied {} card(s)", deck.len());
}
