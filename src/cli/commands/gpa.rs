//! GPA command handler

use study_hub::core::models::grade::{CREDIT_RANGE, DEFAULT_CREDITS};
use study_hub::core::models::{format_gpa, GradeBook};
use study_hub::{debug, info};

/// Parse `GRADE[:CREDITS]` into a letter and a credit weight
fn parse_entry(raw: &str) -> Result<(&str, u32), String> {
    let (grade, credits) = match raw.split_once(':') {
        Some((grade, credits)) => {
            let credits = credits
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid credits in '{raw}'"))?;
            (grade, credits)
        }
        None => (raw, DEFAULT_CREDITS),
    };
    if !CREDIT_RANGE.contains(&credits) {
        return Err(format!(
            "Credits must be between {} and {} in '{raw}'",
            CREDIT_RANGE.start(),
            CREDIT_RANGE.end()
        ));
    }
    Ok((grade, credits))
}

/// Build a grade book from `entries`
///
/// # Errors
/// Returns a message for the first entry that cannot be parsed or is blank.
pub fn build_book(entries: &[String]) -> Result<GradeBook, String> {
    let mut book = GradeBook::new();
    for (index, raw) in entries.iter().enumerate() {
        let (grade, credits) = parse_entry(raw)?;
        let name = format!("Subject {}", index + 1);
        book.add(&name, grade, credits)
            .ok_or_else(|| format!("Missing grade in '{raw}'"))?;
    }
    Ok(book)
}

/// Print the entries and their credit-weighted GPA
pub fn run(entries: &[String]) {
    let book = match build_book(entries) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    for entry in book.entries() {
        debug!("{} -> {} points", entry.grade, entry.points());
        println!(
            "  {:<12} {:<3} {} credit(s)  {:.1} pts",
            entry.name,
            entry.grade,
            entry.credits,
            entry.points()
        );
    }

    match book.gpa() {
        Some(gpa) => {
            info!("gpa computed over {} credits", book.total_credits());
            println!("\n✓ GPA: {} ({} credits)", format_gpa(gpa), book.total_credits());
        }
        None => println!("\n✗ No credits entered"),
    }
}
