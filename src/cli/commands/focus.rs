//! Focus tracking session and distribution chart

use std::io::{self, Write};
use std::thread;
use std::time::Instant;
use study_hub::core::timer::{format_hms, FocusBar, FocusTracker, TICK_PERIOD};
use study_hub::{info, verbose};

const BAR_WIDTH: f64 = 30.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_line(bar: &FocusBar) -> String {
    let filled = (bar.fraction * BAR_WIDTH).round() as usize;
    format!(
        "{:<16} {:<30} {} ({})",
        bar.name,
        "#".repeat(filled),
        format_hms(bar.seconds),
        bar.color
    )
}

/// Register `subjects`, track one of them for `seconds` (until Ctrl-C when `None`)
/// and print the distribution
pub fn run(subjects: &[String], track: Option<&str>, seconds: Option<u64>) {
    let mut rng = rand::thread_rng();
    let mut tracker = FocusTracker::new();
    for name in subjects {
        if tracker.add_subject(name, &mut rng).is_none() {
            eprintln!("✗ Skipping blank subject name");
        }
    }

    let target = match track {
        Some(name) => tracker
            .subjects()
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim())),
        None => tracker.subjects().first(),
    };
    let Some(target) = target.map(|s| s.id()) else {
        eprintln!("✗ No subject to track");
        std::process::exit(1);
    };

    tracker.start_tracking(target);
    if let Some(active) = tracker.active() {
        info!("focus: tracking '{}'", active.name);
        println!("Tracking {} (Ctrl-C to stop)", active.name);
    }

    let mut last = Instant::now();
    while seconds.map_or(true, |limit| tracker.session_secs() < limit) {
        thread::sleep(TICK_PERIOD);
        let now = Instant::now();
        tracker.advance(now - last);
        last = now;
        print!("\r{}   ", format_hms(tracker.session_secs()));
        io::stdout().flush().ok();
    }
    println!();

    let session = tracker.session_secs();
    tracker.stop_tracking();
    verbose!("Session length: {}", format_hms(session));

    println!("\n=== Focus Distribution ===\n");
    for bar in tracker.distribution() {
        println!("{}", bar_line(&bar));
    }
    println!("\n✓ Tracked {}", format_hms(session));
}
