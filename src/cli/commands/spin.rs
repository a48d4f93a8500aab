//! Topic spinner command handler

use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use study_hub::core::models::TopicSpinner;
use study_hub::info;

const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Spin through `topics` and print the pick
pub fn run(topics: &[String]) {
    let mut spinner = TopicSpinner::new();
    for name in topics {
        spinner.add(name);
    }
    if spinner.topics().is_empty() {
        eprintln!("✗ No topics to choose from");
        std::process::exit(1);
    }

    let frames = spinner.spin(&mut rand::thread_rng());
    for id in &frames {
        if let Some(topic) = spinner.topics().iter().find(|t| t.id() == *id) {
            print!("\r{:<40}", topic.name);
            io::stdout().flush().ok();
        }
        thread::sleep(FRAME_DELAY);
    }
    println!();

    if let Some(topic) = spinner.selected() {
        info!("spinner picked '{}' after {} frames", topic.name, frames.len());
        println!("✓ Study next: {}", topic.name);
    }
}
