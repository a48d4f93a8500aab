//! Quote command handler

use study_hub::core::models::{quote_for_today, random_quote};

/// Print today's quote, or a random one
pub fn run(random: bool) {
    let quote = if random {
        random_quote(&mut rand::thread_rng())
    } else {
        quote_for_today()
    };
    println!("{quote}");
}
