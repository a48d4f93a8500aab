//! Wellness check command handler

use study_hub::core::wellness::{assess, WellnessInput, HOURS_RANGE, STRESS_RANGE};
use study_hub::debug;

/// Check that answers fall inside the accepted ranges
///
/// # Errors
/// Returns a message naming the first out-of-range answer.
pub fn validate(input: &WellnessInput) -> Result<(), String> {
    if !HOURS_RANGE.contains(&input.sleep_hours) {
        return Err(format!("Sleep hours must be between 0 and 12, got {}", input.sleep_hours));
    }
    if !HOURS_RANGE.contains(&input.study_hours) {
        return Err(format!("Study hours must be between 0 and 12, got {}", input.study_hours));
    }
    if !STRESS_RANGE.contains(&input.stress_level) {
        return Err(format!("Stress level must be between 1 and 10, got {}", input.stress_level));
    }
    Ok(())
}

/// Print feedback for the given answers
pub fn run(sleep_hours: f32, study_hours: f32, stress_level: u8) {
    let input = WellnessInput {
        sleep_hours,
        study_hours,
        stress_level,
    };
    if let Err(e) = validate(&input) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    let report = assess(&input);
    debug!("wellness buckets: {report:?}");
    println!("\n=== Wellness Check ===\n");
    println!("{report}");
}
