//! Wellness check: canned feedback from sleep, study and stress inputs

use std::fmt;

/// Accepted sleep and study hours
pub const HOURS_RANGE: std::ops::RangeInclusive<f32> = 0.0..=12.0;

/// Accepted stress levels
pub const STRESS_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Survey answers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellnessInput {
    /// Hours of sleep per night
    pub sleep_hours: f32,
    /// Hours of study per day
    pub study_hours: f32,
    /// Stress level from 1 (calm) to 10 (overwhelmed)
    pub stress_level: u8,
}

impl Default for WellnessInput {
    fn default() -> Self {
        Self {
            sleep_hours: 7.0,
            study_hours: 4.0,
            stress_level: 5,
        }
    }
}

/// Sleep assessment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepBucket {
    /// Under 6 hours
    TooLittle,
    /// 6 to 9 hours
    Healthy,
    /// Over 9 hours
    TooMuch,
}

/// Study assessment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyBucket {
    /// Under 2 hours
    Light,
    /// 2 to 8 hours
    Balanced,
    /// Over 8 hours
    Heavy,
}

/// Stress assessment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressBucket {
    /// Below 3
    Low,
    /// 3 to 7
    Moderate,
    /// Above 7
    High,
}

/// Overall summary, evaluated in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overall {
    /// Little sleep, long study and high stress together
    Overloaded,
    /// Enough sleep, moderate study and contained stress
    WellBalanced,
    /// Anything else
    RoomToImprove,
}

impl SleepBucket {
    fn classify(hours: f32) -> Self {
        if hours < 6.0 {
            Self::TooLittle
        } else if hours > 9.0 {
            Self::TooMuch
        } else {
            Self::Healthy
        }
    }

    const fn feedback(self) -> &'static str {
        match self {
            Self::TooLittle => "You're not getting enough sleep. Try to aim for 7-9 hours for optimal cognitive function.",
            Self::TooMuch => "You might be oversleeping. While rest is important, too much sleep can make you feel groggy.",
            Self::Healthy => "Your sleep schedule looks good! Keep maintaining this healthy pattern.",
        }
    }
}

impl StudyBucket {
    fn classify(hours: f32) -> Self {
        if hours > 8.0 {
            Self::Heavy
        } else if hours < 2.0 {
            Self::Light
        } else {
            Self::Balanced
        }
    }

    const fn feedback(self) -> &'static str {
        match self {
            Self::Heavy => "You're studying a lot. Remember to take breaks to prevent burnout.",
            Self::Light => "Consider increasing your study time slightly for better retention.",
            Self::Balanced => "Your study hours seem balanced.",
        }
    }
}

impl StressBucket {
    const fn classify(level: u8) -> Self {
        if level > 7 {
            Self::High
        } else if level < 3 {
            Self::Low
        } else {
            Self::Moderate
        }
    }

    const fn feedback(self) -> &'static str {
        match self {
            Self::High => "Your stress levels are high. Try meditation, deep breathing, or a short walk to reduce stress.",
            Self::Low => "Your stress levels are low, which is great!",
            Self::Moderate => "Your stress level is moderate. Regular breaks and relaxation techniques can help maintain this balance.",
        }
    }
}

impl Overall {
    fn classify(input: &WellnessInput) -> Self {
        if input.sleep_hours < 6.0 && input.study_hours > 7.0 && input.stress_level > 7 {
            Self::Overloaded
        } else if input.sleep_hours >= 7.0 && input.study_hours <= 6.0 && input.stress_level <= 5 {
            Self::WellBalanced
        } else {
            Self::RoomToImprove
        }
    }

    const fn feedback(self) -> &'static str {
        match self {
            Self::Overloaded => "Overall, you seem to be pushing yourself too hard. Consider prioritizing rest and self-care.",
            Self::WellBalanced => "Overall, you have a good balance of rest, study, and stress management. Keep it up!",
            Self::RoomToImprove => "Overall, with some small adjustments to your routine, you can improve your wellbeing and productivity.",
        }
    }
}

/// Result of a wellness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellnessReport {
    /// Sleep bucket
    pub sleep: SleepBucket,
    /// Study bucket
    pub study: StudyBucket,
    /// Stress bucket
    pub stress: StressBucket,
    /// Overall summary
    pub overall: Overall,
}

impl WellnessReport {
    /// Full feedback text: the three bucket sentences followed by the summary
    #[must_use]
    pub fn feedback(&self) -> String {
        [
            self.sleep.feedback(),
            self.study.feedback(),
            self.stress.feedback(),
            self.overall.feedback(),
        ]
        .join(" ")
    }
}

impl fmt::Display for WellnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback())
    }
}

/// Bucket each answer and pick the overall summary
#[must_use]
pub fn assess(input: &WellnessInput) -> WellnessReport {
    WellnessReport {
        sleep: SleepBucket::classify(input.sleep_hours),
        study: StudyBucket::classify(input.study_hours),
        stress: StressBucket::classify(input.stress_level),
        overall: Overall::classify(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(sleep_hours: f32, study_hours: f32, stress_level: u8) -> WellnessInput {
        WellnessInput {
            sleep_hours,
            study_hours,
            stress_level,
        }
    }

    #[test]
    fn test_default_answers_are_balanced() {
        let report = assess(&WellnessInput::default());
        assert_eq!(report.sleep, SleepBucket::Healthy);
        assert_eq!(report.study, StudyBucket::Balanced);
        assert_eq!(report.stress, StressBucket::Moderate);
        assert_eq!(report.overall, Overall::WellBalanced);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(assess(&input(5.5, 4.0, 5)).sleep, SleepBucket::TooLittle);
        assert_eq!(assess(&input(6.0, 4.0, 5)).sleep, SleepBucket::Healthy);
        assert_eq!(assess(&input(9.0, 4.0, 5)).sleep, SleepBucket::Healthy);
        assert_eq!(assess(&input(9.5, 4.0, 5)).sleep, SleepBucket::TooMuch);

        assert_eq!(assess(&input(7.0, 1.5, 5)).study, StudyBucket::Light);
        assert_eq!(assess(&input(7.0, 8.0, 5)).study, StudyBucket::Balanced);
        assert_eq!(assess(&input(7.0, 8.5, 5)).study, StudyBucket::Heavy);

        assert_eq!(assess(&input(7.0, 4.0, 2)).stress, StressBucket::Low);
        assert_eq!(assess(&input(7.0, 4.0, 3)).stress, StressBucket::Moderate);
        assert_eq!(assess(&input(7.0, 4.0, 7)).stress, StressBucket::Moderate);
        assert_eq!(assess(&input(7.0, 4.0, 8)).stress, StressBucket::High);
    }

    #[test]
    fn test_overload_takes_priority() {
        let report = assess(&input(5.0, 7.5, 9));
        assert_eq!(report.overall, Overall::Overloaded);
        // Study 7.5 is still "balanced" on its own
        assert_eq!(report.study, StudyBucket::Balanced);
    }

    #[test]
    fn test_default_summary_fallback() {
        assert_eq!(assess(&input(6.5, 4.0, 4)).overall, Overall::RoomToImprove);
        assert_eq!(assess(&input(8.0, 6.5, 4)).overall, Overall::RoomToImprove);
        assert_eq!(assess(&input(8.0, 6.0, 6)).overall, Overall::RoomToImprove);
    }

    #[test]
    fn test_feedback_concatenates_in_order() {
        let text = assess(&input(4.0, 10.0, 9)).feedback();
        assert!(text.starts_with("You're not getting enough sleep."));
        let study = text.find("You're studying a lot.").unwrap();
        let stress = text.find("Your stress levels are high.").unwrap();
        let overall = text.find("Overall, you seem to be pushing").unwrap();
        assert!(study < stress && stress < overall);
    }
}
