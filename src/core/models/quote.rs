//! Built-in motivational quotes and the quote of the day

use crate::core::selection;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// A quote and who said it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Quote text
    pub text: &'static str,
    /// Author
    pub author: &'static str,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}

const fn quote(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

/// Quotes the widget picks from
pub const QUOTES: [Quote; 15] = [
    quote(
        "The beautiful thing about learning is that no one can take it away from you.",
        "B.B. King",
    ),
    quote(
        "Education is the most powerful weapon which you can use to change the world.",
        "Nelson Mandela",
    ),
    quote(
        "The mind is not a vessel to be filled, but a fire to be kindled.",
        "Plutarch",
    ),
    quote(
        "Live as if you were to die tomorrow. Learn as if you were to live forever.",
        "Mahatma Gandhi",
    ),
    quote(
        "The more that you read, the more things you will know. The more that you learn, the more places you'll go.",
        "Dr. Seuss",
    ),
    quote(
        "Education is not the filling of a pail, but the lighting of a fire.",
        "W.B. Yeats",
    ),
    quote(
        "The only person who is educated is the one who has learned how to learn and change.",
        "Carl Rogers",
    ),
    quote(
        "You don't have to be great to start, but you have to start to be great.",
        "Zig Ziglar",
    ),
    quote("The expert in anything was once a beginner.", "Helen Hayes"),
    quote(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    quote(
        "Success is the sum of small efforts, repeated day in and day out.",
        "Robert Collier",
    ),
    quote(
        "You don't have to be perfect. You just have to keep going.",
        "Unknown",
    ),
    quote("Every expert was once a beginner.", "Helen Hayes"),
    quote(
        "Your future is created by what you do today, not tomorrow.",
        "Robert Kiyosaki",
    ),
    quote(
        "It's not about how fast you go. It's about not stopping.",
        "Unknown",
    ),
];

/// Quote for a calendar date: day-of-year modulo the number of quotes
#[must_use]
pub fn quote_of_the_day(date: NaiveDate) -> Quote {
    selection::daily_pick(&QUOTES, date.ordinal()).map_or(QUOTES[0], |q| *q)
}

/// Quote for today's local date
#[must_use]
pub fn quote_for_today() -> Quote {
    quote_of_the_day(chrono::Local::now().date_naive())
}

/// Uniformly random quote
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> Quote {
    selection::random_pick(&QUOTES, rng).map_or(QUOTES[0], |q| *q)
}
