pub mod hh;
pub mod stats;
pub mod superjob;

pub use stats::{aggregate, LanguageStats, ResultSet};

/// Languages the statistics are collected for, in report order.
pub const LANGUAGES: [&str; 8] = [
    "Python",
    "C",
    "C++",
    "Java",
    "JavaScript",
    "Scala",
    "Ruby",
    "Swift",
];

pub(crate) fn search_phrase(language: &str) -> String {
    format!("Программист {}", language)
}
