use serde::Serialize;

/// Aggregate salary statistics for one language on one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Per-source results, keyed by language in `LANGUAGES` order.
pub type ResultSet = Vec<(String, LanguageStats)>;

/// Reduce the salary estimates for one language to its stats entry.
///
/// `found` is the total the API reported for the query, not the number of
/// vacancies actually downloaded; pagination may cap the latter.
pub fn aggregate(found: u64, estimates: &[u64]) -> LanguageStats {
    let processed = estimates.len() as u64;
    let average = if processed > 0 {
        estimates.iter().sum::<u64>() / processed
    } else {
        0
    };
    LanguageStats {
        vacancies_found: found,
        vacancies_processed: processed,
        average_salary: average,
    }
}
