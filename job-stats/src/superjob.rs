use log;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::stats::{aggregate, ResultSet};
use crate::{search_phrase, LANGUAGES};

const SEARCH_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const MOSCOW_TOWN: &str = "Москва";
const VACANCIES_PER_PAGE: u32 = 100;
const API_KEY_HEADER: &str = "X-Api-App-Id";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{0}' was not successful")]
    RequestNotOk(String),
}

// SuperJob sends 0 instead of omitting an unspecified payment bound.
#[derive(Debug, Deserialize)]
pub(crate) struct Vacancy {
    #[serde(default)]
    pub payment_from: u64,
    #[serde(default)]
    pub payment_to: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub objects: Vec<Vacancy>,
    pub total: u64,
    pub more: bool,
}

/// Same policy as the hh.ru estimator, over SuperJob's flat payment fields:
/// lower bound first, upper bound as a fallback, zero meaning absent.
fn predict_salary(vacancy: &Vacancy) -> Option<u64> {
    if vacancy.payment_from > 0 {
        return Some(vacancy.payment_from);
    }
    if vacancy.payment_to > 0 {
        return Some(vacancy.payment_to);
    }
    None
}

async fn fetch_search_page(
    client: &Client,
    api_key: &str,
    search: &str,
    page: u32,
) -> Result<SearchResponse> {
    log::debug!(
        "requesting vacancies from superjob, page: {}, search: {}",
        page,
        search
    );
    let count = VACANCIES_PER_PAGE.to_string();
    let page_index = page.to_string();
    let resp = client
        .get(SEARCH_URL)
        .header(API_KEY_HEADER, api_key)
        .query(&[
            ("keyword", search),
            ("town", MOSCOW_TOWN),
            ("count", count.as_str()),
            ("page", page_index.as_str()),
        ])
        .send()
        .await?;
    if !resp.status().is_success() {
        let error_body = resp.text().await;
        log::error!(
            "failed to retrieve results for page: {}, search: {}, error resp body: {:?}",
            page,
            search,
            error_body,
        );
        return Err(Error::RequestNotOk(SEARCH_URL.to_owned()));
    }

    let search_page: SearchResponse = resp.json().await?;
    Ok(search_page)
}

/// Download every result page for one language, following the `more` flag.
async fn fetch_language(
    client: &Client,
    api_key: &str,
    language: &str,
) -> Result<(u64, Vec<Vacancy>)> {
    let search = search_phrase(language);
    let mut page = 0;
    let mut found = 0;
    let mut vacancies = Vec::new();
    loop {
        let search_page = fetch_search_page(client, api_key, &search, page).await?;
        if page == 0 {
            found = search_page.total;
        }
        let more = search_page.more;
        vacancies.extend(search_page.objects);
        if !more {
            break;
        }
        page += 1;
    }
    Ok((found, vacancies))
}

/// Collect salary statistics from SuperJob for every language in `LANGUAGES`.
/// The API key is passed in by the caller, never read from the environment
/// here.
pub async fn collect_stats(api_key: &str) -> Result<ResultSet> {
    let client = Client::new();
    let mut results = Vec::with_capacity(LANGUAGES.len());
    for language in LANGUAGES {
        let (found, vacancies) = fetch_language(&client, api_key, language).await?;
        log::info!(
            "superjob: downloaded {} vacancies for {}",
            vacancies.len(),
            language
        );
        let estimates = vacancies
            .iter()
            .filter_map(predict_salary)
            .collect::<Vec<_>>();
        results.push((language.to_owned(), aggregate(found, &estimates)));
    }
    Ok(results)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lower_bound_wins_when_both_present() {
        let vacancy = Vacancy {
            payment_from: 100_000,
            payment_to: 200_000,
        };
        assert_eq!(predict_salary(&vacancy), Some(100_000));
    }

    #[test]
    fn test_upper_bound_when_lower_is_zero() {
        let vacancy = Vacancy {
            payment_from: 0,
            payment_to: 200_000,
        };
        assert_eq!(predict_salary(&vacancy), Some(200_000));
    }

    #[test]
    fn test_both_zero_means_no_estimate() {
        let vacancy = Vacancy {
            payment_from: 0,
            payment_to: 0,
        };
        assert_eq!(predict_salary(&vacancy), None);
    }

    #[test]
    fn test_deserialize_search_page_with_missing_payments() {
        let body = json!({
            "objects": [
                {"profession": "Программист Java", "payment_from": 80_000, "payment_to": 0},
                {"profession": "Программист Java"},
            ],
            "total": 17,
            "more": false,
        });
        let page: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.total, 17);
        assert!(!page.more);
        assert_eq!(predict_salary(&page.objects[0]), Some(80_000));
        assert_eq!(predict_salary(&page.objects[1]), None);
    }
}
