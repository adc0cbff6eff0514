use log;
use reqwest::Client;

use crate::hh::types::{SearchResponse, Vacancy};
use crate::hh::{Error, Result};
use crate::stats::{aggregate, ResultSet};
use crate::{search_phrase, LANGUAGES};

const SEARCH_URL: &str = "https://api.hh.ru/vacancies";
const MOSCOW_AREA: &str = "1";
const VACANCIES_PER_PAGE: u32 = 100;

/// Predicted monthly salary in rubles: the lower bound when the posting has
/// one, otherwise the upper bound. Zero bounds mean "not specified" on hh.ru.
fn predict_salary(vacancy: &Vacancy) -> Option<u64> {
    let salary = vacancy.salary.as_ref()?;
    let from = salary.from.filter(|rub| *rub > 0);
    let to = salary.to.filter(|rub| *rub > 0);
    from.or(to)
}

async fn fetch_search_page(client: &Client, search: &str, page: u32) -> Result<SearchResponse> {
    log::debug!(
        "requesting vacancies from hh.ru, page: {}, search: {}",
        page,
        search
    );
    let per_page = VACANCIES_PER_PAGE.to_string();
    let page_index = page.to_string();
    let resp = client
        .get(SEARCH_URL)
        .query(&[
            ("text", search),
            ("area", MOSCOW_AREA),
            ("per_page", per_page.as_str()),
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

/// Download every result page for one language.
/// Returns the total the API reported alongside the accumulated vacancies.
async fn fetch_language(client: &Client, language: &str) -> Result<(u64, Vec<Vacancy>)> {
    let search = search_phrase(language);
    let mut page = 0;
    let mut found = 0;
    let mut vacancies = Vec::new();
    loop {
        let search_page = fetch_search_page(client, &search, page).await?;
        if page == 0 {
            found = search_page.found;
        }
        let pages = search_page.pages;
        vacancies.extend(search_page.items);
        if page + 1 >= pages {
            break;
        }
        page += 1;
    }
    Ok((found, vacancies))
}

/// Collect salary statistics from hh.ru for every language in `LANGUAGES`,
/// sequentially, one request at a time. Any non-success response aborts the
/// whole collection.
pub async fn collect_stats() -> Result<ResultSet> {
    let client = Client::new();
    let mut results = Vec::with_capacity(LANGUAGES.len());
    for language in LANGUAGES {
        let (found, vacancies) = fetch_language(&client, language).await?;
        log::info!(
            "hh.ru: downloaded {} vacancies for {}",
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
