use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Salary {
    pub from: Option<u64>,
    pub to: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Vacancy {
    pub salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<Vacancy>,
    pub found: u64,
    pub pages: u32,
}
