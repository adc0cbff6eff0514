use std::fmt::Write;

use job_stats::ResultSet;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render one source's results as an ASCII table with the title embedded in
/// the top border.
pub fn render(title: &str, results: &ResultSet) -> String {
    let mut rows = Vec::with_capacity(results.len());
    for (language, stats) in results {
        rows.push([
            language.clone(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats.average_salary.to_string(),
        ]);
    }

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(title_border(title, &widths));
    lines.push(format_row(&HEADERS.map(String::from), &widths));
    lines.push(border(&widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.push(border(&widths));
    lines.join("\n")
}

fn border(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn title_border(title: &str, widths: &[usize; 4]) -> String {
    let mut line = border(widths);
    if title.len() + 1 < line.len() {
        line.replace_range(1..title.len() + 1, title);
    }
    line
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        write!(line, "| {:<width$} ", cell).unwrap();
    }
    line.push('|');
    line
}

#[cfg(test)]
mod test {
    use super::*;
    use job_stats::{aggregate, LanguageStats, LANGUAGES};
    use std::collections::HashMap;

    fn stats(found: u64, processed_salaries: &[u64]) -> LanguageStats {
        aggregate(found, processed_salaries)
    }

    #[test]
    fn test_render_exact_layout() {
        let results = vec![
            ("Python".to_owned(), stats(100, &[120_000; 42])),
            ("C".to_owned(), stats(10, &[90_000; 5])),
        ];
        let expected = [
            "+hh.ru-----+-----------------+---------------------+----------------+",
            "| Language | Vacancies found | Vacancies processed | Average salary |",
            "+----------+-----------------+---------------------+----------------+",
            "| Python   | 100             | 42                  | 120000         |",
            "| C        | 10              | 5                   | 90000          |",
            "+----------+-----------------+---------------------+----------------+",
        ]
        .join("\n");
        assert_eq!(render("hh.ru", &results), expected);
    }

    #[test]
    fn test_columns_grow_with_wide_cells() {
        let results = vec![("JavaScript".to_owned(), stats(123_456_789, &[]))];
        let rendered = render("wide", &results);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[3].starts_with("| JavaScript | 123456789"));
        assert!(lines.iter().all(|line| line.len() == lines[1].len()));
    }

    #[test]
    fn test_rows_follow_language_order() {
        let mut by_language = HashMap::new();
        for (i, language) in LANGUAGES.iter().rev().enumerate() {
            by_language.insert(language.to_string(), stats(i as u64, &[]));
        }
        let results = LANGUAGES
            .iter()
            .map(|language| (language.to_string(), by_language.remove(*language).unwrap()))
            .collect();
        let rendered = render("order", &results);
        let lines: Vec<&str> = rendered.lines().collect();
        for (row, language) in lines[3..11].iter().zip(LANGUAGES) {
            assert!(
                row.starts_with(&format!("| {}", language)),
                "unexpected row: {}",
                row
            );
        }
    }
}
