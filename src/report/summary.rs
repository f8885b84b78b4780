// src/report/summary.rs
// Headline numbers printed at the end of a run.

use crate::charts::language_counts;
use crate::report::RepositoryRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub total: usize,
    pub most_starred: (String, u64),
    pub most_forked: (String, u64),
    pub top_language: String,
}

impl RepositorySummary {
    /// Returns None for an empty table.
    ///
    /// Ties go to the row that comes first in API order.
    pub fn from_rows(rows: &[RepositoryRow]) -> Option<Self> {
        let most_starred = first_max_by(rows, |r| r.stars)?;
        let most_forked = first_max_by(rows, |r| r.forks)?;
        let top_language = language_counts(rows).into_iter().next()?.0;

        Some(Self {
            total: rows.len(),
            most_starred: (most_starred.name.clone(), most_starred.stars),
            most_forked: (most_forked.name.clone(), most_forked.forks),
            top_language,
        })
    }
}

// Iterator::max_by_key returns the *last* maximum, we want the first
fn first_max_by<F>(rows: &[RepositoryRow], key: F) -> Option<&RepositoryRow>
where
    F: Fn(&RepositoryRow) -> u64,
{
    let mut best: Option<&RepositoryRow> = None;
    for row in rows {
        match best {
            Some(b) if key(b) >= key(row) => {}
            _ => best = Some(row),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(name: &str, language: &str, stars: u64, forks: u64) -> RepositoryRow {
        let date = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        RepositoryRow {
            name: name.to_string(),
            description: "No description".to_string(),
            language: language.to_string(),
            stars,
            forks,
            created_at: date,
            updated_at: date,
            url: format!("https://github.com/u/{}", name),
        }
    }

    #[test]
    fn test_summary_picks_first_maximum() {
        let rows = vec![
            row("a", "Rust", 3, 7),
            row("b", "Go", 9, 2),
            row("c", "Rust", 9, 7),
        ];
        let summary = RepositorySummary::from_rows(&rows).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.most_starred, ("b".to_string(), 9));
        assert_eq!(summary.most_forked, ("a".to_string(), 7));
        assert_eq!(summary.top_language, "Rust");
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(RepositorySummary::from_rows(&[]), None);
    }
}
