// src/charts/analytics.rs
// =============================================================================
// The three derived views the charts are drawn from.
//
// All functions are pure: they borrow the table and return new vectors, so
// the table itself stays in API order for the exporter.
// =============================================================================

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::report::RepositoryRow;

// The `n` most-starred repositories, highest first
//
// The sort is stable, so repositories with equal stars keep their API order.
pub fn top_by_stars(rows: &[RepositoryRow], n: usize) -> Vec<&RepositoryRow> {
    let mut sorted: Vec<&RepositoryRow> = rows.iter().collect();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));
    sorted.truncate(n);
    sorted
}

// How many repositories use each language, most common first
//
// "Not specified" is counted like any other language. Equal counts are
// ordered by which language appears first in the table.
pub fn language_counts(rows: &[RepositoryRow]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        match index.get(row.language.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(row.language.as_str(), counts.len());
                counts.push((row.language.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// (creation date, running count) for every repository, oldest first
//
// The i-th point (1-based) always has count i.
pub fn creation_timeline(rows: &[RepositoryRow]) -> Vec<(NaiveDate, u32)> {
    let mut dates: Vec<NaiveDate> = rows.iter().map(|r| r.created_at).collect();
    dates.sort();
    dates.into_iter().zip(1u32..).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, language: &str, stars: u64, created: (i32, u32, u32)) -> RepositoryRow {
        let created_at = NaiveDate::from_ymd_opt(created.0, created.1, created.2).unwrap();
        RepositoryRow {
            name: name.to_string(),
            description: "No description".to_string(),
            language: language.to_string(),
            stars,
            forks: 0,
            created_at,
            updated_at: created_at,
            url: format!("https://github.com/u/{}", name),
        }
    }

    fn names(rows: &[&RepositoryRow]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_top_by_stars_descending() {
        let rows: Vec<_> = [3, 40, 7, 1, 25, 12, 9]
            .iter()
            .enumerate()
            .map(|(i, s)| row(&format!("r{}", i), "Rust", *s, (2020, 1, 1)))
            .collect();

        let top = top_by_stars(&rows, 5);
        assert_eq!(names(&top), vec!["r1", "r4", "r5", "r6", "r2"]);
        let stars: Vec<u64> = top.iter().map(|r| r.stars).collect();
        assert_eq!(stars, vec![40, 25, 12, 9, 7]);
    }

    #[test]
    fn test_top_by_stars_fewer_than_n() {
        let rows = vec![row("a", "Rust", 1, (2020, 1, 1)), row("b", "Rust", 2, (2020, 1, 1))];
        assert_eq!(names(&top_by_stars(&rows, 5)), vec!["b", "a"]);
    }

    #[test]
    fn test_top_by_stars_ties_keep_input_order() {
        let rows = vec![
            row("first", "Rust", 5, (2020, 1, 1)),
            row("big", "Rust", 8, (2020, 1, 1)),
            row("second", "Rust", 5, (2020, 1, 1)),
            row("third", "Rust", 5, (2020, 1, 1)),
        ];
        assert_eq!(names(&top_by_stars(&rows, 3)), vec!["big", "first", "second"]);
    }

    #[test]
    fn test_language_counts() {
        let rows = vec![
            row("a", "Not specified", 0, (2020, 1, 1)),
            row("b", "Go", 0, (2020, 1, 1)),
            row("c", "Rust", 0, (2020, 1, 1)),
            row("d", "Rust", 0, (2020, 1, 1)),
            row("e", "Go", 0, (2020, 1, 1)),
            row("f", "Python", 0, (2020, 1, 1)),
            row("g", "Rust", 0, (2020, 1, 1)),
        ];
        assert_eq!(
            language_counts(&rows),
            vec![
                ("Rust".to_string(), 3),
                ("Go".to_string(), 2),
                ("Not specified".to_string(), 1),
                ("Python".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_creation_timeline_counts_up() {
        let rows = vec![
            row("c", "Rust", 0, (2022, 3, 1)),
            row("a", "Rust", 0, (2019, 5, 9)),
            row("b", "Rust", 0, (2021, 1, 1)),
            row("d", "Rust", 0, (2021, 1, 1)),
        ];
        let timeline = creation_timeline(&rows);

        assert_eq!(timeline.len(), 4);
        for (i, (_, count)) in timeline.iter().enumerate() {
            assert_eq!(*count as usize, i + 1);
        }
        assert!(timeline.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(timeline[0].0, NaiveDate::from_ymd_opt(2019, 5, 9).unwrap());
    }

    #[test]
    fn test_views_of_empty_table() {
        assert!(top_by_stars(&[], 5).is_empty());
        assert!(language_counts(&[]).is_empty());
        assert!(creation_timeline(&[]).is_empty());
    }
}
