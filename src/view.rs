use crate::model::{GradeFilter, SortDirection, SortKey, Student, ViewParams};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Case-insensitive name ordering with the raw string as in-key tie-break,
/// so the order is total and deterministic. Students whose full key compares
/// equal (identical names) keep their filtered order via the stable sort.
fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Derive the display projection: search filter, then grade filter, then a
/// stable sort. Never mutates the input collection.
pub fn project(students: &[Student], params: &ViewParams) -> Vec<Student> {
    let needle = params.search_text.trim().to_lowercase();

    let mut out: Vec<Student> = students
        .iter()
        .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
        .filter(|s| match &params.grade_filter {
            GradeFilter::All => true,
            GradeFilter::Grade(g) => s.grade == *g,
        })
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        let ord = match params.sort_key {
            SortKey::Name => name_order(&a.name, &b.name),
            SortKey::Age => a.age.cmp(&b.age),
        };
        match params.sort_direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    out
}

/// Distinct grade values across the full (unfiltered) collection, ascending.
/// Recomputed from the collection, never from a projection, so the filter
/// dropdown keeps every option while a grade filter is active.
pub fn grade_options(students: &[Student]) -> Vec<String> {
    let set: BTreeSet<&str> = students.iter().map(|s| s.grade.as_str()).collect();
    set.into_iter().map(|g| g.to_string()).collect()
}
