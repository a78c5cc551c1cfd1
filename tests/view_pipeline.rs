use studentd::model::{GradeFilter, SortDirection, SortKey, Student, ViewParams};
use studentd::view::{grade_options, project};

fn student(id: i64, name: &str, age: i64, grade: &str) -> Student {
    Student {
        id,
        name: name.to_string(),
        age,
        grade: grade.to_string(),
    }
}

fn roster() -> Vec<Student> {
    vec![
        student(1, "Bob", 20, "A"),
        student(2, "ann", 18, "B"),
        student(3, "Hannah", 17, "A"),
        student(4, "Dan", 18, "B"),
        student(5, "Cleo", 21, "C"),
    ]
}

#[test]
fn output_and_excluded_partition_the_collection() {
    let students = roster();
    let params = ViewParams {
        search_text: "an".to_string(),
        grade_filter: GradeFilter::Grade("B".to_string()),
        ..ViewParams::default()
    };
    let out = project(&students, &params);

    // Every kept student passes both filters.
    for s in &out {
        assert!(s.name.to_lowercase().contains("an"), "{}", s.name);
        assert_eq!(s.grade, "B");
    }
    // Every excluded student fails at least one filter.
    for s in students.iter().filter(|s| !out.contains(s)) {
        assert!(
            !s.name.to_lowercase().contains("an") || s.grade != "B",
            "{} should have been kept",
            s.name
        );
    }
    // Nothing is invented or duplicated.
    assert_eq!(
        out.len(),
        students
            .iter()
            .filter(|s| s.name.to_lowercase().contains("an") && s.grade == "B")
            .count()
    );
}

#[test]
fn descending_is_the_exact_reverse_without_ties() {
    let students = roster();
    for key in [SortKey::Name, SortKey::Age] {
        let collection: Vec<Student> = match key {
            // Distinct ages for the age case so there are no ties.
            SortKey::Age => students
                .iter()
                .cloned()
                .filter(|s| s.id != 4)
                .collect(),
            SortKey::Name => students.clone(),
        };
        let asc = project(
            &collection,
            &ViewParams {
                sort_key: key,
                ..ViewParams::default()
            },
        );
        let desc = project(
            &collection,
            &ViewParams {
                sort_key: key,
                sort_direction: SortDirection::Descending,
                ..ViewParams::default()
            },
        );
        let reversed: Vec<Student> = asc.into_iter().rev().collect();
        assert_eq!(desc, reversed);
    }
}

#[test]
fn ties_keep_their_filtered_order_in_both_directions() {
    let students = vec![
        student(7, "Gia", 18, "A"),
        student(2, "Ann", 18, "A"),
        student(9, "Flo", 18, "A"),
    ];
    let age_params = ViewParams {
        sort_key: SortKey::Age,
        ..ViewParams::default()
    };
    let asc: Vec<i64> = project(&students, &age_params).iter().map(|s| s.id).collect();
    assert_eq!(asc, vec![7, 2, 9]);

    let desc_params = ViewParams {
        sort_key: SortKey::Age,
        sort_direction: SortDirection::Descending,
        ..age_params
    };
    let desc: Vec<i64> = project(&students, &desc_params)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(desc, vec![7, 2, 9]);
}

#[test]
fn grade_options_ignore_active_filters() {
    let students = roster();
    // grade_options takes the full collection regardless of the view params
    // in effect; the caller never passes a projection.
    let expected = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    assert_eq!(grade_options(&students), expected);

    let filtered = project(
        &students,
        &ViewParams {
            grade_filter: GradeFilter::Grade("A".to_string()),
            ..ViewParams::default()
        },
    );
    assert_eq!(grade_options(&filtered), vec!["A".to_string()]);
    assert_eq!(grade_options(&students), expected);
}

#[test]
fn search_a_keeps_ann_and_excludes_bob() {
    let students = vec![student(1, "Bob", 20, "A"), student(2, "ann", 18, "B")];
    let params = ViewParams {
        search_text: "a".to_string(),
        ..ViewParams::default()
    };
    let out = project(&students, &params);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 2);
    assert_eq!(out[0].name, "ann");
}
