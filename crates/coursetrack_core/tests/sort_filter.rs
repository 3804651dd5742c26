use coursetrack_core::{AssignmentStore, SortKey};

fn store_with(records: &[(&str, &str, &str)]) -> AssignmentStore {
    let mut store = AssignmentStore::new();
    for &(course, title, due_date) in records {
        store
            .add(course, title, due_date)
            .expect("fixture records should be valid");
    }
    store
}

fn active_titles(store: &AssignmentStore) -> Vec<&str> {
    store
        .active()
        .iter()
        .map(|record| record.title.as_str())
        .collect()
}

#[test]
fn due_date_sort_is_calendar_order_not_text_order() {
    let mut store = store_with(&[
        ("Mathematics", "a", "05-01-2024"),
        ("Mathematics", "b", "01-12-2023"),
        ("Mathematics", "c", "20-01-2024"),
    ]);

    store.sort_active(SortKey::DueDate);

    let dates: Vec<String> = store
        .active()
        .iter()
        .map(|record| record.due_date.to_string())
        .collect();
    assert_eq!(dates, vec!["01-12-2023", "05-01-2024", "20-01-2024"]);
}

#[test]
fn course_sort_is_lexicographic_and_stable_on_ties() {
    let mut store = store_with(&[
        ("History", "first history", "05-01-2024"),
        ("Art", "art", "01-12-2023"),
        ("History", "second history", "20-01-2024"),
    ]);

    store.sort_active(SortKey::Course);

    assert_eq!(
        active_titles(&store),
        vec!["art", "first history", "second history"]
    );
}

#[test]
fn title_sort_compares_the_raw_string() {
    let mut store = store_with(&[
        ("Art", "b sketch", "05-01-2024"),
        ("Art", "A portfolio", "01-12-2023"),
        ("Art", "a collage", "20-01-2024"),
    ]);

    store.sort_active(SortKey::Title);

    // Raw byte order: uppercase sorts before lowercase.
    assert_eq!(
        active_titles(&store),
        vec!["A portfolio", "a collage", "b sketch"]
    );
}

#[test]
fn due_date_ties_retain_insertion_order() {
    let mut store = store_with(&[
        ("History", "first", "05-01-2024"),
        ("Art", "second", "05-01-2024"),
        ("Biology", "third", "05-01-2024"),
    ]);

    store.sort_active(SortKey::DueDate);

    assert_eq!(active_titles(&store), vec!["first", "second", "third"]);
}

#[test]
fn filter_matches_course_or_title_case_insensitively() {
    let store = store_with(&[
        ("Mathematics", "integrals", "05-01-2024"),
        ("History", "math review", "01-12-2023"),
        ("Art", "collage", "20-01-2024"),
    ]);

    let hits = store.filter("math");
    let titles: Vec<&str> = hits.iter().map(|record| record.title.as_str()).collect();
    assert_eq!(titles, vec!["integrals", "math review"]);

    let shouted = store.filter("MATH");
    assert_eq!(hits, shouted);
}

#[test]
fn filter_preserves_active_order_and_ignores_completed() {
    let mut store = store_with(&[
        ("Mathematics", "late", "20-01-2024"),
        ("Mathematics", "early", "01-12-2023"),
    ]);
    let done = store.add("Mathematics", "done", "05-01-2024").unwrap();
    store.complete(done).unwrap();

    let titles: Vec<String> = store
        .filter("mathematics")
        .into_iter()
        .map(|record| record.title)
        .collect();
    assert_eq!(titles, vec!["late", "early"]);
}

#[test]
fn blank_filter_returns_the_full_active_list() {
    let store = store_with(&[
        ("Mathematics", "integrals", "05-01-2024"),
        ("Art", "collage", "20-01-2024"),
    ]);

    assert_eq!(store.filter("").len(), 2);
    assert_eq!(store.filter("   ").len(), 2);
}

#[test]
fn filter_with_no_hits_is_empty() {
    let store = store_with(&[("Art", "collage", "20-01-2024")]);
    assert!(store.filter("chemistry").is_empty());
}
