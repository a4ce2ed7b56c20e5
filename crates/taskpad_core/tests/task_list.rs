use taskpad_core::{normalize_label, AddOutcome, TaskList, MAX_LABEL_CHARS};

#[test]
fn add_appends_in_insertion_order() {
    let mut list = TaskList::new();

    assert_eq!(list.add("Buy milk"), AddOutcome::Added);
    assert_eq!(list.add("Call Sam"), AddOutcome::Added);
    assert_eq!(list.add("Water plants"), AddOutcome::Added);

    assert_eq!(list.labels(), ["Buy milk", "Call Sam", "Water plants"]);
}

#[test]
fn add_trims_surrounding_whitespace() {
    let mut list = TaskList::new();

    assert_eq!(list.add("  Buy milk  "), AddOutcome::Added);
    assert_eq!(list.labels(), ["Buy milk"]);
}

#[test]
fn empty_and_whitespace_input_are_no_ops() {
    let mut list = TaskList::new();
    list.add("Buy milk");

    assert_eq!(list.add(""), AddOutcome::EmptyLabel);
    assert_eq!(list.add("   "), AddOutcome::EmptyLabel);
    assert_eq!(list.add("\t\n"), AddOutcome::EmptyLabel);
    assert_eq!(list.len(), 1);
}

#[test]
fn duplicate_add_leaves_exactly_one_occurrence() {
    let mut list = TaskList::new();

    assert_eq!(list.add("Buy milk"), AddOutcome::Added);
    assert_eq!(list.add("Buy milk"), AddOutcome::Duplicate);

    let occurrences = list
        .labels()
        .iter()
        .filter(|label| *label == "Buy milk")
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn duplicate_check_is_case_sensitive() {
    let mut list = TaskList::new();

    assert_eq!(list.add("Buy milk"), AddOutcome::Added);
    assert_eq!(list.add("buy milk"), AddOutcome::Added);
    assert_eq!(list.len(), 2);
}

#[test]
fn no_add_sequence_produces_duplicates() {
    let inputs = [
        "A", "B", "A", " B ", "C", "", "  ", "C", "A", "D", "B", "D  ",
    ];
    let mut list = TaskList::new();
    for input in inputs {
        list.add(input);
    }

    assert_eq!(list.labels(), ["A", "B", "C", "D"]);
}

#[test]
fn overlong_label_is_truncated_before_insertion() {
    let long = "x".repeat(MAX_LABEL_CHARS + 1);
    let mut list = TaskList::new();

    assert_eq!(list.add(&long), AddOutcome::Added);
    assert_eq!(list.labels()[0].chars().count(), MAX_LABEL_CHARS);

    // The truncated form is what counts as a duplicate.
    let exact = "x".repeat(MAX_LABEL_CHARS);
    assert_eq!(list.add(&exact), AddOutcome::Duplicate);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let long = "ä".repeat(MAX_LABEL_CHARS + 5);
    let mut list = TaskList::new();

    list.add(&long);
    assert_eq!(list.labels()[0].chars().count(), MAX_LABEL_CHARS);
}

#[test]
fn remove_drops_only_the_named_label() {
    let mut list = TaskList::new();
    list.add("A");
    list.add("B");

    assert!(list.remove("A"));
    assert_eq!(list.labels(), ["B"]);

    assert!(!list.remove("A"));
    assert_eq!(list.labels(), ["B"]);
}

#[test]
fn from_labels_reapplies_invariants() {
    let list = TaskList::from_labels(["A", "", "B", "A", "  B  ", "C"]);
    assert_eq!(list.labels(), ["A", "B", "C"]);
}

#[test]
fn normalize_label_trims_and_caps() {
    assert_eq!(normalize_label("  hi  "), Some("hi".to_string()));
    assert_eq!(normalize_label("   "), None);

    let capped = normalize_label(&"y".repeat(80)).expect("non-empty input should normalize");
    assert_eq!(capped.chars().count(), MAX_LABEL_CHARS);
}
