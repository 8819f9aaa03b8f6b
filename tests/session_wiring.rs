use lampskills::core::*;
use pretty_assertions::assert_eq;

type CharSession = LampChoiceSession<char, SelectionList<char>, MemoryStore<char>, Vec<String>>;

fn open(seed: &[char]) -> CharSession {
    let domain = CandidateDomain::new(['A', 'B', 'C', 'D']).unwrap();
    LampChoiceSession::open(
        SelectionList::new(domain),
        MemoryStore::new(seed.iter().copied()),
        Vec::new(),
    )
}

fn order(set: &ChosenSet<char>) -> Vec<char> {
    set.iter().copied().collect()
}

#[test]
fn opening_seeds_surface_and_shows_initial_summary() {
    let session = open(&['B', 'D']);

    assert_eq!(order(session.chosen()), vec!['B', 'D']);
    assert_eq!(session.surface().current_selection(), vec!['B', 'D']);
    assert_eq!(session.sink(), &vec!["1. B\n2. D".to_string()]);
    assert_eq!(session.summary(), "1. B\n2. D");
    assert_eq!(session.store().writes(), 0);
}

#[test]
fn seeding_is_not_echoed_as_a_change() {
    let mut session = open(&['A', 'C']);

    assert_eq!(session.pump(), 0);
    assert_eq!(session.store().writes(), 0);
}

#[test]
fn combined_batch_is_published_once() {
    let mut session = open(&['B', 'D']);
    session.surface_mut().select(&'A');
    session.surface_mut().deselect(&'D');

    let batch = ChangeBatch::new(vec![
        ChangeEvent::Added(vec!['A']),
        ChangeEvent::Removed(vec!['D']),
    ]);
    let outcome = session.handle(&batch);

    assert!(!outcome.resynced());
    assert_eq!(order(session.chosen()), vec!['B', 'A']);
    assert_eq!(order(session.store().items()), vec!['B', 'A']);
    assert_eq!(session.store().writes(), 1);
    assert_eq!(session.summary(), "1. B\n2. A");
}

#[test]
fn user_toggles_flow_through_to_store_and_sink() {
    let mut session = open(&['B']);

    session.surface_mut().toggle(3);
    session.surface_mut().toggle(1);
    session.surface_mut().toggle(0);
    assert_eq!(session.pump(), 3);

    assert_eq!(order(session.chosen()), vec!['D', 'A']);
    assert_eq!(order(session.store().items()), vec!['D', 'A']);
    assert_eq!(session.store().writes(), 3);
    assert_eq!(
        session.sink(),
        &vec![
            "1. B".to_string(),
            "1. B\n2. D".to_string(),
            "1. D".to_string(),
            "1. D\n2. A".to_string(),
        ]
    );
}

#[test]
fn queued_batches_are_applied_in_delivery_order() {
    let mut session = open(&[]);

    // All three toggles queue before anything is pumped.
    session.surface_mut().toggle(2);
    session.surface_mut().toggle(2);
    session.surface_mut().toggle(1);
    assert_eq!(session.pump(), 3);

    assert_eq!(order(session.chosen()), vec!['B']);
    assert_eq!(session.summary(), "1. B");
}

#[test]
fn out_of_range_toggle_publishes_nothing() {
    let mut session = open(&['A']);

    assert!(!session.surface_mut().toggle(4));
    assert!(!session.surface_mut().toggle(usize::MAX));
    assert_eq!(session.pump(), 0);

    assert_eq!(order(session.chosen()), vec!['A']);
    assert_eq!(session.store().writes(), 0);
    assert_eq!(session.sink(), &vec!["1. A".to_string()]);
}

#[test]
fn clearing_everything_shows_empty_summary() {
    let mut session = open(&['A', 'B']);
    session.surface_mut().clear();
    session.pump();

    assert!(session.chosen().is_empty());
    assert_eq!(session.summary(), "");
    assert_eq!(session.sink().last().map(String::as_str), Some(""));
}

#[test]
fn closing_keeps_the_last_published_value() {
    let mut session = open(&['C']);
    session.surface_mut().select_all();
    session.pump();

    let store = session.close();
    assert_eq!(order(&store.chosen()), vec!['C', 'A', 'B', 'D']);

    let reopened = LampChoiceSession::open(
        SelectionList::new(CandidateDomain::new(['A', 'B', 'C', 'D']).unwrap()),
        store,
        String::new(),
    );
    assert_eq!(reopened.sink(), "1. C\n2. A\n3. B\n4. D");
}
