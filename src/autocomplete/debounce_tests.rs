//! Tests for the debounce gate

use super::*;
use proptest::prelude::*;

const QUIET: Duration = Duration::from_millis(500);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_nothing_fires_before_quiet_interval() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(QUIET);

    gate.submit(FieldKind::Title, "Du", 5, start);

    assert!(gate.take_due(start + ms(499)).is_empty());
    assert!(gate.is_pending(FieldKind::Title));
}

#[test]
fn test_burst_collapses_to_last_call() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(QUIET);

    gate.submit(FieldKind::Title, "a", 5, start);
    gate.submit(FieldKind::Title, "ab", 5, start + ms(100));
    gate.submit(FieldKind::Title, "abc", 5, start + ms(200));

    // 500ms after the first call is still inside the last call's window
    assert!(gate.take_due(start + ms(500)).is_empty());

    let fired = gate.take_due(start + ms(700));
    assert_eq!(
        fired,
        vec![PendingLookup {
            kind: FieldKind::Title,
            query: "abc".to_string(),
            limit: 5,
        }]
    );
    assert!(gate.take_due(start + ms(5000)).is_empty());
}

#[test]
fn test_spaced_calls_each_fire() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(QUIET);
    let mut fired = Vec::new();

    for (i, query) in ["a", "ab", "abc"].iter().enumerate() {
        let at = start + ms(600 * i as u64);
        fired.extend(gate.take_due(at));
        gate.submit(FieldKind::Author, query, 5, at);
    }
    fired.extend(gate.take_due(start + ms(5000)));

    let queries: Vec<_> = fired.iter().map(|l| l.query.as_str()).collect();
    assert_eq!(queries, vec!["a", "ab", "abc"]);
}

#[test]
fn test_fields_do_not_cancel_each_other() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(QUIET);

    gate.submit(FieldKind::Title, "Dune", 5, start);
    gate.submit(FieldKind::Author, "Her", 5, start + ms(50));
    gate.submit(FieldKind::Publisher, "Ace", 5, start + ms(100));

    let fired = gate.take_due(start + ms(600));
    let kinds: Vec<_> = fired.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![FieldKind::Title, FieldKind::Author, FieldKind::Publisher]
    );
}

#[test]
fn test_cancel_drops_pending_lookup() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(QUIET);

    gate.submit(FieldKind::Title, "Dune", 5, start);
    assert!(gate.cancel(FieldKind::Title));
    assert!(!gate.cancel(FieldKind::Title));
    assert!(gate.take_due(start + ms(1000)).is_empty());
}

#[test]
fn test_next_deadline_is_earliest_pending() {
    let start = Instant::now();
    let mut gate = DebounceGate::new(QUIET);
    assert_eq!(gate.next_deadline(), None);

    gate.submit(FieldKind::Publisher, "A", 5, start + ms(100));
    gate.submit(FieldKind::Title, "D", 5, start);

    assert_eq!(gate.next_deadline(), Some(start + QUIET));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any burst whose gaps stay under the quiet interval fires exactly once,
    // with the last query of the burst
    #[test]
    fn prop_burst_fires_once_with_last_query(
        queries in prop::collection::vec("[a-z]{1,8}", 1..10),
        gaps in prop::collection::vec(0u64..500, 10),
    ) {
        let start = Instant::now();
        let mut gate = DebounceGate::new(QUIET);
        let mut at = start;
        let mut fired = Vec::new();

        for (query, gap) in queries.iter().zip(gaps.iter()) {
            at += ms(*gap);
            fired.extend(gate.take_due(at));
            gate.submit(FieldKind::Title, query, 5, at);
        }
        fired.extend(gate.take_due(at + QUIET));

        prop_assert_eq!(fired.len(), 1);
        prop_assert_eq!(&fired[0].query, queries.last().unwrap());
    }
}
