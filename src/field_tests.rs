//! Tests for field kinds and the per-field map

use super::*;
use proptest::prelude::*;

#[test]
fn test_endpoint_segments_are_plural() {
    assert_eq!(FieldKind::Title.endpoint_segment(), "titles");
    assert_eq!(FieldKind::Author.endpoint_segment(), "authors");
    assert_eq!(FieldKind::Publisher.endpoint_segment(), "publishers");
}

#[test]
fn test_display_is_lowercase_name() {
    assert_eq!(FieldKind::Title.to_string(), "title");
    assert_eq!(FieldKind::Publisher.to_string(), "publisher");
}

#[test]
fn test_next_cycles_through_all_fields() {
    assert_eq!(FieldKind::Title.next(), FieldKind::Author);
    assert_eq!(FieldKind::Author.next(), FieldKind::Publisher);
    assert_eq!(FieldKind::Publisher.next(), FieldKind::Title);
}

#[test]
fn test_field_map_slots_are_independent() {
    let mut map: FieldMap<u32> = FieldMap::default();
    map[FieldKind::Author] = 7;

    assert_eq!(map[FieldKind::Title], 0);
    assert_eq!(map[FieldKind::Author], 7);
    assert_eq!(map[FieldKind::Publisher], 0);
}

#[test]
fn test_field_map_from_fn_and_iter_order() {
    let map = FieldMap::from_fn(|kind| kind.label().to_string());
    let collected: Vec<_> = map.iter().map(|(k, v)| (k, v.clone())).collect();

    assert_eq!(
        collected,
        vec![
            (FieldKind::Title, "Title".to_string()),
            (FieldKind::Author, "Author".to_string()),
            (FieldKind::Publisher, "Publisher".to_string()),
        ]
    );
}

proptest! {
    #[test]
    fn prop_prev_undoes_next(kind in prop::sample::select(FieldKind::ALL.to_vec())) {
        prop_assert_eq!(kind.next().prev(), kind);
        prop_assert_eq!(kind.prev().next(), kind);
    }
}
