//! Generic list operations shared by every page: identifier generation,
//! create/update/delete, search filtering and column sorting.
//!
//! All operations are pure functions over `Vec<T>`; the pages own the
//! signals and feed the results back in.

use std::cmp::Ordering;

/// Record with a comparable identifier. `Id` is `i64` for the numeric
/// pages and `String` for the prefixed-sequence pages.
pub trait HasId {
    type Id: PartialEq + Clone;

    fn id(&self) -> Self::Id;
}

/// Types supporting case-insensitive substring search.
pub trait Searchable {
    /// Whether the record matches the search term. Implementations match
    /// against the page's visible text fields.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types supporting column sorting.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Next numeric identifier: `max(existing) + 1`, starting at 1.
pub fn next_numeric_id<T: HasId<Id = i64>>(items: &[T]) -> i64 {
    items.iter().map(|item| item.id()).max().unwrap_or(0) + 1
}

/// Next identifier in a zero-padded prefixed sequence, e.g. `PRD-004`
/// after `PRD-001..PRD-003`. Records with a foreign prefix are ignored.
pub fn next_prefixed_id<T: HasId<Id = String>>(prefix: &str, items: &[T]) -> String {
    let max = items
        .iter()
        .filter_map(|item| {
            let id = item.id();
            id.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('-'))
                .and_then(|digits| digits.parse::<u32>().ok())
        })
        .max()
        .unwrap_or(0);
    format!("{}-{:03}", prefix, max + 1)
}

/// Append a record to the list.
pub fn create<T>(mut items: Vec<T>, record: T) -> Vec<T> {
    items.push(record);
    items
}

/// Replace the record with a matching identifier, preserving its position.
/// Records without a match are left untouched.
pub fn update<T: HasId>(mut items: Vec<T>, record: T) -> Vec<T> {
    let id = record.id();
    if let Some(slot) = items.iter_mut().find(|item| item.id() == id) {
        *slot = record;
    }
    items
}

/// Remove the record with the given identifier.
pub fn delete<T: HasId>(mut items: Vec<T>, id: &T::Id) -> Vec<T> {
    items.retain(|item| item.id() != *id);
    items
}

/// Filter by case-insensitive substring match. An empty or whitespace
/// term returns the list unchanged.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Case-insensitive substring test, the building block pages use inside
/// `Searchable::matches_filter`.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Optional exact-match dropdown filter: `None` (or "all") passes
/// everything.
pub fn matches_dropdown(value: &str, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(choice) => value == choice,
    }
}

/// Stable sort by a named field; ties keep their original order.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator glyph for a column header.
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " \u{25B2}"
        } else {
            " \u{25BC}"
        }
    } else {
        " \u{21C5}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    impl HasId for Row {
        type Id = i64;
        fn id(&self) -> i64 {
            self.id
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(&self.name, filter)
        }
    }

    fn row(id: i64, name: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Coded {
        id: String,
    }

    impl HasId for Coded {
        type Id = String;
        fn id(&self) -> String {
            self.id.clone()
        }
    }

    #[test]
    fn numeric_id_is_max_plus_one() {
        let items = vec![row(1, "a"), row(7, "b"), row(3, "c")];
        assert_eq!(next_numeric_id(&items), 8);
        assert_eq!(next_numeric_id::<Row>(&[]), 1);
    }

    #[test]
    fn prefixed_id_is_zero_padded_and_prefix_scoped() {
        let items = vec![
            Coded { id: "PRD-001".into() },
            Coded { id: "PRD-009".into() },
            Coded { id: "OVH-020".into() },
        ];
        assert_eq!(next_prefixed_id("PRD", &items), "PRD-010");
        assert_eq!(next_prefixed_id("KAL", &items), "KAL-001");
    }

    #[test]
    fn create_then_delete_restores_original() {
        let original = vec![row(1, "Rel"), row(2, "Baut"), row(3, "Panel")];
        let id = next_numeric_id(&original);
        let grown = create(original.clone(), row(id, "Kabel"));
        assert_eq!(grown.len(), 4);
        let restored = delete(grown, &id);
        assert_eq!(restored, original);
    }

    #[test]
    fn update_preserves_length_position_and_other_records() {
        let items = vec![row(1, "Rel"), row(2, "Baut"), row(3, "Panel")];
        let updated = update(items.clone(), row(2, "Baut Khusus"));
        assert_eq!(updated.len(), 3);
        assert_eq!(updated[0], items[0]);
        assert_eq!(updated[1], row(2, "Baut Khusus"));
        assert_eq!(updated[2], items[2]);
    }

    #[test]
    fn empty_filter_returns_full_list() {
        let items = vec![row(1, "Rel"), row(2, "Baut")];
        assert_eq!(filter_list(&items, ""), items);
        assert_eq!(filter_list(&items, "   "), items);
        assert_eq!(filter_list(&items, "rel"), vec![row(1, "Rel")]);
    }

    #[test]
    fn dropdown_all_passes_everything() {
        assert!(matches_dropdown("Tersedia", None));
        assert!(matches_dropdown("Tersedia", Some("Tersedia")));
        assert!(!matches_dropdown("Limit", Some("Tersedia")));
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Qc {
        id: i64,
        tested: u32,
    }

    impl Sortable for Qc {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "tested" => self.tested.cmp(&other.tested),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn sort_is_stable_and_reversible() {
        let mut items = vec![
            Qc { id: 1, tested: 30 },
            Qc { id: 2, tested: 10 },
            Qc { id: 3, tested: 30 },
            Qc { id: 4, tested: 20 },
        ];
        sort_list(&mut items, "tested", true);
        let asc_ids: Vec<i64> = items.iter().map(|q| q.id).collect();
        // ids 1 and 3 tie on tested=30 and keep original order
        assert_eq!(asc_ids, vec![2, 4, 1, 3]);

        sort_list(&mut items, "tested", false);
        let desc: Vec<u32> = items.iter().map(|q| q.tested).collect();
        assert_eq!(desc, vec![30, 30, 20, 10]);
    }
}
