//! Property tests for handle bookkeeping.

use proptest::prelude::*;

use layout_merge::domain::entities::{select_page_handles, HandleSet};

fn handle() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}(_[a-z]{1,6}){0,2}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: handles never repeat and keep first-occurrence order.
    #[test]
    fn property_handles_are_unique_in_first_occurrence_order(
        handles in proptest::collection::vec(handle(), 0..20)
    ) {
        let mut set = HandleSet::new();
        set.extend(handles.iter().cloned());

        let mut expected: Vec<String> = Vec::new();
        for h in &handles {
            if !expected.contains(h) {
                expected.push(h.clone());
            }
        }
        prop_assert_eq!(set.handles(), expected.as_slice());
    }

    /// PROPERTY: removing a handle removes every trace of it.
    #[test]
    fn property_remove_drops_handle(
        handles in proptest::collection::vec(handle(), 1..20),
        index in any::<prop::sample::Index>()
    ) {
        let mut set = HandleSet::new();
        set.extend(handles.iter().cloned());
        let target = index.get(&handles).clone();

        set.remove(&target);
        prop_assert!(!set.contains(&target));
        prop_assert!(!set.page_handles().contains(&target));
    }

    /// PROPERTY: page handles are always a subset of the handles.
    #[test]
    fn property_page_handles_are_handles(
        handles in proptest::collection::vec(handle(), 0..10),
        first in proptest::collection::vec(handle(), 0..5),
        second in proptest::collection::vec(handle(), 0..5)
    ) {
        let mut set = HandleSet::new();
        set.extend(handles);
        set.replace_page_handles(first);
        set.replace_page_handles(second.clone());

        for page in set.page_handles() {
            prop_assert!(set.contains(page));
        }
        for page in &second {
            prop_assert!(set.page_handles().contains(page));
        }
    }

    /// PROPERTY: selection starts at the first registered candidate and
    /// keeps only registered ones, in candidate order.
    #[test]
    fn property_selected_page_handles_are_registered(
        candidates in proptest::collection::vec(handle(), 0..10),
        registered in proptest::collection::vec(handle(), 0..10)
    ) {
        let selected = select_page_handles(&candidates, |h| registered.iter().any(|r| r == h));

        let expected: Vec<String> = candidates
            .iter()
            .filter(|c| registered.contains(c))
            .cloned()
            .collect();
        prop_assert_eq!(selected, expected);
    }
}
