//! Property tests for layout cache keys.

use proptest::prelude::*;

use layout_merge::domain::value_objects::CacheKey;

fn handles() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[a-z_]{1,12}").unwrap(),
        0..8,
    )
}

fn area() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("frontend".to_string()),
        Just("adminhtml".to_string()),
        Just("base".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the key is a pure function of its inputs.
    #[test]
    fn property_key_is_deterministic(
        area in area(),
        store in 0u32..1000,
        theme in 0u32..1000,
        handles in handles()
    ) {
        prop_assert_eq!(
            CacheKey::build(&area, store, theme, &handles),
            CacheKey::build(&area, store, theme, &handles)
        );
    }

    /// PROPERTY: `LAYOUT_{area}_STORE{store}_{theme}` followed by 32 hex chars.
    #[test]
    fn property_key_shape(
        area in area(),
        store in 0u32..1000,
        theme in 0u32..1000,
        handles in handles()
    ) {
        let key = CacheKey::build(&area, store, theme, &handles);
        let prefix = format!("LAYOUT_{area}_STORE{store}_{theme}");

        let digest = key.as_str().strip_prefix(prefix.as_str());
        prop_assert!(digest.is_some());
        let digest = digest.unwrap_or_default();
        prop_assert_eq!(digest.len(), 32);
        prop_assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    /// PROPERTY: a different store never shares a key.
    #[test]
    fn property_store_is_part_of_key(
        store in 0u32..1000,
        other in 0u32..1000,
        handles in handles()
    ) {
        prop_assume!(store != other);
        prop_assert_ne!(
            CacheKey::build("frontend", store, 1, &handles),
            CacheKey::build("frontend", other, 1, &handles)
        );
    }

    /// PROPERTY: swapping two distinct handles changes the key.
    #[test]
    fn property_handle_order_matters(
        a in "[a-z]{1,8}",
        b in "[a-z]{1,8}"
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(
            CacheKey::build("frontend", 1, 1, &[a.as_str(), b.as_str()]),
            CacheKey::build("frontend", 1, 1, &[b.as_str(), a.as_str()])
        );
    }
}
