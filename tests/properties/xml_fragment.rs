//! Property tests for layout fragment parsing.

use proptest::prelude::*;

use layout_merge::xml::parse_fragment;

fn block() -> impl Strategy<Value = String> {
    (
        proptest::string::string_regex("[a-z][a-z.]{0,10}").unwrap(),
        proptest::string::string_regex("[A-Za-z &<>\"']{0,10}").unwrap(),
    )
        .prop_map(|(name, label)| {
            let label = label
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;");
            format!(r#"<block name="{name}" label="{label}"/>"#)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary input never panics the parser.
    #[test]
    fn property_parse_fragment_never_panics(input in ".{0,200}") {
        let _ = parse_fragment(&input);
    }

    /// PROPERTY: every top-level block of a well-formed fragment survives
    /// parsing, in order.
    #[test]
    fn property_blocks_keep_order(blocks in proptest::collection::vec(block(), 0..8)) {
        let fragment = parse_fragment(&blocks.concat()).unwrap();
        prop_assert_eq!(fragment.elements().count(), blocks.len());

        let reparsed = parse_fragment(&fragment.inner_xml()).unwrap();
        prop_assert_eq!(reparsed, fragment);
    }
}
