//! Property tests for path template variable substitution.

use std::path::PathBuf;

use proptest::prelude::*;

use bundle_overlay::BuildContext;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_.-]{1,8}").unwrap()
}

fn var() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("{{ROOT}}"),
        Just("{{SRC}}"),
        Just("{{WWW}}"),
        Just("{{TMP}}"),
        Just("{{BUILD}}"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: known variables never survive substitution.
    #[test]
    fn property_known_vars_are_fully_replaced(
        parts in proptest::collection::vec((var(), segment()), 1..5),
    ) {
        let context = BuildContext::new("/project");
        let template: String = parts
            .iter()
            .map(|(v, s)| format!("{v}/{s}/"))
            .collect();

        let resolved = context.replace_path_vars(&template).unwrap();

        prop_assert!(!resolved.contains("{{"));
        prop_assert!(resolved.starts_with("/project"));
    }

    /// PROPERTY: templates without variables are returned unchanged.
    #[test]
    fn property_plain_templates_are_untouched(parts in proptest::collection::vec(segment(), 0..5)) {
        let context = BuildContext::new("/project");
        let template = parts.join("/");

        prop_assert_eq!(context.replace_path_vars(&template).unwrap(), template);
    }

    /// PROPERTY: an unknown variable is always rejected.
    #[test]
    fn property_unknown_vars_are_rejected(name in "[A-Z]{1,6}", tail in segment()) {
        prop_assume!(!["ROOT", "SRC", "WWW", "TMP", "BUILD"].contains(&name.as_str()));
        let context = BuildContext::new(PathBuf::from("/project"));

        let template = format!("{{{{{name}}}}}/{tail}");
        prop_assert!(context.replace_path_vars(&template).is_err());
    }
}
