//! Property tests for resource ID parsing.

use azrm_id::{parse, MalformedCause, ResourceId};
use proptest::prelude::*;

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._()-]{1,24}"
}

fn namespace() -> impl Strategy<Value = String> {
    "Microsoft\\.[A-Z][A-Za-z]{2,12}"
}

/// Path pairs with distinct types that never collide with a marker segment.
fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-z][A-Za-z]{2,15}", value(), 0..5).prop_map(|map| {
        map.into_iter()
            .filter(|(key, _)| key != "providers")
            .collect()
    })
}

fn render(sub: &str, rg: &str, provider: Option<&str>, pairs: &[(String, String)]) -> String {
    let mut id = format!("/subscriptions/{sub}/resourceGroups/{rg}");
    if let Some(ns) = provider {
        id.push_str("/providers/");
        id.push_str(ns);
    }
    for (key, name) in pairs {
        id.push('/');
        id.push_str(key);
        id.push('/');
        id.push_str(name);
    }
    id
}

proptest! {
    #[test]
    fn resource_group_ids_have_no_provider_or_path(sub in value(), rg in value()) {
        let id = parse(&render(&sub, &rg, None, &[])).unwrap();
        prop_assert_eq!(id.subscription_id(), sub.as_str());
        prop_assert_eq!(id.resource_group(), rg.as_str());
        prop_assert_eq!(id.provider(), "");
        prop_assert!(id.path().is_empty());
    }

    #[test]
    fn provider_namespace_is_captured(sub in value(), rg in value(), ns in namespace()) {
        let id = parse(&render(&sub, &rg, Some(&ns), &[])).unwrap();
        prop_assert_eq!(id.provider(), ns.as_str());
    }

    #[test]
    fn path_holds_exactly_the_pairs_in_order(
        sub in value(),
        rg in value(),
        ns in namespace(),
        pairs in pairs(),
    ) {
        let id = parse(&render(&sub, &rg, Some(&ns), &pairs)).unwrap();
        let parsed: Vec<(String, String)> = id
            .path()
            .iter()
            .map(|(key, name)| (key.to_string(), name.to_string()))
            .collect();
        prop_assert_eq!(parsed, pairs);
    }

    #[test]
    fn query_string_never_changes_result(
        sub in value(),
        rg in value(),
        ns in namespace(),
        pairs in pairs(),
        query in "[ -~]{0,32}",
    ) {
        let raw = render(&sub, &rg, Some(&ns), &pairs);
        let plain = parse(&raw).unwrap();
        let queried = parse(&format!("{raw}?{query}")).unwrap();
        prop_assert_eq!(plain, queried);
    }

    #[test]
    fn missing_leading_slash_always_fails(
        sub in value(),
        rg in value(),
        ns in namespace(),
        pairs in pairs(),
    ) {
        let raw = render(&sub, &rg, Some(&ns), &pairs);
        let err = parse(&raw[1..]).unwrap_err();
        prop_assert_eq!(err.cause(), &MalformedCause::NotAbsolute);
    }

    #[test]
    fn odd_trailing_segment_always_fails(
        sub in value(),
        rg in value(),
        ns in namespace(),
        pairs in pairs(),
        dangling in "[a-z][A-Za-z]{2,15}",
    ) {
        let raw = format!("{}/{dangling}", render(&sub, &rg, Some(&ns), &pairs));
        let err = parse(&raw).unwrap_err();
        let is_missing_value = matches!(err.cause(), MalformedCause::MissingValue { .. });
        prop_assert!(is_missing_value);
    }

    #[test]
    fn display_reparses_to_equal_record(
        sub in value(),
        rg in value(),
        ns in prop::option::of(namespace()),
        pairs in pairs(),
    ) {
        let id = parse(&render(&sub, &rg, ns.as_deref(), &pairs)).unwrap();
        let reparsed: ResourceId = id.to_string().parse().unwrap();
        prop_assert_eq!(id, reparsed);
    }

    #[test]
    fn parse_never_panics(input in "\\PC{0,64}") {
        let _ = parse(&input);
    }
}
