//! Property tests for the round-trip and inverse laws of resource names.

use hrn_name::{parse, pop, push, validate, validate_pattern, Part, WILDCARD};
use hrn_testing::strategies;
use hrn_testing::{must_generate, must_parse};
use proptest::prelude::*;

fn wildcard_pattern(namespace: &str, parts: &[Part]) -> String {
    let wildcards: Vec<String> = parts
        .iter()
        .map(|p| format!("{}/{}", p.type_, WILDCARD))
        .collect();
    format!("{}/{}", namespace, wildcards.join("/"))
}

proptest! {
    #[test]
    fn parse_inverts_generate(ns in strategies::namespace(), parts in strategies::parts(6)) {
        let name = must_generate(&ns, &parts);
        let (parsed_ns, parsed_parts) = parse(&name).unwrap();
        prop_assert_eq!(parsed_ns, ns);
        prop_assert_eq!(parsed_parts, parts);
    }

    #[test]
    fn generate_inverts_parse(ns in strategies::namespace(), parts in strategies::parts(6)) {
        let name = must_generate(&ns, &parts);
        let (parsed_ns, parsed_parts) = must_parse(&name);
        prop_assert_eq!(must_generate(&parsed_ns, &parsed_parts), name);
    }

    #[test]
    fn validate_implies_parse(s in "[a-zA-Z0-9/*_.-]{0,40}") {
        // Root forms are the one shape `validate` accepts that `parse` does not.
        if validate(&s).is_ok() && s.matches('/').count() != 1 {
            prop_assert!(parse(&s).is_ok());
        }
    }

    #[test]
    fn pop_inverts_push(
        ns in strategies::namespace(),
        parts in strategies::parts(4),
        part in strategies::part(),
    ) {
        let name = must_generate(&ns, &parts);
        let pushed = push(&name, part).unwrap();
        let popped = pop(&pushed, 1).unwrap();
        if parts.len() == 1 && hrn_name::is_root_type(&parts[0].type_) {
            prop_assert_eq!(popped, parts[0].to_string());
        } else {
            prop_assert_eq!(popped, name);
        }
    }

    #[test]
    fn wildcard_pattern_accepts_any_names(
        ns in strategies::namespace(),
        parts in strategies::parts(5),
    ) {
        let name = must_generate(&ns, &parts);
        let pattern = wildcard_pattern(&ns, &parts);
        prop_assert!(validate_pattern(&name, &pattern).is_ok());
    }
}
