//! Tests for the search spec module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Scope Tests
// ============================================================================

#[test_case("subtree", Scope::Subtree; "subtree long")]
#[test_case("sub", Scope::Subtree; "subtree short")]
#[test_case("onelevel", Scope::OneLevel; "onelevel long")]
#[test_case("one", Scope::OneLevel; "onelevel short")]
#[test_case("  Subtree ", Scope::Subtree; "trims and ignores case")]
fn test_scope_parse_valid(input: &str, expected: Scope) {
    assert_eq!(Scope::parse(input).unwrap(), expected);
}

#[test_case("base"; "base scope unsupported")]
#[test_case("children"; "unknown scope")]
#[test_case(""; "empty scope")]
fn test_scope_parse_invalid(input: &str) {
    let err = Scope::parse(input).unwrap_err();
    assert!(matches!(err, Error::InvalidScope { .. }), "got {err:?}");
}

#[test]
fn test_scope_protocol_codes() {
    assert_eq!(Scope::OneLevel.protocol_code(), 1);
    assert_eq!(Scope::Subtree.protocol_code(), 2);
}

// ============================================================================
// DerefPolicy Tests
// ============================================================================

#[test_case("never", DerefPolicy::Never)]
#[test_case("searching", DerefPolicy::Searching)]
#[test_case("finding_base", DerefPolicy::FindingBase)]
#[test_case("always", DerefPolicy::Always)]
fn test_deref_parse_valid(input: &str, expected: DerefPolicy) {
    assert_eq!(DerefPolicy::parse(input).unwrap(), expected);
}

#[test]
fn test_deref_parse_invalid() {
    let err = DerefPolicy::parse("sometimes").unwrap_err();
    assert!(matches!(err, Error::InvalidDerefPolicy { .. }));
}

#[test]
fn test_deref_protocol_codes() {
    assert_eq!(DerefPolicy::Never.protocol_code(), 0);
    assert_eq!(DerefPolicy::Searching.protocol_code(), 1);
    assert_eq!(DerefPolicy::FindingBase.protocol_code(), 2);
    assert_eq!(DerefPolicy::Always.protocol_code(), 3);
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    let spec = SearchSpec::builder("dc=example,dc=com", "(objectClass=*)")
        .build()
        .unwrap();

    assert_eq!(spec.base(), "dc=example,dc=com");
    assert_eq!(spec.filter(), "(objectClass=*)");
    assert!(spec.attributes().is_empty());
    assert_eq!(spec.scope(), Scope::Subtree);
    assert!(!spec.attrs_only());
    assert_eq!(spec.page_size(), 1000);
    assert_eq!(spec.time_limit_secs(), 0);
    assert_eq!(spec.deref(), DerefPolicy::Never);
}

#[test]
fn test_builder_all_fields() {
    let spec = SearchSpec::builder("ou=people,dc=example,dc=com", "(cn=ada*)")
        .scope("onelevel")
        .attributes(["cn", "mail"])
        .attrs_only(true)
        .page_size(250)
        .time_limit_secs(30)
        .deref("always")
        .build()
        .unwrap();

    assert_eq!(spec.scope(), Scope::OneLevel);
    assert_eq!(spec.attributes(), ["cn", "mail"]);
    assert!(spec.attrs_only());
    assert_eq!(spec.page_size(), 250);
    assert_eq!(spec.time_limit_secs(), 30);
    assert_eq!(spec.deref(), DerefPolicy::Always);
}

#[test]
fn test_builder_rejects_invalid_scope() {
    let err = SearchSpec::builder("dc=example,dc=com", "(objectClass=*)")
        .scope("base")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidScope { .. }));
}

#[test]
fn test_builder_rejects_empty_filter() {
    let err = SearchSpec::builder("dc=example,dc=com", "")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::EmptyFilter));
}

#[test_case(-1, 1000; "negative normalizes to default")]
#[test_case(-5000, 1000; "large negative normalizes to default")]
#[test_case(0, 0; "zero passes through")]
#[test_case(1, 1)]
#[test_case(2000, 2000; "above default passes through")]
fn test_builder_page_size_normalization(input: i64, expected: u32) {
    let spec = SearchSpec::builder("dc=example,dc=com", "(objectClass=*)")
        .page_size(input)
        .build()
        .unwrap();
    assert_eq!(spec.page_size(), expected);
}

// ============================================================================
// YAML Definition Tests
// ============================================================================

#[test]
fn test_from_yaml_minimal() {
    let yaml = r#"
base: "dc=example,dc=com"
filter: "(objectClass=person)"
"#;

    let spec = SearchSpec::from_yaml(yaml).unwrap();
    assert_eq!(spec.base(), "dc=example,dc=com");
    assert_eq!(spec.scope(), Scope::Subtree);
    assert_eq!(spec.page_size(), 1000);
}

#[test]
fn test_from_yaml_full() {
    let yaml = r#"
base: "ou=groups,dc=example,dc=com"
filter: "(member=*)"
attributes: [cn, member]
scope: onelevel
attrs_only: true
page_size: -1
time_limit_secs: 60
deref: searching
"#;

    let spec = SearchSpec::from_yaml(yaml).unwrap();
    assert_eq!(spec.scope(), Scope::OneLevel);
    assert_eq!(spec.attributes(), ["cn", "member"]);
    assert!(spec.attrs_only());
    assert_eq!(spec.page_size(), 1000); // negative normalized
    assert_eq!(spec.time_limit_secs(), 60);
    assert_eq!(spec.deref(), DerefPolicy::Searching);
}

#[test]
fn test_from_yaml_invalid_scope() {
    let yaml = r#"
base: "dc=example,dc=com"
filter: "(objectClass=*)"
scope: base
"#;

    let err = SearchSpec::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidScope { .. }));
}

#[test]
fn test_from_yaml_malformed() {
    let err = SearchSpec::from_yaml("base: [unclosed").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}
