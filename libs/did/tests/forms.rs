//! Every constructor shape that names the same identifier must agree.

use std::collections::BTreeMap;

use catalog_did::{Did, DidArgs, DidError, DidInput, DidValue};
use rstest::rstest;

fn mapping(scope: &str, name: &str) -> DidValue {
    let mut map = BTreeMap::new();
    map.insert("scope".to_string(), DidValue::from(scope));
    map.insert("name".to_string(), DidValue::from(name));
    DidValue::Mapping(map)
}

#[rstest]
#[case::text(DidArgs::new().arg("a:b"))]
#[case::pair(DidArgs::new().arg(("a", "b")))]
#[case::mapping(DidArgs::new().arg(mapping("a", "b")))]
#[case::keywords(DidArgs::new().kwarg("scope", "a").kwarg("name", "b"))]
#[case::two_positionals(DidArgs::new().arg("a").arg("b"))]
#[case::positional_scope(DidArgs::new().arg("a").kwarg("name", "b"))]
#[case::positional_name(DidArgs::new().arg("b").kwarg("scope", "a"))]
#[case::did_keyword_text(DidArgs::new().kwarg("did", "a:b"))]
#[case::did_keyword_pair(DidArgs::new().kwarg("did", ("a", "b")))]
#[case::did_keyword_mapping(DidArgs::new().kwarg("did", mapping("a", "b")))]
#[case::existing(DidArgs::new().arg(Did::parse("a:b").unwrap()))]
fn equivalent_forms(#[case] args: DidArgs) {
    let did = args.build().unwrap();
    assert_eq!(did.scope(), "a");
    assert_eq!(did.name(), "b");
    assert_eq!(did, "a:b");
}

#[rstest]
#[case::list_scope("user.jdoe.dataset", "user.jdoe")]
#[case::group_scope("group.phys-top.ntuple.v2", "group.phys-top")]
#[case::bare_kind("user", "user")]
fn implicit_scope_from_text(#[case] input: &str, #[case] scope: &str) {
    let did = Did::parse(input).unwrap();
    assert_eq!(did.scope(), scope);
    assert_eq!(did.name(), input);
}

#[rstest]
#[case::plain("plainname")]
#[case::dotted("mc16.dataset.file")]
#[case::empty("")]
fn ambiguous_text_rejected(#[case] input: &str) {
    assert!(matches!(
        Did::parse(input),
        Err(DidError::AmbiguousIdentifier { .. })
    ));
}

#[rstest]
#[case::scope_has_separator(DidInput::from(("a:b", "c")))]
#[case::name_has_separator(DidInput::from(("a", "b:c")))]
#[case::text_second_separator(DidInput::from("a:b:c"))]
#[case::mapping_name(DidInput::Mapping { scope: None, name: Some("x:y".into()) })]
fn separator_inside_half_rejected(#[case] input: DidInput) {
    assert!(Did::from_input(input).unwrap_err().is_format_error());
}

#[rstest]
#[case::one_slash("a:b/", "b")]
#[case::two_slashes("a:b//", "b/")]
#[case::inner_slash("a:dir/file", "dir/file")]
fn trailing_slash_stripped_once(#[case] input: &str, #[case] name: &str) {
    assert_eq!(Did::parse(input).unwrap().name(), name);
}

#[rstest]
#[case::three_positionals(DidArgs::new().arg("a").arg("b").arg("c"), DidError::TooManyArguments { given: 3 })]
#[case::positional_and_two_keywords(
    DidArgs::new().arg("a").kwarg("scope", "b").kwarg("name", "c"),
    DidError::TooManyArguments { given: 3 }
)]
#[case::unexpected_keyword(
    DidArgs::new().arg("a").kwarg("label", "b"),
    DidError::UnexpectedKeyword { keyword: "label".into() }
)]
#[case::positional_not_text(
    DidArgs::new().arg(DidValue::Bool(true)).kwarg("name", "b"),
    DidError::InvalidPositionalType { actual: "bool" }
)]
#[case::unsupported(DidArgs::new().arg(DidValue::Float(1.0)), DidError::UnsupportedInputType { actual: "float".into() })]
#[case::arity(
    DidArgs::new().arg(DidValue::Sequence(vec!["a".into()])),
    DidError::InvalidArity { len: 1 }
)]
fn argument_failures(#[case] args: DidArgs, #[case] expected: DidError) {
    assert_eq!(args.build().unwrap_err(), expected);
}

#[test]
fn empty_arguments_build_empty_identifier() {
    let did = DidArgs::new().build().unwrap();
    assert_eq!(did.to_string(), "");
    assert_eq!(did, Did::default());
}

#[test]
fn comparison_with_unbuildable_value_is_false() {
    let did = Did::parse("a:b").unwrap();
    assert_ne!(did, DidValue::Null);
    assert_ne!(did, DidValue::from("plainname"));
    assert_ne!(did, DidValue::Sequence(vec!["a".into(), "b".into(), "c".into()]));
    assert_eq!(did, mapping("a", "b"));
}

#[test]
fn identifiers_usable_as_set_keys() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    assert!(seen.insert(Did::parse("a:b").unwrap()));
    assert!(!seen.insert(Did::new("a", "b").unwrap()));
    assert!(!seen.insert(Did::parse("a:b/").unwrap()));
    assert!(seen.insert(Did::parse("a:c").unwrap()));
    assert_eq!(seen.len(), 2);
}
