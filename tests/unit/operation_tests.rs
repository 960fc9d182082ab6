/*!
 * Tests for operation names and the no-op shortcut
 */

use decemvirate::query::is_noop;
use decemvirate::{Operation, QueryError, ResultKind};

#[test]
fn test_operationNames_shouldMatchCommandNames() {
    let names: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
    assert_eq!(
        names,
        vec![
            "finddefeat",
            "findenfeat",
            "finddespell",
            "findenspell",
            "findspellbyclass",
            "finddepub",
            "findenpub",
        ]
    );
}

#[test]
fn test_parse_withUnknownName_shouldFailWithInvalidOperation() {
    for name in ["findfeat", "finddefeats", " finddefeat", "DROP TABLE"] {
        match name.parse::<Operation>() {
            Err(QueryError::InvalidOperation(got)) => assert_eq!(got, name),
            other => panic!("Expected InvalidOperation for {:?}, got {:?}", name, other),
        }
    }
}

#[test]
fn test_resultKind_forPublications_shouldBeDepubAndEnpub() {
    assert_eq!(Operation::FindGermanPublication.result_kind(), ResultKind::GermanPublication);
    assert_eq!(Operation::FindEnglishPublication.result_kind(), ResultKind::EnglishPublication);
    assert_eq!(Operation::FindEnglishFeat.result_kind(), ResultKind::Feat);
}

#[test]
fn test_isNoop_shouldOnlyHoldForEmptyParts() {
    assert!(is_noop("", "Feuerball"));
    assert!(is_noop("finddespell", ""));
    assert!(!is_noop("finddespell", " "));
}
