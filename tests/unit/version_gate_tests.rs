/*!
 * Tests for the schema version gate
 */

use decemvirate::{DatabaseConnection, DatabaseError, SchemaVersion};

use crate::common::{PathfinderFixture, REQUIRED};

#[test]
fn test_isCompatible_withKnownPairs_shouldMatchRules() {
    assert!(SchemaVersion::new(1, 2, 0).is_compatible(&SchemaVersion::required(1, 0)));
    assert!(!SchemaVersion::new(2, 0, 0).is_compatible(&SchemaVersion::required(1, 5)));
    assert!(!SchemaVersion::new(1, 0, 0).is_compatible(&SchemaVersion::required(1, 5)));
}

#[test]
fn test_open_withNonexistentPath_shouldFailWithNotFound() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = DatabaseConnection::open(dir.path().join("nope.sqlite"), REQUIRED);

    assert!(matches!(result, Err(DatabaseError::NotFound(_))));
}

#[test]
fn test_open_withOlderMinorVersion_shouldFailWithVersionMismatch() {
    let fixture = PathfinderFixture::with_version(0, 7, 0).unwrap();

    match DatabaseConnection::open(fixture.path(), SchemaVersion::required(0, 8)) {
        Err(DatabaseError::VersionMismatch { required, actual }) => {
            assert_eq!(required, SchemaVersion::new(0, 8, 0));
            assert_eq!(actual, SchemaVersion::new(0, 7, 0));
        }
        other => panic!("Expected VersionMismatch, got {:?}", other),
    }
}

#[test]
fn test_open_withOtherMajorVersion_shouldFailWithVersionMismatch() {
    let fixture = PathfinderFixture::with_version(1, 9, 0).unwrap();
    let result = DatabaseConnection::open(fixture.path(), REQUIRED);

    assert!(matches!(result, Err(DatabaseError::VersionMismatch { .. })));
}

#[test]
fn test_open_withNewerMinorVersion_shouldSucceed() {
    let fixture = PathfinderFixture::with_version(0, 12, 4).unwrap();
    let db = DatabaseConnection::open(fixture.path(), REQUIRED).expect("Failed to open");

    assert_eq!(db.version(), SchemaVersion::new(0, 12, 4));
    assert_eq!(db.path(), fixture.path());
}

#[test]
fn test_open_withEmptyVersionTable_shouldFailWithMissingVersion() {
    let fixture = PathfinderFixture::new().unwrap();
    fixture.execute_batch("DELETE FROM Version;").unwrap();

    let result = DatabaseConnection::open(fixture.path(), REQUIRED);
    assert!(matches!(result, Err(DatabaseError::MissingVersion(_))));
}
