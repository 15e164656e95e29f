#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

#[test]
fn test_get_existing_doc() {
    let doc = ErrorDocs::get(ErrorCode::E1001);
    assert!(doc.unwrap().contains("Numeric Identifier"));
}

#[test]
fn test_every_code_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(*code), "{code} has no documentation");
        assert!(ErrorDocs::get(*code).unwrap().starts_with(&format!("# {code}")));
    }
    assert_eq!(ErrorDocs::all_codes().count(), ErrorCode::ALL.len());
}
