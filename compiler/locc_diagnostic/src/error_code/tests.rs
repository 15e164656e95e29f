use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::W2003.as_str(), "W2003");
}

#[test]
fn test_all_codes_round_trip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!(ErrorCode::ALL.len(), 7);
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("w2002".parse::<ErrorCode>(), Ok(ErrorCode::W2002));
    assert_eq!(" e1001 ".parse::<ErrorCode>(), Ok(ErrorCode::E1001));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_classification() {
    assert!(ErrorCode::E1001.is_exclusion());
    assert!(!ErrorCode::E1001.is_warning());
    for code in &ErrorCode::ALL[1..] {
        assert!(code.is_warning(), "{code} should be a warning");
        assert!(!code.is_exclusion());
    }
}

#[test]
fn test_descriptions_are_distinct() {
    let mut seen: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::description).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), ErrorCode::ALL.len());
}
