use super::*;

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_keeps_root() {
    assert_eq!(normalize("/", MatchOptions::default()), "/");
}

#[test]
fn normalize_treats_empty_as_root() {
    assert_eq!(normalize("", MatchOptions::default()), "/");
    assert_eq!(normalize("?tab=1", MatchOptions::default()), "/");
}

#[test]
fn normalize_drops_single_trailing_slash() {
    assert_eq!(normalize("/dashboard/staff/", MatchOptions::default()), "/dashboard/staff");
    assert_eq!(normalize("/dashboard/staff//", MatchOptions::default()), "/dashboard/staff/");
}

#[test]
fn normalize_keeps_trailing_slash_when_strict() {
    let options = MatchOptions { strict: true, sensitive: true };
    assert_eq!(normalize("/dashboard/staff/", options), "/dashboard/staff/");
}

#[test]
fn normalize_keeps_case_unless_insensitive() {
    assert_eq!(normalize("/Dashboard/Staff", MatchOptions::default()), "/Dashboard/Staff");
    let options = MatchOptions { strict: false, sensitive: false };
    assert_eq!(normalize("/Dashboard/Staff", options), "/dashboard/staff");
}

#[test]
fn default_options_are_non_strict_and_case_sensitive() {
    assert_eq!(MatchOptions::default(), MatchOptions { strict: false, sensitive: true });
}

#[test]
fn strip_query_and_fragment_cuts_at_first_marker() {
    assert_eq!(strip_query_and_fragment("/dashboard/customer?x=1#top"), "/dashboard/customer");
    assert_eq!(strip_query_and_fragment("/dashboard#a?b"), "/dashboard");
    assert_eq!(strip_query_and_fragment("/plain"), "/plain");
}

// =============================================================
// matches
// =============================================================

#[test]
fn matches_exact_literal() {
    assert!(matches("/dashboard/customer", "/dashboard/customer", MatchOptions::default()));
}

#[test]
fn matches_ignores_query_and_fragment() {
    assert!(matches("/dashboard/customer", "/dashboard/customer?order=7#summary", MatchOptions::default()));
}

#[test]
fn matches_rejects_prefix_and_extension() {
    let options = MatchOptions::default();
    assert!(!matches("/dashboard/customer", "/dashboard", options));
    assert!(!matches("/dashboard/customer", "/dashboard/customer/orders", options));
    assert!(!matches("/", "/dashboard", options));
}

#[test]
fn matches_does_not_collapse_repeated_slashes() {
    assert!(!matches("/dashboard/staff", "//dashboard/staff", MatchOptions::default()));
}

#[test]
fn strict_matching_rejects_trailing_slash() {
    let options = MatchOptions { strict: true, sensitive: true };
    assert!(!matches("/dashboard/staff", "/dashboard/staff/", options));
}

#[test]
fn default_matching_rejects_case_variant() {
    assert!(!matches("/dashboard/staff", "/Dashboard/staff", MatchOptions::default()));
}

#[test]
fn insensitive_matching_accepts_case_variant() {
    let options = MatchOptions { strict: false, sensitive: false };
    assert!(matches("/dashboard/staff", "/Dashboard/staff", options));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_literal_paths() {
    assert_eq!(validate("/"), Ok(()));
    assert_eq!(validate("/dashboard/staff"), Ok(()));
}

#[test]
fn validate_rejects_empty_path() {
    assert_eq!(validate(""), Err(RouteError::EmptyPath));
}

#[test]
fn validate_rejects_relative_path() {
    assert_eq!(
        validate("dashboard"),
        Err(RouteError::MissingLeadingSlash { path: "dashboard".to_owned() })
    );
}

#[test]
fn validate_rejects_whitespace_and_markers() {
    assert_eq!(
        validate("/dash board"),
        Err(RouteError::InvalidCharacter { path: "/dash board".to_owned(), ch: ' ' })
    );
    assert_eq!(
        validate("/dashboard?x"),
        Err(RouteError::InvalidCharacter { path: "/dashboard?x".to_owned(), ch: '?' })
    );
}
