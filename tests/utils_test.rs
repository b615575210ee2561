use tunesphere::types::MusicDatum;
use tunesphere::utils::*;

// Helper function to create a test datum
fn create_test_datum(id: &str, genres: &[&str]) -> MusicDatum {
    MusicDatum {
        id: id.to_string(),
        name: format!("{} name", id),
        images: vec![],
        popularity: 0.0,
        associated: genres.iter().map(|g| g.to_string()).collect(),
    }
}

#[test]
fn test_generate_nonce() {
    let nonce = generate_nonce();

    // Should be exactly 32 characters
    assert_eq!(nonce.len(), 32);

    // Should contain only alphanumeric characters
    assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated nonces should be different
    let nonce2 = generate_nonce();
    assert_ne!(nonce, nonce2);
}

#[test]
fn test_parse_fragment() {
    let params = parse_fragment("access_token=abc123&token_type=Bearer&expires_in=3600&state=xyz");
    assert_eq!(params.get("access_token").unwrap(), "abc123");
    assert_eq!(params.get("token_type").unwrap(), "Bearer");
    assert_eq!(params.get("expires_in").unwrap(), "3600");
    assert_eq!(params.get("state").unwrap(), "xyz");
}

#[test]
fn test_parse_fragment_tolerates_leading_hash() {
    let params = parse_fragment("#access_token=abc&state=n1");
    assert_eq!(params.get("access_token").unwrap(), "abc");
    assert_eq!(params.get("state").unwrap(), "n1");
}

#[test]
fn test_parse_fragment_edge_cases() {
    // empty fragment
    assert!(parse_fragment("").is_empty());
    assert!(parse_fragment("#").is_empty());

    // key without a value still registers
    let params = parse_fragment("flag&key=value");
    assert_eq!(params.get("flag").unwrap(), "");
    assert_eq!(params.get("key").unwrap(), "value");

    // empty value
    let params = parse_fragment("access_token=&state=n");
    assert_eq!(params.get("access_token").unwrap(), "");
}

#[test]
fn test_dedup_by_id() {
    let mut data = vec![
        create_test_datum("id1", &[]),
        create_test_datum("id2", &[]),
        create_test_datum("id1", &[]), // Duplicate
        create_test_datum("id3", &[]),
    ];

    dedup_by_id(&mut data);

    // Should have 3 unique items, first occurrences kept in order
    assert_eq!(data.len(), 3);
    let ids: Vec<&String> = data.iter().map(|d| &d.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_tally_genres() {
    let artists = vec![
        create_test_datum("a1", &["indie rock", "shoegaze"]),
        create_test_datum("a2", &["indie rock", "dream pop"]),
        create_test_datum("a3", &["indie rock", "shoegaze", "dream pop"]),
        create_test_datum("a4", &["ambient"]),
    ];

    let tally = tally_genres(&artists);

    assert_eq!(tally.len(), 4);
    assert_eq!(tally[0].name, "indie rock");
    assert_eq!(tally[0].count, 3);

    // ties broken by name ascending for a stable ordering
    assert_eq!(tally[1].name, "dream pop");
    assert_eq!(tally[1].count, 2);
    assert_eq!(tally[2].name, "shoegaze");
    assert_eq!(tally[2].count, 2);
    assert_eq!(tally[3].name, "ambient");
    assert_eq!(tally[3].count, 1);
}

#[test]
fn test_tally_genres_empty() {
    assert!(tally_genres(&[]).is_empty());
    let no_genres = vec![create_test_datum("a1", &[])];
    assert!(tally_genres(&no_genres).is_empty());
}

#[test]
fn test_time_range_display() {
    assert_eq!(TimeRange::Short.to_string(), "short_term");
    assert_eq!(TimeRange::Medium.to_string(), "medium_term");
    assert_eq!(TimeRange::Long.to_string(), "long_term");
}

#[test]
fn test_parse_time_range_valid_inputs() {
    assert_eq!(parse_time_range("short").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("medium_term").unwrap(), TimeRange::Medium);
    assert_eq!(parse_time_range("long-term").unwrap(), TimeRange::Long);

    // Test case insensitivity and surrounding whitespace
    assert_eq!(parse_time_range(" LONG ").unwrap(), TimeRange::Long);
}

#[test]
fn test_parse_time_range_invalid_inputs() {
    let result = parse_time_range("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_time_range("fortnight");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'fortnight'"));
}

#[test]
fn test_time_range_default() {
    assert_eq!(TimeRange::default(), TimeRange::Medium);
}
