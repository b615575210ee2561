use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use rand::{Rng, distr::Alphanumeric};

use crate::types::{GenreCount, MusicDatum};

/// Generates the anti-forgery nonce round-tripped through the authorization
/// redirect as the `state` parameter. 32 alphanumeric characters from the
/// thread-local CSPRNG.
pub fn generate_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Parses a URL fragment of the form `access_token=...&state=...` into a map.
///
/// Tolerates a leading `#`. Keys without `=` are kept with an empty value so
/// presence checks still work.
pub fn parse_fragment(fragment: &str) -> HashMap<String, String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Drops later duplicates of any datum id, keeping first occurrences in order.
pub fn dedup_by_id(data: &mut Vec<MusicDatum>) {
    let mut seen_ids = HashSet::new();
    data.retain(|datum| seen_ids.insert(datum.id.clone()));
}

/// Tallies genre names across a batch of artists.
///
/// Returns counts sorted by frequency descending, ties broken by name so the
/// ordering is stable across runs with the same input.
pub fn tally_genres(artists: &[MusicDatum]) -> Vec<GenreCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for artist in artists {
        for genre in &artist.associated {
            *counts.entry(genre.as_str()).or_insert(0) += 1;
        }
    }

    let mut tally: Vec<GenreCount> = counts
        .into_iter()
        .map(|(name, count)| GenreCount {
            name: name.to_string(),
            count,
        })
        .collect();
    tally.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    tally
}

/// The statistics window offered by the top-items endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Short,
    Medium,
    Long,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Medium
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        };
        write!(f, "{}", s)
    }
}

/// Parses a user-supplied time range; accepts the API names and short forms.
pub fn parse_time_range(s: &str) -> Result<TimeRange, String> {
    match s.trim().to_lowercase().as_str() {
        "" => Err("time range cannot be empty".to_string()),
        "short" | "short_term" | "short-term" => Ok(TimeRange::Short),
        "medium" | "medium_term" | "medium-term" => Ok(TimeRange::Medium),
        "long" | "long_term" | "long-term" => Ok(TimeRange::Long),
        other => Err(format!(
            "invalid value '{}' (expected short, medium, or long)",
            other
        )),
    }
}
