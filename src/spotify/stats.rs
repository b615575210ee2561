use crate::{
    config,
    session::SessionManager,
    spotify::{FetchError, get_json},
    types::{ArtistObject, MusicDatum, PlayHistoryResponse, TopItemsResponse, TrackObject},
    utils::{self, TimeRange},
};

/// Retrieves the listener's top artists for a time range, normalized.
///
/// Identifiers are unique within the returned batch; the API already
/// guarantees this for top items, but the normalization dedups anyway so the
/// invariant holds regardless of endpoint quirks.
pub async fn get_top_artists(
    session: &mut SessionManager,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<MusicDatum>, FetchError> {
    let api_url = format!(
        "{uri}/me/top/artists?limit={limit}&time_range={time_range}",
        uri = &config::api_url(),
    );

    let res = get_json::<TopItemsResponse<ArtistObject>>(session, &api_url).await?;
    let mut data: Vec<MusicDatum> = res.items.into_iter().map(MusicDatum::from).collect();
    utils::dedup_by_id(&mut data);
    Ok(data)
}

/// Retrieves the listener's top tracks for a time range, normalized.
pub async fn get_top_tracks(
    session: &mut SessionManager,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<MusicDatum>, FetchError> {
    let api_url = format!(
        "{uri}/me/top/tracks?limit={limit}&time_range={time_range}",
        uri = &config::api_url(),
    );

    let res = get_json::<TopItemsResponse<TrackObject>>(session, &api_url).await?;
    let mut data: Vec<MusicDatum> = res.items.into_iter().map(MusicDatum::from).collect();
    utils::dedup_by_id(&mut data);
    Ok(data)
}

/// Retrieves recently played tracks, unwrapped from their play-history
/// envelope and normalized.
///
/// Play history repeats tracks freely; deduplication keeps the first (most
/// recent) occurrence so batch identifiers stay unique.
pub async fn get_recently_played(
    session: &mut SessionManager,
    limit: u32,
) -> Result<Vec<MusicDatum>, FetchError> {
    let api_url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = &config::api_url(),
    );

    let res = get_json::<PlayHistoryResponse>(session, &api_url).await?;
    let mut data: Vec<MusicDatum> = res
        .items
        .into_iter()
        .map(|item| MusicDatum::from(item.track))
        .collect();
    utils::dedup_by_id(&mut data);
    Ok(data)
}
