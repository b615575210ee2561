use crate::{
    config,
    session::SessionManager,
    spotify::{FetchError, get_json},
    types::{MusicDatum, PlaylistsResponse},
};

/// Retrieves the listener's playlists, normalized. A playlist's popularity
/// measure is its track total, which the planet scene uses as ocean weight.
pub async fn get_playlists(
    session: &mut SessionManager,
    limit: u32,
) -> Result<Vec<MusicDatum>, FetchError> {
    let api_url = format!("{uri}/me/playlists?limit={limit}", uri = &config::api_url());

    let res = get_json::<PlaylistsResponse>(session, &api_url).await?;
    Ok(res.items.into_iter().map(MusicDatum::from).collect())
}
