use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Shared state between the login flow and the local callback relay.
///
/// The relay fills in `fragment` once the browser redirect lands; the login
/// flow polls for it and hands it to the session manager for validation.
#[derive(Debug, Clone, Default)]
pub struct CallbackRelay {
    pub fragment: Option<String>,
}

/// A normalized unit of listening history: a track, artist, genre tally, or
/// playlist, reduced to what the layout and render layers consume.
///
/// `images` is ordered largest/default first. `associated` carries the artist
/// names of a track or the genre names of an artist. A datum with no images
/// degrades to a placeholder tile at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicDatum {
    pub id: String,
    pub name: String,
    pub images: Vec<String>,
    pub popularity: f64,
    pub associated: Vec<String>,
}

impl MusicDatum {
    pub fn cover_url(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }
}

/// A genre name with the number of top artists carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub name: String,
    pub count: usize,
}

/// Everything the scene composers consume, fetched in one authenticated pass.
#[derive(Debug, Clone, Default)]
pub struct ListenerStats {
    pub profile: Option<UserProfile>,
    pub top_artists: Vec<MusicDatum>,
    pub top_tracks: Vec<MusicDatum>,
    pub playlists: Vec<MusicDatum>,
    pub top_genres: Vec<GenreCount>,
}

// --- Spotify Web API wire types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub album: AlbumObject,
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistoryItem {
    pub track: TrackObject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistoryResponse {
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    pub name: String,
    pub tracks: PlaylistTracksRef,
    pub owner: PlaylistOwner,
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsResponse {
    pub items: Vec<PlaylistObject>,
}

impl From<ArtistObject> for MusicDatum {
    fn from(artist: ArtistObject) -> Self {
        MusicDatum {
            id: artist.id,
            name: artist.name,
            images: artist.images.into_iter().map(|i| i.url).collect(),
            popularity: artist.popularity.unwrap_or(0.0),
            associated: artist.genres,
        }
    }
}

impl From<TrackObject> for MusicDatum {
    fn from(track: TrackObject) -> Self {
        MusicDatum {
            id: track.id,
            name: track.name,
            images: track.album.images.into_iter().map(|i| i.url).collect(),
            popularity: track.popularity.unwrap_or(0.0),
            associated: track.artists.into_iter().map(|a| a.name).collect(),
        }
    }
}

impl From<PlaylistObject> for MusicDatum {
    fn from(playlist: PlaylistObject) -> Self {
        let owner = playlist.owner.display_name.unwrap_or_default();
        MusicDatum {
            id: playlist.id,
            name: playlist.name,
            images: playlist.images.into_iter().map(|i| i.url).collect(),
            popularity: playlist.tracks.total as f64,
            associated: if owner.is_empty() { Vec::new() } else { vec![owner] },
        }
    }
}

// --- CLI table rows ---

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub rank: usize,
    pub name: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub rank: usize,
    pub name: String,
    pub artists: String,
}
