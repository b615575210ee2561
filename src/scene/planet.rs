use crate::{
    layout::{self, LayoutError},
    types::{GenreCount, ListenerStats},
};

pub const PLANET_BASE_RADIUS: f64 = 2.0;
pub const PLANET_ATMOSPHERE_RADIUS: f64 = 2.2;

const CONTINENT_SURFACE_RADIUS: f64 = 2.1;
const MOUNTAIN_SURFACE_RADIUS: f64 = 2.0;
const CITY_SURFACE_RADIUS: f64 = 2.1;
const OCEAN_RING_RADIUS: f64 = 2.05;

const MAX_CONTINENTS: usize = 6;
const MAX_MOUNTAINS: usize = 5;
const MAX_OCEANS: usize = 3;
const MAX_CITIES: usize = 10;

/// Genre substrings mapped to continent colors. Matching is by containment
/// ("dream pop" colors like "pop"); anything unmatched falls back to the
/// indexed default palette.
const GENRE_COLORS: &[(&str, [u8; 3])] = &[
    ("pop", [0xFF, 0x69, 0xB4]),
    ("rock", [0xCD, 0x5C, 0x5C]),
    ("hip hop", [0xFF, 0xA5, 0x00]),
    ("rap", [0xFF, 0xD7, 0x00]),
    ("electronic", [0x00, 0xFF, 0xFF]),
    ("dance", [0x93, 0x70, 0xDB]),
    ("r&b", [0x46, 0x82, 0xB4]),
    ("indie", [0x32, 0xCD, 0x32]),
    ("alternative", [0x5F, 0x9E, 0xA0]),
    ("jazz", [0x8B, 0x45, 0x13]),
    ("classical", [0xFF, 0xFF, 0xE0]),
    ("metal", [0x69, 0x69, 0x69]),
    ("folk", [0xD2, 0xB4, 0x8C]),
    ("country", [0xF4, 0xA4, 0x60]),
    ("latin", [0xFF, 0x63, 0x47]),
];

const DEFAULT_COLORS: [[u8; 3]; 10] = [
    [0x34, 0x98, 0xdb],
    [0x9b, 0x59, 0xb6],
    [0x2e, 0xcc, 0x71],
    [0xe7, 0x4c, 0x3c],
    [0xf1, 0xc4, 0x0f],
    [0x1a, 0xbc, 0x9c],
    [0xd3, 0x54, 0x00],
    [0x34, 0x49, 0x5e],
    [0x16, 0xa0, 0x85],
    [0x29, 0x80, 0xb9],
];

const MOUNTAIN_COLOR: [u8; 3] = [0xC0, 0xC0, 0xC0];
const OCEAN_COLOR: [u8; 3] = [0x1E, 0x90, 0xFF];
const CITY_COLOR: [u8; 3] = [0xFF, 0xFF, 0xFF];

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureKind {
    Continent,
    Mountain,
    City,
    Ocean { ring_rotation: f64 },
}

/// One decorative feature of the generated planet, positioned on (or ringed
/// around) the base sphere and carrying the hover text of its source datum.
#[derive(Debug, Clone)]
pub struct PlanetFeature {
    pub kind: FeatureKind,
    pub label: String,
    pub detail: String,
    pub position: [f64; 3],
    pub size: f64,
    pub color: [u8; 3],
    pub glow: f64,
    pub depth: f64,
}

#[derive(Debug, Clone)]
pub struct PlanetModel {
    pub base_radius: f64,
    pub atmosphere_radius: f64,
    pub features: Vec<PlanetFeature>,
}

/// Builds the planet from a listener's statistics: continents from top
/// genres, mountains from top artists, oceans from playlists, cities from
/// top tracks. Feature groups degrade independently; missing statistics
/// shrink the planet, they never fail it.
pub fn build_planet(stats: &ListenerStats) -> Result<PlanetModel, LayoutError> {
    let mut features = Vec::new();

    features.extend(continents(&stats.top_genres)?);
    features.extend(mountains(stats)?);
    features.extend(oceans(stats));
    features.extend(cities(stats)?);

    Ok(PlanetModel {
        base_radius: PLANET_BASE_RADIUS,
        atmosphere_radius: PLANET_ATMOSPHERE_RADIUS,
        features,
    })
}

fn continent_color(name: &str, index: usize) -> [u8; 3] {
    for (key, color) in GENRE_COLORS {
        if name.contains(key) {
            return *color;
        }
    }
    DEFAULT_COLORS[index % DEFAULT_COLORS.len()]
}

fn continents(top_genres: &[GenreCount]) -> Result<Vec<PlanetFeature>, LayoutError> {
    if top_genres.is_empty() {
        return Ok(Vec::new());
    }

    // Shares are taken against the whole tally, not just the placed slice.
    let total: usize = top_genres.iter().map(|g| g.count).sum();
    let total = total.max(1) as f64;
    let main: Vec<&GenreCount> = top_genres.iter().take(MAX_CONTINENTS).collect();

    let points = layout::sphere_surface(main.len(), CONTINENT_SURFACE_RADIUS)?;
    Ok(main
        .iter()
        .zip(points)
        .enumerate()
        .map(|(index, (genre, point))| {
            let share = genre.count as f64 / total;
            PlanetFeature {
                kind: FeatureKind::Continent,
                label: genre.name.clone(),
                detail: format!("{:.1}% of listening", share * 100.0),
                position: point.position,
                size: 0.5 + share * 2.0,
                color: continent_color(&genre.name, index),
                glow: 0.0,
                depth: point.position[2],
            }
        })
        .collect())
}

fn mountains(stats: &ListenerStats) -> Result<Vec<PlanetFeature>, LayoutError> {
    let main: Vec<_> = stats.top_artists.iter().take(MAX_MOUNTAINS).collect();
    if main.is_empty() {
        return Ok(Vec::new());
    }

    let data: Vec<_> = main.iter().map(|d| (*d).clone()).collect();
    let ranks: Vec<f64> = (0..data.len()).map(|i| i as f64).collect();
    let placed = layout::place_on_sphere(&data, &ranks, MOUNTAIN_SURFACE_RADIUS, |_, rank| {
        1.0 + (MAX_MOUNTAINS as f64 - rank) * 0.2
    })?;

    Ok(placed
        .into_iter()
        .filter_map(|item| {
            let artist = &data[item.datum];
            let crate::layout::Position::Space { x, y, z } = item.position else {
                return None;
            };
            Some(PlanetFeature {
                kind: FeatureKind::Mountain,
                label: artist.name.clone(),
                detail: artist.associated.join(", "),
                position: [x, y, z],
                size: item.footprint,
                color: MOUNTAIN_COLOR,
                glow: 0.0,
                depth: item.depth,
            })
        })
        .collect())
}

fn oceans(stats: &ListenerStats) -> Vec<PlanetFeature> {
    let main: Vec<_> = stats.playlists.iter().take(MAX_OCEANS).collect();
    let len = main.len();

    main.iter()
        .enumerate()
        .map(|(index, playlist)| PlanetFeature {
            kind: FeatureKind::Ocean {
                ring_rotation: index as f64 * std::f64::consts::PI / len as f64,
            },
            label: playlist.name.clone(),
            detail: format!(
                "{} tracks{}",
                playlist.popularity as u64,
                playlist
                    .associated
                    .first()
                    .map(|owner| format!(", by {}", owner))
                    .unwrap_or_default()
            ),
            position: [0.0, 0.0, 0.0],
            size: OCEAN_RING_RADIUS,
            color: OCEAN_COLOR,
            glow: 0.0,
            depth: 0.0,
        })
        .collect()
}

fn cities(stats: &ListenerStats) -> Result<Vec<PlanetFeature>, LayoutError> {
    let main: Vec<_> = stats.top_tracks.iter().take(MAX_CITIES).collect();
    if main.is_empty() {
        return Ok(Vec::new());
    }

    let data: Vec<_> = main.iter().map(|d| (*d).clone()).collect();
    let popularity: Vec<f64> = data.iter().map(|d| d.popularity).collect();
    let placed = layout::place_on_sphere(&data, &popularity, CITY_SURFACE_RADIUS, |_, _| 0.05)?;

    Ok(placed
        .into_iter()
        .filter_map(|item| {
            let track = &data[item.datum];
            let crate::layout::Position::Space { x, y, z } = item.position else {
                return None;
            };
            Some(PlanetFeature {
                kind: FeatureKind::City,
                label: track.name.clone(),
                detail: track.associated.join(", "),
                position: [x, y, z],
                size: item.footprint,
                color: CITY_COLOR,
                glow: (track.popularity / 100.0) * 0.8 + 0.2,
                depth: item.depth,
            })
        })
        .collect())
}
