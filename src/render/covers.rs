use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use image::RgbaImage;
use reqwest::Client;
use tokio::task::JoinSet;

use crate::{types::MusicDatum, warning};

/// Decoded cover art keyed by URL. Lookup misses render as placeholders.
#[derive(Default)]
pub struct CoverSet {
    images: HashMap<String, RgbaImage>,
}

impl CoverSet {
    pub fn empty() -> Self {
        CoverSet::default()
    }

    pub fn get(&self, url: &str) -> Option<&RgbaImage> {
        self.images.get(url)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Fetches and decodes every distinct cover in the batch before the first
/// paint.
///
/// One join over concurrent downloads, each bounded by `timeout`; whatever
/// has not resolved by then is simply absent from the set and renders as a
/// placeholder. Download failures are counted, not fatal.
pub async fn load_covers(data: &[MusicDatum], timeout: Duration) -> CoverSet {
    let urls: HashSet<String> = data
        .iter()
        .filter_map(|datum| datum.cover_url().map(str::to_string))
        .collect();
    if urls.is_empty() {
        return CoverSet::empty();
    }

    let client = match Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            warning!("Cover download disabled: {}", e);
            return CoverSet::empty();
        }
    };

    let mut tasks = JoinSet::new();
    for url in urls {
        let client = client.clone();
        tasks.spawn(async move {
            let bytes = client.get(&url).send().await.ok()?.bytes().await.ok()?;
            let img = image::load_from_memory(&bytes).ok()?;
            Some((url, img.to_rgba8()))
        });
    }

    let mut images = HashMap::new();
    let mut missed = 0usize;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some((url, img))) => {
                images.insert(url, img);
            }
            _ => missed += 1,
        }
    }

    if missed > 0 {
        warning!("{} cover(s) unavailable, using placeholders", missed);
    }

    CoverSet { images }
}
