use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    session::{SessionManager, SessionStore},
    spotify::{self, FetchError},
    types::{ArtistTableRow, TrackTableRow},
    utils::TimeRange,
    warning,
};

pub async fn top(artists: bool, tracks: bool, limit: u32, time_range: TimeRange) {
    let mut session = match SessionManager::load(SessionStore::new()).await {
        Ok(session) => session,
        Err(e) => error!("Failed to load session storage: {}", e),
    };

    // no flag means both
    let show_artists = artists || !tracks;
    let show_tracks = tracks || !artists;

    if show_artists {
        let pb = spinner("Fetching top artists...");
        match spotify::get_top_artists(&mut session, limit, time_range).await {
            Ok(data) => {
                pb.finish_and_clear();
                let rows: Vec<ArtistTableRow> = data
                    .into_iter()
                    .enumerate()
                    .map(|(i, artist)| ArtistTableRow {
                        rank: i + 1,
                        name: artist.name,
                        genres: artist
                            .associated
                            .iter()
                            .take(3)
                            .cloned()
                            .collect::<Vec<_>>()
                            .join(","),
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
            Err(e) => {
                pb.finish_and_clear();
                report_fetch_error(e);
            }
        }
    }

    if show_tracks {
        let pb = spinner("Fetching top tracks...");
        match spotify::get_top_tracks(&mut session, limit, time_range).await {
            Ok(data) => {
                pb.finish_and_clear();
                let rows: Vec<TrackTableRow> = data
                    .into_iter()
                    .enumerate()
                    .map(|(i, track)| TrackTableRow {
                        rank: i + 1,
                        name: track.name,
                        artists: track.associated.join(", "),
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
            Err(e) => {
                pb.finish_and_clear();
                report_fetch_error(e);
            }
        }
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) fn report_fetch_error(e: FetchError) -> ! {
    match e {
        FetchError::Unauthenticated => {
            error!("Not authenticated. Please run tunesphere auth first.")
        }
        FetchError::AuthorizationRejected => {
            warning!("The API rejected the stored credential; the session has been cleared.");
            error!("Please run tunesphere auth again.")
        }
        other => error!("Failed to fetch listening data: {}", other),
    }
}
