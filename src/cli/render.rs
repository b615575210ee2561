use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    cli::top::report_fetch_error,
    error, info,
    layout::Surface,
    render::{self, CaptureStrategy, CoverSet},
    scene::{self, SceneMode, SceneView},
    session::{SessionManager, SessionStore},
    spotify::{self, FetchError},
    success,
    types::ListenerStats,
    utils::{self, TimeRange},
};

const COVER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct RenderParams {
    pub mode: SceneMode,
    pub width: f64,
    pub height: f64,
    pub out: String,
    pub limit: u32,
    pub time_range: TimeRange,
    pub seed: u64,
    pub no_covers: bool,
}

/// Fetches statistics, composes the requested scene, rasterizes it, and
/// exports a PNG.
///
/// The layout runs only once the full batch has arrived, and results fetched
/// under a session that has since been logged out are discarded rather than
/// applied. Export goes through the capture chain, so cross-origin style
/// failures degrade to a placeholder re-render instead of aborting.
pub async fn render(params: RenderParams) {
    let mut session = match SessionManager::load(SessionStore::new()).await {
        Ok(session) => session,
        Err(e) => error!("Failed to load session storage: {}", e),
    };

    let surface = match Surface::new(params.width, params.height) {
        Ok(surface) => surface,
        Err(e) => error!("{}", e),
    };

    match params.mode {
        SceneMode::Planet => render_planet(&mut session, surface, &params).await,
        _ => render_gallery(&mut session, surface, &params).await,
    }
}

async fn render_planet(session: &mut SessionManager, surface: Surface, params: &RenderParams) {
    let pb = spinner("Fetching listening statistics...");
    let stats = match fetch_planet_stats(session, params.time_range).await {
        Ok(stats) => {
            pb.finish_and_clear();
            stats
        }
        Err(e) => {
            pb.finish_and_clear();
            report_fetch_error(e);
        }
    };

    if let Some(profile) = &stats.profile {
        let name = profile.display_name.as_deref().unwrap_or(&profile.id);
        info!("Building a planet for {}", name);
    }

    let model = match scene::build_planet(&stats) {
        Ok(model) => model,
        Err(e) => error!("Failed to build planet: {}", e),
    };

    let canvas = render::render_planet(&model, surface, params.seed);
    save_canvas(&canvas, params, || {
        render::render_planet(&model, surface, params.seed)
    })
    .await;
}

async fn render_gallery(session: &mut SessionManager, surface: Surface, params: &RenderParams) {
    let ticket = session.fetch_ticket();

    let pb = spinner("Fetching listening statistics...");
    let fetched = match params.mode {
        SceneMode::Museum => {
            spotify::get_recently_played(session, scene::MUSEUM_TARGET_COVERS as u32).await
        }
        _ => spotify::get_top_tracks(session, params.limit, params.time_range).await,
    };
    pb.finish_and_clear();

    let tracks = match fetched {
        Ok(tracks) => tracks,
        Err(e) => report_fetch_error(e),
    };

    let (batch, strategy) = match params.mode {
        SceneMode::Museum => (scene::museum_batch(&tracks), scene::museum_strategy()),
        SceneMode::Flow => (tracks, scene::flow_strategy()),
        _ => (tracks, scene::collage_strategy()),
    };

    if batch.is_empty() {
        error!("No listening data returned; nothing to render.");
    }

    let mut view = SceneView::new(surface, strategy, params.seed);
    match view.apply_batch(session, &ticket, batch) {
        Ok(true) => {}
        Ok(false) => error!("Session changed while fetching; please run again."),
        Err(e) => error!("Layout failed: {}", e),
    }

    let covers = if params.no_covers {
        CoverSet::empty()
    } else {
        let pb = spinner("Loading cover art...");
        let covers = render::load_covers(view.data(), COVER_TIMEOUT).await;
        pb.finish_and_clear();
        covers
    };

    let scene_desc = view.scene(scene::DARK_BACKGROUND);
    let canvas = render::render_scene(&scene_desc, &covers);
    save_canvas(&canvas, params, || {
        render::render_scene(&scene_desc, &CoverSet::empty())
    })
    .await;
}

async fn save_canvas<F>(canvas: &render::Canvas, params: &RenderParams, rerender: F)
where
    F: FnOnce() -> render::Canvas,
{
    let (bytes, strategy) = match render::capture_png(canvas, rerender) {
        Ok(result) => result,
        Err(e) => error!("{}", e),
    };

    if strategy == CaptureStrategy::Rerender {
        info!("Exported via the re-render fallback");
    }

    if let Err(e) = async_fs::write(&params.out, &bytes).await {
        error!("Failed to write {}: {}", params.out, e);
    }

    success!(
        "Saved {} artwork ({}x{}) to {}",
        params.mode,
        canvas.width(),
        canvas.height(),
        params.out
    );
}

async fn fetch_planet_stats(
    session: &mut SessionManager,
    time_range: TimeRange,
) -> Result<ListenerStats, FetchError> {
    let profile = spotify::get_profile(session).await?;
    let top_artists = spotify::get_top_artists(session, 10, time_range).await?;
    let top_tracks = spotify::get_top_tracks(session, 20, time_range).await?;
    let playlists = spotify::get_playlists(session, 20).await?;
    let top_genres = utils::tally_genres(&top_artists);

    Ok(ListenerStats {
        profile: Some(profile),
        top_artists,
        top_tracks,
        playlists,
        top_genres,
    })
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
