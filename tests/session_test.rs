use tempfile::TempDir;

use tunesphere::layout::{GridConfig, Strategy, Surface};
use tunesphere::scene::SceneView;
use tunesphere::session::{AuthEndpoint, AuthError, SessionManager, SessionState, SessionStore};
use tunesphere::types::MusicDatum;

fn test_endpoint() -> AuthEndpoint {
    AuthEndpoint {
        authorize_url: "https://accounts.example.com/authorize".to_string(),
        client_id: "client123".to_string(),
        redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
        scopes: vec!["user-top-read".to_string(), "user-read-private".to_string()],
    }
}

async fn manager(dir: &TempDir) -> SessionManager {
    SessionManager::load(SessionStore::with_base_dir(dir.path()))
        .await
        .expect("session store should load")
}

fn nonce_from(auth_url: &str) -> String {
    auth_url
        .split("state=")
        .nth(1)
        .expect("auth url carries a state parameter")
        .to_string()
}

fn test_datum(id: &str) -> MusicDatum {
    MusicDatum {
        id: id.to_string(),
        name: id.to_string(),
        images: vec![],
        popularity: 0.0,
        associated: vec![],
    }
}

#[tokio::test]
async fn test_begin_login_builds_authorization_url() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;

    let url = session.begin_login(&test_endpoint()).await.unwrap();
    assert!(url.starts_with("https://accounts.example.com/authorize?"));
    assert!(url.contains("client_id=client123"));
    assert!(url.contains("response_type=token"));
    assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8888%2Fcallback"));
    // space-joined scopes, urlencoded
    assert!(url.contains("scope=user-top-read+user-read-private"));

    let nonce = nonce_from(&url);
    assert!(nonce.len() >= 16);
    assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(session.state(), SessionState::PendingLogin);
}

#[tokio::test]
async fn test_complete_login_with_matching_state() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;

    let url = session.begin_login(&test_endpoint()).await.unwrap();
    let nonce = nonce_from(&url);

    let fragment = format!(
        "access_token=tok-abc&token_type=Bearer&expires_in=3600&state={}",
        nonce
    );
    session.complete_login_at(&fragment, 1_000).await.unwrap();

    assert_eq!(session.state_at(1_000), SessionState::Authenticated);
    assert_eq!(
        session.current_token_at(1_000).await,
        Some("tok-abc".to_string())
    );
}

#[tokio::test]
async fn test_complete_login_rejects_state_mismatch() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;
    session.begin_login(&test_endpoint()).await.unwrap();

    let fragment = "access_token=tok-abc&token_type=Bearer&expires_in=3600&state=forged";
    let result = session.complete_login_at(fragment, 1_000).await;
    assert!(matches!(result, Err(AuthError::StateMismatch)));

    // security-relevant rejection: nothing stored, back to Unauthenticated
    assert_eq!(session.current_token_at(1_000).await, None);
    assert_eq!(session.state_at(1_000), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_complete_login_rejects_missing_state() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;
    session.begin_login(&test_endpoint()).await.unwrap();

    let result = session
        .complete_login_at("access_token=tok-abc&expires_in=3600", 1_000)
        .await;
    assert!(matches!(result, Err(AuthError::StateMismatch)));
    assert_eq!(session.current_token_at(1_000).await, None);
}

#[tokio::test]
async fn test_complete_login_rejects_missing_token() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;
    let url = session.begin_login(&test_endpoint()).await.unwrap();
    let nonce = nonce_from(&url);

    let result = session
        .complete_login_at(&format!("state={}", nonce), 1_000)
        .await;
    assert!(matches!(result, Err(AuthError::MissingToken)));
    assert_eq!(session.current_token_at(1_000).await, None);
}

#[tokio::test]
async fn test_token_valid_strictly_before_expiry() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;
    let url = session.begin_login(&test_endpoint()).await.unwrap();
    let nonce = nonce_from(&url);

    let expires_in = 3600;
    let now = 10_000;
    let fragment = format!(
        "access_token=tok-abc&expires_in={}&state={}",
        expires_in, nonce
    );
    session.complete_login_at(&fragment, now).await.unwrap();

    assert!(session.current_token_at(now + expires_in - 1).await.is_some());
    assert!(session.current_token_at(now + expires_in + 1).await.is_none());
    // expired entries are cleaned, not resurrected by an earlier clock
    assert!(session.current_token_at(now).await.is_none());
}

#[tokio::test]
async fn test_missing_lifetime_defaults_to_an_hour() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;
    let url = session.begin_login(&test_endpoint()).await.unwrap();
    let nonce = nonce_from(&url);

    let fragment = format!("access_token=tok-abc&state={}", nonce);
    session.complete_login_at(&fragment, 0).await.unwrap();

    assert!(session.current_token_at(3599).await.is_some());
    assert!(session.current_token_at(3601).await.is_none());
}

#[tokio::test]
async fn test_logout_is_idempotent_and_clears_nonce() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;

    // logout while Unauthenticated is a no-op that still succeeds
    session.logout().await.unwrap();
    assert_eq!(session.current_token_at(0).await, None);

    session.begin_login(&test_endpoint()).await.unwrap();
    assert_eq!(session.state(), SessionState::PendingLogin);

    session.logout().await.unwrap();
    assert_eq!(session.state(), SessionState::Unauthenticated);
    session.logout().await.unwrap();
    assert_eq!(session.current_token_at(0).await, None);
}

#[tokio::test]
async fn test_session_persists_across_reload() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;
    let url = session.begin_login(&test_endpoint()).await.unwrap();
    let nonce = nonce_from(&url);
    session
        .complete_login_at(
            &format!("access_token=tok-abc&expires_in=3600&state={}", nonce),
            1_000,
        )
        .await
        .unwrap();
    drop(session);

    let mut reloaded = manager(&dir).await;
    assert_eq!(
        reloaded.current_token_at(2_000).await,
        Some("tok-abc".to_string())
    );
}

#[tokio::test]
async fn test_stale_fetch_ticket_is_discarded() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;

    let surface = Surface::new(800.0, 600.0).unwrap();
    let mut view = SceneView::new(surface, Strategy::Grid(GridConfig::default()), 0);

    let ticket = session.fetch_ticket();
    session.logout().await.unwrap();

    // the continuation lands after logout; its results must not repopulate state
    let applied = view
        .apply_batch(&session, &ticket, vec![test_datum("a"), test_datum("b")])
        .unwrap();
    assert!(!applied);
    assert!(view.placed().is_empty());
    assert!(view.data().is_empty());

    // a fresh ticket from the new epoch applies normally
    let ticket = session.fetch_ticket();
    let applied = view
        .apply_batch(&session, &ticket, vec![test_datum("a")])
        .unwrap();
    assert!(applied);
    assert_eq!(view.placed().len(), 1);
}

#[tokio::test]
async fn test_resize_before_fetch_never_runs_on_partial_data() {
    let dir = TempDir::new().unwrap();
    let mut session = manager(&dir).await;
    let ticket = session.fetch_ticket();

    let surface = Surface::new(800.0, 600.0).unwrap();
    let mut view = SceneView::new(surface, Strategy::Grid(GridConfig::default()), 0);

    // resizes arrive while the fetch is still in flight
    view.resize(Surface::new(400.0, 300.0).unwrap()).unwrap();
    view.resize(Surface::new(1024.0, 768.0).unwrap()).unwrap();
    assert!(view.placed().is_empty());

    // the complete batch arrives and lays out against the latest size
    let batch: Vec<MusicDatum> = (0..5).map(|i| test_datum(&format!("id{}", i))).collect();
    assert!(view.apply_batch(&session, &ticket, batch).unwrap());
    assert_eq!(view.placed().len(), 5);

    let max_x = view
        .placed()
        .iter()
        .map(|item| match item.position {
            tunesphere::layout::Position::Plane { x, .. } => x,
            tunesphere::layout::Position::Space { x, .. } => x,
        })
        .fold(f64::MIN, f64::max);
    assert!(max_x > 400.0, "layout should span the latest surface size");
}
