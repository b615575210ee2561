use crate::{
    config,
    session::SessionManager,
    spotify::{FetchError, get_json},
    types::UserProfile,
};

pub async fn get_profile(session: &mut SessionManager) -> Result<UserProfile, FetchError> {
    let api_url = format!("{uri}/me", uri = &config::api_url());
    get_json::<UserProfile>(session, &api_url).await
}
