use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::types::CallbackRelay;

const RELAY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>tunesphere</title></head>
<body>
<h4>Completing login...</h4>
<script>
  var fragment = window.location.hash.substring(1);
  window.location.replace('/capture?fragment=' + encodeURIComponent(fragment));
</script>
</body>
</html>"#;

/// Landing page for the authorization redirect. The token lives in the URL
/// fragment, so a script has to lift it out and hand it to `/capture`.
pub async fn callback() -> Html<&'static str> {
    Html(RELAY_PAGE)
}

pub async fn capture(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<CallbackRelay>>>>,
) -> Html<&'static str> {
    if let Some(fragment) = params.get("fragment") {
        let mut state = shared_state.lock().await;
        let Some(ref mut relay) = state.as_mut() else {
            return Html("<h4>No login in progress.</h4>");
        };

        relay.fragment = Some(fragment.clone());
        Html("<h2>Authentication received.</h2><p>Close this browser window.</p>")
    } else {
        Html("<h4>Missing callback fragment.</h4>")
    }
}
