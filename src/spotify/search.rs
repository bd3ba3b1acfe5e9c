use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{FoundTrack, SearchResponse, Track},
    utils, warning,
};

/// Resolves one scraped track to a Spotify track via the search
/// endpoint, using a `track:<title> artist:<artist>` query and taking
/// the first hit.
///
/// Returns `Ok(None)` when the search comes back empty; a miss is an
/// expected outcome, not an error. Rate limiting (`429`) is handled by
/// sleeping out the `Retry-After` delay; `502 Bad Gateway` is retried
/// after a short pause.
pub async fn find_track(token: &str, track: &Track) -> Result<Option<FoundTrack>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    let query = utils::search_query(track);

    loop {
        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
            .bearer_auth(token)
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue;
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                    retry_after
                );
            }
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(10)).await;
                        continue; // retry
                    }
                }
                return Err(err); // propagate other errors
            }
        };

        let json = response.json::<SearchResponse>().await?;
        return Ok(json.tracks.items.into_iter().next());
    }
}
