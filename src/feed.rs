use anyhow::{Context, Result};

use crate::models::FeedResponse;

// The single asynchronous operation in the pipeline. No retries and no
// caching: a failed or unparseable response aborts the whole render.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<FeedResponse> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("feed request to {} failed", url))?
        .error_for_status()
        .context("feed endpoint returned an error status")?;
    let feed = resp
        .json::<FeedResponse>()
        .await
        .context("feed body is not a GeoJSON feature collection")?;
    Ok(feed)
}
