use crate::error::{Error, Result};
use crate::youtube::duration::parse_duration;
use crate::youtube::models::{
    PlaylistEntry, PlaylistItem, PlaylistItemsResponse, VideoListResponse,
};
use reqwest::blocking::{Client, Response};
use std::collections::HashMap;

/// Page size for playlist listing and batch size for video lookups.
/// 50 is the maximum the Data API accepts for either.
const PAGE_SIZE: usize = 50;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Helper for testing to override base URL (e.g. wiremock)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    fn list_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsResponse> {
        let url = format!("{}/playlistItems", self.base_url);
        let max_results = PAGE_SIZE.to_string();

        let mut request = self.client.get(&url).query(&[
            ("part", "snippet"),
            ("maxResults", max_results.as_str()),
            ("playlistId", playlist_id),
            ("key", self.api_key.as_str()),
        ]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        read_json(request.send()?)
    }

    /// Fetch every entry of a playlist, following page tokens until the API
    /// stops returning one. Entries come back in playlist order.
    pub fn list_playlist(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>> {
        let mut entries = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_page(playlist_id, page_token.as_deref())?;
            entries.extend(page.items.into_iter().map(PlaylistItem::into_entry));
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(entries)
    }

    /// Look up durations in seconds for the given video ids, batching
    /// requests to stay under the API's id limit. Ids the API does not answer
    /// for (deleted or private videos) are simply absent from the map.
    pub fn video_durations(&self, ids: &[String]) -> Result<HashMap<String, u64>> {
        let mut durations = HashMap::new();

        for batch in ids.chunks(PAGE_SIZE) {
            let url = format!("{}/videos", self.base_url);
            let joined = batch.join(",");

            let response = self
                .client
                .get(&url)
                .query(&[
                    ("part", "contentDetails"),
                    ("id", joined.as_str()),
                    ("key", self.api_key.as_str()),
                ])
                .send()?;

            let listing: VideoListResponse = read_json(response)?;
            for video in listing.items {
                durations.insert(video.id, parse_duration(&video.content_details.duration)?);
            }
        }

        Ok(durations)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(Error::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<T>()?)
}
