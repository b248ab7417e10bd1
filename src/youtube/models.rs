use serde::{Deserialize, Serialize};

/// One playlist member in source order. Position in the fetched list is what
/// "video #N" refers to when a range is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub video_id: String,
    pub title: String,
}

/// One page of the playlistItems listing.
#[derive(Debug, Deserialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
pub struct Snippet {
    pub title: String,
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

impl PlaylistItem {
    pub fn into_entry(self) -> PlaylistEntry {
        PlaylistEntry {
            video_id: self.snippet.resource_id.video_id,
            title: self.snippet.title,
        }
    }
}

/// Response of the videos lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(rename = "contentDetails")]
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    pub duration: String,
}
