use serde::{Deserialize, Serialize};

/// A track entry from a lookup response.
///
/// Fields are taken verbatim from the API payload; an entry missing any of
/// them fails deserialization, which callers treat the same as an empty
/// response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// The unique track identifier
    pub track_id: u64,
    /// The track title
    pub track_name: String,
    /// The artist name
    pub artist_name: String,
    /// The track number within the album. Not guaranteed unique or contiguous.
    pub track_number: u32,
    /// URL of the short audio preview clip for this track
    pub preview_url: String,
}
