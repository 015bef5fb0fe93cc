use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, ClientResult, Track};

/// The lookup endpoint.
impl Client {
    /// The fixed number of entities requested per lookup. The API does not
    /// paginate beyond this.
    pub const LOOKUP_LIMIT: u32 = 50;

    /// Look up the songs under the given collection (album) identifier.
    ///
    /// The identifier is percent-encoded by the query serializer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not valid.
    pub async fn lookup_collection_songs(
        &self,
        collection_id: &str,
    ) -> ClientResult<LookupResponse> {
        let bytes = self
            .client
            .get(format!("{}/lookup", self.base_url))
            .query(&[
                ("id", collection_id.to_string()),
                ("limit", Self::LOOKUP_LIMIT.to_string()),
                ("entity", "song".to_string()),
            ])
            .send()
            .await?
            .bytes()
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// A raw lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// The number of entries in `results`.
    pub result_count: u32,
    /// The result entries. The first entry is the album metadata; the rest
    /// are tracks.
    #[serde(default)]
    pub results: Vec<LookupEntry>,
}
impl LookupResponse {
    /// Extract the track list, discarding the leading album metadata entry.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoTracks`] if the response has zero results or
    /// only the album metadata entry. An album with no playable songs is an
    /// error condition, not an empty-but-valid list.
    pub fn into_tracks(self) -> ClientResult<Vec<Track>> {
        if self.result_count == 0 || self.results.len() <= 1 {
            return Err(ClientError::NoTracks);
        }
        Ok(self
            .results
            .into_iter()
            .skip(1)
            .filter_map(|entry| match entry {
                LookupEntry::Track(track) => Some(track),
                LookupEntry::Collection(_) => None,
            })
            .collect())
    }
}

/// A single entry in a lookup response, discriminated by `wrapperType`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "wrapperType", rename_all = "camelCase")]
pub enum LookupEntry {
    /// Album metadata. Always the first entry; discarded by callers.
    Collection(CollectionSummary),
    /// A track under the collection.
    Track(Track),
}

/// The album metadata entry at the head of a lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    /// The collection identifier
    pub collection_id: u64,
    /// The album title
    pub collection_name: String,
    /// The album artist
    pub artist_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALBUM_WITH_TWO_TRACKS: &str = r#"{
        "resultCount": 3,
        "results": [
            {
                "wrapperType": "collection",
                "collectionId": 1440857781,
                "collectionName": "Scenery",
                "artistName": "Ryo Fukui"
            },
            {
                "wrapperType": "track",
                "trackId": 1440857988,
                "trackName": "It Could Happen to You",
                "artistName": "Ryo Fukui",
                "trackNumber": 2,
                "previewUrl": "https://audio.example/it-could-happen.m4a"
            },
            {
                "wrapperType": "track",
                "trackId": 1440857979,
                "trackName": "Early Summer",
                "artistName": "Ryo Fukui",
                "trackNumber": 1,
                "previewUrl": "https://audio.example/early-summer.m4a"
            }
        ]
    }"#;

    #[test]
    fn parses_collection_and_tracks() {
        let response: LookupResponse = serde_json::from_str(ALBUM_WITH_TWO_TRACKS).unwrap();
        assert_eq!(response.result_count, 3);
        assert_eq!(response.results.len(), 3);
        assert!(matches!(response.results[0], LookupEntry::Collection(_)));
        assert!(matches!(response.results[1], LookupEntry::Track(_)));
    }

    #[test]
    fn into_tracks_skips_album_metadata_and_keeps_source_order() {
        let response: LookupResponse = serde_json::from_str(ALBUM_WITH_TWO_TRACKS).unwrap();
        let tracks = response.into_tracks().unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].track_name, "It Could Happen to You");
        assert_eq!(tracks[1].track_name, "Early Summer");
    }

    #[test]
    fn into_tracks_rejects_zero_result_count() {
        let response: LookupResponse =
            serde_json::from_str(r#"{"resultCount": 0, "results": []}"#).unwrap();
        assert!(matches!(response.into_tracks(), Err(ClientError::NoTracks)));
    }

    #[test]
    fn into_tracks_rejects_absent_results() {
        let response: LookupResponse = serde_json::from_str(r#"{"resultCount": 0}"#).unwrap();
        assert!(matches!(response.into_tracks(), Err(ClientError::NoTracks)));
    }

    #[test]
    fn into_tracks_rejects_metadata_only_response() {
        let response: LookupResponse = serde_json::from_str(
            r#"{
                "resultCount": 1,
                "results": [
                    {
                        "wrapperType": "collection",
                        "collectionId": 1,
                        "collectionName": "Empty",
                        "artistName": "Nobody"
                    }
                ]
            }"#,
        )
        .unwrap();
        assert!(matches!(response.into_tracks(), Err(ClientError::NoTracks)));
    }

    #[test]
    fn track_entry_missing_fields_fails_to_parse() {
        // No previewUrl; the whole payload is rejected at the boundary.
        let result: Result<LookupResponse, _> = serde_json::from_str(
            r#"{
                "resultCount": 2,
                "results": [
                    {
                        "wrapperType": "collection",
                        "collectionId": 1,
                        "collectionName": "Broken",
                        "artistName": "Nobody"
                    },
                    {
                        "wrapperType": "track",
                        "trackId": 2,
                        "trackName": "Silent",
                        "artistName": "Nobody",
                        "trackNumber": 1
                    }
                ]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_wrapper_type_fails_to_parse() {
        let result: Result<LookupResponse, _> = serde_json::from_str(
            r#"{"resultCount": 1, "results": [{"wrapperType": "audiobook"}]}"#,
        );
        assert!(result.is_err());
    }
}
