use crate::wi::{ClientError, Track};

/// The one user-visible error message. Network failure, parse failure, and
/// empty or metadata-only result sets all collapse into it.
pub const NO_TRACKS_ALERT: &str = "No tracks found for album.";

/// The single active-playback slot: at most one track's preview may be
/// active at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePreview {
    pub track_id: u64,
    pub preview_url: String,
}

#[derive(Default)]
pub struct AppState {
    /// The current track set, sorted ascending by track number.
    pub tracks: Vec<Track>,
    /// Whether a lookup is outstanding (drives the loading spinner).
    pub is_querying: bool,
    /// The collection identifier the current track set belongs to.
    pub collection_id: Option<String>,
    /// Incremented each time a lookup is issued; completions carrying an
    /// older generation are discarded.
    pub fetch_generation: u64,
    pub active_preview: Option<ActivePreview>,
}

/// What a click on a track row should do, given the current slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleAction {
    /// Nothing is active: activate the clicked track and start its preview.
    Start(ActivePreview),
    /// Something is active (whichever track it is): stop it. Starting the
    /// newly clicked track takes a second click.
    Stop,
}

/// How a lookup completion was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResolution {
    /// The track set was stored.
    Stored,
    /// The lookup failed or had no usable tracks; the track set was cleared.
    NoTracks,
    /// A newer lookup superseded this one; nothing changed.
    Superseded,
}

impl AppState {
    /// Store a fetched track set, sorted ascending by track number. The sort
    /// is stable: duplicate numbers keep their order from the source
    /// sequence.
    pub fn store_tracks(&mut self, mut tracks: Vec<Track>) {
        tracks.sort_by_key(|track| track.track_number);
        self.tracks = tracks;
    }

    /// Apply a lookup completion tagged with the generation it was issued
    /// under. A stale completion changes nothing, including the querying
    /// flag: the newer lookup it lost to is still outstanding.
    pub fn apply_fetch_outcome(
        &mut self,
        generation: u64,
        outcome: Result<Vec<Track>, ClientError>,
    ) -> FetchResolution {
        if self.fetch_generation != generation {
            return FetchResolution::Superseded;
        }
        self.is_querying = false;
        match outcome {
            Ok(tracks) => {
                self.store_tracks(tracks);
                FetchResolution::Stored
            }
            Err(_) => {
                self.tracks.clear();
                FetchResolution::NoTracks
            }
        }
    }

    /// Decide what a click on `track` should do.
    pub fn toggle_decision(&self, track: &Track) -> ToggleAction {
        if self.active_preview.is_some() {
            ToggleAction::Stop
        } else {
            ToggleAction::Start(ActivePreview {
                track_id: track.track_id,
                preview_url: track.preview_url.clone(),
            })
        }
    }

    pub fn clear_active_preview(&mut self) {
        self.active_preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: u64, number: u32) -> Track {
        Track {
            track_id: id,
            track_name: format!("Track {id}"),
            artist_name: "Artist".to_string(),
            track_number: number,
            preview_url: format!("https://audio.example/{id}.m4a"),
        }
    }

    #[test]
    fn store_tracks_sorts_by_track_number() {
        let mut state = AppState::default();
        state.store_tracks(vec![track(1, 2), track(2, 1)]);
        assert_eq!(
            state.tracks.iter().map(|t| t.track_id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn store_tracks_keeps_source_order_for_duplicate_numbers() {
        let mut state = AppState::default();
        state.store_tracks(vec![track(10, 3), track(11, 3), track(12, 1)]);
        assert_eq!(
            state.tracks.iter().map(|t| t.track_id).collect::<Vec<_>>(),
            vec![12, 10, 11]
        );
    }

    #[test]
    fn fetch_outcome_stores_current_generation() {
        let mut state = AppState {
            fetch_generation: 1,
            is_querying: true,
            ..AppState::default()
        };
        let resolution = state.apply_fetch_outcome(1, Ok(vec![track(1, 1), track(2, 2)]));
        assert_eq!(resolution, FetchResolution::Stored);
        assert_eq!(state.tracks.len(), 2);
        assert!(!state.is_querying);
    }

    #[test]
    fn fetch_outcome_clears_tracks_on_error() {
        let mut state = AppState {
            fetch_generation: 1,
            is_querying: true,
            ..AppState::default()
        };
        state.store_tracks(vec![track(1, 1)]);
        let resolution = state.apply_fetch_outcome(1, Err(ClientError::NoTracks));
        assert_eq!(resolution, FetchResolution::NoTracks);
        assert!(state.tracks.is_empty());
        assert!(!state.is_querying);
    }

    #[test]
    fn stale_fetch_outcome_is_discarded() {
        let mut state = AppState {
            fetch_generation: 2,
            is_querying: true,
            ..AppState::default()
        };
        state.store_tracks(vec![track(1, 1), track(2, 2)]);

        // A completion from generation 1 arrives after generation 2 was issued.
        let resolution = state.apply_fetch_outcome(1, Ok(vec![track(9, 9)]));
        assert_eq!(resolution, FetchResolution::Superseded);
        assert_eq!(state.tracks.len(), 2);
        // Generation 2 is still in flight.
        assert!(state.is_querying);
    }

    #[test]
    fn stale_error_does_not_clear_fresh_tracks() {
        let mut state = AppState {
            fetch_generation: 2,
            ..AppState::default()
        };
        state.store_tracks(vec![track(1, 1)]);
        let resolution = state.apply_fetch_outcome(1, Err(ClientError::NoTracks));
        assert_eq!(resolution, FetchResolution::Superseded);
        assert_eq!(state.tracks.len(), 1);
    }

    #[test]
    fn click_with_empty_slot_starts_the_clicked_track() {
        let state = AppState::default();
        let clicked = track(1, 1);
        assert_eq!(
            state.toggle_decision(&clicked),
            ToggleAction::Start(ActivePreview {
                track_id: 1,
                preview_url: clicked.preview_url.clone(),
            })
        );
    }

    #[test]
    fn click_with_occupied_slot_stops_regardless_of_track() {
        let mut state = AppState::default();
        let playing = track(1, 1);
        state.active_preview = Some(ActivePreview {
            track_id: playing.track_id,
            preview_url: playing.preview_url.clone(),
        });

        // Clicking a different track still only stops the current preview.
        let other = track(2, 2);
        assert_eq!(state.toggle_decision(&other), ToggleAction::Stop);
        assert_eq!(state.toggle_decision(&playing), ToggleAction::Stop);
    }

    #[test]
    fn preview_ended_clears_the_slot() {
        let mut state = AppState::default();
        state.active_preview = Some(ActivePreview {
            track_id: 1,
            preview_url: "https://audio.example/1.m4a".to_string(),
        });
        state.clear_active_preview();
        assert!(state.active_preview.is_none());
    }
}
