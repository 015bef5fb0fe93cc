use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
#[cfg(feature = "audio")]
use std::sync::Mutex;

#[cfg(feature = "audio")]
use crate::app_state::ToggleAction;
#[cfg(feature = "audio")]
use crate::playback_thread::{
    LogicToPlaybackMessage, PlaybackThread, PlaybackToLogicMessage, PlaybackToLogicRx,
};
use crate::{
    app_state::{AppState, FetchResolution, NO_TRACKS_ALERT},
    tokio_thread::TokioThread,
    wi,
};

/// Callback supplied by the front-end for surfacing user-visible alert text.
/// `None` clears any prior alert.
pub type AlertCallback = Arc<dyn Fn(Option<String>) + Send + Sync>;

pub struct Logic {
    tokio: TokioThread,
    state: Arc<RwLock<AppState>>,
    client: Arc<wi::Client>,
    #[cfg(feature = "audio")]
    playback: PlaybackThread,
    #[cfg(feature = "audio")]
    playback_events: Mutex<PlaybackToLogicRx>,
    on_alert: AlertCallback,
}

impl Logic {
    pub fn new(client: wi::Client, on_alert: AlertCallback) -> Self {
        let tokio = TokioThread::new();
        #[cfg(feature = "audio")]
        let playback = PlaybackThread::new();
        #[cfg(feature = "audio")]
        let playback_events = Mutex::new(playback.subscribe());

        Logic {
            tokio,
            state: Arc::new(RwLock::new(AppState::default())),
            client: Arc::new(client),
            #[cfg(feature = "audio")]
            playback,
            #[cfg(feature = "audio")]
            playback_events,
            on_alert,
        }
    }

    /// Fetch the track list for the given collection identifier. Runs once
    /// per distinct identifier; repeating the current one is a no-op.
    pub fn set_collection(&self, collection_id: &str) {
        let generation = {
            let mut state = self.write_state();
            if state.collection_id.as_deref() == Some(collection_id) {
                return;
            }
            state.collection_id = Some(collection_id.to_string());
            state.is_querying = true;
            state.fetch_generation += 1;
            state.fetch_generation
        };
        (self.on_alert)(None);

        let client = self.client.clone();
        let state = self.state.clone();
        let on_alert = self.on_alert.clone();
        let collection_id = collection_id.to_string();
        self.spawn(async move {
            let outcome = match client.lookup_collection_songs(&collection_id).await {
                Ok(response) => response.into_tracks(),
                Err(e) => Err(e),
            };
            if let Err(e) = &outcome {
                tracing::warn!("lookup for collection {collection_id} failed: {e}");
            }

            let resolution = state.write().unwrap().apply_fetch_outcome(generation, outcome);
            match resolution {
                FetchResolution::Stored => {
                    let count = state.read().unwrap().tracks.len();
                    tracing::info!("fetched {count} tracks for collection {collection_id}");
                }
                FetchResolution::NoTracks => {
                    on_alert(Self::resolution_alert(resolution));
                }
                FetchResolution::Superseded => {
                    tracing::debug!("discarding superseded lookup for collection {collection_id}");
                }
            }
        });
    }

    /// Toggle preview playback for a clicked track. If nothing is active,
    /// the clicked track's preview is downloaded and played; if anything is
    /// active, it is stopped and the slot cleared. Starting a different
    /// track takes a second click.
    #[cfg(feature = "audio")]
    pub fn toggle_preview(&self, track: &wi::Track) {
        let action = self.read_state().toggle_decision(track);
        match action {
            ToggleAction::Stop => {
                self.playback.send(LogicToPlaybackMessage::StopPreview);
                self.write_state().clear_active_preview();
            }
            ToggleAction::Start(active) => {
                self.write_state().active_preview = Some(active.clone());

                let client = self.client.clone();
                let state = self.state.clone();
                let playback = self.playback.send_handle();
                self.spawn(async move {
                    match client.fetch_preview(&active.preview_url).await {
                        Ok(data) => {
                            // The user may have toggled again while the
                            // download was in flight.
                            if state.read().unwrap().active_preview.as_ref() != Some(&active) {
                                return;
                            }
                            playback.send(LogicToPlaybackMessage::PlayPreview(data));
                        }
                        Err(e) => {
                            tracing::warn!(
                                "failed to fetch preview {}: {e}",
                                active.preview_url
                            );
                            let mut state = state.write().unwrap();
                            if state.active_preview.as_ref() == Some(&active) {
                                state.clear_active_preview();
                            }
                        }
                    }
                });
            }
        }
    }

    /// Drain events from the playback thread. Called once per frame by the
    /// front-end.
    #[cfg(feature = "audio")]
    pub fn process_playback_events(&self) {
        let mut rx = self.playback_events.lock().unwrap();
        while let Ok(event) = rx.try_recv() {
            match event {
                PlaybackToLogicMessage::PreviewEnded => {
                    self.write_state().clear_active_preview();
                }
            }
        }
    }

    pub fn is_querying(&self) -> bool {
        self.read_state().is_querying
    }

    pub fn get_state(&self) -> Arc<RwLock<AppState>> {
        self.state.clone()
    }
}
impl Logic {
    /// The alert text a fetch resolution surfaces: every failure collapses
    /// into the one user-visible message; a stored or superseded lookup
    /// stays silent.
    fn resolution_alert(resolution: FetchResolution) -> Option<String> {
        match resolution {
            FetchResolution::NoTracks => Some(NO_TRACKS_ALERT.to_string()),
            FetchResolution::Stored | FetchResolution::Superseded => None,
        }
    }

    fn spawn(&self, task: impl Future<Output = ()> + Send + Sync + 'static) {
        self.tokio.spawn(task);
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AppState> {
        self.state.write().unwrap()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn alert_callback_receives_the_exact_message_for_a_failed_lookup() {
        let received: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let on_alert: AlertCallback = Arc::new({
            let received = received.clone();
            move |message| {
                *received.lock().unwrap() = message;
            }
        });

        on_alert(Logic::resolution_alert(FetchResolution::NoTracks));

        assert_eq!(
            received.lock().unwrap().as_deref(),
            Some("No tracks found for album.")
        );
    }

    #[test]
    fn stored_and_superseded_lookups_stay_silent() {
        assert_eq!(Logic::resolution_alert(FetchResolution::Stored), None);
        assert_eq!(Logic::resolution_alert(FetchResolution::Superseded), None);
    }
}
