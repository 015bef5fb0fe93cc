use std::time::Duration;

pub struct PlaybackThread {
    logic_to_playback_tx: PlaybackThreadSendHandle,
    _playback_thread_handle: std::thread::JoinHandle<()>,
    playback_to_logic_rx: PlaybackToLogicRx,
}
pub type PlaybackToLogicRx = tokio::sync::broadcast::Receiver<PlaybackToLogicMessage>;
#[derive(Clone)]
pub struct PlaybackThreadSendHandle(std::sync::mpsc::Sender<LogicToPlaybackMessage>);
impl PlaybackThreadSendHandle {
    pub fn send(&self, message: LogicToPlaybackMessage) {
        self.0.send(message).unwrap();
    }
}
#[derive(Debug, Clone)]
pub enum PlaybackToLogicMessage {
    /// The preview drained the sink without being stopped: it reached its
    /// natural end.
    PreviewEnded,
}
#[derive(Debug, Clone)]
pub enum LogicToPlaybackMessage {
    PlayPreview(Vec<u8>),
    StopPreview,
}

impl PlaybackThread {
    pub fn new() -> Self {
        let (logic_to_playback_tx, logic_to_playback_rx) =
            std::sync::mpsc::channel::<LogicToPlaybackMessage>();
        let (playback_to_logic_tx, playback_to_logic_rx) =
            tokio::sync::broadcast::channel::<PlaybackToLogicMessage>(100);

        let playback_thread_handle = std::thread::spawn(move || {
            Self::run(logic_to_playback_rx, playback_to_logic_tx);
        });

        Self {
            logic_to_playback_tx: PlaybackThreadSendHandle(logic_to_playback_tx),
            _playback_thread_handle: playback_thread_handle,
            playback_to_logic_rx,
        }
    }

    pub fn send(&self, message: LogicToPlaybackMessage) {
        self.logic_to_playback_tx.send(message);
    }

    pub fn send_handle(&self) -> PlaybackThreadSendHandle {
        self.logic_to_playback_tx.clone()
    }

    pub fn subscribe(&self) -> PlaybackToLogicRx {
        self.playback_to_logic_rx.resubscribe()
    }

    fn run(
        playback_rx: std::sync::mpsc::Receiver<LogicToPlaybackMessage>,
        logic_tx: tokio::sync::broadcast::Sender<PlaybackToLogicMessage>,
    ) {
        use LogicToPlaybackMessage as LTPM;
        use PlaybackToLogicMessage as PTLM;

        let stream_handle = rodio::OutputStreamBuilder::open_default_stream().unwrap();
        let sink = rodio::Sink::connect_new(stream_handle.mixer());
        sink.set_volume(1.0);

        fn build_decoder(
            data: Vec<u8>,
        ) -> Result<rodio::decoder::Decoder<std::io::Cursor<Vec<u8>>>, rodio::decoder::DecoderError>
        {
            rodio::decoder::DecoderBuilder::new()
                .with_byte_len(data.len() as u64)
                .with_data(std::io::Cursor::new(data))
                .build()
        }

        let mut playing = false;

        loop {
            // Process all available messages without blocking
            while let Ok(msg) = playback_rx.try_recv() {
                match msg {
                    LTPM::PlayPreview(data) => match build_decoder(data) {
                        Ok(decoder) => {
                            sink.clear();
                            sink.append(decoder);
                            sink.play();
                            playing = true;
                        }
                        Err(e) => {
                            tracing::warn!("failed to decode preview: {e}");
                            playing = false;
                            let _ = logic_tx.send(PTLM::PreviewEnded);
                        }
                    },
                    LTPM::StopPreview => {
                        sink.clear();
                        playing = false;
                    }
                }
            }

            // A drained sink means the preview played to its natural end.
            // Previews are never re-appended: ending clears the slot.
            if playing && sink.empty() {
                playing = false;
                let _ = logic_tx.send(PTLM::PreviewEnded);
            }

            // Sleep for 10ms between iterations
            std::thread::sleep(Duration::from_millis(10));
        }
    }
}
