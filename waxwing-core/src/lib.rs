pub mod app_state;
#[cfg(feature = "audio")]
pub mod playback_thread;
pub mod tokio_thread;

mod logic;
pub use logic::{AlertCallback, Logic};

use waxwing_itunes as wi;
