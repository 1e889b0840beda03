pub mod events;
pub mod sequencer;

pub use events::{media_error_message, PlaybackEvent, Progress};
pub use sequencer::{PlaybackState, Sequencer, SequencerOutcome};
