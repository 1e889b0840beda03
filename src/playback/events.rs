//! Typed reports from the playback surface, validated before they reach the sequencer.

use crate::error::PlaybackError;

/// Playback position of the loaded track. Fractions are in `0..=1`, seconds are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pub played_fraction: f64,
    pub played_seconds: f64,
    pub loaded_fraction: f64,
    pub loaded_seconds: f64,
}

impl Progress {
    pub const ZERO: Progress = Progress {
        played_fraction: 0.0,
        played_seconds: 0.0,
        loaded_fraction: 0.0,
        loaded_seconds: 0.0,
    };

    pub fn new(
        played_fraction: f64,
        played_seconds: f64,
        loaded_fraction: f64,
        loaded_seconds: f64,
    ) -> Result<Self, PlaybackError> {
        let values = [played_fraction, played_seconds, loaded_fraction, loaded_seconds];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PlaybackError::InvalidProgress("non-finite value"));
        }
        if values.iter().any(|v| *v < 0.0) {
            return Err(PlaybackError::InvalidProgress("negative value"));
        }
        Ok(Self {
            played_fraction: played_fraction.min(1.0),
            played_seconds,
            loaded_fraction: loaded_fraction.min(1.0),
            loaded_seconds,
        })
    }

    /// Builds a report from raw media element readings (`currentTime`, `duration`,
    /// end of the last buffered range).
    pub fn from_media(
        current_time: f64,
        duration: f64,
        buffered_end: f64,
    ) -> Result<Self, PlaybackError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(PlaybackError::InvalidProgress("duration unknown"));
        }
        if !current_time.is_finite() || current_time < 0.0 {
            return Err(PlaybackError::InvalidProgress("bad playback position"));
        }
        let buffered_end = if buffered_end.is_finite() {
            buffered_end.clamp(0.0, duration)
        } else {
            0.0
        };
        Self::new(
            current_time / duration,
            current_time.min(duration),
            buffered_end / duration,
            buffered_end,
        )
    }

    /// The report that marks a natural end of track.
    pub fn completed(duration: f64) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        Self {
            played_fraction: 1.0,
            played_seconds: duration,
            loaded_fraction: 1.0,
            loaded_seconds: duration,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.played_fraction >= 1.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    Play,
    Pause,
    Error(String),
    Progress(Progress),
}

/// Human-readable text for a `MediaError.code`.
pub fn media_error_message(code: u16) -> String {
    match code {
        1 => "Playback was aborted before the track loaded.".to_string(),
        2 => "A network error interrupted the download.".to_string(),
        3 => "The track could not be decoded.".to_string(),
        4 => "This track format is not supported by the browser.".to_string(),
        other => format!("Unknown playback error (code {other})."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_readings_become_fractions() {
        let progress = Progress::from_media(30.0, 120.0, 60.0).unwrap();
        assert_eq!(progress.played_fraction, 0.25);
        assert_eq!(progress.played_seconds, 30.0);
        assert_eq!(progress.loaded_fraction, 0.5);
        assert_eq!(progress.loaded_seconds, 60.0);
    }

    #[test]
    fn unknown_duration_is_rejected() {
        assert_eq!(
            Progress::from_media(1.0, f64::NAN, 0.0),
            Err(PlaybackError::InvalidProgress("duration unknown"))
        );
        assert!(Progress::from_media(1.0, 0.0, 0.0).is_err());
        assert!(Progress::from_media(1.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn negative_position_is_rejected() {
        assert!(Progress::from_media(-1.0, 100.0, 0.0).is_err());
        assert!(Progress::new(0.5, -2.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn overshoot_is_clamped() {
        let progress = Progress::from_media(130.0, 120.0, 500.0).unwrap();
        assert_eq!(progress.played_fraction, 1.0);
        assert_eq!(progress.played_seconds, 120.0);
        assert_eq!(progress.loaded_fraction, 1.0);
        assert!(progress.is_complete());
    }

    #[test]
    fn unbuffered_media_reports_nothing_loaded() {
        let progress = Progress::from_media(0.0, 90.0, f64::NAN).unwrap();
        assert_eq!(progress.loaded_fraction, 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn completed_marks_end_of_track() {
        assert!(Progress::completed(200.0).is_complete());
        assert_eq!(Progress::completed(f64::NAN).played_seconds, 0.0);
    }

    #[test]
    fn media_error_codes_have_messages() {
        assert!(media_error_message(4).contains("not supported"));
        assert_eq!(media_error_message(9), "Unknown playback error (code 9).");
    }
}
