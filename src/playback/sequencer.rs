//! Playlist and playback sequencing.
//!
//! Loading a track and playing it are separate steps: `load_track` only stages
//! the track, the user starts it. Natural end of track advances through the
//! playlist (never the catalog) and starts the next entry immediately.

use crate::api::Track;
use crate::error::PlaybackError;
use crate::playback::events::{PlaybackEvent, Progress};
use dioxus::logger::tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub current_track: Option<Track>,
    pub playing: bool,
    pub progress: Progress,
}

/// What a surface event did to the sequencer.
#[derive(Debug, Clone, PartialEq)]
pub enum SequencerOutcome {
    Unchanged,
    Updated,
    /// End of track moved on to this playlist entry, which is now playing.
    Advanced(Track),
    /// End of track with nothing to advance to; playback stopped.
    Finished,
    Failed(PlaybackError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequencer {
    playlist: Vec<Track>,
    state: PlaybackState,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn progress(&self) -> Progress {
        self.state.progress
    }

    pub fn playlist_position(&self, track: &Track) -> Option<usize> {
        self.playlist.iter().position(|entry| entry.same_as(track))
    }

    pub fn is_current(&self, track: &Track) -> bool {
        self.current_track()
            .map(|current| current.same_as(track))
            .unwrap_or(false)
    }

    /// Stages `track` without starting it.
    pub fn load_track(&mut self, track: Track) {
        debug!(title = %track.title, "loading track");
        self.state.current_track = Some(track);
        self.state.playing = false;
        self.state.progress = Progress::ZERO;
    }

    /// Loads and starts `track` in one step.
    pub fn play_now(&mut self, track: Track) {
        self.load_track(track);
        self.state.playing = true;
    }

    /// Flips play/pause, loading the head of the playlist when nothing is loaded.
    /// Returns `false` when there is nothing to play.
    pub fn toggle_play_pause(&mut self) -> bool {
        if self.state.current_track.is_none() {
            let Some(first) = self.playlist.first().cloned() else {
                return false;
            };
            self.load_track(first);
        }
        self.state.playing = !self.state.playing;
        true
    }

    /// Appends `track` unless an entry with the same URL is already present.
    pub fn add_to_playlist(&mut self, track: Track) -> bool {
        if self.playlist_position(&track).is_some() {
            return false;
        }
        self.playlist.push(track);
        true
    }

    /// Removes the entry with `track`'s URL. The current track keeps playing
    /// even when it is the one removed.
    pub fn remove_from_playlist(&mut self, track: &Track) -> bool {
        match self.playlist_position(track) {
            Some(index) => {
                self.playlist.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_playlist(&mut self) {
        self.playlist.clear();
    }

    pub fn on_progress(&mut self, update: Progress) -> SequencerOutcome {
        if self.state.current_track.is_none() {
            return SequencerOutcome::Unchanged;
        }
        self.state.progress = update;
        if update.is_complete() {
            self.advance()
        } else {
            SequencerOutcome::Updated
        }
    }

    pub fn on_event(&mut self, event: PlaybackEvent) -> SequencerOutcome {
        match event {
            PlaybackEvent::Play => {
                if self.state.current_track.is_none() || self.state.playing {
                    return SequencerOutcome::Unchanged;
                }
                self.state.playing = true;
                SequencerOutcome::Updated
            }
            PlaybackEvent::Pause => {
                if !self.state.playing {
                    return SequencerOutcome::Unchanged;
                }
                self.state.playing = false;
                SequencerOutcome::Updated
            }
            PlaybackEvent::Error(message) => {
                SequencerOutcome::Failed(PlaybackError::Surface(message))
            }
            PlaybackEvent::Progress(progress) => self.on_progress(progress),
        }
    }

    fn advance(&mut self) -> SequencerOutcome {
        let next = self
            .state
            .current_track
            .as_ref()
            .and_then(|current| self.playlist_position(current))
            .and_then(|index| self.playlist.get(index + 1))
            .cloned();

        match next {
            Some(track) => {
                info!(title = %track.title, "advancing to next playlist entry");
                self.play_now(track.clone());
                SequencerOutcome::Advanced(track)
            }
            None => {
                self.state.playing = false;
                SequencerOutcome::Finished
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(n: u32) -> Track {
        Track::new(format!("Track {n}.mp3"), format!("https://cdn.test/t{n}"))
    }

    fn with_playlist(tracks: &[Track]) -> Sequencer {
        let mut sequencer = Sequencer::new();
        for t in tracks {
            sequencer.add_to_playlist(t.clone());
        }
        sequencer
    }

    fn halfway() -> Progress {
        Progress::new(0.5, 60.0, 0.8, 96.0).unwrap()
    }

    #[test]
    fn adding_the_same_url_twice_keeps_one_entry() {
        let mut sequencer = Sequencer::new();
        assert!(sequencer.add_to_playlist(track(1)));
        let renamed = Track::new("Other title", track(1).url);
        assert!(!sequencer.add_to_playlist(renamed));
        assert_eq!(sequencer.playlist(), &[track(1)]);
    }

    #[test]
    fn removing_an_absent_track_changes_nothing() {
        let mut sequencer = with_playlist(&[track(1), track(2)]);
        let before = sequencer.clone();
        assert!(!sequencer.remove_from_playlist(&track(3)));
        assert_eq!(sequencer, before);
    }

    #[test]
    fn removing_the_current_track_keeps_it_loaded() {
        let mut sequencer = with_playlist(&[track(1), track(2)]);
        sequencer.play_now(track(1));
        assert!(sequencer.remove_from_playlist(&track(1)));
        assert_eq!(sequencer.playlist(), &[track(2)]);
        assert_eq!(sequencer.current_track(), Some(&track(1)));
        assert!(sequencer.is_playing());
    }

    #[test]
    fn end_of_track_advances_to_next_entry_and_plays() {
        let mut sequencer = with_playlist(&[track(1), track(2), track(3)]);
        sequencer.load_track(track(2));

        let outcome = sequencer.on_progress(Progress::completed(180.0));

        assert_eq!(outcome, SequencerOutcome::Advanced(track(3)));
        assert_eq!(sequencer.current_track(), Some(&track(3)));
        assert!(sequencer.is_playing());
        assert_eq!(sequencer.progress(), Progress::ZERO);
    }

    #[test]
    fn end_of_last_entry_stops_and_keeps_track() {
        let mut sequencer = with_playlist(&[track(1), track(2)]);
        sequencer.play_now(track(2));

        let outcome = sequencer.on_progress(Progress::completed(180.0));

        assert_eq!(outcome, SequencerOutcome::Finished);
        assert_eq!(sequencer.current_track(), Some(&track(2)));
        assert!(!sequencer.is_playing());
        assert!(sequencer.progress().is_complete());
    }

    #[test]
    fn catalog_track_outside_playlist_never_advances() {
        let mut sequencer = with_playlist(&[track(1), track(2)]);
        sequencer.play_now(track(9));

        assert_eq!(
            sequencer.on_progress(Progress::completed(10.0)),
            SequencerOutcome::Finished
        );
        assert_eq!(sequencer.current_track(), Some(&track(9)));
        assert!(!sequencer.is_playing());
    }

    #[test]
    fn toggle_with_nothing_to_play_is_a_no_op() {
        let mut sequencer = Sequencer::new();
        assert!(!sequencer.toggle_play_pause());
        assert_eq!(sequencer.current_track(), None);
        assert!(!sequencer.is_playing());
    }

    #[test]
    fn toggle_loads_playlist_head_when_idle() {
        let mut sequencer = with_playlist(&[track(4), track(5)]);
        assert!(sequencer.toggle_play_pause());
        assert_eq!(sequencer.current_track(), Some(&track(4)));
        assert!(sequencer.is_playing());

        assert!(sequencer.toggle_play_pause());
        assert!(!sequencer.is_playing());
        assert_eq!(sequencer.current_track(), Some(&track(4)));
    }

    #[test]
    fn load_track_always_stops_and_resets_progress() {
        let mut sequencer = with_playlist(&[track(1)]);
        sequencer.play_now(track(1));
        sequencer.on_progress(halfway());
        assert!(sequencer.is_playing());

        sequencer.load_track(track(2));

        assert!(!sequencer.is_playing());
        assert_eq!(sequencer.progress().played_fraction, 0.0);
        assert_eq!(sequencer.current_track(), Some(&track(2)));
    }

    #[test]
    fn progress_overwrites_previous_report() {
        let mut sequencer = Sequencer::new();
        sequencer.play_now(track(1));
        assert_eq!(sequencer.on_progress(halfway()), SequencerOutcome::Updated);
        let earlier = Progress::new(0.1, 12.0, 0.8, 96.0).unwrap();
        sequencer.on_progress(earlier);
        assert_eq!(sequencer.progress(), earlier);
    }

    #[test]
    fn progress_without_a_track_is_ignored() {
        let mut sequencer = Sequencer::new();
        assert_eq!(
            sequencer.on_progress(Progress::completed(5.0)),
            SequencerOutcome::Unchanged
        );
        assert_eq!(sequencer.progress(), Progress::ZERO);
    }

    #[test]
    fn surface_play_requires_a_loaded_track() {
        let mut sequencer = Sequencer::new();
        assert_eq!(
            sequencer.on_event(PlaybackEvent::Play),
            SequencerOutcome::Unchanged
        );
        assert!(!sequencer.is_playing());

        sequencer.load_track(track(1));
        assert_eq!(sequencer.on_event(PlaybackEvent::Play), SequencerOutcome::Updated);
        assert!(sequencer.is_playing());
        assert_eq!(sequencer.on_event(PlaybackEvent::Pause), SequencerOutcome::Updated);
        assert!(!sequencer.is_playing());
    }

    #[test]
    fn surface_errors_leave_state_alone() {
        let mut sequencer = with_playlist(&[track(1)]);
        sequencer.play_now(track(1));
        let before = sequencer.clone();

        let outcome = sequencer.on_event(PlaybackEvent::Error("decode".to_string()));

        assert_eq!(
            outcome,
            SequencerOutcome::Failed(PlaybackError::Surface("decode".to_string()))
        );
        assert_eq!(sequencer, before);
    }

    #[test]
    fn progress_event_routes_to_auto_advance() {
        let mut sequencer = with_playlist(&[track(1), track(2)]);
        sequencer.play_now(track(1));
        let outcome = sequencer.on_event(PlaybackEvent::Progress(Progress::completed(3.0)));
        assert_eq!(outcome, SequencerOutcome::Advanced(track(2)));
    }

    #[test]
    fn clearing_playlist_keeps_current_track() {
        let mut sequencer = with_playlist(&[track(1), track(2)]);
        sequencer.play_now(track(2));
        sequencer.clear_playlist();
        assert!(sequencer.playlist().is_empty());
        assert!(sequencer.is_current(&track(2)));
        assert_eq!(sequencer.playlist_position(&track(2)), None);
    }
}
