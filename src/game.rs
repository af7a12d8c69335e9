/// Top-level controller: owns the state, the RNG, the config and the
/// high-score store, and is the only thing a front end talks to.

use rand::Rng;
use tracing::warn;

use crate::compute::{enter_game_over, init_state, restart, tick, toggle_pause};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::events::{AudioSink, FrameEvent};
use crate::high_scores::{HighScores, ScoreStore};
use crate::input::{Command, Flow, InputState};
use crate::snapshot::Snapshot;

pub struct Game<R: Rng, S: ScoreStore> {
    state: GameState,
    config: GameConfig,
    rng: R,
    store: S,
}

impl<R: Rng, S: ScoreStore> Game<R, S> {
    /// Load the high-score table (falling back to zeros) and start wave 1.
    pub fn new(config: GameConfig, rng: R, mut store: S) -> Self {
        let high_scores = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not read high scores, starting fresh");
            HighScores::default()
        });
        let state = init_state(&config, high_scores);
        Game { state, config, rng, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted set-ups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Run one frame and return what happened in it.
    pub fn update(&mut self, input: &InputState) -> Vec<FrameEvent> {
        tick(&mut self.state, input, &self.config, &mut self.rng);
        self.take_events()
    }

    /// Same as [`Game::update`], also forwarding sound cues to `audio`.
    pub fn update_with_audio(
        &mut self,
        input: &InputState,
        audio: &mut dyn AudioSink,
    ) -> Vec<FrameEvent> {
        let events = self.update(input);
        for cue in events.iter().filter_map(FrameEvent::sound) {
            audio.play(cue, cue.volume());
        }
        events
    }

    /// Quit forfeits a running game; a second quit at the game-over screen
    /// asks the front end to exit, saving the scores first if the game-over
    /// event was never drained.  Events raised here are delivered by the
    /// next [`Game::update`] or [`Game::take_events`].
    pub fn command(&mut self, command: Command) -> Flow {
        match command {
            Command::TogglePause => toggle_pause(&mut self.state),
            Command::Restart => {
                if self.state.status == GameStatus::GameOver {
                    restart(&mut self.state, &self.config);
                }
            }
            Command::Quit => {
                if self.state.status == GameStatus::GameOver {
                    self.persist_if_over();
                    return Flow::Exit;
                }
                enter_game_over(&mut self.state);
            }
        }
        Flow::Continue
    }

    /// Hand over pending events, persisting the high scores first if the
    /// game just ended.
    pub fn take_events(&mut self) -> Vec<FrameEvent> {
        self.persist_if_over();
        std::mem::take(&mut self.state.events)
    }

    /// Save once per game-over event; failures are only logged.
    fn persist_if_over(&mut self) {
        let over = self
            .state
            .events
            .iter()
            .any(|e| matches!(e, FrameEvent::GameOver { .. }));
        if over {
            if let Err(e) = self.store.save(&self.state.high_scores) {
                warn!(error = %e, "could not save high scores");
            }
        }
    }
}
