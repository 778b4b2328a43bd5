use alloc::string::String;
use chrono::{DateTime, Utc};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Identity of one play-through; every start and replay gets a fresh one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub(crate) u64);

impl SessionId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    StartScreen,
    Shuffling,
    Playing,
    Solved,
    MintingInProgress,
    MintSuccess,
    MintFailure,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Whether the puzzle of this session has been solved.
    pub const fn is_finished(self) -> bool {
        matches!(
            self,
            Self::Solved | Self::MintingInProgress | Self::MintSuccess | Self::MintFailure
        )
    }

    pub const fn accepts_play_again(self) -> bool {
        self.is_finished()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::StartScreen
    }
}

/// The single live play-through.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: SessionId,
    state: GameState,
    started_at: Option<DateTime<Utc>>,
    shuffle: Option<ShuffleWalk>,
    board: PlayBoard,
    mint: MintOutcome,
}

impl GameSession {
    fn idle(id: SessionId) -> Self {
        Self {
            id,
            state: GameState::StartScreen,
            started_at: None,
            shuffle: None,
            board: PlayBoard::default(),
            mint: MintOutcome::NotRequested,
        }
    }

    fn shuffling(id: SessionId, walk: ShuffleWalk, now: DateTime<Utc>) -> Self {
        Self {
            id,
            state: GameState::Shuffling,
            started_at: Some(now),
            shuffle: Some(walk),
            board: PlayBoard::default(),
            mint: MintOutcome::NotRequested,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn board(&self) -> &PlayBoard {
        &self.board
    }

    pub fn mint(&self) -> &MintOutcome {
        &self.mint
    }

    /// Intermediate grid of the shuffle walk, while it runs.
    pub fn shuffling_grid(&self) -> Option<Grid> {
        self.shuffle.as_ref().map(ShuffleWalk::grid)
    }

    /// `(taken, total)` shuffle steps, while the walk runs.
    pub fn shuffle_progress(&self) -> Option<(u32, u32)> {
        self.shuffle
            .as_ref()
            .map(|walk| (walk.steps_taken(), walk.steps_total()))
    }

    /// Grid to show: the scrambling grid while shuffling, the play grid otherwise.
    pub fn display_grid(&self) -> Grid {
        self.shuffling_grid().unwrap_or_else(|| self.board.grid())
    }

    pub fn elapsed(&self) -> String {
        format_elapsed(self.started_at, self.board.log())
    }
}

/// Owns the puzzle lifecycle and the only mutable session.
#[derive(Clone, Debug)]
pub struct PuzzleController {
    config: PuzzleConfig,
    rng: SmallRng,
    session: GameSession,
}

impl PuzzleController {
    pub fn new(config: PuzzleConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            session: GameSession::idle(SessionId(0)),
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn snapshot(&self) -> PuzzleView {
        PuzzleView {
            session: self.session.id,
            state: self.session.state,
            grid: self.session.display_grid(),
            elapsed: self.session.elapsed(),
            move_count: self.session.board.move_count(),
            mint: self.session.mint.clone(),
        }
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.check_state("start", |state| matches!(state, GameState::StartScreen))?;
        self.begin_session(now);
        Ok(())
    }

    /// Throws away the current session, including a mint still in flight,
    /// and shuffles a new board.
    pub fn play_again(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.check_state("play again", GameState::accepts_play_again)?;
        if self.session.state == GameState::MintingInProgress {
            log::debug!("abandoning pending mint of session {:?}", self.session.id);
        }
        self.begin_session(now);
        Ok(())
    }

    /// Advances the shuffle walk by one step, entering play once the step
    /// budget is spent.
    pub fn tick_shuffle(&mut self) -> Result<ShuffleProgress> {
        self.check_state("shuffle", |state| matches!(state, GameState::Shuffling))?;

        let walk = self
            .session
            .shuffle
            .as_mut()
            .ok_or(GameError::InvariantViolation)?;
        walk.step()?;

        if walk.is_done() {
            self.end_shuffle()?;
            Ok(ShuffleProgress::Done)
        } else {
            Ok(ShuffleProgress::Stepped)
        }
    }

    /// Runs every remaining shuffle step at once.
    pub fn finish_shuffle(&mut self) -> Result<()> {
        self.check_state("shuffle", |state| matches!(state, GameState::Shuffling))?;

        self.session
            .shuffle
            .as_mut()
            .ok_or(GameError::InvariantViolation)?
            .finish()?;
        self.end_shuffle()
    }

    /// Player clicked the cell at `position`. Clicks outside of play and
    /// clicks on cells that cannot slide are ignored.
    pub fn select_tile(&mut self, position: Position, now: DateTime<Utc>) -> MoveOutcome {
        if !self.session.state.is_playing() {
            log::trace!("ignoring click at {} while {:?}", position, self.session.state);
            return MoveOutcome::Rejected;
        }

        let outcome = self.session.board.attempt_move(position, now);
        if outcome == MoveOutcome::Solved {
            self.session.state = GameState::Solved;
            log::info!(
                "session {:?} solved in {} with {} moves",
                self.session.id,
                self.session.elapsed(),
                self.session.board.move_count()
            );
        }
        outcome
    }

    /// Marks the reward as pending and hands back the request to settle.
    pub fn request_mint(&mut self, recipient: impl Into<String>) -> Result<MintTicket> {
        self.check_state("mint", |state| matches!(state, GameState::Solved))?;

        self.session.state = GameState::MintingInProgress;
        self.session.mint = MintOutcome::Pending;
        log::debug!("session {:?} requested mint", self.session.id);
        Ok(MintTicket::new(self.session.id, recipient.into()))
    }

    /// Records a settled mint, unless it belongs to a session that has been
    /// replaced or has already recorded its result.
    pub fn apply_mint(&mut self, resolution: MintResolution) -> MintApplied {
        if resolution.session != self.session.id
            || self.session.state != GameState::MintingInProgress
        {
            log::warn!(
                "discarding mint result for session {:?}, current session {:?} is {:?}",
                resolution.session,
                self.session.id,
                self.session.state
            );
            return MintApplied::Stale;
        }

        match resolution.result {
            Ok(transaction_ref) => {
                log::info!("mint succeeded: {}", transaction_ref);
                self.session.state = GameState::MintSuccess;
                self.session.mint = MintOutcome::Success { transaction_ref };
            }
            Err(MintError { message }) => {
                log::info!("mint failed: {}", message);
                self.session.state = GameState::MintFailure;
                self.session.mint = MintOutcome::Failure { message };
            }
        }
        MintApplied::Recorded
    }

    fn begin_session(&mut self, now: DateTime<Utc>) {
        let id = SessionId(self.session.id.0 + 1);
        let walk = ShuffleWalk::new(self.rng.random(), self.config.shuffle_steps);
        log::debug!(
            "session {:?} shuffling {} steps",
            id,
            self.config.shuffle_steps
        );
        self.session = GameSession::shuffling(id, walk, now);
    }

    fn end_shuffle(&mut self) -> Result<()> {
        let walk = self
            .session
            .shuffle
            .take()
            .ok_or(GameError::InvariantViolation)?;
        let grid = walk.grid();
        grid.blank_position()?;

        self.session.board = PlayBoard::new(grid);
        self.session.state = if grid.is_solved() {
            log::info!("session {:?} shuffled back to solved", self.session.id);
            GameState::Solved
        } else {
            GameState::Playing
        };
        log::debug!("session {:?} is {:?}", self.session.id, self.session.state);
        Ok(())
    }

    fn check_state(&self, action: &'static str, accepts: impl Fn(GameState) -> bool) -> Result<()> {
        let state = self.session.state;
        if accepts(state) {
            Ok(())
        } else {
            log::warn!("cannot {} while {:?}", action, state);
            Err(GameError::WrongState { action, state })
        }
    }
}
