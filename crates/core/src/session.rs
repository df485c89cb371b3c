//! Game session - the single owned aggregate holding all game state
//!
//! Ties together the board, the active/next/held pieces, scoring and gravity,
//! and implements the Spawning -> Active -> (lock) -> Spawning cycle that ends
//! in GameOver. Illegal moves are silent no-ops: the `bool` results only tell
//! the caller whether anything changed.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{ShapeSource, SimpleRng};
use crate::scoring::{hard_drop_bonus, line_clear_score, next_gravity_interval, should_level_up};
use crate::types::{InputEvent, SessionState, ShapeId, INITIAL_GRAVITY_INTERVAL, STARTING_LEVEL};

/// Board rows removed by one lock, top to bottom.
pub type ClearedRows = ArrayVec<u8, 4>;

/// Outcome of the most recent lock, kept until an observer takes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Row indices as they were before the clear (e.g. for a flash effect).
    pub cleared_rows: ClearedRows,
    /// Points from the line clear table (already multiplied by level).
    pub line_clear_score: u32,
    /// Hard drop bonus credited just before the lock, 0 for other locks.
    pub drop_bonus: u32,
    pub leveled_up: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<S = SimpleRng> {
    board: Board,
    state: SessionState,
    active: Option<Piece>,
    /// Resting row of the active piece; `Some` exactly when `active` is.
    ghost_y: Option<i8>,
    next: ShapeId,
    hold: Option<ShapeId>,
    can_hold: bool,
    score: u32,
    level: u32,
    lines: u32,
    gravity_interval: u32,
    gravity_counter: u32,
    last_lock: Option<LockEvent>,
    source: S,
}

impl GameSession<SimpleRng> {
    /// Session drawing shapes from a seeded [`SimpleRng`].
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

impl<S: ShapeSource> GameSession<S> {
    /// Fresh session in the Spawning state; the first tick spawns.
    pub fn new(mut source: S) -> Self {
        let next = source.next_shape_id();
        Self {
            board: Board::new(),
            state: SessionState::Spawning,
            active: None,
            ghost_y: None,
            next,
            hold: None,
            can_hold: true,
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            gravity_interval: INITIAL_GRAVITY_INTERVAL,
            gravity_counter: 0,
            last_lock: None,
            source,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for hosts that set up positions (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn ghost_y(&self) -> Option<i8> {
        self.ghost_y
    }

    pub fn next_shape(&self) -> ShapeId {
        self.next
    }

    pub fn held_shape(&self) -> Option<ShapeId> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Ticks between forced drops at the current level.
    pub fn gravity_interval(&self) -> u32 {
        self.gravity_interval
    }

    pub fn gravity_counter(&self) -> u32 {
        self.gravity_counter
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Spawning -> Active: the next shape enters at the spawn origin.
    ///
    /// The next slot is refilled and hold becomes available again. If the new
    /// piece overlaps locked cells the session goes to GameOver instead and
    /// this returns false. Does nothing outside the Spawning state.
    pub fn spawn(&mut self) -> bool {
        if self.state != SessionState::Spawning {
            return false;
        }

        let shape = self.next;
        self.next = self.source.next_shape_id();
        self.can_hold = true;

        let piece = Piece::spawn(shape);
        if piece.collides(&self.board) {
            self.active = None;
            self.ghost_y = None;
            self.state = SessionState::GameOver;
            return false;
        }

        self.set_active(piece);
        self.state = SessionState::Active;
        true
    }

    /// Apply one input event to the active piece.
    ///
    /// Returns true if the event changed the session. Ignored unless Active.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        if self.state != SessionState::Active {
            return false;
        }

        match event {
            InputEvent::MoveLeft => self.try_shift(-1),
            InputEvent::MoveRight => self.try_shift(1),
            InputEvent::SoftDrop => {
                if !self.try_move_down() {
                    self.lock_active(0);
                }
                true
            }
            InputEvent::Rotate => self.try_rotate(),
            InputEvent::Hold => self.hold(),
            InputEvent::HardDrop => self.hard_drop(),
            InputEvent::Quit => {
                self.active = None;
                self.ghost_y = None;
                self.state = SessionState::GameOver;
                true
            }
        }
    }

    /// Advance the gravity counter by one tick.
    ///
    /// Once the counter exceeds the gravity interval the piece drops a row, or
    /// locks if it can't, and the counter restarts. Returns true on a forced
    /// drop or lock. Ignored unless Active.
    pub fn apply_gravity(&mut self) -> bool {
        if self.state != SessionState::Active {
            return false;
        }

        self.gravity_counter += 1;
        if self.gravity_counter <= self.gravity_interval {
            return false;
        }

        self.gravity_counter = 0;
        if !self.try_move_down() {
            self.lock_active(0);
        }
        true
    }

    /// Back to a fresh Spawning session with the same shape source.
    pub fn restart(&mut self) {
        self.board.clear();
        self.state = SessionState::Spawning;
        self.active = None;
        self.ghost_y = None;
        self.next = self.source.next_shape_id();
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.level = STARTING_LEVEL;
        self.lines = 0;
        self.gravity_interval = INITIAL_GRAVITY_INTERVAL;
        self.gravity_counter = 0;
        self.last_lock = None;
    }

    fn set_active(&mut self, piece: Piece) {
        self.ghost_y = Some(piece.ghost_y(&self.board));
        self.active = Some(piece);
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if piece.collides_at(&self.board, piece.x + dx, piece.y) {
            return false;
        }
        self.set_active(Piece {
            x: piece.x + dx,
            ..piece
        });
        true
    }

    /// One row down; the ghost row doesn't change when only `y` moves.
    fn try_move_down(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if piece.collides_at(&self.board, piece.x, piece.y + 1) {
            return false;
        }
        piece.y += 1;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let rotated = self.active.and_then(|piece| piece.rotated(&self.board));
        match rotated {
            Some(piece) => {
                self.set_active(piece);
                true
            }
            None => false,
        }
    }

    /// Set the active piece aside.
    ///
    /// With an empty slot the next shape spawns right away (and may end the
    /// game). With a full slot the shapes swap and the held one re-enters at
    /// the spawn origin without a collision check.
    fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match self.hold.replace(piece.shape) {
            None => {
                self.active = None;
                self.ghost_y = None;
                self.state = SessionState::Spawning;
                self.spawn();
            }
            Some(held) => self.set_active(Piece::spawn(held)),
        }

        self.can_hold = false;
        true
    }

    fn hard_drop(&mut self) -> bool {
        let (Some(piece), Some(ghost_y)) = (self.active.as_mut(), self.ghost_y) else {
            return false;
        };

        let rows = (ghost_y - piece.y).max(0) as u32;
        piece.y = ghost_y;

        let bonus = hard_drop_bonus(rows);
        self.score = self.score.saturating_add(bonus);
        self.gravity_counter = 0;
        self.lock_active(bonus);
        true
    }

    /// Merge the active piece, clear full rows, score, and go back to Spawning.
    fn lock_active(&mut self, drop_bonus: u32) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.ghost_y = None;
        self.board.lock(&piece);

        let mut event = LockEvent {
            drop_bonus,
            ..LockEvent::default()
        };

        let full = self.board.full_rows();
        if !full.is_empty() {
            self.board.clear_rows(&full);

            let cleared = full.len() as u32;
            event.line_clear_score = line_clear_score(full.len(), self.level);
            event.lines_cleared = cleared;
            event.cleared_rows = full.iter().map(|&y| y as u8).collect();
            self.score = self.score.saturating_add(event.line_clear_score);
            self.lines += cleared;

            if should_level_up(self.lines, self.level) {
                self.level += 1;
                self.gravity_interval = next_gravity_interval(self.gravity_interval);
                event.leveled_up = true;
            }
        }

        self.last_lock = Some(event);
        self.state = SessionState::Spawning;
    }
}
