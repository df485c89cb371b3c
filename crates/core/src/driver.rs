//! Tick driver - advances a session by one discrete step
//!
//! One tick is: spawn if the session is waiting for a piece, apply at most one
//! input event, then apply gravity. An event that locks the piece or ends the
//! game skips gravity for that tick. A GameOver session is left untouched
//! until the host restarts it.

use crate::rng::ShapeSource;
use crate::session::GameSession;
use crate::snapshot::RenderSnapshot;
use crate::types::{InputEvent, SessionState};

/// Advance one tick and return what to draw.
pub fn tick<S: ShapeSource>(
    session: &mut GameSession<S>,
    event: Option<InputEvent>,
) -> RenderSnapshot {
    let mut out = RenderSnapshot::default();
    tick_into(session, event, &mut out);
    out
}

/// [`tick`] writing into a caller-owned snapshot.
pub fn tick_into<S: ShapeSource>(
    session: &mut GameSession<S>,
    event: Option<InputEvent>,
    out: &mut RenderSnapshot,
) {
    step(session, event);
    session.snapshot_into(out);
}

fn step<S: ShapeSource>(session: &mut GameSession<S>, event: Option<InputEvent>) {
    match session.state() {
        SessionState::GameOver => return,
        SessionState::Spawning => {
            if !session.spawn() {
                return;
            }
        }
        SessionState::Active => {}
    }

    if let Some(event) = event {
        session.apply_input(event);
    }
    if session.state() == SessionState::Active {
        session.apply_gravity();
    }
}
