//! Fixed-step session tick and input dispatch
//!
//! Both entry points go through `dispatch`, the session's transition table:
//! the same activation input means "jump" while running and "restart" once
//! the session has ended.

use super::collision::{Collision, first_collision};
use super::state::{GameEvent, Session, SessionPhase};

/// External signals the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// One display frame elapsed
    Tick,
    /// The single "jump/restart" input
    Activate,
}

/// What a trigger does in a given phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Integrate physics, advance obstacles, check collisions
    Step,
    /// Simulation frozen, nothing changes
    Freeze,
    /// Apply the jump impulse
    Impulse,
    /// Discard everything and start a fresh session
    Restart,
}

/// The transition table
pub fn dispatch(phase: SessionPhase, trigger: Trigger) -> Action {
    match (phase, trigger) {
        (SessionPhase::Running, Trigger::Tick) => Action::Step,
        (SessionPhase::Running, Trigger::Activate) => Action::Impulse,
        (SessionPhase::Ended, Trigger::Tick) => Action::Freeze,
        (SessionPhase::Ended, Trigger::Activate) => Action::Restart,
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut Session) {
    apply(session, Trigger::Tick);
}

/// Handle the activation input; takes effect immediately
pub fn activate(session: &mut Session) {
    apply(session, Trigger::Activate);
}

fn apply(session: &mut Session, trigger: Trigger) {
    match dispatch(session.phase, trigger) {
        Action::Step => step(session),
        Action::Freeze => {}
        Action::Impulse => session.player.activate(session.tuning.jump_impulse),
        Action::Restart => session.reset(),
    }
}

fn step(session: &mut Session) {
    session.time_ticks += 1;

    session.player.integrate(session.tuning.gravity);

    let passes = session.pool.advance(
        &session.tuning,
        &session.layout,
        session.player.pos.x,
        &mut session.rng,
    );
    if passes > 0 {
        session.score += passes;
        log::debug!("Passed obstacle, score {}", session.score);
        session.events.push(GameEvent::Scored {
            score: session.score,
        });
    }

    // Passed pairs are checked too
    if let Some(cause) = first_collision(
        &session.player,
        &session.pool,
        session.tuning.pipe_width,
        session.layout.ground_line,
    ) {
        end(session, cause);
    }
}

fn end(session: &mut Session, cause: Collision) {
    session.phase = SessionPhase::Ended;
    session.collision = Some(cause);
    log::info!(
        "Session ended after {} ticks: {:?}, score {}",
        session.time_ticks,
        cause,
        session.score
    );
    session.events.push(GameEvent::Crashed {
        cause,
        score: session.score,
    });
}
