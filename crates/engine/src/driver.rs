use std::time::Duration;

use log::warn;
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use liftlog_domain::{Seconds, WorkoutRepository};

use crate::input::SetInput;
use crate::sequencer::{SaveOutcome, SessionOutcome, Sequencer, Transition};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    CompleteSet(SetInput),
    SkipExercise,
    SkipRest,
    EndEarly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    RestStarted(Seconds),
    RestFinished,
    /// The session reached its natural end.
    Completed,
    /// The session was ended early.
    Aborted,
    /// A save attempt failed; the snapshot stays queued for retry.
    SaveFailed,
}

/// Drives a session on a single task: applies commands from the UI,
/// advances the clocks once per second and retries queued saves. Ends
/// when the session terminates or the command channel closes (screen
/// teardown discards the session).
pub async fn run<R: WorkoutRepository>(
    mut sequencer: Sequencer<R>,
    mut commands: mpsc::Receiver<SessionCommand>,
    events: mpsc::Sender<SessionEvent>,
) {
    let mut ticks = time::interval_at(Instant::now() + TICK, TICK);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        select! {
            _ = ticks.tick() => {
                if sequencer.tick() && events.send(SessionEvent::RestFinished).await.is_err() {
                    return;
                }
                if sequencer.has_pending_save()
                    && sequencer.flush_pending().await.is_err()
                    && events.send(SessionEvent::SaveFailed).await.is_err()
                {
                    return;
                }
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    return;
                };
                let result = match command {
                    SessionCommand::CompleteSet(input) => {
                        sequencer.complete_current_set(input).await
                    }
                    SessionCommand::SkipExercise => sequencer.skip_current_exercise(),
                    SessionCommand::SkipRest => sequencer.skip_rest(),
                    SessionCommand::EndEarly => sequencer.end_early().await,
                };
                match result {
                    Ok(transition) => {
                        let ended = transition.outcome.is_some();
                        if emit(&events, &transition).await.is_err() || ended {
                            return;
                        }
                    }
                    Err(err) => warn!("rejected command: {err}"),
                }
            }
        }
    }
}

async fn emit(
    events: &mpsc::Sender<SessionEvent>,
    transition: &Transition,
) -> Result<(), mpsc::error::SendError<SessionEvent>> {
    if let Some(SaveOutcome::Queued(_)) = &transition.save {
        events.send(SessionEvent::SaveFailed).await?;
    }
    if transition.rest_finished {
        events.send(SessionEvent::RestFinished).await?;
    }
    if let Some(rest) = transition.rest_started {
        events.send(SessionEvent::RestStarted(rest)).await?;
    }
    match transition.outcome {
        Some(SessionOutcome::Completed) => events.send(SessionEvent::Completed).await?,
        Some(SessionOutcome::Aborted) => events.send(SessionEvent::Aborted).await?,
        None => {}
    }
    Ok(())
}
