#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod driver;
pub mod input;
pub mod sequencer;
pub mod timer;

pub use driver::{SessionCommand, SessionEvent, run};
pub use input::SetInput;
pub use sequencer::{
    Position, SaveOutcome, Sequencer, SessionError, SessionOutcome, SessionStatus, Transition,
};
pub use timer::{ElapsedClock, RestTimer};
