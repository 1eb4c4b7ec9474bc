#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod dto;
pub mod rest;

pub use dto::{DecodeError, WorkoutDto};
pub use rest::Rest;
