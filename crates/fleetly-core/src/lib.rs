#![cfg_attr(not(test), no_std)]

//! RSVP presentation engine: tokenization, optical recognition point
//! lookup, pacing heuristics, and the playback state machine.
//!
//! The engine is platform-free and headless. Rendering goes through the
//! injected [`PresentationSink`]; time comes in through the caller's
//! monotonic millisecond clock via [`Player::tick`].

extern crate alloc;

pub mod orp;
pub mod pacing;
pub mod player;
pub mod render;
pub mod tokenize;

pub use orp::orp_offset;
pub use pacing::{MIN_WPM, delay_ms};
pub use player::{Player, RateConfig, TickResult};
pub use render::{PresentationSink, WordFrame};
pub use tokenize::{WordSequence, tokenize};
