//! Terminal front-end for the fleetly engine: a raw-mode session guard, an
//! ORP-anchored word renderer, and key/focus event translation.

mod input;
mod session;
mod sink;

pub use input::{Command, poll_command};
pub use session::TermSession;
pub use sink::TermSink;
