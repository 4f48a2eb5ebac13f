//! Interactive command loop.

mod command_loop;
mod console;
mod session;

pub use command_loop::{CommandLoop, LoopState};
pub use console::Console;
pub use session::Session;
