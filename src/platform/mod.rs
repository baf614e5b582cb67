//! Platform abstraction layer
//!
//! Host-side collaborators the simulation is driven through:
//! - Time/ticks (`Clock`, fixed-step `FrameTimer`)
//! - Input events (`InputSnapshot`)

pub mod input;
pub mod time;

pub use input::InputSnapshot;
pub use time::{Clock, FrameTimer, ManualClock, SystemClock};
