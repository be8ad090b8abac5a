//! Utility modules for file IO, Arrow column access and logging

pub mod arrow;
pub mod io;
pub mod logging;
