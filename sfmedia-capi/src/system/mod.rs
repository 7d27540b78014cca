//! Time, clocks and custom input streams.

pub mod clock;
pub mod input_stream;
pub mod time;
