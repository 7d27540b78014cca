//! Audio handles: buffers, sounds, callback-driven streams and recorders, and the listener.

pub mod listener;
pub mod sound;
pub mod sound_buffer;
pub mod sound_recorder;
pub mod sound_source;
pub mod sound_stream;
