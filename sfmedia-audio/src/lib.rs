//! Audio for sfmedia.
//!
//! Sound sources are modelled without an output device: playback state and
//! positions are tracked here, and the mixer side pulls samples from streams or
//! pushes captured samples into recorders.

/// Speaker positions of interleaved channels.
pub mod channel;
/// Errors from building buffers, streams and recorders.
pub mod error;
pub mod listener;
/// Playback of in-memory buffers.
pub mod sound;
/// In-memory sample storage.
pub mod sound_buffer;
/// Capture sessions.
pub mod sound_recorder;
/// Properties and status shared by every sound source.
pub mod sound_source;
/// On-demand sample sources.
pub mod sound_stream;

pub use channel::SoundChannel;
pub use error::{AudioError, Result};
pub use sound::Sound;
pub use sound_buffer::SoundBuffer;
pub use sound_recorder::{Recorder, SoundRecorder};
pub use sound_source::{Cone, SoundSource, SoundStatus, SourceProperties};
pub use sound_stream::{Chunk, SoundStream, Stream};
