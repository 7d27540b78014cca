use crate::channel::SoundChannel;
use crate::error::{AudioError, Result};
use crate::sound_buffer::{resolve_channel_map, samples_to_time};
use crate::sound_source::{SoundSource, SoundStatus, SourceProperties};
use sfmedia_common::Time;

/// A block of samples handed to the mixer.
#[derive(Debug, Copy, Clone)]
pub struct Chunk<'a> {
    pub samples: &'a [i16],
    /// `false` once the source has no more data after this chunk.
    pub more: bool,
}

impl Chunk<'static> {
    pub const END: Chunk<'static> = Chunk {
        samples: &[],
        more: false,
    };
}

/// A source of audio that is produced on demand instead of being loaded up front.
pub trait SoundStream {
    /// Produce the next chunk of interleaved samples.
    fn on_get_data(&mut self) -> Chunk<'_>;

    /// Move the source to `offset`.
    fn on_seek(&mut self, offset: Time);

    /// Called at the end of the data when looping. Returns the sample position playback
    /// continues from, or `None` to stop.
    fn on_loop(&mut self) -> Option<u64> {
        default_on_loop(self)
    }
}

/// Rewind to the start and continue from sample zero.
pub fn default_on_loop<S: SoundStream + ?Sized>(stream: &mut S) -> Option<u64> {
    stream.on_seek(Time::ZERO);
    Some(0)
}

/// Sources may return a few empty chunks in a row before giving up.
const MAX_EMPTY_CHUNKS: usize = 3;

/// Drives a [`SoundStream`]: tracks playback state and applies the loop policy.
///
/// The mixer calls [`pull`](Stream::pull) whenever it needs more data.
#[derive(Debug)]
pub struct Stream<S> {
    source: S,
    properties: SourceProperties,
    status: SoundStatus,
    channel_count: u32,
    sample_rate: u32,
    channel_map: Vec<SoundChannel>,
    looping: bool,
    samples_processed: u64,
}

impl<S: SoundStream> Stream<S> {
    /// Wrap `source`. An empty `channel_map` selects the default layout.
    pub fn new(
        source: S,
        channel_count: u32,
        sample_rate: u32,
        channel_map: &[SoundChannel],
    ) -> Result<Stream<S>> {
        if channel_count == 0 {
            return Err(AudioError::InvalidChannelCount);
        }
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate);
        }

        Ok(Stream {
            source,
            properties: SourceProperties::default(),
            status: SoundStatus::Stopped,
            channel_count,
            sample_rate,
            channel_map: resolve_channel_map(channel_count, channel_map)?,
            looping: false,
            samples_processed: 0,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_map(&self) -> &[SoundChannel] {
        &self.channel_map
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn playing_offset(&self) -> Time {
        samples_to_time(self.samples_processed, self.sample_rate, self.channel_count)
    }

    /// Seek the source and move the playing position.
    pub fn set_playing_offset(&mut self, offset: Time) {
        let offset = offset.max(Time::ZERO);
        self.source.on_seek(offset);
        let frames = (offset.as_seconds() * self.sample_rate as f32) as u64;
        self.samples_processed = frames * self.channel_count as u64;
    }

    /// Append the next samples to `out`. Returns whether the stream keeps playing.
    pub fn pull(&mut self, out: &mut Vec<i16>) -> bool {
        if self.status != SoundStatus::Playing {
            return false;
        }

        for _ in 0..MAX_EMPTY_CHUNKS {
            let chunk = self.source.on_get_data();
            let count = chunk.samples.len();
            let more = chunk.more;
            out.extend_from_slice(chunk.samples);
            self.samples_processed += count as u64;

            if !more {
                if !self.looping {
                    tracing::debug!(samples = self.samples_processed, "stream finished");
                    self.status = SoundStatus::Stopped;
                    self.samples_processed = 0;
                    return false;
                }

                match self.source.on_loop() {
                    Some(position) => self.samples_processed = position,
                    None => {
                        self.status = SoundStatus::Stopped;
                        self.samples_processed = 0;
                        return false;
                    }
                }
            }

            if count > 0 {
                return true;
            }
        }

        true
    }
}

impl<S: SoundStream> SoundSource for Stream<S> {
    fn properties(&self) -> &SourceProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut SourceProperties {
        &mut self.properties
    }

    fn status(&self) -> SoundStatus {
        self.status
    }

    fn play(&mut self) {
        self.status = SoundStatus::Playing;
    }

    fn pause(&mut self) {
        if self.status == SoundStatus::Playing {
            self.status = SoundStatus::Paused;
        }
    }

    fn stop(&mut self) {
        self.status = SoundStatus::Stopped;
        self.set_playing_offset(Time::ZERO);
    }
}
