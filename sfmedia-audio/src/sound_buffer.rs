use crate::channel::SoundChannel;
use crate::error::{AudioError, Result};
use sfmedia_common::Time;

/// Interleaved 16-bit audio samples held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
    channel_count: u32,
    channel_map: Vec<SoundChannel>,
}

impl SoundBuffer {
    /// Build a buffer from interleaved samples.
    ///
    /// An empty `channel_map` selects the default layout for `channel_count`.
    pub fn from_samples(
        samples: &[i16],
        channel_count: u32,
        sample_rate: u32,
        channel_map: &[SoundChannel],
    ) -> Result<SoundBuffer> {
        if samples.is_empty() {
            return Err(AudioError::NoSamples);
        }
        if channel_count == 0 {
            return Err(AudioError::InvalidChannelCount);
        }
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate);
        }
        if samples.len() % channel_count as usize != 0 {
            return Err(AudioError::IncompleteFrame {
                samples: samples.len(),
                channels: channel_count,
            });
        }

        let channel_map = resolve_channel_map(channel_count, channel_map)?;

        tracing::debug!(
            samples = samples.len(),
            channel_count,
            sample_rate,
            "loaded sound buffer"
        );

        Ok(SoundBuffer {
            samples: samples.to_vec(),
            sample_rate,
            channel_count,
            channel_map,
        })
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_count(&self) -> u64 {
        self.samples.len() as u64
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    pub fn channel_map(&self) -> &[SoundChannel] {
        &self.channel_map
    }

    pub fn duration(&self) -> Time {
        samples_to_time(self.sample_count(), self.sample_rate, self.channel_count)
    }
}

pub(crate) fn resolve_channel_map(
    channel_count: u32,
    channel_map: &[SoundChannel],
) -> Result<Vec<SoundChannel>> {
    if channel_map.is_empty() {
        return Ok(SoundChannel::default_map(channel_count));
    }

    if channel_map.len() != channel_count as usize {
        return Err(AudioError::ChannelMapMismatch {
            map: channel_map.len(),
            channels: channel_count,
        });
    }

    Ok(channel_map.to_vec())
}

pub(crate) fn samples_to_time(samples: u64, sample_rate: u32, channel_count: u32) -> Time {
    let per_second = sample_rate as u64 * channel_count as u64;
    if per_second == 0 {
        return Time::ZERO;
    }
    Time::microseconds((samples as u128 * 1_000_000 / per_second as u128) as i64)
}
