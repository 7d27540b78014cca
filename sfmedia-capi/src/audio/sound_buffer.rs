use crate::audio::sound_source::{
    export_channel_map, mirror_channel_map, read_channel_map, sfSoundChannel,
};
use crate::ctypes::sfTime;
use crate::error::{assert_non_null, try_export, SfError};
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use sfmedia::audio::SoundBuffer;

/// Interleaved 16-bit samples held in memory.
#[derive(Debug, Clone)]
pub struct sfSoundBuffer {
    pub(crate) buffer: SoundBuffer,
    channel_map: Vec<sfSoundChannel>,
}

impl sfSoundBuffer {
    fn new(buffer: SoundBuffer) -> Self {
        let channel_map = mirror_channel_map(buffer.channel_map());
        sfSoundBuffer {
            buffer,
            channel_map,
        }
    }
}

extern_fn! {
    /// Create a buffer from interleaved samples.
    ///
    /// An empty channel map selects the default layout for `channelCount`. Returns null if there
    /// are no samples, the counts or rate are zero, the samples do not fill whole frames, or the
    /// channel map does not have one entry per channel.
    ///
    /// ## Safety
    /// `samples` must be null or valid for reads of `sampleCount` samples. `channelMap` must be
    /// null or valid for reads of `channelMapSize` entries.
    fn sfSoundBuffer_createFromSamples(
        samples: *const i16,
        sample_count: u64,
        channel_count: u32,
        sample_rate: u32,
        channel_map: *const sfSoundChannel,
        channel_map_size: usize
    ) -> *mut sfSoundBuffer {
        assert_non_null!(samples);
        let Ok(sample_count) = usize::try_from(sample_count) else {
            return SfError::InvalidParameter("sample_count").export();
        };
        let Some(channel_map) = (unsafe { read_channel_map(channel_map, channel_map_size) }) else {
            return SfError::InvalidParameter("channel_map").export();
        };
        let samples = unsafe { std::slice::from_raw_parts(samples, sample_count) };
        let buffer = try_export!(SoundBuffer::from_samples(samples, channel_count, sample_rate, &channel_map));
        into_handle(sfSoundBuffer::new(buffer))
    }
}

handle_lifecycle!(sfSoundBuffer);

extern_fn! {
    /// The interleaved samples, valid until the buffer is destroyed.
    ///
    /// ## Safety
    /// `buffer` must be null or valid.
    fn sfSoundBuffer_getSamples(buffer: *const sfSoundBuffer) |buffer| -> *const i16 {
        buffer.buffer.samples().as_ptr()
    }
}

extern_fn! {
    /// The number of samples across all channels.
    ///
    /// ## Safety
    /// `buffer` must be null or valid.
    fn sfSoundBuffer_getSampleCount(buffer: *const sfSoundBuffer) |buffer| -> u64 {
        buffer.buffer.sample_count()
    }
}

extern_fn! {
    /// ## Safety
    /// `buffer` must be null or valid.
    fn sfSoundBuffer_getSampleRate(buffer: *const sfSoundBuffer) |buffer| -> u32 {
        buffer.buffer.sample_rate()
    }
}

extern_fn! {
    /// ## Safety
    /// `buffer` must be null or valid.
    fn sfSoundBuffer_getChannelCount(buffer: *const sfSoundBuffer) |buffer| -> u32 {
        buffer.buffer.channel_count()
    }
}

extern_fn! {
    /// The speaker position of each channel. The length is written to `count`.
    ///
    /// The returned array is owned by the buffer and valid until it is destroyed.
    ///
    /// ## Safety
    /// `buffer` must be null or valid. `count` must be null or valid for writes.
    fn sfSoundBuffer_getChannelMap(buffer: *const sfSoundBuffer, count: *mut usize) |buffer| -> *const sfSoundChannel {
        unsafe { export_channel_map(&buffer.channel_map, count) }
    }
}

extern_fn! {
    /// ## Safety
    /// `buffer` must be null or valid.
    fn sfSoundBuffer_getDuration(buffer: *const sfSoundBuffer) |buffer| -> sfTime {
        buffer.buffer.duration().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creation_and_queries() {
        let samples = [1i16, -1, 2, -2];
        unsafe {
            let buffer = sfSoundBuffer_createFromSamples(samples.as_ptr(), 4, 2, 4, std::ptr::null(), 0);
            assert_eq!(4, sfSoundBuffer_getSampleCount(buffer));
            assert_eq!(2, sfSoundBuffer_getChannelCount(buffer));
            assert_eq!(4, sfSoundBuffer_getSampleRate(buffer));
            assert_eq!(sfTime { microseconds: 500_000 }, sfSoundBuffer_getDuration(buffer));

            let stored = std::slice::from_raw_parts(sfSoundBuffer_getSamples(buffer), 4);
            assert_eq!(&samples, stored);

            let mut count = 0;
            let map = sfSoundBuffer_getChannelMap(buffer, &mut count);
            assert_eq!(2, count);
            assert_eq!(
                &[
                    sfSoundChannel::sfSoundChannelFrontLeft,
                    sfSoundChannel::sfSoundChannelFrontRight
                ],
                std::slice::from_raw_parts(map, count)
            );

            let copy = sfSoundBuffer_copy(buffer);
            sfSoundBuffer_destroy(buffer);
            assert_eq!(4, sfSoundBuffer_getSampleCount(copy));
            sfSoundBuffer_destroy(copy);
        }
    }

    #[test]
    fn explicit_channel_map() {
        let samples = [0i16; 6];
        let map = [
            sfSoundChannel::sfSoundChannelFrontCenter,
            sfSoundChannel::sfSoundChannelLowFrequencyEffects,
            sfSoundChannel::sfSoundChannelTopCenter,
        ];
        unsafe {
            let buffer = sfSoundBuffer_createFromSamples(samples.as_ptr(), 6, 3, 8000, map.as_ptr(), 3);
            let mut count = 0;
            let stored = sfSoundBuffer_getChannelMap(buffer, &mut count);
            assert_eq!(&map, std::slice::from_raw_parts(stored, count));
            sfSoundBuffer_destroy(buffer);

            assert!(sfSoundBuffer_createFromSamples(samples.as_ptr(), 6, 2, 8000, map.as_ptr(), 3).is_null());
        }
    }

    #[test]
    fn copy_owns_its_samples_and_map() {
        let samples = [3i16, 1, 4, 1, 5, 9];
        let map = [
            sfSoundChannel::sfSoundChannelFrontCenter,
            sfSoundChannel::sfSoundChannelBackLeft,
            sfSoundChannel::sfSoundChannelBackRight,
        ];
        unsafe {
            let buffer = sfSoundBuffer_createFromSamples(samples.as_ptr(), 6, 3, 8000, map.as_ptr(), 3);
            let copy = sfSoundBuffer_copy(buffer);
            assert_ne!(sfSoundBuffer_getSamples(buffer), sfSoundBuffer_getSamples(copy));
            sfSoundBuffer_destroy(buffer);

            assert_eq!(6, sfSoundBuffer_getSampleCount(copy));
            assert_eq!(3, sfSoundBuffer_getChannelCount(copy));
            assert_eq!(8000, sfSoundBuffer_getSampleRate(copy));
            assert_eq!(&samples, std::slice::from_raw_parts(sfSoundBuffer_getSamples(copy), 6));

            let mut count = 0;
            let stored = sfSoundBuffer_getChannelMap(copy, &mut count);
            assert_eq!(&map, std::slice::from_raw_parts(stored, count));
            assert_eq!(sfTime { microseconds: 250 }, sfSoundBuffer_getDuration(copy));
            sfSoundBuffer_destroy(copy);
        }
    }

    #[test]
    fn invalid_input_returns_null() {
        let samples = [0i16; 3];
        unsafe {
            assert!(sfSoundBuffer_createFromSamples(std::ptr::null(), 3, 1, 8000, std::ptr::null(), 0).is_null());
            assert!(sfSoundBuffer_createFromSamples(samples.as_ptr(), 0, 1, 8000, std::ptr::null(), 0).is_null());
            assert!(sfSoundBuffer_createFromSamples(samples.as_ptr(), 3, 2, 8000, std::ptr::null(), 0).is_null());
            assert!(sfSoundBuffer_createFromSamples(samples.as_ptr(), 3, 1, 0, std::ptr::null(), 0).is_null());
            assert!(sfSoundBuffer_createFromSamples(samples.as_ptr(), 3, 1, 8000, std::ptr::null(), 1).is_null());
            assert_eq!(0, sfSoundBuffer_getSampleCount(std::ptr::null()));
        }
    }
}
