//! Sound streams whose samples come from C callbacks.
use crate::audio::sound_source::{
    export_channel_map, mirror_channel_map, read_channel_map, sfSoundChannel, sound_source_fns,
};
use crate::ctypes::sfTime;
use crate::error::{assert_some, try_export, SfError};
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use sfmedia::audio::sound_stream::default_on_loop;
use sfmedia::audio::{Chunk, SoundStream, Stream};
use sfmedia::system::Time;
use std::ffi::c_void;

/// A block of interleaved samples handed over by [`sfSoundStreamGetDataCallback`].
///
/// The samples must stay valid until the next call to the callback.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct sfSoundStreamChunk {
    pub samples: *const i16,
    pub sample_count: u32,
}

/// Fill `chunk` with the next samples. Return `false` when this is the last chunk.
pub type sfSoundStreamGetDataCallback =
    unsafe extern "C" fn(chunk: *mut sfSoundStreamChunk, user_data: *mut c_void) -> bool;
/// Move the source to `offset`.
pub type sfSoundStreamSeekCallback = unsafe extern "C" fn(offset: sfTime, user_data: *mut c_void);
/// Rewind for the next loop. Write the sample position playback resumes from to `position` and
/// return `true`, or return `false` to stop instead of looping.
pub type sfSoundStreamLoopCallback =
    unsafe extern "C" fn(position: *mut u64, user_data: *mut c_void) -> bool;

/// The callbacks behind an [`sfSoundStream`].
#[derive(Debug, Copy, Clone)]
pub(crate) struct CallbackStream {
    on_get_data: sfSoundStreamGetDataCallback,
    on_seek: Option<sfSoundStreamSeekCallback>,
    on_loop: Option<sfSoundStreamLoopCallback>,
    user_data: *mut c_void,
}

impl SoundStream for CallbackStream {
    fn on_get_data(&mut self) -> Chunk<'_> {
        let mut chunk = sfSoundStreamChunk {
            samples: std::ptr::null(),
            sample_count: 0,
        };
        let more = unsafe { (self.on_get_data)(&mut chunk, self.user_data) };
        let samples: &[i16] = if chunk.samples.is_null() || chunk.sample_count == 0 {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(chunk.samples, chunk.sample_count as usize) }
        };
        Chunk { samples, more }
    }

    fn on_seek(&mut self, offset: Time) {
        if let Some(on_seek) = self.on_seek {
            unsafe { on_seek(offset.into(), self.user_data) }
        }
    }

    fn on_loop(&mut self) -> Option<u64> {
        let Some(on_loop) = self.on_loop else {
            return default_on_loop(self);
        };

        let mut position = 0;
        unsafe { on_loop(&mut position, self.user_data) }.then_some(position)
    }
}

/// A sound source that requests its samples on demand.
///
/// The stream calls `onGetData` from [`sfSoundStream_pull`], which the audio device
/// calls from its mixing thread. The callbacks must be safe to call from that thread.
#[derive(Debug)]
pub struct sfSoundStream {
    pub(crate) stream: Stream<CallbackStream>,
    channel_map: Vec<sfSoundChannel>,
    mixed: Vec<i16>,
}

extern_fn! {
    /// Create a stream driven by callbacks.
    ///
    /// `onGetData` is required. A null `onSeek` ignores seeks. A null `onLoop` seeks back to the
    /// start and resumes from sample 0. An empty channel map selects the default layout for
    /// `channelCount`.
    ///
    /// ## Safety
    /// The callbacks must be safe to call with `userData` for as long as the stream exists.
    /// `channelMap` must be null or valid for reads of `channelMapSize` entries.
    fn sfSoundStream_create(
        on_get_data: Option<sfSoundStreamGetDataCallback>,
        on_seek: Option<sfSoundStreamSeekCallback>,
        on_loop: Option<sfSoundStreamLoopCallback>,
        channel_count: u32,
        sample_rate: u32,
        channel_map: *const sfSoundChannel,
        channel_map_size: usize,
        user_data: *mut c_void
    ) -> *mut sfSoundStream {
        assert_some!(on_get_data);
        let Some(channel_map) = (unsafe { read_channel_map(channel_map, channel_map_size) }) else {
            return SfError::InvalidParameter("channel_map").export();
        };
        let source = CallbackStream {
            on_get_data,
            on_seek,
            on_loop,
            user_data,
        };
        let stream = try_export!(Stream::new(source, channel_count, sample_rate, &channel_map));
        into_handle(sfSoundStream {
            channel_map: mirror_channel_map(stream.channel_map()),
            stream,
            mixed: Vec::new(),
        })
    }
}

handle_lifecycle!(@destroy sfSoundStream);
sound_source_fns!(sfSoundStream, stream);

extern_fn! {
    /// ## Safety
    /// `stream` must be null or valid.
    fn sfSoundStream_getChannelCount(stream: *const sfSoundStream) |stream| -> u32 {
        stream.stream.channel_count()
    }
}

extern_fn! {
    /// ## Safety
    /// `stream` must be null or valid.
    fn sfSoundStream_getSampleRate(stream: *const sfSoundStream) |stream| -> u32 {
        stream.stream.sample_rate()
    }
}

extern_fn! {
    /// The speaker position of each channel. The length is written to `count`.
    ///
    /// ## Safety
    /// `stream` must be null or valid. `count` must be null or valid for writes.
    fn sfSoundStream_getChannelMap(stream: *const sfSoundStream, count: *mut usize) |stream| -> *const sfSoundChannel {
        unsafe { export_channel_map(&stream.channel_map, count) }
    }
}

extern_fn! {
    /// Seek to `offset`. The seek callback is called with the clamped offset.
    ///
    /// ## Safety
    /// `stream` must be null or valid.
    fn sfSoundStream_setPlayingOffset(stream: *mut sfSoundStream, offset: sfTime) mut |stream| {
        stream.stream.set_playing_offset(offset.into());
    }
}

extern_fn! {
    /// ## Safety
    /// `stream` must be null or valid.
    fn sfSoundStream_getPlayingOffset(stream: *const sfSoundStream) |stream| -> sfTime {
        stream.stream.playing_offset().into()
    }
}

extern_fn! {
    /// ## Safety
    /// `stream` must be null or valid.
    fn sfSoundStream_setLooping(stream: *mut sfSoundStream, looping: bool) mut |stream| {
        stream.stream.set_looping(looping);
    }
}

extern_fn! {
    /// ## Safety
    /// `stream` must be null or valid.
    fn sfSoundStream_isLooping(stream: *const sfSoundStream) |stream| -> bool {
        stream.stream.is_looping()
    }
}

extern_fn! {
    /// Pull the next block of samples from a playing stream, as the mixing thread does.
    ///
    /// The samples are written to `samples` and `count`, and stay valid until the next pull or
    /// until the stream is destroyed. Returns `false` once the stream has stopped; the samples of
    /// the final chunk are still written.
    ///
    /// ## Safety
    /// `stream`, `samples` and `count` must be null or valid.
    fn sfSoundStream_pull(stream: *mut sfSoundStream, samples: *mut *const i16, count: *mut usize) mut |stream, samples, count| -> bool {
        stream.mixed.clear();
        let playing = stream.stream.pull(&mut stream.mixed);
        *samples = stream.mixed.as_ptr();
        *count = stream.mixed.len();
        playing
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::audio::sound_source::sfSoundStatus;

    struct Source {
        data: Vec<i16>,
        chunk: usize,
        cursor: usize,
        seeks: Vec<i64>,
    }

    impl Source {
        fn new(len: i16, chunk: usize) -> Box<Source> {
            Box::new(Source {
                data: (0..len).collect(),
                chunk,
                cursor: 0,
                seeks: Vec::new(),
            })
        }
    }

    unsafe extern "C" fn get_data(chunk: *mut sfSoundStreamChunk, user_data: *mut c_void) -> bool {
        let source = unsafe { &mut *user_data.cast::<Source>() };
        let end = (source.cursor + source.chunk).min(source.data.len());
        let chunk = unsafe { &mut *chunk };
        chunk.samples = source.data[source.cursor..].as_ptr();
        chunk.sample_count = (end - source.cursor) as u32;
        source.cursor = end;
        end < source.data.len()
    }

    unsafe extern "C" fn seek(offset: sfTime, user_data: *mut c_void) {
        let source = unsafe { &mut *user_data.cast::<Source>() };
        source.seeks.push(offset.microseconds);
        source.cursor = 0;
    }

    unsafe extern "C" fn never_loop(_position: *mut u64, _user_data: *mut c_void) -> bool {
        false
    }

    unsafe fn pull(stream: *mut sfSoundStream) -> (bool, Vec<i16>) {
        let mut samples = std::ptr::null();
        let mut count = 0;
        let playing = unsafe { sfSoundStream_pull(stream, &mut samples, &mut count) };
        let samples = if count == 0 {
            Vec::new()
        } else {
            unsafe { std::slice::from_raw_parts(samples, count) }.to_vec()
        };
        (playing, samples)
    }

    #[test]
    fn default_loop_seeks_to_start() {
        let mut source = Source::new(6, 4);
        let user_data = (&mut *source as *mut Source).cast();
        unsafe {
            let stream = sfSoundStream_create(Some(get_data), Some(seek), None, 1, 8, std::ptr::null(), 0, user_data);
            sfSoundStream_setLooping(stream, true);
            assert!(!pull(stream).0);

            sfSoundStream_play(stream);
            assert_eq!((true, vec![0, 1, 2, 3]), pull(stream));
            assert_eq!((true, vec![4, 5]), pull(stream));
            assert_eq!((true, vec![0, 1, 2, 3]), pull(stream));
            assert_eq!(sfSoundStatus::sfPlaying, sfSoundStream_getStatus(stream));

            sfSoundStream_destroy(stream);
        }
        assert_eq!(vec![0], source.seeks);
    }

    #[test]
    fn loop_callback_can_stop() {
        let mut source = Source::new(6, 4);
        let user_data = (&mut *source as *mut Source).cast();
        unsafe {
            let stream = sfSoundStream_create(Some(get_data), None, Some(never_loop), 1, 8, std::ptr::null(), 0, user_data);
            sfSoundStream_setLooping(stream, true);
            sfSoundStream_play(stream);
            assert_eq!((true, vec![0, 1, 2, 3]), pull(stream));
            assert_eq!((false, vec![4, 5]), pull(stream));
            assert_eq!(sfSoundStatus::sfStopped, sfSoundStream_getStatus(stream));
            sfSoundStream_destroy(stream);
        }
    }

    #[test]
    fn seeking_reaches_the_callback() {
        let mut source = Source::new(6, 4);
        let user_data = (&mut *source as *mut Source).cast();
        unsafe {
            let stream = sfSoundStream_create(Some(get_data), Some(seek), None, 1, 8, std::ptr::null(), 0, user_data);
            sfSoundStream_setPlayingOffset(stream, sfTime { microseconds: 2_000_000 });
            assert_eq!(sfTime { microseconds: 2_000_000 }, sfSoundStream_getPlayingOffset(stream));
            sfSoundStream_setPlayingOffset(stream, sfTime { microseconds: -5 });
            assert_eq!(sfTime::default(), sfSoundStream_getPlayingOffset(stream));
            sfSoundStream_destroy(stream);
        }
        assert_eq!(vec![2_000_000, 0], source.seeks);
    }

    #[test]
    fn null_seek_is_ignored() {
        let mut source = Source::new(4, 4);
        let user_data = (&mut *source as *mut Source).cast();
        unsafe {
            let stream = sfSoundStream_create(Some(get_data), None, None, 2, 8, std::ptr::null(), 0, user_data);
            sfSoundStream_setPlayingOffset(stream, sfTime { microseconds: 1_000_000 });
            sfSoundStream_play(stream);
            sfSoundStream_stop(stream);
            assert_eq!(sfSoundStatus::sfStopped, sfSoundStream_getStatus(stream));

            let mut count = 0;
            let map = sfSoundStream_getChannelMap(stream, &mut count);
            assert_eq!(2, count);
            assert_eq!(sfSoundChannel::sfSoundChannelFrontRight, *map.add(1));
            assert_eq!(2, sfSoundStream_getChannelCount(stream));
            assert_eq!(8, sfSoundStream_getSampleRate(stream));
            sfSoundStream_destroy(stream);
        }
        assert!(source.seeks.is_empty());
    }

    #[test]
    fn invalid_streams_are_rejected() {
        unsafe {
            let null = std::ptr::null_mut();
            assert!(sfSoundStream_create(None, None, None, 1, 8, std::ptr::null(), 0, null).is_null());
            assert!(sfSoundStream_create(Some(get_data), None, None, 0, 8, std::ptr::null(), 0, null).is_null());
            assert!(sfSoundStream_create(Some(get_data), None, None, 1, 0, std::ptr::null(), 0, null).is_null());
            sfSoundStream_destroy(std::ptr::null_mut());
        }
    }
}
