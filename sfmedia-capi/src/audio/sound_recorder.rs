//! Audio capture delivered to C callbacks.
use crate::audio::sound_source::{export_channel_map, mirror_channel_map, sfSoundChannel};
use crate::error::{assert_non_null, assert_some, try_export};
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use sfmedia::audio::{Recorder, SoundRecorder};
use std::ffi::{c_char, c_void, CStr, CString};

/// Called when capture starts. Return `false` to refuse.
pub type sfSoundRecorderStartCallback = unsafe extern "C" fn(user_data: *mut c_void) -> bool;
/// Called with each block of captured samples. Return `false` to stop capturing.
pub type sfSoundRecorderProcessCallback =
    unsafe extern "C" fn(samples: *const i16, sample_count: usize, user_data: *mut c_void) -> bool;
/// Called when capture stops.
pub type sfSoundRecorderStopCallback = unsafe extern "C" fn(user_data: *mut c_void);

#[derive(Debug, Copy, Clone)]
pub(crate) struct CallbackRecorder {
    on_start: Option<sfSoundRecorderStartCallback>,
    on_process: sfSoundRecorderProcessCallback,
    on_stop: Option<sfSoundRecorderStopCallback>,
    user_data: *mut c_void,
}

impl SoundRecorder for CallbackRecorder {
    fn on_start(&mut self) -> bool {
        match self.on_start {
            Some(on_start) => unsafe { on_start(self.user_data) },
            None => true,
        }
    }

    fn on_process_samples(&mut self, samples: &[i16]) -> bool {
        unsafe { (self.on_process)(samples.as_ptr(), samples.len(), self.user_data) }
    }

    fn on_stop(&mut self) {
        if let Some(on_stop) = self.on_stop {
            unsafe { on_stop(self.user_data) }
        }
    }
}

/// A capture session driven by callbacks.
///
/// Destroying a recorder that is still capturing stops it first, calling `onStop`.
#[derive(Debug)]
pub struct sfSoundRecorder {
    pub(crate) recorder: Recorder<CallbackRecorder>,
    device: CString,
    channel_map: Vec<sfSoundChannel>,
}

impl sfSoundRecorder {
    fn refresh(&mut self) {
        // device names never contain interior nul bytes
        self.device = CString::new(self.recorder.device()).unwrap_or_default();
        self.channel_map = mirror_channel_map(&self.recorder.channel_map());
    }
}

extern_fn! {
    /// Create a recorder. `onProcess` is required; `onStart` and `onStop` may be null.
    ///
    /// ## Safety
    /// The callbacks must be safe to call with `userData` for as long as the recorder exists.
    fn sfSoundRecorder_create(
        on_start: Option<sfSoundRecorderStartCallback>,
        on_process: Option<sfSoundRecorderProcessCallback>,
        on_stop: Option<sfSoundRecorderStopCallback>,
        user_data: *mut c_void
    ) -> *mut sfSoundRecorder {
        assert_some!(on_process);
        let mut recorder = sfSoundRecorder {
            recorder: Recorder::new(CallbackRecorder {
                on_start,
                on_process,
                on_stop,
                user_data,
            }),
            device: CString::default(),
            channel_map: Vec::new(),
        };
        recorder.refresh();
        into_handle(recorder)
    }
}

handle_lifecycle!(@destroy sfSoundRecorder);

extern_fn! {
    /// Start capturing at `sampleRate`. Returns `false` if the rate is zero, capture is already
    /// running, or `onStart` refused.
    ///
    /// ## Safety
    /// `recorder` must be null or valid.
    fn sfSoundRecorder_start(recorder: *mut sfSoundRecorder, sample_rate: u32) mut |recorder| -> bool {
        try_export!(recorder.recorder.start(sample_rate));
        true
    }
}

extern_fn! {
    /// Stop capturing. Does nothing if capture is not running.
    ///
    /// ## Safety
    /// `recorder` must be null or valid.
    fn sfSoundRecorder_stop(recorder: *mut sfSoundRecorder) mut |recorder| {
        recorder.recorder.stop();
    }
}

extern_fn! {
    /// Deliver captured samples to `onProcess`, as the capture thread does.
    ///
    /// Returns `false` if capture is not running, or if `onProcess` asked to stop.
    ///
    /// ## Safety
    /// `recorder` must be null or valid. `samples` must be valid for reads of `sampleCount`
    /// samples, and may be null when `sampleCount` is zero.
    fn sfSoundRecorder_submit(recorder: *mut sfSoundRecorder, samples: *const i16, sample_count: usize) mut |recorder| -> bool {
        let samples = if sample_count == 0 {
            &[][..]
        } else {
            assert_non_null!(samples);
            unsafe { std::slice::from_raw_parts(samples, sample_count) }
        };
        recorder.recorder.submit(samples)
    }
}

extern_fn! {
    /// Whether capture is running.
    ///
    /// ## Safety
    /// `recorder` must be null or valid.
    fn sfSoundRecorder_isCapturing(recorder: *const sfSoundRecorder) |recorder| -> bool {
        recorder.recorder.is_capturing()
    }
}

extern_fn! {
    /// The rate of the current or last capture, or 0 if capture never started.
    ///
    /// ## Safety
    /// `recorder` must be null or valid.
    fn sfSoundRecorder_getSampleRate(recorder: *const sfSoundRecorder) |recorder| -> u32 {
        recorder.recorder.sample_rate()
    }
}

extern_fn! {
    /// Whether the system can capture audio.
    fn sfSoundRecorder_isAvailable() -> bool {
        !sfmedia::audio::sound_recorder::available_devices().is_empty()
    }
}

static DEFAULT_DEVICE_NAME: &CStr = c"default";

extern_fn! {
    /// The name of the default capture device. The string is static.
    fn sfSoundRecorder_getDefaultDevice() -> *const c_char {
        DEFAULT_DEVICE_NAME.as_ptr()
    }
}

extern_fn! {
    /// Capture from the named device. Returns `false` if there is no such device.
    ///
    /// ## Safety
    /// `recorder` must be null or valid. `name` must be null or a valid nul-terminated string.
    fn sfSoundRecorder_setDevice(recorder: *mut sfSoundRecorder, name: *const c_char) mut |recorder| -> bool {
        assert_non_null!(name);
        let name = try_export!(unsafe { CStr::from_ptr(name) }.to_str());
        if !recorder.recorder.set_device(name) {
            tracing::warn!(device = name, "unknown capture device");
            return false;
        }
        recorder.refresh();
        true
    }
}

extern_fn! {
    /// The name of the device in use, valid until the device changes or the recorder is destroyed.
    ///
    /// ## Safety
    /// `recorder` must be null or valid.
    fn sfSoundRecorder_getDevice(recorder: *const sfSoundRecorder) |recorder| -> *const c_char {
        recorder.device.as_ptr()
    }
}

extern_fn! {
    /// Capture 1 (mono) or 2 (stereo) channels. Other counts are ignored.
    ///
    /// ## Safety
    /// `recorder` must be null or valid.
    fn sfSoundRecorder_setChannelCount(recorder: *mut sfSoundRecorder, channel_count: u32) mut |recorder| {
        try_export!(recorder.recorder.set_channel_count(channel_count));
        recorder.refresh();
    }
}

extern_fn! {
    /// ## Safety
    /// `recorder` must be null or valid.
    fn sfSoundRecorder_getChannelCount(recorder: *const sfSoundRecorder) |recorder| -> u32 {
        recorder.recorder.channel_count()
    }
}

extern_fn! {
    /// The speaker position of each captured channel. The length is written to `count`.
    ///
    /// ## Safety
    /// `recorder` must be null or valid. `count` must be null or valid for writes.
    fn sfSoundRecorder_getChannelMap(recorder: *const sfSoundRecorder, count: *mut usize) |recorder| -> *const sfSoundChannel {
        unsafe { export_channel_map(&recorder.channel_map, count) }
    }
}
