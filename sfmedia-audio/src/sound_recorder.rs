use crate::channel::SoundChannel;
use crate::error::{AudioError, Result};

/// Receives captured audio.
pub trait SoundRecorder {
    /// Called before capture begins. Returning `false` cancels the start.
    fn on_start(&mut self) -> bool {
        true
    }

    /// Called with each block of captured interleaved samples. Returning `false` stops
    /// the capture.
    fn on_process_samples(&mut self, samples: &[i16]) -> bool;

    /// Called once capture has stopped.
    fn on_stop(&mut self) {}
}

/// The name reported for the default capture device.
pub const DEFAULT_DEVICE: &str = "default";

/// Drives a [`SoundRecorder`] through a capture session.
///
/// Captured blocks are delivered with [`submit`](Recorder::submit), which is what the
/// capture thread calls.
#[derive(Debug)]
pub struct Recorder<R: SoundRecorder> {
    recorder: R,
    sample_rate: u32,
    channel_count: u32,
    device: String,
    capturing: bool,
}

impl<R: SoundRecorder> Recorder<R> {
    pub fn new(recorder: R) -> Recorder<R> {
        Recorder {
            recorder,
            sample_rate: 0,
            channel_count: 1,
            device: DEFAULT_DEVICE.to_string(),
            capturing: false,
        }
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    pub fn recorder_mut(&mut self) -> &mut R {
        &mut self.recorder
    }

    /// Begin a capture session at `sample_rate` samples per second.
    pub fn start(&mut self, sample_rate: u32) -> Result<()> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate);
        }
        if self.capturing {
            return Err(AudioError::AlreadyRecording);
        }
        if !self.recorder.on_start() {
            tracing::debug!("recorder refused to start");
            return Err(AudioError::RecordingRefused);
        }

        self.sample_rate = sample_rate;
        self.capturing = true;
        Ok(())
    }

    /// Deliver captured samples. Returns whether capture continues.
    pub fn submit(&mut self, samples: &[i16]) -> bool {
        if !self.capturing {
            return false;
        }
        if !self.recorder.on_process_samples(samples) {
            self.stop();
            return false;
        }
        true
    }

    /// End the capture session. Does nothing when not capturing.
    pub fn stop(&mut self) {
        if self.capturing {
            self.capturing = false;
            self.recorder.on_stop();
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// The sample rate of the current or last session, zero before the first.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    /// Select a capture device by name. Only the default device exists.
    pub fn set_device(&mut self, name: &str) -> bool {
        if name != DEFAULT_DEVICE {
            return false;
        }
        self.device = name.to_string();
        true
    }

    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    /// Mono and stereo capture are supported; other counts are rejected.
    pub fn set_channel_count(&mut self, channel_count: u32) -> Result<()> {
        if !(1..=2).contains(&channel_count) {
            return Err(AudioError::InvalidChannelCount);
        }
        self.channel_count = channel_count;
        Ok(())
    }

    pub fn channel_map(&self) -> Vec<SoundChannel> {
        SoundChannel::default_map(self.channel_count)
    }
}

/// Devices available for capture.
pub fn available_devices() -> Vec<String> {
    vec![DEFAULT_DEVICE.to_string()]
}

impl<R: SoundRecorder> Drop for Recorder<R> {
    fn drop(&mut self) {
        self.stop();
    }
}
