use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("no samples were provided")]
    NoSamples,
    #[error("channel count must be non-zero")]
    InvalidChannelCount,
    #[error("sample rate must be non-zero")]
    InvalidSampleRate,
    #[error("channel map has {map} entries but there are {channels} channels")]
    ChannelMapMismatch { map: usize, channels: u32 },
    #[error("{samples} samples cannot be split into frames of {channels} channels")]
    IncompleteFrame { samples: usize, channels: u32 },
    #[error("recording was refused by the recorder")]
    RecordingRefused,
    #[error("the recorder is already capturing")]
    AlreadyRecording,
}

pub type Result<T> = std::result::Result<T, AudioError>;
