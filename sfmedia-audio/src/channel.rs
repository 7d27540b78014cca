/// The speaker position a channel of interleaved audio is meant for.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SoundChannel {
    #[default]
    Unspecified = 0,
    Mono,
    FrontLeft,
    FrontRight,
    FrontCenter,
    FrontLeftOfCenter,
    FrontRightOfCenter,
    LowFrequencyEffects,
    BackLeft,
    BackRight,
    BackCenter,
    SideLeft,
    SideRight,
    TopCenter,
    TopFrontLeft,
    TopFrontRight,
    TopFrontCenter,
    TopBackLeft,
    TopBackRight,
    TopBackCenter,
}

impl SoundChannel {
    /// The layout conventionally used for `channel_count` channels.
    pub fn default_map(channel_count: u32) -> Vec<SoundChannel> {
        use SoundChannel::*;
        match channel_count {
            0 => Vec::new(),
            1 => vec![Mono],
            2 => vec![FrontLeft, FrontRight],
            3 => vec![FrontLeft, FrontRight, FrontCenter],
            4 => vec![FrontLeft, FrontRight, BackLeft, BackRight],
            5 => vec![FrontLeft, FrontRight, FrontCenter, BackLeft, BackRight],
            6 => vec![
                FrontLeft,
                FrontRight,
                FrontCenter,
                LowFrequencyEffects,
                SideLeft,
                SideRight,
            ],
            n => vec![Unspecified; n as usize],
        }
    }
}
