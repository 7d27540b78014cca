use crate::sound_buffer::SoundBuffer;
use crate::sound_source::{SoundSource, SoundStatus, SourceProperties};
use sfmedia_common::{Clock, Time};

/// Playback of a [`SoundBuffer`].
///
/// The sound tracks its playing position against a clock, scaled by the pitch. It
/// does not keep the buffer alive; only the buffer's duration is recorded.
#[derive(Debug, Clone)]
pub struct Sound {
    properties: SourceProperties,
    status: SoundStatus,
    duration: Time,
    looping: bool,
    offset: Time,
    clock: Clock,
}

impl Sound {
    pub fn new(buffer: &SoundBuffer) -> Sound {
        let mut clock = Clock::new();
        clock.reset();
        Sound {
            properties: SourceProperties::default(),
            status: SoundStatus::Stopped,
            duration: buffer.duration(),
            looping: false,
            offset: Time::ZERO,
            clock,
        }
    }

    /// Switch to another buffer. Playback is stopped first.
    pub fn set_buffer(&mut self, buffer: &SoundBuffer) {
        self.stop();
        self.duration = buffer.duration();
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.offset = self.raw_offset();
        self.clock.reset();
        if self.status_is(SoundStatus::Playing) {
            self.clock.start();
        }
        self.looping = looping;
    }

    /// The current position, zero once playback has stopped.
    pub fn playing_offset(&self) -> Time {
        let offset = self.raw_offset();
        if self.duration <= Time::ZERO {
            return Time::ZERO;
        }

        if self.looping {
            offset % self.duration
        } else if offset >= self.duration {
            Time::ZERO
        } else {
            offset
        }
    }

    /// Jump to `offset` while playing or paused. Offsets past the end are clamped to
    /// the end. Has no effect on a stopped sound.
    pub fn set_playing_offset(&mut self, offset: Time) {
        if self.status() == SoundStatus::Stopped {
            return;
        }
        self.offset = offset.clamp(Time::ZERO, self.duration);
        self.clock.reset();
        if self.status_is(SoundStatus::Playing) {
            self.clock.start();
        }
    }

    fn raw_offset(&self) -> Time {
        self.offset + self.clock.elapsed_time() * self.properties.pitch
    }

    fn status_is(&self, status: SoundStatus) -> bool {
        self.status == status
    }
}

impl SoundSource for Sound {
    fn properties(&self) -> &SourceProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut SourceProperties {
        &mut self.properties
    }

    fn status(&self) -> SoundStatus {
        if self.status == SoundStatus::Playing && !self.looping && self.raw_offset() >= self.duration
        {
            SoundStatus::Stopped
        } else {
            self.status
        }
    }

    fn play(&mut self) {
        if self.status() == SoundStatus::Stopped {
            self.offset = Time::ZERO;
            self.clock.reset();
        }
        self.clock.start();
        self.status = SoundStatus::Playing;
    }

    fn pause(&mut self) {
        if self.status() == SoundStatus::Playing {
            self.offset = self.raw_offset();
            self.clock.reset();
            self.status = SoundStatus::Paused;
        }
    }

    fn stop(&mut self) {
        self.offset = Time::ZERO;
        self.clock.reset();
        self.status = SoundStatus::Stopped;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn one_second() -> SoundBuffer {
        SoundBuffer::from_samples(&[0; 44100], 1, 44100, &[]).unwrap()
    }

    #[test]
    fn state_transitions() {
        let mut sound = Sound::new(&one_second());
        assert_eq!(SoundStatus::Stopped, sound.status());

        sound.play();
        assert_eq!(SoundStatus::Playing, sound.status());
        sound.pause();
        assert_eq!(SoundStatus::Paused, sound.status());
        sound.stop();
        assert_eq!(SoundStatus::Stopped, sound.status());
        assert_eq!(Time::ZERO, sound.playing_offset());
    }

    #[test]
    fn offset_is_kept_while_paused() {
        let mut sound = Sound::new(&one_second());
        sound.set_playing_offset(Time::milliseconds(400));
        assert_eq!(Time::ZERO, sound.playing_offset());

        sound.play();
        sound.set_playing_offset(Time::milliseconds(400));
        sound.pause();
        let paused = sound.playing_offset();
        assert!(paused >= Time::milliseconds(400));
        assert_eq!(paused, sound.playing_offset());
    }

    #[test]
    fn offset_clamped_to_duration() {
        let mut sound = Sound::new(&one_second());
        sound.play();
        sound.pause();
        sound.set_looping(true);
        sound.set_playing_offset(Time::seconds(5.0));
        assert_eq!(Time::ZERO, sound.playing_offset());
        assert!(sound.is_looping());
    }
}
