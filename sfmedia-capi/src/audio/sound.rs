use crate::audio::sound_buffer::sfSoundBuffer;
use crate::audio::sound_source::sound_source_fns;
use crate::ctypes::sfTime;
use crate::error::assert_non_null;
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use sfmedia::audio::Sound;

/// Playback of a sound buffer.
///
/// The sound borrows its buffer, which must outlive it.
#[derive(Debug, Clone)]
pub struct sfSound {
    pub(crate) sound: Sound,
    pub(crate) buffer: *const sfSoundBuffer,
}

extern_fn! {
    /// Create a stopped sound playing `buffer`.
    ///
    /// ## Safety
    /// `buffer` must be null or valid, and must outlive the sound.
    fn sfSound_create(buffer: *const sfSoundBuffer) -> *mut sfSound {
        assert_non_null!(buffer);
        let sound = Sound::new(unsafe { &(*buffer).buffer });
        into_handle(sfSound { sound, buffer })
    }
}

handle_lifecycle!(sfSound);
sound_source_fns!(sfSound, sound);

extern_fn! {
    /// Play another buffer. The sound is stopped first.
    ///
    /// ## Safety
    /// `sound` must be null or valid. `buffer` must be null or valid, and must outlive its use by
    /// the sound.
    fn sfSound_setBuffer(sound: *mut sfSound, buffer: *const sfSoundBuffer) mut |sound| {
        assert_non_null!(buffer);
        sound.sound.set_buffer(unsafe { &(*buffer).buffer });
        sound.buffer = buffer;
    }
}

extern_fn! {
    /// The buffer last given to the sound.
    ///
    /// ## Safety
    /// `sound` must be null or valid.
    fn sfSound_getBuffer(sound: *const sfSound) |sound| -> *const sfSoundBuffer {
        sound.buffer
    }
}

extern_fn! {
    /// ## Safety
    /// `sound` must be null or valid.
    fn sfSound_setLooping(sound: *mut sfSound, looping: bool) mut |sound| {
        sound.sound.set_looping(looping);
    }
}

extern_fn! {
    /// ## Safety
    /// `sound` must be null or valid.
    fn sfSound_isLooping(sound: *const sfSound) |sound| -> bool {
        sound.sound.is_looping()
    }
}

extern_fn! {
    /// Jump to `offset` within the buffer. Has no effect on a stopped sound.
    ///
    /// ## Safety
    /// `sound` must be null or valid.
    fn sfSound_setPlayingOffset(sound: *mut sfSound, offset: sfTime) mut |sound| {
        sound.sound.set_playing_offset(offset.into());
    }
}

extern_fn! {
    /// ## Safety
    /// `sound` must be null or valid.
    fn sfSound_getPlayingOffset(sound: *const sfSound) |sound| -> sfTime {
        sound.sound.playing_offset().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::audio::sound_buffer::{sfSoundBuffer_createFromSamples, sfSoundBuffer_destroy};
    use crate::audio::sound_source::{sfSoundSourceCone, sfSoundStatus};
    use crate::ctypes::sfVector3f;

    fn ten_seconds() -> *mut sfSoundBuffer {
        let samples = vec![0i16; 80];
        unsafe { sfSoundBuffer_createFromSamples(samples.as_ptr(), 80, 1, 8, std::ptr::null(), 0) }
    }

    #[test]
    fn playback_states() {
        let buffer = ten_seconds();
        unsafe {
            let sound = sfSound_create(buffer);
            assert_eq!(buffer.cast_const(), sfSound_getBuffer(sound));
            assert_eq!(sfSoundStatus::sfStopped, sfSound_getStatus(sound));

            sfSound_play(sound);
            assert_eq!(sfSoundStatus::sfPlaying, sfSound_getStatus(sound));
            sfSound_pause(sound);
            assert_eq!(sfSoundStatus::sfPaused, sfSound_getStatus(sound));
            sfSound_setPlayingOffset(sound, sfTime { microseconds: 4_000_000 });
            assert_eq!(sfTime { microseconds: 4_000_000 }, sfSound_getPlayingOffset(sound));
            sfSound_stop(sound);
            assert_eq!(sfSoundStatus::sfStopped, sfSound_getStatus(sound));
            assert_eq!(sfTime::default(), sfSound_getPlayingOffset(sound));

            sfSound_setLooping(sound, true);
            assert!(sfSound_isLooping(sound));

            sfSound_destroy(sound);
            sfSoundBuffer_destroy(buffer);
        }
    }

    #[test]
    fn source_properties() {
        let buffer = ten_seconds();
        unsafe {
            let sound = sfSound_create(buffer);
            sfSound_setVolume(sound, 150.0);
            assert_eq!(100.0, sfSound_getVolume(sound));
            sfSound_setPan(sound, -3.0);
            assert_eq!(-1.0, sfSound_getPan(sound));
            sfSound_setPitch(sound, 2.0);
            sfSound_setRelativeToListener(sound, true);
            sfSound_setPosition(sound, sfVector3f { x: 1.0, y: 2.0, z: 3.0 });
            sfSound_setCone(
                sound,
                sfSoundSourceCone {
                    inner_angle: 45.0,
                    outer_angle: 90.0,
                    outer_gain: 0.25,
                },
            );

            let copy = sfSound_copy(sound);
            sfSound_setPitch(sound, 1.0);
            sfSound_setPosition(sound, sfVector3f::default());

            assert_eq!(2.0, sfSound_getPitch(copy));
            assert!(sfSound_getRelativeToListener(copy));
            assert_eq!(sfVector3f { x: 1.0, y: 2.0, z: 3.0 }, sfSound_getPosition(copy));
            let cone = sfSound_getCone(copy);
            assert_eq!(90.0, cone.outer_angle);
            assert_eq!(0.25, cone.outer_gain);
            assert_eq!(buffer.cast_const(), sfSound_getBuffer(copy));

            sfSound_destroy(sound);
            sfSound_destroy(copy);
            sfSoundBuffer_destroy(buffer);
        }
    }

    #[test]
    fn null_handles() {
        unsafe {
            assert!(sfSound_create(std::ptr::null()).is_null());
            assert_eq!(sfSoundStatus::sfStopped, sfSound_getStatus(std::ptr::null()));
            sfSound_play(std::ptr::null_mut());
            sfSound_destroy(std::ptr::null_mut());
        }
    }
}
