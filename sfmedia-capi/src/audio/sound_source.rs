//! Types and accessors shared by sounds and sound streams.
use crate::ctypes::c_enum;
use crate::ffi::FallbackValue;
use sfmedia::audio::{Cone, SoundChannel, SoundStatus};
use sfmedia::system::Angle;

c_enum!(
    /// The playback state of a sound source.
    sfSoundStatus => SoundStatus {
        sfStopped = Stopped = 0,
        sfPaused = Paused = 1,
        sfPlaying = Playing = 2,
    }
);

impl FallbackValue for sfSoundStatus {
    fn fallback() -> Self {
        sfSoundStatus::sfStopped
    }
}

c_enum!(
    /// The speaker position of one interleaved channel.
    sfSoundChannel => SoundChannel {
        sfSoundChannelUnspecified = Unspecified = 0,
        sfSoundChannelMono = Mono = 1,
        sfSoundChannelFrontLeft = FrontLeft = 2,
        sfSoundChannelFrontRight = FrontRight = 3,
        sfSoundChannelFrontCenter = FrontCenter = 4,
        sfSoundChannelFrontLeftOfCenter = FrontLeftOfCenter = 5,
        sfSoundChannelFrontRightOfCenter = FrontRightOfCenter = 6,
        sfSoundChannelLowFrequencyEffects = LowFrequencyEffects = 7,
        sfSoundChannelBackLeft = BackLeft = 8,
        sfSoundChannelBackRight = BackRight = 9,
        sfSoundChannelBackCenter = BackCenter = 10,
        sfSoundChannelSideLeft = SideLeft = 11,
        sfSoundChannelSideRight = SideRight = 12,
        sfSoundChannelTopCenter = TopCenter = 13,
        sfSoundChannelTopFrontLeft = TopFrontLeft = 14,
        sfSoundChannelTopFrontRight = TopFrontRight = 15,
        sfSoundChannelTopFrontCenter = TopFrontCenter = 16,
        sfSoundChannelTopBackLeft = TopBackLeft = 17,
        sfSoundChannelTopBackRight = TopBackRight = 18,
        sfSoundChannelTopBackCenter = TopBackCenter = 19,
    }
);

/// Read a channel map from C. Returns `None` if `map` is null while `size` is not zero.
///
/// ## Safety
/// `map` must be null or valid for reads of `size` elements.
pub(crate) unsafe fn read_channel_map(map: *const sfSoundChannel, size: usize) -> Option<Vec<SoundChannel>> {
    if size == 0 {
        return Some(Vec::new());
    }
    if map.is_null() {
        return None;
    }
    let map = unsafe { std::slice::from_raw_parts(map, size) };
    Some(map.iter().copied().map(SoundChannel::from).collect())
}

/// Mirror a native channel map so a pointer to it can be handed out.
pub(crate) fn mirror_channel_map(map: &[SoundChannel]) -> Vec<sfSoundChannel> {
    map.iter().copied().map(sfSoundChannel::from).collect()
}

/// Hand out a mirrored channel map, writing its length to `count`.
///
/// ## Safety
/// `count` must be null or valid for writes.
pub(crate) unsafe fn export_channel_map(map: &[sfSoundChannel], count: *mut usize) -> *const sfSoundChannel {
    if let Some(count) = unsafe { count.as_mut() } {
        *count = map.len();
    }
    if map.is_empty() {
        std::ptr::null()
    } else {
        map.as_ptr()
    }
}

/// A directional sound cone. Angles are in degrees.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct sfSoundSourceCone {
    pub inner_angle: f32,
    pub outer_angle: f32,
    pub outer_gain: f32,
}

impl From<Cone> for sfSoundSourceCone {
    fn from(value: Cone) -> Self {
        sfSoundSourceCone {
            inner_angle: value.inner_angle.as_degrees(),
            outer_angle: value.outer_angle.as_degrees(),
            outer_gain: value.outer_gain,
        }
    }
}

impl From<sfSoundSourceCone> for Cone {
    fn from(value: sfSoundSourceCone) -> Self {
        Cone {
            inner_angle: Angle::degrees(value.inner_angle),
            outer_angle: Angle::degrees(value.outer_angle),
            outer_gain: value.outer_gain,
        }
    }
}

impl Default for sfSoundSourceCone {
    fn default() -> Self {
        Cone::FULL.into()
    }
}

crate::ffi::fallback_default!(sfSoundSourceCone);

/// Generate the playback controls and spatial properties of a sound source handle whose
/// `$field` implements [`SoundSource`](sfmedia::audio::SoundSource).
macro_rules! sound_source_fns {
    ($handle:ident, $field:ident) => {
        ::paste::paste! {
            $crate::ffi::extern_fn! {
                /// Start or resume playback.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _play>](source: *mut $handle) mut |source| {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.play();
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _pause>](source: *mut $handle) mut |source| {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.pause();
                }
            }

            $crate::ffi::extern_fn! {
                /// Stop playback and rewind to the beginning.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _stop>](source: *mut $handle) mut |source| {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.stop();
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getStatus>](source: *const $handle) |source| -> $crate::audio::sound_source::sfSoundStatus {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.status().into()
                }
            }

            $crate::audio::sound_source::sound_source_fns!(@value $handle, $field, Pitch, pitch, f32);
            $crate::audio::sound_source::sound_source_fns!(@value $handle, $field, DopplerFactor, doppler_factor, f32);
            $crate::audio::sound_source::sound_source_fns!(@value $handle, $field, DirectionalAttenuationFactor, directional_attenuation_factor, f32);
            $crate::audio::sound_source::sound_source_fns!(@value $handle, $field, MaxDistance, max_distance, f32);
            $crate::audio::sound_source::sound_source_fns!(@value $handle, $field, MinGain, min_gain, f32);
            $crate::audio::sound_source::sound_source_fns!(@value $handle, $field, MaxGain, max_gain, f32);
            $crate::audio::sound_source::sound_source_fns!(@value $handle, $field, SpatializationEnabled, spatialization_enabled, bool);
            $crate::audio::sound_source::sound_source_fns!(@value $handle, $field, RelativeToListener, relative_to_listener, bool);
            $crate::audio::sound_source::sound_source_fns!(@clamped $handle, $field, Volume, volume, set_volume, f32);
            $crate::audio::sound_source::sound_source_fns!(@clamped $handle, $field, Pan, pan, set_pan, f32);
            $crate::audio::sound_source::sound_source_fns!(@clamped $handle, $field, MinDistance, min_distance, set_min_distance, f32);
            $crate::audio::sound_source::sound_source_fns!(@clamped $handle, $field, Attenuation, attenuation, set_attenuation, f32);
            $crate::audio::sound_source::sound_source_fns!(@converted $handle, $field, Position, position, $crate::ctypes::sfVector3f);
            $crate::audio::sound_source::sound_source_fns!(@converted $handle, $field, Direction, direction, $crate::ctypes::sfVector3f);
            $crate::audio::sound_source::sound_source_fns!(@converted $handle, $field, Velocity, velocity, $crate::ctypes::sfVector3f);
            $crate::audio::sound_source::sound_source_fns!(@converted $handle, $field, Cone, cone, $crate::audio::sound_source::sfSoundSourceCone);
        }
    };
    (@value $handle:ident, $field:ident, $name:ident, $property:ident, $ty:ty) => {
        ::paste::paste! {
            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _set $name>](source: *mut $handle, value: $ty) mut |source| {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.properties_mut().$property = value;
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _get $name>](source: *const $handle) |source| -> $ty {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.properties().$property
                }
            }
        }
    };
    (@clamped $handle:ident, $field:ident, $name:ident, $property:ident, $setter:ident, $ty:ty) => {
        ::paste::paste! {
            $crate::ffi::extern_fn! {
                /// Out of range values are clamped.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _set $name>](source: *mut $handle, value: $ty) mut |source| {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.properties_mut().$setter(value);
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _get $name>](source: *const $handle) |source| -> $ty {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.properties().$property
                }
            }
        }
    };
    (@converted $handle:ident, $field:ident, $name:ident, $property:ident, $ty:ty) => {
        ::paste::paste! {
            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _set $name>](source: *mut $handle, value: $ty) mut |source| {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.properties_mut().$property = value.into();
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _get $name>](source: *const $handle) |source| -> $ty {
                    use ::sfmedia::audio::SoundSource;
                    source.$field.properties().$property.into()
                }
            }
        }
    };
}

pub(crate) use sound_source_fns;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn enum_parity() {
        assert_eq!(SoundStatus::Playing as i32, sfSoundStatus::sfPlaying as i32);
        assert_eq!(
            SoundChannel::TopBackCenter as i32,
            sfSoundChannel::sfSoundChannelTopBackCenter as i32
        );
        assert_eq!(
            SoundChannel::LowFrequencyEffects,
            SoundChannel::from(sfSoundChannel::sfSoundChannelLowFrequencyEffects)
        );
        assert_eq!(sfSoundStatus::sfStopped, sfSoundStatus::fallback());
    }

    #[test]
    fn every_channel_is_sequential_and_round_trips() {
        assert_eq!(20, sfSoundChannel::VARIANTS.len());
        for (index, &c) in sfSoundChannel::VARIANTS.iter().enumerate() {
            assert_eq!(index as i32, c as i32);
            assert_eq!(c as i32, c.to_native() as i32);
            assert_eq!(c, sfSoundChannel::from(SoundChannel::from(c)));
        }
        for (index, &c) in sfSoundStatus::VARIANTS.iter().enumerate() {
            assert_eq!(index as i32, c as i32);
            assert_eq!(c as i32, c.to_native() as i32);
        }
    }

    #[test]
    fn cone_in_degrees() {
        let cone = sfSoundSourceCone::from(Cone::FULL);
        assert_eq!(360.0, cone.inner_angle);
        let native = Cone::from(sfSoundSourceCone {
            inner_angle: 90.0,
            outer_angle: 180.0,
            outer_gain: 0.5,
        });
        assert!((native.outer_angle.as_radians() - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(0.5, native.outer_gain);
    }

    #[test]
    fn cone_round_trip_is_exact() {
        for degrees in [1.0, 7.0, 100.0, 123.0, 359.0, 0.1] {
            let cone = sfSoundSourceCone {
                inner_angle: degrees,
                outer_angle: 360.0 - degrees,
                outer_gain: 0.25,
            };
            assert_eq!(cone, sfSoundSourceCone::from(Cone::from(cone)));
        }
    }

    #[test]
    fn channel_maps() {
        let map = [
            sfSoundChannel::sfSoundChannelFrontLeft,
            sfSoundChannel::sfSoundChannelFrontRight,
        ];
        let native = unsafe { read_channel_map(map.as_ptr(), map.len()) }.unwrap();
        assert_eq!(vec![SoundChannel::FrontLeft, SoundChannel::FrontRight], native);
        assert_eq!(map.to_vec(), mirror_channel_map(&native));
        assert_eq!(Some(Vec::new()), unsafe { read_channel_map(std::ptr::null(), 0) });
        assert_eq!(None, unsafe { read_channel_map(std::ptr::null(), 2) });

        let mut count = 9;
        assert!(unsafe { export_channel_map(&[], &mut count) }.is_null());
        assert_eq!(0, count);
    }
}
