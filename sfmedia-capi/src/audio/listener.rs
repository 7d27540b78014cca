//! The process-wide listener that all sounds are heard from.
use crate::audio::sound_source::sfSoundSourceCone;
use crate::ctypes::sfVector3f;
use crate::ffi::extern_fn;
use sfmedia::audio::listener;

/// The listener cone, with angles in degrees.
pub type sfListenerCone = sfSoundSourceCone;

extern_fn! {
    /// Set the master volume. Values are clamped to `[0, 100]`.
    fn sfListener_setGlobalVolume(volume: f32) {
        listener::set_global_volume(volume);
    }
}

extern_fn! {
    fn sfListener_getGlobalVolume() -> f32 {
        listener::global_volume()
    }
}

macro_rules! listener_vector {
    ($name:ident, $getter:ident, $setter:ident) => {
        ::paste::paste! {
            extern_fn! {
                fn [<sfListener_set $name>](value: sfVector3f) {
                    listener::$setter(value.into());
                }
            }

            extern_fn! {
                fn [<sfListener_get $name>]() -> sfVector3f {
                    listener::$getter().into()
                }
            }
        }
    };
}

listener_vector!(Position, position, set_position);
listener_vector!(Direction, direction, set_direction);
listener_vector!(Velocity, velocity, set_velocity);
listener_vector!(UpVector, up_vector, set_up_vector);

extern_fn! {
    fn sfListener_setCone(cone: sfListenerCone) {
        listener::set_cone(cone.into());
    }
}

extern_fn! {
    fn sfListener_getCone() -> sfListenerCone {
        listener::cone().into()
    }
}
