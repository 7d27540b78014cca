//! The process-wide audio listener.
//!
//! There is exactly one listener, shared by every sound in the process. Its state is
//! kept behind a global mutex, so these functions may be called from any thread.

use crate::sound_source::Cone;
use sfmedia_common::Vector3f;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Copy, Clone)]
struct ListenerState {
    global_volume: f32,
    position: Vector3f,
    direction: Vector3f,
    velocity: Vector3f,
    up_vector: Vector3f,
    cone: Cone,
}

static LISTENER: Mutex<ListenerState> = Mutex::new(ListenerState {
    global_volume: 100.0,
    position: Vector3f::new(0.0, 0.0, 0.0),
    direction: Vector3f::new(0.0, 0.0, -1.0),
    velocity: Vector3f::new(0.0, 0.0, 0.0),
    up_vector: Vector3f::new(0.0, 1.0, 0.0),
    cone: Cone::FULL,
});

fn state() -> MutexGuard<'static, ListenerState> {
    LISTENER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The master volume in `[0, 100]`.
pub fn global_volume() -> f32 {
    state().global_volume
}

pub fn set_global_volume(volume: f32) {
    state().global_volume = volume.clamp(0.0, 100.0);
}

pub fn position() -> Vector3f {
    state().position
}

pub fn set_position(position: Vector3f) {
    state().position = position;
}

pub fn direction() -> Vector3f {
    state().direction
}

pub fn set_direction(direction: Vector3f) {
    state().direction = direction;
}

pub fn velocity() -> Vector3f {
    state().velocity
}

pub fn set_velocity(velocity: Vector3f) {
    state().velocity = velocity;
}

pub fn up_vector() -> Vector3f {
    state().up_vector
}

pub fn set_up_vector(up_vector: Vector3f) {
    state().up_vector = up_vector;
}

pub fn cone() -> Cone {
    state().cone
}

pub fn set_cone(cone: Cone) {
    state().cone = cone;
}
