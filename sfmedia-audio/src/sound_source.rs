use sfmedia_common::{Angle, Vector3f};

/// Playback state of a sound source.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SoundStatus {
    #[default]
    Stopped = 0,
    Paused = 1,
    Playing = 2,
}

/// A directional attenuation cone.
///
/// Inside `inner_angle` the source plays at full gain; outside `outer_angle` it plays
/// at `outer_gain`, interpolating in between.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cone {
    pub inner_angle: Angle,
    pub outer_angle: Angle,
    pub outer_gain: f32,
}

impl Cone {
    /// An omnidirectional cone.
    pub const FULL: Cone = Cone {
        inner_angle: Angle::degrees(360.0),
        outer_angle: Angle::degrees(360.0),
        outer_gain: 1.0,
    };
}

impl Default for Cone {
    fn default() -> Self {
        Cone::FULL
    }
}

/// Spatial and mixing parameters common to every sound source.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SourceProperties {
    pub pitch: f32,
    pub pan: f32,
    pub volume: f32,
    pub spatialization_enabled: bool,
    pub position: Vector3f,
    pub direction: Vector3f,
    pub cone: Cone,
    pub velocity: Vector3f,
    pub doppler_factor: f32,
    pub directional_attenuation_factor: f32,
    pub relative_to_listener: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_gain: f32,
    pub max_gain: f32,
    pub attenuation: f32,
}

impl Default for SourceProperties {
    fn default() -> Self {
        SourceProperties {
            pitch: 1.0,
            pan: 0.0,
            volume: 100.0,
            spatialization_enabled: true,
            position: Vector3f::new(0.0, 0.0, 0.0),
            direction: Vector3f::new(0.0, 0.0, -1.0),
            cone: Cone::FULL,
            velocity: Vector3f::new(0.0, 0.0, 0.0),
            doppler_factor: 1.0,
            directional_attenuation_factor: 1.0,
            relative_to_listener: false,
            min_distance: 1.0,
            max_distance: f32::MAX,
            min_gain: 0.0,
            max_gain: 1.0,
            attenuation: 1.0,
        }
    }
}

impl SourceProperties {
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 100.0);
    }

    pub fn set_pan(&mut self, pan: f32) {
        self.pan = pan.clamp(-1.0, 1.0);
    }

    /// The minimum distance must stay strictly positive.
    pub fn set_min_distance(&mut self, distance: f32) {
        if distance > 0.0 {
            self.min_distance = distance;
        }
    }

    pub fn set_attenuation(&mut self, attenuation: f32) {
        self.attenuation = attenuation.max(0.0);
    }
}

/// Anything that can be played through the listener.
pub trait SoundSource {
    fn properties(&self) -> &SourceProperties;
    fn properties_mut(&mut self) -> &mut SourceProperties;

    fn status(&self) -> SoundStatus;
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
}
