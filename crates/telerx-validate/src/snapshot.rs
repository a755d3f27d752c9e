use serde::{Deserialize, Serialize};

/// One decoded device state snapshot.
///
/// Field names follow the upstream schema exactly — projection output must
/// use the original names, never display aliases. Every sub-structure is
/// optional at the decoding layer; presence requirements are enforced by
/// the validation tiers, not by serde.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub protocol_version: u32,
    #[serde(default)]
    pub system_monotonic_time_us: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<System>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meteo_internal: Option<MeteoInternal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lrf: Option<Lrf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps: Option<Gps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compass: Option<Compass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotary: Option<Rotary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_day: Option<CameraDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_heat: Option<CameraHeat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compass_calibration: Option<CompassCalibration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rec_osd: Option<RecOsd>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_cam_glass_heater: Option<DayCamGlassHeater>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_space_time: Option<ActualSpaceTime>,
}

/// Host computer health.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct System {
    #[serde(default)]
    pub cpu_temperature: f64,
    #[serde(default)]
    pub gpu_temperature: f64,
    #[serde(default)]
    pub cpu_load: f64,
    #[serde(default)]
    pub gpu_load: f64,
    #[serde(default)]
    pub rec_enabled: bool,
    #[serde(default)]
    pub low_disk_space: bool,
}

/// Internal environment sensors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeteoInternal {
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub pressure: f64,
}

/// Laser rangefinder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lrf {
    #[serde(default)]
    pub is_scanning: bool,
    #[serde(default)]
    pub is_measuring: bool,
    #[serde(default)]
    pub measure_id: u32,
    #[serde(default)]
    pub pointer_mode: u32,
}

/// Device clock state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeState {
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub manual_timestamp: u64,
    #[serde(default)]
    pub zone_id: i32,
    #[serde(default)]
    pub use_manual_time: bool,
}

/// Position fix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gps {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub fix_type: u32,
    #[serde(default)]
    pub use_manual: bool,
}

/// Magnetic heading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Compass {
    #[serde(default)]
    pub azimuth: f64,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default)]
    pub bank: f64,
    #[serde(default)]
    pub calibrating: bool,
}

/// Rotary platform pose and motion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotary {
    #[serde(default)]
    pub azimuth: f64,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default)]
    pub azimuth_speed: f64,
    #[serde(default)]
    pub elevation_speed: f64,
    #[serde(default)]
    pub is_moving: bool,
    #[serde(default)]
    pub is_scanning: bool,
}

/// Daylight camera.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraDay {
    #[serde(default)]
    pub focus_pos: f64,
    #[serde(default)]
    pub zoom_pos: f64,
    #[serde(default)]
    pub iris_pos: f64,
    #[serde(default)]
    pub auto_focus: bool,
    #[serde(default)]
    pub zoom_table_pos: u32,
}

/// Thermal camera.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraHeat {
    #[serde(default)]
    pub zoom_pos: f64,
    #[serde(default)]
    pub agc_mode: u32,
    #[serde(default)]
    pub filter: u32,
    #[serde(default)]
    pub auto_focus: bool,
    #[serde(default)]
    pub zoom_table_pos: u32,
}

/// Heading calibration progress.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompassCalibration {
    #[serde(default)]
    pub stage: u32,
    #[serde(default)]
    pub final_stage: u32,
    #[serde(default)]
    pub target_azimuth: f64,
    #[serde(default)]
    pub target_elevation: f64,
}

/// Recording and on-screen-display switches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecOsd {
    #[serde(default)]
    pub day_osd_enabled: bool,
    #[serde(default)]
    pub heat_osd_enabled: bool,
    #[serde(default)]
    pub screen: u32,
}

/// Daylight camera glass heater.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayCamGlassHeater {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub temperature: f64,
}

/// Composite space-time block: resolved pose, position and time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActualSpaceTime {
    #[serde(default)]
    pub azimuth: f64,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub timestamp: u64,
}

/// A snapshot with every required structure present, for tests across
/// this crate.
#[cfg(test)]
pub(crate) fn complete_snapshot() -> StateSnapshot {
    StateSnapshot {
        protocol_version: 1,
        system_monotonic_time_us: 0,
        system: Some(System::default()),
        meteo_internal: Some(MeteoInternal::default()),
        lrf: Some(Lrf::default()),
        time: Some(TimeState::default()),
        gps: Some(Gps {
            latitude: 48.2,
            longitude: 16.3,
            altitude: 180.0,
            ..Default::default()
        }),
        compass: Some(Compass::default()),
        rotary: Some(Rotary::default()),
        camera_day: Some(CameraDay::default()),
        camera_heat: Some(CameraHeat::default()),
        compass_calibration: Some(CompassCalibration::default()),
        rec_osd: Some(RecOsd::default()),
        day_cam_glass_heater: Some(DayCamGlassHeater::default()),
        actual_space_time: Some(ActualSpaceTime::default()),
    }
}
