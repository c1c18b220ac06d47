//! Ground motion readings and the data source's response envelope.

use serde::{Deserialize, Deserializer};

/// One timestamped ground-motion sample for a sensor.
///
/// Magnitudes are in the sensor's native units (µm/s², µm/s, µm).
/// Fields absent from the payload, or sent as `null`, default to zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reading {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "acc", deserialize_with = "null_as_default")]
    pub acceleration: f64,
    #[serde(rename = "vel", deserialize_with = "null_as_default")]
    pub velocity: f64,
    #[serde(rename = "disp", deserialize_with = "null_as_default")]
    pub displacement: f64,
    /// Epoch milliseconds
    #[serde(rename = "timestamp", deserialize_with = "null_as_default")]
    pub timestamp_millis: i64,
}

// Offline stations in the shared list report `null` for their values.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parsed body of one poll: `{ request: { GM: { list: [...] } } }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponseEnvelope {
    pub request: RequestSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestSection {
    #[serde(rename = "GM")]
    pub ground_motion: GroundMotion,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroundMotion {
    pub list: Vec<Reading>,
}

impl ResponseEnvelope {
    /// Build an envelope directly from readings, in source order.
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self {
            request: RequestSection {
                ground_motion: GroundMotion { list: readings },
            },
        }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.request.ground_motion.list
    }

    /// Take the reading for `sensor_id`, if the envelope carries one.
    ///
    /// Matching is exact; when the id repeats the first entry wins.
    pub fn select(self, sensor_id: &str) -> Option<Reading> {
        self.request
            .ground_motion
            .list
            .into_iter()
            .find(|reading| reading.id == sensor_id)
    }
}
