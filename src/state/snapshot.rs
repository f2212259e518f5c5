// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key/value snapshot of a server payload.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::{SeSetting, SnapshotKey, VelisProperty};

/// Runtime state of a plant, as returned by `sePlantData`.
pub type PlantData = Snapshot<VelisProperty>;

/// Configuration of a plant, as returned by `plantSettings`.
pub type PlantSettings = Snapshot<SeSetting>;

/// Last fetched values of a flat JSON object, keyed by known field names.
///
/// Values are kept as raw JSON so that the server's types survive a round
/// trip. Typed accessors return `None` for missing keys and for values of an
/// unexpected JSON type.
///
/// # Examples
///
/// ```
/// use lydos_lib::state::PlantData;
/// use lydos_lib::types::VelisProperty;
///
/// let data: PlantData = serde_json::from_str(r#"{"mode": 2, "on": true, "extra": 1}"#).unwrap();
/// assert_eq!(data.get_u8(VelisProperty::Mode), Some(2));
/// assert_eq!(data.get_bool(VelisProperty::On), Some(true));
/// assert_eq!(data.get_f64(VelisProperty::ReqTemp), None);
/// assert_eq!(data.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<K: SnapshotKey> {
    values: HashMap<K, Value>,
}

impl<K: SnapshotKey> Default for Snapshot<K> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<K: SnapshotKey> Snapshot<K> {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a key.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&Value> {
        self.values.get(&key)
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.values.contains_key(&key)
    }

    /// Reads a flag.
    ///
    /// The server sends some flags as numbers; any non-zero number is `true`.
    #[must_use]
    pub fn get_bool(&self, key: K) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|v| v != 0.0),
            _ => None,
        }
    }

    /// Reads a number.
    #[must_use]
    pub fn get_f64(&self, key: K) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    /// Reads a small unsigned integer such as a mode value.
    #[must_use]
    pub fn get_u8(&self, key: K) -> Option<u8> {
        self.get(key)?.as_u64().and_then(|v| u8::try_from(v).ok())
    }

    /// Stores a value, replacing any previous one.
    pub fn insert(&mut self, key: K, value: impl Into<Value>) {
        self.values.insert(key, value.into());
    }

    /// Removes a key and returns its value.
    pub fn remove(&mut self, key: K) -> Option<Value> {
        self.values.remove(&key)
    }

    /// Number of known keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no known key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the present keys and their values.
    pub fn iter(&self) -> impl Iterator<Item = (K, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}

impl<K: SnapshotKey> FromIterator<(K, Value)> for Snapshot<K> {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<K: SnapshotKey> Serialize for Snapshot<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de, K: SnapshotKey> Deserialize<'de> for Snapshot<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor(PhantomData))
    }
}

struct SnapshotVisitor<K>(PhantomData<K>);

impl<'de, K: SnapshotKey> Visitor<'de> for SnapshotVisitor<K> {
    type Value = Snapshot<K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut values = HashMap::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            // Unknown fields are dropped.
            if let Some(key) = K::from_key(&name) {
                values.insert(key, value);
            }
        }
        Ok(Snapshot { values })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_keeps_known_keys_only() {
        let data: PlantData =
            serde_json::from_value(json!({"gw": "ABC", "reqTemp": 55.0, "wheType": 3})).unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.contains(VelisProperty::Gw));
        assert_eq!(data.get_f64(VelisProperty::ReqTemp), Some(55.0));
    }

    #[test]
    fn deserialize_rejects_non_object() {
        let result: Result<PlantSettings, _> = serde_json::from_value(json!([1, 2]));
        assert!(result.is_err());
    }

    #[test]
    fn bool_from_number() {
        let settings: PlantSettings =
            serde_json::from_value(json!({"SeAntilegionellaOnOff": 1.0})).unwrap();
        assert_eq!(settings.get_bool(SeSetting::AntilegionellaOnOff), Some(true));

        let settings: PlantSettings =
            serde_json::from_value(json!({"SeAntilegionellaOnOff": 0})).unwrap();
        assert_eq!(settings.get_bool(SeSetting::AntilegionellaOnOff), Some(false));
    }

    #[test]
    fn wrong_type_reads_as_none() {
        let data: PlantData = serde_json::from_value(json!({"temp": "hot", "on": null})).unwrap();
        assert_eq!(data.get_f64(VelisProperty::Temp), None);
        assert_eq!(data.get_bool(VelisProperty::On), None);
    }

    #[test]
    fn mode_out_of_u8_range_reads_as_none() {
        let data: PlantData = serde_json::from_value(json!({"mode": 300})).unwrap();
        assert_eq!(data.get_u8(VelisProperty::Mode), None);
    }

    #[test]
    fn insert_replaces_value() {
        let mut data = PlantData::new();
        data.insert(VelisProperty::ReqTemp, 50.0);
        data.insert(VelisProperty::ReqTemp, 60.5);
        assert_eq!(data.get_f64(VelisProperty::ReqTemp), Some(60.5));
        assert_eq!(data.remove(VelisProperty::ReqTemp), Some(json!(60.5)));
        assert!(data.is_empty());
    }

    #[test]
    fn serialize_uses_wire_names() {
        let mut settings = PlantSettings::new();
        settings.insert(SeSetting::MaxSetpointTemperature, 70.0);
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value, json!({"SeMaxSetpointTemperature": 70.0}));
    }
}
