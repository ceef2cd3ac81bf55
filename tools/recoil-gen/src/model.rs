//! Recoil profile data as exported by the web editor (`specs.json`)

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::path::Path;

use crate::error::{RecoilError, Result};

/// One magazine option for a weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magazine {
    pub size: u32,
}

/// Recoil pattern of a single weapon
///
/// `x`, `y` and `time_points` are position-aligned: index `i` of each
/// describes one shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoilProfile {
    pub name: String,
    pub mags: Vec<Magazine>,
    pub x: Vec<Number>,
    pub y: Vec<Number>,
    pub time_points: Vec<Number>,
}

impl RecoilProfile {
    /// Size of the last magazine entry, the one the firmware plays back
    pub fn terminal_mag_size(&self) -> u32 {
        // Non-empty once the profile is part of a RecoilTable
        self.mags.last().map_or(0, |mag| mag.size)
    }

    /// Sample axes in output order, labelled for diagnostics
    fn axes(&self) -> [(&'static str, &[Number]); 3] {
        [
            ("x", &self.x),
            ("y", &self.y),
            ("time_points", &self.time_points),
        ]
    }
}

/// Ordered, validated set of recoil profiles
///
/// Order is significant: the firmware indexes every generated array by
/// profile position.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoilTable {
    profiles: Vec<RecoilProfile>,
    max_length: usize,
}

impl RecoilTable {
    /// Validate profiles and compute the common sample stride
    pub fn new(profiles: Vec<RecoilProfile>) -> Result<Self> {
        if profiles.is_empty() {
            return Err(RecoilError::EmptyTable);
        }

        for (index, profile) in profiles.iter().enumerate() {
            if profile.mags.is_empty() {
                return Err(RecoilError::SchemaViolation {
                    index,
                    name: Some(profile.name.clone()),
                    reason: "mags must contain at least one magazine".to_string(),
                });
            }

            if profile.x.len() != profile.y.len() || profile.x.len() != profile.time_points.len()
            {
                tracing::warn!(
                    "{}: sample axes differ in length (x={}, y={}, time_points={})",
                    profile.name,
                    profile.x.len(),
                    profile.y.len(),
                    profile.time_points.len()
                );
            }
        }

        let max_length = profiles
            .iter()
            .map(|p| p.terminal_mag_size() as usize)
            .max()
            .unwrap_or(0);

        for profile in &profiles {
            for (axis, samples) in profile.axes() {
                if samples.len() > max_length {
                    tracing::warn!(
                        "{}: {} has {} samples, more than max length {}; keeping all of them",
                        profile.name,
                        axis,
                        samples.len(),
                        max_length
                    );
                }
            }
        }

        Ok(Self {
            profiles,
            max_length,
        })
    }

    /// Parse a `specs.json` document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json).map_err(RecoilError::MalformedInput)?;

        let items = match document {
            Value::Array(items) => items,
            other => {
                return Err(RecoilError::NotAnArray {
                    found: json_kind(&other),
                })
            }
        };

        let profiles = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_profile(index, item))
            .collect::<Result<Vec<_>>>()?;

        Self::new(profiles)
    }

    /// Read and parse a `specs.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| RecoilError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn profiles(&self) -> &[RecoilProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false; an empty table is rejected at construction
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Largest terminal magazine size, the per-profile stride of the data arrays
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

fn parse_profile(index: usize, item: Value) -> Result<RecoilProfile> {
    let name = item
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);

    let profile: RecoilProfile =
        serde_json::from_value(item).map_err(|e| RecoilError::SchemaViolation {
            index,
            name,
            reason: e.to_string(),
        })?;

    tracing::debug!(
        "profile #{}: {} ({} samples, magazine {})",
        index,
        profile.name,
        profile.x.len(),
        profile.terminal_mag_size()
    );

    Ok(profile)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
