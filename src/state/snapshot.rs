//! Activities Snapshot
//!
//! The activities mapping exactly as returned by a single read call.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Details of a single activity
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Registered emails, in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Remaining capacity. Negative when the activity is over capacity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// A named activity inside a snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

/// Full activities mapping, in the order the server sent its keys.
///
/// `serde_json` maps sort their keys, so the snapshot is deserialized
/// through its own visitor to keep the server's display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivitiesSnapshot {
    activities: Vec<Activity>,
}

impl ActivitiesSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an activity, replacing an existing one with the same name in place
    pub fn insert(&mut self, name: impl Into<String>, details: ActivityDetails) {
        let name = name.into();
        match self.activities.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.details = details,
            None => self.activities.push(Activity { name, details }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
        self.activities
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.details)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Activity names in display order
    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl<'de> Deserialize<'de> for ActivitiesSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = ActivitiesSnapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity names to activity details")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut snapshot = ActivitiesSnapshot::new();
                while let Some((name, details)) =
                    access.next_entry::<String, ActivityDetails>()?
                {
                    snapshot.insert(name, details);
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}
