use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{AgeRange, ArtistType, BodyType, SexualOrientation, SkinTone};
use crate::directory::domain::{SocialLinks, VisibleAttribute};

/// Accumulated values of the submission form across all steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    // Basic info
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    // Artist types
    #[serde(default)]
    pub types: Vec<ArtistType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_type: Option<String>,

    // Identity & attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<VisibleAttribute<SkinTone>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<VisibleAttribute<BodyType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<VisibleAttribute<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<VisibleAttribute<AgeRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexual_orientation: Option<VisibleAttribute<Vec<SexualOrientation>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_describe_orientation: Option<String>,

    // Social links
    #[serde(default)]
    pub socials: SocialLinks,
}

impl SubmissionDraft {
    /// Adds the type when absent, removes it otherwise.
    pub fn toggle_type(&mut self, kind: ArtistType) {
        match self.types.iter().position(|existing| *existing == kind) {
            Some(index) => {
                self.types.remove(index);
            }
            None => self.types.push(kind),
        }
    }

    /// Replaces the top-level fields present in `patch`; `null` clears optional fields.
    ///
    /// The draft is left untouched when the merged document does not deserialize.
    pub fn merge(&mut self, patch: Map<String, Value>) -> Result<(), serde_json::Error> {
        let mut document = match serde_json::to_value(&*self)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        for (field, value) in patch {
            document.insert(field, value);
        }

        let mut merged: SubmissionDraft = serde_json::from_value(Value::Object(document))?;
        merged.dedup_types();
        *self = merged;
        Ok(())
    }

    fn dedup_types(&mut self) {
        let mut seen = Vec::with_capacity(self.types.len());
        self.types.retain(|kind| {
            if seen.contains(kind) {
                false
            } else {
                seen.push(*kind);
                true
            }
        });
    }
}
