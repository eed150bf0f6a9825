use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    AgeRange, ArtistType, BodyType, SexualOrientation, SkinTone, SocialPlatform, Visibility,
};

/// Identifier wrapper for roster entries; also the profile route parameter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(pub String);

impl ArtistId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A self-declared attribute paired with the audience allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleAttribute<T> {
    pub value: T,
    #[serde(default)]
    pub visibility: Visibility,
}

impl<T> VisibleAttribute<T> {
    /// Attribute with the default `Private` visibility.
    pub fn private(value: T) -> Self {
        Self {
            value,
            visibility: Visibility::Private,
        }
    }

    pub fn with_visibility(value: T, visibility: Visibility) -> Self {
        Self { value, visibility }
    }
}

/// Platform to profile URL. Blank entries mean "no link".
pub type SocialLinks = BTreeMap<SocialPlatform, String>;

/// Directory profile for one artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub profile_picture: String,
    pub is_verified: bool,
    pub types: Vec<ArtistType>,
    #[serde(default)]
    pub socials: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<VisibleAttribute<SkinTone>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<VisibleAttribute<BodyType>>,
    /// Height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<VisibleAttribute<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<VisibleAttribute<AgeRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexual_orientation: Option<VisibleAttribute<Vec<SexualOrientation>>>,
}

impl Artist {
    /// Avatar fallback: first letter of each word, at most two.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }

    pub fn has_any_type<'a, I>(&self, wanted: I) -> bool
    where
        I: IntoIterator<Item = &'a ArtistType>,
    {
        wanted.into_iter().any(|kind| self.types.contains(kind))
    }

    /// Social links with a non-blank URL, in catalog order.
    pub fn active_socials(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        active_socials(&self.socials)
    }
}

pub(crate) fn active_socials(
    socials: &SocialLinks,
) -> impl Iterator<Item = (SocialPlatform, &str)> {
    socials
        .iter()
        .map(|(platform, url)| (*platform, url.trim()))
        .filter(|(_, url)| !url.is_empty())
}
