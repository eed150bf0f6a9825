//! Closed option sets shared by the directory, the submission schemas, and the HTTP catalog.
//!
//! Every enum serializes as its display label so seed files and form payloads can use the
//! same vocabulary the UI presents.

use serde::{Deserialize, Serialize};

/// Categories an artist can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArtistType {
    Model,
    Musician,
    Painter,
    Actor,
    Dancer,
    #[serde(rename = "DJ")]
    Dj,
    Photographer,
    #[serde(rename = "Digital Artist")]
    DigitalArtist,
    /// Free-form category chosen in the submission form; described by `otherType`.
    Other,
}

impl ArtistType {
    /// Types offered by the directory filter.
    pub const fn directory() -> [Self; 8] {
        [
            Self::Model,
            Self::Musician,
            Self::Painter,
            Self::Actor,
            Self::Dancer,
            Self::Dj,
            Self::Photographer,
            Self::DigitalArtist,
        ]
    }

    /// Types offered by the submission form, including the "Other" choice.
    pub const fn selectable() -> [Self; 9] {
        [
            Self::Model,
            Self::Musician,
            Self::Painter,
            Self::Actor,
            Self::Dancer,
            Self::Dj,
            Self::Photographer,
            Self::DigitalArtist,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Musician => "Musician",
            Self::Painter => "Painter",
            Self::Actor => "Actor",
            Self::Dancer => "Dancer",
            Self::Dj => "DJ",
            Self::Photographer => "Photographer",
            Self::DigitalArtist => "Digital Artist",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup by display label.
    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::selectable()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(raw))
    }
}

/// Audience allowed to see a self-declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    #[serde(rename = "Recruiters only")]
    RecruitersOnly,
    #[default]
    Private,
}

impl Visibility {
    pub const fn ordered() -> [Self; 3] {
        [Self::Public, Self::RecruitersOnly, Self::Private]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::RecruitersOnly => "Recruiters only",
            Self::Private => "Private",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinTone {
    Fair,
    Light,
    Medium,
    Olive,
    Brown,
    Black,
}

impl SkinTone {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Fair,
            Self::Light,
            Self::Medium,
            Self::Olive,
            Self::Brown,
            Self::Black,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fair => "Fair",
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Olive => "Olive",
            Self::Brown => "Brown",
            Self::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    Slim,
    Athletic,
    Average,
    Curvy,
    #[serde(rename = "Plus-size")]
    PlusSize,
}

impl BodyType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Slim,
            Self::Athletic,
            Self::Average,
            Self::Curvy,
            Self::PlusSize,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Slim => "Slim",
            Self::Athletic => "Athletic",
            Self::Average => "Average",
            Self::Curvy => "Curvy",
            Self::PlusSize => "Plus-size",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-25")]
    EighteenToTwentyFive,
    #[serde(rename = "26-35")]
    TwentySixToThirtyFive,
    #[serde(rename = "36-45")]
    ThirtySixToFortyFive,
    #[serde(rename = "46-55")]
    FortySixToFiftyFive,
    #[serde(rename = "56+")]
    FiftySixPlus,
}

impl AgeRange {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EighteenToTwentyFive,
            Self::TwentySixToThirtyFive,
            Self::ThirtySixToFortyFive,
            Self::FortySixToFiftyFive,
            Self::FiftySixPlus,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EighteenToTwentyFive => "18-25",
            Self::TwentySixToThirtyFive => "26-35",
            Self::ThirtySixToFortyFive => "36-45",
            Self::FortySixToFiftyFive => "46-55",
            Self::FiftySixPlus => "56+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SexualOrientation {
    Straight,
    Gay,
    Lesbian,
    Bisexual,
    Pansexual,
    Asexual,
    Queer,
}

impl SexualOrientation {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Straight,
            Self::Gay,
            Self::Lesbian,
            Self::Bisexual,
            Self::Pansexual,
            Self::Asexual,
            Self::Queer,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Straight => "Straight",
            Self::Gay => "Gay",
            Self::Lesbian => "Lesbian",
            Self::Bisexual => "Bisexual",
            Self::Pansexual => "Pansexual",
            Self::Asexual => "Asexual",
            Self::Queer => "Queer",
        }
    }
}

/// Platforms an artist may link to. Ordering follows the catalog so rendered links are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    TikTok,
    Twitter,
    YouTube,
    Spotify,
    SoundCloud,
    Website,
    Linktree,
}

impl SocialPlatform {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Instagram,
            Self::TikTok,
            Self::Twitter,
            Self::YouTube,
            Self::Spotify,
            Self::SoundCloud,
            Self::Website,
            Self::Linktree,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
            Self::Twitter => "twitter",
            Self::YouTube => "youtube",
            Self::Spotify => "spotify",
            Self::SoundCloud => "soundcloud",
            Self::Website => "website",
            Self::Linktree => "linktree",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::Twitter => "Twitter / X",
            Self::YouTube => "YouTube",
            Self::Spotify => "Spotify",
            Self::SoundCloud => "SoundCloud",
            Self::Website => "Website",
            Self::Linktree => "Linktree",
        }
    }
}

/// Id/label pair for a social platform in the catalog listing.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformEntry {
    pub id: &'static str,
    pub name: &'static str,
}

/// Serializable snapshot of every option set, used by form builders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub artist_types: Vec<&'static str>,
    pub visibility_options: Vec<&'static str>,
    pub skin_tones: Vec<&'static str>,
    pub body_types: Vec<&'static str>,
    pub age_ranges: Vec<&'static str>,
    pub sexual_orientations: Vec<&'static str>,
    pub social_platforms: Vec<PlatformEntry>,
}

pub fn catalog() -> CatalogView {
    CatalogView {
        artist_types: ArtistType::directory().map(ArtistType::label).to_vec(),
        visibility_options: Visibility::ordered().map(Visibility::label).to_vec(),
        skin_tones: SkinTone::ordered().map(SkinTone::label).to_vec(),
        body_types: BodyType::ordered().map(BodyType::label).to_vec(),
        age_ranges: AgeRange::ordered().map(AgeRange::label).to_vec(),
        sexual_orientations: SexualOrientation::ordered()
            .map(SexualOrientation::label)
            .to_vec(),
        social_platforms: SocialPlatform::ordered()
            .into_iter()
            .map(|platform| PlatformEntry {
                id: platform.id(),
                name: platform.label(),
            })
            .collect(),
    }
}
