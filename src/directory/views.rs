use serde::{Deserialize, Serialize};

use super::domain::{active_socials, Artist, ArtistId, SocialLinks, VisibleAttribute};
use crate::catalog::{AgeRange, ArtistType, BodyType, SexualOrientation, SkinTone, Visibility};

/// Number of type badges shown on a directory card.
const CARD_TYPE_LIMIT: usize = 2;

/// Who is looking at a profile; decides which identity attributes are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    Public,
    Recruiter,
}

impl Audience {
    pub const fn can_see(self, visibility: Visibility) -> bool {
        match (self, visibility) {
            (_, Visibility::Public) => true,
            (Audience::Recruiter, Visibility::RecruitersOnly) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinkView {
    pub platform: &'static str,
    pub name: &'static str,
    pub url: String,
}

pub fn social_link_views(socials: &SocialLinks) -> Vec<SocialLinkView> {
    active_socials(socials)
        .map(|(platform, url)| SocialLinkView {
            platform: platform.id(),
            name: platform.label(),
            url: url.to_string(),
        })
        .collect()
}

/// Directory grid entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistCardView {
    pub id: ArtistId,
    pub name: String,
    pub profile_picture: String,
    pub initials: String,
    pub is_verified: bool,
    pub types: Vec<ArtistType>,
    pub socials: Vec<SocialLinkView>,
}

impl From<&Artist> for ArtistCardView {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            profile_picture: artist.profile_picture.clone(),
            initials: artist.initials(),
            is_verified: artist.is_verified,
            types: artist.types.iter().copied().take(CARD_TYPE_LIMIT).collect(),
            socials: social_link_views(&artist.socials),
        }
    }
}

/// Full profile page, with identity attributes scoped to the audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfileView {
    pub id: ArtistId,
    pub name: String,
    pub profile_picture: String,
    pub initials: String,
    pub is_verified: bool,
    pub types: Vec<ArtistType>,
    pub socials: Vec<SocialLinkView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<SkinTone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexual_orientation: Option<Vec<SexualOrientation>>,
}

impl ArtistProfileView {
    pub fn for_audience(artist: &Artist, audience: Audience) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            profile_picture: artist.profile_picture.clone(),
            initials: artist.initials(),
            is_verified: artist.is_verified,
            types: artist.types.clone(),
            socials: social_link_views(&artist.socials),
            bio: artist.bio.clone(),
            location: artist.location.clone(),
            skin_tone: scoped(&artist.skin_tone, audience),
            body_type: scoped(&artist.body_type, audience),
            height: scoped(&artist.height, audience),
            age_range: scoped(&artist.age_range, audience),
            sexual_orientation: scoped(&artist.sexual_orientation, audience),
        }
    }
}

fn scoped<T: Clone>(attribute: &Option<VisibleAttribute<T>>, audience: Audience) -> Option<T> {
    attribute
        .as_ref()
        .filter(|attribute| audience.can_see(attribute.visibility))
        .map(|attribute| attribute.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SocialPlatform;

    fn artist() -> Artist {
        let mut socials = SocialLinks::new();
        socials.insert(SocialPlatform::Instagram, "https://instagram.com/nova".to_string());
        socials.insert(SocialPlatform::TikTok, String::new());
        Artist {
            id: ArtistId("nova".to_string()),
            name: "Nova Reyes".to_string(),
            profile_picture: "https://example.com/nova.jpg".to_string(),
            is_verified: true,
            types: vec![ArtistType::Dancer, ArtistType::Model, ArtistType::Actor],
            socials,
            bio: Some("Contemporary dancer.".to_string()),
            location: Some("Lisbon, Portugal".to_string()),
            skin_tone: Some(VisibleAttribute::with_visibility(SkinTone::Brown, Visibility::Public)),
            body_type: Some(VisibleAttribute::with_visibility(
                BodyType::Athletic,
                Visibility::RecruitersOnly,
            )),
            height: Some(VisibleAttribute::private(172)),
            age_range: None,
            sexual_orientation: None,
        }
    }

    #[test]
    fn card_shows_two_types_and_non_blank_socials() {
        let card = ArtistCardView::from(&artist());
        assert_eq!(card.types, vec![ArtistType::Dancer, ArtistType::Model]);
        assert_eq!(card.initials, "NR");
        assert_eq!(card.socials.len(), 1);
        assert_eq!(card.socials[0].name, "Instagram");
    }

    #[test]
    fn public_audience_sees_only_public_attributes() {
        let view = ArtistProfileView::for_audience(&artist(), Audience::Public);
        assert_eq!(view.skin_tone, Some(SkinTone::Brown));
        assert_eq!(view.body_type, None);
        assert_eq!(view.height, None);
    }

    #[test]
    fn recruiters_see_recruiter_attributes_but_never_private_ones() {
        let view = ArtistProfileView::for_audience(&artist(), Audience::Recruiter);
        assert_eq!(view.skin_tone, Some(SkinTone::Brown));
        assert_eq!(view.body_type, Some(BodyType::Athletic));
        assert_eq!(view.height, None);
    }
}
