use super::draft::SubmissionDraft;
use crate::directory::domain::{Artist, ArtistId};
use crate::directory::views::ArtistCardView;

pub const PREVIEW_ID: &str = "preview-id";
pub const PLACEHOLDER_NAME: &str = "Your Name";
pub const PLACEHOLDER_PICTURE: &str = "https://i.pravatar.cc/300";

/// Artist record the draft would produce; submissions always start unverified.
pub fn preview_artist(draft: &SubmissionDraft) -> Artist {
    Artist {
        id: ArtistId(PREVIEW_ID.to_string()),
        name: non_blank_or(&draft.name, PLACEHOLDER_NAME),
        profile_picture: non_blank_or(&draft.profile_picture, PLACEHOLDER_PICTURE),
        is_verified: false,
        types: draft.types.clone(),
        socials: draft.socials.clone(),
        bio: draft.bio.clone(),
        location: draft.location.clone(),
        skin_tone: draft.skin_tone.clone(),
        body_type: draft.body_type.clone(),
        height: draft.height.clone(),
        age_range: draft.age_range.clone(),
        sexual_orientation: draft.sexual_orientation.clone(),
    }
}

/// Directory card shown on the review step.
pub fn preview_card(draft: &SubmissionDraft) -> ArtistCardView {
    ArtistCardView::from(&preview_artist(draft))
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
