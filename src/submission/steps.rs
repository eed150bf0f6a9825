use serde::{Deserialize, Serialize};

/// Pages of the submission wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    ArtistTypes,
    IdentityAttributes,
    SocialLinks,
    ReviewSubmit,
}

impl WizardStep {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::BasicInfo,
            Self::ArtistTypes,
            Self::IdentityAttributes,
            Self::SocialLinks,
            Self::ReviewSubmit,
        ]
    }

    pub const fn first() -> Self {
        Self::BasicInfo
    }

    pub const fn last() -> Self {
        Self::ReviewSubmit
    }

    pub const fn index(self) -> usize {
        match self {
            Self::BasicInfo => 0,
            Self::ArtistTypes => 1,
            Self::IdentityAttributes => 2,
            Self::SocialLinks => 3,
            Self::ReviewSubmit => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ordered().get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub const fn is_last(self) -> bool {
        matches!(self, Self::ReviewSubmit)
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::ArtistTypes => "Artist Types",
            Self::IdentityAttributes => "Identity & Attributes (Optional)",
            Self::SocialLinks => "Social & External Links",
            Self::ReviewSubmit => "Review & Submit",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::BasicInfo => "Let's start with the essentials.",
            Self::ArtistTypes => "What kind of artist are you? Select all that apply.",
            Self::IdentityAttributes => {
                "Share more about yourself. All fields are optional and have visibility controls."
            }
            Self::SocialLinks => "Connect your audience to your platforms.",
            Self::ReviewSubmit => "One last look before your profile goes live for review.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_is_bounded() {
        assert_eq!(WizardStep::first().previous(), None);
        assert_eq!(WizardStep::last().next(), None);
        assert_eq!(WizardStep::ArtistTypes.next(), Some(WizardStep::IdentityAttributes));
        assert_eq!(WizardStep::ArtistTypes.previous(), Some(WizardStep::BasicInfo));
    }

    #[test]
    fn indexes_follow_declaration_order() {
        for (index, step) in WizardStep::ordered().into_iter().enumerate() {
            assert_eq!(step.index(), index);
            assert_eq!(WizardStep::from_index(index), Some(step));
        }
    }
}
