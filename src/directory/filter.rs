use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::Artist;
use crate::catalog::ArtistType;

/// Criteria applied to the roster on the directory page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryFilter {
    /// Case-insensitive substring of the artist name. Empty matches everyone.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub verified_only: bool,
    /// Matches artists holding at least one of these types. Empty matches everyone.
    #[serde(default)]
    pub types: BTreeSet<ArtistType>,
}

impl DirectoryFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn verified_only(mut self, verified_only: bool) -> Self {
        self.verified_only = verified_only;
        self
    }

    pub fn with_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = ArtistType>,
    {
        self.types.extend(types);
        self
    }

    /// Adds the type when absent, removes it otherwise.
    pub fn toggle_type(&mut self, kind: ArtistType) {
        if !self.types.remove(&kind) {
            self.types.insert(kind);
        }
    }

    pub fn matches(&self, artist: &Artist) -> bool {
        let name_match = artist
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let verified_match = !self.verified_only || artist.is_verified;
        let type_match = self.types.is_empty() || artist.has_any_type(&self.types);

        name_match && verified_match && type_match
    }

    /// Matching artists in roster order.
    pub fn apply<'a>(&self, artists: &'a [Artist]) -> Vec<&'a Artist> {
        artists.iter().filter(|artist| self.matches(artist)).collect()
    }
}
