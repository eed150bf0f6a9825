//! Read-only data provider for artists and seeded verification requests.
//!
//! The bundled seed lives in `data/`; `APP_ROSTER_ARTISTS` / `APP_ROSTER_REQUESTS` can point
//! at replacement JSON files with the same shape.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RosterConfig;
use crate::directory::domain::{Artist, ArtistId};
use crate::verification::domain::VerificationRequest;

const SEED_ARTISTS: &str = include_str!("../data/artists.json");
const SEED_REQUESTS: &str = include_str!("../data/verification_requests.json");

/// Read access to the ordered artist collection.
pub trait ArtistSource: Send + Sync {
    fn artists(&self) -> &[Artist];

    fn find(&self, id: &ArtistId) -> Option<&Artist> {
        self.artists().iter().find(|artist| &artist.id == id)
    }

    /// Case-insensitive exact match on the artist name.
    fn find_by_name(&self, name: &str) -> Option<&Artist> {
        let wanted = name.trim().to_lowercase();
        self.artists()
            .iter()
            .find(|artist| artist.name.to_lowercase() == wanted)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    artists: Vec<Artist>,
    verification_requests: Vec<VerificationRequest>,
}

impl Roster {
    /// The bundled mock roster.
    pub fn seed() -> Result<Self, RosterError> {
        Self::from_json(SEED_ARTISTS, SEED_REQUESTS)
    }

    /// Seed roster with any configured file overrides applied.
    pub fn load(config: &RosterConfig) -> Result<Self, RosterError> {
        let artists = match &config.artists_path {
            Some(path) => read_source(path)?,
            None => SEED_ARTISTS.to_string(),
        };
        let requests = match &config.requests_path {
            Some(path) => read_source(path)?,
            None => SEED_REQUESTS.to_string(),
        };
        Self::from_json(&artists, &requests)
    }

    pub fn from_json(artists: &str, requests: &str) -> Result<Self, RosterError> {
        let artists: Vec<Artist> =
            serde_json::from_str(artists).map_err(|source| RosterError::Parse {
                collection: "artists",
                source,
            })?;
        let verification_requests: Vec<VerificationRequest> =
            serde_json::from_str(requests).map_err(|source| RosterError::Parse {
                collection: "verification requests",
                source,
            })?;
        Self::new(artists, verification_requests)
    }

    /// Builds a roster, enforcing unique ids and at least one type per artist.
    pub fn new(
        artists: Vec<Artist>,
        verification_requests: Vec<VerificationRequest>,
    ) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for artist in &artists {
            if !seen.insert(artist.id.clone()) {
                return Err(RosterError::DuplicateArtist(artist.id.0.clone()));
            }
            if artist.types.is_empty() {
                return Err(RosterError::MissingTypes(artist.id.0.clone()));
            }
        }

        Ok(Self {
            artists,
            verification_requests,
        })
    }

    pub fn verification_requests(&self) -> &[VerificationRequest] {
        &self.verification_requests
    }
}

impl ArtistSource for Roster {
    fn artists(&self) -> &[Artist] {
        &self.artists
    }
}

fn read_source(path: &Path) -> Result<String, RosterError> {
    fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("unable to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {collection} roster: {source}")]
    Parse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("artist id '{0}' appears more than once")]
    DuplicateArtist(String),
    #[error("artist '{0}' must list at least one type")]
    MissingTypes(String),
}
