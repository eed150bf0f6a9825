//! Artist directory: roster records, filtering, and the card and profile projections.

pub mod domain;
pub mod filter;
pub mod router;
pub mod views;

pub use domain::{Artist, ArtistId, SocialLinks, VisibleAttribute};
pub use filter::DirectoryFilter;
pub use router::{directory_router, parse_types, DirectoryQuery};
pub use views::{social_link_views, ArtistCardView, ArtistProfileView, Audience, SocialLinkView};
