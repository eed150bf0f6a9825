//! Artist directory service: browse and filter artist profiles, walk the profile
//! submission wizard, and review verification requests.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod repository;
pub mod roster;
pub mod submission;
pub mod telemetry;
pub mod verification;
