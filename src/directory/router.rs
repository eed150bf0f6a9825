use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ArtistId;
use super::filter::DirectoryFilter;
use super::views::{ArtistCardView, ArtistProfileView, Audience};
use crate::catalog::{catalog, ArtistType};
use crate::roster::ArtistSource;

/// Query string accepted by the directory listing.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub verified_only: Option<bool>,
    /// Comma separated type labels, e.g. `Model,DJ`.
    #[serde(default)]
    pub types: Option<String>,
}

impl DirectoryQuery {
    pub fn into_filter(self) -> Result<DirectoryFilter, String> {
        let types = match self.types.as_deref() {
            Some(raw) => parse_types(raw)?,
            None => Vec::new(),
        };

        Ok(DirectoryFilter::new(self.q.unwrap_or_default())
            .verified_only(self.verified_only.unwrap_or(false))
            .with_types(types))
    }
}

/// Parses a comma separated list of type labels, skipping blanks.
pub fn parse_types(raw: &str) -> Result<Vec<ArtistType>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| ArtistType::from_label(label).ok_or_else(|| label.to_string()))
        .collect()
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub audience: Audience,
}

/// Router builder for the read-only directory surface.
pub fn directory_router<S>(source: Arc<S>) -> Router
where
    S: ArtistSource + 'static,
{
    Router::new()
        .route("/api/v1/artists", get(list_handler::<S>))
        .route("/api/v1/artists/:artist_id", get(profile_handler::<S>))
        .route("/api/v1/catalog", get(catalog_handler))
        .with_state(source)
}

pub(crate) async fn list_handler<S>(
    State(source): State<Arc<S>>,
    Query(query): Query<DirectoryQuery>,
) -> Response
where
    S: ArtistSource + 'static,
{
    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(label) => {
            let payload = json!({ "error": "unknown artist type", "type": label });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let artists: Vec<ArtistCardView> = filter
        .apply(source.artists())
        .into_iter()
        .map(ArtistCardView::from)
        .collect();

    let payload = json!({
        "filter": filter,
        "total": source.artists().len(),
        "artists": artists,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn profile_handler<S>(
    State(source): State<Arc<S>>,
    Path(artist_id): Path<String>,
    Query(query): Query<ProfileQuery>,
) -> Response
where
    S: ArtistSource + 'static,
{
    let id = ArtistId(artist_id);
    match source.find(&id) {
        Some(artist) => {
            let view = ArtistProfileView::for_audience(artist, query.audience);
            (StatusCode::OK, Json(view)).into_response()
        }
        None => {
            let payload = json!({ "error": "artist not found", "artist_id": id });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler() -> Json<crate::catalog::CatalogView> {
    Json(catalog())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        directory_router(Arc::new(Roster::seed().expect("seed roster is valid")))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[test]
    fn parses_type_lists() {
        assert_eq!(
            parse_types("Model, DJ,,").expect("known labels"),
            vec![ArtistType::Model, ArtistType::Dj]
        );
        assert_eq!(parse_types("Model,Juggler"), Err("Juggler".to_string()));
    }

    #[tokio::test]
    async fn lists_every_artist_without_filters() {
        let (status, body) = get_json("/api/v1/artists").await;
        assert_eq!(status, StatusCode::OK);
        let artists = body["artists"].as_array().expect("artists array");
        assert_eq!(artists.len(), body["total"].as_u64().expect("total") as usize);
        assert_eq!(artists[0]["name"], "Aria Monroe");
    }

    #[tokio::test]
    async fn combines_query_verification_and_types() {
        let (status, body) =
            get_json("/api/v1/artists?q=a&verified_only=true&types=Painter,Photographer").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["artists"]
            .as_array()
            .expect("artists array")
            .iter()
            .filter_map(|artist| artist["name"].as_str())
            .collect();
        assert_eq!(names, vec!["Noah Okafor", "Diego Alvarez"]);
    }

    #[tokio::test]
    async fn unknown_type_is_a_bad_request() {
        let (status, body) = get_json("/api/v1/artists?types=Juggler").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "Juggler");
    }

    #[tokio::test]
    async fn missing_profile_returns_not_found_payload() {
        let (status, body) = get_json("/api/v1/artists/404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "artist not found");
        assert_eq!(body["artist_id"], "404");
    }

    #[tokio::test]
    async fn catalog_lists_directory_types() {
        let (status, body) = get_json("/api/v1/catalog").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_object());
    }
}
