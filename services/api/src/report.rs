use artist_directory::catalog::ArtistType;
use artist_directory::config::AppConfig;
use artist_directory::directory::{Artist, ArtistId, ArtistProfileView, Audience, DirectoryFilter};
use artist_directory::error::AppError;
use artist_directory::roster::{ArtistSource, Roster};
use artist_directory::verification::VerificationRequest;
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Case-insensitive substring of the artist name
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Only include verified artists
    #[arg(long)]
    pub(crate) verified_only: bool,
    /// Artist type label to match; repeat to match any of several
    #[arg(long = "type", value_parser = parse_type)]
    pub(crate) types: Vec<ArtistType>,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Artist id
    pub(crate) id: String,
    /// Include identity attributes shared with recruiters
    #[arg(long)]
    pub(crate) recruiter: bool,
}

fn parse_type(raw: &str) -> Result<ArtistType, String> {
    ArtistType::from_label(raw.trim()).ok_or_else(|| format!("unknown artist type '{raw}'"))
}

fn load_roster() -> Result<Roster, AppError> {
    let config = AppConfig::load()?;
    Ok(Roster::load(&config.roster)?)
}

pub(crate) fn run_directory_list(args: ListArgs) -> Result<(), AppError> {
    let roster = load_roster()?;
    let filter = DirectoryFilter::new(args.query.unwrap_or_default())
        .verified_only(args.verified_only)
        .with_types(args.types);
    print!("{}", render_directory(&filter, roster.artists()));
    Ok(())
}

pub(crate) fn run_directory_show(args: ShowArgs) -> Result<(), AppError> {
    let roster = load_roster()?;
    let artist = roster
        .find(&ArtistId(args.id.clone()))
        .ok_or_else(|| AppError::NotFound(format!("artist '{}'", args.id)))?;
    let audience = if args.recruiter {
        Audience::Recruiter
    } else {
        Audience::Public
    };
    print!(
        "{}",
        render_profile(&ArtistProfileView::for_audience(artist, audience))
    );
    Ok(())
}

pub(crate) fn run_admin_requests() -> Result<(), AppError> {
    let roster = load_roster()?;
    print!("{}", render_requests(roster.verification_requests()));
    Ok(())
}

fn type_labels(types: &[ArtistType]) -> String {
    types
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joins report lines, each terminated by a newline.
fn text(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub(crate) fn render_directory(filter: &DirectoryFilter, artists: &[Artist]) -> String {
    let matches = filter.apply(artists);
    let mut lines = vec![format!(
        "Artist directory: {} of {} artists",
        matches.len(),
        artists.len()
    )];
    if matches.is_empty() {
        lines.push("No artists match the current filters.".to_string());
    }
    lines.extend(matches.into_iter().map(|artist| {
        let badge = if artist.is_verified { " [verified]" } else { "" };
        format!(
            "- {} ({}){} #{}",
            artist.name,
            type_labels(&artist.types),
            badge,
            artist.id.as_str()
        )
    }));
    text(lines)
}

pub(crate) fn render_profile(view: &ArtistProfileView) -> String {
    let badge = if view.is_verified { " [verified]" } else { "" };
    let mut lines = vec![
        format!("{}{}", view.name, badge),
        format!("Types: {}", type_labels(&view.types)),
    ];
    if let Some(location) = &view.location {
        lines.push(format!("Location: {location}"));
    }
    if let Some(bio) = &view.bio {
        lines.push(format!("Bio: {bio}"));
    }
    if let Some(skin_tone) = view.skin_tone {
        lines.push(format!("Skin tone: {}", skin_tone.label()));
    }
    if let Some(body_type) = view.body_type {
        lines.push(format!("Body type: {}", body_type.label()));
    }
    if let Some(height) = view.height {
        lines.push(format!("Height: {height} cm"));
    }
    if let Some(age_range) = view.age_range {
        lines.push(format!("Age range: {}", age_range.label()));
    }
    if let Some(orientation) = &view.sexual_orientation {
        let labels: Vec<&str> = orientation.iter().map(|value| value.label()).collect();
        lines.push(format!("Sexual orientation: {}", labels.join(", ")));
    }
    lines.extend(
        view.socials
            .iter()
            .map(|link| format!("{}: {}", link.name, link.url)),
    );
    text(lines)
}

pub(crate) fn render_requests(requests: &[VerificationRequest]) -> String {
    let mut lines = vec![format!("Verification requests: {}", requests.len())];
    lines.extend(requests.iter().map(|request| {
        format!(
            "- {} | {} (#{}) | {} | {}",
            request.id.0,
            request.artist_name,
            request.artist_id.as_str(),
            request.request_date,
            request.status.label()
        )
    }));
    text(lines)
}
