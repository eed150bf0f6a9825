use artist_directory::catalog::ArtistType;
use artist_directory::directory::{Artist, DirectoryFilter};
use artist_directory::roster::{ArtistSource, Roster};

fn roster() -> Roster {
    Roster::seed().expect("seed roster is valid")
}

fn type_selections() -> Vec<Vec<ArtistType>> {
    let mut selections = vec![Vec::new()];
    for kind in ArtistType::selectable() {
        selections.push(vec![kind]);
    }
    selections.push(vec![ArtistType::Model, ArtistType::Dj]);
    selections.push(vec![ArtistType::Painter, ArtistType::Photographer, ArtistType::Other]);
    selections
}

fn filters() -> Vec<DirectoryFilter> {
    let mut filters = Vec::new();
    for query in ["", "a", "RI", "  ", "zz"] {
        for verified_only in [false, true] {
            for types in type_selections() {
                filters.push(
                    DirectoryFilter::new(query)
                        .verified_only(verified_only)
                        .with_types(types),
                );
            }
        }
    }
    filters
}

fn is_ordered_subsequence(result: &[&Artist], source: &[Artist]) -> bool {
    let mut remaining = source.iter();
    result
        .iter()
        .all(|wanted| remaining.any(|artist| artist.id == wanted.id))
}

#[test]
fn results_are_ordered_subsequences_of_the_roster() {
    let roster = roster();
    let before = roster.artists().to_vec();

    for filter in filters() {
        let result = filter.apply(roster.artists());
        assert!(
            is_ordered_subsequence(&result, roster.artists()),
            "filter {filter:?} reordered or invented artists"
        );
    }

    assert_eq!(roster.artists(), before.as_slice());
}

#[test]
fn verified_only_keeps_verified_artists() {
    let roster = roster();
    for filter in filters().into_iter().filter(|filter| filter.verified_only) {
        assert!(filter
            .apply(roster.artists())
            .iter()
            .all(|artist| artist.is_verified));
    }
}

#[test]
fn type_selection_requires_an_overlap() {
    let roster = roster();
    for filter in filters().into_iter().filter(|filter| !filter.types.is_empty()) {
        for artist in filter.apply(roster.artists()) {
            assert!(
                artist.types.iter().any(|kind| filter.types.contains(kind)),
                "{} has none of {:?}",
                artist.name,
                filter.types
            );
        }
    }
}

#[test]
fn empty_query_does_not_narrow_the_result() {
    let roster = roster();
    for verified_only in [false, true] {
        for types in type_selections() {
            let without_query = DirectoryFilter::default()
                .verified_only(verified_only)
                .with_types(types.clone());
            let with_empty_query = DirectoryFilter::new("")
                .verified_only(verified_only)
                .with_types(types);
            assert_eq!(
                without_query.apply(roster.artists()),
                with_empty_query.apply(roster.artists())
            );
        }
    }
    assert_eq!(
        DirectoryFilter::default().apply(roster.artists()).len(),
        roster.artists().len()
    );
}

#[test]
fn name_match_ignores_case() {
    let roster = roster();
    let names: Vec<&str> = DirectoryFilter::new("RI")
        .apply(roster.artists())
        .iter()
        .map(|artist| artist.name.as_str())
        .collect();
    assert_eq!(names, vec!["Aria Monroe", "Blake Rivers", "Maria Santos", "Riley Chen"]);
}
