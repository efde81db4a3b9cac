use super::supergenre::{classify, SuperGenre, SUPERGENRE_ORDER};
use super::Track;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: SuperGenre,
    pub count: usize,
}

/// Count how many tracks fall under each supergenre.
///
/// Unlike [`super::super_genre_of`], every label of a track is classified: a
/// track tagged both "pop" and "rock" adds one to Pop and one to Rock/Metal.
/// Within a single track each supergenre is counted at most once. The result
/// follows [`SUPERGENRE_ORDER`] and omits empty buckets.
pub fn build_genre_distribution(tracks: &[Track]) -> Vec<GenreCount> {
    let mut counts = [0usize; SUPERGENRE_ORDER.len()];

    for track in tracks {
        let implied: BTreeSet<SuperGenre> = track
            .genre_labels()
            .into_iter()
            .map(classify)
            .collect();
        for genre in implied {
            counts[genre.order_index()] += 1;
        }
    }

    SUPERGENRE_ORDER
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(genre, count)| GenreCount {
            genre: *genre,
            count,
        })
        .collect()
}
