//! Supergenre taxonomy.
//!
//! Hundreds of free-text genre labels are rolled up into ten coarse buckets
//! by an ordered keyword table. The first rule with a matching keyword wins,
//! so a label like "hip hop/pop" resolves to [`SuperGenre::HipHopRap`] even
//! though it also mentions pop.

use super::Track;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuperGenre {
    #[serde(rename = "Pop")]
    Pop,
    #[serde(rename = "Hip-Hop/Rap")]
    HipHopRap,
    #[serde(rename = "Rock/Metal")]
    RockMetal,
    #[serde(rename = "Electronic/Dance")]
    ElectronicDance,
    #[serde(rename = "R&B/Soul/Funk")]
    RnbSoulFunk,
    #[serde(rename = "Country/Folk/Americana")]
    CountryFolkAmericana,
    #[serde(rename = "Latin")]
    Latin,
    #[serde(rename = "Reggae/Caribbean")]
    ReggaeCaribbean,
    #[serde(rename = "Jazz/Blues")]
    JazzBlues,
    #[serde(rename = "Other/Unknown")]
    OtherUnknown,
}

/// Canonical display order, used for legends and the genre distribution.
pub const SUPERGENRE_ORDER: [SuperGenre; 10] = [
    SuperGenre::Pop,
    SuperGenre::HipHopRap,
    SuperGenre::RockMetal,
    SuperGenre::ElectronicDance,
    SuperGenre::RnbSoulFunk,
    SuperGenre::CountryFolkAmericana,
    SuperGenre::Latin,
    SuperGenre::ReggaeCaribbean,
    SuperGenre::JazzBlues,
    SuperGenre::OtherUnknown,
];

/// Classification rules, evaluated top to bottom. Order is significant.
const RULES: [(SuperGenre, &[&str]); 9] = [
    (
        SuperGenre::HipHopRap,
        &["hip hop", "rap", "drill", "trap", "grime"],
    ),
    (
        SuperGenre::RockMetal,
        &["rock", "metal", "punk", "grunge", "emo"],
    ),
    (
        SuperGenre::ElectronicDance,
        &[
            "edm", "electro", "house", "trance", "techno", "dance", "dubstep", "euro",
        ],
    ),
    (
        SuperGenre::RnbSoulFunk,
        &["r&b", "soul", "motown", "funk", "quiet storm"],
    ),
    (
        SuperGenre::CountryFolkAmericana,
        &["country", "americana", "bluegrass", "folk"],
    ),
    (
        SuperGenre::Latin,
        &[
            "latin",
            "reggaeton",
            "bachata",
            "merengue",
            "cumbia",
            "vallenato",
            "español",
        ],
    ),
    (
        SuperGenre::ReggaeCaribbean,
        &["reggae", "dancehall", "soca", "calypso", "ragga"],
    ),
    (SuperGenre::JazzBlues, &["jazz", "swing", "bossa"]),
    (SuperGenre::Pop, &["pop"]),
];

/// Known encoding artifact in the source data: UTF-8 "ñ" read back as Mac Roman.
const MOJIBAKE_ENYE: &str = "√±";

impl SuperGenre {
    pub fn label(&self) -> &'static str {
        match self {
            SuperGenre::Pop => "Pop",
            SuperGenre::HipHopRap => "Hip-Hop/Rap",
            SuperGenre::RockMetal => "Rock/Metal",
            SuperGenre::ElectronicDance => "Electronic/Dance",
            SuperGenre::RnbSoulFunk => "R&B/Soul/Funk",
            SuperGenre::CountryFolkAmericana => "Country/Folk/Americana",
            SuperGenre::Latin => "Latin",
            SuperGenre::ReggaeCaribbean => "Reggae/Caribbean",
            SuperGenre::JazzBlues => "Jazz/Blues",
            SuperGenre::OtherUnknown => "Other/Unknown",
        }
    }

    /// Hex colour used for this bucket in every chart.
    pub fn color(&self) -> &'static str {
        match self {
            SuperGenre::Pop => "#4e79a7",
            SuperGenre::HipHopRap => "#f28e2c",
            SuperGenre::RockMetal => "#e15759",
            SuperGenre::ElectronicDance => "#76b7b2",
            SuperGenre::RnbSoulFunk => "#59a14f",
            SuperGenre::CountryFolkAmericana => "#edc949",
            SuperGenre::Latin => "#af7aa1",
            SuperGenre::ReggaeCaribbean => "#ff9da7",
            SuperGenre::JazzBlues => "#9c755f",
            SuperGenre::OtherUnknown => "#bab0ab",
        }
    }

    /// Position in [`SUPERGENRE_ORDER`].
    pub fn order_index(&self) -> usize {
        SUPERGENRE_ORDER
            .iter()
            .position(|g| g == self)
            .unwrap_or(SUPERGENRE_ORDER.len() - 1)
    }

    pub fn from_label(label: &str) -> Option<SuperGenre> {
        SUPERGENRE_ORDER.into_iter().find(|g| g.label() == label)
    }
}

impl fmt::Display for SuperGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every supergenre paired with its colour, in canonical order.
pub fn supergenre_colors() -> [(SuperGenre, &'static str); 10] {
    SUPERGENRE_ORDER.map(|g| (g, g.color()))
}

fn normalize_label(raw: &str) -> String {
    raw.to_lowercase().replace(MOJIBAKE_ENYE, "ñ")
}

/// Map a raw genre label to its supergenre.
pub fn classify(raw_label: &str) -> SuperGenre {
    let label = normalize_label(raw_label);
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| label.contains(k)))
        .map(|(genre, _)| *genre)
        .unwrap_or(SuperGenre::OtherUnknown)
}

/// Supergenre of the first non-blank genre label of a track, used for
/// per-track colouring.
pub fn super_genre_of(track: &Track) -> SuperGenre {
    track
        .genre_labels()
        .first()
        .map(|label| classify(label))
        .unwrap_or(SuperGenre::OtherUnknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GenreLabels;

    fn track_with(genres: Option<GenreLabels>) -> Track {
        Track {
            genres,
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_each_rule() {
        assert_eq!(classify("Atlanta Trap"), SuperGenre::HipHopRap);
        assert_eq!(classify("alternative metal"), SuperGenre::RockMetal);
        assert_eq!(classify("Progressive House"), SuperGenre::ElectronicDance);
        assert_eq!(classify("quiet storm"), SuperGenre::RnbSoulFunk);
        assert_eq!(classify("Bluegrass"), SuperGenre::CountryFolkAmericana);
        assert_eq!(classify("reggaeton"), SuperGenre::Latin);
        assert_eq!(classify("Soca"), SuperGenre::ReggaeCaribbean);
        assert_eq!(classify("bossa nova"), SuperGenre::JazzBlues);
        assert_eq!(classify("k-pop"), SuperGenre::Pop);
        assert_eq!(classify("gregorian chant"), SuperGenre::OtherUnknown);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        assert_eq!(classify("Hip Hop/Pop"), SuperGenre::HipHopRap);
        assert_eq!(classify("pop rock"), SuperGenre::RockMetal);
        // "dancehall" hits the dance keyword of the electronic rule first
        assert_eq!(classify("dancehall"), SuperGenre::ElectronicDance);
        assert_eq!(classify("reggae pop"), SuperGenre::ReggaeCaribbean);
    }

    #[test]
    fn test_substring_matches_are_greedy() {
        // "emo" inside "memorial", "rap" inside "trapeze"
        assert_eq!(classify("memorial"), SuperGenre::RockMetal);
        assert_eq!(classify("grape"), SuperGenre::HipHopRap);
    }

    #[test]
    fn test_spanish_labels_are_latin() {
        assert_eq!(classify("pop en español"), SuperGenre::Latin);
        assert_eq!(classify("Rock en Espa√±ol"), SuperGenre::RockMetal);
        assert_eq!(classify("cantautor en espa√±ol"), SuperGenre::Latin);
    }

    #[test]
    fn test_super_genre_uses_first_non_blank_label() {
        let track = track_with(Some(GenreLabels::Many(vec![
            None,
            Some("  ".to_string()),
            Some("jazz".to_string()),
            Some("pop".to_string()),
        ])));
        assert_eq!(super_genre_of(&track), SuperGenre::JazzBlues);

        let single = track_with(Some(GenreLabels::Single("country".to_string())));
        assert_eq!(super_genre_of(&single), SuperGenre::CountryFolkAmericana);
    }

    #[test]
    fn test_super_genre_without_labels_is_other() {
        assert_eq!(super_genre_of(&track_with(None)), SuperGenre::OtherUnknown);
        assert_eq!(
            super_genre_of(&track_with(Some(GenreLabels::Many(vec![])))),
            SuperGenre::OtherUnknown
        );
        assert_eq!(
            super_genre_of(&track_with(Some(GenreLabels::Single("   ".to_string())))),
            SuperGenre::OtherUnknown
        );
    }

    #[test]
    fn test_order_and_colors_are_consistent() {
        let colors = supergenre_colors();
        assert_eq!(colors[0], (SuperGenre::Pop, "#4e79a7"));
        assert_eq!(colors[9], (SuperGenre::OtherUnknown, "#bab0ab"));
        for (idx, genre) in SUPERGENRE_ORDER.iter().enumerate() {
            assert_eq!(genre.order_index(), idx);
            assert_eq!(SuperGenre::from_label(genre.label()), Some(*genre));
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&SuperGenre::RnbSoulFunk).unwrap();
        assert_eq!(json, "\"R&B/Soul/Funk\"");
    }
}
