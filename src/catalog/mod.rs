mod distribution;
mod load;
mod supergenre;
mod track;

pub use distribution::{build_genre_distribution, GenreCount};
pub use load::{load_tracks, parse_tracks};
pub use supergenre::{classify, super_genre_of, supergenre_colors, SuperGenre, SUPERGENRE_ORDER};
pub use track::{GenreLabels, Track};
