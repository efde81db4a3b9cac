use chartscope_catalog::{DataSources, DatasetSource};

pub const TRACKS_URL: &str = "http://test/data/tracks.ndjson";
pub const BILLBOARD_URL: &str = "http://test/data/processed/billboard.ndjson";
pub const LOADINGS_URL: &str = "http://test/data/processed/spotify_track_pca_loadings.csv";
pub const TRENDS_URL: &str = "http://test/data/processed/temp_dataset.csv";

pub const TRACKS_NDJSON: &str = r#"{"id":"T1","name":"First","genres":["pop","rock"],"energy":0.8}
{"id":"T2","name":"Second","genres":["pop"]}

{"id":"T3","name":"Third","genres":"Hip Hop/Pop"}
{"id":"T4","name":"Fourth"}
{"id":"T5","name":"Fifth","genres":["", "  ", "latin pop"]}
"#;

pub const BILLBOARD_NDJSON: &str = r#"{"date":"2020-06-01","id":"T1","rank":10}
{"date":"2020-01-06","id":"T1","rank":5}
{"date":"1979-12-29","id":"T9","rank":1}
{"date":"2020-01-06","id":"T1","rank":3}
{"date":"2020-02-29","id":"T2","rank":7}
{"date":"2021-01-01","id":"T3","rank":1}
{"date":"2019-12-30","id":"T4","rank":2}
"#;

pub const LOADINGS_CSV: &str = ",PC1,PC2,PC3
danceability,0.4172,-0.1043,0.2261
energy,-0.5031,0.3312,0.0017
";

pub const TRENDS_CSV: &str = "id,date,energy,valence,acousticness
T1,2020-01-06,0.8,0.4,0.1
T2,2020-02-29,0.6,0.6,0.3
T3,2021-01-01,0.5,0.5,0.5
";

pub fn test_sources() -> DataSources {
    DataSources {
        tracks: DatasetSource::Url(TRACKS_URL.to_string()),
        billboard: DatasetSource::Url(BILLBOARD_URL.to_string()),
        pca_loadings: DatasetSource::Url(LOADINGS_URL.to_string()),
        feature_trends: Some(DatasetSource::Url(TRENDS_URL.to_string())),
        min_chart_year: 1980,
    }
}
