use super::Track;
use crate::dataset::{parse_ndjson, DatasetError, DatasetSource, TextFetcher};
use tracing::{debug, info};

/// Parse the newline-delimited track dataset.
pub fn parse_tracks(text: &str) -> Result<Vec<Track>, DatasetError> {
    parse_ndjson(text)
}

/// Fetch and parse the track dataset.
pub async fn load_tracks(
    fetcher: &dyn TextFetcher,
    source: &DatasetSource,
) -> Result<Vec<Track>, DatasetError> {
    let text = fetcher.fetch_text(source).await?;
    let tracks = parse_tracks(&text)?;

    info!("Loaded {} tracks from {}", tracks.len(), source);
    if let Some(first) = tracks.first() {
        debug!("Sample track: {:?}", first);
    }
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tracks_preserves_line_order() {
        let text = r#"{"id":"1","genres":["pop"]}
{"id":"2"}

{"id":"3","genres":"rock"}
"#;
        let tracks = parse_tracks(text).unwrap();
        let ids: Vec<&str> = tracks.iter().filter_map(Track::id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_parse_tracks_rejects_malformed_line() {
        let text = "{\"id\":\"1\"}\nnot json\n";
        let err = parse_tracks(text).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("line 2"));
    }
}
