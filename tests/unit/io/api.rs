//! Tests for the crosswords endpoint response

#[cfg(test)]
mod tests {
    use minicross::corpus::store::WordClueStore;
    use minicross::io::api::{STATUS_INTERNAL_ERROR, STATUS_OK, corpus_body, crosswords_response};
    use tempfile::TempDir;

    const SHIPPED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/crosswords");

    #[test]
    fn test_response_serves_corpus() {
        let store = WordClueStore::new(SHIPPED);

        let response = crosswords_response(&store);

        assert_eq!(response.status, STATUS_OK);
        assert!(response.is_success());
        for key in [
            "twoLetterWords",
            "threeLetterWords",
            "fourLetterWords",
            "fiveLetterWords",
        ] {
            let list = response.body[key]
                .as_array()
                .expect("Each length bucket is an array");
            assert!(!list.is_empty());
        }
        assert!(response.body["fiveLetterWords"][0]["word"].is_string());
        assert!(response.body["fiveLetterWords"][0]["clues"].is_array());
    }

    // Tests that corpus failures surface as a 500 instead of fallback data
    // Verified by serving the cached fallback corpus
    #[test]
    fn test_response_reports_failure() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = WordClueStore::new(dir.path());

        let response = crosswords_response(&store);

        assert_eq!(response.status, STATUS_INTERNAL_ERROR);
        assert!(!response.is_success());
        assert_eq!(response.body["error"], "Failed to fetch crossword data");
        assert!(
            response.body["details"]
                .as_str()
                .is_some_and(|details| details.contains("two-letters.json"))
        );
        assert!(corpus_body(&store).is_err());
    }
}
