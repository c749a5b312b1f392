//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let stats_error = StatsError::from(reqwest_error);

        match stats_error {
            StatsError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_season_message() {
        let error = StatsError::InvalidSeason {
            value: " ".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid season: \" \"");
    }

    #[test]
    fn test_missing_component_message() {
        let error = ConversionError::MissingComponent {
            component: "height_inches",
        };
        assert_eq!(error.to_string(), "missing height_inches");
    }

    #[test]
    fn test_unsupported_output_message() {
        let error = StatsError::UnsupportedOutput {
            selector: "sqlite".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported output target: sqlite");
    }

    #[test]
    fn test_invalid_page_token_message() {
        let error = StatsError::InvalidPageToken {
            value: "next".to_string(),
        };
        assert!(error.to_string().contains("next"));
    }

    #[test]
    fn test_invalid_measurement_message() {
        let error = ConversionError::InvalidMeasurement { value: -3.0 };
        assert_eq!(error.to_string(), "invalid measurement: -3");
    }

    #[test]
    fn test_error_debug_format() {
        let error = StatsError::MalformedCsv {
            message: "expected 5 fields".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("MalformedCsv"));
        assert!(debug_str.contains("expected 5 fields"));
    }
}
