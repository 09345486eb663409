//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use heartcollage::CollageError;
    use heartcollage::io::error::{WithPath, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = CollageError::FileSystem {
            path: "/tmp/photos".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read directory"));
        assert!(message.contains("/tmp/photos"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("footprint_size", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("footprint_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests NoImages error names the directory
    // Verified by dropping the path from the message
    #[test]
    fn test_no_images_error() {
        let error = CollageError::NoImages {
            path: PathBuf::from("empty_dir"),
        };
        assert!(error.to_string().contains("empty_dir"));
        assert!(error.source().is_none());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = CollageError::ImageExport {
            path: PathBuf::from("/restricted/preview.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/preview.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests settings parse errors keep their source
    // Verified by returning None from source for settings errors
    #[test]
    fn test_settings_error() {
        let parse_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = CollageError::Settings {
            path: PathBuf::from("layout.json"),
            source: parse_error,
        };

        assert!(error.to_string().contains("layout.json"));
        assert!(error.source().is_some());
    }

    // Tests the path helper converts I/O errors
    // Verified by discarding the path in the conversion
    #[test]
    fn test_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::other("boom"));
        let error = result.with_path("plan.json", "write plan").unwrap_err();

        let message = error.to_string();
        assert!(message.contains("plan.json"));
        assert!(message.contains("write plan"));
        assert!(message.contains("boom"));
    }
}
