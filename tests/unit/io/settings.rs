//! Tests for JSON settings files

#[cfg(test)]
mod tests {
    use heartcollage::CollageError;
    use heartcollage::io::settings::LayoutSettings;
    use heartcollage::spatial::CanvasSize;
    use heartcollage::spatial::curve::HeartCurve;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    // Tests missing fields take their defaults
    // Verified by removing the container default attribute
    #[test]
    fn test_partial_settings() {
        let settings: LayoutSettings =
            serde_json::from_str(r#"{ "canvas": { "width": 640 }, "max_overlap_percent": 5.0 }"#)
                .unwrap();

        assert_eq!(settings.canvas, CanvasSize::new(640, 1400));
        assert!((settings.max_overlap_percent - 5.0).abs() < f64::EPSILON);
        assert_eq!(settings.footprint_size, 160);
        assert_eq!(settings.curve, HeartCurve::default());
        assert_eq!(settings.prune_interval, 5);
        assert!(settings.seed.is_none());
    }

    // Tests an empty object equals the defaults
    // Verified by changing a default in the Default implementation only
    #[test]
    fn test_empty_settings() {
        let settings: LayoutSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, LayoutSettings::default());
    }

    // Tests misspelled fields are rejected
    // Verified by removing deny_unknown_fields
    #[test]
    fn test_unknown_field() {
        assert!(serde_json::from_str::<LayoutSettings>(r#"{ "footprint": 10 }"#).is_err());
    }

    // Tests settings load from a file and report parse errors with the path
    // Verified by mapping parse errors to file system errors
    #[test]
    fn test_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.json");
        fs::write(&good, r#"{ "seed": 42, "max_candidate_scans": 900 }"#).unwrap();

        let settings = LayoutSettings::from_json_file(&good).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.max_candidate_scans, Some(900));

        let bad = temp_dir.path().join("bad.json");
        fs::write(&bad, r#"{ "seed": "forty-two" }"#).unwrap();
        let error = LayoutSettings::from_json_file(&bad).unwrap_err();
        assert!(matches!(error, CollageError::Settings { .. }));
        assert!(error.to_string().contains("bad.json"));
    }

    // Tests selection parameters carry every tunable
    // Verified by dropping the scan cap from the conversion
    #[test]
    fn test_selection_params() {
        let settings = LayoutSettings {
            footprint_size: 64,
            max_overlap_percent: 12.5,
            prune_interval: 3,
            max_candidate_scans: Some(77),
            ..LayoutSettings::default()
        };

        let params = settings.selection_params(9);
        assert_eq!(params.count, 9);
        assert_eq!(params.footprint_size, 64);
        assert!((params.max_overlap_percent - 12.5).abs() < f64::EPSILON);
        assert_eq!(params.prune_interval, 3);
        assert_eq!(params.max_candidate_scans, Some(77));
    }

    // Tests layouts build from settings and reject bad values
    // Verified by skipping validation in the layout constructor
    #[test]
    fn test_layout() {
        let settings = LayoutSettings {
            canvas: CanvasSize::new(400, 300),
            footprint_size: 40,
            ..LayoutSettings::default()
        };
        let layout = settings.layout(5).unwrap();
        let selection = layout.place(&mut StdRng::seed_from_u64(5));
        assert_eq!(selection.len(), 5);

        let too_big = LayoutSettings {
            footprint_size: 4000,
            ..settings
        };
        assert!(matches!(
            too_big.layout(5),
            Err(CollageError::InvalidParameter { .. })
        ));
    }
}
