//! Tests for canvas dimensions and validation

#[cfg(test)]
mod tests {
    use heartcollage::CollageError;
    use heartcollage::io::configuration::{
        DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_CANVAS_DIMENSION,
    };
    use heartcollage::spatial::CanvasSize;

    // Tests default canvas matches documented defaults
    // Verified by swapping width and height constants
    #[test]
    fn test_default_canvas() {
        let canvas = CanvasSize::default();
        assert_eq!(canvas.width, DEFAULT_CANVAS_WIDTH);
        assert_eq!(canvas.height, DEFAULT_CANVAS_HEIGHT);
        assert!(canvas.validate().is_ok());
    }

    // Tests midpoint uses integer halves
    // Verified by rounding halves up
    #[test]
    fn test_center_and_min_dimension() {
        let canvas = CanvasSize::new(1801, 1399);
        assert_eq!(canvas.center(), (900, 699));
        assert_eq!(canvas.min_dimension(), 1399);
        assert_eq!(canvas.area(), 1801 * 1399);
    }

    // Tests zero dimensions are rejected with the offending parameter named
    // Verified by removing the zero check
    #[test]
    fn test_zero_dimension_rejected() {
        let err = CanvasSize::new(0, 100).validate().unwrap_err();
        match err {
            CollageError::InvalidParameter { parameter, .. } => assert_eq!(parameter, "width"),
            other => unreachable!("Expected InvalidParameter, got {other}"),
        }

        let err = CanvasSize::new(100, 0).validate().unwrap_err();
        match err {
            CollageError::InvalidParameter { parameter, .. } => assert_eq!(parameter, "height"),
            other => unreachable!("Expected InvalidParameter, got {other}"),
        }
    }

    // Tests oversized canvases are rejected
    // Verified by raising the dimension limit
    #[test]
    fn test_oversized_canvas_rejected() {
        assert!(CanvasSize::new(MAX_CANVAS_DIMENSION, 10).validate().is_ok());
        assert!(
            CanvasSize::new(MAX_CANVAS_DIMENSION + 1, 10)
                .validate()
                .is_err()
        );
    }
}
