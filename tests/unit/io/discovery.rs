//! Tests for image discovery

#[cfg(test)]
mod tests {
    use heartcollage::io::discovery::{discover_images, is_image_file};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests extension matching ignores case
    // Verified by comparing extensions case-sensitively
    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("photo.jpg")));
        assert!(is_image_file(Path::new("photo.JPEG")));
        assert!(is_image_file(Path::new("dir/photo.Png")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("jpg")));
        assert!(!is_image_file(Path::new("archive.jpg.zip")));
    }

    // Tests only top-level image files are listed, sorted
    // Verified by removing the sort
    #[test]
    fn test_discover_images() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in ["c.png", "a.jpg", "b.txt", "d.webp"] {
            fs::write(root.join(name), b"").unwrap();
        }
        fs::create_dir(root.join("nested.jpg")).unwrap();
        fs::write(root.join("nested.jpg").join("e.jpg"), b"").unwrap();

        let files = discover_images(root).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.jpg", "c.png", "d.webp"]);
    }

    // Tests an empty directory yields no files
    // Verified by treating an empty listing as an error
    #[test]
    fn test_discover_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(discover_images(temp_dir.path()).unwrap().is_empty());
    }

    // Tests a missing directory is an error
    // Verified by returning an empty list on read failure
    #[test]
    fn test_discover_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let error = discover_images(&temp_dir.path().join("missing")).unwrap_err();
        assert!(error.to_string().contains("read directory"));
    }
}
