// clipflip-core/tests/discovery_tests.rs

use clipflip_core::discovery::find_manifest_files;
use clipflip_core::error::CoreError;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_find_manifest_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    // Create some files
    File::create(input_dir.join("reel1.xml"))?;
    File::create(input_dir.join("reel2.XML"))?; // Test case insensitivity
    File::create(input_dir.join("document.txt"))?;
    File::create(input_dir.join("clip.mxf"))?;
    fs::create_dir(input_dir.join("subdir"))?;
    File::create(input_dir.join("subdir").join("nested.xml"))?; // Should not be found (top level only)

    let files = find_manifest_files(input_dir)?;

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].file_name().unwrap(), "reel1.xml");
    assert_eq!(files[1].file_name().unwrap(), "reel2.XML"); // Original case preserved

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_manifest_files_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("document.txt"))?;
    fs::create_dir(input_dir.join("subdir"))?;

    let result = find_manifest_files(input_dir);
    match result.err().unwrap() {
        CoreError::NoValidFiles => {} // Expected error
        e => panic!("Unexpected error type: {:?}", e),
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_manifest_files_nonexistent_dir() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    let result = find_manifest_files(&non_existent_path);
    match result.err().unwrap() {
        CoreError::Io(_) => {} // Expected error type
        e => panic!("Unexpected error type: {:?}", e),
    }
}
