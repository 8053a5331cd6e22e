// clipflip-core/tests/validation_tests.rs

use clipflip_core::config::{MAX_BATCH_FILES, MAX_MANIFEST_BYTES};
use clipflip_core::error::CoreError;
use clipflip_core::validation::validate_candidates;
use std::fs::File;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_validate_filters_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let manifest = dir.path().join("reel.xml");
    let manifest_upper = dir.path().join("reel2.XML"); // Test case insensitivity
    let other = dir.path().join("notes.txt");
    File::create(&manifest)?;
    File::create(&manifest_upper)?;
    File::create(&other)?;

    let candidates = vec![manifest.clone(), manifest_upper.clone(), other];
    let accepted = validate_candidates(&candidates, 0)?;

    assert_eq!(accepted, vec![manifest, manifest_upper]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_validate_size_limit() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // Sparse files keep this cheap even at the 50 MiB boundary
    let at_limit = dir.path().join("at_limit.xml");
    File::create(&at_limit)?.set_len(MAX_MANIFEST_BYTES)?;
    let over_limit = dir.path().join("over_limit.xml");
    File::create(&over_limit)?.set_len(MAX_MANIFEST_BYTES + 1)?;

    let accepted = validate_candidates(&[at_limit.clone(), over_limit], 0)?;
    assert_eq!(accepted, vec![at_limit]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_validate_too_many_files_rejects_whole_batch() {
    // Nonexistent paths are fine here; the cardinality check runs first
    let candidates: Vec<PathBuf> = (0..50)
        .map(|i| PathBuf::from(format!("manifest_{}.xml", i)))
        .collect();

    let result = validate_candidates(&candidates, MAX_BATCH_FILES - 10);
    match result.err().unwrap() {
        CoreError::TooManyFiles {
            requested,
            already_accepted,
            limit,
        } => {
            assert_eq!(requested, 50);
            assert_eq!(already_accepted, MAX_BATCH_FILES - 10);
            assert_eq!(limit, MAX_BATCH_FILES);
        }
        e => panic!("Unexpected error type: {:?}", e),
    }
}

#[test]
fn test_validate_at_cardinality_limit_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest = dir.path().join("reel.xml");
    File::create(&manifest)?;

    // already_accepted + 1 == MAX_BATCH_FILES is still within the limit
    let accepted = validate_candidates(&[manifest.clone()], MAX_BATCH_FILES - 1)?;
    assert_eq!(accepted, vec![manifest]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_validate_no_valid_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let other = dir.path().join("notes.txt");
    File::create(&other)?;
    let missing = dir.path().join("ghost.xml"); // unreadable candidates drop silently

    let result = validate_candidates(&[other, missing], 0);
    match result.err().unwrap() {
        CoreError::NoValidFiles => {}
        e => panic!("Unexpected error type: {:?}", e),
    }

    dir.close()?;
    Ok(())
}
