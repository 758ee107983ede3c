//! Tests for input and output files
//!
//! These tests verify:
//! - Reading names in order
//! - Line ending handling
//! - Output replaces previous content

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use pokeclient::files::{read_names, write_lines, write_records};
use pokeclient::EntityRecord;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    (temp_dir, path)
}

// =============================================================================
// Input Tests
// =============================================================================

#[test]
fn test_read_names_in_order() {
    let (_temp, path) = setup_temp_file("names.txt");
    fs::write(&path, "Pikachu\nBulbasaur\nMr. Mime\n").unwrap();

    let names = read_names(&path).unwrap();
    assert_eq!(names, vec!["Pikachu", "Bulbasaur", "Mr. Mime"]);
}

#[test]
fn test_read_names_crlf_and_utf8() {
    let (_temp, path) = setup_temp_file("names.txt");
    fs::write(&path, "Flabébé\r\nニャース\r\n").unwrap();

    let names = read_names(&path).unwrap();
    assert_eq!(names, vec!["Flabébé", "ニャース"]);
}

#[test]
fn test_read_names_empty_file() {
    let (_temp, path) = setup_temp_file("names.txt");
    fs::write(&path, "").unwrap();

    assert!(read_names(&path).unwrap().is_empty());
}

#[test]
fn test_read_names_missing_file() {
    let (_temp, path) = setup_temp_file("absent.txt");
    assert!(read_names(&path).is_err());
}

// =============================================================================
// Output Tests
// =============================================================================

#[test]
fn test_write_records_truncates() {
    let (_temp, path) = setup_temp_file("out.txt");
    fs::write(&path, "old line 1\nold line 2\nold line 3\n").unwrap();

    let records = vec![
        EntityRecord::new("Pikachu", BTreeMap::from([("hp".to_string(), 35)])).unwrap(),
        EntityRecord::new("Ditto", BTreeMap::new()).unwrap(),
    ];
    write_records(&path, &records).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Pikachu;hp:35\nDitto\n");
}

#[test]
fn test_write_no_lines_creates_empty_file() {
    let (_temp, path) = setup_temp_file("out.txt");
    write_lines(&path, Vec::<String>::new()).unwrap();

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
