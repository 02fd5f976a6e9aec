#![allow(unused)]

use std::error::Error;
use std::fs;

use tempfile::TempDir;

use shed_common::fs::{
    existing_non_empty_file_from_path, file_contents_as_string, filepath_contents_as_bytes,
    filepath_contents_as_string, readable_file_from_path,
};

#[test]
fn test_contents_as_string () -> Result<(),Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("x.css");
    fs::write( &path, "body { color: red; }")?;

    let contents = filepath_contents_as_string( path.to_str().unwrap())?;
    assert_eq!( contents, "body { color: red; }");
    Ok(())
}

#[test]
fn test_contents_as_bytes () -> Result<(),Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("x.png");
    fs::write( &path, [0u8, 1, 2, 255])?;

    let contents = filepath_contents_as_bytes( path.to_str().unwrap())?;
    assert_eq!( contents, vec![0u8, 1, 2, 255]);
    Ok(())
}

#[test]
fn test_missing_file_rejected () {
    assert!( readable_file_from_path("no/such/file.css").is_err());
    assert!( filepath_contents_as_string("no/such/file.css").is_err());
}

#[test]
fn test_directory_rejected () -> Result<(),Box<dyn Error>> {
    let dir = TempDir::new()?;
    assert!( readable_file_from_path( dir.path().to_str().unwrap()).is_err());
    Ok(())
}

#[test]
fn test_empty_file_handling () -> Result<(),Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("empty.html");
    fs::write( &path, "")?;
    let path = path.to_str().unwrap();

    // readable for content access, rejected where we require actual input
    assert_eq!( filepath_contents_as_string(path)?, "");
    assert!( existing_non_empty_file_from_path(path).is_err());
    Ok(())
}
