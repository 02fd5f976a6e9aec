use std::io;
use std::io::Read;
use io::ErrorKind::*;
use std::fs::File;
use std::path::Path;

use crate::macros::io_error;

/// open file for given pathname, checking that it is a regular file
pub fn readable_file_from_path (path: &str) -> io::Result<File> {
    let p = Path::new(path);
    if p.is_file() {
        File::open(p)
    } else {
        Err(io_error!(NotFound, "not a regular file {:?}", p))
    }
}

/// open file for given pathname, checking that it is a non-empty regular file
pub fn existing_non_empty_file_from_path (path: &str) -> io::Result<File> {
    let file = readable_file_from_path(path)?;
    if file.metadata()?.len() == 0 {
        Err(io_error!(Other, "file empty: {:?}", path))
    } else {
        Ok(file)
    }
}

pub fn file_contents_as_string (file: &mut File) -> io::Result<String> {
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn file_contents_as_bytes (file: &mut File) -> io::Result<Vec<u8>> {
    let len = file.metadata()?.len();
    let mut contents: Vec<u8> = Vec::with_capacity(len as usize);
    file.read_to_end(&mut contents)?;
    Ok(contents)
}

pub fn filepath_contents_as_string (path: &str) -> io::Result<String> {
    let mut file = readable_file_from_path(path)?;
    file_contents_as_string( &mut file)
}

pub fn filepath_contents_as_bytes (path: &str) -> io::Result<Vec<u8>> {
    let mut file = readable_file_from_path(path)?;
    file_contents_as_bytes( &mut file)
}
