//! text based HTML asset embedding. We deliberately do not build a DOM here - tags are
//! located by sequential pattern scans over the raw buffer, with the scan offset advanced
//! past each replacement so that inserted content is never re-examined.
//! Tags are assumed to be self-closing without children, and the first literal 'href'/'src'
//! attribute value is what gets resolved. Resolution is by file extension only, relative
//! paths are from the current dir

#[macro_use]
extern crate lazy_static;

use std::ops::Range;

use anyhow::{Context,Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::info;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use shed_common::fs::{filepath_contents_as_bytes, filepath_contents_as_string};
use shed_common::strings::ends_with_ignore_ascii_case;

lazy_static! {
    static ref LINK_RE: Regex = Regex::new( r#"<link\s+[^>]*href=['"]?([^'" ]+)[^>]*>"#).unwrap();
    static ref SCRIPT_RE: Regex = Regex::new( r#"<script\s+[^>]*src=['"]?([^'" ]+)[^>]*>"#).unwrap();
    static ref IMG_RE: Regex = Regex::new( r#"<img\s+[^>]*src=['"]?([^'" ]+)[^>]*>"#).unwrap();
}

/// the chars we keep unescaped when percent-encoding a base64 payload: alphanumerics plus
/// "_.-~/". This keeps the base64 '/' readable while '+' and the '=' padding get escaped
const B64_QUOTE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_').remove(b'.').remove(b'-').remove(b'~').remove(b'/');

/// replace all linked features of the given HTML text with embedded content:
/// css links and external scripts are wrapped into style/script elements, svg images are
/// substituted verbatim for the whole img tag, png/jpg images become base64 data URIs in
/// the src value. Unrecognized extensions are left untouched, unresolvable files abort
/// the whole operation
pub fn unlink_html (html: &str) -> Result<String> {
    let s = embed_stylesheets( html.to_string())?;
    let s = embed_scripts(s)?;
    embed_images(s)
}

fn embed_stylesheets (mut s: String) -> Result<String> {
    let mut i = 0;
    while i < s.len() {
        let (tag, _, href) = match next_ref( &LINK_RE, &s, i) {
            Some(found) => found,
            None => break
        };
        i = tag.end;

        if ends_with_ignore_ascii_case( &href, ".css") {
            info!("embedding stylesheet '{}'", href);
            let replacement = embed_css( &href)?;
            i = tag.start + replacement.len(); // skip scan over new data
            s.replace_range( tag, &replacement);
        }
    }
    Ok(s)
}

fn embed_scripts (mut s: String) -> Result<String> {
    let mut i = 0;
    while i < s.len() {
        let (tag, _, src) = match next_ref( &SCRIPT_RE, &s, i) {
            Some(found) => found,
            None => break
        };
        i = tag.end;

        if ends_with_ignore_ascii_case( &src, ".js") {
            info!("embedding script '{}'", src);
            let replacement = embed_js( &src)?;
            i = tag.start + replacement.len();
            s.replace_range( tag, &replacement);
        }
    }
    Ok(s)
}

fn embed_images (mut s: String) -> Result<String> {
    let mut i = 0;
    while i < s.len() {
        let (tag, src_val, src) = match next_ref( &IMG_RE, &s, i) {
            Some(found) => found,
            None => break
        };
        i = tag.end;

        if ends_with_ignore_ascii_case( &src, ".svg") {
            // svg replaces the whole img tag with the markup it contains
            info!("embedding svg image '{}'", src);
            let replacement = embed_svg( &src)?;
            i = tag.start + replacement.len();
            s.replace_range( tag, &replacement);

        } else if ends_with_ignore_ascii_case( &src, ".png") || ends_with_ignore_ascii_case( &src, ".jpg") {
            // rasters only replace the src value, the surrounding tag stays intact.
            // anything else is ignored
            info!("embedding raster image '{}'", src);
            let img_format = src[src.len()-3..].to_ascii_lowercase();
            let replacement = embed_raster( &src, &img_format)?;
            i = (tag.end + replacement.len()) - src.len();
            s.replace_range( src_val, &replacement);
        }
    }
    Ok(s)
}

/// pure scan step: find the next tag match at or after 'start', returning the whole tag
/// range, the attribute value range and the owned value (owned so callers can mutate 's')
fn next_ref (re: &Regex, s: &str, start: usize) -> Option<(Range<usize>,Range<usize>,String)> {
    re.captures_at( s, start).map( |caps| {
        let tag = caps.get(0).unwrap();
        let val = caps.get(1).unwrap();
        (tag.range(), val.range(), val.as_str().to_string())
    })
}

//--- the per-resource embedding functions

fn embed_css (filename: &str) -> Result<String> {
    let content = filepath_contents_as_string(filename)
        .with_context(|| format!("reading linked stylesheet '{}'", filename))?;
    Ok( format!("<style type=\"text/css\">{}</style>", content))
}

fn embed_js (filename: &str) -> Result<String> {
    let content = filepath_contents_as_string(filename)
        .with_context(|| format!("reading external script '{}'", filename))?;
    Ok( format!("<script type=\"text/javascript\">{}</script>", content))
}

fn embed_svg (filename: &str) -> Result<String> {
    filepath_contents_as_string(filename)
        .with_context(|| format!("reading svg image '{}'", filename))
}

fn embed_raster (filename: &str, img_format: &str) -> Result<String> {
    let bytes = filepath_contents_as_bytes(filename)
        .with_context(|| format!("reading {} image '{}'", img_format, filename))?;
    let encoded = utf8_percent_encode( &STANDARD.encode(&bytes), B64_QUOTE).to_string();
    Ok( format!("data:image/{};base64,{}", img_format, encoded))
}
