//! Fetching font bytes from a URL or a local path.

use std::{fs::read, path::PathBuf};

use log::info;
use reqwest::blocking::get;

use crate::error::{Error, Result};

/// Source of font bytes.
pub trait FontFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F> FontFetcher for F
where
    F: Fn(&str) -> Result<Vec<u8>>,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self(url)
    }
}

/// Fetches `http(s)://` URLs with a blocking GET and reads anything else from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFetcher;

impl FontFetcher for DefaultFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if is_remote(url) {
            let response = get(url).map_err(|source| Error::Fetch { url: url.into(), source })?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status { url: url.into(), status });
            }
            let bytes =
                response.bytes().map_err(|source| Error::Fetch { url: url.into(), source })?;

            let size_kb = bytes.len() as f64 / 1024.0;
            info!("fetched {url} ({size_kb:.1} KB)");
            Ok(bytes.to_vec())
        } else {
            let path = PathBuf::from(url.strip_prefix("file://").unwrap_or(url));
            read(&path).map_err(|source| Error::Io { path, source })
        }
    }
}

pub fn is_remote(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_remote_urls() {
        assert!(is_remote("https://example.com/a.woff2"));
        assert!(is_remote("HTTP://example.com/a.ttf"));
        assert!(!is_remote("fonts/a.ttf"));
        assert!(!is_remote("file:///tmp/a.ttf"));
    }

    #[test]
    fn reads_local_files() {
        let path = std::env::temp_dir().join("vf-displayer-font-fetch-test.bin");
        std::fs::write(&path, b"font bytes").unwrap();

        let data = DefaultFetcher.fetch(path.to_str().unwrap()).unwrap();
        assert_eq!(data, b"font bytes");

        let url = format!("file://{}", path.display());
        assert_eq!(DefaultFetcher.fetch(&url).unwrap(), b"font bytes");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = DefaultFetcher.fetch("/nonexistent/vf-displayer/font.ttf");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
