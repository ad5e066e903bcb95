//! Console lines for verbose runs. Write errors on the console are ignored.

use std::io::Write;

use super::ItemError;
use crate::fetch::FetchError;

pub(super) fn item(out: &mut dyn Write, current: usize, total: usize, url: &str) {
    let _ = writeln!(out, "Progress: {current}/{total}. Downloading: {url}");
}

pub(super) fn failure(out: &mut dyn Write, err: &ItemError) {
    let _ = match err {
        ItemError::Fetch(FetchError::Status(code)) => {
            writeln!(out, "Could not download, error status: {code}")
        }
        ItemError::Fetch(FetchError::Transport { reason }) => {
            writeln!(out, "Something went wrong: {reason}")
        }
        other => writeln!(out, "Something went wrong: {other}"),
    };
}
