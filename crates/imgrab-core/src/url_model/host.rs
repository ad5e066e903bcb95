//! Host allow-list. Hosts are compared as whole strings, never by containment.

/// Host serving raw image files.
pub const IMAGE_HOST: &str = "i.imgur.com";

/// Hosts serving image, album and gallery pages.
const PAGE_HOSTS: [&str; 3] = ["imgur.com", "www.imgur.com", "m.imgur.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// Album, gallery and image pages.
    Page,
    /// Direct image files only.
    Image,
}

/// Returns which kind of service host `host` is, or `None` for anything else.
///
/// `host` is expected in the form produced by URL parsing (lowercase, no port).
/// A single trailing root dot is tolerated.
pub fn classify_host(host: &str) -> Option<HostKind> {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.eq_ignore_ascii_case(IMAGE_HOST) {
        Some(HostKind::Image)
    } else if PAGE_HOSTS.iter().any(|h| host.eq_ignore_ascii_case(h)) {
        Some(HostKind::Page)
    } else {
        None
    }
}
