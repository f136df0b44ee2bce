use http::Version;

/// Maps a parsed `major.minor` pair to one of the HTTP versions this
/// parser knows how to frame. Everything else is a protocol error for
/// the caller to raise.
///
/// `HTTP/0.9` is also reachable without any version literal at all,
/// through the simple-request form of the request line; that path does
/// not go through this function.
pub fn resolve_version(major: u32, minor: u32) -> Option<Version> {
    match (major, minor) {
        (0, 9) => Some(Version::HTTP_09),
        (1, 0) => Some(Version::HTTP_10),
        (1, 1) => Some(Version::HTTP_11),
        _ => None,
    }
}
