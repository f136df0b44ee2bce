//! Parser states, grouped by parsing phase.
//!
//! Exactly one state is active at a time and it fully determines which
//! parser fields are meaningful. Grouping the states by phase keeps the
//! transition match exhaustive per phase, so a state that nothing
//! handles cannot exist.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Terminal state entered on the first grammar violation. Absorbing:
    /// no byte is consumed and no event is emitted once here.
    ProtocolError,

    /// Dispatch state at the start of every message. Re-initializes the
    /// per-message fields, then hands over to the start-line (or header)
    /// phase selected by the parse mode.
    MessageBegin,

    RequestLine(RequestLineState),
    StatusLine(StatusLineState),
    Header(HeaderState),
    Lws(LwsState),
    Content(ContentState),
}

/// Request-Line = Method SP Request-URI SP HTTP-Version CRLF
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestLineState {
    Begin,
    Method,
    EntityBegin,
    Entity,
    ProtocolH,
    ProtocolT1,
    ProtocolT2,
    ProtocolP,
    ProtocolSlash,
    VersionMajor,
    VersionMinor,
    LineLf,
    /// A CR directly after the entity announces an HTTP/0.9 simple
    /// request, which has no version literal, no headers and no body.
    SimpleLineLf,
}

/// Status-Line = HTTP-Version SP Status-Code SP Reason-Phrase CRLF
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLineState {
    ProtocolH,
    ProtocolT1,
    ProtocolT2,
    ProtocolP,
    ProtocolSlash,
    VersionMajor,
    VersionMinor,
    CodeBegin,
    Code,
    ReasonBegin,
    Reason,
    LineLf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderState {
    NameBegin,
    Name,
    Colon,
    ValueBegin,
    Value,
    ValueLf,
    /// Dispatch state: the finished header is handed to the listener
    /// without consuming the byte under the cursor.
    ValueEnd,
    EndLf,
}

/// LWS = [CR LF] 1*(SP | HT)
///
/// Entered with two continuation states on the parser: `lws_next` to
/// resume once fold whitespace is consumed (or none was needed), and
/// `lws_null` for a CRLF that is not followed by fold whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LwsState {
    Begin,
    Lf,
    FoldBegin,
    Fold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentState {
    /// Dispatch state selecting one of the three framings below.
    Begin,
    Fixed,
    Unbounded,
    ChunkSizeBegin,
    ChunkSize,
    ChunkSizeLf,
    ChunkData,
    ChunkDataLf,
    ChunkEndCr,
    ChunkEndLf,
}

impl State {
    pub fn is_header(self) -> bool {
        matches!(self, State::Header(_))
    }

    pub fn is_content(self) -> bool {
        matches!(self, State::Content(_))
    }
}
