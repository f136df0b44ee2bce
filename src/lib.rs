#![forbid(unsafe_code)]

//! An incremental (but simple, safe and strict) push parser for HTTP/1.x
//! messages.
//!
//! See [RFC 2616](https://tools.ietf.org/html/rfc2616).
//!
//! The parser consumes a byte stream fragment by fragment, in whatever
//! sizes the transport happens to deliver, and reports start-lines,
//! headers and body chunks to a [`Listener`] as soon as they are
//! complete. It performs no I/O of its own and interprets no headers
//! beyond the two that control message framing (`Content-Length` and
//! `Transfer-Encoding: chunked`).
//!
//! # Simple example
//!
//! ```
//! use driphttp::{Listener, Mode, Parser};
//!
//! #[derive(Default)]
//! struct BodyCollector {
//!     body: Vec<u8>,
//!     done: bool,
//! }
//!
//! impl Listener for BodyCollector {
//!     fn on_content(&mut self, chunk: &[u8]) {
//!         self.body.extend_from_slice(chunk);
//!     }
//!
//!     fn on_message_end(&mut self) {
//!         self.done = true;
//!     }
//! }
//!
//! let mut parser = Parser::new(Mode::Request, BodyCollector::default());
//! let consumed = parser.parse_fragment(b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello");
//!
//! assert_eq!(consumed, 43);
//! assert!(parser.listener().done);
//! assert_eq!(parser.listener().body, b"hello");
//! ```

pub use http::Version;

mod character_types;
use crate::character_types::{is_printable_byte, is_text_byte, is_token_byte};

mod parse_headers;
use crate::parse_headers::{is_chunked_value, parse_content_length};

mod state;
use crate::state::{
    ContentState, HeaderState, LwsState, RequestLineState, State, StatusLineState,
};

mod version;
use crate::version::resolve_version;

mod listener;
pub use crate::listener::{Listener, MessageStart};

const CR: u8 = 0x0d;
const LF: u8 = 0x0a;
const SP: u8 = 0x20;
const HT: u8 = 0x09;

/// Which start-line grammar (if any) is parsed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The input is a sequence of HTTP requests, each starting with a
    /// request-line.
    Request,
    /// The input is a sequence of HTTP responses, each starting with a
    /// status-line.
    Response,
    /// The input has no start-line at all, just headers and a body.
    Message,
}

/// Parser configuration.
///
/// Mostly used for limiting lengths (and prevents DoS attacks).
/// You should always use `DEFAULT` unless you really know what
/// you are doing.
#[derive(Copy, Clone)]
pub struct Config {
    /// Used for request methods and header names (see the definition
    /// of `token` in the spec)
    pub max_token_length: usize,

    /// The “request target” is the thing between the method name and
    /// the HTTP version in the first line. Usually it’s an URI (but
    /// not always).
    pub max_request_target_length: usize,

    /// Maximum length of a header value, fold bytes included
    pub max_header_value_length: usize,

    /// Maximum length of a response reason phrase
    pub max_reason_length: usize,
}

impl Config {
    /// Should be sane defaults, suitable for most users.
    pub const DEFAULT: Config = Config {
        max_token_length: 32,
        max_request_target_length: 4 * 1024,
        max_header_value_length: 8 * 1024,
        max_reason_length: 64,
    };
}

/// An incremental HTTP/1.x message parser.
///
/// One instance is fed the bytes of one logical stream, in as many
/// fragments as the transport delivers; fragments do not have to come
/// from the same allocation. [`parse_fragment`](Parser::parse_fragment)
/// reports how many bytes it consumed, and the caller re-presents only
/// the unconsumed tail on the next call.
///
/// After each complete message the parser silently re-arms itself for
/// the next one, so pipelined messages parse back to back on a single
/// instance.
pub struct Parser<L: Listener> {
    mode: Mode,
    listener: L,
    config: Config,
    state: State,

    // stats
    bytes_received: u64,

    // implicit LWS handling
    lws_next: State,
    lws_null: State,

    // request-line
    method: Vec<u8>,
    entity: Vec<u8>,
    version_major: u32,
    version_minor: u32,

    // status-line
    code: u16,
    reason: Vec<u8>,

    // current parsed header
    name: Vec<u8>,
    value: Vec<u8>,

    // body framing
    chunked: bool,
    content_length: i64,
}

impl<L: Listener> Parser<L> {
    /// Creates a parser with [`Config::DEFAULT`].
    pub fn new(mode: Mode, listener: L) -> Parser<L> {
        Parser::with_config(mode, listener, Config::DEFAULT)
    }

    pub fn with_config(mode: Mode, listener: L, config: Config) -> Parser<L> {
        Parser {
            mode,
            listener,
            config,
            state: State::MessageBegin,
            bytes_received: 0,
            lws_next: State::MessageBegin,
            lws_null: State::MessageBegin,
            method: Vec::new(),
            entity: Vec::new(),
            version_major: 0,
            version_minor: 0,
            code: 0,
            reason: Vec::new(),
            name: Vec::new(),
            value: Vec::new(),
            chunked: false,
            content_length: -1,
        }
    }

    /// The value of the last `Content-Length` header, or the bytes
    /// still expected for the fixed-length body or chunk currently
    /// being consumed. `-1` when no length is known.
    pub fn content_length(&self) -> i64 {
        self.content_length
    }

    /// Whether `Transfer-Encoding: chunked` has been seen on the
    /// current message.
    pub fn is_chunked(&self) -> bool {
        self.chunked
    }

    /// Total number of bytes consumed over the lifetime of this
    /// instance. Survives the message-to-message re-arm; cleared only
    /// by [`reset`](Parser::reset).
    pub fn bytes_received(&self) -> u64 {
        self.bytes_received
    }

    pub fn is_processing_header(&self) -> bool {
        self.state.is_header()
    }

    pub fn is_processing_body(&self) -> bool {
        self.state.is_content()
    }

    /// Whether a message body follows the header block.
    ///
    /// An unset `Content-Length` means "no body" on a request and
    /// "body until the transport closes" on anything else.
    pub fn is_content_expected(&self) -> bool {
        self.content_length > 0
            || self.chunked
            || (self.content_length < 0 && self.mode != Mode::Request)
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Returns the parser to its initial state and zeroes the byte
    /// counter, for reuse on an unrelated stream. This is also the only
    /// way out of the protocol-error state.
    pub fn reset(&mut self) {
        self.state = State::MessageBegin;
        self.bytes_received = 0;
        self.begin_message();
    }

    /// Consumes as much of `fragment` as constitutes complete parsing
    /// progress and returns the number of bytes consumed.
    ///
    /// The return value is less than `fragment.len()` when a message
    /// boundary is reached (so that pipelined input stays with the
    /// caller), when the fragment ends in an incomplete token, or after
    /// a protocol error, which leaves the parser in a terminal state
    /// that consumes nothing further.
    pub fn parse_fragment(&mut self, fragment: &[u8]) -> usize {
        let consumed = self.run(fragment);
        self.bytes_received += consumed as u64;
        consumed
    }

    fn run(&mut self, fragment: &[u8]) -> usize {
        let mut pos = 0;

        while pos < fragment.len() {
            let byte = fragment[pos];

            match self.state {
                State::ProtocolError => break,

                State::MessageBegin => {
                    self.begin_message();
                    match self.mode {
                        Mode::Request => {
                            self.state = State::RequestLine(RequestLineState::Begin);
                        }
                        Mode::Response => {
                            self.state = State::StatusLine(StatusLineState::ProtocolH);
                        }
                        Mode::Message => {
                            // no start-line to wait for
                            self.state = State::Header(HeaderState::NameBegin);
                            self.listener.on_message_begin(MessageStart::Generic);
                        }
                    }
                }

                State::RequestLine(RequestLineState::Begin) => {
                    if is_token_byte(byte) {
                        self.method.push(byte);
                        self.state = State::RequestLine(RequestLineState::Method);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::Method) => {
                    if byte == SP {
                        self.state = State::RequestLine(RequestLineState::EntityBegin);
                        pos += 1;
                    } else if is_token_byte(byte) {
                        if self.method.len() < self.config.max_token_length {
                            self.method.push(byte);
                            pos += 1;
                        } else {
                            self.protocol_error();
                        }
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::EntityBegin) => {
                    if is_printable_byte(byte) {
                        self.entity.push(byte);
                        self.state = State::RequestLine(RequestLineState::Entity);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::Entity) => {
                    if byte == SP {
                        self.state = State::RequestLine(RequestLineState::ProtocolH);
                        pos += 1;
                    } else if byte == CR {
                        self.state = State::RequestLine(RequestLineState::SimpleLineLf);
                        pos += 1;
                    } else if is_printable_byte(byte) {
                        if self.entity.len() < self.config.max_request_target_length {
                            self.entity.push(byte);
                            pos += 1;
                        } else {
                            self.protocol_error();
                        }
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::SimpleLineLf) => {
                    if byte == LF {
                        pos += 1;
                        self.state = State::MessageBegin;
                        self.listener.on_message_begin(MessageStart::Request {
                            method: &self.method,
                            entity: &self.entity,
                            version: Version::HTTP_09,
                        });
                        self.listener.on_header_end();
                        self.listener.on_message_end();
                        return pos;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::ProtocolH) => {
                    if byte == b'H' {
                        self.state = State::RequestLine(RequestLineState::ProtocolT1);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::ProtocolT1) => {
                    if byte == b'T' {
                        self.state = State::RequestLine(RequestLineState::ProtocolT2);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::ProtocolT2) => {
                    if byte == b'T' {
                        self.state = State::RequestLine(RequestLineState::ProtocolP);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::ProtocolP) => {
                    if byte == b'P' {
                        self.state = State::RequestLine(RequestLineState::ProtocolSlash);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::ProtocolSlash) => {
                    if byte == b'/' {
                        self.state = State::RequestLine(RequestLineState::VersionMajor);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::VersionMajor) => {
                    if byte == b'.' {
                        self.state = State::RequestLine(RequestLineState::VersionMinor);
                        pos += 1;
                    } else if byte.is_ascii_digit() {
                        self.version_major = push_digit(self.version_major, byte);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::VersionMinor) => {
                    if byte == CR {
                        self.state = State::RequestLine(RequestLineState::LineLf);
                        pos += 1;
                    } else if byte.is_ascii_digit() {
                        self.version_minor = push_digit(self.version_minor, byte);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::RequestLine(RequestLineState::LineLf) => {
                    if byte == LF {
                        pos += 1;
                        match resolve_version(self.version_major, self.version_minor) {
                            Some(version) => {
                                self.state = State::Header(HeaderState::NameBegin);
                                self.listener.on_message_begin(MessageStart::Request {
                                    method: &self.method,
                                    entity: &self.entity,
                                    version,
                                });
                            }
                            None => self.protocol_error(),
                        }
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::ProtocolH) => {
                    if byte == b'H' {
                        self.state = State::StatusLine(StatusLineState::ProtocolT1);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::ProtocolT1) => {
                    if byte == b'T' {
                        self.state = State::StatusLine(StatusLineState::ProtocolT2);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::ProtocolT2) => {
                    if byte == b'T' {
                        self.state = State::StatusLine(StatusLineState::ProtocolP);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::ProtocolP) => {
                    if byte == b'P' {
                        self.state = State::StatusLine(StatusLineState::ProtocolSlash);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::ProtocolSlash) => {
                    if byte == b'/' {
                        self.state = State::StatusLine(StatusLineState::VersionMajor);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::VersionMajor) => {
                    if byte == b'.' {
                        self.state = State::StatusLine(StatusLineState::VersionMinor);
                        pos += 1;
                    } else if byte.is_ascii_digit() {
                        self.version_major = push_digit(self.version_major, byte);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::VersionMinor) => {
                    if byte == SP {
                        self.state = State::StatusLine(StatusLineState::CodeBegin);
                        pos += 1;
                    } else if byte.is_ascii_digit() {
                        self.version_minor = push_digit(self.version_minor, byte);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::CodeBegin) => {
                    if byte.is_ascii_digit() {
                        self.state = State::StatusLine(StatusLineState::Code);
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::Code) => {
                    if byte.is_ascii_digit() {
                        self.code = self
                            .code
                            .saturating_mul(10)
                            .saturating_add(u16::from(byte - b'0'));
                        pos += 1;
                    } else if byte == SP {
                        self.state = State::StatusLine(StatusLineState::ReasonBegin);
                        pos += 1;
                    } else if byte == CR {
                        // no reason phrase at all
                        self.state = State::StatusLine(StatusLineState::LineLf);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::ReasonBegin) => {
                    if is_text_byte(byte) {
                        self.reason.push(byte);
                        self.state = State::StatusLine(StatusLineState::Reason);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::Reason) => {
                    if byte == CR {
                        self.state = State::StatusLine(StatusLineState::LineLf);
                        pos += 1;
                    } else if is_text_byte(byte) {
                        if self.reason.len() < self.config.max_reason_length {
                            self.reason.push(byte);
                            pos += 1;
                        } else {
                            self.protocol_error();
                        }
                    } else {
                        self.protocol_error();
                    }
                }

                State::StatusLine(StatusLineState::LineLf) => {
                    if byte == LF {
                        pos += 1;
                        match resolve_version(self.version_major, self.version_minor) {
                            Some(version) => {
                                self.state = State::Header(HeaderState::NameBegin);
                                self.listener.on_message_begin(MessageStart::Response {
                                    version,
                                    code: self.code,
                                    reason: &self.reason,
                                });
                            }
                            None => self.protocol_error(),
                        }
                    } else {
                        self.protocol_error();
                    }
                }

                State::Header(HeaderState::NameBegin) => {
                    if is_token_byte(byte) {
                        self.name.push(byte);
                        self.state = State::Header(HeaderState::Name);
                        pos += 1;
                    } else if byte == CR {
                        self.state = State::Header(HeaderState::EndLf);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Header(HeaderState::Name) => {
                    if is_token_byte(byte) {
                        if self.name.len() < self.config.max_token_length {
                            self.name.push(byte);
                            pos += 1;
                        } else {
                            self.protocol_error();
                        }
                    } else if byte == b':' {
                        self.state = State::Lws(LwsState::Begin);
                        self.lws_next = State::Header(HeaderState::ValueBegin);
                        // a plain CRLF here means an empty value: finish
                        // the header and go on with the next one
                        self.lws_null = State::Header(HeaderState::ValueEnd);
                        pos += 1;
                    } else if byte == CR {
                        // the colon may sit on a folded continuation line
                        self.state = State::Lws(LwsState::Lf);
                        self.lws_next = State::Header(HeaderState::Colon);
                        self.lws_null = State::ProtocolError;
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Header(HeaderState::Colon) => {
                    if byte == b':' {
                        self.state = State::Lws(LwsState::Begin);
                        self.lws_next = State::Header(HeaderState::ValueBegin);
                        self.lws_null = State::Header(HeaderState::ValueEnd);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Lws(LwsState::Begin) => {
                    if byte == CR {
                        self.state = State::Lws(LwsState::Lf);
                        pos += 1;
                    } else if byte == SP || byte == HT {
                        self.state = State::Lws(LwsState::Fold);
                        pos += 1;
                    } else if is_printable_byte(byte) {
                        self.state = self.lws_next;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Lws(LwsState::Lf) => {
                    if byte == LF {
                        self.state = State::Lws(LwsState::FoldBegin);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Lws(LwsState::FoldBegin) => {
                    if byte == SP || byte == HT {
                        // confirmed fold: a non-empty value keeps the raw
                        // CR LF (SP | HT) bytes
                        if self.value.is_empty() {
                            self.state = State::Lws(LwsState::Fold);
                            pos += 1;
                        } else if self.value.len() + 3 <= self.config.max_header_value_length {
                            self.value.extend_from_slice(&[CR, LF, byte]);
                            self.state = State::Lws(LwsState::Fold);
                            pos += 1;
                        } else {
                            self.protocol_error();
                        }
                    } else if self.lws_null == State::ProtocolError {
                        self.protocol_error();
                    } else {
                        // only CRLF parsed, no fold whitespace: the byte
                        // belongs to whatever comes next
                        self.state = self.lws_null;
                    }
                }

                State::Lws(LwsState::Fold) => {
                    if byte == SP || byte == HT {
                        if self.value.is_empty() {
                            pos += 1;
                        } else if self.value.len() < self.config.max_header_value_length {
                            self.value.push(byte);
                            pos += 1;
                        } else {
                            self.protocol_error();
                        }
                    } else {
                        self.state = self.lws_next;
                    }
                }

                State::Header(HeaderState::ValueBegin) => {
                    if is_text_byte(byte) {
                        self.value.push(byte);
                        self.state = State::Header(HeaderState::Value);
                        pos += 1;
                    } else if byte == CR {
                        self.state = State::Header(HeaderState::ValueLf);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Header(HeaderState::Value) => {
                    if byte == CR {
                        self.state = State::Lws(LwsState::Lf);
                        self.lws_next = State::Header(HeaderState::Value);
                        self.lws_null = State::Header(HeaderState::ValueEnd);
                        pos += 1;
                    } else if is_text_byte(byte) {
                        if self.value.len() < self.config.max_header_value_length {
                            self.value.push(byte);
                            pos += 1;
                        } else {
                            self.protocol_error();
                        }
                    } else {
                        self.protocol_error();
                    }
                }

                State::Header(HeaderState::ValueLf) => {
                    if byte == LF {
                        self.state = State::Header(HeaderState::ValueEnd);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Header(HeaderState::ValueEnd) => {
                    self.end_header();
                }

                State::Header(HeaderState::EndLf) => {
                    if byte == LF {
                        pos += 1;
                        let expected = self.is_content_expected();
                        self.state = if expected {
                            State::Content(ContentState::Begin)
                        } else {
                            State::MessageBegin
                        };
                        self.listener.on_header_end();
                        if !expected {
                            self.listener.on_message_end();
                            return pos;
                        }
                    } else {
                        self.protocol_error();
                    }
                }

                State::Content(ContentState::Begin) => {
                    self.state = State::Content(if self.chunked {
                        ContentState::ChunkSizeBegin
                    } else if self.content_length >= 0 {
                        ContentState::Fixed
                    } else {
                        ContentState::Unbounded
                    });
                }

                State::Content(ContentState::Unbounded) => {
                    // no framing at all: hand over whatever is left and
                    // wait for the transport to end
                    self.listener.on_content(&fragment[pos..]);
                    pos = fragment.len();
                }

                State::Content(ContentState::Fixed) => {
                    let rest = fragment.len() - pos;
                    let take = if self.content_length < rest as i64 {
                        self.content_length as usize
                    } else {
                        rest
                    };
                    self.content_length -= take as i64;
                    self.listener.on_content(&fragment[pos..pos + take]);
                    pos += take;

                    if self.content_length == 0 {
                        self.state = State::MessageBegin;
                        self.listener.on_message_end();
                        return pos;
                    }
                }

                State::Content(ContentState::ChunkSizeBegin) => {
                    if byte.is_ascii_hexdigit() {
                        self.content_length = 0;
                        self.state = State::Content(ContentState::ChunkSize);
                    } else {
                        self.protocol_error();
                    }
                }

                State::Content(ContentState::ChunkSize) => {
                    if byte == CR {
                        self.state = State::Content(ContentState::ChunkSizeLf);
                        pos += 1;
                    } else if byte.is_ascii_digit() {
                        self.content_length = self
                            .content_length
                            .saturating_mul(16)
                            .saturating_add(i64::from(byte - b'0'));
                        pos += 1;
                    } else if (b'a'..=b'f').contains(&byte) {
                        self.content_length = self
                            .content_length
                            .saturating_mul(16)
                            .saturating_add(i64::from(10 + byte - b'a'));
                        pos += 1;
                    } else if (b'A'..=b'F').contains(&byte) {
                        self.content_length = self
                            .content_length
                            .saturating_mul(16)
                            .saturating_add(i64::from(10 + byte - b'A'));
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Content(ContentState::ChunkSizeLf) => {
                    if byte == LF {
                        self.state = State::Content(if self.content_length != 0 {
                            ContentState::ChunkData
                        } else {
                            ContentState::ChunkEndCr
                        });
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Content(ContentState::ChunkData) => {
                    if self.content_length > 0 {
                        let rest = fragment.len() - pos;
                        let take = if self.content_length < rest as i64 {
                            self.content_length as usize
                        } else {
                            rest
                        };
                        self.content_length -= take as i64;
                        self.listener.on_content(&fragment[pos..pos + take]);
                        pos += take;
                    } else if byte == CR {
                        self.state = State::Content(ContentState::ChunkDataLf);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Content(ContentState::ChunkDataLf) => {
                    if byte == LF {
                        self.state = State::Content(ContentState::ChunkSize);
                        pos += 1;
                    } else {
                        self.protocol_error();
                    }
                }

                State::Content(ContentState::ChunkEndCr) => {
                    if byte == CR {
                        self.state = State::Content(ContentState::ChunkEndLf);
                        pos += 1;
                    } else {
                        // trailer headers after the terminal chunk are
                        // not supported
                        self.protocol_error();
                    }
                }

                State::Content(ContentState::ChunkEndLf) => {
                    if byte == LF {
                        pos += 1;
                        self.state = State::MessageBegin;
                        self.listener.on_message_end();
                        return pos;
                    } else {
                        self.protocol_error();
                    }
                }
            }
        }

        if self.state == State::Content(ContentState::Begin)
            && self.content_length < 0
            && !self.chunked
            && self.mode == Mode::Request
        {
            // all headers parsed and nothing frames a body: the message
            // is already complete
            self.state = State::MessageBegin;
            self.listener.on_message_end();
        }

        pos
    }

    fn begin_message(&mut self) {
        self.method.clear();
        self.entity.clear();
        self.version_major = 0;
        self.version_minor = 0;
        self.code = 0;
        self.reason.clear();
        self.name.clear();
        self.value.clear();
        self.chunked = false;
        self.content_length = -1;
    }

    fn end_header(&mut self) {
        if self.name.eq_ignore_ascii_case(b"Content-Length") {
            match parse_content_length(&self.value) {
                Some(length) => self.content_length = length,
                None => {
                    self.protocol_error();
                    return;
                }
            }
            // the length is consumed here, but the header itself stays
            // visible to the application
            self.listener.on_header(&self.name, &self.value);
        } else if self.name.eq_ignore_ascii_case(b"Transfer-Encoding")
            && is_chunked_value(&self.value)
        {
            // pure transport-layer detail, not forwarded
            self.chunked = true;
        } else {
            self.listener.on_header(&self.name, &self.value);
        }

        self.name.clear();
        self.value.clear();

        // continue with the next header
        self.state = State::Header(HeaderState::NameBegin);
    }

    fn protocol_error(&mut self) {
        self.listener.on_protocol_error();
        self.state = State::ProtocolError;
    }
}

fn push_digit(accumulator: u32, byte: u8) -> u32 {
    accumulator
        .saturating_mul(10)
        .saturating_add(u32::from(byte - b'0'))
}
