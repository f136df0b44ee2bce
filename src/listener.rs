use http::Version;

/// The first event of every message, keyed by the parse mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStart<'a> {
    /// A request-line has been fully parsed.
    Request {
        /// The request method (e.g. `GET` or `POST`).
        method: &'a [u8],
        /// The requested entity (e.g. `/index.html`).
        entity: &'a [u8],
        /// The announced HTTP version; 0.9 for simple requests.
        version: Version,
    },

    /// A response status-line has been fully parsed.
    Response {
        version: Version,
        /// The raw status code digits (e.g. 200 or 404).
        code: u16,
        /// The reason phrase (e.g. `OK` or `Not Found`), possibly empty.
        reason: &'a [u8],
    },

    /// A header-only message carries no start-line, so there is nothing
    /// to report beyond the fact that parsing started.
    Generic,
}

/// Receiver for parse events.
///
/// Every hook has an empty default implementation, so implement only
/// what you need. Slices handed to a hook borrow from the parser or
/// from the fragment being parsed and are only valid for the duration
/// of that call; copy out whatever must outlive it.
pub trait Listener {
    /// Called once per message, as soon as the start-line (if any) is
    /// complete.
    fn on_message_begin(&mut self, _start: MessageStart<'_>) {}

    /// Called once per forwarded header, in receipt order.
    ///
    /// `Transfer-Encoding: chunked` is consumed by the parser itself
    /// and never reported; `Content-Length` is consumed but still
    /// reported.
    fn on_header(&mut self, _name: &[u8], _value: &[u8]) {}

    /// Called exactly once per message, after the last header.
    fn on_header_end(&mut self) {}

    /// Called zero or more times with decoded body bytes, in order.
    /// Concatenating the chunks yields the full body; chunk framing
    /// and length accounting never appear in the payload.
    fn on_content(&mut self, _chunk: &[u8]) {}

    /// Called exactly once per successfully parsed message.
    fn on_message_end(&mut self) {}

    /// Called at most once, at the first grammar violation. No further
    /// event follows for this stream until the parser is reset.
    fn on_protocol_error(&mut self) {}
}
