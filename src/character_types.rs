
pub fn is_control_byte(byte: u8) -> bool {
    byte <= 31 || byte == 127
}

/// The fixed separator set from section 2.2 of RFC 2616
pub fn is_separator_byte(byte: u8) -> bool {
    match byte {
        b'(' | b')' | b'<' | b'>' | b'@'
        | b',' | b';' | b':' | b'\\' | b'"'
        | b'/' | b'[' | b']' | b'?' | b'='
        | b'{' | b'}' | b' ' | b'\t' => true,
        _ => false,
    }
}

/// token = 1*<any CHAR except CTLs or separators>
pub fn is_token_byte(byte: u8) -> bool {
    byte.is_ascii() && !is_control_byte(byte) && !is_separator_byte(byte)
}

/// TEXT = <any OCTET except CTLs but including LWS>
pub fn is_text_byte(byte: u8) -> bool {
    !is_control_byte(byte) || byte == b' ' || byte == b'\t'
}

pub fn is_printable_byte(byte: u8) -> bool {
    byte >= 0x20 && byte <= 0x7e
}
