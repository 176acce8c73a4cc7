//! Tokenizer for the COS object syntax.

use encoding_rs::{UTF_16BE, UTF_16LE};

use crate::foundation::error::{AepError, AepResult};

/// A lexed COS token.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    /// `/name`, with `#HH` escapes resolved.
    Name(String),
    /// An integer literal.
    Integer(i64),
    /// A real literal.
    Real(f64),
    /// A `(string)` that decoded as text.
    String(String),
    /// A `(string)` kept as raw bytes because decoding failed.
    RawString(Vec<u8>),
    /// A `<hex>` string.
    HexString(Vec<u8>),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
    /// `<<`.
    DictStart,
    /// `>>`.
    DictEnd,
    /// `[`.
    ArrayStart,
    /// `]`.
    ArrayEnd,
    /// `obj`.
    ObjStart,
    /// `endobj`.
    ObjEnd,
    /// `R`.
    Reference,
    /// Bytes between `stream` and `endstream`.
    Stream(Vec<u8>),
    /// End of input, also produced by the `xref` keyword.
    Eof,
}

const NAME_SPECIAL: &[u8] = b"()[]<>{}/%";

/// Byte-slice tokenizer. `base` is the absolute file offset of the slice,
/// used only for error reporting.
pub(crate) struct Lexer<'a> {
    data: &'a [u8],
    pos: usize,
    base: u64,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(data: &'a [u8], base: u64) -> Self {
        Self { data, pos: 0, base }
    }

    /// Current position, for checkpointing.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Rewind to a checkpointed position.
    pub(crate) fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn offset(&self) -> u64 {
        self.base + self.pos as u64
    }

    fn err(&self, reason: impl Into<String>) -> AepError {
        AepError::malformed_cos(self.offset(), reason)
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Lex the next token.
    pub(crate) fn next_token(&mut self) -> AepResult<Token> {
        let head = loop {
            match self.next_byte() {
                None => return Ok(Token::Eof),
                Some(b'%') => self.skip_comment(),
                Some(byte) if byte.is_ascii_whitespace() => {}
                Some(byte) => break byte,
            }
        };

        match head {
            b'<' => match self.next_byte() {
                Some(b'<') => Ok(Token::DictStart),
                Some(byte) if byte.is_ascii_hexdigit() => self.lex_hex_string(byte),
                _ => Err(self.err("stray `<`")),
            },
            b'>' => {
                if self.next_byte() == Some(b'>') {
                    Ok(Token::DictEnd)
                } else {
                    Err(self.err("stray `>`"))
                }
            }
            b'[' => Ok(Token::ArrayStart),
            b']' => Ok(Token::ArrayEnd),
            b'/' => self.lex_name(),
            b'(' => self.lex_string(),
            byte if byte.is_ascii_alphabetic() => self.lex_keyword(byte),
            byte if byte.is_ascii_digit() || matches!(byte, b'.' | b'+' | b'-') => {
                self.lex_number(byte)
            }
            byte => Err(self.err(format!("unknown token byte 0x{byte:02x}"))),
        }
    }

    fn skip_comment(&mut self) {
        while let Some(byte) = self.next_byte() {
            if byte == b'\n' {
                break;
            }
        }
    }

    fn lex_number(&mut self, head: u8) -> AepResult<Token> {
        let mut text = String::new();
        let mut fractional = false;
        match head {
            b'.' => {
                text.push_str("0.");
                fractional = true;
            }
            byte => text.push(byte as char),
        }
        while let Some(byte) = self.peek_byte() {
            match byte {
                b'.' if !fractional => {
                    fractional = true;
                    text.push('.');
                    self.pos += 1;
                }
                byte if byte.is_ascii_digit() => {
                    text.push(byte as char);
                    self.pos += 1;
                }
                _ => break,
            }
        }
        if fractional {
            text.parse::<f64>()
                .map(Token::Real)
                .map_err(|_| self.err(format!("bad number `{text}`")))
        } else {
            text.parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| self.err(format!("bad number `{text}`")))
        }
    }

    fn lex_keyword(&mut self, head: u8) -> AepResult<Token> {
        let mut keyword = String::new();
        keyword.push(head as char);
        while let Some(byte) = self.peek_byte() {
            if byte.is_ascii_alphabetic() {
                keyword.push(byte as char);
                self.pos += 1;
            } else {
                break;
            }
        }
        match keyword.as_str() {
            "true" => Ok(Token::Boolean(true)),
            "false" => Ok(Token::Boolean(false)),
            "null" => Ok(Token::Null),
            "obj" => Ok(Token::ObjStart),
            "endobj" => Ok(Token::ObjEnd),
            "R" => Ok(Token::Reference),
            "stream" => self.lex_stream(),
            "xref" => Ok(Token::Eof),
            _ => Err(self.err(format!("unknown keyword `{keyword}`"))),
        }
    }

    fn lex_stream(&mut self) -> AepResult<Token> {
        match self.next_byte() {
            Some(b'\r') => {
                if self.next_byte() != Some(b'\n') {
                    return Err(self.err("expected newline after `stream`"));
                }
            }
            Some(b'\n') => {}
            _ => return Err(self.err("expected newline after `stream`")),
        }
        let start = self.pos;
        let marker = b"endstream";
        loop {
            if self.pos >= self.data.len() {
                return Err(self.err("unterminated stream"));
            }
            self.pos += 1;
            if self.data[start..self.pos].ends_with(marker) {
                let end = self.pos - marker.len();
                return Ok(Token::Stream(self.data[start..end].to_vec()));
            }
        }
    }

    fn lex_string(&mut self) -> AepResult<Token> {
        let mut bytes = Vec::new();
        loop {
            let byte = self
                .next_byte()
                .ok_or_else(|| self.err("unterminated string"))?;
            match byte {
                b')' => break,
                b'\\' => bytes.push(self.lex_string_escape()?),
                b'\r' => {
                    if self.peek_byte() == Some(b'\n') {
                        self.pos += 1;
                    }
                    bytes.push(b'\n');
                }
                b'\n' => {
                    if self.peek_byte() == Some(b'\r') {
                        self.pos += 1;
                    }
                    bytes.push(b'\n');
                }
                byte => bytes.push(byte),
            }
        }
        Ok(decode_string(&bytes))
    }

    fn lex_string_escape(&mut self) -> AepResult<u8> {
        let byte = self
            .next_byte()
            .ok_or_else(|| self.err("unterminated string"))?;
        match byte {
            b'n' => Ok(b'\n'),
            b'r' => Ok(b'\r'),
            b'b' => Ok(0x08),
            b'f' => Ok(0x0c),
            b'(' | b')' | b'\\' => Ok(byte),
            b'0'..=b'7' => {
                let mut value = u32::from(byte - b'0');
                for _ in 0..2 {
                    match self.peek_byte() {
                        Some(digit @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(digit - b'0');
                            self.pos += 1;
                        }
                        _ => break,
                    }
                }
                Ok(value as u8)
            }
            _ => Err(self.err("invalid escape sequence")),
        }
    }

    fn lex_hex_string(&mut self, head: u8) -> AepResult<Token> {
        let mut digits = vec![head];
        loop {
            let byte = self
                .next_byte()
                .ok_or_else(|| self.err("unterminated hex string"))?;
            match byte {
                b'>' => break,
                byte if byte.is_ascii_hexdigit() => digits.push(byte),
                byte if byte.is_ascii_whitespace() => {}
                byte => return Err(self.err(format!("bad hex digit 0x{byte:02x}"))),
            }
        }
        // Odd digit counts are right-padded with zero.
        if digits.len() % 2 == 1 {
            digits.push(b'0');
        }
        let mut bytes = Vec::with_capacity(digits.len() / 2);
        for pair in digits.chunks_exact(2) {
            let hi = hex_value(pair[0]);
            let lo = hex_value(pair[1]);
            bytes.push(hi << 4 | lo);
        }
        Ok(Token::HexString(bytes))
    }

    fn lex_name(&mut self) -> AepResult<Token> {
        let mut name = String::new();
        while let Some(byte) = self.peek_byte() {
            if !(b'!'..=b'~').contains(&byte) || NAME_SPECIAL.contains(&byte) {
                break;
            }
            self.pos += 1;
            if byte == b'#' {
                let hi = self.next_byte().filter(u8::is_ascii_hexdigit);
                let lo = self.next_byte().filter(u8::is_ascii_hexdigit);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        name.push(char::from(hex_value(hi) << 4 | hex_value(lo)));
                    }
                    _ => return Err(self.err("invalid name escape")),
                }
            } else {
                name.push(byte as char);
            }
        }
        Ok(Token::Name(name))
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

/// Decode string bytes, honoring a UTF-8 or UTF-16 byte order mark. Bytes
/// that do not decode are kept raw.
fn decode_string(bytes: &[u8]) -> Token {
    if let Some(rest) = bytes.strip_prefix(b"\xef\xbb\xbf") {
        return match std::str::from_utf8(rest) {
            Ok(text) => Token::String(text.to_owned()),
            Err(_) => Token::RawString(rest.to_vec()),
        };
    }
    if let Some(rest) = bytes.strip_prefix(b"\xfe\xff") {
        let (text, _, malformed) = UTF_16BE.decode(rest);
        return if malformed {
            Token::RawString(rest.to_vec())
        } else {
            Token::String(text.into_owned())
        };
    }
    if let Some(rest) = bytes.strip_prefix(b"\xff\xfe") {
        let (text, _, malformed) = UTF_16LE.decode(rest);
        return if malformed {
            Token::RawString(rest.to_vec())
        } else {
            Token::String(text.into_owned())
        };
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => Token::String(text.to_owned()),
        Err(_) => Token::RawString(bytes.to_vec()),
    }
}
