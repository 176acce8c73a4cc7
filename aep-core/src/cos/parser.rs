//! Recursive-descent parser for COS object data.

use crate::cos::lexer::{Lexer, Token};
use crate::cos::value::{CosDict, CosValue};
use crate::foundation::error::{AepError, AepResult};

/// Parse a COS byte blob. `base` is the absolute file offset of the blob,
/// used only for error reporting.
pub fn parse(data: &[u8], base: u64) -> AepResult<CosValue> {
    CosParser::new(data, base)?.parse()
}

struct CosParser<'a> {
    lexer: Lexer<'a>,
    lookahead: Token,
    base: u64,
}

impl<'a> CosParser<'a> {
    fn new(data: &'a [u8], base: u64) -> AepResult<Self> {
        let mut lexer = Lexer::new(data, base);
        let lookahead = lexer.next_token()?;
        Ok(Self {
            lexer,
            lookahead,
            base,
        })
    }

    /// Parse the whole input. Text stream blobs start with a bare key
    /// rather than `<<`, so a leading name parses as dictionary content;
    /// multiple top-level values collapse into an array.
    fn parse(mut self) -> AepResult<CosValue> {
        if matches!(self.lookahead, Token::Name(_)) {
            return Ok(CosValue::Dict(self.parse_dict_content()?));
        }
        let first = self.parse_value()?;
        if self.lookahead == Token::Eof {
            return Ok(first);
        }
        let mut items = vec![first];
        items.extend(self.parse_array_content()?);
        Ok(CosValue::Array(items))
    }

    fn advance(&mut self) -> AepResult<()> {
        self.lookahead = self.lexer.next_token()?;
        Ok(())
    }

    fn err(&self, reason: impl Into<String>) -> AepError {
        AepError::malformed_cos(self.base + self.lexer.position() as u64, reason)
    }

    fn parse_value(&mut self) -> AepResult<CosValue> {
        let value = match std::mem::replace(&mut self.lookahead, Token::Eof) {
            Token::Name(name) => CosValue::Name(name),
            Token::String(text) => CosValue::String(text),
            Token::RawString(bytes) => CosValue::RawString(bytes),
            Token::HexString(bytes) => CosValue::HexString(bytes),
            Token::Boolean(value) => CosValue::Boolean(value),
            Token::Null => CosValue::Null,
            Token::Real(value) => CosValue::Real(value),
            Token::Stream(data) => CosValue::Stream {
                dict: CosDict::new(),
                data,
            },
            Token::Integer(value) => {
                self.advance()?;
                return self.parse_after_integer(value);
            }
            Token::DictStart => {
                self.advance()?;
                let dict = self.parse_dict_content()?;
                if self.lookahead != Token::DictEnd {
                    return Err(self.err("expected `>>`"));
                }
                self.advance()?;
                if let Token::Stream(data) = &self.lookahead {
                    let data = data.clone();
                    self.advance()?;
                    return Ok(CosValue::Stream { dict, data });
                }
                return Ok(CosValue::Dict(dict));
            }
            Token::ArrayStart => {
                self.advance()?;
                let items = self.parse_array_content()?;
                if self.lookahead != Token::ArrayEnd {
                    return Err(self.err("expected `]`"));
                }
                self.advance()?;
                return Ok(CosValue::Array(items));
            }
            other => return Err(self.err(format!("expected a value, got {other:?}"))),
        };
        self.advance()?;
        Ok(value)
    }

    /// An integer may start an `N G obj` definition or an `N G R`
    /// reference; anything else rolls back to the plain number.
    fn parse_after_integer(&mut self, value: i64) -> AepResult<CosValue> {
        let Token::Integer(generation) = self.lookahead else {
            return Ok(CosValue::Integer(value));
        };
        let checkpoint = (self.lexer.position(), self.lookahead.clone());
        self.advance()?;
        match self.lookahead {
            Token::ObjStart => {
                self.advance()?;
                let inner = self.parse_value()?;
                if self.lookahead != Token::ObjEnd {
                    return Err(self.err("expected `endobj`"));
                }
                self.advance()?;
                Ok(CosValue::Indirect {
                    object_number: value,
                    generation_number: generation,
                    value: Box::new(inner),
                })
            }
            Token::Reference => {
                self.advance()?;
                Ok(CosValue::Reference {
                    object_number: value,
                    generation_number: generation,
                })
            }
            _ => {
                let (pos, lookahead) = checkpoint;
                self.lexer.seek(pos);
                self.lookahead = lookahead;
                Ok(CosValue::Integer(value))
            }
        }
    }

    fn parse_dict_content(&mut self) -> AepResult<CosDict> {
        let mut dict = CosDict::new();
        loop {
            match std::mem::replace(&mut self.lookahead, Token::Eof) {
                Token::Eof => {
                    self.lookahead = Token::Eof;
                    break;
                }
                Token::DictEnd => {
                    self.lookahead = Token::DictEnd;
                    break;
                }
                Token::Name(key) => {
                    self.advance()?;
                    let value = self.parse_value()?;
                    dict.insert(key, value);
                }
                other => return Err(self.err(format!("expected a key, got {other:?}"))),
            }
        }
        Ok(dict)
    }

    fn parse_array_content(&mut self) -> AepResult<Vec<CosValue>> {
        let mut items = Vec::new();
        while !matches!(self.lookahead, Token::Eof | Token::ArrayEnd) {
            items.push(self.parse_value()?);
        }
        Ok(items)
    }
}
