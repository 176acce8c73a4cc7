//! Bounds-checked big-endian reads over a byte slice.

use crate::foundation::error::{AepError, AepResult};

/// Decode a windows-1250 byte slice, stopping at the first NUL.
///
/// Fixed-width name fields in the container are NUL-padded code-page 1250.
pub fn decode_cp1250(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let (text, _, _) = encoding_rs::WINDOWS_1250.decode(&bytes[..end]);
    text.into_owned()
}

/// Bounds-checked big-endian reader over a byte slice.
///
/// Every read advances the position; a read past the end produces
/// [`AepError::Truncated`] carrying the absolute offset (slice base plus
/// local position) and the chunk path the cursor was created with.
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    base: u64,
    path: &'a str,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `data`, which starts at absolute offset `base`
    /// within the file, for error reporting under chunk path `path`.
    pub fn new(data: &'a [u8], base: u64, path: &'a str) -> Self {
        Self {
            data,
            pos: 0,
            base,
            path,
        }
    }

    /// Current local position within the slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Absolute file offset of the current position.
    pub fn offset(&self) -> u64 {
        self.base + self.pos as u64
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether the cursor has consumed the whole slice.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn ensure(&self, need: usize) -> AepResult<()> {
        if self.remaining() < need {
            return Err(AepError::truncated(
                self.path,
                self.offset(),
                need,
                self.remaining(),
            ));
        }
        Ok(())
    }

    /// Take `n` raw bytes.
    pub fn take(&mut self, n: usize) -> AepResult<&'a [u8]> {
        self.ensure(n)?;
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Skip `n` bytes of padding or reserved space.
    pub fn skip(&mut self, n: usize) -> AepResult<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> AepResult<u8> {
        self.ensure(1)?;
        let b = self.data[self.pos];
        self.pos += 1;
        Ok(b)
    }

    /// Read a big-endian `u16`.
    pub fn read_u16(&mut self) -> AepResult<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Read a big-endian `i16`.
    pub fn read_i16(&mut self) -> AepResult<i16> {
        let b = self.take(2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    /// Read a big-endian `u32`.
    pub fn read_u32(&mut self) -> AepResult<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a big-endian `i32`.
    pub fn read_i32(&mut self) -> AepResult<i32> {
        let b = self.take(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a big-endian `f32`.
    pub fn read_f32(&mut self) -> AepResult<f32> {
        let b = self.take(4)?;
        Ok(f32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a big-endian `f64`.
    pub fn read_f64(&mut self) -> AepResult<f64> {
        let b = self.take(8)?;
        Ok(f64::from_be_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Read a 4-byte tag field as raw bytes.
    pub fn read_four(&mut self) -> AepResult<[u8; 4]> {
        let b = self.take(4)?;
        Ok([b[0], b[1], b[2], b[3]])
    }

    /// Read `n` consecutive big-endian `f64` values.
    pub fn read_f64s(&mut self, n: usize) -> AepResult<Vec<f64>> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.read_f64()?);
        }
        Ok(out)
    }

    /// Read a fixed-width, NUL-padded windows-1250 string field.
    pub fn read_cp1250(&mut self, width: usize) -> AepResult<String> {
        Ok(decode_cp1250(self.take(width)?))
    }

    /// Read a NUL-terminated windows-1250 string from the remaining bytes.
    pub fn read_cp1250_to_nul(&mut self) -> AepResult<String> {
        let rest = &self.data[self.pos..];
        let end = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        self.pos = self.data.len().min(self.pos + end + 1);
        Ok(decode_cp1250(&rest[..end]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/cursor.rs"]
mod tests;
