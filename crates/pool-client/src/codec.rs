//! Generic little-endian account codec.
//!
//! Every protocol account shares the same shape: an 8-byte discriminator
//! followed by a fixed field layout. One bounds-checked cursor pair plus
//! the [`AccountRecord`] trait covers all of them; record types only spell
//! out their field order.

use sol_core::Pubkey;

use crate::error::ClientError;

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Bounds-checked cursor over raw account bytes. Every read fails with
/// `TruncatedBuffer` instead of panicking.
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    /// Bytes consumed so far. Lets an embedding reader continue past a
    /// record that does not span the whole buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], ClientError> {
        if self.remaining() < n {
            return Err(ClientError::TruncatedBuffer {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, ClientError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_bool(&mut self) -> Result<bool, ClientError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16, ClientError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, ClientError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64(&mut self) -> Result<u64, ClientError> {
        let mut arr = [0u8; 8];
        arr.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(arr))
    }

    pub fn read_i64(&mut self) -> Result<i64, ClientError> {
        let mut arr = [0u8; 8];
        arr.copy_from_slice(self.take(8)?);
        Ok(i64::from_le_bytes(arr))
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, ClientError> {
        let mut arr = [0u8; 32];
        arr.copy_from_slice(self.take(32)?);
        Ok(Pubkey::new(arr))
    }

    /// Optional value: 1-byte presence flag, then the payload if present.
    pub fn read_option<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T, ClientError>,
    ) -> Result<Option<T>, ClientError> {
        if self.read_bool()? {
            Ok(Some(read(self)?))
        } else {
            Ok(None)
        }
    }

    /// Vector: u32 LE element count, then the elements. Decoding stops
    /// exactly at the computed end.
    pub fn read_vec<T>(
        &mut self,
        mut read: impl FnMut(&mut Self) -> Result<T, ClientError>,
    ) -> Result<Vec<T>, ClientError> {
        let count = self.read_u32()? as usize;
        let mut items = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            items.push(read(self)?);
        }
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Append-only little-endian sink. Infallible; the inverse of [`Reader`].
#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Writer::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_bool(&mut self, v: bool) {
        self.buf.push(v as u8);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_pubkey(&mut self, v: &Pubkey) {
        self.buf.extend_from_slice(v.as_bytes());
    }

    pub fn write_bytes(&mut self, v: &[u8]) {
        self.buf.extend_from_slice(v);
    }

    pub fn write_option<T>(&mut self, v: &Option<T>, write: impl FnOnce(&mut Self, &T)) {
        match v {
            Some(inner) => {
                self.write_bool(true);
                write(self, inner);
            }
            None => self.write_bool(false),
        }
    }

    pub fn write_vec<T>(&mut self, items: &[T], mut write: impl FnMut(&mut Self, &T)) {
        self.write_u32(items.len() as u32);
        for item in items {
            write(self, item);
        }
    }
}

// ---------------------------------------------------------------------------
// AccountRecord
// ---------------------------------------------------------------------------

/// A discriminated fixed-layout account record.
///
/// Implementors spell out only their field order; discriminator handling,
/// truncation checks and the encode/decode entry points are provided here.
pub trait AccountRecord: Sized {
    /// Human-readable kind name, used in `WrongAccountKind` diagnostics.
    const KIND: &'static str;

    /// Fixed 8-byte discriminator that opens every account of this kind.
    const DISCRIMINATOR: [u8; 8];

    fn read_fields(reader: &mut Reader<'_>) -> Result<Self, ClientError>;

    fn write_fields(&self, writer: &mut Writer);

    /// Decode from raw account bytes. The discriminator is checked before
    /// any field is touched.
    fn decode(data: &[u8]) -> Result<Self, ClientError> {
        Self::decode_with_len(data).map(|(record, _)| record)
    }

    /// Decode and report the end offset, for readers embedded in a larger
    /// buffer.
    fn decode_with_len(data: &[u8]) -> Result<(Self, usize), ClientError> {
        let mut reader = Reader::new(data);

        let mut tag = [0u8; 8];
        tag.copy_from_slice(reader.take(8)?);
        if tag != Self::DISCRIMINATOR {
            return Err(ClientError::WrongAccountKind {
                expected: Self::KIND,
                found: tag,
            });
        }

        let record = Self::read_fields(&mut reader)?;
        Ok((record, reader.position()))
    }

    fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        writer.write_bytes(&Self::DISCRIMINATOR);
        self.write_fields(&mut writer);
        writer.into_bytes()
    }
}
