//! Flat buffer protocol for handing a series to JS without serialization
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x50475352 = "PGSR" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     page_lo
//! [3]     page_hi
//! [4]     last_lo
//! [5]     last_hi
//! [6]     item_count
//! [7..]   items
//!
//! Per-item: [opcode, value_lo, value_hi]
//!   opcode: OP_PAGE, OP_CURRENT or OP_GAP (value is 0 for gaps)
//! ```

use crate::series::{Series, SeriesItem};
use thiserror::Error;

/// Magic number for format validation: "PGSR" (PaGe SeRies)
pub const MAGIC: u32 = 0x50475352;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 7;

/// Number of u32 values per series item
pub const U32_PER_ITEM: usize = 3;

/// Opcodes for series items
pub const OP_PAGE: u32 = 0;
pub const OP_CURRENT: u32 = 1;
pub const OP_GAP: u32 = 2;

/// Reasons a buffer cannot be decoded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("bad magic number: {0:#010x}")]
    BadMagic(u32),

    #[error("unsupported schema version: {0}")]
    UnsupportedVersion(u32),

    #[error("buffer truncated: expected {expected} u32 values, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("unknown opcode {opcode} at item {index}")]
    UnknownOpcode { opcode: u32, index: usize },
}

/// A series decoded from a flat buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSeries {
    pub page: u64,
    pub last: u64,
    pub series: Series,
}

fn split(value: u64) -> (u32, u32) {
    ((value & 0xFFFF_FFFF) as u32, (value >> 32) as u32)
}

fn join(lo: u32, hi: u32) -> u64 {
    u64::from(lo) | (u64::from(hi) << 32)
}

/// Reusable buffer for encoded series
#[derive(Debug, Default)]
pub struct SeriesBuffer {
    pub u32_data: Vec<u32>,
}

impl SeriesBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(HEADER_SIZE + 16 * U32_PER_ITEM),
        }
    }

    pub fn clear(&mut self) {
        self.u32_data.clear();
    }

    /// Replace the buffer contents with `series`
    pub fn write_series(&mut self, page: u64, last: u64, series: &Series) {
        self.clear();
        self.u32_data.reserve(HEADER_SIZE + series.len() * U32_PER_ITEM);

        let (page_lo, page_hi) = split(page);
        let (last_lo, last_hi) = split(last);
        self.u32_data.push(MAGIC);
        self.u32_data.push(SCHEMA_VERSION);
        self.u32_data.push(page_lo);
        self.u32_data.push(page_hi);
        self.u32_data.push(last_lo);
        self.u32_data.push(last_hi);
        self.u32_data.push(series.len() as u32);

        for item in series {
            let (opcode, value) = match *item {
                SeriesItem::Page(n) => (OP_PAGE, n),
                SeriesItem::Current(n) => (OP_CURRENT, n),
                SeriesItem::Gap => (OP_GAP, 0),
            };
            let (lo, hi) = split(value);
            self.u32_data.push(opcode);
            self.u32_data.push(lo);
            self.u32_data.push(hi);
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.u32_data
    }

    // Return u32 instead of usize for explicit WASM contract (wasm32 linear memory uses u32 offsets)

    pub fn u32_ptr(&self) -> u32 {
        self.u32_data.as_ptr() as u32
    }

    pub fn u32_len(&self) -> u32 {
        self.u32_data.len() as u32
    }
}

/// Decode a buffer produced by [`SeriesBuffer::write_series`]
pub fn decode_series(data: &[u32]) -> Result<DecodedSeries, BufferError> {
    if data.len() < HEADER_SIZE {
        return Err(BufferError::Truncated {
            expected: HEADER_SIZE,
            found: data.len(),
        });
    }
    if data[0] != MAGIC {
        return Err(BufferError::BadMagic(data[0]));
    }
    if data[1] != SCHEMA_VERSION {
        return Err(BufferError::UnsupportedVersion(data[1]));
    }

    let item_count = data[6] as usize;
    // A corrupt count can overflow `usize` on 32-bit targets.
    let expected = item_count
        .checked_mul(U32_PER_ITEM)
        .and_then(|n| n.checked_add(HEADER_SIZE))
        .unwrap_or(usize::MAX);
    if data.len() < expected {
        return Err(BufferError::Truncated {
            expected,
            found: data.len(),
        });
    }

    let series = data[HEADER_SIZE..expected]
        .chunks_exact(U32_PER_ITEM)
        .enumerate()
        .map(|(index, chunk)| {
            let value = join(chunk[1], chunk[2]);
            match chunk[0] {
                OP_PAGE => Ok(SeriesItem::Page(value)),
                OP_CURRENT => Ok(SeriesItem::Current(value)),
                OP_GAP => Ok(SeriesItem::Gap),
                opcode => Err(BufferError::UnknownOpcode { opcode, index }),
            }
        })
        .collect::<Result<Series, _>>()?;

    Ok(DecodedSeries {
        page: join(data[2], data[3]),
        last: join(data[4], data[5]),
        series,
    })
}
