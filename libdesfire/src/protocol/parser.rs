// libdesfire/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::MalformedResponse {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a fixed-size array at `idx` with bounds checking.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let s = slice_at(data, idx, N)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(s);
    Ok(arr)
}

/// Read a little-endian 24-bit integer at `idx`, zero-extended to u32.
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    let [b0, b1, b2] = array_at::<3>(data, idx)?;
    Ok(u32::from_le_bytes([b0, b1, b2, 0x00]))
}

/// Read a little-endian u32 at `idx`, with bounds checking.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    Ok(u32::from_le_bytes(array_at::<4>(data, idx)?))
}
