//! # Auction Order Bitmap
//!
//! Order-inclusion bitmaps used by the batch auction: one byte per order
//! slot, where a non-zero byte marks the order as included.

use super::errors::SubmissionError;

/// Whether slot `index` of `bitmap` is set.
///
/// # Errors
/// [`SubmissionError::BitmapIndexOutOfRange`] if `index` is past the end.
pub fn bitmap_has_one_at_spot(index: usize, bitmap: &[u8]) -> Result<bool, SubmissionError> {
    bitmap
        .get(index)
        .map(|slot| *slot != 0)
        .ok_or(SubmissionError::BitmapIndexOutOfRange {
            index,
            len: bitmap.len(),
        })
}
