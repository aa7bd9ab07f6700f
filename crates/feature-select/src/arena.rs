//! Per-call Scratch Allocation
//!
//! Caches and masks live only for the duration of one `select` call and are
//! allocated through here so that running out of memory surfaces as
//! [`SelectionError::Allocation`] instead of aborting.

use crate::error::SelectionError;

/// Allocate a vector of `len` copies of `value`
pub(crate) fn filled<T: Clone>(
    what: &'static str,
    len: usize,
    value: T,
) -> Result<Vec<T>, SelectionError> {
    let mut buf = with_capacity(what, len)?;
    buf.resize(len, value);
    Ok(buf)
}

/// Allocate an empty vector able to hold `len` elements without growing
pub(crate) fn with_capacity<T>(what: &'static str, len: usize) -> Result<Vec<T>, SelectionError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SelectionError::Allocation { what, requested: len })?;
    Ok(buf)
}

/// Size of a `rows x cols` table, failing on overflow
pub(crate) fn table_len(what: &'static str, rows: usize, cols: usize) -> Result<usize, SelectionError> {
    rows.checked_mul(cols).ok_or(SelectionError::Allocation {
        what,
        requested: usize::MAX,
    })
}
