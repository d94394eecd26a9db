//! Cell and range coordinates as stored inside formula tokens.
//!
//! Two wire layouts exist. BIFF8 stores a full `u16` row and packs the
//! column plus both relative flags into the second word ([MS-XLS]
//! 2.5.198.111, RgceLoc). Earlier generations keep the flags in the top
//! bits of the row word and store the column as a plain byte.
//!
//! Relative components are interpreted in one of two modes:
//! - `reldelta` (shared formulas, names, conditional formats, data
//!   validation): the stored value is a signed offset, wrapped at the
//!   generation's row/column limits.
//! - anchored (ordinary cell and array formulas): the stored value is an
//!   absolute coordinate; subtracting the anchor cell recovers the offset.

use crate::{BiffVersion, FormulaError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddr {
    pub row: i32,
    pub col: i32,
    pub row_rel: bool,
    pub col_rel: bool,
}

pub(crate) fn adjust_cell_addr_biff8(
    rowval: u16,
    colval: u16,
    reldelta: bool,
    base: Option<(i32, i32)>,
) -> CellAddr {
    let row_rel = (colval >> 15) & 1 != 0;
    let col_rel = (colval >> 14) & 1 != 0;
    let mut row = rowval as i32;
    let mut col = (colval & 0xff) as i32;
    if reldelta {
        if row_rel && row >= 32768 {
            row -= 65536;
        }
        if col_rel && col >= 128 {
            col -= 256;
        }
    } else if let Some((browx, bcolx)) = base {
        if row_rel {
            row -= browx;
        }
        if col_rel {
            col -= bcolx;
        }
    }
    CellAddr {
        row,
        col,
        row_rel,
        col_rel,
    }
}

pub(crate) fn adjust_cell_addr_le7(
    rowval: u16,
    colval: u8,
    reldelta: bool,
    base: Option<(i32, i32)>,
) -> CellAddr {
    let row_rel = (rowval >> 15) & 1 != 0;
    let col_rel = (rowval >> 14) & 1 != 0;
    let mut row = (rowval & 0x3fff) as i32;
    let mut col = colval as i32;
    if reldelta {
        if row_rel && row >= 8192 {
            row -= 16384;
        }
        if col_rel && col >= 128 {
            col -= 256;
        }
    } else if let Some((browx, bcolx)) = base {
        if row_rel {
            row -= browx;
        }
        if col_rel {
            col -= bcolx;
        }
    }
    CellAddr {
        row,
        col,
        row_rel,
        col_rel,
    }
}

fn need(data: &[u8], pos: usize, n: usize) -> Result<&[u8], FormulaError> {
    data.get(pos..pos + n)
        .ok_or(FormulaError::MalformedSize { pos })
}

fn read_u16(data: &[u8]) -> u16 {
    u16::from_le_bytes([data[0], data[1]])
}

/// Decode one cell locator at `pos`. Consumes 4 bytes on BIFF8, 3 before.
pub(crate) fn get_cell_addr(
    data: &[u8],
    pos: usize,
    biff: BiffVersion,
    reldelta: bool,
    base: Option<(i32, i32)>,
) -> Result<CellAddr, FormulaError> {
    if biff >= BiffVersion::Biff8 {
        let raw = need(data, pos, 4)?;
        Ok(adjust_cell_addr_biff8(
            read_u16(&raw[0..2]),
            read_u16(&raw[2..4]),
            reldelta,
            base,
        ))
    } else {
        let raw = need(data, pos, 3)?;
        Ok(adjust_cell_addr_le7(
            read_u16(&raw[0..2]),
            raw[2],
            reldelta,
            base,
        ))
    }
}

/// Decode a range locator (both corners). Consumes 8 bytes on BIFF8,
/// 6 before; rows come first in both layouts.
pub(crate) fn get_cell_range_addr(
    data: &[u8],
    pos: usize,
    biff: BiffVersion,
    reldelta: bool,
    base: Option<(i32, i32)>,
) -> Result<(CellAddr, CellAddr), FormulaError> {
    if biff >= BiffVersion::Biff8 {
        let raw = need(data, pos, 8)?;
        let row1 = read_u16(&raw[0..2]);
        let row2 = read_u16(&raw[2..4]);
        let col1 = read_u16(&raw[4..6]);
        let col2 = read_u16(&raw[6..8]);
        Ok((
            adjust_cell_addr_biff8(row1, col1, reldelta, base),
            adjust_cell_addr_biff8(row2, col2, reldelta, base),
        ))
    } else {
        let raw = need(data, pos, 6)?;
        let row1 = read_u16(&raw[0..2]);
        let row2 = read_u16(&raw[2..4]);
        Ok((
            adjust_cell_addr_le7(row1, raw[4], reldelta, base),
            adjust_cell_addr_le7(row2, raw[5], reldelta, base),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biff8_absolute() {
        let addr = adjust_cell_addr_biff8(5, 7, true, None);
        assert_eq!(
            addr,
            CellAddr {
                row: 5,
                col: 7,
                row_rel: false,
                col_rel: false
            }
        );
    }

    #[test]
    fn biff8_reldelta_wraps_negative_offsets() {
        // Row offset -3 stored as 65533; col offset -2 stored as 254 in
        // the low byte with both relative bits set.
        let colval = 0x8000 | 0x4000 | 254;
        let addr = adjust_cell_addr_biff8(65533, colval, true, None);
        assert_eq!(addr.row, -3);
        assert_eq!(addr.col, -2);
        assert!(addr.row_rel && addr.col_rel);
    }

    #[test]
    fn biff8_anchored_subtracts_base() {
        let colval = 0x8000 | 0x4000 | 7;
        let addr = adjust_cell_addr_biff8(9, colval, false, Some((4, 2)));
        assert_eq!(addr.row, 5);
        assert_eq!(addr.col, 5);
    }

    #[test]
    fn le7_flags_live_in_row_word() {
        let rowval = 0x8000 | 0x4000 | 9;
        let addr = adjust_cell_addr_le7(rowval, 3, true, None);
        assert_eq!(addr.row, 9);
        assert_eq!(addr.col, 3);
        assert!(addr.row_rel && addr.col_rel);

        // Wrap threshold is 8192 for the 14-bit row space.
        let rowval = 0x8000 | (16384 - 2);
        let addr = adjust_cell_addr_le7(rowval, 0, true, None);
        assert_eq!(addr.row, -2);
    }

    #[test]
    fn truncated_input_is_rejected() {
        let err = get_cell_addr(&[0x01, 0x00, 0x02], 0, BiffVersion::Biff8, true, None);
        assert!(err.is_err());
    }

    use proptest::prelude::*;

    proptest! {
        // The two layouts must agree wherever their coordinate spaces
        // overlap: row < 8192, col < 128.
        #[test]
        fn layouts_agree_on_shared_logical_space(
            row in 0u16..8192,
            col in 0u8..128,
            row_rel: bool,
            col_rel: bool,
        ) {
            let colval8 = ((row_rel as u16) << 15) | ((col_rel as u16) << 14) | col as u16;
            let rowval7 = ((row_rel as u16) << 15) | ((col_rel as u16) << 14) | row;
            prop_assert_eq!(
                adjust_cell_addr_biff8(row, colval8, true, None),
                adjust_cell_addr_le7(rowval7, col, true, None)
            );
        }
    }
}
