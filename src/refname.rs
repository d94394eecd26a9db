//! Rendering of cell, range, and sheet references as formula text.
//!
//! Absolute components render in A1 style (`$H$6`). Relative components
//! render as offsets from a base cell when one is available, and fall back
//! to R1C1 offset style (`R[-2]C[3]`) when it is not (a defined-name
//! formula has no base cell to be relative to).

use crate::context::BookContext;
use crate::operand::Ref3D;

/// `7` => `"H"`, `27` => `"AB"`.
pub fn colname(colx: i32) -> String {
    const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut colx = colx.max(0) as u32;
    if colx <= 25 {
        return (ALPHABET[colx as usize] as char).to_string();
    }
    let mut out = Vec::new();
    loop {
        out.push(ALPHABET[(colx % 26) as usize]);
        colx = colx / 26;
        if colx == 0 {
            break;
        }
        colx -= 1;
        if colx < 26 {
            out.push(ALPHABET[colx as usize]);
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

pub(crate) fn rownamerel(rowx: i32, rowxrel: bool, browx: Option<i32>, r1c1: bool) -> String {
    // Without a base row, offsets can only be rendered in R1C1 style.
    let r1c1 = r1c1 || browx.is_none();
    if !rowxrel {
        if r1c1 {
            return format!("R{}", rowx + 1);
        }
        return format!("${}", rowx + 1);
    }
    if r1c1 {
        if rowx != 0 {
            return format!("R[{rowx}]");
        }
        return "R".to_string();
    }
    format!("{}", (browx.unwrap_or(0) + rowx).rem_euclid(65536) + 1)
}

pub(crate) fn colnamerel(colx: i32, colxrel: bool, bcolx: Option<i32>, r1c1: bool) -> String {
    let r1c1 = r1c1 || bcolx.is_none();
    if !colxrel {
        if r1c1 {
            return format!("C{}", colx + 1);
        }
        return format!("${}", colname(colx));
    }
    if r1c1 {
        if colx != 0 {
            return format!("C[{colx}]");
        }
        return "C".to_string();
    }
    colname((bcolx.unwrap_or(0) + colx).rem_euclid(256))
}

/// `(5, 7)` => `"H6"`.
pub fn cellname(rowx: i32, colx: i32) -> String {
    format!("{}{}", colname(colx), rowx + 1)
}

/// `(5, 7)` => `"$H$6"`, or `"R6C8"` in R1C1 mode.
pub fn cellnameabs(rowx: i32, colx: i32, r1c1: bool) -> String {
    if r1c1 {
        return format!("R{}C{}", rowx + 1, colx + 1);
    }
    format!("${}${}", colname(colx), rowx + 1)
}

pub(crate) fn cellnamerel(
    rowx: i32,
    colx: i32,
    rowxrel: bool,
    colxrel: bool,
    browx: Option<i32>,
    bcolx: Option<i32>,
    r1c1: bool,
) -> String {
    if !rowxrel && !colxrel {
        return cellnameabs(rowx, colx, r1c1);
    }
    // A single unanchored relative component flips the whole cell into
    // R1C1 mode; mixed-style output would be unreadable.
    let r1c1 = r1c1 || (rowxrel && browx.is_none()) || (colxrel && bcolx.is_none());
    let c = colnamerel(colx, colxrel, bcolx, r1c1);
    let r = rownamerel(rowx, rowxrel, browx, r1c1);
    if r1c1 {
        return format!("{r}{c}");
    }
    format!("{c}{r}")
}

/// `(5, 20, 7, 10)` => `"$H$6:$J$20"`; a single cell collapses to it.
pub fn rangename2d(rlo: i32, rhi: i32, clo: i32, chi: i32) -> String {
    if rhi == rlo + 1 && chi == clo + 1 {
        return cellnameabs(rlo, clo, false);
    }
    format!(
        "{}:{}",
        cellnameabs(rlo, clo, false),
        cellnameabs(rhi - 1, chi - 1, false)
    )
}

pub(crate) fn rangename2drel(
    coords: (i32, i32, i32, i32),
    relflags: (bool, bool, bool, bool),
    browx: Option<i32>,
    bcolx: Option<i32>,
    r1c1: bool,
) -> String {
    let (rlo, rhi, clo, chi) = coords;
    let (rlorel, rhirel, clorel, chirel) = relflags;
    let r1c1 = r1c1
        || ((rlorel || rhirel) && browx.is_none())
        || ((clorel || chirel) && bcolx.is_none());
    format!(
        "{}:{}",
        cellnamerel(rlo, clo, rlorel, clorel, browx, bcolx, r1c1),
        cellnamerel(rhi - 1, chi - 1, rhirel, chirel, browx, bcolx, r1c1)
    )
}

/// `Ref3D([1, 4, 5, 20, 7, 10])` => `"Sheet2:Sheet3!$H$6:$J$20"` with
/// Excel's default sheet names.
pub fn rangename3d(ctx: &dyn BookContext, ref3d: &Ref3D) -> String {
    let c = &ref3d.coords;
    format!("{}!{}", sheetrange(ctx, c[0], c[1]), rangename2d(c[2], c[3], c[4], c[5]))
}

/// Like [`rangename3d`] for boxes with relative components. Sheet-relative
/// spans (a 2-D reference in "the current sheet") drop the sheet prefix.
pub fn rangename3drel(
    ctx: &dyn BookContext,
    ref3d: &Ref3D,
    browx: Option<i32>,
    bcolx: Option<i32>,
    r1c1: bool,
) -> String {
    let c = &ref3d.coords;
    let f = &ref3d.relflags;
    let shdesc = sheetrangerel(ctx, (c[0], c[1]), (f[0] != 0, f[1] != 0));
    let rngdesc = rangename2drel(
        (c[2], c[3], c[4], c[5]),
        (f[2] != 0, f[3] != 0, f[4] != 0, f[5] != 0),
        browx,
        bcolx,
        r1c1,
    );
    if shdesc.is_empty() {
        return rngdesc;
    }
    format!("{shdesc}!{rngdesc}")
}

/// Sheet name for formula text, quoted when it needs to be. Negative
/// indexes are resolution sentinels and render as placeholders.
pub fn quoted_sheet_name(sheet_names: &[String], shx: i32) -> String {
    let shname = if shx >= 0 {
        match sheet_names.get(shx as usize) {
            Some(name) => name.clone(),
            None => format!("?error {shx}?"),
        }
    } else {
        match shx {
            -1 => "?internal; any sheet?".to_string(),
            -2 => "internal; deleted sheet".to_string(),
            -3 => "internal; macro sheet".to_string(),
            -4 => "<<external>>".to_string(),
            _ => format!("?error {shx}?"),
        }
    };
    if shname.contains('\'') {
        return format!("'{}'", shname.replace('\'', "''"));
    }
    if shname.contains(' ') {
        return format!("'{shname}'");
    }
    shname
}

pub(crate) fn sheetrange(ctx: &dyn BookContext, slo: i32, shi: i32) -> String {
    let shnames = ctx.sheet_names();
    let mut shdesc = quoted_sheet_name(shnames, slo);
    if slo != shi - 1 {
        shdesc.push(':');
        shdesc.push_str(&quoted_sheet_name(shnames, shi - 1));
    }
    shdesc
}

pub(crate) fn sheetrangerel(
    ctx: &dyn BookContext,
    srange: (i32, i32),
    srangerel: (bool, bool),
) -> String {
    let (slo, shi) = srange;
    let (slorel, shirel) = srangerel;
    if !slorel && !shirel {
        return sheetrange(ctx, slo, shi);
    }
    if !(slo == 0 && shi == 1 && slorel && shirel) {
        log::warn!(
            "unrenderable sheet-relative span ({slo}, {shi}) rel=({slorel}, {shirel})"
        );
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RefTable;

    fn ctx() -> RefTable {
        RefTable::with_sheet_names(vec![
            "Sheet1".to_string(),
            "Sheet2".to_string(),
            "My Sheet".to_string(),
            "O'Brien".to_string(),
        ])
    }

    #[test]
    fn column_names() {
        assert_eq!(colname(0), "A");
        assert_eq!(colname(7), "H");
        assert_eq!(colname(27), "AB");
        assert_eq!(colname(255), "IV");
    }

    #[test]
    fn cell_names() {
        assert_eq!(cellname(5, 7), "H6");
        assert_eq!(cellnameabs(5, 7, false), "$H$6");
        assert_eq!(cellnameabs(5, 7, true), "R6C8");
    }

    #[test]
    fn relative_cells_without_base_go_r1c1() {
        assert_eq!(cellnamerel(-2, 3, true, true, None, None, false), "R[-2]C[3]");
        assert_eq!(cellnamerel(0, 0, true, true, None, None, false), "RC");
    }

    #[test]
    fn relative_cells_with_base_go_a1() {
        assert_eq!(cellnamerel(2, 1, true, true, Some(4), Some(0), false), "B7");
        // Mixed: absolute column, relative row.
        assert_eq!(cellnamerel(2, 1, true, false, Some(4), Some(0), false), "$B7");
    }

    #[test]
    fn ranges_collapse_single_cells() {
        assert_eq!(rangename2d(5, 6, 7, 8), "$H$6");
        assert_eq!(rangename2d(5, 20, 7, 10), "$H$6:$J$20");
    }

    #[test]
    fn sheet_names_quote_when_needed() {
        let ctx = ctx();
        assert_eq!(quoted_sheet_name(ctx.sheet_names(), 0), "Sheet1");
        assert_eq!(quoted_sheet_name(ctx.sheet_names(), 2), "'My Sheet'");
        assert_eq!(quoted_sheet_name(ctx.sheet_names(), 3), "'O''Brien'");
        assert_eq!(quoted_sheet_name(ctx.sheet_names(), -4), "<<external>>");
    }

    #[test]
    fn three_d_ranges() {
        let ctx = ctx();
        let ref3d = Ref3D::absolute([0, 2, 5, 20, 7, 10]);
        assert_eq!(rangename3d(&ctx, &ref3d), "Sheet1:Sheet2!$H$6:$J$20");

        let current_sheet = Ref3D {
            coords: [0, 1, 1, 2, 0, 1],
            relflags: [1, 1, 0, 0, 0, 0],
        };
        assert_eq!(
            rangename3drel(&ctx, &current_sheet, None, None, false),
            "$A$2:$A$2"
        );
    }
}
