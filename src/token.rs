//! Token-level tables for BIFF `rgce` formula streams.
//!
//! A token's leading byte carries a 5-bit base opcode and a 2-bit operand
//! class (`(op & 0x60) >> 5`). Operand-class tokens index the size/name
//! tables at `base + 32` so that e.g. `PtgRef` (0x24/0x44/0x64) shares one
//! row. See [MS-XLS] 2.5.198.1 (Ptg) and the per-token sections it links.

use crate::BiffVersion;

/// Base opcodes, after folding the operand class into the index.
///
/// The enum is closed: bytes that no BIFF generation defines classify to
/// `None` and the size tables mark them invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ptg {
    Exp,
    Tbl,
    Add,
    Sub,
    Mul,
    Div,
    Power,
    Concat,
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
    Ne,
    Isect,
    List,
    Range,
    Uplus,
    Uminus,
    Percent,
    Paren,
    MissArg,
    Str,
    Extended,
    Attr,
    Sheet,
    EndSheet,
    Err,
    Bool,
    Int,
    Num,
    Array,
    Func,
    FuncVar,
    Name,
    Ref,
    Area,
    MemArea,
    MemErr,
    MemNoMem,
    MemFunc,
    RefErr,
    AreaErr,
    RefN,
    AreaN,
    MemAreaN,
    MemNoMemN,
    FuncCe,
    NameX,
    Ref3d,
    Area3d,
    RefErr3d,
    AreaErr3d,
}

/// A classified token byte: folded table index, operand class, and opcode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenClass {
    pub opx: u8,
    pub optype: u8,
    pub ptg: Option<Ptg>,
}

pub(crate) fn classify(op: u8) -> TokenClass {
    let opcode = op & 0x1f;
    let optype = (op & 0x60) >> 5;
    let opx = if optype != 0 { opcode + 32 } else { opcode };
    TokenClass {
        opx,
        optype,
        ptg: ptg_from_opx(opx),
    }
}

fn ptg_from_opx(opx: u8) -> Option<Ptg> {
    use Ptg::*;
    Some(match opx {
        0x01 => Exp,
        0x02 => Tbl,
        0x03 => Add,
        0x04 => Sub,
        0x05 => Mul,
        0x06 => Div,
        0x07 => Power,
        0x08 => Concat,
        0x09 => Lt,
        0x0A => Le,
        0x0B => Eq,
        0x0C => Ge,
        0x0D => Gt,
        0x0E => Ne,
        0x0F => Isect,
        0x10 => List,
        0x11 => Range,
        0x12 => Uplus,
        0x13 => Uminus,
        0x14 => Percent,
        0x15 => Paren,
        0x16 => MissArg,
        0x17 => Str,
        0x18 => Extended,
        0x19 => Attr,
        0x1A => Sheet,
        0x1B => EndSheet,
        0x1C => Err,
        0x1D => Bool,
        0x1E => Int,
        0x1F => Num,
        0x20 => Array,
        0x21 => Func,
        0x22 => FuncVar,
        0x23 => Name,
        0x24 => Ref,
        0x25 => Area,
        0x26 => MemArea,
        0x27 => MemErr,
        0x28 => MemNoMem,
        0x29 => MemFunc,
        0x2A => RefErr,
        0x2B => AreaErr,
        0x2C => RefN,
        0x2D => AreaN,
        0x2E => MemAreaN,
        0x2F => MemNoMemN,
        0x38 => FuncCe,
        0x39 => NameX,
        0x3A => Ref3d,
        0x3B => Area3d,
        0x3C => RefErr3d,
        0x3D => AreaErr3d,
        _ => return None,
    })
}

/// Display name for diagnostics, without the `t` prefix.
pub(crate) fn opcode_name(opx: u8) -> &'static str {
    const NAMES: [&str; 64] = [
        "Unk00",
        "Exp",
        "Tbl",
        "Add",
        "Sub",
        "Mul",
        "Div",
        "Power",
        "Concat",
        "LT",
        "LE",
        "EQ",
        "GE",
        "GT",
        "NE",
        "Isect",
        "List",
        "Range",
        "Uplus",
        "Uminus",
        "Percent",
        "Paren",
        "MissArg",
        "Str",
        "Extended",
        "Attr",
        "Sheet",
        "EndSheet",
        "Err",
        "Bool",
        "Int",
        "Num",
        "Array",
        "Func",
        "FuncVar",
        "Name",
        "Ref",
        "Area",
        "MemArea",
        "MemErr",
        "MemNoMem",
        "MemFunc",
        "RefErr",
        "AreaErr",
        "RefN",
        "AreaN",
        "MemAreaN",
        "MemNoMemN",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "FuncCE",
        "NameX",
        "Ref3d",
        "Area3d",
        "RefErr3d",
        "AreaErr3d",
        "",
        "",
    ];
    NAMES[(opx & 0x3f) as usize]
}

// sztabN[opx] -> bytes consumed by the token, including the leading byte.
// -1 means variable-length, -2 means the opcode does not exist in the
// generations that use the table.
const SZTAB0: [i8; 64] = [
    -2, 4, 4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, -1, -2, -1, 8, 4, 2, 2,
    3, 9, 8, 2, 3, 8, 4, 7, 5, 5, 5, 2, 4, 7, 4, 7, 2, 2, -2, -2, -2, -2, -2, -2, -2, -2, 3, -2,
    -2, -2, -2, -2, -2, -2,
];
const SZTAB1: [i8; 64] = [
    -2, 5, 5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, -1, -2, -1, 11, 5, 2, 2,
    3, 9, 9, 2, 3, 11, 4, 7, 7, 7, 7, 3, 4, 7, 4, 7, 3, 3, -2, -2, -2, -2, -2, -2, -2, -2, 3, -2,
    -2, -2, -2, -2, -2, -2,
];
const SZTAB2: [i8; 64] = [
    -2, 5, 5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, -1, -2, -1, 11, 5, 2, 2,
    3, 9, 9, 3, 4, 11, 4, 7, 7, 7, 7, 3, 4, 7, 4, 7, 3, 3, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    -2, -2, -2, -2, -2, -2,
];
const SZTAB3: [i8; 64] = [
    -2, 5, 5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, -1, -2, -1, -2, -2, 2,
    2, 3, 9, 9, 3, 4, 15, 4, 7, 7, 7, 7, 3, 4, 7, 4, 7, 3, 3, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    25, 18, 21, 18, 21, -2, -2,
];
const SZTAB4: [i8; 64] = [
    -2, 5, 5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, -1, -1, -1, -2, -2, 2,
    2, 3, 9, 9, 3, 4, 5, 5, 9, 7, 7, 7, 3, 5, 9, 5, 9, 3, 3, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    7, 7, 11, 7, 11, -2, -2,
];

pub(crate) fn size_table(biff: BiffVersion) -> &'static [i8; 64] {
    match biff {
        BiffVersion::Biff2 => &SZTAB0,
        BiffVersion::Biff3 => &SZTAB1,
        BiffVersion::Biff4 => &SZTAB2,
        BiffVersion::Biff5 => &SZTAB3,
        BiffVersion::Biff8 => &SZTAB4,
    }
}

/// Operand-class opcodes (folded index) that push an error operand.
pub(crate) fn is_error_opx(opx: u8) -> bool {
    matches!(opx, 0x27 | 0x28 | 0x2A | 0x2B | 0x3C | 0x3D)
}

/// PtgAttr sub-opcode names, for trace output.
pub(crate) fn attr_subop_name(subop: u8) -> &'static str {
    match subop {
        0x00 => "Skip??", // shows up in pre-Excel-5 sample files
        0x01 => "Volatile",
        0x02 => "If",
        0x04 => "Choose",
        0x08 => "Skip",
        0x10 => "Sum",
        0x20 => "Assign",
        0x40 => "Space",
        0x41 => "SpaceVolatile",
        _ => "??Unknown??",
    }
}

pub(crate) const ATTR_CHOOSE: u8 = 0x04;
pub(crate) const ATTR_SUM: u8 = 0x10;

/// Text for a BIFF error code, as used by `tErr` literals and error
/// cell values.
pub fn error_text_from_code(code: u8) -> &'static str {
    match code {
        0x00 => "#NULL!",
        0x07 => "#DIV/0!",
        0x0F => "#VALUE!",
        0x17 => "#REF!",
        0x1D => "#NAME?",
        0x24 => "#NUM!",
        0x2A => "#N/A",
        0x2B => "#GETTING_DATA",
        _ => "#UNKNOWN!",
    }
}

/// Formula contexts in which a token must not appear, as a `FmlaType` mask.
/// Violations are reported but decoding continues.
pub(crate) fn token_not_allowed(opx: u8) -> u8 {
    use crate::FmlaType;
    const ALL: u8 = 63;
    let cell = FmlaType::Cell as u8;
    let shared = FmlaType::Shared as u8;
    let array = FmlaType::Array as u8;
    let cond_fmt = FmlaType::CondFmt as u8;
    let data_val = FmlaType::DataVal as u8;
    match opx {
        0x01 | 0x02 => ALL - cell,                      // tExp, tTbl
        0x0F | 0x10 | 0x11 => shared + cond_fmt + data_val, // tIsect, tList, tRange
        0x20 => shared + cond_fmt + data_val,           // tArray
        0x23 => shared,                                 // tName
        0x39 | 0x3A | 0x3B => shared + cond_fmt + data_val, // tNameX, tRef3d, tArea3d
        0x2C | 0x2D => cell + array,                    // tRefN, tAreaN
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_class_folds_into_table_index() {
        // PtgRef appears as 0x24, 0x44, and 0x64; all classify the same.
        for op in [0x24u8, 0x44, 0x64] {
            let tc = classify(op);
            assert_eq!(tc.opx, 0x24);
            assert_eq!(tc.ptg, Some(Ptg::Ref));
        }
        assert_eq!(classify(0x44).optype, 2);
        assert_eq!(classify(0x24).optype, 1);
        // Base tokens keep their index.
        assert_eq!(classify(0x03).ptg, Some(Ptg::Add));
        assert_eq!(classify(0x03).optype, 0);
    }

    #[test]
    fn size_tables_track_generation_layouts() {
        // tRef3d does not exist before BIFF5, then shrinks in BIFF8.
        assert_eq!(size_table(BiffVersion::Biff4)[0x3A], -2);
        assert_eq!(size_table(BiffVersion::Biff5)[0x3A], 18);
        assert_eq!(size_table(BiffVersion::Biff8)[0x3A], 7);
        // tStr is variable-length everywhere.
        for biff in [
            BiffVersion::Biff2,
            BiffVersion::Biff3,
            BiffVersion::Biff4,
            BiffVersion::Biff5,
            BiffVersion::Biff8,
        ] {
            assert_eq!(size_table(biff)[0x17], -1);
        }
    }

    #[test]
    fn unassigned_bytes_have_no_ptg() {
        assert!(classify(0x00).ptg.is_none());
        for opx in 0x30..0x38u8 {
            assert!(ptg_from_opx(opx).is_none());
        }
    }
}
