//! Decoder for the parsed-expression byte code (`rgce`) that BIFF
//! workbook files store wherever a formula lives: cell FORMULA records,
//! shared and array formula blocks, defined names, conditional formats,
//! and data validations. See [MS-XLS] 2.2.2 for the grammar.
//!
//! Two walks over the same token stream are offered:
//!
//! - [`decompile_formula`] rebuilds the formula text a user would see,
//!   resolving sheet names, defined names and add-in functions through a
//!   [`BookContext`].
//! - [`evaluate_name_formula`] folds a defined name's formula to a
//!   constant where the tokens allow it, so callers can classify a name
//!   (a print area, a constant, an external reference) without a cell
//!   grid.
//!
//! Token layouts changed across file generations; callers say which one
//! they hold via [`BiffVersion`]. Decoding is best-effort: structurally
//! salvageable problems are logged through the `log` facade and folded
//! into the output (an error operand, a `?` placeholder), while token
//! streams that cannot be walked at all fail with [`FormulaError`].

use thiserror::Error;

mod addr;
mod context;
mod decompile;
mod evaluate;
mod ftab;
mod operand;
mod refname;
mod strings;
mod token;

pub use addr::CellAddr;
pub use context::{
    BookContext, ExternSheetEntry, NameObject, RefTable, XSH_ADDIN, XSH_ANY_SHEET, XSH_BAD_REFX,
    XSH_BAD_SHEET, XSH_BAD_SHEET_LEGACY, XSH_DELETED, XSH_EXTERNAL, XSH_MACRO,
};
pub use decompile::decompile_formula;
pub use evaluate::{evaluate_name_formula, STACK_ALARM_LEVEL, STACK_PANIC_LEVEL};
pub use ftab::{function_def, function_id_from_name, FunctionDescriptor, FUNC_USER_DEFINED};
pub use operand::{Operand, OperandKind, Ref3D, Value};
pub use refname::{
    cellname, cellnameabs, colname, quoted_sheet_name, rangename2d, rangename3d, rangename3drel,
};
pub use token::error_text_from_code;

/// File generation a token stream was written by. Ordered: later
/// generations compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BiffVersion {
    Biff2,
    Biff3,
    Biff4,
    Biff5,
    Biff8,
}

impl BiffVersion {
    /// Map a two-digit version number (as stored in BOF records: 20, 21,
    /// 30, 40, 45, 50, 70, 80) to a generation.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            20 | 21 => Some(BiffVersion::Biff2),
            30 => Some(BiffVersion::Biff3),
            40 | 45 => Some(BiffVersion::Biff4),
            50 | 70 => Some(BiffVersion::Biff5),
            80 => Some(BiffVersion::Biff8),
            _ => None,
        }
    }
}

/// Where a formula token stream came from. Some tokens are only legal in
/// some contexts, and the context decides how relative references are
/// stored (see [`decompile_formula`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FmlaType {
    /// An ordinary cell formula.
    Cell = 1,
    /// The shared-formula template behind a `tExp` anchor.
    Shared = 2,
    /// An array formula block.
    Array = 4,
    /// A conditional-formatting condition.
    CondFmt = 8,
    /// A data-validation condition.
    DataVal = 16,
    /// A defined name.
    Name = 32,
}

impl FmlaType {
    pub fn describe(self) -> &'static str {
        match self {
            FmlaType::Cell => "CELL",
            FmlaType::Shared => "SHARED",
            FmlaType::Array => "ARRAY",
            FmlaType::CondFmt => "COND-FMT",
            FmlaType::DataVal => "DATA-VAL",
            FmlaType::Name => "NAME",
        }
    }
}

/// Unrecoverable token-stream problems. Anything softer (an unresolvable
/// reference, an unknown function id, a token outside its legal context)
/// is logged and folded into the output instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// A token this decoder does not handle, or one that does not exist
    /// in the stated file generation.
    #[error("unsupported token 0x{op:02x} (t{name})")]
    UnsupportedToken { op: u8, name: &'static str },
    /// A token's stated or tabulated size runs past the end of the
    /// stream, or is not positive.
    #[error("malformed token size at offset {pos}")]
    MalformedSize { pos: usize },
    /// Defined names reference each other deeper than the recursion
    /// limit; almost certainly a reference cycle.
    #[error("excessive indirection while evaluating a defined name")]
    ExcessiveIndirection,
}
