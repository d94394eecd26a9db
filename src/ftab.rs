//! Built-in function catalog for `tFunc`/`tFuncVar` tokens.
//!
//! Ids and signatures follow [MS-XLS] 2.5.198.17 (Ftab) plus the
//! macro-command block at `0x8000+` (Cetab). Fixed-arity functions are
//! called with `tFunc`; `tFuncVar` carries an explicit argument count and
//! is also the vehicle for add-in calls via [`FUNC_USER_DEFINED`].

use std::collections::HashMap;
use std::sync::OnceLock;

/// `tFuncVar` id reserved for user-defined / add-in function calls. The
/// call target's name is consumed from the top of the operand stack.
pub const FUNC_USER_DEFINED: u16 = 255;

/// One catalog row. `min_args`/`max_args` bound `tFuncVar` argument
/// counts; for `tFunc` the fixed arity is `min_args`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub min_args: u8,
    pub max_args: u8,
    /// Volatility/visibility bits as recorded in the catalog source.
    pub flags: u8,
    /// Number of entries in `arg_types` that carry meaning.
    pub known_args: u8,
    /// `b'V'` value, `b'R'` reference, or `b'A'` array.
    pub return_type: u8,
    /// Per-argument type letters; the last letter repeats for trailing
    /// arguments of variadic functions.
    pub arg_types: &'static str,
}

/// Descriptor for a function id, or `None` for ids absent from every
/// documented generation.
pub fn function_def(funcx: u16) -> Option<&'static FunctionDescriptor> {
    static BY_ID: OnceLock<HashMap<u16, &'static FunctionDescriptor>> = OnceLock::new();
    BY_ID
        .get_or_init(|| FUNC_DEFS.iter().map(|(id, def)| (*id, def)).collect())
        .get(&funcx)
        .copied()
}

/// Reverse lookup by (case-sensitive) catalog name.
pub fn function_id_from_name(name: &str) -> Option<u16> {
    static BY_NAME: OnceLock<HashMap<&'static str, u16>> = OnceLock::new();
    BY_NAME
        .get_or_init(|| FUNC_DEFS.iter().map(|(id, def)| (def.name, *id)).collect())
        .get(name)
        .copied()
}

static FUNC_DEFS: [(u16, FunctionDescriptor); 756] = [
    (0x0000, FunctionDescriptor { name: "COUNT", min_args: 0, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0001, FunctionDescriptor { name: "IF", min_args: 1, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VRR" }),
    (0x0002, FunctionDescriptor { name: "ISNA", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0003, FunctionDescriptor { name: "ISERROR", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0004, FunctionDescriptor { name: "SUM", min_args: 0, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0005, FunctionDescriptor { name: "AVERAGE", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0006, FunctionDescriptor { name: "MIN", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0007, FunctionDescriptor { name: "MAX", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0008, FunctionDescriptor { name: "ROW", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0009, FunctionDescriptor { name: "COLUMN", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x000A, FunctionDescriptor { name: "NA", min_args: 0, max_args: 0, flags: 0x02, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x000B, FunctionDescriptor { name: "NPV", min_args: 2, max_args: 30, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VR" }),
    (0x000C, FunctionDescriptor { name: "STDEV", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x000D, FunctionDescriptor { name: "DOLLAR", min_args: 1, max_args: 2, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x000E, FunctionDescriptor { name: "FIXED", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x000F, FunctionDescriptor { name: "SIN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0010, FunctionDescriptor { name: "COS", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0011, FunctionDescriptor { name: "TAN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0012, FunctionDescriptor { name: "ATAN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0013, FunctionDescriptor { name: "PI", min_args: 0, max_args: 0, flags: 0x02, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x0014, FunctionDescriptor { name: "SQRT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0015, FunctionDescriptor { name: "EXP", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0016, FunctionDescriptor { name: "LN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0017, FunctionDescriptor { name: "LOG10", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0018, FunctionDescriptor { name: "ABS", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0019, FunctionDescriptor { name: "INT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x001A, FunctionDescriptor { name: "SIGN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x001B, FunctionDescriptor { name: "ROUND", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x001C, FunctionDescriptor { name: "LOOKUP", min_args: 2, max_args: 3, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VR" }),
    (0x001D, FunctionDescriptor { name: "INDEX", min_args: 2, max_args: 4, flags: 0x0c, known_args: 4, return_type: b'R', arg_types: "RVVV" }),
    (0x001E, FunctionDescriptor { name: "REPT", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x001F, FunctionDescriptor { name: "MID", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0020, FunctionDescriptor { name: "LEN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0021, FunctionDescriptor { name: "VALUE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0022, FunctionDescriptor { name: "TRUE", min_args: 0, max_args: 0, flags: 0x02, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x0023, FunctionDescriptor { name: "FALSE", min_args: 0, max_args: 0, flags: 0x02, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x0024, FunctionDescriptor { name: "AND", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0025, FunctionDescriptor { name: "OR", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0026, FunctionDescriptor { name: "NOT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0027, FunctionDescriptor { name: "MOD", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0028, FunctionDescriptor { name: "DCOUNT", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x0029, FunctionDescriptor { name: "DSUM", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x002A, FunctionDescriptor { name: "DAVERAGE", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x002B, FunctionDescriptor { name: "DMIN", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x002C, FunctionDescriptor { name: "DMAX", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x002D, FunctionDescriptor { name: "DSTDEV", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x002E, FunctionDescriptor { name: "VAR", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x002F, FunctionDescriptor { name: "DVAR", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x0030, FunctionDescriptor { name: "TEXT", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0031, FunctionDescriptor { name: "LINEST", min_args: 1, max_args: 4, flags: 0x04, known_args: 4, return_type: b'A', arg_types: "RRVV" }),
    (0x0032, FunctionDescriptor { name: "TREND", min_args: 1, max_args: 4, flags: 0x04, known_args: 4, return_type: b'A', arg_types: "RRRV" }),
    (0x0033, FunctionDescriptor { name: "LOGEST", min_args: 1, max_args: 4, flags: 0x04, known_args: 4, return_type: b'A', arg_types: "RRVV" }),
    (0x0034, FunctionDescriptor { name: "GROWTH", min_args: 1, max_args: 4, flags: 0x04, known_args: 4, return_type: b'A', arg_types: "RRRV" }),
    (0x0035, FunctionDescriptor { name: "GOTO", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0036, FunctionDescriptor { name: "HALT", min_args: 0, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0037, FunctionDescriptor { name: "RETURN", min_args: 0, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x0038, FunctionDescriptor { name: "PV", min_args: 3, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x0039, FunctionDescriptor { name: "FV", min_args: 3, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x003A, FunctionDescriptor { name: "NPER", min_args: 3, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x003B, FunctionDescriptor { name: "PMT", min_args: 3, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x003C, FunctionDescriptor { name: "RATE", min_args: 3, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x003D, FunctionDescriptor { name: "MIRR", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RVV" }),
    (0x003E, FunctionDescriptor { name: "IRR", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x003F, FunctionDescriptor { name: "RAND", min_args: 0, max_args: 0, flags: 0x0a, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x0040, FunctionDescriptor { name: "MATCH", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VRR" }),
    (0x0041, FunctionDescriptor { name: "DATE", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0042, FunctionDescriptor { name: "TIME", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0043, FunctionDescriptor { name: "DAY", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0044, FunctionDescriptor { name: "MONTH", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0045, FunctionDescriptor { name: "YEAR", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0046, FunctionDescriptor { name: "WEEKDAY", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0047, FunctionDescriptor { name: "HOUR", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0048, FunctionDescriptor { name: "MINUTE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0049, FunctionDescriptor { name: "SECOND", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x004A, FunctionDescriptor { name: "NOW", min_args: 0, max_args: 0, flags: 0x0a, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x004B, FunctionDescriptor { name: "AREAS", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x004C, FunctionDescriptor { name: "ROWS", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x004D, FunctionDescriptor { name: "COLUMNS", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x004E, FunctionDescriptor { name: "OFFSET", min_args: 3, max_args: 5, flags: 0x04, known_args: 5, return_type: b'R', arg_types: "RVVVV" }),
    (0x004F, FunctionDescriptor { name: "ABSREF", min_args: 2, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VR" }),
    (0x0050, FunctionDescriptor { name: "RELREF", min_args: 2, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "RR" }),
    (0x0051, FunctionDescriptor { name: "ARGUMENT", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VAR" }),
    (0x0052, FunctionDescriptor { name: "SEARCH", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0053, FunctionDescriptor { name: "TRANSPOSE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'A', arg_types: "A" }),
    (0x0054, FunctionDescriptor { name: "ERROR", min_args: 0, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VA" }),
    (0x0055, FunctionDescriptor { name: "STEP", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x0056, FunctionDescriptor { name: "TYPE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0058, FunctionDescriptor { name: "SET.NAME", min_args: 1, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VA" }),
    (0x0059, FunctionDescriptor { name: "CALLER", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x005A, FunctionDescriptor { name: "DEREF", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x005B, FunctionDescriptor { name: "WINDOWS", min_args: 0, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x005C, FunctionDescriptor { name: "SERIESSUM", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVA" }),
    (0x005D, FunctionDescriptor { name: "DOCUMENTS", min_args: 0, max_args: 2, flags: 0x04, known_args: 0, return_type: b'V', arg_types: "V" }),
    (0x005E, FunctionDescriptor { name: "ACTIVE.CELL", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x005F, FunctionDescriptor { name: "SELECTION", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x0060, FunctionDescriptor { name: "RESULT", min_args: 0, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0061, FunctionDescriptor { name: "ATAN2", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0062, FunctionDescriptor { name: "ASIN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0063, FunctionDescriptor { name: "ACOS", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0064, FunctionDescriptor { name: "CHOOSE", min_args: 2, max_args: 30, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VR" }),
    (0x0065, FunctionDescriptor { name: "HLOOKUP", min_args: 3, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VRRV" }),
    (0x0066, FunctionDescriptor { name: "VLOOKUP", min_args: 3, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VRRV" }),
    (0x0067, FunctionDescriptor { name: "LINKS", min_args: 0, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0068, FunctionDescriptor { name: "INPUT", min_args: 1, max_args: 7, flags: 0x00, known_args: 6, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x0069, FunctionDescriptor { name: "ISREF", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x006A, FunctionDescriptor { name: "GET.FORMULA", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x006B, FunctionDescriptor { name: "GET.NAME", min_args: 1, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x006C, FunctionDescriptor { name: "SET.VALUE", min_args: 2, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "RV" }),
    (0x006D, FunctionDescriptor { name: "LOG", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x006E, FunctionDescriptor { name: "EXEC", min_args: 1, max_args: 4, flags: 0x00, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x006F, FunctionDescriptor { name: "CHAR", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0070, FunctionDescriptor { name: "LOWER", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0071, FunctionDescriptor { name: "UPPER", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0072, FunctionDescriptor { name: "PROPER", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0073, FunctionDescriptor { name: "LEFT", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0074, FunctionDescriptor { name: "RIGHT", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0075, FunctionDescriptor { name: "EXACT", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0076, FunctionDescriptor { name: "TRIM", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0077, FunctionDescriptor { name: "REPLACE", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x0078, FunctionDescriptor { name: "SUBSTITUTE", min_args: 3, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x0079, FunctionDescriptor { name: "CODE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x007B, FunctionDescriptor { name: "DIRECTORY", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x007C, FunctionDescriptor { name: "FIND", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x007D, FunctionDescriptor { name: "CELL", min_args: 1, max_args: 2, flags: 0x0c, known_args: 2, return_type: b'V', arg_types: "VR" }),
    (0x007E, FunctionDescriptor { name: "ISERR", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x007F, FunctionDescriptor { name: "ISTEXT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0080, FunctionDescriptor { name: "ISNUMBER", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0081, FunctionDescriptor { name: "ISBLANK", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0082, FunctionDescriptor { name: "T", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0083, FunctionDescriptor { name: "N", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0084, FunctionDescriptor { name: "FOPEN", min_args: 1, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0085, FunctionDescriptor { name: "FCLOSE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0086, FunctionDescriptor { name: "FSIZE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0087, FunctionDescriptor { name: "FREADLN", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0088, FunctionDescriptor { name: "FREAD", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0089, FunctionDescriptor { name: "FWRITELN", min_args: 2, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x008A, FunctionDescriptor { name: "FWRITE", min_args: 2, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x008B, FunctionDescriptor { name: "FPOS", min_args: 1, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x008C, FunctionDescriptor { name: "DATEVALUE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x008D, FunctionDescriptor { name: "TIMEVALUE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x008E, FunctionDescriptor { name: "SLN", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x008F, FunctionDescriptor { name: "SYD", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x0090, FunctionDescriptor { name: "DDB", min_args: 4, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x0091, FunctionDescriptor { name: "GET.DEF", min_args: 1, max_args: 3, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VVV" }),
    (0x0092, FunctionDescriptor { name: "REFTEXT", min_args: 1, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VR" }),
    (0x0093, FunctionDescriptor { name: "TEXTREF", min_args: 1, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x0094, FunctionDescriptor { name: "INDIRECT", min_args: 1, max_args: 2, flags: 0x0c, known_args: 2, return_type: b'R', arg_types: "VV" }),
    (0x0095, FunctionDescriptor { name: "REGISTER", min_args: 0, max_args: 29, flags: 0x00, known_args: 29, return_type: b'V', arg_types: "VVVVVVVVVVVVVVVVVVVVVVVVVVVVV" }),
    (0x0096, FunctionDescriptor { name: "CALL", min_args: 1, max_args: 30, flags: 0x00, known_args: 29, return_type: b'V', arg_types: "AAAAAAAAAAAAAAAAAAAAAAAAAAAAA" }),
    (0x0097, FunctionDescriptor { name: "ADD.BAR", min_args: 1, max_args: 30, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VAAAAAAAAAAAAAAAAAAAAAAAAAA" }),
    (0x0098, FunctionDescriptor { name: "ADD.MENU", min_args: 1, max_args: 4, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VAAV" }),
    (0x0099, FunctionDescriptor { name: "ADD.COMMAND", min_args: 3, max_args: 5, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VAAAV" }),
    (0x009A, FunctionDescriptor { name: "ENABLE.COMMAND", min_args: 4, max_args: 5, flags: 0x00, known_args: 4, return_type: b'V', arg_types: "VVVVV" }),
    (0x009B, FunctionDescriptor { name: "CHECK.COMMAND", min_args: 4, max_args: 5, flags: 0x00, known_args: 4, return_type: b'V', arg_types: "VVVVV" }),
    (0x009C, FunctionDescriptor { name: "RENAME.COMMAND", min_args: 4, max_args: 5, flags: 0x00, known_args: 4, return_type: b'V', arg_types: "VVVVV" }),
    (0x009D, FunctionDescriptor { name: "SHOW.BAR", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x009E, FunctionDescriptor { name: "DELETE.MENU", min_args: 2, max_args: 3, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VVV" }),
    (0x009F, FunctionDescriptor { name: "DELETE.COMMAND", min_args: 3, max_args: 4, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VVVV" }),
    (0x00A0, FunctionDescriptor { name: "GET.CHART.ITEM", min_args: 1, max_args: 3, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VVV" }),
    (0x00A1, FunctionDescriptor { name: "DIALOG.BOX", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x00A2, FunctionDescriptor { name: "CLEAN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00A3, FunctionDescriptor { name: "MDETERM", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x00A4, FunctionDescriptor { name: "MINVERSE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'A', arg_types: "A" }),
    (0x00A5, FunctionDescriptor { name: "MMULT", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'A', arg_types: "AA" }),
    (0x00A6, FunctionDescriptor { name: "FILES", min_args: 0, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00A7, FunctionDescriptor { name: "IPMT", min_args: 4, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x00A8, FunctionDescriptor { name: "PPMT", min_args: 4, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x00A9, FunctionDescriptor { name: "COUNTA", min_args: 0, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x00AA, FunctionDescriptor { name: "CANCEL.KEY", min_args: 0, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VR" }),
    (0x00AB, FunctionDescriptor { name: "FOR", min_args: 3, max_args: 4, flags: 0x00, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x00AC, FunctionDescriptor { name: "WHILE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00AD, FunctionDescriptor { name: "BREAK", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x00AE, FunctionDescriptor { name: "NEXT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x00AF, FunctionDescriptor { name: "INITIATE", min_args: 2, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x00B0, FunctionDescriptor { name: "REQUEST", min_args: 2, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x00B1, FunctionDescriptor { name: "POKE", min_args: 3, max_args: 3, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VAA" }),
    (0x00B2, FunctionDescriptor { name: "EXECUTE", min_args: 2, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x00B3, FunctionDescriptor { name: "TERMINATE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00B4, FunctionDescriptor { name: "RESTART", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00B5, FunctionDescriptor { name: "HELP", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00B6, FunctionDescriptor { name: "GET.BAR", min_args: 0, max_args: 4, flags: 0x00, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x00B7, FunctionDescriptor { name: "PRODUCT", min_args: 0, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x00B8, FunctionDescriptor { name: "FACT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00B9, FunctionDescriptor { name: "GET.CELL", min_args: 1, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VR" }),
    (0x00BA, FunctionDescriptor { name: "GET.WORKSPACE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00BB, FunctionDescriptor { name: "GET.WINDOW", min_args: 1, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x00BC, FunctionDescriptor { name: "GET.DOCUMENT", min_args: 1, max_args: 2, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "VV" }),
    (0x00BD, FunctionDescriptor { name: "DPRODUCT", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x00BE, FunctionDescriptor { name: "ISNONTEXT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00BF, FunctionDescriptor { name: "GET.NOTE", min_args: 0, max_args: 3, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "AVV" }),
    (0x00C0, FunctionDescriptor { name: "NOTE", min_args: 0, max_args: 4, flags: 0x00, known_args: 4, return_type: b'V', arg_types: "VAAA" }),
    (0x00C1, FunctionDescriptor { name: "STDEVP", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x00C2, FunctionDescriptor { name: "VARP", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x00C3, FunctionDescriptor { name: "DSTDEVP", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x00C4, FunctionDescriptor { name: "DVARP", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x00C5, FunctionDescriptor { name: "TRUNC", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00C6, FunctionDescriptor { name: "ISLOGICAL", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00C7, FunctionDescriptor { name: "DCOUNTA", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x00C8, FunctionDescriptor { name: "DELETE.BAR", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00C9, FunctionDescriptor { name: "UNREGISTER", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00CC, FunctionDescriptor { name: "USDOLLAR", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00CD, FunctionDescriptor { name: "FINDB", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x00CE, FunctionDescriptor { name: "SEARCHB", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x00CF, FunctionDescriptor { name: "REPLACEB", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x00D0, FunctionDescriptor { name: "LEFTB", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00D1, FunctionDescriptor { name: "RIGHTB", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00D2, FunctionDescriptor { name: "MIDB", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x00D3, FunctionDescriptor { name: "LENB", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00D4, FunctionDescriptor { name: "ROUNDUP", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00D5, FunctionDescriptor { name: "ROUNDDOWN", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00D6, FunctionDescriptor { name: "ASC", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00D7, FunctionDescriptor { name: "DBCS", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00D8, FunctionDescriptor { name: "RANK", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VRV" }),
    (0x00DB, FunctionDescriptor { name: "ADDRESS", min_args: 2, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x00DC, FunctionDescriptor { name: "DAYS360", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x00DD, FunctionDescriptor { name: "TODAY", min_args: 0, max_args: 0, flags: 0x0a, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x00DE, FunctionDescriptor { name: "VDB", min_args: 5, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x00DF, FunctionDescriptor { name: "ELSE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x00E0, FunctionDescriptor { name: "ELSE.IF", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00E1, FunctionDescriptor { name: "END.IF", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x00E2, FunctionDescriptor { name: "FOR.CELL", min_args: 1, max_args: 3, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VAA" }),
    (0x00E3, FunctionDescriptor { name: "MEDIAN", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x00E4, FunctionDescriptor { name: "SUMPRODUCT", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x00E5, FunctionDescriptor { name: "SINH", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00E6, FunctionDescriptor { name: "COSH", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00E7, FunctionDescriptor { name: "TANH", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00E8, FunctionDescriptor { name: "ASINH", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00E9, FunctionDescriptor { name: "ACOSH", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00EA, FunctionDescriptor { name: "ATANH", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00EB, FunctionDescriptor { name: "DGET", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "RRR" }),
    (0x00EC, FunctionDescriptor { name: "CREATE.OBJECT", min_args: 2, max_args: 11, flags: 0x00, known_args: 9, return_type: b'V', arg_types: "VAAAAAAAAAA" }),
    (0x00ED, FunctionDescriptor { name: "VOLATILE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00EE, FunctionDescriptor { name: "LAST.ERROR", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x00EF, FunctionDescriptor { name: "CUSTOM.UNDO", min_args: 0, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00F0, FunctionDescriptor { name: "CUSTOM.REPEAT", min_args: 0, max_args: 3, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x00F1, FunctionDescriptor { name: "FORMULA.CONVERT", min_args: 2, max_args: 5, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VAAAA" }),
    (0x00F2, FunctionDescriptor { name: "GET.LINK.INFO", min_args: 2, max_args: 4, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VVVV" }),
    (0x00F3, FunctionDescriptor { name: "TEXT.BOX", min_args: 1, max_args: 4, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VVVV" }),
    (0x00F4, FunctionDescriptor { name: "INFO", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00F5, FunctionDescriptor { name: "GROUP", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x00F6, FunctionDescriptor { name: "GET.OBJECT", min_args: 1, max_args: 5, flags: 0x00, known_args: 4, return_type: b'V', arg_types: "VVVVV" }),
    (0x00F7, FunctionDescriptor { name: "DB", min_args: 4, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x00F8, FunctionDescriptor { name: "PAUSE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00FB, FunctionDescriptor { name: "RESUME", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00FC, FunctionDescriptor { name: "FREQUENCY", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'A', arg_types: "RR" }),
    (0x00FD, FunctionDescriptor { name: "ADD.TOOLBAR", min_args: 0, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x00FE, FunctionDescriptor { name: "DELETE.TOOLBAR", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x00FF, FunctionDescriptor { name: "UserDefinedFunction", min_args: 1, max_args: 30, flags: 0x00, known_args: 30, return_type: b'V', arg_types: "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAA" }),
    (0x0100, FunctionDescriptor { name: "RESET.TOOLBAR", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0101, FunctionDescriptor { name: "EVALUATE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0102, FunctionDescriptor { name: "GET.TOOLBAR", min_args: 2, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0103, FunctionDescriptor { name: "GET.TOOL", min_args: 1, max_args: 3, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0104, FunctionDescriptor { name: "SPELLING.CHECK", min_args: 1, max_args: 3, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0105, FunctionDescriptor { name: "ERROR.TYPE", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0106, FunctionDescriptor { name: "APP.TITLE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0107, FunctionDescriptor { name: "WINDOW.TITLE", min_args: 1, max_args: 1, flags: 0x00, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0108, FunctionDescriptor { name: "SAVE.TOOLBAR", min_args: 0, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0109, FunctionDescriptor { name: "ENABLE.TOOL", min_args: 3, max_args: 3, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x010A, FunctionDescriptor { name: "PRESS.TOOL", min_args: 3, max_args: 3, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x010B, FunctionDescriptor { name: "REGISTER.ID", min_args: 3, max_args: 3, flags: 0x00, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x010C, FunctionDescriptor { name: "GET.WORKBOOK", min_args: 1, max_args: 2, flags: 0x00, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x010D, FunctionDescriptor { name: "AVEDEV", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x010E, FunctionDescriptor { name: "BETADIST", min_args: 3, max_args: 5, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x010F, FunctionDescriptor { name: "GAMMALN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0110, FunctionDescriptor { name: "BETAINV", min_args: 3, max_args: 5, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0111, FunctionDescriptor { name: "BINOMDIST", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x0112, FunctionDescriptor { name: "CHIDIST", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0113, FunctionDescriptor { name: "CHIINV", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0114, FunctionDescriptor { name: "COMBIN", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0115, FunctionDescriptor { name: "CONFIDENCE", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0116, FunctionDescriptor { name: "CRITBINOM", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0117, FunctionDescriptor { name: "EVEN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0118, FunctionDescriptor { name: "EXPONDIST", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0119, FunctionDescriptor { name: "FDIST", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x011A, FunctionDescriptor { name: "FINV", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x011B, FunctionDescriptor { name: "FISHER", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x011C, FunctionDescriptor { name: "FISHERINV", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x011D, FunctionDescriptor { name: "FLOOR", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x011E, FunctionDescriptor { name: "GAMMADIST", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x011F, FunctionDescriptor { name: "GAMMAINV", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0120, FunctionDescriptor { name: "CEILING", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0121, FunctionDescriptor { name: "HYPGEOMDIST", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x0122, FunctionDescriptor { name: "LOGNORMDIST", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0123, FunctionDescriptor { name: "LOGINV", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0124, FunctionDescriptor { name: "NEGBINOMDIST", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0125, FunctionDescriptor { name: "NORMDIST", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x0126, FunctionDescriptor { name: "NORMSDIST", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0127, FunctionDescriptor { name: "NORMINV", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0128, FunctionDescriptor { name: "NORMSINV", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0129, FunctionDescriptor { name: "STANDARDIZE", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x012A, FunctionDescriptor { name: "ODD", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x012B, FunctionDescriptor { name: "PERMUT", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x012C, FunctionDescriptor { name: "POISSON", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x012D, FunctionDescriptor { name: "TDIST", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x012E, FunctionDescriptor { name: "WEIBULL", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x012F, FunctionDescriptor { name: "SUMXMY2", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0130, FunctionDescriptor { name: "SUMX2MY2", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0131, FunctionDescriptor { name: "SUMX2PY2", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0132, FunctionDescriptor { name: "CHITEST", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0133, FunctionDescriptor { name: "CORREL", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0134, FunctionDescriptor { name: "COVAR", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0135, FunctionDescriptor { name: "FORECAST", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VAA" }),
    (0x0136, FunctionDescriptor { name: "FTEST", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0137, FunctionDescriptor { name: "INTERCEPT", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0138, FunctionDescriptor { name: "PEARSON", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x0139, FunctionDescriptor { name: "RSQ", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x013A, FunctionDescriptor { name: "STEYX", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x013B, FunctionDescriptor { name: "SLOPE", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x013C, FunctionDescriptor { name: "TTEST", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "AAVV" }),
    (0x013D, FunctionDescriptor { name: "PROB", min_args: 3, max_args: 4, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "AAV" }),
    (0x013E, FunctionDescriptor { name: "DEVSQ", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x013F, FunctionDescriptor { name: "GEOMEAN", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0140, FunctionDescriptor { name: "HARMEAN", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0141, FunctionDescriptor { name: "SUMSQ", min_args: 0, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0142, FunctionDescriptor { name: "KURT", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0143, FunctionDescriptor { name: "SKEW", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0144, FunctionDescriptor { name: "ZTEST", min_args: 2, max_args: 3, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x0145, FunctionDescriptor { name: "LARGE", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x0146, FunctionDescriptor { name: "SMALL", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x0147, FunctionDescriptor { name: "QUARTILE", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x0148, FunctionDescriptor { name: "PERCENTILE", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x0149, FunctionDescriptor { name: "PERCENTRANK", min_args: 2, max_args: 3, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x014A, FunctionDescriptor { name: "MODE", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x014B, FunctionDescriptor { name: "TRIMMEAN", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x014C, FunctionDescriptor { name: "TINV", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0150, FunctionDescriptor { name: "CONCATENATE", min_args: 0, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0151, FunctionDescriptor { name: "POWER", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0156, FunctionDescriptor { name: "RADIANS", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0157, FunctionDescriptor { name: "DEGREES", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0158, FunctionDescriptor { name: "SUBTOTAL", min_args: 2, max_args: 30, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VR" }),
    (0x0159, FunctionDescriptor { name: "SUMIF", min_args: 2, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "RVR" }),
    (0x015A, FunctionDescriptor { name: "COUNTIF", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x015B, FunctionDescriptor { name: "COUNTBLANK", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x015E, FunctionDescriptor { name: "ISPMT", min_args: 4, max_args: 4, flags: 0x02, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x015F, FunctionDescriptor { name: "DATEDIF", min_args: 3, max_args: 3, flags: 0x02, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x0160, FunctionDescriptor { name: "DATESTRING", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0161, FunctionDescriptor { name: "NUMBERSTRING", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0162, FunctionDescriptor { name: "ROMAN", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0166, FunctionDescriptor { name: "GETPIVOTDATA", min_args: 2, max_args: 2, flags: 0x02, known_args: 2, return_type: b'V', arg_types: "RV" }),
    (0x0167, FunctionDescriptor { name: "HYPERLINK", min_args: 1, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x0168, FunctionDescriptor { name: "PHONETIC", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0169, FunctionDescriptor { name: "AVERAGEA", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x016A, FunctionDescriptor { name: "MAXA", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x016B, FunctionDescriptor { name: "MINA", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x016C, FunctionDescriptor { name: "STDEVPA", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x016D, FunctionDescriptor { name: "VARPA", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x016E, FunctionDescriptor { name: "STDEVA", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x016F, FunctionDescriptor { name: "VARA", min_args: 1, max_args: 30, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "R" }),
    (0x0170, FunctionDescriptor { name: "BAHTTEXT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0171, FunctionDescriptor { name: "THAIDAYOFWEEK", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0172, FunctionDescriptor { name: "THAIDIGIT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0173, FunctionDescriptor { name: "THAIMONTHOFYEAR", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0174, FunctionDescriptor { name: "THAINUMSOUND", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0175, FunctionDescriptor { name: "THAINUMSTRING", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0176, FunctionDescriptor { name: "THAISTRINGLENGTH", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0177, FunctionDescriptor { name: "ISTHAIDIGIT", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0178, FunctionDescriptor { name: "ROUNDBAHTDOWN", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x0179, FunctionDescriptor { name: "ROUNDBAHTUP", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x017A, FunctionDescriptor { name: "THAIYEAR", min_args: 1, max_args: 1, flags: 0x02, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x017B, FunctionDescriptor { name: "RTD", min_args: 2, max_args: 5, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8000, FunctionDescriptor { name: "BEEP", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8001, FunctionDescriptor { name: "OPEN", min_args: 0, max_args: 17, flags: 0x04, known_args: 17, return_type: b'V', arg_types: "VVVVVVVVVVVVVVVVV" }),
    (0x8002, FunctionDescriptor { name: "OPEN.LINKS", min_args: 0, max_args: 15, flags: 0x04, known_args: 15, return_type: b'V', arg_types: "VVVVVVVVVVVVVVV" }),
    (0x8003, FunctionDescriptor { name: "CLOSE.ALL", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8004, FunctionDescriptor { name: "SAVE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8005, FunctionDescriptor { name: "SAVE.AS", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x8006, FunctionDescriptor { name: "FILE.DELETE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8007, FunctionDescriptor { name: "PAGE.SETUP", min_args: 0, max_args: 30, flags: 0x04, known_args: 30, return_type: b'V', arg_types: "VVVVVVVVVVVVVVVVVVVVVVVVVVVVVV" }),
    (0x8008, FunctionDescriptor { name: "PRINT", min_args: 0, max_args: 17, flags: 0x04, known_args: 17, return_type: b'V', arg_types: "VVVVVVVVVVVVVVVVV" }),
    (0x8009, FunctionDescriptor { name: "PRINTER.SETUP", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x800A, FunctionDescriptor { name: "QUIT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x800B, FunctionDescriptor { name: "NEW.WINDOW", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x800C, FunctionDescriptor { name: "ARRANGE.ALL", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x800D, FunctionDescriptor { name: "WINDOW.SIZE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x800E, FunctionDescriptor { name: "WINDOW.MOVE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x800F, FunctionDescriptor { name: "FULL", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8010, FunctionDescriptor { name: "CLOSE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8011, FunctionDescriptor { name: "RUN", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AV" }),
    (0x8016, FunctionDescriptor { name: "SET.PRINT.AREA", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x8017, FunctionDescriptor { name: "SET.PRINT.TITLES", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x8018, FunctionDescriptor { name: "SET.PAGE.BREAK", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8019, FunctionDescriptor { name: "REMOVE.PAGE.BREAK", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x801A, FunctionDescriptor { name: "FONT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x801B, FunctionDescriptor { name: "DISPLAY", min_args: 0, max_args: 9, flags: 0x04, known_args: 9, return_type: b'V', arg_types: "VVVVVVVVV" }),
    (0x801C, FunctionDescriptor { name: "PROTECT.DOCUMENT", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x801D, FunctionDescriptor { name: "PRECISION", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x801E, FunctionDescriptor { name: "A1.R1C1", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x801F, FunctionDescriptor { name: "CALCULATE.NOW", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8020, FunctionDescriptor { name: "CALCULATION", min_args: 0, max_args: 11, flags: 0x04, known_args: 11, return_type: b'V', arg_types: "VVVVVVVVVVV" }),
    (0x8022, FunctionDescriptor { name: "DATA.FIND", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8023, FunctionDescriptor { name: "EXTRACT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8024, FunctionDescriptor { name: "DATA.DELETE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8025, FunctionDescriptor { name: "SET.DATABASE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8026, FunctionDescriptor { name: "SET.CRITERIA", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8027, FunctionDescriptor { name: "SORT", min_args: 0, max_args: 17, flags: 0x04, known_args: 17, return_type: b'V', arg_types: "VAAAAAAVVVVVVVVVV" }),
    (0x8028, FunctionDescriptor { name: "DATA.SERIES", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x8029, FunctionDescriptor { name: "TABLE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x802A, FunctionDescriptor { name: "FORMAT.NUMBER", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x802B, FunctionDescriptor { name: "ALIGNMENT", min_args: 0, max_args: 10, flags: 0x04, known_args: 10, return_type: b'V', arg_types: "VVVVVVVVVV" }),
    (0x802C, FunctionDescriptor { name: "STYLE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x802D, FunctionDescriptor { name: "BORDER", min_args: 0, max_args: 27, flags: 0x04, known_args: 27, return_type: b'V', arg_types: "VVVVVVVVVVVVVVVVVVVVVVVVVVV" }),
    (0x802E, FunctionDescriptor { name: "CELL.PROTECTION", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x802F, FunctionDescriptor { name: "COLUMN.WIDTH", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VAAAA" }),
    (0x8030, FunctionDescriptor { name: "UNDO", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8031, FunctionDescriptor { name: "CUT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x8032, FunctionDescriptor { name: "COPY", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x8033, FunctionDescriptor { name: "PASTE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x8034, FunctionDescriptor { name: "CLEAR", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8035, FunctionDescriptor { name: "PASTE.SPECIAL", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x8036, FunctionDescriptor { name: "EDIT.DELETE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8037, FunctionDescriptor { name: "INSERT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8038, FunctionDescriptor { name: "FILL.RIGHT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8039, FunctionDescriptor { name: "FILL.DOWN", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x803D, FunctionDescriptor { name: "DEFINE.NAME", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VAAAAAV" }),
    (0x803E, FunctionDescriptor { name: "CREATE.NAMES", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x803F, FunctionDescriptor { name: "FORMULA.GOTO", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AV" }),
    (0x8040, FunctionDescriptor { name: "FORMULA.FIND", min_args: 0, max_args: 12, flags: 0x04, known_args: 12, return_type: b'V', arg_types: "VVVVVVVVVVVV" }),
    (0x8041, FunctionDescriptor { name: "SELECT.LAST.CELL", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8042, FunctionDescriptor { name: "SHOW.ACTIVE.CELL", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8043, FunctionDescriptor { name: "GALLERY.AREA", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8044, FunctionDescriptor { name: "GALLERY.BAR", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8045, FunctionDescriptor { name: "GALLERY.COLUMN", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8046, FunctionDescriptor { name: "GALLERY.LINE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8047, FunctionDescriptor { name: "GALLERY.PIE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8048, FunctionDescriptor { name: "GALLERY.SCATTER", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8049, FunctionDescriptor { name: "COMBINATION", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x804A, FunctionDescriptor { name: "PREFERRED", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x804B, FunctionDescriptor { name: "ADD.OVERLAY", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x804C, FunctionDescriptor { name: "GRIDLINES", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x804D, FunctionDescriptor { name: "SET.PREFERRED", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x804E, FunctionDescriptor { name: "AXES", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x804F, FunctionDescriptor { name: "LEGEND", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8050, FunctionDescriptor { name: "ATTACH.TEXT", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8051, FunctionDescriptor { name: "ADD.ARROW", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8052, FunctionDescriptor { name: "SELECT.CHART", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8053, FunctionDescriptor { name: "SELECT.PLOT.AREA", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8054, FunctionDescriptor { name: "PATTERNS", min_args: 0, max_args: 13, flags: 0x04, known_args: 13, return_type: b'V', arg_types: "VVVVVVVVVVVVV" }),
    (0x8055, FunctionDescriptor { name: "MAIN.CHART", min_args: 0, max_args: 10, flags: 0x04, known_args: 10, return_type: b'V', arg_types: "VVVVVVVVVV" }),
    (0x8056, FunctionDescriptor { name: "OVERLAY", min_args: 0, max_args: 12, flags: 0x04, known_args: 12, return_type: b'V', arg_types: "VVVVVVVVVVVV" }),
    (0x8057, FunctionDescriptor { name: "SCALE", min_args: 0, max_args: 10, flags: 0x04, known_args: 10, return_type: b'V', arg_types: "VVVVVVVVVV" }),
    (0x8058, FunctionDescriptor { name: "FORMAT.LEGEND", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8059, FunctionDescriptor { name: "FORMAT.TEXT", min_args: 0, max_args: 11, flags: 0x04, known_args: 11, return_type: b'V', arg_types: "VVVVVVVVVVV" }),
    (0x805A, FunctionDescriptor { name: "EDIT.REPEAT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x805B, FunctionDescriptor { name: "PARSE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VA" }),
    (0x805C, FunctionDescriptor { name: "JUSTIFY", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x805D, FunctionDescriptor { name: "HIDE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x805E, FunctionDescriptor { name: "UNHIDE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x805F, FunctionDescriptor { name: "WORKSPACE", min_args: 0, max_args: 16, flags: 0x04, known_args: 16, return_type: b'V', arg_types: "VVVVVVVVVVVVVVVV" }),
    (0x8060, FunctionDescriptor { name: "FORMULA", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VA" }),
    (0x8061, FunctionDescriptor { name: "FORMULA.FILL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VA" }),
    (0x8062, FunctionDescriptor { name: "FORMULA.ARRAY", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VA" }),
    (0x8063, FunctionDescriptor { name: "DATA.FIND.NEXT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8064, FunctionDescriptor { name: "DATA.FIND.PREV", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8065, FunctionDescriptor { name: "FORMULA.FIND.NEXT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8066, FunctionDescriptor { name: "FORMULA.FIND.PREV", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8067, FunctionDescriptor { name: "ACTIVATE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8068, FunctionDescriptor { name: "ACTIVATE.NEXT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8069, FunctionDescriptor { name: "ACTIVATE.PREV", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x806A, FunctionDescriptor { name: "UNLOCKED.NEXT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x806B, FunctionDescriptor { name: "UNLOCKED.PREV", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x806C, FunctionDescriptor { name: "COPY.PICTURE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x806D, FunctionDescriptor { name: "SELECT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x806E, FunctionDescriptor { name: "DELETE.NAME", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x806F, FunctionDescriptor { name: "DELETE.FORMAT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8070, FunctionDescriptor { name: "VLINE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8071, FunctionDescriptor { name: "HLINE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8072, FunctionDescriptor { name: "VPAGE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8073, FunctionDescriptor { name: "HPAGE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8074, FunctionDescriptor { name: "VSCROLL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8075, FunctionDescriptor { name: "HSCROLL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8076, FunctionDescriptor { name: "ALERT", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8077, FunctionDescriptor { name: "NEW", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8078, FunctionDescriptor { name: "CANCEL.COPY", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8079, FunctionDescriptor { name: "SHOW.CLIPBOARD", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x807A, FunctionDescriptor { name: "MESSAGE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x807C, FunctionDescriptor { name: "PASTE.LINK", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x807D, FunctionDescriptor { name: "APP.ACTIVATE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x807E, FunctionDescriptor { name: "DELETE.ARROW", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x807F, FunctionDescriptor { name: "ROW.HEIGHT", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VAAA" }),
    (0x8080, FunctionDescriptor { name: "FORMAT.MOVE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VAA" }),
    (0x8081, FunctionDescriptor { name: "FORMAT.SIZE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VAA" }),
    (0x8082, FunctionDescriptor { name: "FORMULA.REPLACE", min_args: 0, max_args: 11, flags: 0x04, known_args: 11, return_type: b'V', arg_types: "VVVVVVVVVVV" }),
    (0x8083, FunctionDescriptor { name: "SEND.KEYS", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8084, FunctionDescriptor { name: "SELECT.SPECIAL", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8085, FunctionDescriptor { name: "APPLY.NAMES", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x8086, FunctionDescriptor { name: "REPLACE.FONT", min_args: 0, max_args: 10, flags: 0x04, known_args: 10, return_type: b'V', arg_types: "VVVVVVVVVV" }),
    (0x8087, FunctionDescriptor { name: "FREEZE.PANES", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8088, FunctionDescriptor { name: "SHOW.INFO", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8089, FunctionDescriptor { name: "SPLIT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x808A, FunctionDescriptor { name: "ON.WINDOW", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x808B, FunctionDescriptor { name: "ON.DATA", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x808C, FunctionDescriptor { name: "DISABLE.INPUT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x808E, FunctionDescriptor { name: "OUTLINE", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x808F, FunctionDescriptor { name: "LIST.NAMES", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8090, FunctionDescriptor { name: "FILE.CLOSE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8091, FunctionDescriptor { name: "SAVE.WORKBOOK", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x8092, FunctionDescriptor { name: "DATA.FORM", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8093, FunctionDescriptor { name: "COPY.CHART", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8094, FunctionDescriptor { name: "ON.TIME", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x8095, FunctionDescriptor { name: "WAIT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8096, FunctionDescriptor { name: "FORMAT.FONT", min_args: 0, max_args: 15, flags: 0x04, known_args: 15, return_type: b'V', arg_types: "VVVVVVVVVVVVVVV" }),
    (0x8097, FunctionDescriptor { name: "FILL.UP", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8098, FunctionDescriptor { name: "FILL.LEFT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8099, FunctionDescriptor { name: "DELETE.OVERLAY", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x809B, FunctionDescriptor { name: "SHORT.MENUS", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x809F, FunctionDescriptor { name: "SET.UPDATE.STATUS", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x80A1, FunctionDescriptor { name: "COLOR.PALETTE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80A2, FunctionDescriptor { name: "DELETE.STYLE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80A3, FunctionDescriptor { name: "WINDOW.RESTORE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80A4, FunctionDescriptor { name: "WINDOW.MAXIMIZE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80A6, FunctionDescriptor { name: "CHANGE.LINK", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x80A7, FunctionDescriptor { name: "CALCULATE.DOCUMENT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80A8, FunctionDescriptor { name: "ON.KEY", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80A9, FunctionDescriptor { name: "APP.RESTORE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80AA, FunctionDescriptor { name: "APP.MOVE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80AB, FunctionDescriptor { name: "APP.SIZE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80AC, FunctionDescriptor { name: "APP.MINIMIZE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80AD, FunctionDescriptor { name: "APP.MAXIMIZE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80AE, FunctionDescriptor { name: "BRING.TO.FRONT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80AF, FunctionDescriptor { name: "SEND.TO.BACK", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80B9, FunctionDescriptor { name: "MAIN.CHART.TYPE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80BA, FunctionDescriptor { name: "OVERLAY.CHART.TYPE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80BB, FunctionDescriptor { name: "SELECT.END", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80BC, FunctionDescriptor { name: "OPEN.MAIL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80BD, FunctionDescriptor { name: "SEND.MAIL", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "AVV" }),
    (0x80BE, FunctionDescriptor { name: "STANDARD.FONT", min_args: 0, max_args: 9, flags: 0x04, known_args: 9, return_type: b'V', arg_types: "VVVVVVVVV" }),
    (0x80BF, FunctionDescriptor { name: "CONSOLIDATE", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x80C0, FunctionDescriptor { name: "SORT.SPECIAL", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VVAAAAAAVVVVVV" }),
    (0x80C1, FunctionDescriptor { name: "GALLERY.3D.AREA", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80C2, FunctionDescriptor { name: "GALLERY.3D.COLUMN", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80C3, FunctionDescriptor { name: "GALLERY.3D.LINE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80C4, FunctionDescriptor { name: "GALLERY.3D.PIE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80C5, FunctionDescriptor { name: "VIEW.3D", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x80C6, FunctionDescriptor { name: "GOAL.SEEK", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "AAA" }),
    (0x80C7, FunctionDescriptor { name: "WORKGROUP", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80C8, FunctionDescriptor { name: "FILL.GROUP", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80C9, FunctionDescriptor { name: "UPDATE.LINK", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80CA, FunctionDescriptor { name: "PROMOTE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80CB, FunctionDescriptor { name: "DEMOTE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80CC, FunctionDescriptor { name: "SHOW.DETAIL", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x80CE, FunctionDescriptor { name: "UNGROUP", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80CF, FunctionDescriptor { name: "OBJECT.PROPERTIES", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80D0, FunctionDescriptor { name: "SAVE.NEW.OBJECT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80D1, FunctionDescriptor { name: "SHARE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80D2, FunctionDescriptor { name: "SHARE.NAME", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80D3, FunctionDescriptor { name: "DUPLICATE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80D4, FunctionDescriptor { name: "APPLY.STYLE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80D5, FunctionDescriptor { name: "ASSIGN.TO.OBJECT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x80D6, FunctionDescriptor { name: "OBJECT.PROTECTION", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80D7, FunctionDescriptor { name: "HIDE.OBJECT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80D8, FunctionDescriptor { name: "SET.EXTRACT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80D9, FunctionDescriptor { name: "CREATE.PUBLISHER", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x80DA, FunctionDescriptor { name: "SUBSCRIBE.TO", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80DB, FunctionDescriptor { name: "ATTRIBUTES", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80DC, FunctionDescriptor { name: "SHOW.TOOLBAR", min_args: 0, max_args: 10, flags: 0x04, known_args: 10, return_type: b'V', arg_types: "VVVVVVVVVV" }),
    (0x80DE, FunctionDescriptor { name: "PRINT.PREVIEW", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80DF, FunctionDescriptor { name: "EDIT.COLOR", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x80E0, FunctionDescriptor { name: "SHOW.LEVELS", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80E1, FunctionDescriptor { name: "FORMAT.MAIN", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VVVVVVVVVVVVVV" }),
    (0x80E2, FunctionDescriptor { name: "FORMAT.OVERLAY", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VVVVVVVVVVVVVV" }),
    (0x80E3, FunctionDescriptor { name: "ON.RECALC", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80E4, FunctionDescriptor { name: "EDIT.SERIES", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VAAAAAA" }),
    (0x80E5, FunctionDescriptor { name: "DEFINE.STYLE", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VVVVVVVVVVVVVV" }),
    (0x80F0, FunctionDescriptor { name: "LINE.PRINT", min_args: 0, max_args: 11, flags: 0x04, known_args: 11, return_type: b'V', arg_types: "VVVVVVVVVVV" }),
    (0x80F3, FunctionDescriptor { name: "ENTER.DATA", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x80F9, FunctionDescriptor { name: "GALLERY.RADAR", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x80FA, FunctionDescriptor { name: "MERGE.STYLES", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x80FB, FunctionDescriptor { name: "EDITION.OPTIONS", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VAAAAAA" }),
    (0x80FC, FunctionDescriptor { name: "PASTE.PICTURE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80FD, FunctionDescriptor { name: "PASTE.PICTURE.LINK", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x80FE, FunctionDescriptor { name: "SPELLING", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x8100, FunctionDescriptor { name: "ZOOM", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8103, FunctionDescriptor { name: "INSERT.OBJECT", min_args: 0, max_args: 13, flags: 0x04, known_args: 13, return_type: b'V', arg_types: "VVVVVVVAVVAVV" }),
    (0x8104, FunctionDescriptor { name: "WINDOW.MINIMIZE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8109, FunctionDescriptor { name: "SOUND.NOTE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "AVV" }),
    (0x810A, FunctionDescriptor { name: "SOUND.PLAY", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "AVV" }),
    (0x810B, FunctionDescriptor { name: "FORMAT.SHAPE", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVAVV" }),
    (0x810C, FunctionDescriptor { name: "EXTEND.POLYGON", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x810D, FunctionDescriptor { name: "FORMAT.AUTO", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x8110, FunctionDescriptor { name: "GALLERY.3D.BAR", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8111, FunctionDescriptor { name: "GALLERY.3D.SURFACE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8112, FunctionDescriptor { name: "FILL.AUTO", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AV" }),
    (0x8114, FunctionDescriptor { name: "CUSTOMIZE.TOOLBAR", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8115, FunctionDescriptor { name: "ADD.TOOL", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8116, FunctionDescriptor { name: "EDIT.OBJECT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8117, FunctionDescriptor { name: "ON.DOUBLECLICK", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8118, FunctionDescriptor { name: "ON.ENTRY", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8119, FunctionDescriptor { name: "WORKBOOK.ADD", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x811A, FunctionDescriptor { name: "WORKBOOK.MOVE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x811B, FunctionDescriptor { name: "WORKBOOK.COPY", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x811C, FunctionDescriptor { name: "WORKBOOK.OPTIONS", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x811D, FunctionDescriptor { name: "SAVE.WORKSPACE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8120, FunctionDescriptor { name: "CHART.WIZARD", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VAVVVVVVVVVVVV" }),
    (0x8121, FunctionDescriptor { name: "DELETE.TOOL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8122, FunctionDescriptor { name: "MOVE.TOOL", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x8123, FunctionDescriptor { name: "WORKBOOK.SELECT", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8124, FunctionDescriptor { name: "WORKBOOK.ACTIVATE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8125, FunctionDescriptor { name: "ASSIGN.TO.TOOL", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVA" }),
    (0x8127, FunctionDescriptor { name: "COPY.TOOL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8128, FunctionDescriptor { name: "RESET.TOOL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8129, FunctionDescriptor { name: "CONSTRAIN.NUMERIC", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x812A, FunctionDescriptor { name: "PASTE.TOOL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x812E, FunctionDescriptor { name: "WORKBOOK.NEW", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8131, FunctionDescriptor { name: "SCENARIO.CELLS", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x8132, FunctionDescriptor { name: "SCENARIO.DELETE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8133, FunctionDescriptor { name: "SCENARIO.ADD", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVAVVV" }),
    (0x8134, FunctionDescriptor { name: "SCENARIO.EDIT", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVAVVV" }),
    (0x8135, FunctionDescriptor { name: "SCENARIO.SHOW", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8136, FunctionDescriptor { name: "SCENARIO.SHOW.NEXT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8137, FunctionDescriptor { name: "SCENARIO.SUMMARY", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AV" }),
    (0x8138, FunctionDescriptor { name: "PIVOT.TABLE.WIZARD", min_args: 0, max_args: 16, flags: 0x04, known_args: 16, return_type: b'V', arg_types: "VAAVVVVVVVVVVVVV" }),
    (0x8139, FunctionDescriptor { name: "PIVOT.FIELD.PROPERTIES", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x813A, FunctionDescriptor { name: "PIVOT.FIELD", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x813B, FunctionDescriptor { name: "PIVOT.ITEM", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x813C, FunctionDescriptor { name: "PIVOT.ADD.FIELDS", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x813E, FunctionDescriptor { name: "OPTIONS.CALCULATION", min_args: 0, max_args: 10, flags: 0x04, known_args: 10, return_type: b'V', arg_types: "VVVVVVVVVV" }),
    (0x813F, FunctionDescriptor { name: "OPTIONS.EDIT", min_args: 0, max_args: 11, flags: 0x04, known_args: 11, return_type: b'V', arg_types: "VVVVVVVVVVV" }),
    (0x8140, FunctionDescriptor { name: "OPTIONS.VIEW", min_args: 0, max_args: 18, flags: 0x04, known_args: 18, return_type: b'V', arg_types: "VVVVVVVVVVVVVVVVVV" }),
    (0x8141, FunctionDescriptor { name: "ADDIN.MANAGER", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8142, FunctionDescriptor { name: "MENU.EDITOR", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8143, FunctionDescriptor { name: "ATTACH.TOOLBARS", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8144, FunctionDescriptor { name: "VBAActivate", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8145, FunctionDescriptor { name: "OPTIONS.CHART", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x8148, FunctionDescriptor { name: "VBA.INSERT.FILE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x814A, FunctionDescriptor { name: "VBA.PROCEDURE.DEFINITION", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8150, FunctionDescriptor { name: "ROUTING.SLIP", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "AVVVVV" }),
    (0x8152, FunctionDescriptor { name: "ROUTE.DOCUMENT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8153, FunctionDescriptor { name: "MAIL.LOGON", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "AAV" }),
    (0x8156, FunctionDescriptor { name: "INSERT.PICTURE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8157, FunctionDescriptor { name: "EDIT.TOOL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8158, FunctionDescriptor { name: "GALLERY.DOUGHNUT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x815E, FunctionDescriptor { name: "CHART.TREND", min_args: 0, max_args: 8, flags: 0x04, known_args: 8, return_type: b'V', arg_types: "VVVVVVVV" }),
    (0x8160, FunctionDescriptor { name: "PIVOT.ITEM.PROPERTIES", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x8162, FunctionDescriptor { name: "WORKBOOK.INSERT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8163, FunctionDescriptor { name: "OPTIONS.TRANSITION", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x8164, FunctionDescriptor { name: "OPTIONS.GENERAL", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VVVVVVVVVVVVVV" }),
    (0x8172, FunctionDescriptor { name: "FILTER.ADVANCED", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VAAAV" }),
    (0x8175, FunctionDescriptor { name: "MAIL.ADD.MAILER", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8176, FunctionDescriptor { name: "MAIL.DELETE.MAILER", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8177, FunctionDescriptor { name: "MAIL.REPLY", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8178, FunctionDescriptor { name: "MAIL.REPLY.ALL", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8179, FunctionDescriptor { name: "MAIL.FORWARD", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x817A, FunctionDescriptor { name: "MAIL.NEXT.LETTER", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x817B, FunctionDescriptor { name: "DATA.LABEL", min_args: 0, max_args: 10, flags: 0x04, known_args: 10, return_type: b'V', arg_types: "VVVVVVVVVV" }),
    (0x817C, FunctionDescriptor { name: "INSERT.TITLE", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x817D, FunctionDescriptor { name: "FONT.PROPERTIES", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VVVVVVVVVVVVVV" }),
    (0x817E, FunctionDescriptor { name: "MACRO.OPTIONS", min_args: 0, max_args: 10, flags: 0x04, known_args: 10, return_type: b'V', arg_types: "VVVVVVVVVV" }),
    (0x817F, FunctionDescriptor { name: "WORKBOOK.HIDE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8180, FunctionDescriptor { name: "WORKBOOK.UNHIDE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8181, FunctionDescriptor { name: "WORKBOOK.DELETE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8182, FunctionDescriptor { name: "WORKBOOK.NAME", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8184, FunctionDescriptor { name: "GALLERY.CUSTOM", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8186, FunctionDescriptor { name: "ADD.CHART.AUTOFORMAT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x8187, FunctionDescriptor { name: "DELETE.CHART.AUTOFORMAT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8188, FunctionDescriptor { name: "CHART.ADD.DATA", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VAVVVV" }),
    (0x8189, FunctionDescriptor { name: "AUTO.OUTLINE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x818A, FunctionDescriptor { name: "TAB.ORDER", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x818B, FunctionDescriptor { name: "SHOW.DIALOG", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x818C, FunctionDescriptor { name: "SELECT.ALL", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x818D, FunctionDescriptor { name: "UNGROUP.SHEETS", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x818E, FunctionDescriptor { name: "SUBTOTAL.CREATE", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x818F, FunctionDescriptor { name: "SUBTOTAL.REMOVE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8190, FunctionDescriptor { name: "RENAME.OBJECT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x819C, FunctionDescriptor { name: "WORKBOOK.SCROLL", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x819D, FunctionDescriptor { name: "WORKBOOK.NEXT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x819E, FunctionDescriptor { name: "WORKBOOK.PREV", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x819F, FunctionDescriptor { name: "WORKBOOK.TAB.SPLIT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81A0, FunctionDescriptor { name: "FULL.SCREEN", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81A1, FunctionDescriptor { name: "WORKBOOK.PROTECT", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x81A4, FunctionDescriptor { name: "SCROLLBAR.PROPERTIES", min_args: 0, max_args: 7, flags: 0x04, known_args: 7, return_type: b'V', arg_types: "VVVVVVV" }),
    (0x81A5, FunctionDescriptor { name: "PIVOT.SHOW.PAGES", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81A6, FunctionDescriptor { name: "TEXT.TO.COLUMNS", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VAVVVVVVVVVVVV" }),
    (0x81A7, FunctionDescriptor { name: "FORMAT.CHARTTYPE", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x81A8, FunctionDescriptor { name: "LINK.FORMAT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81A9, FunctionDescriptor { name: "TRACER.DISPLAY", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81AE, FunctionDescriptor { name: "TRACER.NAVIGATE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x81AF, FunctionDescriptor { name: "TRACER.CLEAR", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81B0, FunctionDescriptor { name: "TRACER.ERROR", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81B1, FunctionDescriptor { name: "PIVOT.FIELD.GROUP", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x81B2, FunctionDescriptor { name: "PIVOT.FIELD.UNGROUP", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81B3, FunctionDescriptor { name: "CHECKBOX.PROPERTIES", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x81B4, FunctionDescriptor { name: "LABEL.PROPERTIES", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x81B5, FunctionDescriptor { name: "LISTBOX.PROPERTIES", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x81B6, FunctionDescriptor { name: "EDITBOX.PROPERTIES", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x81B7, FunctionDescriptor { name: "PIVOT.REFRESH", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81B8, FunctionDescriptor { name: "LINK.COMBO", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81B9, FunctionDescriptor { name: "OPEN.TEXT", min_args: 0, max_args: 17, flags: 0x04, known_args: 17, return_type: b'V', arg_types: "VVVVVVVVVVVVVVVVV" }),
    (0x81BA, FunctionDescriptor { name: "HIDE.DIALOG", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81BB, FunctionDescriptor { name: "SET.DIALOG.FOCUS", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81BC, FunctionDescriptor { name: "ENABLE.OBJECT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81BD, FunctionDescriptor { name: "PUSHBUTTON.PROPERTIES", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x81BE, FunctionDescriptor { name: "SET.DIALOG.DEFAULT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81BF, FunctionDescriptor { name: "FILTER", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VVVVVV" }),
    (0x81C0, FunctionDescriptor { name: "FILTER.SHOW.ALL", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81C1, FunctionDescriptor { name: "CLEAR.OUTLINE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81C2, FunctionDescriptor { name: "FUNCTION.WIZARD", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81C3, FunctionDescriptor { name: "ADD.LIST.ITEM", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81C4, FunctionDescriptor { name: "SET.LIST.ITEM", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81C5, FunctionDescriptor { name: "REMOVE.LIST.ITEM", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81C6, FunctionDescriptor { name: "SELECT.LIST.ITEM", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81C7, FunctionDescriptor { name: "SET.CONTROL.VALUE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81C8, FunctionDescriptor { name: "SAVE.COPY.AS", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81CA, FunctionDescriptor { name: "OPTIONS.LISTS.ADD", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VA" }),
    (0x81CB, FunctionDescriptor { name: "OPTIONS.LISTS.DELETE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81CC, FunctionDescriptor { name: "SERIES.AXES", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81CD, FunctionDescriptor { name: "SERIES.X", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x81CE, FunctionDescriptor { name: "SERIES.Y", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AA" }),
    (0x81CF, FunctionDescriptor { name: "ERRORBAR.X", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVA" }),
    (0x81D0, FunctionDescriptor { name: "ERRORBAR.Y", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVA" }),
    (0x81D1, FunctionDescriptor { name: "FORMAT.CHART", min_args: 0, max_args: 18, flags: 0x04, known_args: 18, return_type: b'V', arg_types: "AVVVVVVVVVVVVVVVVV" }),
    (0x81D2, FunctionDescriptor { name: "SERIES.ORDER", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x81D3, FunctionDescriptor { name: "MAIL.LOGOFF", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81D4, FunctionDescriptor { name: "CLEAR.ROUTING.SLIP", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81D5, FunctionDescriptor { name: "APP.ACTIVATE.MICROSOFT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81D6, FunctionDescriptor { name: "MAIL.EDIT.MAILER", min_args: 0, max_args: 6, flags: 0x04, known_args: 6, return_type: b'V', arg_types: "VAAAVA" }),
    (0x81D7, FunctionDescriptor { name: "ON.SHEET", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x81D8, FunctionDescriptor { name: "STANDARD.WIDTH", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81D9, FunctionDescriptor { name: "SCENARIO.MERGE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81DA, FunctionDescriptor { name: "SUMMARY.INFO", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x81DB, FunctionDescriptor { name: "FIND.FILE", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81DC, FunctionDescriptor { name: "ACTIVE.CELL.FONT", min_args: 0, max_args: 14, flags: 0x04, known_args: 14, return_type: b'V', arg_types: "VVVVVVVVVVVVVV" }),
    (0x81DD, FunctionDescriptor { name: "ENABLE.TIPWIZARD", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81DE, FunctionDescriptor { name: "VBA.MAKE.ADDIN", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81E0, FunctionDescriptor { name: "INSERTDATATABLE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81E1, FunctionDescriptor { name: "WORKGROUP.OPTIONS", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81E2, FunctionDescriptor { name: "MAIL.SEND.MAILER", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81E5, FunctionDescriptor { name: "AUTOCORRECT", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81E9, FunctionDescriptor { name: "POST.DOCUMENT", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81EB, FunctionDescriptor { name: "PICKLIST", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81ED, FunctionDescriptor { name: "VIEW.SHOW", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81EE, FunctionDescriptor { name: "VIEW.DEFINE", min_args: 0, max_args: 3, flags: 0x04, known_args: 3, return_type: b'V', arg_types: "VVV" }),
    (0x81EF, FunctionDescriptor { name: "VIEW.DELETE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x81FD, FunctionDescriptor { name: "SHEET.BACKGROUND", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "VV" }),
    (0x81FE, FunctionDescriptor { name: "INSERT.MAP.OBJECT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x81FF, FunctionDescriptor { name: "OPTIONS.MENONO", min_args: 0, max_args: 5, flags: 0x04, known_args: 5, return_type: b'V', arg_types: "VVVVV" }),
    (0x8205, FunctionDescriptor { name: "MSOCHECKS", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8206, FunctionDescriptor { name: "NORMAL", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8207, FunctionDescriptor { name: "LAYOUT", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8208, FunctionDescriptor { name: "RM.PRINT.AREA", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x8209, FunctionDescriptor { name: "CLEAR.PRINT.AREA", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x820A, FunctionDescriptor { name: "ADD.PRINT.AREA", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x820B, FunctionDescriptor { name: "MOVE.BRK", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x8221, FunctionDescriptor { name: "HIDECURR.NOTE", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AV" }),
    (0x8222, FunctionDescriptor { name: "HIDEALL.NOTES", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x8223, FunctionDescriptor { name: "DELETE.NOTE", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "A" }),
    (0x8224, FunctionDescriptor { name: "TRAVERSE.NOTES", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AV" }),
    (0x8225, FunctionDescriptor { name: "ACTIVATE.NOTES", min_args: 0, max_args: 2, flags: 0x04, known_args: 2, return_type: b'V', arg_types: "AV" }),
    (0x826C, FunctionDescriptor { name: "PROTECT.REVISIONS", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x826D, FunctionDescriptor { name: "UNPROTECT.REVISIONS", min_args: 0, max_args: 0, flags: 0x00, known_args: 0, return_type: b'V', arg_types: "" }),
    (0x8287, FunctionDescriptor { name: "OPTIONS.ME", min_args: 0, max_args: 9, flags: 0x04, known_args: 9, return_type: b'V', arg_types: "AVVVVVVVV" }),
    (0x828D, FunctionDescriptor { name: "WEB.PUBLISH", min_args: 0, max_args: 9, flags: 0x04, known_args: 9, return_type: b'V', arg_types: "VVVVVVVVV" }),
    (0x829B, FunctionDescriptor { name: "NEWWEBQUERY", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),
    (0x82A1, FunctionDescriptor { name: "PIVOT.TABLE.CHART", min_args: 0, max_args: 16, flags: 0x04, known_args: 16, return_type: b'V', arg_types: "VAAVVVVVVVVVVVVV" }),
    (0x82F1, FunctionDescriptor { name: "OPTIONS.SAVE", min_args: 0, max_args: 4, flags: 0x04, known_args: 4, return_type: b'V', arg_types: "VVVV" }),
    (0x82F3, FunctionDescriptor { name: "OPTIONS.SPELL", min_args: 0, max_args: 12, flags: 0x04, known_args: 12, return_type: b'V', arg_types: "VVVVVVVVVVVV" }),
    (0x8328, FunctionDescriptor { name: "HIDEALL.INKANNOTS", min_args: 0, max_args: 1, flags: 0x04, known_args: 1, return_type: b'V', arg_types: "V" }),];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_core_ids() {
        assert_eq!(function_def(1).map(|d| d.name), Some("IF"));
        assert_eq!(function_def(4).map(|d| d.name), Some("SUM"));
        assert_eq!(function_def(100).map(|d| d.name), Some("CHOOSE"));
        assert_eq!(function_def(0xFFFE), None);
    }

    #[test]
    fn macro_command_block_is_reachable() {
        let def = function_def(0x8000).unwrap();
        assert_eq!(def.name, "BEEP");
        assert!(function_def(0x8328).is_some());
    }

    #[test]
    fn name_lookup_round_trips() {
        assert_eq!(function_id_from_name("CHOOSE"), Some(100));
        assert_eq!(function_id_from_name("choose"), None);
    }

    #[test]
    fn arity_bounds_are_ordered() {
        for (id, def) in FUNC_DEFS.iter() {
            assert!(def.min_args <= def.max_args, "id {id:#06x}");
        }
    }
}
