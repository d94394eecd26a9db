//! Workbook-global tables a formula decoder needs but a token stream does
//! not carry: sheet names, the EXTERNSHEET/SUPBOOK mapping behind 3-D
//! references, add-in name lists, and defined-name records.
//!
//! Sheet-span resolution never fails: every malformed or non-local case
//! maps to a negative sentinel pair that downstream rendering knows how to
//! show. See [MS-XLS] 2.4.106 (ExternSheet) and 2.4.271 (SupBook).

use encoding_rs::Encoding;
use log::warn;

use crate::operand::Operand;

/// Internal reference that does not specify a sheet ("go search the
/// current sheet" labels).
pub const XSH_ANY_SHEET: i32 = -1;
/// Internal reference to deleted sheet(s).
pub const XSH_DELETED: i32 = -2;
/// Internal reference to a macro sheet.
pub const XSH_MACRO: i32 = -3;
/// Reference into another workbook.
pub const XSH_EXTERNAL: i32 = -4;
/// Reference into an add-in's name table.
pub const XSH_ADDIN: i32 = -5;
/// EXTERNSHEET index out of table bounds.
pub const XSH_BAD_REFX: i32 = -101;
/// EXTERNSHEET entry names sheets the workbook does not have.
pub const XSH_BAD_SHEET: i32 = -102;
/// Legacy (BIFF5/7) descriptor names sheets the workbook does not have.
pub const XSH_BAD_SHEET_LEGACY: i32 = -103;

/// In EXTERNSHEET entries, first==last==0xFFFE marks an unspecified sheet
/// and 0xFFFF a deleted one.
const ITAB_UNSPECIFIED: u16 = 0xFFFE;
const ITAB_DELETED: u16 = 0xFFFF;

/// Workbook collaborator consulted while walking a token stream.
///
/// Implemented by [`RefTable`]; tests substitute probes.
pub trait BookContext {
    fn sheet_names(&self) -> &[String];

    /// Resolve a BIFF8 `XtiIndex` to an inclusive local sheet span, or a
    /// sentinel pair (both components equal, negative).
    fn externsheet_span(&self, refx: usize) -> (i32, i32);

    /// Resolve the raw BIFF5/7 in-token externsheet descriptor.
    fn externsheet_span_legacy(&self, raw_extshtx: i32, first: i32, last: i32) -> (i32, i32);

    /// The EXTERNSHEET record type byte for a legacy index, if known.
    /// Type 4 means "current workbook, unspecified sheet".
    fn legacy_externsheet_kind(&self, refx: usize) -> Option<u8>;

    /// Name of an add-in function, for `tNameX` into the add-in table.
    fn addin_function_name(&self, namex: usize) -> Option<&str>;

    /// Codepage for legacy inline strings.
    fn encoding(&self) -> &'static Encoding {
        encoding_rs::WINDOWS_1252
    }
}

/// One EXTERNSHEET entry: a SUPBOOK index plus an inclusive sheet span
/// within that supbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternSheetEntry {
    pub supbook: u16,
    pub itab_first: u16,
    pub itab_last: u16,
}

/// Concrete [`BookContext`] assembled from workbook-global records.
#[derive(Debug, Clone)]
pub struct RefTable {
    pub sheet_names: Vec<String>,
    pub externsheet: Vec<ExternSheetEntry>,
    /// SUPBOOK index of the "this workbook" entry.
    pub supbook_locals: Option<usize>,
    /// SUPBOOK index of the add-in functions entry.
    pub supbook_addins: Option<usize>,
    /// BIFF sheet index -> user-visible sheet index; macro sheets map to
    /// a negative value.
    pub sheet_map: Vec<i32>,
    /// Legacy per-EXTERNSHEET-record type bytes (BIFF5/7 only).
    pub legacy_kinds: Vec<u8>,
    pub addin_names: Vec<String>,
    pub encoding: &'static Encoding,
}

impl RefTable {
    pub fn with_sheet_names(sheet_names: Vec<String>) -> Self {
        let sheet_map = (0..sheet_names.len() as i32).collect();
        RefTable {
            sheet_names,
            externsheet: Vec::new(),
            supbook_locals: Some(0),
            supbook_addins: None,
            sheet_map,
            legacy_kinds: Vec::new(),
            addin_names: Vec::new(),
            encoding: encoding_rs::WINDOWS_1252,
        }
    }
}

impl BookContext for RefTable {
    fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    fn externsheet_span(&self, refx: usize) -> (i32, i32) {
        let entry = match self.externsheet.get(refx) {
            Some(entry) => *entry,
            None => {
                warn!(
                    "externsheet index {refx} not in range({})",
                    self.externsheet.len()
                );
                return (XSH_BAD_REFX, XSH_BAD_REFX);
            }
        };
        if Some(entry.supbook as usize) == self.supbook_addins {
            if entry.itab_first != ITAB_UNSPECIFIED || entry.itab_last != ITAB_UNSPECIFIED {
                warn!(
                    "add-in externsheet entry {refx} has sheet span {}..{}",
                    entry.itab_first, entry.itab_last
                );
            }
            return (XSH_ADDIN, XSH_ADDIN);
        }
        if Some(entry.supbook as usize) != self.supbook_locals {
            return (XSH_EXTERNAL, XSH_EXTERNAL);
        }
        if entry.itab_first == ITAB_UNSPECIFIED && entry.itab_last == ITAB_UNSPECIFIED {
            return (XSH_ANY_SHEET, XSH_ANY_SHEET);
        }
        if entry.itab_first == ITAB_DELETED && entry.itab_last == ITAB_DELETED {
            return (XSH_DELETED, XSH_DELETED);
        }
        self.map_span(entry.itab_first as i32, entry.itab_last as i32, XSH_BAD_SHEET)
    }

    fn externsheet_span_legacy(&self, raw_extshtx: i32, first: i32, last: i32) -> (i32, i32) {
        if raw_extshtx > 0 {
            return (XSH_EXTERNAL, XSH_EXTERNAL);
        }
        if first == -1 && last == -1 {
            return (XSH_DELETED, XSH_DELETED);
        }
        self.map_span(first, last, XSH_BAD_SHEET_LEGACY)
    }

    fn legacy_externsheet_kind(&self, refx: usize) -> Option<u8> {
        self.legacy_kinds.get(refx).copied()
    }

    fn addin_function_name(&self, namex: usize) -> Option<&str> {
        self.addin_names.get(namex).map(String::as_str)
    }

    fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl RefTable {
    fn map_span(&self, first: i32, last: i32, bad: i32) -> (i32, i32) {
        let nsheets = self.sheet_map.len() as i32;
        if !(0 <= first && first <= last && last < nsheets) {
            warn!("externsheet sheet span {first}..{last} not in range({nsheets})");
            return (bad, bad);
        }
        let shx1 = self.sheet_map[first as usize];
        let shx2 = self.sheet_map[last as usize];
        if !(0 <= shx1 && shx1 <= shx2) {
            return (XSH_MACRO, XSH_MACRO);
        }
        (shx1, shx2)
    }
}

/// A defined name (NAME record) plus everything the evaluator learns
/// about it.
#[derive(Debug, Clone, Default)]
pub struct NameObject {
    pub name: String,
    /// `-1` for workbook scope, else the owning sheet index.
    pub scope: i32,
    /// The name's formula token bytes.
    pub rgce: Vec<u8>,
    /// Length of the basic token stream; trailing bytes hold token
    /// extra data (arrays, memory functions).
    pub basic_len: usize,
    /// Name refers to a macro command or function.
    pub is_macro: bool,
    /// Name holds binary (non-formula) data.
    pub is_binary: bool,
    pub evaluated: bool,
    /// Some token carried a relative component.
    pub any_rel: bool,
    /// Some token could not be resolved or decoded.
    pub any_err: bool,
    /// Some token reached outside this workbook.
    pub any_external: bool,
    /// The folded constant, when evaluation reduced the formula to a
    /// single operand.
    pub result: Option<Operand>,
}

impl NameObject {
    pub fn new(name: &str, scope: i32, rgce: Vec<u8>) -> Self {
        let basic_len = rgce.len();
        NameObject {
            name: name.to_string(),
            scope,
            rgce,
            basic_len,
            ..NameObject::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RefTable {
        let mut t = RefTable::with_sheet_names(vec![
            "Sheet1".to_string(),
            "Sheet2".to_string(),
            "Sheet3".to_string(),
        ]);
        t.supbook_locals = Some(0);
        t.supbook_addins = Some(1);
        t.externsheet = vec![
            ExternSheetEntry { supbook: 0, itab_first: 0, itab_last: 2 },
            ExternSheetEntry { supbook: 0, itab_first: 0xFFFE, itab_last: 0xFFFE },
            ExternSheetEntry { supbook: 0, itab_first: 0xFFFF, itab_last: 0xFFFF },
            ExternSheetEntry { supbook: 2, itab_first: 0, itab_last: 0 },
            ExternSheetEntry { supbook: 1, itab_first: 0xFFFE, itab_last: 0xFFFE },
            ExternSheetEntry { supbook: 0, itab_first: 1, itab_last: 9 },
        ];
        t
    }

    #[test]
    fn local_span_resolves() {
        assert_eq!(table().externsheet_span(0), (0, 2));
    }

    #[test]
    fn sentinel_spans() {
        let t = table();
        assert_eq!(t.externsheet_span(1), (XSH_ANY_SHEET, XSH_ANY_SHEET));
        assert_eq!(t.externsheet_span(2), (XSH_DELETED, XSH_DELETED));
        assert_eq!(t.externsheet_span(3), (XSH_EXTERNAL, XSH_EXTERNAL));
        assert_eq!(t.externsheet_span(4), (XSH_ADDIN, XSH_ADDIN));
        assert_eq!(t.externsheet_span(5), (XSH_BAD_SHEET, XSH_BAD_SHEET));
        assert_eq!(t.externsheet_span(99), (XSH_BAD_REFX, XSH_BAD_REFX));
    }

    #[test]
    fn macro_sheets_are_flagged() {
        let mut t = table();
        t.sheet_map = vec![0, -1, 1];
        assert_eq!(t.externsheet_span(0), (XSH_MACRO, XSH_MACRO));
    }

    #[test]
    fn legacy_descriptors() {
        let t = table();
        assert_eq!(t.externsheet_span_legacy(3, 0, 0), (XSH_EXTERNAL, XSH_EXTERNAL));
        assert_eq!(t.externsheet_span_legacy(0, -1, -1), (XSH_DELETED, XSH_DELETED));
        assert_eq!(
            t.externsheet_span_legacy(0, 1, 9),
            (XSH_BAD_SHEET_LEGACY, XSH_BAD_SHEET_LEGACY)
        );
        assert_eq!(t.externsheet_span_legacy(0, 0, 1), (0, 1));
    }
}
