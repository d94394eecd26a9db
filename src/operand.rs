//! Operand model shared by the decompiler and the name evaluator.
//!
//! Every token walk maintains a stack of [`Operand`]s. An operand always
//! carries reconstructed formula text and a precedence rank; when the
//! evaluator can prove a constant it also carries a [`Value`].

use crate::token::Ptg;

/// What an operand is, as far as the walk could determine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Kind not known unambiguously.
    Unknown,
    Text,
    Number,
    Bool,
    Error,
    /// Placeholder for an omitted function argument.
    Missing,
    /// Absolute reference(s).
    AbsRef,
    /// Fully or partially relative reference(s).
    RelRef,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    /// A BIFF error code (e.g. 0x17 for `#REF!`).
    Err(u8),
    /// One or more reference boxes; more than one after `tList`.
    Refs(Vec<Ref3D>),
}

/// Operator precedence used when deciding whether a child fragment needs
/// parentheses: a child is wrapped when its rank is below the operator's.
pub(crate) const RANK_CMP: u8 = 10;
pub(crate) const RANK_CONCAT: u8 = 20;
pub(crate) const RANK_ADD: u8 = 30;
pub(crate) const RANK_MUL: u8 = 40;
pub(crate) const RANK_POW: u8 = 50;
pub(crate) const RANK_PERCENT: u8 = 60;
pub(crate) const RANK_UNARY: u8 = 70;
pub(crate) const RANK_REF_OP: u8 = 80;
pub(crate) const LEAF_RANK: u8 = 90;
pub(crate) const FUNC_RANK: u8 = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub kind: OperandKind,
    /// `None` when the value depends on cell data or could not be folded.
    pub value: Option<Value>,
    pub rank: u8,
    /// Reconstituted formula text. Function names are English; the list
    /// separator is "," irrespective of locale.
    pub text: String,
}

impl Operand {
    pub(crate) fn new(kind: OperandKind, value: Option<Value>, rank: u8, text: &str) -> Self {
        Operand {
            kind,
            value,
            rank,
            text: text.to_string(),
        }
    }

    pub(crate) fn unknown() -> Self {
        Operand::new(OperandKind::Unknown, None, 0, "?")
    }

    pub(crate) fn error() -> Self {
        Operand::new(OperandKind::Error, None, 0, "?")
    }
}

/// A 3-D box of cells: `(sheet_lo, sheet_hi, row_lo, row_hi, col_lo,
/// col_hi)` with half-open upper bounds. Sheet components below zero are
/// resolution sentinels (see `context`).
///
/// `relflags` marks each coordinate as relative (1) or absolute (0), in
/// the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ref3D {
    pub coords: [i32; 6],
    pub relflags: [u8; 6],
}

impl Ref3D {
    pub fn absolute(coords: [i32; 6]) -> Self {
        Ref3D {
            coords,
            relflags: [0; 6],
        }
    }
}

/// `a:b`: per-axis envelope, min of the lows and max of the his.
pub(crate) fn range_envelope(a: &Ref3D, b: &Ref3D) -> [i32; 6] {
    combine(a, b, [Axis::Min, Axis::Max, Axis::Min, Axis::Max, Axis::Min, Axis::Max])
}

/// `a b` (intersection): the reverse, max of the lows and min of the his.
pub(crate) fn isect_envelope(a: &Ref3D, b: &Ref3D) -> [i32; 6] {
    combine(a, b, [Axis::Max, Axis::Min, Axis::Max, Axis::Min, Axis::Max, Axis::Min])
}

#[derive(Clone, Copy)]
enum Axis {
    Min,
    Max,
}

fn combine(a: &Ref3D, b: &Ref3D, funcs: [Axis; 6]) -> [i32; 6] {
    let mut out = [0i32; 6];
    for i in 0..6 {
        out[i] = match funcs[i] {
            Axis::Min => a.coords[i].min(b.coords[i]),
            Axis::Max => a.coords[i].max(b.coords[i]),
        };
    }
    out
}

/// How a binary operator coerces its operands before folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Coercion {
    /// `+ - * / ^`: text parses to number, result is a number.
    Arith,
    /// `< <= = >= > <>`: no conversion; text compares after any number.
    Cmp,
    /// `&`: number renders to text, result is text.
    Text,
}

#[derive(Clone, Copy)]
pub(crate) struct BinOpRule {
    pub coercion: Coercion,
    pub result_kind: OperandKind,
    pub rank: u8,
    pub sym: &'static str,
}

pub(crate) fn binop_rule(ptg: Ptg) -> Option<BinOpRule> {
    use OperandKind::*;
    macro_rules! rule {
        ($c:expr, $k:expr, $r:expr, $s:expr) => {
            BinOpRule {
                coercion: $c,
                result_kind: $k,
                rank: $r,
                sym: $s,
            }
        };
    }
    Some(match ptg {
        Ptg::Add => rule!(Coercion::Arith, Number, RANK_ADD, "+"),
        Ptg::Sub => rule!(Coercion::Arith, Number, RANK_ADD, "-"),
        Ptg::Mul => rule!(Coercion::Arith, Number, RANK_MUL, "*"),
        Ptg::Div => rule!(Coercion::Arith, Number, RANK_MUL, "/"),
        Ptg::Power => rule!(Coercion::Arith, Number, RANK_POW, "^"),
        Ptg::Concat => rule!(Coercion::Text, Text, RANK_CONCAT, "&"),
        Ptg::Lt => rule!(Coercion::Cmp, Bool, RANK_CMP, "<"),
        Ptg::Le => rule!(Coercion::Cmp, Bool, RANK_CMP, "<="),
        Ptg::Eq => rule!(Coercion::Cmp, Bool, RANK_CMP, "="),
        Ptg::Ge => rule!(Coercion::Cmp, Bool, RANK_CMP, ">="),
        Ptg::Gt => rule!(Coercion::Cmp, Bool, RANK_CMP, ">"),
        Ptg::Ne => rule!(Coercion::Cmp, Bool, RANK_CMP, "<>"),
        _ => return None,
    })
}

#[derive(Clone, Copy)]
pub(crate) struct UnOpRule {
    pub rank: u8,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

pub(crate) fn unop_rule(ptg: Ptg) -> Option<UnOpRule> {
    Some(match ptg {
        Ptg::Uplus => UnOpRule {
            rank: RANK_UNARY,
            prefix: "+",
            suffix: "",
        },
        Ptg::Uminus => UnOpRule {
            rank: RANK_UNARY,
            prefix: "-",
            suffix: "",
        },
        Ptg::Percent => UnOpRule {
            rank: RANK_PERCENT,
            prefix: "",
            suffix: "%",
        },
        _ => return None,
    })
}

/// Join two already-rendered operands with an infix symbol, wrapping
/// whichever side binds weaker than the operator.
pub(crate) fn infix_text(aop: &Operand, bop: &Operand, rank: u8, sym: &str) -> String {
    let mut out = String::new();
    push_wrapped(&mut out, aop, rank);
    out.push_str(sym);
    push_wrapped(&mut out, bop, rank);
    out
}

pub(crate) fn push_wrapped(out: &mut String, op: &Operand, rank: u8) {
    if op.rank < rank {
        out.push('(');
        out.push_str(&op.text);
        out.push(')');
    } else {
        out.push_str(&op.text);
    }
}

/// Excel's default number-to-text rendering: drop a trailing `.0`.
pub(crate) fn num_to_text(num: f64) -> String {
    let s = format!("{num:?}");
    match s.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(coords: [i32; 6]) -> Ref3D {
        Ref3D::absolute(coords)
    }

    #[test]
    fn range_takes_the_envelope() {
        let a = boxed([0, 1, 5, 6, 2, 3]);
        let b = boxed([0, 1, 1, 9, 4, 5]);
        assert_eq!(range_envelope(&a, &b), [0, 1, 1, 9, 2, 5]);
    }

    #[test]
    fn isect_takes_the_overlap() {
        let a = boxed([0, 1, 0, 10, 0, 4]);
        let b = boxed([0, 1, 5, 20, 2, 8]);
        assert_eq!(isect_envelope(&a, &b), [0, 1, 5, 10, 2, 4]);
    }

    #[test]
    fn weaker_children_are_parenthesized() {
        let sum = Operand::new(OperandKind::Number, None, RANK_ADD, "1+2");
        let leaf = Operand::new(OperandKind::Number, None, LEAF_RANK, "3");
        assert_eq!(infix_text(&sum, &leaf, RANK_MUL, "*"), "(1+2)*3");
        assert_eq!(infix_text(&leaf, &sum, RANK_ADD, "+"), "3+1+2");
    }

    #[test]
    fn number_text_drops_integral_suffix() {
        assert_eq!(num_to_text(7.0), "7");
        assert_eq!(num_to_text(3.25), "3.25");
    }
}
