//! Constant folding for defined-name formulas.
//!
//! Defined names (`NAME` records) frequently hold constants or references
//! to other names; folding them at load time lets callers classify a name
//! without evaluating cell data. The walk is the same single pass as the
//! decompiler, but operands carry values and the binary/unary operators,
//! `IF`, and `CHOOSE` fold when their inputs are known.
//!
//! Names reference each other through `tName`/`tNameX`, so evaluation
//! recurses. Results are memoized on the [`NameObject`]; past the alarm
//! depth the per-token trace is promoted to `info` level, and past the
//! panic depth evaluation fails with
//! [`FormulaError::ExcessiveIndirection`].

use log::{debug, info, warn};

use crate::addr::{get_cell_addr, get_cell_range_addr};
use crate::context::{BookContext, NameObject, XSH_ADDIN, XSH_ANY_SHEET, XSH_EXTERNAL};
use crate::decompile::{
    name_display_text, quote_string_literal, read_f64, read_funcid, read_namex_header, read_u16,
    read_u8, resolve_namex_span, resolve_ref3d_span, unresolved_name_text,
};
use crate::ftab::function_def;
use crate::operand::{
    binop_rule, infix_text, isect_envelope, num_to_text, push_wrapped, range_envelope, unop_rule,
    Coercion, Operand, OperandKind, Ref3D, Value, FUNC_RANK, LEAF_RANK, RANK_REF_OP,
};
use crate::refname::{rangename3d, rangename3drel};
use crate::strings;
use crate::token::{self, Ptg, ATTR_CHOOSE, ATTR_SUM};
use crate::{BiffVersion, FormulaError};

/// Recursion depth at which the per-token trace switches on.
pub const STACK_ALARM_LEVEL: u32 = 5;
/// Recursion depth at which evaluation gives up.
pub const STACK_PANIC_LEVEL: u32 = 10;

const FUNCX_IF: u16 = 1;
const FUNCX_CHOOSE: u16 = 100;

/// Evaluate the formula of `names[namex]`, folding constants where the
/// token stream allows it. The result and the summary flags (`any_rel`,
/// `any_err`, `any_external`) are written back onto the name; names it
/// references are evaluated (and memoized) on the way.
pub fn evaluate_name_formula(
    ctx: &dyn BookContext,
    names: &mut [NameObject],
    namex: usize,
    biff: BiffVersion,
) -> Result<(), FormulaError> {
    evaluate_at_level(ctx, names, namex, biff, 0)
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(num_to_text(*n)),
        Value::Text(s) => Some(s.clone()),
        _ => None,
    }
}

/// Relational comparison without coercion: every text sorts after every
/// number, as Excel's `"1" > 9 == TRUE` shows.
fn compare_values(a: &Value, b: &Value) -> Option<std::cmp::Ordering> {
    use std::cmp::Ordering;
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y),
        (Value::Text(x), Value::Text(y)) => Some(x.as_str().cmp(y.as_str())),
        (Value::Number(_), Value::Text(_)) => Some(Ordering::Less),
        (Value::Text(_), Value::Number(_)) => Some(Ordering::Greater),
        _ => None,
    }
}

/// Every operator rule coerces exactly Number and Text inputs; any other
/// operand kind blocks folding.
fn coercible(kind: OperandKind) -> bool {
    matches!(kind, OperandKind::Number | OperandKind::Text)
}

fn fold_binop(ptg: Ptg, aop: &Operand, bop: &Operand) -> Operand {
    let rule = match binop_rule(ptg) {
        Some(rule) => rule,
        None => return Operand::unknown(),
    };
    let text = infix_text(aop, bop, rule.rank, rule.sym);
    let mut res = Operand::new(rule.result_kind, None, rule.rank, &text);
    if !coercible(aop.kind) || !coercible(bop.kind) {
        return res;
    }
    let (aval, bval) = match (&aop.value, &bop.value) {
        (Some(a), Some(b)) => (a, b),
        _ => return res,
    };
    res.value = match rule.coercion {
        Coercion::Arith => {
            let (a, b) = match (numeric_value(aval), numeric_value(bval)) {
                (Some(a), Some(b)) => (a, b),
                _ => return res,
            };
            let folded = match ptg {
                Ptg::Add => a + b,
                Ptg::Sub => a - b,
                Ptg::Mul => a * b,
                Ptg::Div => a / b,
                Ptg::Power => a.powf(b),
                _ => return res,
            };
            Some(Value::Number(folded))
        }
        Coercion::Text => match (text_value(aval), text_value(bval)) {
            (Some(a), Some(b)) => Some(Value::Text(a + &b)),
            _ => return res,
        },
        Coercion::Cmp => {
            let ord = match compare_values(aval, bval) {
                Some(ord) => ord,
                None => return res,
            };
            let folded = match ptg {
                Ptg::Lt => ord.is_lt(),
                Ptg::Le => ord.is_le(),
                Ptg::Eq => ord.is_eq(),
                Ptg::Ge => ord.is_ge(),
                Ptg::Gt => ord.is_gt(),
                Ptg::Ne => ord.is_ne(),
                _ => return res,
            };
            Some(Value::Bool(folded))
        }
    };
    res
}

fn fold_unop(ptg: Ptg, aop: &Operand) -> Operand {
    let rule = match unop_rule(ptg) {
        Some(rule) => rule,
        None => return Operand::unknown(),
    };
    let mut text = String::from(rule.prefix);
    push_wrapped(&mut text, aop, rule.rank);
    text.push_str(rule.suffix);
    let value = match (ptg, &aop.value) {
        (Ptg::Uplus, value) => value.clone(),
        (Ptg::Uminus, Some(Value::Number(n))) => Some(Value::Number(-n)),
        (Ptg::Percent, Some(Value::Number(n))) => Some(Value::Number(n / 100.0)),
        _ => None,
    };
    Operand {
        kind: OperandKind::Number,
        value,
        rank: rule.rank,
        text,
    }
}

fn single_ref(op: &Operand) -> Option<&Ref3D> {
    match &op.value {
        Some(Value::Refs(refs)) if refs.len() == 1 => Some(&refs[0]),
        _ => None,
    }
}

/// 0 or 1 when the operand can steer an `IF`/`CHOOSE` fold.
fn truth_value(op: &Operand) -> Option<u8> {
    match &op.value {
        Some(Value::Bool(b)) => Some(*b as u8),
        Some(Value::Number(n)) if *n == 0.0 => Some(0),
        Some(Value::Number(n)) if *n == 1.0 => Some(1),
        _ => None,
    }
}

fn evaluate_at_level(
    ctx: &dyn BookContext,
    names: &mut [NameObject],
    namex: usize,
    biff: BiffVersion,
    level: u32,
) -> Result<(), FormulaError> {
    if level > STACK_PANIC_LEVEL {
        return Err(FormulaError::ExcessiveIndirection);
    }
    let verbose = level > STACK_ALARM_LEVEL;
    macro_rules! tok_trace {
        ($($arg:tt)*) => {
            if verbose {
                info!($($arg)*);
            } else {
                debug!($($arg)*);
            }
        };
    }

    let nobj = match names.get(namex) {
        Some(nobj) => nobj,
        None => {
            warn!("name index {namex} out of range({})", names.len());
            return Ok(());
        }
    };
    if nobj.evaluated {
        return Ok(());
    }
    // Clone the bytes so recursive evaluation can mutate other entries.
    let data = nobj.rgce.clone();
    let fmlalen = nobj.basic_len.min(data.len());
    let data = &data[..fmlalen];
    tok_trace!(
        "evaluating name #{namex} {:?}, {fmlalen} bytes, level={level}",
        nobj.name
    );

    // Name formulas always store relative components as signed offsets.
    let reldelta = true;
    let r1c1 = true;
    let sztab = token::size_table(biff);
    let mut pos = 0usize;
    let mut stack: Vec<Operand> = Vec::new();
    let mut any_rel = false;
    let mut any_err = false;
    let mut any_external = false;
    let mut underflow = false;

    macro_rules! pop1 {
        () => {
            match stack.pop() {
                Some(op) => op,
                None => {
                    warn!("operand stack underflow at pos {pos}");
                    underflow = true;
                    break;
                }
            }
        };
    }
    macro_rules! pop2 {
        () => {
            match (stack.pop(), stack.pop()) {
                (Some(b), Some(a)) => (a, b),
                _ => {
                    warn!("operand stack underflow at pos {pos}");
                    underflow = true;
                    break;
                }
            }
        };
    }

    if fmlalen == 0 {
        stack.push(Operand::unknown());
    }

    while pos < fmlalen {
        let op = data[pos];
        let tc = token::classify(op);
        let oname = token::opcode_name(tc.opx);
        let mut sz = sztab[tc.opx as usize] as i32;
        tok_trace!(
            "pos:{pos} op:0x{op:02x} name:t{oname} sz:{sz} optype:{} stack depth={}",
            tc.optype,
            stack.len()
        );
        if sz == -2 {
            return Err(FormulaError::UnsupportedToken { op, name: oname });
        }
        let ptg = match tc.ptg {
            Some(ptg) => ptg,
            None => return Err(FormulaError::UnsupportedToken { op, name: oname }),
        };

        if tc.optype == 0 {
            match ptg {
                Ptg::Exp => {
                    // Shared-formula anchors have no business in a name.
                    warn!("t{oname} token in a defined-name formula");
                    any_err = true;
                    stack.push(Operand::unknown());
                }
                Ptg::Tbl => {
                    return Err(FormulaError::UnsupportedToken { op, name: oname });
                }
                Ptg::Add
                | Ptg::Sub
                | Ptg::Mul
                | Ptg::Div
                | Ptg::Power
                | Ptg::Concat
                | Ptg::Lt
                | Ptg::Le
                | Ptg::Eq
                | Ptg::Ge
                | Ptg::Gt
                | Ptg::Ne => {
                    let (aop, bop) = pop2!();
                    stack.push(fold_binop(ptg, &aop, &bop));
                }
                Ptg::Isect => {
                    let (aop, bop) = pop2!();
                    let text = infix_text(&aop, &bop, RANK_REF_OP, " ");
                    let mut res = Operand::new(OperandKind::AbsRef, None, RANK_REF_OP, &text);
                    if aop.kind == OperandKind::Error || bop.kind == OperandKind::Error {
                        res.kind = OperandKind::Error;
                    } else if aop.kind == OperandKind::Unknown || bop.kind == OperandKind::Unknown {
                        // Undefined labels: their NAME records carry empty
                        // formulas and evaluate to Unknown.
                        res.kind = OperandKind::Unknown;
                    } else if aop.kind == OperandKind::AbsRef && bop.kind == OperandKind::AbsRef {
                        if let (Some(ra), Some(rb)) = (single_ref(&aop), single_ref(&bop)) {
                            res.value = Some(Value::Refs(vec![Ref3D::absolute(isect_envelope(
                                ra, rb,
                            ))]));
                        }
                    } else if aop.kind == OperandKind::RelRef && bop.kind == OperandKind::RelRef {
                        res.kind = OperandKind::RelRef;
                        if let (Some(ra), Some(rb)) = (single_ref(&aop), single_ref(&bop)) {
                            if ra.relflags == rb.relflags {
                                res.value = Some(Value::Refs(vec![Ref3D {
                                    coords: isect_envelope(ra, rb),
                                    relflags: ra.relflags,
                                }]));
                            }
                        }
                    }
                    stack.push(res);
                }
                Ptg::List => {
                    let (aop, bop) = pop2!();
                    let text = infix_text(&aop, &bop, RANK_REF_OP, ",");
                    let mut res = Operand::new(OperandKind::AbsRef, None, RANK_REF_OP, &text);
                    let refkinds = [OperandKind::AbsRef, OperandKind::RelRef];
                    if aop.kind == OperandKind::Error || bop.kind == OperandKind::Error {
                        res.kind = OperandKind::Error;
                    } else if refkinds.contains(&aop.kind) && refkinds.contains(&bop.kind) {
                        if aop.kind == OperandKind::RelRef || bop.kind == OperandKind::RelRef {
                            res.kind = OperandKind::RelRef;
                        }
                        if let (Some(Value::Refs(ra)), Some(Value::Refs(rb))) =
                            (&aop.value, &bop.value)
                        {
                            if !ra.is_empty() && rb.len() == 1 {
                                let mut refs = ra.clone();
                                refs.extend(rb.iter().cloned());
                                res.value = Some(Value::Refs(refs));
                            }
                        }
                    }
                    stack.push(res);
                }
                Ptg::Range => {
                    let (aop, bop) = pop2!();
                    let text = infix_text(&aop, &bop, RANK_REF_OP, ":");
                    let mut res = Operand::new(OperandKind::AbsRef, None, RANK_REF_OP, &text);
                    if aop.kind == OperandKind::Error || bop.kind == OperandKind::Error {
                        res.kind = OperandKind::Error;
                    } else if aop.kind == OperandKind::AbsRef && bop.kind == OperandKind::AbsRef {
                        if let (Some(ra), Some(rb)) = (single_ref(&aop), single_ref(&bop)) {
                            res.value = Some(Value::Refs(vec![Ref3D::absolute(range_envelope(
                                ra, rb,
                            ))]));
                        }
                    } else if aop.kind == OperandKind::RelRef && bop.kind == OperandKind::RelRef {
                        res.kind = OperandKind::RelRef;
                        if let (Some(ra), Some(rb)) = (single_ref(&aop), single_ref(&bop)) {
                            if ra.relflags == rb.relflags {
                                res.value = Some(Value::Refs(vec![Ref3D {
                                    coords: range_envelope(ra, rb),
                                    relflags: ra.relflags,
                                }]));
                            }
                        }
                    }
                    stack.push(res);
                }
                Ptg::Uplus | Ptg::Uminus | Ptg::Percent => {
                    let aop = pop1!();
                    stack.push(fold_unop(ptg, &aop));
                }
                Ptg::Paren => {}
                Ptg::MissArg => {
                    stack.push(Operand::new(OperandKind::Missing, None, LEAF_RANK, ""));
                }
                Ptg::Str => {
                    let decoded = if biff >= BiffVersion::Biff8 {
                        strings::read_biff8_short_string(data, pos + 1)
                    } else {
                        strings::read_legacy_string(data, pos + 1, ctx.encoding())
                    };
                    let (strg, newpos) = decoded.ok_or(FormulaError::MalformedSize { pos })?;
                    sz = (newpos - pos) as i32;
                    let text = quote_string_literal(&strg);
                    stack.push(Operand::new(
                        OperandKind::Text,
                        Some(Value::Text(strg)),
                        LEAF_RANK,
                        &text,
                    ));
                }
                Ptg::Extended | Ptg::Sheet | Ptg::EndSheet => {
                    return Err(FormulaError::UnsupportedToken { op, name: oname });
                }
                Ptg::Attr => {
                    let subop = read_u8(data, pos + 1)?;
                    let nc = read_u16(data, pos + 2)?;
                    if subop == ATTR_CHOOSE {
                        sz = nc as i32 * 2 + 6;
                    } else if subop == ATTR_SUM {
                        sz = 4;
                        let aop = pop1!();
                        let text = format!("SUM({})", aop.text);
                        stack.push(Operand::new(OperandKind::Number, None, FUNC_RANK, &text));
                    } else {
                        sz = 4;
                    }
                    tok_trace!(
                        "   subop=0x{subop:02x} name=t{} sz={sz} nc=0x{nc:02x}",
                        token::attr_subop_name(subop)
                    );
                }
                Ptg::Err | Ptg::Bool | Ptg::Int | Ptg::Num => {
                    let res = match ptg {
                        Ptg::Err => {
                            let code = read_u8(data, pos + 1)?;
                            Operand::new(
                                OperandKind::Error,
                                Some(Value::Err(code)),
                                LEAF_RANK,
                                &quote_string_literal(token::error_text_from_code(code)),
                            )
                        }
                        Ptg::Bool => {
                            let v = read_u8(data, pos + 1)? != 0;
                            Operand::new(
                                OperandKind::Bool,
                                Some(Value::Bool(v)),
                                LEAF_RANK,
                                if v { "TRUE" } else { "FALSE" },
                            )
                        }
                        Ptg::Int => {
                            let v = read_u16(data, pos + 1)? as f64;
                            Operand::new(
                                OperandKind::Number,
                                Some(Value::Number(v)),
                                LEAF_RANK,
                                &format!("{v:?}"),
                            )
                        }
                        _ => {
                            let v = read_f64(data, pos + 1)?;
                            Operand::new(
                                OperandKind::Number,
                                Some(Value::Number(v)),
                                LEAF_RANK,
                                &format!("{v:?}"),
                            )
                        }
                    };
                    stack.push(res);
                }
                _ => {
                    return Err(FormulaError::UnsupportedToken { op, name: oname });
                }
            }
            if sz <= 0 {
                return Err(FormulaError::MalformedSize { pos });
            }
            pos += sz as usize;
            continue;
        }

        // Operand-class tokens.
        match ptg {
            Ptg::Array => {
                stack.push(Operand::unknown());
            }
            Ptg::Func => {
                let funcx = read_funcid(data, pos + 1, biff)?;
                match function_def(funcx) {
                    None => {
                        warn!("tFunc unknown FuncID {funcx}");
                        stack.push(Operand::unknown());
                    }
                    Some(def) => {
                        let nargs = def.min_args as usize;
                        if stack.len() < nargs {
                            warn!("operand stack underflow at pos {pos}");
                            underflow = true;
                            break;
                        }
                        let args: Vec<String> =
                            stack.drain(stack.len() - nargs..).map(|a| a.text).collect();
                        let text = format!("{}({})", def.name, args.join(","));
                        stack.push(Operand::new(OperandKind::Unknown, None, FUNC_RANK, &text));
                    }
                }
            }
            Ptg::FuncVar => {
                let nargs_raw = read_u8(data, pos + 1)?;
                let funcx_val = read_funcid(data, pos + 2, biff)?;
                let nargs = (nargs_raw & 0x7f) as usize;
                match function_def(funcx_val) {
                    None => {
                        warn!("tFuncVar unknown FuncID {funcx_val}");
                        if stack.len() < nargs {
                            warn!("operand stack underflow at pos {pos}");
                            underflow = true;
                            break;
                        }
                        let args: Vec<String> =
                            stack.drain(stack.len() - nargs..).map(|a| a.text).collect();
                        let text = format!("?({})", args.join(","));
                        stack.push(Operand::new(OperandKind::Unknown, None, FUNC_RANK, &text));
                    }
                    Some(def) => {
                        if !(def.min_args as usize <= nargs && nargs <= def.max_args as usize) {
                            warn!(
                                "{} called with {nargs} args, expected {}~{}",
                                def.name, def.min_args, def.max_args
                            );
                        }
                        if stack.len() < nargs {
                            warn!("operand stack underflow at pos {pos}");
                            underflow = true;
                            break;
                        }
                        let argtext: Vec<&str> = stack[stack.len() - nargs..]
                            .iter()
                            .map(|a| a.text.as_str())
                            .collect();
                        let text = format!("{}({})", def.name, argtext.join(","));
                        let mut res = Operand::new(OperandKind::Unknown, None, FUNC_RANK, &text);

                        if funcx_val == FUNCX_IF && nargs >= 1 {
                            let testarg = &stack[stack.len() - nargs];
                            match truth_value(testarg) {
                                None => {
                                    if !matches!(
                                        testarg.kind,
                                        OperandKind::Number | OperandKind::Bool
                                    ) && testarg.kind != OperandKind::Unknown
                                    {
                                        debug!("IF condition of kind {:?}", testarg.kind);
                                    }
                                }
                                Some(v) => {
                                    if nargs == 2 && v == 0 {
                                        // IF(FALSE, tv) => FALSE
                                        res.kind = OperandKind::Bool;
                                        res.value = Some(Value::Bool(false));
                                    } else {
                                        let offset = (2 - v) as usize;
                                        if offset < nargs {
                                            let chosen = &stack[stack.len() - nargs + offset];
                                            if chosen.kind == OperandKind::Missing {
                                                res.kind = OperandKind::Number;
                                                res.value = Some(Value::Number(0.0));
                                            } else {
                                                res.kind = chosen.kind;
                                                res.value = chosen.value.clone();
                                            }
                                        }
                                    }
                                    tok_trace!("IF folded to a constant");
                                }
                            }
                        } else if funcx_val == FUNCX_CHOOSE && nargs >= 1 {
                            let testarg = &stack[stack.len() - nargs];
                            if let Some(Value::Number(n)) = &testarg.value {
                                if testarg.kind == OperandKind::Number
                                    && *n >= 1.0
                                    && (*n as usize) < nargs
                                {
                                    let chosen = &stack[stack.len() - nargs + *n as usize];
                                    if chosen.kind == OperandKind::Missing {
                                        res.kind = OperandKind::Number;
                                        res.value = Some(Value::Number(0.0));
                                    } else {
                                        res.kind = chosen.kind;
                                        res.value = chosen.value.clone();
                                    }
                                }
                            }
                        }
                        stack.truncate(stack.len() - nargs);
                        stack.push(res);
                    }
                }
            }
            Ptg::Name => {
                let tgtnamex = read_u16(data, pos + 1)? as i32 - 1;
                let res = match usize::try_from(tgtnamex).ok().filter(|i| *i < names.len()) {
                    None => {
                        warn!("tName target {tgtnamex} out of range");
                        any_err = true;
                        Operand::unknown()
                    }
                    Some(tgt) => {
                        if !names[tgt].evaluated {
                            evaluate_at_level(ctx, names, tgt, biff, level + 1)?;
                        }
                        let tgtobj = &names[tgt];
                        let mut res = if tgtobj.is_macro || tgtobj.is_binary || tgtobj.any_err {
                            any_err = true;
                            any_rel |= tgtobj.any_rel;
                            Operand::unknown()
                        } else {
                            match &tgtobj.result {
                                Some(result) => result.clone(),
                                None => {
                                    any_err = true;
                                    Operand::unknown()
                                }
                            }
                        };
                        res.rank = LEAF_RANK;
                        res.text = name_display_text(ctx, tgtobj);
                        res
                    }
                };
                stack.push(res);
            }
            Ptg::Ref => {
                let addr = get_cell_addr(data, pos + 1, biff, reldelta, None)?;
                // Relative to the (unknowable) current sheet.
                any_rel = true;
                let res = if tc.optype == 1 {
                    let rr = addr.row_rel as u8;
                    let cr = addr.col_rel as u8;
                    let ref3d = Ref3D {
                        coords: [0, 1, addr.row, addr.row + 1, addr.col, addr.col + 1],
                        relflags: [1, 1, rr, rr, cr, cr],
                    };
                    Operand::new(
                        OperandKind::RelRef,
                        Some(Value::Refs(vec![ref3d])),
                        0,
                        "?",
                    )
                } else {
                    Operand::unknown()
                };
                stack.push(res);
            }
            Ptg::Area => {
                let (a1, a2) = get_cell_range_addr(data, pos + 1, biff, reldelta, None)?;
                any_rel = true;
                let res = if tc.optype == 1 {
                    let ref3d = Ref3D {
                        coords: [0, 1, a1.row, a2.row + 1, a1.col, a2.col + 1],
                        relflags: [
                            1,
                            1,
                            a1.row_rel as u8,
                            a2.row_rel as u8,
                            a1.col_rel as u8,
                            a2.col_rel as u8,
                        ],
                    };
                    Operand::new(
                        OperandKind::RelRef,
                        Some(Value::Refs(vec![ref3d])),
                        0,
                        "?",
                    )
                } else {
                    Operand::unknown()
                };
                stack.push(res);
            }
            Ptg::MemArea | Ptg::RefN | Ptg::AreaN => {
                warn!("t{oname} token in a defined-name formula");
                any_err = true;
                if ptg != Ptg::MemArea {
                    stack.push(Operand::unknown());
                }
            }
            Ptg::MemFunc => {
                let nb = read_u16(data, pos + 1)?;
                tok_trace!("  {nb} bytes of cell ref subexpression");
            }
            Ptg::Ref3d => {
                let (span, coord_pos) = resolve_ref3d_span(ctx, data, pos, biff)?;
                let (shx1, shx2) = span;
                let addr = get_cell_addr(data, coord_pos, biff, reldelta, None)?;
                let is_rel = addr.row_rel || addr.col_rel;
                any_rel |= is_rel;
                any_err |= shx1 < XSH_ANY_SHEET;
                let coords = [shx1, shx2 + 1, addr.row, addr.row + 1, addr.col, addr.col + 1];
                let (kind, ref3d) = if is_rel {
                    let rr = addr.row_rel as u8;
                    let cr = addr.col_rel as u8;
                    (
                        OperandKind::RelRef,
                        Ref3D {
                            coords,
                            relflags: [0, 0, rr, rr, cr, cr],
                        },
                    )
                } else {
                    (OperandKind::AbsRef, Ref3D::absolute(coords))
                };
                let text = if is_rel {
                    rangename3drel(ctx, &ref3d, None, None, r1c1)
                } else {
                    rangename3d(ctx, &ref3d)
                };
                let value = (tc.optype == 1).then(|| Value::Refs(vec![ref3d]));
                stack.push(Operand::new(kind, value, LEAF_RANK, &text));
            }
            Ptg::Area3d => {
                let (span, coord_pos) = resolve_ref3d_span(ctx, data, pos, biff)?;
                let (shx1, shx2) = span;
                let (a1, a2) = get_cell_range_addr(data, coord_pos, biff, reldelta, None)?;
                let is_rel = a1.row_rel || a1.col_rel || a2.row_rel || a2.col_rel;
                any_rel |= is_rel;
                any_err |= shx1 < XSH_ANY_SHEET;
                let coords = [shx1, shx2 + 1, a1.row, a2.row + 1, a1.col, a2.col + 1];
                let (kind, ref3d) = if is_rel {
                    (
                        OperandKind::RelRef,
                        Ref3D {
                            coords,
                            relflags: [
                                0,
                                0,
                                a1.row_rel as u8,
                                a2.row_rel as u8,
                                a1.col_rel as u8,
                                a2.col_rel as u8,
                            ],
                        },
                    )
                } else {
                    (OperandKind::AbsRef, Ref3D::absolute(coords))
                };
                let text = if is_rel {
                    rangename3drel(ctx, &ref3d, None, None, r1c1)
                } else {
                    rangename3d(ctx, &ref3d)
                };
                let value = (tc.optype == 1).then(|| Value::Refs(vec![ref3d]));
                stack.push(Operand::new(kind, value, LEAF_RANK, &text));
            }
            Ptg::NameX => {
                let header = read_namex_header(data, pos, biff)?;
                let mut dodgy = header.dodgy;
                if header.tgtnamex == namex as i32 {
                    warn!("self-referential tNameX in name #{namex}");
                    dodgy = true;
                    any_err = true;
                }
                let (shx1, _shx2) = if dodgy {
                    (crate::context::XSH_BAD_SHEET, crate::context::XSH_BAD_SHEET)
                } else {
                    resolve_namex_span(ctx, &header, biff)
                };
                if shx1 == XSH_EXTERNAL || shx1 == XSH_ADDIN {
                    any_external = true;
                }
                let res = if dodgy || shx1 < XSH_ANY_SHEET {
                    Operand::new(
                        OperandKind::Unknown,
                        None,
                        LEAF_RANK,
                        &unresolved_name_text(header.tgtnamex, header.origrefx),
                    )
                } else {
                    match usize::try_from(header.tgtnamex)
                        .ok()
                        .filter(|i| *i < names.len())
                    {
                        None => {
                            warn!("tNameX target {} out of range", header.tgtnamex);
                            any_err = true;
                            Operand::unknown()
                        }
                        Some(tgt) => {
                            if !names[tgt].evaluated {
                                evaluate_at_level(ctx, names, tgt, biff, level + 1)?;
                            }
                            let tgtobj = &names[tgt];
                            let mut res =
                                if tgtobj.is_macro || tgtobj.is_binary || tgtobj.any_err {
                                    any_err = true;
                                    any_rel |= tgtobj.any_rel;
                                    Operand::unknown()
                                } else {
                                    match &tgtobj.result {
                                        Some(result) => result.clone(),
                                        None => {
                                            any_err = true;
                                            Operand::unknown()
                                        }
                                    }
                                };
                            res.rank = LEAF_RANK;
                            res.text = name_display_text(ctx, tgtobj);
                            res
                        }
                    }
                };
                stack.push(res);
            }
            _ if token::is_error_opx(tc.opx) => {
                any_err = true;
                stack.push(Operand::error());
            }
            _ => {
                warn!("token t{oname} not handled");
                any_err = true;
            }
        }
        if sz <= 0 {
            return Err(FormulaError::MalformedSize { pos });
        }
        pos += sz as usize;
    }

    if underflow {
        any_err = true;
        stack.clear();
    }
    tok_trace!(
        "end of name #{namex}: level={level} any_rel={any_rel} any_err={any_err} stack depth={}",
        stack.len()
    );
    if stack.len() > 1 {
        warn!("name formula stack has unprocessed operands");
    }

    let nobj = &mut names[namex];
    nobj.result = if stack.len() == 1 { stack.pop() } else { None };
    nobj.any_rel = any_rel;
    nobj.any_err = any_err;
    nobj.any_external = any_external;
    nobj.evaluated = true;
    Ok(())
}
