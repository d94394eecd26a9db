//! Reconstruction of formula text from an `rgce` token stream.
//!
//! The walk is a single pass: operand tokens push rendered fragments,
//! operator tokens pop and combine them. Precedence ranks on each
//! fragment decide parenthesization, so `1+2` under `*` re-wraps as
//! `(1+2)*3` while `3+1+2` stays bare.
//!
//! Decoding is best-effort. Unknown function ids, unresolvable sheet
//! spans, and context violations degrade the affected operand and are
//! logged; only structurally fatal conditions (a token the generation
//! does not define, a truncated stream) surface as errors. A walk that
//! ends without exactly one operand on the stack yields `None`.

use log::{debug, warn};

use crate::addr::{get_cell_addr, get_cell_range_addr};
use crate::context::{BookContext, NameObject, XSH_ADDIN, XSH_ANY_SHEET};
use crate::ftab::{function_def, FUNC_USER_DEFINED};
use crate::operand::{
    infix_text, Operand, OperandKind, Ref3D, FUNC_RANK, LEAF_RANK, RANK_REF_OP,
};
use crate::refname::{cellnamerel, rangename2drel, rangename3d, rangename3drel};
use crate::strings;
use crate::token::{self, Ptg, ATTR_CHOOSE, ATTR_SUM};
use crate::{BiffVersion, FmlaType, FormulaError};

pub(crate) fn read_u16(data: &[u8], pos: usize) -> Result<u16, FormulaError> {
    let raw = data
        .get(pos..pos + 2)
        .ok_or(FormulaError::MalformedSize { pos })?;
    Ok(u16::from_le_bytes([raw[0], raw[1]]))
}

fn read_i16(data: &[u8], pos: usize) -> Result<i16, FormulaError> {
    Ok(read_u16(data, pos)? as i16)
}

pub(crate) fn read_u8(data: &[u8], pos: usize) -> Result<u8, FormulaError> {
    data.get(pos)
        .copied()
        .ok_or(FormulaError::MalformedSize { pos })
}

pub(crate) fn read_f64(data: &[u8], pos: usize) -> Result<f64, FormulaError> {
    let raw = data
        .get(pos..pos + 8)
        .ok_or(FormulaError::MalformedSize { pos })?;
    let mut b = [0u8; 8];
    b.copy_from_slice(raw);
    Ok(f64::from_le_bytes(b))
}

/// `tFunc`/`tFuncVar` function-id width grew to two bytes in BIFF4.
fn funcid_width(biff: BiffVersion) -> usize {
    if biff >= BiffVersion::Biff4 {
        2
    } else {
        1
    }
}

pub(crate) fn read_funcid(data: &[u8], pos: usize, biff: BiffVersion) -> Result<u16, FormulaError> {
    if funcid_width(biff) == 2 {
        read_u16(data, pos)
    } else {
        Ok(read_u8(data, pos)? as u16)
    }
}

/// Scope-qualified display text for a defined name.
pub(crate) fn name_display_text(ctx: &dyn BookContext, nobj: &NameObject) -> String {
    if nobj.scope == -1 {
        return nobj.name.clone();
    }
    match ctx.sheet_names().get(nobj.scope as usize) {
        Some(sheet) => format!("{}!{}", sheet, nobj.name),
        None => {
            warn!("name {:?} scoped to missing sheet {}", nobj.name, nobj.scope);
            nobj.name.clone()
        }
    }
}

/// Decode the in-token externsheet material of a 3-D reference token and
/// resolve it to a local sheet span. Returns the span and the offset of
/// the cell coordinates that follow.
pub(crate) fn resolve_ref3d_span(
    ctx: &dyn BookContext,
    data: &[u8],
    pos: usize,
    biff: BiffVersion,
) -> Result<((i32, i32), usize), FormulaError> {
    if biff >= BiffVersion::Biff8 {
        let refx = read_u16(data, pos + 1)?;
        Ok((ctx.externsheet_span(refx as usize), pos + 3))
    } else {
        let raw_extshtx = read_i16(data, pos + 1)?;
        let raw_shx1 = read_i16(data, pos + 11)?;
        let raw_shx2 = read_i16(data, pos + 13)?;
        let span = ctx.externsheet_span_legacy(
            raw_extshtx as i32,
            raw_shx1 as i32,
            raw_shx2 as i32,
        );
        Ok((span, pos + 15))
    }
}

/// The `tNameX` header: externsheet material plus a 1-based target name
/// index. `dodgy` marks a legacy descriptor that cannot be interpreted.
pub(crate) struct NameXHeader {
    pub origrefx: i32,
    pub refx: i32,
    pub tgtnamex: i32,
    pub dodgy: bool,
}

pub(crate) fn read_namex_header(
    data: &[u8],
    pos: usize,
    biff: BiffVersion,
) -> Result<NameXHeader, FormulaError> {
    if biff >= BiffVersion::Biff8 {
        let refx = read_u16(data, pos + 1)? as i32;
        let tgtnamex = read_u16(data, pos + 3)? as i32 - 1;
        Ok(NameXHeader {
            origrefx: refx,
            refx,
            tgtnamex,
            dodgy: false,
        })
    } else {
        let origrefx = read_i16(data, pos + 1)? as i32;
        let tgtnamex = read_u16(data, pos + 11)? as i32 - 1;
        let (refx, dodgy) = if origrefx > 0 {
            (origrefx - 1, false)
        } else if origrefx < 0 {
            (-origrefx - 1, false)
        } else {
            (0, true)
        };
        Ok(NameXHeader {
            origrefx,
            refx,
            tgtnamex,
            dodgy,
        })
    }
}

pub(crate) fn resolve_namex_span(
    ctx: &dyn BookContext,
    header: &NameXHeader,
    biff: BiffVersion,
) -> (i32, i32) {
    use crate::context::{XSH_BAD_SHEET, XSH_EXTERNAL};
    if biff >= BiffVersion::Biff8 {
        return ctx.externsheet_span(header.refx as usize);
    }
    if header.origrefx > 0 {
        return (XSH_EXTERNAL, XSH_EXTERNAL);
    }
    match ctx.legacy_externsheet_kind(header.refx as usize) {
        // Kind 4: a non-specific sheet in this workbook.
        Some(4) => (XSH_ANY_SHEET, XSH_ANY_SHEET),
        _ => (XSH_BAD_SHEET, XSH_BAD_SHEET),
    }
}

pub(crate) fn unresolved_name_text(tgtnamex: i32, origrefx: i32) -> String {
    format!("<<Name #{tgtnamex} in external(?) file #{origrefx}>>")
}

/// Quote a string literal the way formula text does.
pub(crate) fn quote_string_literal(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Decompile one `rgce` token stream into formula text.
///
/// `names` is the workbook's defined-name list in NAME-record order, for
/// `tName`/`tNameX` display. `base` anchors relative references of
/// ordinary cell and array formulas; formula types without a base cell
/// render relative components in R1C1 style regardless of `r1c1`.
///
/// Returns `Ok(None)` when the stream is undecodable (the walk did not
/// end with exactly one operand).
pub fn decompile_formula(
    ctx: &dyn BookContext,
    names: &[NameObject],
    data: &[u8],
    biff: BiffVersion,
    fmlatype: FmlaType,
    base: Option<(i32, i32)>,
    r1c1: bool,
) -> Result<Option<String>, FormulaError> {
    let reldelta = matches!(
        fmlatype,
        FmlaType::Shared | FmlaType::Name | FmlaType::CondFmt | FmlaType::DataVal
    );
    let browx = base.map(|b| b.0);
    let bcolx = base.map(|b| b.1);
    let sztab = token::size_table(biff);
    let fmlalen = data.len();
    let mut pos = 0usize;
    let mut stack: Vec<Operand> = Vec::new();
    let mut any_rel = false;
    let mut any_err = false;

    macro_rules! pop1 {
        () => {
            match stack.pop() {
                Some(op) => op,
                None => {
                    warn!("operand stack underflow at pos {pos}");
                    return Ok(None);
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
                    return Ok(None);
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
        debug!("pos:{pos} op:0x{op:02x} name:t{oname} sz:{sz} optype:{}", tc.optype);
        if sz == -2 {
            return Err(FormulaError::UnsupportedToken { op, name: oname });
        }
        if token::token_not_allowed(tc.opx) & (fmlatype as u8) != 0 {
            warn!(
                "token 0x{op:02x} (t{oname}) not expected in {} formula",
                fmlatype.describe()
            );
        }
        let ptg = match tc.ptg {
            Some(ptg) => ptg,
            None => return Err(FormulaError::UnsupportedToken { op, name: oname }),
        };

        if tc.optype == 0 {
            match ptg {
                Ptg::Exp => {
                    if pos != 0 || !stack.is_empty() {
                        warn!("tExp token not alone in its stream");
                    }
                    let (rowx, colx) = if biff >= BiffVersion::Biff3 {
                        (read_u16(data, pos + 1)? as i32, read_u16(data, pos + 3)? as i32)
                    } else {
                        (read_u16(data, pos + 1)? as i32, read_u8(data, pos + 3)? as i32)
                    };
                    let text = format!("SHARED FMLA at rowx={rowx} colx={colx}");
                    stack.push(Operand::new(OperandKind::Unknown, None, LEAF_RANK, &text));
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
                    let rule = crate::operand::binop_rule(ptg)
                        .unwrap_or_else(|| unreachable!());
                    let (aop, bop) = pop2!();
                    let text = infix_text(&aop, &bop, rule.rank, rule.sym);
                    stack.push(Operand::new(rule.result_kind, None, rule.rank, &text));
                }
                Ptg::Isect => {
                    let (aop, bop) = pop2!();
                    let text = infix_text(&aop, &bop, RANK_REF_OP, " ");
                    let kind = if aop.kind == OperandKind::Error || bop.kind == OperandKind::Error {
                        OperandKind::Error
                    } else if aop.kind == OperandKind::Unknown || bop.kind == OperandKind::Unknown {
                        // Undefined labels land here: their NAME records
                        // have empty formulas and evaluate to Unknown.
                        OperandKind::Unknown
                    } else if aop.kind == OperandKind::RelRef && bop.kind == OperandKind::RelRef {
                        OperandKind::RelRef
                    } else {
                        OperandKind::AbsRef
                    };
                    stack.push(Operand::new(kind, None, RANK_REF_OP, &text));
                }
                Ptg::List => {
                    let (aop, bop) = pop2!();
                    let text = infix_text(&aop, &bop, RANK_REF_OP, ",");
                    let refkinds = [OperandKind::AbsRef, OperandKind::RelRef];
                    let kind = if aop.kind == OperandKind::Error || bop.kind == OperandKind::Error {
                        OperandKind::Error
                    } else if refkinds.contains(&aop.kind) && refkinds.contains(&bop.kind) {
                        if aop.kind == OperandKind::RelRef || bop.kind == OperandKind::RelRef {
                            OperandKind::RelRef
                        } else {
                            OperandKind::AbsRef
                        }
                    } else {
                        OperandKind::AbsRef
                    };
                    stack.push(Operand::new(kind, None, RANK_REF_OP, &text));
                }
                Ptg::Range => {
                    let (aop, bop) = pop2!();
                    let text = infix_text(&aop, &bop, RANK_REF_OP, ":");
                    let kind = if aop.kind == OperandKind::Error || bop.kind == OperandKind::Error {
                        OperandKind::Error
                    } else {
                        OperandKind::AbsRef
                    };
                    stack.push(Operand::new(kind, None, RANK_REF_OP, &text));
                }
                Ptg::Uplus | Ptg::Uminus | Ptg::Percent => {
                    let rule = crate::operand::unop_rule(ptg)
                        .unwrap_or_else(|| unreachable!());
                    let aop = pop1!();
                    let mut text = String::from(rule.prefix);
                    crate::operand::push_wrapped(&mut text, &aop, rule.rank);
                    text.push_str(rule.suffix);
                    stack.push(Operand::new(OperandKind::Number, None, rule.rank, &text));
                }
                Ptg::Paren => {
                    // Source cosmetics only.
                }
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
                    stack.push(Operand::new(OperandKind::Text, None, LEAF_RANK, &text));
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
                    debug!(
                        "   subop=0x{subop:02x} name=t{} sz={sz} nc=0x{nc:02x}",
                        token::attr_subop_name(subop)
                    );
                }
                Ptg::Err | Ptg::Bool | Ptg::Int | Ptg::Num => {
                    let (kind, text) = match ptg {
                        Ptg::Err => {
                            let code = read_u8(data, pos + 1)?;
                            (
                                OperandKind::Error,
                                quote_string_literal(token::error_text_from_code(code)),
                            )
                        }
                        Ptg::Bool => {
                            let v = read_u8(data, pos + 1)?;
                            (
                                OperandKind::Bool,
                                if v != 0 { "TRUE" } else { "FALSE" }.to_string(),
                            )
                        }
                        Ptg::Int => {
                            let v = read_u16(data, pos + 1)? as f64;
                            (OperandKind::Number, format!("{v:?}"))
                        }
                        _ => {
                            let v = read_f64(data, pos + 1)?;
                            (OperandKind::Number, format!("{v:?}"))
                        }
                    };
                    stack.push(Operand::new(kind, None, LEAF_RANK, &text));
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
                            return Ok(None);
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
                let mut nargs = (nargs_raw & 0x7f) as usize;
                let prompt = nargs_raw >> 7;
                let macro_bit = funcx_val >> 15;
                debug!(
                    "   FuncID={} nargs={nargs} macro={macro_bit} prompt={prompt}",
                    funcx_val & 0x7fff
                );
                let callee;
                let attrs = if funcx_val & 0x7fff == FUNC_USER_DEFINED {
                    // Add-in call: the target's name was pushed first.
                    match stack.pop() {
                        Some(target) => {
                            nargs = nargs.saturating_sub(1);
                            callee = target.text;
                            Some((callee.as_str(), nargs as u8, nargs as u8))
                        }
                        None => Some(("CALL_ADDIN", 1, 30)),
                    }
                } else {
                    function_def(funcx_val).map(|def| (def.name, def.min_args, def.max_args))
                };
                match attrs {
                    None => {
                        warn!("tFuncVar unknown FuncID {funcx_val}");
                        if stack.len() < nargs {
                            warn!("operand stack underflow at pos {pos}");
                            return Ok(None);
                        }
                        let args: Vec<String> =
                            stack.drain(stack.len() - nargs..).map(|a| a.text).collect();
                        let text = format!("?({})", args.join(","));
                        stack.push(Operand::new(OperandKind::Unknown, None, FUNC_RANK, &text));
                    }
                    Some((name, minargs, maxargs)) => {
                        if !(minargs as usize <= nargs && nargs <= maxargs as usize) {
                            warn!(
                                "{name} called with {nargs} args, expected {minargs}~{maxargs}"
                            );
                        }
                        if stack.len() < nargs {
                            warn!("operand stack underflow at pos {pos}");
                            return Ok(None);
                        }
                        let args: Vec<String> =
                            stack.drain(stack.len() - nargs..).map(|a| a.text).collect();
                        let text = format!("{}({})", name, args.join(","));
                        stack.push(Operand::new(OperandKind::Unknown, None, FUNC_RANK, &text));
                    }
                }
            }
            Ptg::Name => {
                let tgtnamex = read_u16(data, pos + 1)? as i32 - 1;
                let text = match usize::try_from(tgtnamex).ok().and_then(|i| names.get(i)) {
                    Some(nobj) => name_display_text(ctx, nobj),
                    None => {
                        warn!("tName target {tgtnamex} out of range");
                        "?".to_string()
                    }
                };
                stack.push(Operand::new(OperandKind::Unknown, None, LEAF_RANK, &text));
            }
            Ptg::Ref | Ptg::RefN => {
                let addr = get_cell_addr(data, pos + 1, biff, reldelta, base)?;
                let is_rel = addr.row_rel || addr.col_rel;
                any_rel |= is_rel;
                let kind = if is_rel {
                    OperandKind::RelRef
                } else {
                    OperandKind::AbsRef
                };
                let text = cellnamerel(
                    addr.row, addr.col, addr.row_rel, addr.col_rel, browx, bcolx, r1c1,
                );
                stack.push(Operand::new(kind, None, LEAF_RANK, &text));
            }
            Ptg::Area | Ptg::AreaN => {
                let (a1, a2) = get_cell_range_addr(data, pos + 1, biff, reldelta, base)?;
                let is_rel = a1.row_rel || a1.col_rel || a2.row_rel || a2.col_rel;
                any_rel |= is_rel;
                let kind = if is_rel {
                    OperandKind::RelRef
                } else {
                    OperandKind::AbsRef
                };
                let text = rangename2drel(
                    (a1.row, a2.row + 1, a1.col, a2.col + 1),
                    (a1.row_rel, a2.row_rel, a1.col_rel, a2.col_rel),
                    browx,
                    bcolx,
                    r1c1,
                );
                stack.push(Operand::new(kind, None, LEAF_RANK, &text));
            }
            Ptg::MemArea => {
                // Trailing rgb data only; no stack effect.
            }
            Ptg::MemFunc => {
                let nb = read_u16(data, pos + 1)?;
                debug!("  {nb} bytes of cell ref subexpression");
            }
            Ptg::Ref3d => {
                let (span, coord_pos) = resolve_ref3d_span(ctx, data, pos, biff)?;
                let (shx1, shx2) = span;
                let addr = get_cell_addr(data, coord_pos, biff, reldelta, base)?;
                let is_rel = addr.row_rel || addr.col_rel;
                any_rel |= is_rel;
                any_err |= shx1 < XSH_ANY_SHEET;
                let coords = [shx1, shx2 + 1, addr.row, addr.row + 1, addr.col, addr.col + 1];
                let res = if is_rel {
                    let rr = addr.row_rel as u8;
                    let cr = addr.col_rel as u8;
                    let ref3d = Ref3D {
                        coords,
                        relflags: [0, 0, rr, rr, cr, cr],
                    };
                    let text = rangename3drel(ctx, &ref3d, browx, bcolx, r1c1);
                    Operand::new(OperandKind::RelRef, None, LEAF_RANK, &text)
                } else {
                    let ref3d = Ref3D::absolute(coords);
                    let text = rangename3d(ctx, &ref3d);
                    Operand::new(OperandKind::AbsRef, None, LEAF_RANK, &text)
                };
                stack.push(res);
            }
            Ptg::Area3d => {
                let (span, coord_pos) = resolve_ref3d_span(ctx, data, pos, biff)?;
                let (shx1, shx2) = span;
                let (a1, a2) = get_cell_range_addr(data, coord_pos, biff, reldelta, base)?;
                let is_rel = a1.row_rel || a1.col_rel || a2.row_rel || a2.col_rel;
                any_rel |= is_rel;
                any_err |= shx1 < XSH_ANY_SHEET;
                let coords = [shx1, shx2 + 1, a1.row, a2.row + 1, a1.col, a2.col + 1];
                let res = if is_rel {
                    let ref3d = Ref3D {
                        coords,
                        relflags: [
                            0,
                            0,
                            a1.row_rel as u8,
                            a2.row_rel as u8,
                            a1.col_rel as u8,
                            a2.col_rel as u8,
                        ],
                    };
                    let text = rangename3drel(ctx, &ref3d, browx, bcolx, r1c1);
                    Operand::new(OperandKind::RelRef, None, LEAF_RANK, &text)
                } else {
                    let ref3d = Ref3D::absolute(coords);
                    let text = rangename3d(ctx, &ref3d);
                    Operand::new(OperandKind::AbsRef, None, LEAF_RANK, &text)
                };
                stack.push(res);
            }
            Ptg::NameX => {
                let header = read_namex_header(data, pos, biff)?;
                debug!(
                    "   origrefx={} refx={} tgtnamex={} dodgy={}",
                    header.origrefx, header.refx, header.tgtnamex, header.dodgy
                );
                let (shx1, _shx2) = if header.dodgy {
                    (crate::context::XSH_BAD_SHEET, crate::context::XSH_BAD_SHEET)
                } else {
                    resolve_namex_span(ctx, &header, biff)
                };
                let res = if shx1 == XSH_ADDIN {
                    let name = usize::try_from(header.tgtnamex)
                        .ok()
                        .and_then(|i| ctx.addin_function_name(i));
                    match name {
                        Some(name) => Operand::new(
                            OperandKind::Text,
                            Some(crate::operand::Value::Text(name.to_string())),
                            LEAF_RANK,
                            &quote_string_literal(name),
                        ),
                        None => Operand::new(
                            OperandKind::Unknown,
                            None,
                            LEAF_RANK,
                            &unresolved_name_text(header.tgtnamex, header.origrefx),
                        ),
                    }
                } else if header.dodgy || shx1 < XSH_ANY_SHEET {
                    Operand::new(
                        OperandKind::Unknown,
                        None,
                        LEAF_RANK,
                        &unresolved_name_text(header.tgtnamex, header.origrefx),
                    )
                } else {
                    let text = match usize::try_from(header.tgtnamex)
                        .ok()
                        .and_then(|i| names.get(i))
                    {
                        Some(nobj) => name_display_text(ctx, nobj),
                        None => {
                            warn!("tNameX target {} out of range", header.tgtnamex);
                            "?".to_string()
                        }
                    };
                    Operand::new(OperandKind::Unknown, None, LEAF_RANK, &text)
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

    debug!(
        "end of formula: any_rel={any_rel} any_err={any_err} stack depth={}",
        stack.len()
    );
    if stack.len() != 1 {
        if stack.len() > 1 {
            warn!("formula stack has unprocessed operands");
        }
        return Ok(None);
    }
    Ok(stack.pop().map(|op| op.text))
}
