//! Text reconstruction from BIFF8 token streams.

use biff_formula::{decompile_formula, BiffVersion, FmlaType, FormulaError, RefTable};
use pretty_assertions::assert_eq;

fn ctx() -> RefTable {
    RefTable::with_sheet_names(vec!["Sheet1".to_string(), "Sheet2".to_string()])
}

/// Decompile as an ordinary cell formula anchored at A1.
fn decompile(data: &[u8]) -> Option<String> {
    decompile_formula(
        &ctx(),
        &[],
        data,
        BiffVersion::Biff8,
        FmlaType::Cell,
        Some((0, 0)),
        false,
    )
    .unwrap()
}

fn t_int(v: u16) -> Vec<u8> {
    let mut b = vec![0x1e];
    b.extend_from_slice(&v.to_le_bytes());
    b
}

fn t_num(v: f64) -> Vec<u8> {
    let mut b = vec![0x1f];
    b.extend_from_slice(&v.to_le_bytes());
    b
}

fn t_str(s: &str) -> Vec<u8> {
    let mut b = vec![0x17, s.len() as u8, 0x00];
    b.extend_from_slice(s.as_bytes());
    b
}

fn t_func(funcx: u16) -> Vec<u8> {
    let mut b = vec![0x41];
    b.extend_from_slice(&funcx.to_le_bytes());
    b
}

fn t_func_var(nargs: u8, funcx: u16) -> Vec<u8> {
    let mut b = vec![0x42, nargs];
    b.extend_from_slice(&funcx.to_le_bytes());
    b
}

fn t_ref(rowval: u16, colval: u16) -> Vec<u8> {
    let mut b = vec![0x44];
    b.extend_from_slice(&rowval.to_le_bytes());
    b.extend_from_slice(&colval.to_le_bytes());
    b
}

fn cat(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

#[test]
fn literals_keep_float_rendering() {
    assert_eq!(decompile(&t_int(7)), Some("7.0".to_string()));
    assert_eq!(decompile(&t_num(3.25)), Some("3.25".to_string()));
    assert_eq!(decompile(&[0x1d, 0x01]), Some("TRUE".to_string()));
    assert_eq!(decompile(&[0x1c, 0x17]), Some("\"#REF!\"".to_string()));
}

#[test]
fn precedence_inserts_parentheses() {
    // 1 2 3 * +  =>  1+2*3, no parens needed.
    let plain = cat(&[&t_int(1), &t_int(2), &t_int(3), &[0x05], &[0x03]]);
    assert_eq!(decompile(&plain), Some("1.0+2.0*3.0".to_string()));

    // 1 2 + 3 *  =>  the sum binds weaker than the product.
    let grouped = cat(&[&t_int(1), &t_int(2), &[0x03], &t_int(3), &[0x05]]);
    assert_eq!(decompile(&grouped), Some("(1.0+2.0)*3.0".to_string()));
}

#[test]
fn unary_operators() {
    assert_eq!(
        decompile(&cat(&[&t_int(50), &[0x14]])),
        Some("50.0%".to_string())
    );
    let negated_sum = cat(&[&t_int(1), &t_int(2), &[0x03], &[0x13]]);
    assert_eq!(decompile(&negated_sum), Some("-(1.0+2.0)".to_string()));
}

#[test]
fn explicit_parens_are_cosmetic() {
    // tParen adds nothing; grouping is recovered from precedence alone.
    let data = cat(&[&t_int(4), &[0x15], &t_int(5), &[0x03]]);
    assert_eq!(decompile(&data), Some("4.0+5.0".to_string()));
}

#[test]
fn string_literals_double_embedded_quotes() {
    assert_eq!(
        decompile(&t_str("ab\"c")),
        Some("\"ab\"\"c\"".to_string())
    );
}

#[test]
fn concat_renders_ampersand() {
    let data = cat(&[&t_str("a"), &t_str("b"), &[0x08]]);
    assert_eq!(decompile(&data), Some("\"a\"&\"b\"".to_string()));
}

#[test]
fn attr_sum_rewrites_without_a_funcvar() {
    let data = cat(&[&t_int(5), &[0x19, 0x10, 0x00, 0x00]]);
    assert_eq!(decompile(&data), Some("SUM(5.0)".to_string()));
}

#[test]
fn attr_if_and_skip_are_transparent() {
    // The optimizer's jump scaffolding around IF must not disturb the
    // operand stack.
    let data = cat(&[
        &[0x1d, 0x01],             // TRUE
        &[0x19, 0x02, 0x07, 0x00], // tAttrIf
        &t_int(10),
        &[0x19, 0x08, 0x03, 0x00], // tAttrSkip
        &t_int(20),
        &[0x19, 0x08, 0x03, 0x00],
        &t_func_var(3, 1),
    ]);
    assert_eq!(decompile(&data), Some("IF(TRUE,10.0,20.0)".to_string()));
}

#[test]
fn attr_choose_jump_table_is_skipped() {
    let data = cat(&[
        &t_int(2),
        &[0x19, 0x04, 0x01, 0x00, 0xaa, 0xbb, 0xcc, 0xdd], // one-case jump table
        &t_int(11),
        &t_int(22),
        &t_func_var(3, 100),
    ]);
    assert_eq!(decompile(&data), Some("CHOOSE(2.0,11.0,22.0)".to_string()));
}

#[test]
fn fixed_and_variable_arity_functions() {
    assert_eq!(decompile(&t_func(19)), Some("PI()".to_string()));
    let data = cat(&[&t_int(1), &t_int(2), &t_func_var(2, 4)]);
    assert_eq!(decompile(&data), Some("SUM(1.0,2.0)".to_string()));
}

#[test]
fn missing_arguments_render_empty() {
    let data = cat(&[&t_int(1), &[0x16], &t_func_var(2, 1)]);
    assert_eq!(decompile(&data), Some("IF(1.0,)".to_string()));
}

#[test]
fn unknown_function_id_renders_placeholder() {
    let data = cat(&[&t_int(1), &t_func_var(1, 0x1234)]);
    assert_eq!(decompile(&data), Some("?(1.0)".to_string()));
}

#[test]
fn user_defined_function_takes_its_name_from_the_stack() {
    // funcx 255: the callee sits on top of the arguments.
    let data = cat(&[&t_int(1), &t_str("MYFUNC"), &t_func_var(2, 255)]);
    assert_eq!(decompile(&data), Some("\"MYFUNC\"(1.0)".to_string()));
}

#[test]
fn cell_references_against_an_anchor() {
    // Absolute: row 2, column 3.
    assert_eq!(decompile(&t_ref(2, 3)), Some("$D$3".to_string()));
    // Fully relative against base A1: same coordinates, no dollars.
    assert_eq!(
        decompile(&t_ref(2, 0x8000 | 0x4000 | 3)),
        Some("D3".to_string())
    );
}

#[test]
fn name_formulas_render_offsets_in_r1c1() {
    // Row offset -2 (stored wrapped), column offset 3, both relative.
    let data = t_ref(65534, 0x8000 | 0x4000 | 3);
    let text = decompile_formula(
        &ctx(),
        &[],
        &data,
        BiffVersion::Biff8,
        FmlaType::Name,
        None,
        false,
    )
    .unwrap();
    assert_eq!(text, Some("R[-2]C[3]".to_string()));
}

#[test]
fn area_references() {
    // Rows 0..=1, cols 0..=1, absolute.
    let mut data = vec![0x45];
    for v in [0u16, 1, 0, 1] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    assert_eq!(decompile(&data), Some("$A$1:$B$2".to_string()));
}

#[test]
fn shared_formula_anchor_renders_a_placeholder() {
    let mut data = vec![0x01];
    data.extend_from_slice(&3u16.to_le_bytes());
    data.extend_from_slice(&2u16.to_le_bytes());
    assert_eq!(
        decompile(&data),
        Some("SHARED FMLA at rowx=3 colx=2".to_string())
    );
}

#[test]
fn empty_stream_yields_unknown() {
    assert_eq!(decompile(&[]), Some("?".to_string()));
}

#[test]
fn leftover_operands_yield_none() {
    let data = cat(&[&t_int(1), &t_int(2)]);
    assert_eq!(decompile(&data), None);
}

#[test]
fn operand_underflow_yields_none() {
    assert_eq!(decompile(&[0x03]), None);
}

#[test]
fn token_unknown_to_the_generation_is_fatal() {
    // tRef3d does not exist before BIFF5.
    let data = [0x5a, 0, 0, 0, 0, 0, 0];
    let err = decompile_formula(
        &ctx(),
        &[],
        &data,
        BiffVersion::Biff3,
        FmlaType::Cell,
        Some((0, 0)),
        false,
    );
    assert!(matches!(
        err,
        Err(FormulaError::UnsupportedToken { op: 0x5a, .. })
    ));
}

#[test]
fn deleted_reference_tokens_render_unknown() {
    // tRefErr3d pushes an error operand.
    let mut data = vec![0x5c];
    data.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    assert_eq!(decompile(&data), Some("?".to_string()));
}
