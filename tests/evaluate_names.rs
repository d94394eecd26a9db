//! Constant folding of defined-name formulas.

use std::cell::Cell;

use biff_formula::{
    evaluate_name_formula, BiffVersion, BookContext, ExternSheetEntry, FormulaError, NameObject,
    OperandKind, RefTable, Value,
};
use pretty_assertions::assert_eq;

fn ctx() -> RefTable {
    RefTable::with_sheet_names(vec!["Sheet1".to_string()])
}

/// Evaluate a single stand-alone name and return it.
fn eval_one(rgce: Vec<u8>) -> NameObject {
    let mut names = vec![NameObject::new("N0", -1, rgce)];
    evaluate_name_formula(&ctx(), &mut names, 0, BiffVersion::Biff8).unwrap();
    names.remove(0)
}

fn value_of(nobj: &NameObject) -> Option<Value> {
    nobj.result.as_ref().and_then(|op| op.value.clone())
}

fn t_int(v: u16) -> Vec<u8> {
    let mut b = vec![0x1e];
    b.extend_from_slice(&v.to_le_bytes());
    b
}

fn t_str(s: &str) -> Vec<u8> {
    let mut b = vec![0x17, s.len() as u8, 0x00];
    b.extend_from_slice(s.as_bytes());
    b
}

fn t_func_var(nargs: u8, funcx: u16) -> Vec<u8> {
    let mut b = vec![0x42, nargs];
    b.extend_from_slice(&funcx.to_le_bytes());
    b
}

/// 1-based tName token.
fn t_name(namex: u16) -> Vec<u8> {
    let mut b = vec![0x43];
    b.extend_from_slice(&namex.to_le_bytes());
    b.extend_from_slice(&[0, 0]);
    b
}

fn cat(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

#[test]
fn arithmetic_folds() {
    let nobj = eval_one(cat(&[&t_int(2), &t_int(3), &[0x05]]));
    assert_eq!(value_of(&nobj), Some(Value::Number(6.0)));
    let res = nobj.result.unwrap();
    assert_eq!(res.kind, OperandKind::Number);
    assert_eq!(res.text, "2.0*3.0");
}

#[test]
fn text_parses_as_number_for_arithmetic() {
    let nobj = eval_one(cat(&[&t_str("10"), &t_int(5), &[0x03]]));
    assert_eq!(value_of(&nobj), Some(Value::Number(15.0)));
    assert_eq!(nobj.result.unwrap().text, "\"10\"+5.0");
}

#[test]
fn unparseable_text_blocks_arithmetic() {
    let nobj = eval_one(cat(&[&t_str("ten"), &t_int(5), &[0x03]]));
    assert_eq!(value_of(&nobj), None);
    assert_eq!(nobj.result.unwrap().kind, OperandKind::Number);
}

#[test]
fn concat_renders_numbers_without_decimal_suffix() {
    let nobj = eval_one(cat(&[&t_int(7), &t_str("x"), &[0x08]]));
    assert_eq!(value_of(&nobj), Some(Value::Text("7x".to_string())));
    assert_eq!(nobj.result.unwrap().text, "7.0&\"x\"");
}

#[test]
fn comparison_sorts_text_after_every_number() {
    // "1" > 9 is TRUE: no coercion happens in comparisons.
    let nobj = eval_one(cat(&[&t_str("1"), &t_int(9), &[0x0d]]));
    assert_eq!(value_of(&nobj), Some(Value::Bool(true)));
}

#[test]
fn booleans_do_not_coerce_for_arithmetic() {
    let nobj = eval_one(cat(&[&[0x1d, 0x01], &t_int(1), &[0x03]]));
    assert_eq!(value_of(&nobj), None);
}

#[test]
fn error_literals_block_folding() {
    let nobj = eval_one(cat(&[&[0x1c, 0x07], &t_int(1), &[0x03]]));
    assert_eq!(value_of(&nobj), None);
    assert_eq!(nobj.result.unwrap().text, "\"#DIV/0!\"+1.0");
}

#[test]
fn unary_operators_fold() {
    assert_eq!(
        value_of(&eval_one(cat(&[&t_int(4), &[0x13]]))),
        Some(Value::Number(-4.0))
    );
    assert_eq!(
        value_of(&eval_one(cat(&[&t_int(50), &[0x14]]))),
        Some(Value::Number(0.5))
    );
}

#[test]
fn if_folds_on_a_known_condition() {
    let pick = |cond: u8| {
        eval_one(cat(&[
            &[0x1d, cond],
            &t_int(10),
            &t_int(20),
            &t_func_var(3, 1),
        ]))
    };
    assert_eq!(value_of(&pick(1)), Some(Value::Number(10.0)));
    assert_eq!(value_of(&pick(0)), Some(Value::Number(20.0)));
}

#[test]
fn if_does_not_fold_on_an_unknown_condition() {
    // The condition is a name reference that cannot resolve, so neither
    // branch may be chosen.
    let nobj = eval_one(cat(&[
        &t_name(40),
        &t_int(10),
        &t_int(20),
        &t_func_var(3, 1),
    ]));
    let res = nobj.result.unwrap();
    assert_eq!(res.kind, OperandKind::Unknown);
    assert_eq!(res.value, None);
}

#[test]
fn two_argument_if_falls_back_to_false() {
    let nobj = eval_one(cat(&[&[0x1d, 0x00], &t_int(10), &t_func_var(2, 1)]));
    assert_eq!(value_of(&nobj), Some(Value::Bool(false)));
}

#[test]
fn chosen_missing_argument_becomes_zero() {
    let nobj = eval_one(cat(&[&[0x1d, 0x01], &[0x16], &t_func_var(2, 1)]));
    assert_eq!(value_of(&nobj), Some(Value::Number(0.0)));
}

#[test]
fn choose_folds_on_a_known_selector() {
    let nobj = eval_one(cat(&[
        &t_int(2),
        &t_int(11),
        &t_int(22),
        &t_func_var(3, 100),
    ]));
    assert_eq!(value_of(&nobj), Some(Value::Number(22.0)));
}

#[test]
fn out_of_range_choose_selector_stays_unknown() {
    let nobj = eval_one(cat(&[&t_int(9), &t_int(11), &t_func_var(2, 100)]));
    assert_eq!(value_of(&nobj), None);
    assert_eq!(nobj.result.unwrap().kind, OperandKind::Unknown);
}

#[test]
fn empty_formula_evaluates_to_unknown() {
    let nobj = eval_one(Vec::new());
    let res = nobj.result.unwrap();
    assert_eq!(res.kind, OperandKind::Unknown);
    assert_eq!(res.text, "?");
    assert!(nobj.evaluated);
}

#[test]
fn trailing_token_data_past_basic_len_is_ignored() {
    let mut nobj = NameObject::new("N0", -1, cat(&[&t_int(7), &[0xff, 0xff, 0xff]]));
    nobj.basic_len = 3;
    let mut names = vec![nobj];
    evaluate_name_formula(&ctx(), &mut names, 0, BiffVersion::Biff8).unwrap();
    assert_eq!(value_of(&names[0]), Some(Value::Number(7.0)));
}

#[test]
fn operand_underflow_degrades_to_no_result() {
    let nobj = eval_one(vec![0x03]);
    assert!(nobj.result.is_none());
    assert!(nobj.any_err);
    assert!(nobj.evaluated);
}

#[test]
fn relative_references_set_any_rel() {
    // tRef (reference class), row offset -2, column offset 3.
    let mut rgce = vec![0x24];
    rgce.extend_from_slice(&65534u16.to_le_bytes());
    rgce.extend_from_slice(&(0x8000u16 | 0x4000 | 3).to_le_bytes());
    let nobj = eval_one(rgce);
    assert!(nobj.any_rel);
    let res = nobj.result.unwrap();
    assert_eq!(res.kind, OperandKind::RelRef);
    match res.value {
        Some(Value::Refs(refs)) => {
            assert_eq!(refs.len(), 1);
            assert_eq!(refs[0].coords, [0, 1, -2, -1, 3, 4]);
        }
        other => panic!("expected a reference box, got {other:?}"),
    }
}

#[test]
fn name_chain_resolves_through_indirection() {
    // N0 -> N1 -> N2 -> 7
    let mut names = vec![
        NameObject::new("N0", -1, t_name(2)),
        NameObject::new("N1", -1, t_name(3)),
        NameObject::new("N2", -1, t_int(7)),
    ];
    evaluate_name_formula(&ctx(), &mut names, 0, BiffVersion::Biff8).unwrap();
    let res = names[0].result.clone().unwrap();
    assert_eq!(res.value, Some(Value::Number(7.0)));
    // The referencing formula shows the name, not its definition.
    assert_eq!(res.text, "N1");
    assert!(names.iter().all(|n| n.evaluated));
}

#[test]
fn deep_chain_fails_only_without_memoization() {
    let build = || -> Vec<NameObject> {
        let mut names: Vec<NameObject> = (0..14)
            .map(|i| NameObject::new(&format!("N{i}"), -1, t_name(i as u16 + 2)))
            .collect();
        names.push(NameObject::new("N14", -1, t_int(3)));
        names
    };

    // Cold: 14 levels of indirection exceed the recursion limit.
    let mut names = build();
    assert_eq!(
        evaluate_name_formula(&ctx(), &mut names, 0, BiffVersion::Biff8),
        Err(FormulaError::ExcessiveIndirection)
    );

    // Warm, bottom-up: every hop finds its target already evaluated.
    let mut names = build();
    for i in (0..names.len()).rev() {
        evaluate_name_formula(&ctx(), &mut names, i, BiffVersion::Biff8).unwrap();
    }
    assert_eq!(value_of(&names[0]), Some(Value::Number(3.0)));
}

#[test]
fn chain_past_the_alarm_depth_still_succeeds() {
    // Depth 7 trips the verbose-tracing alarm but stays under the limit.
    let mut names: Vec<NameObject> = (0..7)
        .map(|i| NameObject::new(&format!("N{i}"), -1, t_name(i as u16 + 2)))
        .collect();
    names.push(NameObject::new("N7", -1, t_int(42)));
    evaluate_name_formula(&ctx(), &mut names, 0, BiffVersion::Biff8).unwrap();
    assert_eq!(value_of(&names[0]), Some(Value::Number(42.0)));
}

#[test]
fn self_reference_is_caught() {
    let mut names = vec![NameObject::new("N0", -1, t_name(1))];
    assert_eq!(
        evaluate_name_formula(&ctx(), &mut names, 0, BiffVersion::Biff8),
        Err(FormulaError::ExcessiveIndirection)
    );
}

#[test]
fn macro_names_propagate_no_value() {
    let mut target = NameObject::new("MacroName", -1, t_int(1));
    target.is_macro = true;
    let mut names = vec![NameObject::new("N0", -1, t_name(2)), target];
    evaluate_name_formula(&ctx(), &mut names, 0, BiffVersion::Biff8).unwrap();
    assert!(names[0].any_err);
    let res = names[0].result.clone().unwrap();
    assert_eq!(res.kind, OperandKind::Unknown);
    assert_eq!(res.value, None);
    assert_eq!(res.text, "MacroName");
}

#[test]
fn out_of_range_name_target_degrades() {
    let nobj = eval_one(t_name(40));
    assert!(nobj.any_err);
    assert_eq!(nobj.result.unwrap().kind, OperandKind::Unknown);
}

/// Counts sheet-span resolutions so tests can tell a cached result from
/// a fresh token walk.
struct CountingContext {
    inner: RefTable,
    span_calls: Cell<usize>,
}

impl BookContext for CountingContext {
    fn sheet_names(&self) -> &[String] {
        self.inner.sheet_names()
    }

    fn externsheet_span(&self, refx: usize) -> (i32, i32) {
        self.span_calls.set(self.span_calls.get() + 1);
        self.inner.externsheet_span(refx)
    }

    fn externsheet_span_legacy(&self, raw_extshtx: i32, first: i32, last: i32) -> (i32, i32) {
        self.inner.externsheet_span_legacy(raw_extshtx, first, last)
    }

    fn legacy_externsheet_kind(&self, refx: usize) -> Option<u8> {
        self.inner.legacy_externsheet_kind(refx)
    }

    fn addin_function_name(&self, namex: usize) -> Option<&str> {
        self.inner.addin_function_name(namex)
    }
}

#[test]
fn second_evaluation_reuses_the_cached_result() {
    let mut inner = ctx();
    inner.externsheet = vec![ExternSheetEntry {
        supbook: 0,
        itab_first: 0,
        itab_last: 0,
    }];
    let probe = CountingContext {
        inner,
        span_calls: Cell::new(0),
    };

    let mut rgce = vec![0x3a];
    rgce.extend_from_slice(&0u16.to_le_bytes());
    rgce.extend_from_slice(&[0, 0, 0, 0]);
    let mut names = vec![NameObject::new("N0", -1, rgce)];

    evaluate_name_formula(&probe, &mut names, 0, BiffVersion::Biff8).unwrap();
    assert_eq!(probe.span_calls.get(), 1);
    let first = names[0].result.clone();

    evaluate_name_formula(&probe, &mut names, 0, BiffVersion::Biff8).unwrap();
    assert_eq!(probe.span_calls.get(), 1);
    assert_eq!(names[0].result, first);
}
