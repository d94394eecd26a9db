//! 3-D references across the EXTERNSHEET/SUPBOOK indirection, including
//! every resolution sentinel.

use biff_formula::{
    decompile_formula, evaluate_name_formula, BiffVersion, ExternSheetEntry, FmlaType, NameObject,
    OperandKind, RefTable,
};
use pretty_assertions::assert_eq;

fn ctx() -> RefTable {
    let mut t = RefTable::with_sheet_names(vec!["Sheet1".to_string(), "Sheet2".to_string()]);
    t.supbook_locals = Some(0);
    t.supbook_addins = Some(1);
    t.addin_names = vec!["ADDIN.FUNC".to_string()];
    t.externsheet = vec![
        ExternSheetEntry { supbook: 0, itab_first: 0, itab_last: 0 },
        ExternSheetEntry { supbook: 0, itab_first: 0, itab_last: 1 },
        ExternSheetEntry { supbook: 0, itab_first: 0xfffe, itab_last: 0xfffe },
        ExternSheetEntry { supbook: 0, itab_first: 0xffff, itab_last: 0xffff },
        ExternSheetEntry { supbook: 2, itab_first: 0, itab_last: 0 },
        ExternSheetEntry { supbook: 1, itab_first: 0xfffe, itab_last: 0xfffe },
        ExternSheetEntry { supbook: 0, itab_first: 5, itab_last: 9 },
    ];
    t
}

/// A BIFF8 tRef3d (value class) pointing at absolute A1 through `refx`.
fn t_ref3d(refx: u16) -> Vec<u8> {
    let mut b = vec![0x5a];
    b.extend_from_slice(&refx.to_le_bytes());
    b.extend_from_slice(&[0, 0, 0, 0]);
    b
}

fn decompile(ctx: &RefTable, data: &[u8]) -> Option<String> {
    decompile_formula(
        ctx,
        &[],
        data,
        BiffVersion::Biff8,
        FmlaType::Cell,
        Some((0, 0)),
        false,
    )
    .unwrap()
}

#[test]
fn local_sheet_and_sheet_span() {
    let ctx = ctx();
    assert_eq!(decompile(&ctx, &t_ref3d(0)), Some("Sheet1!$A$1".to_string()));
    assert_eq!(
        decompile(&ctx, &t_ref3d(1)),
        Some("Sheet1:Sheet2!$A$1".to_string())
    );
}

#[test]
fn sentinel_spans_render_placeholders() {
    let ctx = ctx();
    assert_eq!(
        decompile(&ctx, &t_ref3d(2)),
        Some("'?internal; any sheet?'!$A$1".to_string())
    );
    assert_eq!(
        decompile(&ctx, &t_ref3d(3)),
        Some("'internal; deleted sheet'!$A$1".to_string())
    );
    assert_eq!(
        decompile(&ctx, &t_ref3d(4)),
        Some("<<external>>!$A$1".to_string())
    );
    // Sheet span outside the workbook.
    assert_eq!(
        decompile(&ctx, &t_ref3d(6)),
        Some("'?error -102?'!$A$1".to_string())
    );
    // EXTERNSHEET index outside the table.
    assert_eq!(
        decompile(&ctx, &t_ref3d(99)),
        Some("'?error -101?'!$A$1".to_string())
    );
}

#[test]
fn relative_3d_reference_in_a_name_goes_r1c1() {
    let mut data = vec![0x5a];
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&65535u16.to_le_bytes()); // row offset -1
    data.extend_from_slice(&(0x8000u16 | 0x4000 | 2).to_le_bytes());
    let ctx = ctx();
    let text = decompile_formula(
        &ctx,
        &[],
        &data,
        BiffVersion::Biff8,
        FmlaType::Name,
        None,
        false,
    )
    .unwrap();
    assert_eq!(text, Some("Sheet1!R[-1]C[2]:R[-1]C[2]".to_string()));
}

#[test]
fn legacy_in_token_descriptor() {
    // BIFF5 keeps the whole descriptor inside the token: i16 raw
    // externsheet index, 8 reserved bytes, two i16 sheet indexes, then
    // the cell coordinates.
    let build = |raw: i16, shx1: i16, shx2: i16| {
        let mut b = vec![0x5a];
        b.extend_from_slice(&raw.to_le_bytes());
        b.extend_from_slice(&[0u8; 8]);
        b.extend_from_slice(&shx1.to_le_bytes());
        b.extend_from_slice(&shx2.to_le_bytes());
        b.extend_from_slice(&[0, 0, 0]); // row u16, col u8
        b
    };
    let ctx = ctx();
    let decompile5 = |data: &[u8]| {
        decompile_formula(
            &ctx,
            &[],
            data,
            BiffVersion::Biff5,
            FmlaType::Cell,
            Some((0, 0)),
            false,
        )
        .unwrap()
    };
    assert_eq!(decompile5(&build(-1, 0, 0)), Some("Sheet1!$A$1".to_string()));
    assert_eq!(
        decompile5(&build(3, 0, 0)),
        Some("<<external>>!$A$1".to_string())
    );
    assert_eq!(
        decompile5(&build(-1, -1, -1)),
        Some("'internal; deleted sheet'!$A$1".to_string())
    );
}

#[test]
fn addin_name_resolves_through_the_name_table() {
    // tNameX into the add-in supbook pushes the add-in's name; the
    // funcx-255 call takes the callee from the top of the stack.
    let mut data = vec![0x1e, 0x07, 0x00]; // 7
    data.push(0x59);
    data.extend_from_slice(&5u16.to_le_bytes()); // refx -> add-in entry
    data.extend_from_slice(&1u16.to_le_bytes()); // 1-based name index
    data.extend_from_slice(&[0, 0]);
    data.extend_from_slice(&[0x42, 0x02]); // tFuncVar, 2 args
    data.extend_from_slice(&255u16.to_le_bytes());
    let ctx = ctx();
    assert_eq!(
        decompile(&ctx, &data),
        Some("\"ADDIN.FUNC\"(7.0)".to_string())
    );
}

#[test]
fn unresolvable_namex_renders_a_marker() {
    let mut data = vec![0x59];
    data.extend_from_slice(&4u16.to_le_bytes()); // external workbook
    data.extend_from_slice(&3u16.to_le_bytes());
    data.extend_from_slice(&[0, 0]);
    let ctx = ctx();
    assert_eq!(
        decompile(&ctx, &data),
        Some("<<Name #2 in external(?) file #4>>".to_string())
    );
}

#[test]
fn external_namex_flags_the_evaluated_name() {
    let mut rgce = vec![0x59];
    rgce.extend_from_slice(&4u16.to_le_bytes());
    rgce.extend_from_slice(&3u16.to_le_bytes());
    rgce.extend_from_slice(&[0, 0]);
    let ctx = ctx();
    let mut names = vec![NameObject::new("N0", -1, rgce)];
    evaluate_name_formula(&ctx, &mut names, 0, BiffVersion::Biff8).unwrap();
    assert!(names[0].any_external);
    let res = names[0].result.clone().unwrap();
    assert_eq!(res.kind, OperandKind::Unknown);
}

#[test]
fn bad_spans_set_any_err_on_names() {
    let ctx = ctx();
    let mut names = vec![NameObject::new("N0", -1, t_ref3d(99))];
    evaluate_name_formula(&ctx, &mut names, 0, BiffVersion::Biff8).unwrap();
    assert!(names[0].any_err);
}
