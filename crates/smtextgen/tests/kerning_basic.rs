use pretty_assertions::assert_eq;
use smtextgen::{GenError, KerningRule, KerningTable};

#[test]
fn rules_expand_to_pairs() {
    let table = KerningTable::compile(&[
        KerningRule::new("AV", "VA", -1),
        KerningRule::new("T", "o", -2),
    ]);
    assert_eq!(table.len(), 5);
    assert_eq!(table.adjustment('A', 'V'), -1);
    assert_eq!(table.adjustment('V', 'V'), -1);
    assert_eq!(table.adjustment('t', 'O'), -2);
    assert_eq!(table.adjustment('A', 'T'), 0);
}

#[test]
fn later_rules_override() {
    let table = KerningTable::compile(&[
        KerningRule::new("L", "T", -1),
        KerningRule::new("L", "TY", -3),
    ]);
    assert_eq!(table.adjustment('L', 'T'), -3);
    assert_eq!(table.adjustment('L', 'Y'), -3);
}

#[test]
fn parse_rule_file() {
    let table = KerningTable::parse("# pairs\nAV VA -1\n\n  LT  T  2\n").unwrap();
    assert_eq!(table.adjustment('V', 'A'), -1);
    assert_eq!(table.adjustment('T', 'T'), 2);
}

#[test]
fn parse_errors_name_the_line() {
    let err = KerningTable::parse("AV VA -1\nAV VA\n").unwrap_err();
    assert!(matches!(err, GenError::KerningParse { line: 2, .. }), "{err}");

    let err = KerningTable::parse("AV VA x").unwrap_err();
    assert!(matches!(err, GenError::KerningParse { line: 1, .. }), "{err}");
}

#[test]
fn non_ascii_never_kerns() {
    let table = KerningTable::compile(&[KerningRule::new("Aé", "V", 4)]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.adjustment('é', 'V'), 0);
}
