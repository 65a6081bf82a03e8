//! Snapshot tests for the text tables shown in reports.

use curvelab::core::Polynomial;

#[test]
fn coefficient_table_text() {
    let p = Polynomial::new(vec![1.0, 0.0, -3.0, 0.5]).unwrap();
    insta::assert_snapshot!(p.coefficient_table_text(), @r###"
    |    x^3 |    x^2 |     x^1 |    x^0 |
    | 1.0000 | 0.0000 | -3.0000 | 0.5000 |
    "###);
}

#[test]
fn coefficient_table_text_sextic() {
    let p = Polynomial::new(vec![-2.0, 0.0, 0.0, 0.0, 0.0, 12.25, -100.0]).unwrap();
    insta::assert_snapshot!(p.coefficient_table_text(), @r###"
    |     x^6 |    x^5 |    x^4 |    x^3 |    x^2 |     x^1 |       x^0 |
    | -2.0000 | 0.0000 | 0.0000 | 0.0000 | 0.0000 | 12.2500 | -100.0000 |
    "###);
}
