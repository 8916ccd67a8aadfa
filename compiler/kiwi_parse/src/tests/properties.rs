//! Property tests over generated operator chains.

use kiwi_ir::{BinaryOperator, ExprKind, StringInterner};
use proptest::prelude::*;

use super::support::{lex, render_expr};
use crate::Parser;

fn left_fold(operands: &[String], ops: &[&str]) -> String {
    let mut acc = operands[0].clone();
    for (operand, op) in operands[1..].iter().zip(ops) {
        acc = format!("BinaryOp({acc}, {operand}, '{op}')");
    }
    acc
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof!["[a-z][a-z0-9_]{0,4}", "[1-9][0-9]{0,3}"]
        .prop_filter("hard keywords are not operands", |s| {
            !crate::GrammarConfig::kiwi().is_hard_keyword(s)
                && !matches!(s.as_str(), "lambda" | "match")
        })
}

proptest! {
    #[test]
    fn additive_chains_fold_left(
        operands in prop::collection::vec(operand(), 2..12),
        signs in prop::collection::vec(prop_oneof![Just("+"), Just("-")], 11),
    ) {
        let ops = &signs[..operands.len() - 1];
        let mut source = operands[0].clone();
        for (operand, op) in operands[1..].iter().zip(ops) {
            source.push_str(&format!(" {op} {operand}"));
        }
        prop_assert_eq!(render_expr(&source), left_fold(&operands, ops));
    }

    #[test]
    fn multiplicative_chains_fold_left(
        operands in prop::collection::vec(operand(), 2..12),
        signs in prop::collection::vec(prop_oneof![Just("*"), Just("/"), Just("%")], 11),
    ) {
        let ops = &signs[..operands.len() - 1];
        let source = operands
            .iter()
            .zip(std::iter::once(&"").chain(ops))
            .map(|(operand, op)| format!("{op} {operand}"))
            .collect::<String>();
        prop_assert_eq!(render_expr(source.trim_start()), left_fold(&operands, ops));
    }

    #[test]
    fn attribute_chains_nest_left(depth in 1usize..200) {
        let names: Vec<String> = (0..=depth).map(|i| format!("n{i}")).collect();
        let expected = names[1..]
            .iter()
            .fold(names[0].clone(), |acc, name| format!("Attribute({acc}, {name})"));
        prop_assert_eq!(render_expr(&names.join(".")), expected);
    }
}

#[test]
fn long_chain_folds_without_deep_recursion() {
    let source = vec!["a"; 5_000].join(" + ");
    let interner = StringInterner::new();
    let tokens = lex(&source, &interner);
    let output = Parser::new(&tokens, &interner).parse_expression().unwrap();

    let ExprKind::Expression(mut current) = output.arena.get_expr(output.expr).kind else {
        panic!("expected a wrapped expression");
    };
    let mut depth = 0;
    while let ExprKind::BinaryOp { left, op, .. } = output.arena.get_expr(current).kind {
        assert_eq!(op, BinaryOperator::Add);
        current = left;
        depth += 1;
    }
    assert_eq!(depth, 4_999);
    assert_eq!(output.stats.max_evaluations(), 1);
}

#[test]
fn deeply_nested_groups() {
    let depth = 500;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(render_expr(&source), "x");
}
