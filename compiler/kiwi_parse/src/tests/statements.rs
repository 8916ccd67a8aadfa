use pretty_assertions::assert_eq;

use super::support::{render, render_stmt};

#[test]
fn assignments() {
    assert_eq!(render_stmt("a, b = 1, 2"), "Assignment([a, b], [1, 2])");
    assert_eq!(render_stmt("x.y = f(z)"), "Assignment([Attribute(x, y)], [Call(f, [z])])");
}

#[test]
fn annotated_assignment_and_annotations() {
    assert_eq!(render_stmt("x: int = 5"), "AnnAssignment([x], int, [], [5])");
    assert_eq!(render_stmt("x: list int"), "Annotation([x], list, [int])");
    assert_eq!(render_stmt("a, b -> int"), "Annotation([a, b], int, [])");
    assert_eq!(
        render_stmt("a, b -> map str int = m"),
        "AnnAssignment([a, b], map, [str, int], [m])"
    );
}

#[test]
fn earlier_alternative_wins() {
    // `annotations` alone would also match the `x: int` prefix.
    assert_eq!(render_stmt("x: int = 5"), "AnnAssignment([x], int, [], [5])");
    // `f()` first tries the argument form, then settles on the empty call.
    assert_eq!(render_stmt("f()"), "Call(f, [])");
}

#[test]
fn augmented_assignment() {
    assert_eq!(render_stmt("x += 1"), "AugAssignment([x], '+=', [1])");
    assert_eq!(render_stmt("a, b %= 2, 3"), "AugAssignment([a, b], '%=', [2, 3])");
}

#[test]
fn simple_statements() {
    assert_eq!(render_stmt("return x"), "Return(x)");
    assert_eq!(render_stmt("print(x)"), "Call(print, [x])");
    assert_eq!(render("pass\nbreak\ncontinue\n"), "Module([], [Pass, Break, Continue])");
}

#[test]
fn semicolons_separate_statements() {
    assert_eq!(render("pass; break; continue"), "Module([], [Pass, Break, Continue])");
    assert_eq!(
        render("x = 1;;\n\ny = 2"),
        "Module([], [Assignment([x], [1]), Assignment([y], [2])])"
    );
}

#[test]
fn if_else() {
    assert_eq!(
        render_stmt("if a:\n{x = 1\n}\nelse:\n{x = 2\n}\n"),
        "IfElse(a, [Assignment([x], [1])], [Assignment([x], [2])])"
    );
    assert_eq!(render_stmt("if a: pass\n"), "IfElse(a, [Pass], [])");
}

#[test]
fn else_if_nests_in_else_body() {
    assert_eq!(
        render_stmt("if a: pass\nelse if b: pass\nelse: break\n"),
        "IfElse(a, [Pass], [IfElse(b, [Pass], [Break])])"
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        render_stmt("while x < 3:\n{x += 1\nif x == 2: break\n}\n"),
        "While(Compare([x, 3], ['<']), [AugAssignment([x], '+=', [1]), IfElse(Compare([x, 2], ['==']), [Break], [])])"
    );
}

#[test]
fn match_statement() {
    assert_eq!(
        render_stmt("match x:\n{case 1: pass\n, case 2:\n{y = 1\n}\n}\n"),
        "MatchCase(x, [Case(1, [Pass]), Case(2, [Assignment([y], [1])])])"
    );
}

#[test]
fn match_as_a_name_is_still_a_name() {
    assert_eq!(render_stmt("match = 1"), "Assignment([match], [1])");
}

#[test]
fn function_with_all_parameter_kinds() {
    assert_eq!(
        render_stmt("function f(a: int, =r, b: int = 1) -> int:\n{return a\n}\n"),
        "FuncDef(f, [Parameter([a], int, []), RefParameter(r)], [(Parameter([b], int, []), 1)], int, None, [Return(a)])"
    );
}

#[test]
fn function_with_delay_clause() {
    assert_eq!(
        render_stmt("function g() <- d: pass\n"),
        "FuncDef(g, [], [], None, d, [Pass])"
    );
}

#[test]
fn function_with_reference_parameters() {
    assert_eq!(
        render_stmt("function h(=x = 2) -> =y: pass\n"),
        "FuncDef(h, [], [(RefParameter(x), 2)], RefParameter(y), None, [Pass])"
    );
}

#[test]
fn multi_target_parameter() {
    assert_eq!(
        render_stmt("function k(a, b -> int): pass\n"),
        "FuncDef(k, [Parameter([a, b], int, [])], [], None, None, [Pass])"
    );
}

#[test]
fn namespace_buckets() {
    assert_eq!(
        render_stmt("namespace n:\n{x = 1\nprivate:\n{y = 2\n}\nz = 3\npublic:\n{w = 4\n}\n}\n"),
        "NamespaceDef(n, [Assignment([y], [2])], [Assignment([w], [4])], [Assignment([x], [1]), Assignment([z], [3])])"
    );
}

#[test]
fn namespace_block_order_does_not_matter() {
    let private_first = render_stmt("namespace n:\n{private:\n{y = 2\n}\npublic:\n{w = 4\n}\n}\n");
    let public_first = render_stmt("namespace n:\n{public:\n{w = 4\n}\nprivate:\n{y = 2\n}\n}\n");
    assert_eq!(private_first, public_first);
    assert_eq!(
        private_first,
        "NamespaceDef(n, [Assignment([y], [2])], [Assignment([w], [4])], [])"
    );
}

#[test]
fn namespace_without_labels() {
    assert_eq!(
        render_stmt("namespace n:\n{x = 1\n}\n"),
        "NamespaceDef(n, [], [], [Assignment([x], [1])])"
    );
}

#[test]
fn nested_blocks() {
    assert_eq!(
        render_stmt("function f():\n{while a:\n{if b:\n{return c\n}\n}\n}\n"),
        "FuncDef(f, [], [], None, None, [While(a, [IfElse(b, [Return(c)], [])])])"
    );
}
