use kiwi_ir::visitor::walk_expr;
use kiwi_ir::{AliasBinding, AstArena, Expr, ExprKind, Span, StringInterner, Visitor};
use pretty_assertions::assert_eq;

use super::support::{render, render_full, try_parse};

#[test]
fn arithmetic_assignment_end_to_end() {
    assert_eq!(
        render("x = 1 + 2 * 3"),
        "Module([], [Assignment([x], [BinaryOp(1, BinaryOp(2, 3, '*'), '+')])])"
    );
    assert_eq!(
        render_full("x = 1 + 2 * 3"),
        "Module([], [Assignment([Expression(x)], [Expression(BinaryOp(1, BinaryOp(2, 3, '*'), '+'))])])"
    );
}

#[test]
fn empty_input_is_an_empty_module() {
    assert_eq!(render(""), "Module([], [])");
}

#[test]
fn imports() {
    assert_eq!(
        render("import a.b.c as d, e\nx = 1\n"),
        "Module([Alias(a.b.c, d), Alias(e, e)], [Assignment([x], [1])])"
    );
    assert_eq!(render("import x; import y\n"), "Module([Alias(x, x), Alias(y, y)], [])");
}

#[test]
fn from_import_binds_members() {
    assert_eq!(
        render("from a.b import c, d as e\n"),
        "Module([Alias(a.b, [Alias(c, c), Alias(d, e)])], [])"
    );
}

#[test]
fn imports_only_after_the_start() {
    // `import` is a soft keyword, so past the first statement it is a name.
    let interner = StringInterner::new();
    assert!(try_parse("x = 1\nimport y\n", &interner).is_err());
}

#[test]
fn deep_dotted_name() {
    let path: Vec<String> = ('a'..='z').map(String::from).collect();
    let source = format!("import {}\n", path.join("."));
    let interner = StringInterner::new();
    let output = try_parse(&source, &interner).unwrap();

    assert_eq!(output.module.imports.len(), 1);
    let alias = &output.module.imports[0];
    assert_eq!(alias.path.len(), 26);
    assert_eq!(alias.dotted(&interner), path.join("."));
    assert_eq!(alias.binding, AliasBinding::Name(interner.intern("z")));
}

#[test]
fn statement_spans_cover_their_tokens() {
    let interner = StringInterner::new();
    let output = try_parse("x = 1 + 2 * 3\ny = 4\n", &interner).unwrap();
    let spans: Vec<Span> = output
        .module
        .statements
        .iter()
        .map(|&id| output.arena.get_stmt(id).span)
        .collect();
    assert_eq!(spans, vec![Span::new(0, 13), Span::new(14, 19)]);
}

#[test]
fn visitor_sees_names_in_source_order() {
    struct Names<'a> {
        interner: &'a StringInterner,
        seen: Vec<&'static str>,
    }

    impl<'ast> Visitor<'ast> for Names<'_> {
        fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast AstArena) {
            if let ExprKind::Name(name) = expr.kind {
                self.seen.push(self.interner.lookup(name));
            }
            walk_expr(self, expr, arena);
        }
    }

    let interner = StringInterner::new();
    let output = try_parse("a = b + c\nif d: e(f.g)\n", &interner).unwrap();
    let mut names = Names { interner: &interner, seen: Vec::new() };
    names.visit_module(&output.module, &output.arena);
    assert_eq!(names.seen, vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn tracing_setup_is_idempotent() {
    crate::init_tracing();
    crate::init_tracing();
    assert_eq!(render("pass"), "Module([], [Pass])");
}
