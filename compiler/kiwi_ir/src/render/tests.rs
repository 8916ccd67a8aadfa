use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{BinaryOperator, Expr, MatchKey, Stmt, TokenLiteral};
use crate::Span;

struct Fixture {
    arena: AstArena,
    interner: StringInterner,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            arena: AstArena::new(),
            interner: StringInterner::new(),
        }
    }

    fn expr(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, Span::DUMMY))
    }

    fn name(&mut self, text: &str) -> ExprId {
        let name = self.interner.intern(text);
        self.expr(ExprKind::Name(name))
    }

    fn render(&self, id: ExprId) -> String {
        render_expr(id, &self.arena, &self.interner)
    }
}

#[test]
fn binary_and_wrapper() {
    let mut fx = Fixture::new();
    let a = fx.name("a");
    let b = fx.name("b");
    let sum = fx.expr(ExprKind::BinaryOp {
        left: a,
        right: b,
        op: BinaryOperator::Add,
    });
    let wrapped = fx.expr(ExprKind::Expression(sum));

    assert_eq!(fx.render(wrapped), "Expression(BinaryOp(a, b, '+'))");
    assert_eq!(
        AstRenderer::new(&fx.arena, &fx.interner)
            .elide_wrappers(true)
            .expr(wrapped),
        "BinaryOp(a, b, '+')"
    );
}

#[test]
fn literals() {
    let mut fx = Fixture::new();
    let text = fx.interner.intern("hi \"there\"");
    let s = fx.expr(ExprKind::String(text));
    let t = fx.expr(ExprKind::Token(TokenLiteral::Promise));
    let sel_name = fx.interner.intern("e");
    let sel = fx.expr(ExprKind::Selector(sel_name));

    assert_eq!(fx.render(s), r#""hi \"there\"""#);
    assert_eq!(fx.render(t), "promise");
    assert_eq!(fx.render(sel), "@e");
}

#[test]
fn match_keys_print_absent_bounds_as_none() {
    let mut fx = Fixture::new();
    let subject = fx.name("x");
    let one_text = fx.interner.intern("1");
    let one = fx.expr(ExprKind::Number(one_text));
    let v = fx.name("v");
    let keys = vec![
        MatchKey {
            from: None,
            to: None,
            value: v,
        },
        MatchKey {
            from: Some(one),
            to: Some(one),
            value: v,
        },
    ];
    let m = fx.expr(ExprKind::MatchExpr { subject, keys });

    assert_eq!(
        fx.render(m),
        "MatchExpr(x, [MatchKey(None, None, v), MatchKey(1, 1, v)])"
    );
}

#[test]
fn module_with_imports() {
    let mut fx = Fixture::new();
    let a = fx.interner.intern("a");
    let b = fx.interner.intern("b");
    let c = fx.interner.intern("c");
    let pass = fx.arena.alloc_stmt(Stmt::new(StmtKind::Pass, Span::DUMMY));
    let module = Module {
        imports: vec![
            Alias::plain(vec![a, b]),
            Alias {
                path: vec![a],
                binding: AliasBinding::Members(vec![Alias::plain(vec![c])]),
            },
        ],
        statements: vec![pass],
    };

    assert_eq!(
        render_module(&module, &fx.arena, &fx.interner),
        "Module([Alias(a.b, b), Alias(a, [Alias(c, c)])], [Pass])"
    );
}
