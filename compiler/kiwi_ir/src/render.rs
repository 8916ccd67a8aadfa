//! One-line textual rendering of the AST.
//!
//! Produces constructor-style output such as
//! `Assignment([x], [BinaryOp(1, BinaryOp(2, 3, '*'), '+')])`, used by tests
//! and debugging dumps. Names and numbers print as their text, strings are
//! quoted, operators are quoted symbols.

use crate::ast::{
    Alias, AliasBinding, DefaultedParam, ExprKind, MatchKey, Module, Param, ReturnParam, StmtKind,
};
use crate::{AstArena, ExprId, Name, StmtId, StringInterner};

/// Renders nodes of one arena.
pub struct AstRenderer<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    elide_wrappers: bool,
}

impl<'a> AstRenderer<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        AstRenderer {
            arena,
            interner,
            elide_wrappers: false,
        }
    }

    /// Print `Expression(x)` wrapper nodes as just `x`.
    #[must_use]
    pub fn elide_wrappers(mut self, elide: bool) -> Self {
        self.elide_wrappers = elide;
        self
    }

    pub fn module(&self, module: &Module) -> String {
        let imports = list(module.imports.iter().map(|alias| self.alias(alias)));
        format!("Module({imports}, {})", self.body(&module.statements))
    }

    pub fn alias(&self, alias: &Alias) -> String {
        let path = alias.dotted(self.interner);
        match &alias.binding {
            AliasBinding::Name(bound) => format!("Alias({path}, {})", self.name(*bound)),
            AliasBinding::Members(members) => {
                let members = list(members.iter().map(|member| self.alias(member)));
                format!("Alias({path}, {members})")
            }
        }
    }

    fn body(&self, stmts: &[StmtId]) -> String {
        list(stmts.iter().map(|&stmt| self.stmt(stmt)))
    }

    fn exprs(&self, exprs: &[ExprId]) -> String {
        list(exprs.iter().map(|&expr| self.expr(expr)))
    }

    fn name(&self, name: Name) -> &'a str {
        self.interner.lookup(name)
    }

    pub fn stmt(&self, id: StmtId) -> String {
        match &self.arena.get_stmt(id).kind {
            StmtKind::Pass => "Pass".to_string(),
            StmtKind::Break => "Break".to_string(),
            StmtKind::Continue => "Continue".to_string(),
            StmtKind::Return(value) => format!("Return({})", self.expr(*value)),
            StmtKind::Expression(value) => self.expr(*value),
            StmtKind::Assignment { targets, values } => {
                format!("Assignment({}, {})", self.exprs(targets), self.exprs(values))
            }
            StmtKind::AnnAssignment {
                targets,
                ty,
                args,
                values,
            } => format!(
                "AnnAssignment({}, {}, {}, {})",
                self.exprs(targets),
                self.expr(*ty),
                self.exprs(args),
                self.exprs(values)
            ),
            StmtKind::AugAssignment {
                targets,
                op,
                values,
            } => format!(
                "AugAssignment({}, '{}', {})",
                self.exprs(targets),
                op.as_symbol(),
                self.exprs(values)
            ),
            StmtKind::Annotation { targets, ty, args } => format!(
                "Annotation({}, {}, {})",
                self.exprs(targets),
                self.expr(*ty),
                self.exprs(args)
            ),
            StmtKind::FuncDef {
                name,
                required_params,
                defaulted_params,
                return_type,
                delay,
                body,
            } => format!(
                "FuncDef({}, {}, {}, {}, {}, {})",
                self.name(*name),
                list(required_params.iter().map(|p| self.param(p))),
                list(defaulted_params.iter().map(|p| self.defaulted(p))),
                return_type.map_or_else(|| "None".to_string(), |r| self.return_param(r)),
                delay.map_or_else(|| "None".to_string(), |d| self.expr(d)),
                self.body(body)
            ),
            StmtKind::NamespaceDef {
                name,
                private_body,
                public_body,
                default_body,
            } => format!(
                "NamespaceDef({}, {}, {}, {})",
                self.name(*name),
                self.body(private_body),
                self.body(public_body),
                self.body(default_body)
            ),
            StmtKind::IfElse {
                cond,
                then_body,
                else_body,
            } => format!(
                "IfElse({}, {}, {})",
                self.expr(*cond),
                self.body(then_body),
                self.body(else_body)
            ),
            StmtKind::While { cond, body } => {
                format!("While({}, {})", self.expr(*cond), self.body(body))
            }
            StmtKind::MatchCase { subject, cases } => {
                let cases = list(
                    cases
                        .iter()
                        .map(|case| format!("Case({}, {})", self.expr(case.key), self.body(&case.body))),
                );
                format!("MatchCase({}, {cases})", self.expr(*subject))
            }
        }
    }

    fn param(&self, param: &Param) -> String {
        match param {
            Param::Value(value) => format!(
                "Parameter({}, {}, {})",
                self.exprs(&value.targets),
                self.expr(value.ty),
                self.exprs(&value.args)
            ),
            Param::Ref(reference) => format!("RefParameter({})", self.name(reference.name)),
        }
    }

    fn defaulted(&self, param: &DefaultedParam) -> String {
        format!("({}, {})", self.param(&param.param), self.expr(param.default))
    }

    fn return_param(&self, param: ReturnParam) -> String {
        match param {
            ReturnParam::Value(ty) => self.expr(ty),
            ReturnParam::Ref(reference) => format!("RefParameter({})", self.name(reference.name)),
        }
    }

    fn match_key(&self, key: &MatchKey) -> String {
        let bound = |b: Option<ExprId>| b.map_or_else(|| "None".to_string(), |e| self.expr(e));
        format!(
            "MatchKey({}, {}, {})",
            bound(key.from),
            bound(key.to),
            self.expr(key.value)
        )
    }

    pub fn expr(&self, id: ExprId) -> String {
        match &self.arena.get_expr(id).kind {
            ExprKind::Expression(inner) if self.elide_wrappers => self.expr(*inner),
            ExprKind::Expression(inner) => format!("Expression({})", self.expr(*inner)),
            ExprKind::IfExpression {
                cond,
                then_branch,
                else_branch,
            } => format!(
                "IfExpression({}, {}, {})",
                self.expr(*cond),
                self.expr(*then_branch),
                self.expr(*else_branch)
            ),
            ExprKind::LambdaDef { params, body } => format!(
                "LambdaDef({}, {})",
                list(params.iter().map(|p| self.name(*p).to_string())),
                self.expr(*body)
            ),
            ExprKind::UnaryOp { operand, op } => {
                format!("UnaryOp({}, '{}')", self.expr(*operand), op.as_symbol())
            }
            ExprKind::BinaryOp { left, right, op } => format!(
                "BinaryOp({}, {}, '{}')",
                self.expr(*left),
                self.expr(*right),
                op.as_symbol()
            ),
            ExprKind::Compare { operands, ops } => format!(
                "Compare({}, {})",
                self.exprs(operands),
                list(ops.iter().map(|op| format!("'{}'", op.as_symbol())))
            ),
            ExprKind::Call { callee, args } => {
                format!("Call({}, {})", self.expr(*callee), self.exprs(args))
            }
            ExprKind::Attribute { base, name } => {
                format!("Attribute({}, {})", self.expr(*base), self.name(*name))
            }
            ExprKind::MatchExpr { subject, keys } => format!(
                "MatchExpr({}, {})",
                self.expr(*subject),
                list(keys.iter().map(|key| self.match_key(key)))
            ),
            ExprKind::Name(name) | ExprKind::Number(name) => self.name(*name).to_string(),
            ExprKind::String(text) => format!("{:?}", self.name(*text)),
            ExprKind::Selector(name) => format!("@{}", self.name(*name)),
            ExprKind::Token(literal) => literal.as_str().to_string(),
            ExprKind::Word(text) => format!("Word({})", self.name(*text)),
        }
    }
}

fn list(items: impl Iterator<Item = String>) -> String {
    let mut out = String::from("[");
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item);
    }
    out.push(']');
    out
}

/// Render a whole module.
pub fn render_module(module: &Module, arena: &AstArena, interner: &StringInterner) -> String {
    AstRenderer::new(arena, interner).module(module)
}

pub fn render_expr(id: ExprId, arena: &AstArena, interner: &StringInterner) -> String {
    AstRenderer::new(arena, interner).expr(id)
}

pub fn render_stmt(id: StmtId, arena: &AstArena, interner: &StringInterner) -> String {
    AstRenderer::new(arena, interner).stmt(id)
}

#[cfg(test)]
mod tests;
