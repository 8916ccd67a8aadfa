//! Function definitions and parameter lists.

use kiwi_ir::{DefaultedParam, Param, Parameter, RefParameter, ReturnParam, StmtId, StmtKind};

use super::{Annotations, Signature};
use crate::rule::Rule;
use crate::Parser;

impl Parser<'_> {
    /// ```text
    /// function_def: 'function' NAME '(' parameters ')' ['->' return_param]
    ///               ['<' '-' expression] ':' block
    /// ```
    ///
    /// The optional parts are tried in the order the four spelled-out
    /// alternatives would try them, so the result is the same.
    pub(crate) fn function_def(&mut self) -> Option<StmtId> {
        self.memoize(Rule::FunctionDef, |p| {
            let start = p.cursor.mark();
            p.lit("function")?;
            let name = p.identifier()?;
            p.lit("(")?;
            let Signature { required, defaulted } = p.parameters()?;
            p.lit(")")?;
            let return_type = p.opt(|q| {
                q.lit("->")?;
                q.return_param()
            });
            let delay = p.opt(|q| {
                q.lit("<")?;
                q.lit("-")?;
                q.expression()
            });
            p.lit(":")?;
            let body = p.block()?;
            Some(p.alloc_stmt(
                StmtKind::FuncDef {
                    name,
                    required_params: required,
                    defaulted_params: defaulted,
                    return_type,
                    delay,
                    body,
                },
                start,
            ))
        })
    }

    /// `parameters: param_no_default* param_with_default*`
    fn parameters(&mut self) -> Option<Signature> {
        self.memoize(Rule::Parameters, |p| {
            let required = p.repeat0(Self::param_no_default);
            let defaulted = p.repeat0(Self::param_with_default);
            Some(Signature { required, defaulted })
        })
    }

    /// ```text
    /// param_no_default: annotations (',' | &')')
    ///                 | '=' NAME (',' | &')')
    /// ```
    fn param_no_default(&mut self) -> Option<Param> {
        self.memoize(Rule::ParamNoDefault, |p| {
            let param = p.param()?;
            p.param_end()?;
            Some(param)
        })
    }

    /// ```text
    /// param_with_default: annotations '=' expression (',' | &')')
    ///                   | '=' NAME '=' expression (',' | &')')
    /// ```
    fn param_with_default(&mut self) -> Option<DefaultedParam> {
        self.memoize(Rule::ParamWithDefault, |p| {
            let param = p.param()?;
            p.lit("=")?;
            let default = p.expression()?;
            p.param_end()?;
            Some(DefaultedParam { param, default })
        })
    }

    fn param(&mut self) -> Option<Param> {
        one_of!(self;
            |p| {
                let Annotations { targets, ty, args } = p.annotations()?;
                Some(Param::Value(Parameter { targets, ty, args }))
            },
            |p| p.ref_parameter().map(Param::Ref),
        )
    }

    /// `'=' NAME`
    fn ref_parameter(&mut self) -> Option<RefParameter> {
        self.lit("=")?;
        let name = self.identifier()?;
        Some(RefParameter { name })
    }

    /// `',' | &')'`
    fn param_end(&mut self) -> Option<()> {
        one_of!(self;
            |p| p.comma(),
            |p| p.cursor.lookahead(|c| c.expect_literal(")").is_some()).then_some(()),
        )
    }

    /// `return_param: expression | '=' NAME`
    fn return_param(&mut self) -> Option<ReturnParam> {
        self.memoize(Rule::ReturnParam, |p| {
            one_of!(p;
                |q| q.expression().map(ReturnParam::Value),
                |q| q.ref_parameter().map(ReturnParam::Ref),
            )
        })
    }
}
