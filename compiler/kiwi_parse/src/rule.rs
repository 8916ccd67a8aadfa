//! Rule identities used as memo keys.

use std::fmt;

/// One grammar rule.
///
/// Together with a token position this keys the memo table and the
/// left-recursion frames, so every rule that goes through
/// [`memoize`](crate::memo::memoize) needs its own variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Rule {
    ImportStmts,
    ImportStmt,
    FromImportStmt,
    DottedAsName,
    DottedName,
    Statements,
    Statement,
    StatementNewline,
    SimpleStmt,
    CompoundStmt,
    Assignment,
    Annotations,
    AugAssign,
    ReturnStmt,
    Block,
    HidingBlock,
    Blocks,
    PrivateBlock,
    PublicBlock,
    NamespaceDef,
    FunctionDef,
    Parameters,
    ParamNoDefault,
    ParamWithDefault,
    ReturnParam,
    IfStmt,
    WhileStmt,
    MatchStmt,
    Case,
    Expression,
    LambdaDef,
    Inversion,
    Comparison,
    Sum,
    Term,
    Factor,
    Power,
    Primary,
    Atom,
    Arguments,
    KeyBlock,
    MatchKey,
    Word,
    Name,
    Strings,
}

impl Rule {
    /// Grammar name of the rule.
    pub fn name(self) -> &'static str {
        match self {
            Rule::ImportStmts => "import_stmts",
            Rule::ImportStmt => "import_stmt",
            Rule::FromImportStmt => "from_import_stmt",
            Rule::DottedAsName => "dotted_as_name",
            Rule::DottedName => "dotted_name",
            Rule::Statements => "statements",
            Rule::Statement => "statement",
            Rule::StatementNewline => "statement_newline",
            Rule::SimpleStmt => "simple_stmt",
            Rule::CompoundStmt => "compound_stmt",
            Rule::Assignment => "assignment",
            Rule::Annotations => "annotations",
            Rule::AugAssign => "augassign",
            Rule::ReturnStmt => "return_stmt",
            Rule::Block => "block",
            Rule::HidingBlock => "hiding_block",
            Rule::Blocks => "blocks",
            Rule::PrivateBlock => "private_block",
            Rule::PublicBlock => "public_block",
            Rule::NamespaceDef => "namespace_def",
            Rule::FunctionDef => "function_def",
            Rule::Parameters => "parameters",
            Rule::ParamNoDefault => "param_no_default",
            Rule::ParamWithDefault => "param_with_default",
            Rule::ReturnParam => "return_param",
            Rule::IfStmt => "if_stmt",
            Rule::WhileStmt => "while_stmt",
            Rule::MatchStmt => "match_stmt",
            Rule::Case => "case",
            Rule::Expression => "expression",
            Rule::LambdaDef => "lambda_def",
            Rule::Inversion => "inversion",
            Rule::Comparison => "comparison",
            Rule::Sum => "sum",
            Rule::Term => "term",
            Rule::Factor => "factor",
            Rule::Power => "power",
            Rule::Primary => "primary",
            Rule::Atom => "atom",
            Rule::Arguments => "arguments",
            Rule::KeyBlock => "key_block",
            Rule::MatchKey => "match_key",
            Rule::Word => "word",
            Rule::Name => "name",
            Rule::Strings => "strings",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
