//! Top level: `start` and the import statements.

use kiwi_ir::{Alias, AliasBinding, Module, Name, TokenKind};

use crate::rule::Rule;
use crate::Parser;

impl Parser<'_> {
    /// ```text
    /// start: import_stmts statements END
    ///      | import_stmts END
    ///      | statements END
    ///      | END
    /// ```
    pub(crate) fn start(&mut self) -> Option<Module> {
        one_of!(self;
            |p| {
                let imports = p.import_stmts()?;
                let statements = p.statements()?;
                p.end()?;
                Some(Module { imports, statements })
            },
            |p| {
                let imports = p.import_stmts()?;
                p.end()?;
                Some(Module { imports, statements: Vec::new() })
            },
            |p| {
                let statements = p.statements()?;
                p.end()?;
                Some(Module { imports: Vec::new(), statements })
            },
            |p| {
                p.end()?;
                Some(Module::default())
            },
        )
    }

    pub(crate) fn end(&mut self) -> Option<()> {
        self.token(TokenKind::EndMarker).map(|_| ())
    }

    /// `import_stmts: (import_stmt | from_import_stmt)+`, flattened.
    pub(crate) fn import_stmts(&mut self) -> Option<Vec<Alias>> {
        self.memoize(Rule::ImportStmts, |p| {
            let groups = p.repeat1(|p| {
                one_of!(p;
                    |q| q.import_stmt(),
                    |q| q.from_import_stmt().map(|alias| vec![alias]),
                )
            })?;
            Some(groups.into_iter().flatten().collect())
        })
    }

    /// `import_stmt: "import" ','.dotted_as_name+ (NEWLINE | ';')+`
    fn import_stmt(&mut self) -> Option<Vec<Alias>> {
        self.memoize(Rule::ImportStmt, |p| {
            p.lit("import")?;
            let names = p.gather(Self::comma, Self::dotted_as_name)?;
            p.separators()?;
            Some(names)
        })
    }

    /// `from_import_stmt: "from" dotted_name import_stmt`
    fn from_import_stmt(&mut self) -> Option<Alias> {
        self.memoize(Rule::FromImportStmt, |p| {
            p.lit("from")?;
            let path = p.dotted_name()?;
            let members = p.import_stmt()?;
            Some(Alias {
                path,
                binding: AliasBinding::Members(members),
            })
        })
    }

    /// `dotted_as_name: dotted_name "as" NAME | dotted_name`
    fn dotted_as_name(&mut self) -> Option<Alias> {
        self.memoize(Rule::DottedAsName, |p| {
            one_of!(p;
                |q| {
                    let path = q.dotted_name()?;
                    q.lit("as")?;
                    let bound = q.identifier()?;
                    Some(Alias { path, binding: AliasBinding::Name(bound) })
                },
                |q| q.dotted_name().map(Alias::plain),
            )
        })
    }

    /// `dotted_name: dotted_name '.' NAME | NAME`
    fn dotted_name(&mut self) -> Option<Vec<Name>> {
        self.memoize(Rule::DottedName, |p| {
            one_of!(p;
                |q| {
                    let mut path = q.dotted_name()?;
                    q.lit(".")?;
                    path.push(q.identifier()?);
                    Some(path)
                },
                |q| q.identifier().map(|name| vec![name]),
            )
        })
    }
}
