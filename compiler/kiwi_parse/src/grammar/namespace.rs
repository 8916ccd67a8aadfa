//! Namespaces and their visibility blocks.
//!
//! Statements outside `private:` and `public:` land in the default bucket,
//! in source order.

use kiwi_ir::{StmtId, StmtKind};

use super::{Buckets, LabelledBlock};
use crate::rule::Rule;
use crate::Parser;

impl Parser<'_> {
    /// `namespace_def: 'namespace' NAME ':' hiding_block`
    pub(crate) fn namespace_def(&mut self) -> Option<StmtId> {
        self.memoize(Rule::NamespaceDef, |p| {
            let start = p.cursor.mark();
            p.lit("namespace")?;
            let name = p.identifier()?;
            p.lit(":")?;
            let Buckets { private, public, default } = p.hiding_block()?;
            Some(p.alloc_stmt(
                StmtKind::NamespaceDef {
                    name,
                    private_body: private,
                    public_body: public,
                    default_body: default,
                },
                start,
            ))
        })
    }

    /// `hiding_block: NEWLINE INDENT blocks DEDENT NEWLINE`
    fn hiding_block(&mut self) -> Option<Buckets> {
        self.memoize(Rule::HidingBlock, |p| {
            p.newline()?;
            p.indent()?;
            let buckets = p.blocks()?;
            p.dedent()?;
            p.newline()?;
            Some(buckets)
        })
    }

    /// ```text
    /// blocks: private_block public_block
    ///       | public_block private_block
    ///       | private_block
    ///       | public_block
    ///       | statements
    /// ```
    fn blocks(&mut self) -> Option<Buckets> {
        self.memoize(Rule::Blocks, |p| {
            one_of!(p;
                |q| {
                    let private = q.private_block()?;
                    let public = q.public_block()?;
                    Some(Buckets {
                        default: private.unlabelled().chain(public.unlabelled()).collect(),
                        private: private.body,
                        public: public.body,
                    })
                },
                |q| {
                    let public = q.public_block()?;
                    let private = q.private_block()?;
                    Some(Buckets {
                        default: public.unlabelled().chain(private.unlabelled()).collect(),
                        private: private.body,
                        public: public.body,
                    })
                },
                |q| {
                    let private = q.private_block()?;
                    Some(Buckets {
                        default: private.unlabelled().collect(),
                        private: private.body,
                        public: Vec::new(),
                    })
                },
                |q| {
                    let public = q.public_block()?;
                    Some(Buckets {
                        default: public.unlabelled().collect(),
                        private: Vec::new(),
                        public: public.body,
                    })
                },
                |q| {
                    let default = q.statements()?;
                    Some(Buckets { default, ..Buckets::default() })
                },
            )
        })
    }

    fn private_block(&mut self) -> Option<LabelledBlock> {
        self.memoize(Rule::PrivateBlock, |p| p.labelled_block("private"))
    }

    fn public_block(&mut self) -> Option<LabelledBlock> {
        self.memoize(Rule::PublicBlock, |p| p.labelled_block("public"))
    }

    /// ```text
    /// statements LABEL ':' block statements
    /// | statements LABEL ':' block
    /// | LABEL ':' block statements
    /// | LABEL ':' block
    /// ```
    fn labelled_block(&mut self, label: &'static str) -> Option<LabelledBlock> {
        one_of!(self;
            |p| {
                let before = p.statements()?;
                let body = p.label(label)?;
                let after = p.statements()?;
                Some(LabelledBlock { before, body, after })
            },
            |p| {
                let before = p.statements()?;
                let body = p.label(label)?;
                Some(LabelledBlock { before, body, after: Vec::new() })
            },
            |p| {
                let body = p.label(label)?;
                let after = p.statements()?;
                Some(LabelledBlock { before: Vec::new(), body, after })
            },
            |p| {
                let body = p.label(label)?;
                Some(LabelledBlock { before: Vec::new(), body, after: Vec::new() })
            },
        )
    }

    fn label(&mut self, label: &'static str) -> Option<Vec<StmtId>> {
        self.lit(label)?;
        self.lit(":")?;
        self.block()
    }
}
