//! Structural conversion from the JSON schema into `tsgen_ast`'s unresolved
//! (`TypeSyntax`, `Node`) shapes. None of this needs a type oracle: `parse`
//! is what turns `TypeSyntax` into a resolved `Type`, and that happens later,
//! once the oracle built from the same IR is available.

use tsgen_ast::{CaseClause, ChanDir, FieldSyntax, MethodSyntax, Node, Param, Stmt, TypeSwitchStmt, TypeSyntax};

use crate::schema::{
    IrCaseClause, IrChanDir, IrField, IrFunc, IrMethod, IrNode, IrParam, IrStmt, IrType, IrTypeSwitch,
};

impl From<&IrChanDir> for ChanDir {
    fn from(dir: &IrChanDir) -> ChanDir {
        match dir {
            IrChanDir::Send => ChanDir::Send,
            IrChanDir::Recv => ChanDir::Recv,
            IrChanDir::Both => ChanDir::Both,
        }
    }
}

impl From<&IrType> for TypeSyntax {
    fn from(ty: &IrType) -> TypeSyntax {
        match ty {
            IrType::Ident(name) => TypeSyntax::Ident(name.clone()),
            IrType::Pointer(inner) => TypeSyntax::Pointer(Box::new(inner.as_ref().into())),
            IrType::Slice(inner) => TypeSyntax::Slice(Box::new(inner.as_ref().into())),
            IrType::Array { len, elem } => TypeSyntax::Array(*len, Box::new(elem.as_ref().into())),
            IrType::Map { key, value } => {
                TypeSyntax::Map(Box::new(key.as_ref().into()), Box::new(value.as_ref().into()))
            }
            IrType::Chan { dir, elem } => TypeSyntax::Chan(dir.into(), Box::new(elem.as_ref().into())),
            IrType::Func { params, results, variadic } => TypeSyntax::Func {
                params: params.iter().map(Into::into).collect(),
                results: results.iter().map(Into::into).collect(),
                variadic: *variadic,
            },
            IrType::Struct(fields) => TypeSyntax::Struct(fields.iter().map(Into::into).collect()),
            IrType::Interface(methods) => TypeSyntax::Interface(methods.iter().map(Into::into).collect()),
        }
    }
}

impl From<&IrField> for FieldSyntax {
    fn from(f: &IrField) -> FieldSyntax {
        FieldSyntax { name: f.name.clone(), ty: (&f.ty).into(), tag: f.tag.clone() }
    }
}

impl From<&IrMethod> for MethodSyntax {
    fn from(m: &IrMethod) -> MethodSyntax {
        MethodSyntax { name: m.name.clone(), sig: (&m.sig).into() }
    }
}

impl From<&IrNode> for Node {
    fn from(node: &IrNode) -> Node {
        match node {
            IrNode::Ident(name) => Node::Ident(name.clone()),
            IrNode::Selector { base, field } => Node::Selector(Box::new(base.as_ref().into()), field.clone()),
            IrNode::Call { callee, args } => {
                Node::Call(Box::new(callee.as_ref().into()), args.iter().map(Into::into).collect())
            }
            IrNode::TypeArg(ty) => Node::TypeArg(ty.into()),
            IrNode::Block(stmts) => Node::Block(stmts.iter().map(Into::into).collect()),
            IrNode::Opaque(s) => Node::Opaque(s.clone()),
        }
    }
}

impl From<&IrParam> for Param {
    fn from(p: &IrParam) -> Param {
        Param { name: p.name.clone(), ty: (&p.ty).into() }
    }
}

impl From<&IrCaseClause> for CaseClause {
    fn from(c: &IrCaseClause) -> CaseClause {
        CaseClause { types: c.types.iter().map(Into::into).collect(), body: c.body.iter().map(Into::into).collect() }
    }
}

impl From<&IrTypeSwitch> for TypeSwitchStmt {
    fn from(s: &IrTypeSwitch) -> TypeSwitchStmt {
        TypeSwitchStmt {
            target: s.target.clone(),
            clauses: s.clauses.iter().map(Into::into).collect(),
            default: s.default.as_ref().map(|nodes| nodes.iter().map(Into::into).collect()),
        }
    }
}

impl From<&IrStmt> for Stmt {
    fn from(stmt: &IrStmt) -> Stmt {
        match stmt {
            IrStmt::TypeSwitch(s) => Stmt::TypeSwitch(s.into()),
            IrStmt::Other(n) => Stmt::Other(n.into()),
        }
    }
}

pub fn convert_func(f: &IrFunc) -> tsgen_ast::FuncDecl {
    tsgen_ast::FuncDecl {
        name: f.name.clone(),
        params: f.params.iter().map(Into::into).collect(),
        body: f.body.iter().map(Into::into).collect(),
    }
}
