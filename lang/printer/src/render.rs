use pretty::DocAllocator;

use tsgen_ast::{
    CaseClause, FieldSyntax, FuncDecl, MethodSyntax, Node, Package, Param, Program, Stmt, TypeSwitchStmt,
    TypeSyntax,
};

use crate::tokens::*;
use crate::types::{Alloc, Builder, Print};

impl<'a> Print<'a> for TypeSyntax {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            TypeSyntax::Ident(name) => alloc.text(name.as_str()),
            TypeSyntax::Pointer(inner) => alloc.text("*").append(inner.print(alloc)),
            TypeSyntax::Slice(inner) => alloc.text("[]").append(inner.print(alloc)),
            TypeSyntax::Array(n, inner) => {
                alloc.text("[").append(alloc.text(n.to_string())).append(alloc.text("]")).append(inner.print(alloc))
            }
            TypeSyntax::Map(k, v) => {
                alloc.text(MAP).append(alloc.text("[")).append(k.print(alloc)).append(alloc.text("]")).append(v.print(alloc))
            }
            TypeSyntax::Chan(dir, inner) => {
                alloc.text(dir.to_string()).append(alloc.space()).append(inner.print(alloc))
            }
            TypeSyntax::Func { params, results, variadic } => {
                let p = print_type_list(params, *variadic, alloc);
                let head = alloc.text(FUNC).append(alloc.text("(")).append(p).append(alloc.text(")"));
                print_results(head, results, alloc)
            }
            TypeSyntax::Struct(fields) => {
                let body = alloc.intersperse(fields.iter().map(|f| f.print(alloc)), alloc.text("; "));
                alloc.text(STRUCT).append(alloc.text("{")).append(body).append(alloc.text("}"))
            }
            TypeSyntax::Interface(methods) => {
                let body = alloc.intersperse(methods.iter().map(|m| m.print(alloc)), alloc.text("; "));
                alloc.text(INTERFACE).append(alloc.text("{")).append(body).append(alloc.text("}"))
            }
        }
    }
}

impl<'a> Print<'a> for FieldSyntax {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let base = alloc.text(self.name.as_str()).append(alloc.space()).append(self.ty.print(alloc));
        if self.tag.is_empty() {
            base
        } else {
            base.append(alloc.space()).append(alloc.text("`")).append(alloc.text(self.tag.as_str())).append(alloc.text("`"))
        }
    }
}

impl<'a> Print<'a> for MethodSyntax {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let name = alloc.text(self.name.as_str());
        match &self.sig {
            TypeSyntax::Func { params, results, variadic } => {
                let p = print_type_list(params, *variadic, alloc);
                print_results(name.append(alloc.text("(")).append(p).append(alloc.text(")")), results, alloc)
            }
            other => name.append(alloc.space()).append(other.print(alloc)),
        }
    }
}

fn print_type_list<'a>(types: &'a [TypeSyntax], variadic: bool, alloc: &'a Alloc<'a>) -> Builder<'a> {
    let last = types.len().saturating_sub(1);
    let docs = types.iter().enumerate().map(|(i, t)| {
        if variadic && i == last {
            if let TypeSyntax::Slice(elem) = t {
                alloc.text("...").append(elem.print(alloc))
            } else {
                alloc.text("...").append(t.print(alloc))
            }
        } else {
            t.print(alloc)
        }
    });
    alloc.intersperse(docs, alloc.text(COMMA).append(alloc.space()))
}

fn print_results<'a>(head: Builder<'a>, results: &'a [TypeSyntax], alloc: &'a Alloc<'a>) -> Builder<'a> {
    match results.len() {
        0 => head,
        1 => head.append(alloc.space()).append(results[0].print(alloc)),
        _ => {
            let body = alloc.intersperse(results.iter().map(|r| r.print(alloc)), alloc.text(COMMA).append(alloc.space()));
            head.append(alloc.space()).append(alloc.text("(")).append(body).append(alloc.text(")"))
        }
    }
}

impl<'a> Print<'a> for Node {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            Node::Ident(name) => alloc.text(name.as_str()),
            Node::Selector(base, field) => base.print(alloc).append(alloc.text(DOT)).append(alloc.text(field.as_str())),
            Node::Call(callee, args) => {
                let body = alloc.intersperse(args.iter().map(|a| a.print(alloc)), alloc.text(COMMA).append(alloc.space()));
                callee.print(alloc).append(alloc.text("(")).append(body).append(alloc.text(")"))
            }
            Node::TypeArg(syntax) => syntax.print(alloc),
            Node::Block(stmts) => {
                let body = alloc.intersperse(stmts.iter().map(|s| s.print(alloc)), alloc.hardline());
                alloc.text("{").append(alloc.hardline().append(body).nest(INDENT)).append(alloc.hardline()).append(alloc.text("}"))
            }
            Node::Opaque(text) => alloc.text(text.as_str()),
        }
    }
}

impl<'a> Print<'a> for CaseClause {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let types = alloc.intersperse(self.types.iter().map(|t| t.print(alloc)), alloc.text(COMMA).append(alloc.space()));
        let head = alloc.text(CASE).append(alloc.space()).append(types).append(alloc.text(COLON));
        head.append(print_body(&self.body, alloc))
    }
}

fn print_body<'a>(body: &'a [Node], alloc: &'a Alloc<'a>) -> Builder<'a> {
    if body.is_empty() {
        return alloc.nil();
    }
    let joined = alloc.intersperse(body.iter().map(|n| n.print(alloc)), alloc.hardline());
    alloc.hardline().append(joined).nest(INDENT)
}

impl<'a> Print<'a> for TypeSwitchStmt {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let head = alloc
            .text(SWITCH)
            .append(alloc.space())
            .append(alloc.text(self.target.as_str()))
            .append(alloc.text(" := "))
            .append(alloc.text(self.target.as_str()))
            .append(alloc.text(".(type) {"));

        let clauses = self.clauses.iter().map(|c| c.print(alloc));
        let default = self.default.as_ref().map(|body| {
            alloc.text(DEFAULT).append(alloc.text(COLON)).append(print_body(body, alloc))
        });
        let all = clauses.chain(default);
        let body = alloc.intersperse(all, alloc.hardline());

        head.append(alloc.hardline().append(body).nest(INDENT)).append(alloc.hardline()).append(alloc.text("}"))
    }
}

impl<'a> Print<'a> for Stmt {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            Stmt::TypeSwitch(s) => s.print(alloc),
            Stmt::Other(n) => n.print(alloc),
        }
    }
}

impl<'a> Print<'a> for Param {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(self.name.as_str()).append(alloc.space()).append(self.ty.print(alloc))
    }
}

impl<'a> Print<'a> for FuncDecl {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let params = alloc.intersperse(self.params.iter().map(|p| p.print(alloc)), alloc.text(COMMA).append(alloc.space()));
        let head = alloc
            .text(FUNC)
            .append(alloc.space())
            .append(alloc.text(self.name.as_str()))
            .append(alloc.text("("))
            .append(params)
            .append(alloc.text(") {"));

        let body = alloc.intersperse(self.body.iter().map(|s| s.print(alloc)), alloc.hardline());
        head.append(alloc.hardline().append(body).nest(INDENT)).append(alloc.hardline()).append(alloc.text("}"))
    }
}

impl<'a> Print<'a> for Package {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let head = alloc.text(PACKAGE).append(alloc.space()).append(alloc.text(self.name.as_str()));
        let funcs =
            alloc.intersperse(self.funcs.iter().map(|f| f.print(alloc)), alloc.hardline().append(alloc.hardline()));
        head.append(alloc.hardline()).append(alloc.hardline()).append(funcs)
    }
}

impl<'a> Print<'a> for Program {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.intersperse(
            self.packages.iter().map(|p| p.print(alloc)),
            alloc.hardline().append(alloc.hardline()).append(alloc.hardline()),
        )
    }
}
