use std::fmt;

/// Channel direction as it appears in a type expression.
///
/// `Both` is the unrestricted `chan T`; `Send`/`Recv` are the directional
/// forms `chan<- T` / `<-chan T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDir {
    Send,
    Recv,
    Both,
}

impl ChanDir {
    /// `self` (a template's declared direction) accepts `other` (an
    /// observed/ground direction) per the unifier's widening rule:
    /// `Both` matches any direction, a specific direction matches only itself.
    pub fn accepts(self, other: ChanDir) -> bool {
        matches!(self, ChanDir::Both) || self == other
    }
}

impl fmt::Display for ChanDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChanDir::Send => write!(f, "chan<-"),
            ChanDir::Recv => write!(f, "<-chan"),
            ChanDir::Both => write!(f, "chan"),
        }
    }
}

/// A struct field, compared by name, type and tag: a tag mismatch is a
/// distinct unification failure from a type mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    pub tag: String,
}

/// One method of an interface's method set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    pub name: String,
    pub sig: Type,
}

/// The canonical tagged type representation shared by templates and ground
/// types. `Var` only ever occurs inside a template; a ground `Type`
/// returned by the unifier as a binding value never contains one
/// (`is_ground` is the invariant check for that).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A resolved, qualified name, e.g. `"io.Reader"`. Two `Named`s match
    /// only by exact qualified name, never structurally, never via
    /// assignability or interface satisfaction.
    Named(String),
    /// A predeclared basic type, e.g. `"int"`, `"bool"`, `"string"`.
    Basic(String),
    /// A type variable. Only ever appears inside a template `Type`.
    Var(String),
    Pointer(Box<Type>),
    Slice(Box<Type>),
    Array(u64, Box<Type>),
    Map(Box<Type>, Box<Type>),
    Chan(ChanDir, Box<Type>),
    Func {
        params: Vec<Type>,
        results: Vec<Type>,
        variadic: bool,
    },
    Struct(Vec<Field>),
    Interface(Vec<Method>),
}

impl Type {
    /// The empty interface `interface{}`, i.e. an interface with no methods.
    /// `TypeSwitchView` requires the switched expression to have exactly
    /// this type.
    pub fn empty_interface() -> Type {
        Type::Interface(Vec::new())
    }

    pub fn is_empty_interface(&self) -> bool {
        matches!(self, Type::Interface(methods) if methods.is_empty())
    }

    /// True iff no `Var` occurs anywhere in the type. Ground types are the
    /// only values the unifier is allowed to bind a variable to.
    pub fn is_ground(&self) -> bool {
        match self {
            Type::Var(_) => false,
            Type::Named(_) | Type::Basic(_) => true,
            Type::Pointer(t) | Type::Slice(t) => t.is_ground(),
            Type::Array(_, t) => t.is_ground(),
            Type::Map(k, v) => k.is_ground() && v.is_ground(),
            Type::Chan(_, t) => t.is_ground(),
            Type::Func { params, results, .. } => {
                params.iter().all(Type::is_ground) && results.iter().all(Type::is_ground)
            }
            Type::Struct(fields) => fields.iter().all(|f| f.ty.is_ground()),
            Type::Interface(methods) => methods.iter().all(|m| m.sig.is_ground()),
        }
    }

    /// Every variable identifier occurring in the type, in first-seen order,
    /// without duplicates. Used to validate templates and in tests.
    pub fn vars(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut Vec<String>) {
        match self {
            Type::Var(name) => {
                if !out.contains(name) {
                    out.push(name.clone());
                }
            }
            Type::Named(_) | Type::Basic(_) => {}
            Type::Pointer(t) | Type::Slice(t) => t.collect_vars(out),
            Type::Array(_, t) => t.collect_vars(out),
            Type::Map(k, v) => {
                k.collect_vars(out);
                v.collect_vars(out);
            }
            Type::Chan(_, t) => t.collect_vars(out),
            Type::Func { params, results, .. } => {
                for p in params {
                    p.collect_vars(out);
                }
                for r in results {
                    r.collect_vars(out);
                }
            }
            Type::Struct(fields) => {
                for f in fields {
                    f.ty.collect_vars(out);
                }
            }
            Type::Interface(methods) => {
                for m in methods {
                    m.sig.collect_vars(out);
                }
            }
        }
    }
}

/// The canonical source-form string of a type, used for clause deduplication.
/// This is deliberately a plain recursive formatter, not the layout-aware
/// pretty-printer in `tsgen-printer`, dedup only needs a stable, unique
/// string, not nicely wrapped output.
pub fn print_type(ty: &Type) -> String {
    let mut out = String::new();
    write_type(ty, &mut out);
    out
}

fn write_type(ty: &Type, out: &mut String) {
    match ty {
        Type::Named(name) => out.push_str(name),
        Type::Basic(name) => out.push_str(name),
        Type::Var(name) => out.push_str(name),
        Type::Pointer(t) => {
            out.push('*');
            write_type(t, out);
        }
        Type::Slice(t) => {
            out.push_str("[]");
            write_type(t, out);
        }
        Type::Array(n, t) => {
            out.push('[');
            out.push_str(&n.to_string());
            out.push(']');
            write_type(t, out);
        }
        Type::Map(k, v) => {
            out.push_str("map[");
            write_type(k, out);
            out.push(']');
            write_type(v, out);
        }
        Type::Chan(dir, t) => {
            out.push_str(&dir.to_string());
            out.push(' ');
            write_type(t, out);
        }
        Type::Func { params, results, variadic } => {
            out.push_str("func(");
            write_comma_separated(params, out, *variadic);
            out.push(')');
            match results.len() {
                0 => {}
                1 => {
                    out.push(' ');
                    write_type(&results[0], out);
                }
                _ => {
                    out.push_str(" (");
                    write_comma_separated(results, out, false);
                    out.push(')');
                }
            }
        }
        Type::Struct(fields) => {
            out.push_str("struct{");
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                out.push_str(&field.name);
                out.push(' ');
                write_type(&field.ty, out);
                if !field.tag.is_empty() {
                    out.push(' ');
                    out.push('`');
                    out.push_str(&field.tag);
                    out.push('`');
                }
            }
            out.push('}');
        }
        Type::Interface(methods) => {
            out.push_str("interface{");
            for (i, method) in methods.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                out.push_str(&method.name);
                if let Type::Func { params, results, variadic } = &method.sig {
                    out.push('(');
                    write_comma_separated(params, out, *variadic);
                    out.push(')');
                    match results.len() {
                        0 => {}
                        1 => {
                            out.push(' ');
                            write_type(&results[0], out);
                        }
                        _ => {
                            out.push_str(" (");
                            write_comma_separated(results, out, false);
                            out.push(')');
                        }
                    }
                }
            }
            out.push('}');
        }
    }
}

fn write_comma_separated(types: &[Type], out: &mut String, variadic: bool) {
    for (i, t) in types.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if variadic && i == types.len() - 1 {
            out.push_str("...");
            if let Type::Slice(elem) = t {
                write_type(elem, out);
            } else {
                write_type(t, out);
            }
        } else {
            write_type(t, out);
        }
    }
}
