use crate::types::{Alloc, Print};

pub const DEFAULT_WIDTH: usize = 100;

/// Renders the transformed program back to source text. This is what
/// `--write` persists and what standard output receives otherwise.
pub fn format(program: &tsgen_ast::Program) -> Vec<u8> {
    let alloc = Alloc::new();
    let mut buf = Vec::new();
    let doc_builder = program.print(&alloc);
    doc_builder.1.render(DEFAULT_WIDTH, &mut buf).expect("rendering to an in-memory buffer cannot fail");
    buf
}
