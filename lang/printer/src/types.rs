pub type Alloc<'a> = pretty::Arena<'a>;
pub type Builder<'a> = pretty::DocBuilder<'a, Alloc<'a>>;

/// Every printable fragment of the generic program model implements this
/// directly against the allocator, building up `Builder`s node by node
/// rather than through a `Display` impl.
pub trait Print<'a> {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a>;
}

impl<'a, T: Print<'a>> Print<'a> for Box<T> {
    fn print(&'a self, alloc: &'a Alloc<'a>) -> Builder<'a> {
        T::print(self, alloc)
    }
}
