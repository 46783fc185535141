use std::fmt::{Debug, Display};

/// Specific kind of a [`GenericName`].
#[derive(Debug, Copy, Clone)]
pub enum NameKind<'a> {
    /// Name made of a single element.
    Local(&'a dyn LocalName),
    /// Composite name made of a head and a tail.
    Scoped(&'a dyn ScopedName),
}

/// A sequence of identifiers rooted within the context of a [`NameSpace`].
///
/// The [`Display`] implementation writes the name relative to its scope, with the separator of the name space
/// between the parsed names.
pub trait GenericName: Display + Debug {
    /// Scope (name space) in which this name is local.
    fn scope(&self) -> Option<&dyn NameSpace>;

    /// Number of levels in this name.
    fn depth(&self) -> usize;

    /// Sequence of local names making this name.
    fn parsed_names(&self) -> Vec<&dyn LocalName>;

    /// First element of [`parsed_names`](Self::parsed_names).
    fn head(&self) -> &dyn LocalName;

    /// Last element of [`parsed_names`](Self::parsed_names).
    fn tip(&self) -> &dyn LocalName;

    /// String form of this name including the names of all parent scopes.
    fn to_fully_qualified_name(&self) -> String;

    /// Specific kind of this name.
    fn kind(&self) -> NameKind<'_>;
}

/// Identifier within a [`NameSpace`] for a local object.
pub trait LocalName: GenericName {}

/// A composite of a [`LocalName`] for locating another name space and a name valid in that space.
pub trait ScopedName: GenericName {}

/// A domain in which names are defined.
pub trait NameSpace: Debug {
    /// Whether this name space is the root of the hierarchy.
    fn is_global(&self) -> bool;

    /// Identifier of this name space.
    fn name(&self) -> Option<&dyn GenericName>;
}
