//! Grammar terms and their interner.
//!
//! A term is identified by its `(name, alias)` pair. The name is what the
//! grammar spells; the alias is the callable a builder exposes for it, and
//! defaults to the name. Two spellings of the same pair share one [`TermId`].

use indexmap::IndexSet;
use serde::Serialize;

/// Dense handle to an interned term. Ordered by insertion, not by name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct TermId(u32);

impl TermId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Create a TermId from a raw index. The index must come from the same table.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Term {
    name: String,
    alias: String,
}

impl Term {
    /// A term whose callable name is its own name.
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
        }
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
        }
    }

    /// Declared name, as spelled before `:` in the grammar.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Callable name used by builder calls.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn is_aliased(&self) -> bool {
        self.name != self.alias
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_aliased() {
            write!(f, "{}:{}", self.name, self.alias)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Term interner: every distinct `(name, alias)` pair gets one [`TermId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermTable {
    terms: IndexSet<Term>,
}

impl TermTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a term, returning the existing id if the pair was seen before.
    pub fn intern(&mut self, term: Term) -> TermId {
        let (index, _) = self.terms.insert_full(term);
        TermId(index as u32)
    }

    pub fn intern_plain(&mut self, name: &str) -> TermId {
        self.intern(Term::plain(name))
    }

    pub fn intern_aliased(&mut self, name: &str, alias: &str) -> TermId {
        self.intern(Term::aliased(name, alias))
    }

    /// Resolve an id back to its term.
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    #[inline]
    pub fn get(&self, id: TermId) -> &Term {
        &self.terms[id.index()]
    }

    #[inline]
    pub fn try_get(&self, id: TermId) -> Option<&Term> {
        self.terms.get_index(id.index())
    }

    pub fn find(&self, name: &str, alias: &str) -> Option<TermId> {
        self.terms
            .get_index_of(&Term::aliased(name, alias))
            .map(|i| TermId(i as u32))
    }

    /// All terms dispatched under the callable `alias`, in insertion order.
    pub fn by_alias<'a>(&'a self, alias: &'a str) -> impl Iterator<Item = TermId> + 'a {
        self.iter()
            .filter(move |(_, t)| t.alias() == alias)
            .map(|(id, _)| id)
    }

    /// Distinct callable names, in first-seen order.
    pub fn callables(&self) -> Vec<&str> {
        let mut seen = IndexSet::new();
        for term in &self.terms {
            seen.insert(term.alias());
        }
        seen.into_iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, &Term)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, t)| (TermId(i as u32), t))
    }
}
