//! Hypermedia links attached to outward-facing representations.
//!
//! A link renders as `<href>;rel="rel"`, the same shape as an HTTP `Link`
//! header entry, so a collection of them reads naturally in logs and test
//! output.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Relation name of a link pointing back at the resource itself.
pub const SELF_REL: &str = "self";

/// A single navigation relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// `self` link for `id` under `base_path`.
    ///
    /// A trailing `/` on the base path is tolerated.
    pub fn self_link(base_path: &str, id: impl core::fmt::Display) -> Self {
        let base = base_path.trim_end_matches('/');
        Self::new(SELF_REL, format!("{base}/{id}"))
    }
}

impl ValueObject for Link {}

impl core::fmt::Display for Link {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<{}>;rel=\"{}\"", self.href, self.rel)
    }
}

/// Ordered set of links; at most one link per relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(Vec<Link>);

impl Links {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a link, replacing any existing link with the same relation.
    pub fn add(&mut self, link: Link) {
        match self.0.iter_mut().find(|l| l.rel == link.rel) {
            Some(existing) => *existing = link,
            None => self.0.push(link),
        }
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|l| l.rel == rel)
    }

    pub fn self_link(&self) -> Option<&Link> {
        self.get(SELF_REL)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.iter()
    }
}

impl ValueObject for Links {}

impl core::fmt::Display for Links {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, link) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{link}")?;
        }
        f.write_str("]")
    }
}
