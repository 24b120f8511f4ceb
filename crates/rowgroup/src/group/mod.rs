//! Group materialization: shortcut resolution, boundary scanning, and the
//! builder that turns an anchor row into a rendered group.


pub mod builder;
pub mod resolver;
pub mod scanner;

pub use builder::{BuildConfig, GroupBuilder, RenderFailurePolicy};
pub use resolver::ShortcutResolver;
pub use scanner::GroupScanner;

use crate::model::{Row, RowId};

///
/// Group
///
/// An anchor row plus the ordered members that were scanned and rendered
/// behind it. Members never include the anchor; a group of one is an
/// anchor with no members.
///

#[derive(Debug)]
pub struct Group<U> {
    anchor: Row,
    members: Vec<GroupMember<U>>,
}

impl<U> Group<U> {
    #[must_use]
    pub(crate) const fn new(anchor: Row, members: Vec<GroupMember<U>>) -> Self {
        Self { anchor, members }
    }

    #[must_use]
    pub const fn anchor(&self) -> &Row {
        &self.anchor
    }

    #[must_use]
    pub fn members(&self) -> &[GroupMember<U>] {
        &self.members
    }

    /// Total rows in the group, anchor included.
    #[must_use]
    pub const fn total_rows(&self) -> usize {
        1 + self.members.len()
    }

    /// Ids of every row the group consumed, anchor first.
    pub fn row_ids(&self) -> impl Iterator<Item = RowId> + '_ {
        std::iter::once(self.anchor.id).chain(self.members.iter().map(|member| member.row.id))
    }
}

///
/// GroupMember
///

#[derive(Debug)]
pub struct GroupMember<U> {
    pub row: Row,
    pub rendered: U,
}
