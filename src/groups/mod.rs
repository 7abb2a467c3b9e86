pub mod defs;
pub mod loader;

pub use defs::{GroupDef, builtin_groups};

/// A coarse group resolved against the columns of one proportions table.
#[derive(Debug, Clone)]
pub struct CellGroup {
    pub name: &'static str,
    pub columns: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct GroupSet {
    pub groups: Vec<CellGroup>,
}

#[derive(Debug, Clone)]
pub struct GroupAudit {
    pub group: String,
    pub members_defined: usize,
    pub members_present: usize,
    pub missing_members: Vec<String>,
}

#[cfg(test)]
#[path = "../../tests/src_inline/groups/tests.rs"]
mod tests;
