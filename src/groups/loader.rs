use crate::groups::defs::GroupDef;
use crate::groups::{CellGroup, GroupAudit, GroupSet};

pub fn resolve_groups(defs: &[GroupDef], categories: &[String]) -> (GroupSet, Vec<GroupAudit>) {
    let mut groups = Vec::with_capacity(defs.len());
    let mut audits = Vec::with_capacity(defs.len());

    for def in defs {
        let (group, audit) = map_group(def, categories);
        groups.push(group);
        audits.push(audit);
    }

    (GroupSet { groups }, audits)
}

fn map_group(def: &GroupDef, categories: &[String]) -> (CellGroup, GroupAudit) {
    let mut columns = Vec::new();
    let mut missing = Vec::new();

    for &member in def.members {
        if let Some(idx) = categories.iter().position(|c| c.trim() == member) {
            columns.push(idx);
        } else {
            missing.push(member.to_string());
        }
    }

    let audit = GroupAudit {
        group: def.name.to_string(),
        members_defined: def.members.len(),
        members_present: columns.len(),
        missing_members: missing,
    };

    let group = CellGroup {
        name: def.name,
        columns,
    };

    (group, audit)
}

/// Every expected fine category absent from the table, in mapping order.
pub fn missing_members(audits: &[GroupAudit]) -> Vec<String> {
    audits
        .iter()
        .flat_map(|a| a.missing_members.iter().cloned())
        .collect()
}
