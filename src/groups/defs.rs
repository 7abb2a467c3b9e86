#[derive(Debug, Clone, Copy)]
pub struct GroupDef {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

const B_CELLS: &[&str] = &["B cells naive", "B cells memory"];
const PLASMA_CELLS: &[&str] = &["Plasma cells"];
const T_CELLS_CD8: &[&str] = &["T cells CD8"];
const T_CELLS_CD4: &[&str] = &[
    "T cells CD4 naive",
    "T cells CD4 memory resting",
    "T cells CD4 memory activated",
];
const T_CELLS_FH: &[&str] = &["T cells follicular helper"];
const TREGS: &[&str] = &["T cells regulatory (Tregs)"];
const T_CELLS_GD: &[&str] = &["T cells gamma delta"];
const NK_CELLS: &[&str] = &["NK cells resting", "NK cells activated"];
const MONOCYTES: &[&str] = &["Monocytes"];
const MACROPHAGES: &[&str] = &["Macrophages M0", "Macrophages M1", "Macrophages M2"];
const DENDRITIC_CELLS: &[&str] = &["Dendritic cells resting", "Dendritic cells activated"];
const MAST_CELLS: &[&str] = &["Mast cells resting", "Mast cells activated"];
const EOSINOPHILS: &[&str] = &["Eosinophils"];
const NEUTROPHILS: &[&str] = &["Neutrophils"];

/// LM22 fine cell types folded into 14 coarse immune groups.
const LM22_TO_COARSE: &[GroupDef] = &[
    GroupDef {
        name: "B cells",
        members: B_CELLS,
    },
    GroupDef {
        name: "Plasma cells",
        members: PLASMA_CELLS,
    },
    GroupDef {
        name: "T cells CD8",
        members: T_CELLS_CD8,
    },
    GroupDef {
        name: "T cells CD4",
        members: T_CELLS_CD4,
    },
    GroupDef {
        name: "T cells follicular helper",
        members: T_CELLS_FH,
    },
    GroupDef {
        name: "Tregs",
        members: TREGS,
    },
    GroupDef {
        name: "T cells gamma delta",
        members: T_CELLS_GD,
    },
    GroupDef {
        name: "NK cells",
        members: NK_CELLS,
    },
    GroupDef {
        name: "Monocytes",
        members: MONOCYTES,
    },
    GroupDef {
        name: "Macrophages",
        members: MACROPHAGES,
    },
    GroupDef {
        name: "Dendritic cells",
        members: DENDRITIC_CELLS,
    },
    GroupDef {
        name: "Mast cells",
        members: MAST_CELLS,
    },
    GroupDef {
        name: "Eosinophils",
        members: EOSINOPHILS,
    },
    GroupDef {
        name: "Neutrophils",
        members: NEUTROPHILS,
    },
];

pub fn builtin_groups() -> &'static [GroupDef] {
    LM22_TO_COARSE
}
