//! Entropy-based immune heterogeneity (ImTH) scoring over cell-type
//! proportion tables, plus a thin wrapper around external CIBERSORT
//! deconvolution.

pub mod deconv;
pub mod groups;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use deconv::{DeconvError, DeconvolutionRequest, Deconvolver, ExternalCibersort, run_deconvolution};
pub use groups::{GroupDef, builtin_groups};
pub use input::{InputError, ProportionTable, load_proportions};
pub use pipeline::stage2_normalize::NormalizationAudit;
pub use pipeline::stage3_entropy::{SampleScore, shannon_entropy};
pub use pipeline::{
    ScoreError, ScoreMode, ScoreReport, calculate_imth_score, calculate_imth_score_with_groups,
};
