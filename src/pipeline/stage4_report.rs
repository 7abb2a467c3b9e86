use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::pipeline::{ScoreMode, ScoreReport};
use crate::report::json::render_summary_json;
use crate::report::{build_summary, format_score};

pub const SCORES_FILE: &str = "imth_scores.tsv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const GROUPS_FILE: &str = "groups_report.tsv";

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub report: &'a ScoreReport,
    pub tool_version: String,
    pub input_path: Option<PathBuf>,
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_scores_tsv(input.report, &out_dir.join(SCORES_FILE))?;

    let summary = build_summary(
        input.report,
        &input.tool_version,
        input
            .input_path
            .as_ref()
            .map(|p| p.display().to_string())
            .as_deref(),
    );
    let json = render_summary_json(&summary).map_err(std::io::Error::other)?;
    write_text(&out_dir.join(SUMMARY_FILE), &json)?;

    if input.report.mode == ScoreMode::Aggregate {
        write_groups_report(input.report, &out_dir.join(GROUPS_FILE))?;
    }

    tracing::info!(out = %out_dir.display(), "wrote ImTH reports");
    Ok(())
}

/// One row per sample in input order: `Sample`, `ImTH_Score`.
pub fn write_scores_tsv(report: &ScoreReport, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "Sample\tImTH_Score")?;
    for s in &report.scores {
        writeln!(w, "{}\t{}", s.sample, format_score(s.score))?;
    }
    w.flush()
}

fn write_groups_report(report: &ScoreReport, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "group\tmembers_defined\tmembers_present\tmissing_members")?;
    for audit in &report.group_audits {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            audit.group,
            audit.members_defined,
            audit.members_present,
            audit.missing_members.join(",")
        )?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
