//! Implementation for the `place` subcommand.

use std::fmt::Write as _;

use perch_geom::{EdgeOverflow, Offset, Placement};
use perch_place::{Candidate, Outcome, Positioner};
use serde::Serialize;
use tracing::info;

use crate::{
    cli::PlaceArgs,
    error::Result,
    scene::SceneFile,
};

/// One evaluated candidate, for output.
#[derive(Debug, Clone, Serialize)]
struct CandidateRow {
    /// The candidate.
    placement: Placement,
    /// Offset it would be written at.
    offset: Offset,
    /// Scalar overlap.
    overlap: f64,
    /// Per-edge overflow.
    edges: EdgeOverflow,
}

impl From<Candidate> for CandidateRow {
    fn from(c: Candidate) -> Self {
        Self {
            placement: c.placement,
            offset: c.offset,
            overlap: c.overlap,
            edges: c.edges,
        }
    }
}

/// Result of a `place` run, for output.
#[derive(Debug, Clone, Serialize)]
struct Report {
    /// `skipped`, `fixed`, `fit` or `best-effort`.
    outcome: &'static str,
    /// Applied candidate.
    placement: Option<Placement>,
    /// Presentational class names for the applied candidate.
    classes: Option<(String, String)>,
    /// Offset written to the floating element.
    offset: Option<Offset>,
    /// Candidates measured.
    attempts: u32,
    /// Remaining overlap, when measured.
    overlap: Option<f64>,
    /// Dry-run evaluation, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<Vec<CandidateRow>>,
}

impl Report {
    /// Summarize an outcome.
    fn new(outcome: &Outcome, candidates: Option<Vec<CandidateRow>>) -> Self {
        let placed = outcome.placed();
        Self {
            outcome: outcome.kind(),
            placement: placed.map(|p| p.placement),
            classes: placed.map(|p| p.placement.class_names()),
            offset: placed.map(|p| p.offset),
            attempts: placed.map_or(0, |p| p.attempts),
            overlap: outcome.overlap(),
            candidates,
        }
    }

    /// Plain-text rendering.
    fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "outcome:   {}", self.outcome).ok();
        if let (Some(placement), Some((attached, aligned))) = (self.placement, &self.classes) {
            writeln!(out, "placement: {placement} ({attached} {aligned})").ok();
        }
        if let Some(offset) = self.offset {
            writeln!(out, "offset:    {offset}").ok();
        }
        writeln!(out, "attempts:  {}", self.attempts).ok();
        if let Some(overlap) = self.overlap {
            writeln!(out, "overlap:   {overlap:.3}").ok();
        }
        if let Some(rows) = &self.candidates {
            writeln!(out).ok();
            writeln!(
                out,
                "{:>3}  {:<14} {:<24} {:>9}  edges",
                "#", "candidate", "offset", "overlap"
            )
            .ok();
            for (i, row) in rows.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}  {:<14} {:<24} {:>9.3}  {}",
                    i + 1,
                    row.placement.to_string(),
                    row.offset.to_string(),
                    row.overlap,
                    row.edges
                )
                .ok();
            }
        }
        out
    }
}

/// Load a scene, run placement once, and print the result.
pub fn run(args: &PlaceArgs) -> Result<()> {
    let file = SceneFile::load(&args.scene)?;
    let config = file.config()?;
    let mut scene = file.build()?;
    let mut positioner = Positioner::configure(&config, file.profile.profile())?;

    let candidates = if args.candidates {
        let rows = positioner
            .candidates(&scene, file.anchor, file.floating, file.bounds)?
            .into_iter()
            .map(CandidateRow::from)
            .collect();
        Some(rows)
    } else {
        None
    };

    let outcome = positioner.place(&mut scene, file.anchor, file.floating, file.bounds)?;
    info!(
        outcome = outcome.kind(),
        placement = %positioner.placement(),
        writes = scene.writes().len(),
        "placement finished"
    );

    let report = Report::new(&outcome, candidates);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
