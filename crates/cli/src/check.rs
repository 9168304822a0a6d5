//! Result comparison for `clip --expected` and the `check` suite runner.

use anyhow::{bail, Context, Result};
use weiler::api::{
    cross_bridge, match_polygon_sets, return_clipped_polygons, verify_strategy, Case, Check,
    Crossing, Outcome,
};

use crate::io::{to_polygon, StageResult, Suite};

/// Compare a stage result against the expected one.
pub fn compare(check: Check, expected: &StageResult, actual: &StageResult) -> Result<()> {
    match (expected, actual) {
        (
            StageResult::Pair { source, clip },
            StageResult::Pair {
                source: got_source,
                clip: got_clip,
            },
        ) => {
            to_polygon(source)
                .same_as(&to_polygon(got_source), check)
                .context("source polygon")?;
            to_polygon(clip)
                .same_as(&to_polygon(got_clip), check)
                .context("clip polygon")?;
        }
        (StageResult::Regions { polygons }, StageResult::Regions { polygons: got }) => {
            let expected: Vec<_> = polygons.iter().map(|p| to_polygon(p)).collect();
            let actual: Vec<_> = got.iter().map(|p| to_polygon(p)).collect();
            match_polygon_sets(&expected, &actual)?;
        }
        _ => bail!("expected and actual results have different shapes"),
    }
    Ok(())
}

/// Run every case of the suite, clipper cases first.
pub fn run_suite(suite: &Suite) -> Vec<Outcome> {
    let mut outcomes = Vec::with_capacity(suite.clip.len() + suite.bridge.len());
    for case in &suite.clip {
        let source = to_polygon(&case.source);
        let clip = to_polygon(&case.clip);
        let expected: Vec<_> = case.expected.iter().map(|p| to_polygon(p)).collect();
        outcomes.push(Case::new(format!("clip/{}", case.name)).run(
            || return_clipped_polygons(&source, &clip),
            |res| match res {
                Ok(got) => match_polygon_sets(&expected, got).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            },
        ));
    }
    for case in &suite.bridge {
        outcomes.push(Case::new(format!("bridge/{}", case.name)).run(
            || cross_bridge(&case.times),
            |c: &Crossing| {
                if c.total != case.total {
                    return Err(format!(
                        "total time is {} (expected: {})",
                        c.total, case.total
                    ));
                }
                verify_strategy(&case.times, c).map_err(|e| e.to_string())
            },
        ));
    }
    outcomes
}
