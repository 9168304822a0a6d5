use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use weiler::api::{
    cross_bridge, make_intersection_points, mark_entry_exit_points, return_clipped_polygons,
    Check, Polygon,
};

mod check;
mod io;
mod provenance;

use io::{from_polygon, read_json, to_polygon, write_json, BridgeOut, PairIn, StageResult, Suite};
use provenance::{Build, Provenance, Summary};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon clipping and bridge-crossing runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run a clipper stage on a JSON pair of polygons
    Clip {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Stage::Clip)]
        stage: Stage,
        #[arg(long)]
        out: PathBuf,
        /// Compare the result against this JSON file
        #[arg(long)]
        expected: Option<PathBuf>,
    },
    /// Print the optimal bridge-crossing schedule
    Bridge {
        #[arg(long, value_delimiter = ',', required = true)]
        times: Vec<u32>,
    },
    /// Run a JSON suite of clip and bridge cases
    Check {
        #[arg(long)]
        suite: PathBuf,
    },
    /// Print the git revision and library version as JSON
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Stage {
    Insert,
    Mark,
    Clip,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Stage::Insert => "insert",
            Stage::Mark => "mark",
            Stage::Clip => "clip",
        }
    }

    /// Marked polygons are compared with their labels.
    fn check(self) -> Check {
        match self {
            Stage::Mark => Check::Classified,
            _ => Check::Coordinates,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Clip {
            input,
            stage,
            out,
            expected,
        } => clip(&input, stage, &out, expected.as_deref()),
        Action::Bridge { times } => bridge(&times),
        Action::Check { suite } => run_check(&suite),
        Action::Report => report(),
    }
}

fn run_stage(stage: Stage, source: &Polygon, clip: &Polygon) -> Result<(StageResult, Summary)> {
    let pair = |s: &Polygon, c: &Polygon| {
        (
            StageResult::Pair {
                source: from_polygon(s),
                clip: from_polygon(c),
            },
            Summary::pair(s, c),
        )
    };
    let out = match stage {
        Stage::Insert => {
            let (s, c) = make_intersection_points(source, clip);
            pair(&s, &c)
        }
        Stage::Mark => {
            let (s, c) = mark_entry_exit_points(source, clip)?;
            pair(&s, &c)
        }
        Stage::Clip => {
            let regions = return_clipped_polygons(source, clip)?;
            (
                StageResult::Regions {
                    polygons: regions.iter().map(from_polygon).collect(),
                },
                Summary::regions(&regions),
            )
        }
    };
    Ok(out)
}

fn clip(input: &Path, stage: Stage, out: &Path, expected: Option<&Path>) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        stage = stage.as_str(),
        out = %out.display(),
        "clip"
    );
    let pair: PairIn = read_json(input)?;
    let (source, clip) = (to_polygon(&pair.source), to_polygon(&pair.clip));
    let (result, summary) = run_stage(stage, &source, &clip)?;
    write_json(out, &result)?;
    let record = Provenance::new(stage.as_str(), input, out, &source, &clip, summary);
    let sidecar = provenance::write_sidecar(&record)?;
    tracing::info!(provenance = %sidecar.display(), "wrote");

    if let Some(path) = expected {
        let want: StageResult = read_json(path)?;
        check::compare(stage.check(), &want, &result)?;
        tracing::info!(expected = %path.display(), "result matches");
    }
    Ok(())
}

fn bridge(times: &[u32]) -> Result<()> {
    tracing::info!(people = times.len(), "bridge");
    let c = cross_bridge(times);
    let out = BridgeOut {
        total: c.total,
        strategy: c.strategy,
    };
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    tracing::info!(suite = %path.display(), "check");
    let suite: Suite = read_json(path)?;
    let outcomes = check::run_suite(&suite);
    for o in &outcomes {
        println!("{o}");
    }
    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    tracing::info!(cases = outcomes.len(), failed, "check done");
    if failed > 0 {
        bail!("{failed} of {} cases failed", outcomes.len());
    }
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Build::current())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn pair_in() -> PairIn {
        serde_json::from_value(json!({
            "source": [[-1, -1], [-1, 1], [1, 1], [1, -1]],
            "clip": [[0, 0], [0, 2], [2, 2], [2, 0]]
        }))
        .unwrap()
    }

    #[test]
    fn stages_produce_expected_shapes() {
        let p = pair_in();
        let (s, c) = (to_polygon(&p.source), to_polygon(&p.clip));
        match run_stage(Stage::Insert, &s, &c).unwrap() {
            (StageResult::Pair { source, clip }, summary) => {
                assert_eq!((source.len(), clip.len()), (6, 6));
                assert_eq!(
                    summary,
                    Summary::Pair {
                        source_vertices: 6,
                        clip_vertices: 6,
                        intersections: 2
                    }
                );
            }
            other => panic!("unexpected {other:?}"),
        }
        match run_stage(Stage::Clip, &s, &c).unwrap() {
            (StageResult::Regions { polygons }, summary) => {
                assert_eq!(polygons.len(), 1);
                assert_eq!(
                    summary,
                    Summary::Regions {
                        count: 1,
                        vertices: 4,
                        area: 1.0
                    }
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn clip_writes_output_and_sidecar_and_checks_expected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pair.json");
        let out = dir.path().join("out/result.json");
        let expected = dir.path().join("expected.json");
        write_json(&input, &pair_in()).unwrap();
        write_json(
            &expected,
            &json!({"polygons": [[[0, 0], [1, 0], [1, 1], [0, 1]]]}),
        )
        .unwrap();

        clip(&input, Stage::Clip, &out, Some(&expected)).unwrap();
        assert!(out.exists());
        let sidecar: Provenance =
            read_json(&dir.path().join("out/result.provenance.json")).unwrap();
        assert_eq!(sidecar.stage, "clip");
        assert_eq!(sidecar.input, input);
        assert_eq!((sidecar.source_vertices, sidecar.clip_vertices), (4, 4));
        assert!(matches!(sidecar.result, Summary::Regions { count: 1, .. }));

        write_json(&expected, &json!({"polygons": []})).unwrap();
        assert!(clip(&input, Stage::Clip, &out, Some(&expected)).is_err());
    }
}
