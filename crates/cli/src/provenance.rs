use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use weiler::Polygon;

/// Build the binary runs from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub code_rev: String,
    pub version: String,
}

impl Build {
    pub fn current() -> Self {
        Self {
            code_rev: current_git_rev(),
            version: weiler::VERSION.to_string(),
        }
    }
}

/// Shape of a stage result, small enough to eyeball in the sidecar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// Augmented pair from `insert` or `mark`.
    Pair {
        source_vertices: usize,
        clip_vertices: usize,
        intersections: usize,
    },
    /// Regions from `clip`.
    Regions {
        count: usize,
        vertices: usize,
        area: f64,
    },
}

impl Summary {
    pub fn pair(source: &Polygon, clip: &Polygon) -> Self {
        Summary::Pair {
            source_vertices: source.len(),
            clip_vertices: clip.len(),
            intersections: source.intersection_count(),
        }
    }

    pub fn regions(regions: &[Polygon]) -> Self {
        Summary::Regions {
            count: regions.len(),
            vertices: regions.iter().map(Polygon::len).sum(),
            area: regions.iter().map(Polygon::area).sum(),
        }
    }
}

/// Contents of `<stem>.provenance.json`, written next to every `clip` result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(flatten)]
    pub build: Build,
    pub stage: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub source_vertices: usize,
    pub clip_vertices: usize,
    pub result: Summary,
}

impl Provenance {
    pub fn new(
        stage: &str,
        input: &Path,
        output: &Path,
        source: &Polygon,
        clip: &Polygon,
        result: Summary,
    ) -> Self {
        Self {
            build: Build::current(),
            stage: stage.to_string(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            source_vertices: source.len(),
            clip_vertices: clip.len(),
            result,
        }
    }
}

/// Write `record` next to `record.output` and return the sidecar path.
pub fn write_sidecar(record: &Provenance) -> Result<PathBuf> {
    let path = sidecar_path(&record.output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating provenance dir {}", parent.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "result".to_string());
    output.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        Polygon::from_points(&[
            (x0, y0),
            (x0, y0 + side),
            (x0 + side, y0 + side),
            (x0 + side, y0),
        ])
    }

    #[test]
    fn sidecar_sits_next_to_the_output() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/regions.json")),
            Path::new("/tmp/output/regions.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("regions")),
            Path::new("regions.provenance.json")
        );
    }

    #[test]
    fn summaries_count_vertices_and_area() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(5.0, 0.0, 1.0);
        assert_eq!(
            Summary::regions(&[a.clone(), b.clone()]),
            Summary::Regions {
                count: 2,
                vertices: 8,
                area: 5.0
            }
        );
        assert_eq!(
            Summary::pair(&a, &b),
            Summary::Pair {
                source_vertices: 4,
                clip_vertices: 4,
                intersections: 0
            }
        );
    }

    #[test]
    fn sidecar_reads_back_as_written() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pair.json");
        let output = dir.path().join("out/regions.json");
        let (a, b) = (square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0));
        let record = Provenance::new(
            "clip",
            &input,
            &output,
            &a,
            &b,
            Summary::regions(&[square(1.0, 1.0, 1.0)]),
        );
        let path = write_sidecar(&record).unwrap();
        assert_eq!(path, dir.path().join("out/regions.provenance.json"));

        let text = fs::read(&path).unwrap();
        let back: Provenance = serde_json::from_slice(&text).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.build.version, weiler::VERSION);
        assert!(!back.build.code_rev.is_empty());

        let raw: serde_json::Value = serde_json::from_slice(&text).unwrap();
        assert_eq!(raw["result"]["kind"], "regions");
        assert_eq!(raw["stage"], "clip");
        assert!(raw.get("code_rev").is_some());
    }
}
