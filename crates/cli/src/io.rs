//! JSON shapes read and written by the CLI.
//!
//! Vertices are `[x, y]` when unlabelled and `{"x": .., "y": .., "label": ..}`
//! otherwise; both forms are accepted on input.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use weiler::{Label, Polygon, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelDto {
    Entry,
    Exit,
}

impl From<Label> for LabelDto {
    fn from(l: Label) -> Self {
        match l {
            Label::Entry => LabelDto::Entry,
            Label::Exit => LabelDto::Exit,
        }
    }
}

impl From<LabelDto> for Label {
    fn from(l: LabelDto) -> Self {
        match l {
            LabelDto::Entry => Label::Entry,
            LabelDto::Exit => Label::Exit,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum VertexDto {
    Bare([f64; 2]),
    Full {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<LabelDto>,
    },
}

pub type PolygonDto = Vec<VertexDto>;

pub fn to_polygon(dto: &[VertexDto]) -> Polygon {
    let vertices = dto
        .iter()
        .map(|v| match *v {
            VertexDto::Bare([x, y]) => Vertex::new(x, y),
            VertexDto::Full { x, y, label } => {
                let mut v = Vertex::new(x, y);
                v.label = label.map(Label::from);
                v
            }
        })
        .collect();
    Polygon::new(vertices)
}

pub fn from_polygon(p: &Polygon) -> PolygonDto {
    p.vertices
        .iter()
        .map(|v| match v.label {
            None => VertexDto::Bare([v.x(), v.y()]),
            Some(l) => VertexDto::Full {
                x: v.x(),
                y: v.y(),
                label: Some(l.into()),
            },
        })
        .collect()
}

/// Input of `clip`: the two polygons.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PairIn {
    pub source: PolygonDto,
    pub clip: PolygonDto,
}

/// Output of one clipper stage.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StageResult {
    /// Augmented (and possibly labelled) source and clip polygons.
    Pair {
        source: PolygonDto,
        clip: PolygonDto,
    },
    /// Clipped regions.
    Regions { polygons: Vec<PolygonDto> },
}

/// Output of `bridge`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BridgeOut {
    pub total: u64,
    pub strategy: Vec<Vec<usize>>,
}

/// Input of `check`: named cases with their expected results.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Suite {
    #[serde(default)]
    pub clip: Vec<ClipCase>,
    #[serde(default)]
    pub bridge: Vec<BridgeCase>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClipCase {
    pub name: String,
    pub source: PolygonDto,
    pub clip: PolygonDto,
    pub expected: Vec<PolygonDto>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BridgeCase {
    pub name: String,
    pub times: Vec<u32>,
    pub total: u64,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn both_vertex_forms_parse() {
        let pair: PairIn = serde_json::from_value(json!({
            "source": [[0, 0], [0, 1], {"x": 1, "y": 1, "label": "entry"}],
            "clip": [{"x": 2, "y": 2}, [3, 2], [3, 3]]
        }))
        .unwrap();
        let src = to_polygon(&pair.source);
        assert_eq!(src.len(), 3);
        assert_eq!(src.vertices[2].label, Some(Label::Entry));
        assert_eq!(to_polygon(&pair.clip).vertices[0].label, None);
    }

    #[test]
    fn labelled_vertices_serialize_as_objects() {
        let p = Polygon::from(vec![
            Vertex::new(0.0, 0.0),
            Vertex::labelled(1.0, 0.5, Label::Exit),
            Vertex::new(1.0, 1.0),
        ]);
        let v = serde_json::to_value(from_polygon(&p)).unwrap();
        assert_eq!(
            v,
            json!([[0.0, 0.0], {"x": 1.0, "y": 0.5, "label": "exit"}, [1.0, 1.0]])
        );
    }

    #[test]
    fn stage_results_keep_their_shape() {
        let regions = StageResult::Regions {
            polygons: vec![vec![VertexDto::Bare([0.0, 0.0])]],
        };
        let text = serde_json::to_string(&regions).unwrap();
        assert!(text.starts_with("{\"polygons\""));
        let back: StageResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, regions);
    }
}
