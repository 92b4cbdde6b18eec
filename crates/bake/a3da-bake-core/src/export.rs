//! JSON rendering of baked documents, and reading them back.
//!
//! Layout:
//! ```text
//! { "A3D": { "_": { ConverterVersion, FileName, PropertyVersion },
//!            "ObjectHRC": [ { Name, UIDName, Node: [root, ...nodes] } ],
//!            "ObjectHRCList": [ Name ],
//!            "PlayControl": { Begin, FPS, Size } } }
//! ```
//! Output is pretty-printed with 2-space indentation. Non-finite key values
//! (only possible with NaN filtering off) are written as `null`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::NodeAnimation;
use crate::document::{Document, Header, PlayControl};
use crate::error::BakeError;

/// Render the document as a JSON value.
pub fn to_json_value(doc: &Document) -> Result<serde_json::Value, BakeError> {
    Ok(serde_json::to_value(A3dFile::from(doc))?)
}

/// Render the document as pretty-printed JSON text.
pub fn to_json_string(doc: &Document) -> Result<String, BakeError> {
    Ok(serde_json::to_string_pretty(&A3dFile::from(doc))?)
}

/// Write the rendered document to `writer`.
pub fn write_document<W: Write>(doc: &Document, mut writer: W) -> Result<(), BakeError> {
    serde_json::to_writer_pretty(&mut writer, &A3dFile::from(doc))?;
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the rendered document into it.
pub fn export_to_path(doc: &Document, path: impl AsRef<Path>) -> Result<(), BakeError> {
    let file = File::create(path.as_ref())?;
    write_document(doc, BufWriter::new(file))
}

/// Parse a rendered document. The first hierarchy is read; its first node is
/// taken as the synthetic root.
pub fn parse_document_json(s: &str) -> Result<Document, BakeError> {
    let file: OwnedA3dFile =
        serde_json::from_str(s).map_err(|e| BakeError::Parse(format!("parse error: {e}")))?;
    let body = file.a3d;
    let hrc = body
        .object_hrc
        .into_iter()
        .next()
        .ok_or_else(|| BakeError::Parse("ObjectHRC is empty".into()))?;

    let mut nodes = hrc.node.into_iter();
    let root = nodes
        .next()
        .ok_or_else(|| BakeError::Parse(format!("ObjectHRC '{}' has no nodes", hrc.name)))?;

    let doc = Document {
        header: body.header,
        hierarchy_name: hrc.name,
        uid_name: hrc.uid_name,
        root,
        nodes: nodes.collect(),
        play_control: body.play_control,
    };
    doc.validate_basic().map_err(BakeError::Parse)?;
    Ok(doc)
}

// ----- JSON schema (serde) -----

#[derive(Serialize)]
struct A3dFile<'a> {
    #[serde(rename = "A3D")]
    a3d: A3dBody<'a>,
}

#[derive(Serialize)]
struct A3dBody<'a> {
    #[serde(rename = "_")]
    header: &'a Header,
    #[serde(rename = "ObjectHRC")]
    object_hrc: [ObjectHrc<'a>; 1],
    #[serde(rename = "ObjectHRCList")]
    object_hrc_list: [&'a str; 1],
    #[serde(rename = "PlayControl")]
    play_control: &'a PlayControl,
}

#[derive(Serialize)]
struct ObjectHrc<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "UIDName")]
    uid_name: &'a str,
    #[serde(rename = "Node")]
    node: Vec<&'a NodeAnimation>,
}

impl<'a> From<&'a Document> for A3dFile<'a> {
    fn from(doc: &'a Document) -> Self {
        A3dFile {
            a3d: A3dBody {
                header: &doc.header,
                object_hrc: [ObjectHrc {
                    name: &doc.hierarchy_name,
                    uid_name: &doc.uid_name,
                    node: doc.all_nodes().collect(),
                }],
                object_hrc_list: [&doc.hierarchy_name],
                play_control: &doc.play_control,
            },
        }
    }
}

#[derive(Deserialize)]
struct OwnedA3dFile {
    #[serde(rename = "A3D")]
    a3d: OwnedA3dBody,
}

#[derive(Deserialize)]
struct OwnedA3dBody {
    #[serde(rename = "_")]
    header: Header,
    #[serde(rename = "ObjectHRC")]
    object_hrc: Vec<OwnedObjectHrc>,
    #[serde(rename = "PlayControl")]
    play_control: PlayControl,
}

#[derive(Deserialize)]
struct OwnedObjectHrc {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "UIDName", default)]
    uid_name: String,
    #[serde(rename = "Node")]
    node: Vec<NodeAnimation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportConfig;
    use crate::data::{AxisTracks, FrameRange, Key, Track};
    use crate::document::assemble_document;

    fn sample_doc() -> Document {
        let arm = NodeAnimation {
            name: "Arm".to_string(),
            parent: None,
            rot: AxisTracks::splat(Track::Linear {
                keys: vec![
                    Key::new(1, 0.0).with_tangent_out(0.0),
                    Key::new(3, 1.5707963267948966).with_tangent_out(0.0),
                ],
            }),
            scale: AxisTracks::splat(Track::identity()),
            trans: AxisTracks::splat(Track::Linear {
                keys: vec![Key::new(1, 0.1)],
            }),
            visibility: Track::identity(),
        };
        let hand = NodeAnimation {
            name: "Hand".to_string(),
            parent: Some(1),
            ..arm.clone()
        };
        assemble_document(
            &ExportConfig::default(),
            FrameRange::new(1, 3).unwrap(),
            vec![arm, hand],
        )
    }

    #[test]
    fn layout_matches_a3d_schema() {
        let v = to_json_value(&sample_doc()).unwrap();
        let a3d = &v["A3D"];
        assert_eq!(a3d["_"]["ConverterVersion"], "20050823");
        assert_eq!(a3d["_"]["PropertyVersion"], "20050706");
        assert_eq!(a3d["ObjectHRCList"], serde_json::json!(["EFFCHRPV739MIK001_MOB"]));
        assert_eq!(a3d["PlayControl"], serde_json::json!({"Begin": 1, "FPS": 60, "Size": 3}));

        let hrc = &a3d["ObjectHRC"][0];
        assert_eq!(hrc["UIDName"], "EFFCHRPV739MIK001_MOB__DIVSKN");
        let nodes = hrc["Node"].as_array().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0]["Parent"], -1);
        assert_eq!(nodes[0]["Rot"]["X"], serde_json::json!({"Type": "None"}));
        assert!(nodes[1].get("Parent").is_none());
        assert_eq!(nodes[2]["Parent"], 1);
        assert_eq!(nodes[1]["Rot"]["Y"]["Keys"][1], serde_json::json!([3, 1.5707963267948966, 0.0]));
    }

    #[test]
    fn pretty_output_uses_two_space_indent() {
        let text = to_json_string(&sample_doc()).unwrap();
        assert!(text.starts_with("{\n  \"A3D\": {\n    \"_\""));
    }

    #[test]
    fn rendered_document_reads_back_identically() {
        let doc = sample_doc();
        let text = to_json_string(&doc).unwrap();
        assert_eq!(parse_document_json(&text).unwrap(), doc);
    }

    #[test]
    fn write_document_matches_string_rendering() {
        let doc = sample_doc();
        let mut buf = Vec::new();
        write_document(&doc, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_json_string(&doc).unwrap());
    }

    #[test]
    fn parse_rejects_out_of_range_parent() {
        let mut doc = sample_doc();
        doc.nodes[1].parent = Some(7);
        let text = to_json_string(&doc).unwrap();
        let err = parse_document_json(&text).unwrap_err();
        assert!(matches!(err, BakeError::Parse(msg) if msg.contains("outside")));
    }

    #[test]
    fn parse_rejects_missing_nodes() {
        let text = r#"{"A3D":{"_":{"ConverterVersion":"1","FileName":"","PropertyVersion":"1"},
            "ObjectHRC":[{"Name":"X","Node":[]}],"ObjectHRCList":["X"],
            "PlayControl":{"Begin":0,"FPS":60,"Size":1}}}"#;
        assert!(matches!(parse_document_json(text), Err(BakeError::Parse(_))));
    }
}
