//! Scene files: a document, its elements, and the placement to run.
//!
//! ```ron
//! (
//!     viewport: (width: 800.0, height: 600.0),
//!     nodes: [
//!         (id: 1, rect: (x: 100.0, y: 500.0, w: 50.0, h: 20.0)),
//!         (id: 2, rect: (x: 0.0, y: 0.0, w: 200.0, h: 40.0)),
//!     ],
//!     anchor: 1,
//!     floating: 2,
//!     placement: (allow_bottom_overlap: false),
//! )
//! ```

use std::{fs, path::Path};

use config::{PlacementConfig, RawPlacement};
use perch_geom::{ElementId, Rect, Scene, Viewport};
use perch_place::Profile;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Which widget defaults to resolve `auto` settings against.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    /// Dropdown pane defaults.
    #[default]
    Dropdown,
    /// Tooltip defaults.
    Tooltip,
}

impl ProfileName {
    /// The matching profile.
    pub fn profile(self) -> Profile {
        match self {
            Self::Dropdown => Profile::DROPDOWN,
            Self::Tooltip => Profile::TOOLTIP,
        }
    }
}

/// One element of the scene.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    /// Element id; must not be 0 (the document).
    pub id: ElementId,
    /// Parent element, the document when omitted.
    #[serde(default = "document")]
    pub parent: ElementId,
    /// Document-relative box.
    pub rect: Rect,
    /// Whether the element is expanded; only meaningful for anchors.
    #[serde(default = "expanded")]
    pub expanded: bool,
}

/// Default parent.
fn document() -> ElementId {
    ElementId::DOCUMENT
}

/// Default expanded flag.
fn expanded() -> bool {
    true
}

/// A complete scene file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    /// Viewport size and scroll.
    pub viewport: Viewport,
    /// Document size; defaults to the viewport size.
    #[serde(default)]
    pub document: Option<(f64, f64)>,
    /// Elements, parents before children.
    pub nodes: Vec<NodeSpec>,
    /// Element to place against.
    pub anchor: ElementId,
    /// Element to move.
    pub floating: ElementId,
    /// Bounding container; the viewport when omitted.
    #[serde(default)]
    pub bounds: Option<ElementId>,
    /// Widget defaults.
    #[serde(default)]
    pub profile: ProfileName,
    /// Placement settings.
    #[serde(default)]
    pub placement: RawPlacement,
}

impl SceneFile {
    /// Parse a scene from RON text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(config::from_ron(text)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::parse(&text)?;
        debug!(path = %path.display(), nodes = scene.nodes.len(), "loaded scene");
        Ok(scene)
    }

    /// Resolve the placement settings.
    pub fn config(&self) -> Result<PlacementConfig> {
        Ok(self.placement.clone().resolve()?)
    }

    /// Build the in-memory layout.
    pub fn build(&self) -> Result<Scene> {
        let mut scene = Scene::new(self.viewport);
        if let Some((w, h)) = self.document {
            scene = scene.with_document_size(w, h);
        }
        for node in &self.nodes {
            scene.insert(node.id, node.parent, node.rect)?;
            if !node.expanded {
                scene.set_expanded(node.id, false)?;
            }
        }
        Ok(scene)
    }
}
