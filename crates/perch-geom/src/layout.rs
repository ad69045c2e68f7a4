use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    geom::{Dimensions, Offset, Rect, Viewport},
};

/// Handle for a node in a [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u32);

impl ElementId {
    /// The document root.
    pub const DOCUMENT: Self = Self(0);
    /// The viewport object.
    pub const WINDOW: Self = Self(u32::MAX);

    /// True for the two reserved ids that have no box of their own.
    pub const fn is_root(self) -> bool {
        self.0 == Self::DOCUMENT.0 || self.0 == Self::WINDOW.0
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Self::DOCUMENT => f.write_str("#document"),
            Self::WINDOW => f.write_str("#window"),
            Self(n) => write!(f, "#{n}"),
        }
    }
}

/// Adapter interface over a live layout, so geometry can be read and written
/// without depending on a particular rendering backend.
pub trait Layout {
    /// The element's border box relative to the viewport (i.e. with page
    /// scroll already subtracted).
    fn bounding_rect(&self, id: ElementId) -> Result<Rect>;

    /// The element's parent, if attached.
    fn parent(&self, id: ElementId) -> Option<ElementId>;

    /// Viewport size and page scroll.
    fn viewport(&self) -> Viewport;

    /// The element's border box in document coordinates.
    ///
    /// Adapters that store document coordinates should override this so a
    /// box written with `set_offset` reads back unchanged.
    fn document_rect(&self, id: ElementId) -> Result<Rect> {
        let vp = self.viewport();
        Ok(self.bounding_rect(id)?.translate(vp.scroll_x, vp.scroll_y))
    }

    /// Move the element so its top-left corner sits at `offset` (document
    /// coordinates).
    fn set_offset(&mut self, id: ElementId, offset: Offset) -> Result<()>;

    /// Whether the element is currently expanded/visible. Anchors that report
    /// `false` are skipped by placement.
    fn is_expanded(&self, _id: ElementId) -> bool {
        true
    }
}

/// Read an element's rectangle along with its parent's and the viewport's,
/// all in document coordinates.
pub fn dimensions<L: Layout + ?Sized>(layout: &L, element: ElementId) -> Result<Dimensions> {
    if element.is_root() {
        return Err(Error::RootElement(element));
    }
    let parent = layout.parent(element).ok_or(Error::NoParent(element))?;
    let rect = layout.document_rect(element)?;
    // Adapters must answer for DOCUMENT here: it is a legal parent even
    // though it cannot be measured through `dimensions`.
    let parent_rect = layout.document_rect(parent)?;

    Ok(Dimensions {
        rect,
        parent: parent_rect,
        window: layout.viewport().rect(),
    })
}
