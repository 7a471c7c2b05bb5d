// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel identity and record types.

use core::fmt;

use clerestory_scope::{ContextKey, Mode, Scope};
use kurbo::Rect;

/// A panel identifier.
///
/// Ids are allocated monotonically by the [`Workbench`](crate::Workbench)
/// and never reused, so a stale id held after a close simply stops
/// resolving.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(u32);

impl PanelId {
    /// Creates a panel ID from the given index.
    ///
    /// This is typically called by the workbench rather than directly.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this panel ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PanelId").field(&self.0).finish()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PanelId({})", self.0)
    }
}

/// How a panel renders its scope.
///
/// Presentation is deliberately irrelevant to selection sharing: a tree and
/// a viewport over the same context stay in lockstep. The value is carried
/// for the rendering collaborator's benefit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Hierarchical outline of the scope's content.
    Tree,
    /// Spatial view into the scope's content.
    Viewport,
    /// Flat listing.
    List,
    /// Thumbnail grid.
    Grid,
    /// Property sheet for the selected item.
    Properties,
    /// Source text view.
    Text,
}

impl Presentation {
    /// Returns the lowercase token for this presentation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Viewport => "viewport",
            Self::List => "list",
            Self::Grid => "grid",
            Self::Properties => "properties",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One open panel: a context, a presentation, and a frame.
///
/// The scope and mode axes live inside the panel's [`ContextKey`]; the key
/// is recomputed when the mode is reassigned, which is how a panel migrates
/// between contexts at runtime. The frame records where the window chrome
/// last put the panel — this crate stores it and otherwise leaves layout to
/// the outside.
#[derive(Clone, Debug)]
pub struct Panel {
    id: PanelId,
    context: ContextKey,
    presentation: Presentation,
    frame: Rect,
}

impl Panel {
    pub(crate) const fn new(
        id: PanelId,
        context: ContextKey,
        presentation: Presentation,
        frame: Rect,
    ) -> Self {
        Self {
            id,
            context,
            presentation,
            frame,
        }
    }

    /// Returns this panel's id.
    #[must_use]
    pub const fn id(&self) -> PanelId {
        self.id
    }

    /// Returns the scope this panel looks into.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        self.context.scope()
    }

    /// Returns the mode this panel operates in.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.context.mode()
    }

    /// Returns the context this panel shares selection through.
    #[must_use]
    pub const fn context(&self) -> &ContextKey {
        &self.context
    }

    /// Returns this panel's presentation.
    #[must_use]
    pub const fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Returns this panel's frame, as last recorded.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Reassigns the mode axis, recomputing the context key.
    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.context = self.context.with_mode(mode);
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}
