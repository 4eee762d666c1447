//! Drag-and-drop reordering for the target list and for each target's style list.
//!
//! A gesture runs `Idle -> Dragging -> Idle`: [`Gesture::start`] records the dragged item,
//! [`Gesture::hover`] records the item under the pointer and which half of it the pointer is
//! in, and [`Gesture::drop_on`] or [`Gesture::end`] finish it. Only the last hover counts.

use crate::{Document, Id};
use std::sync::Arc;

/// Something that can be dragged or hovered. Styles carry their owning target so drops
/// can be restricted to a single style list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragItem {
    Target { id: Id },
    Style { target: Id, id: Id },
}

impl DragItem {
    pub fn id(&self) -> Id {
        match self {
            DragItem::Target { id } | DragItem::Style { id, .. } => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPlacement {
    Before,
    After,
}

impl DropPlacement {
    /// `Before` when the pointer is in the upper half of a row spanning `top..top + height`.
    pub fn from_pointer(top: f32, height: f32, pointer_y: f32) -> Self {
        if pointer_y < top + height / 2.0 {
            DropPlacement::Before
        } else {
            DropPlacement::After
        }
    }
}

/// Where the drop marker should be drawn while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIndicator {
    pub item: DragItem,
    pub placement: DropPlacement,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        source: DragItem,
        hover: Option<DropIndicator>,
    },
}

impl Gesture {
    pub fn start(&mut self, source: DragItem) {
        *self = Gesture::Dragging {
            source,
            hover: None,
        };
    }

    /// Ignored unless a drag is in progress.
    pub fn hover(&mut self, item: DragItem, placement: DropPlacement) {
        if let Gesture::Dragging { hover, .. } = self {
            *hover = Some(DropIndicator { item, placement });
        }
    }

    /// Forget the hovered item (pointer left every row) while staying in the drag.
    pub fn clear_hover(&mut self) {
        if let Gesture::Dragging { hover, .. } = self {
            *hover = None;
        }
    }

    pub fn end(&mut self) {
        *self = Gesture::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn source(&self) -> Option<DragItem> {
        match self {
            Gesture::Dragging { source, .. } => Some(*source),
            Gesture::Idle => None,
        }
    }

    pub fn indicator(&self) -> Option<DropIndicator> {
        match self {
            Gesture::Dragging { hover, .. } => *hover,
            Gesture::Idle => None,
        }
    }

    /// Finish the gesture and return the reordered document. Illegal or incomplete
    /// gestures return `doc` unchanged. The gesture is idle afterwards either way.
    #[must_use]
    pub fn drop_on(&mut self, doc: &Document) -> Document {
        let state = std::mem::take(self);
        let Gesture::Dragging {
            source,
            hover: Some(hover),
        } = state
        else {
            return doc.clone();
        };
        apply_drop(doc, source, hover.item, hover.placement).unwrap_or_else(|| doc.clone())
    }
}

/// Resolve a drop of `source` relative to `anchor`. `None` means no-op.
pub fn apply_drop(
    doc: &Document,
    source: DragItem,
    anchor: DragItem,
    placement: DropPlacement,
) -> Option<Document> {
    match (source, anchor) {
        (DragItem::Target { id: src }, DragItem::Target { id: dst }) => {
            let targets = move_item(doc.shared_targets(), |t: &Arc<_>| t.id, src, dst, placement)?;
            Some(Document::with_shared_targets(targets))
        }
        (
            DragItem::Style {
                target: src_owner,
                id: src,
            },
            DragItem::Style {
                target: dst_owner,
                id: dst,
            },
        ) if src_owner == dst_owner => {
            let owner = doc.target(src_owner)?;
            let styles = move_item(&owner.styles, |s| s.id, src, dst, placement)?;
            Some(doc.map_target(src_owner, |t| {
                let mut target = t.clone();
                target.styles = styles;
                Some(target)
            }))
        }
        _ => None,
    }
}

/// Move the item keyed `source` next to the item keyed `anchor`.
///
/// The source is removed first and the anchor is located in the shortened list; insertion
/// goes at the anchor's index for `Before` and one past it for `After`. Other items keep
/// their relative order. Returns `None` for a self-drop or when either key is missing.
pub fn move_item<T: Clone>(
    items: &[T],
    key: impl Fn(&T) -> Id,
    source: Id,
    anchor: Id,
    placement: DropPlacement,
) -> Option<Vec<T>> {
    if source == anchor {
        return None;
    }
    let from = items.iter().position(|item| key(item) == source)?;
    let mut out = items.to_vec();
    let moved = out.remove(from);
    let at = out.iter().position(|item| key(item) == anchor)?;
    let insert_at = match placement {
        DropPlacement::Before => at,
        DropPlacement::After => at + 1,
    };
    out.insert(insert_at, moved);
    Some(out)
}
