use crate::{Id, statics};
use std::sync::Arc;

/// A single style string inside a target. The value is free text (usually `Key=Value`)
/// and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub id: Id,
    pub value: String,
}

impl Style {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            value: value.into(),
        }
    }

    /// Same value, fresh id.
    fn duplicate(&self) -> Self {
        Self::new(self.value.clone())
    }
}

/// A named group of styles. Style order is significant and becomes the style index on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: Id,
    pub name: String,
    pub styles: Vec<Style>,
}

impl Target {
    pub fn new(name: impl Into<String>, styles: Vec<Style>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            styles,
        }
    }

    pub fn style_position(&self, style_id: Id) -> Option<usize> {
        self.styles.iter().position(|s| s.id == style_id)
    }

    /// Deep copy with a new id for the target and for every style.
    fn duplicate(&self) -> Self {
        Self::new(
            self.name.clone(),
            self.styles.iter().map(Style::duplicate).collect(),
        )
    }
}

/// The full editable state: an ordered list of targets.
///
/// Every mutation returns a new `Document` and leaves `self` untouched. Targets are held
/// behind `Arc`, so targets a mutation does not touch are shared between the old and the
/// new value instead of being copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    targets: Vec<Arc<Target>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_targets(targets: impl IntoIterator<Item = Target>) -> Self {
        Self {
            targets: targets.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> impl ExactSizeIterator<Item = &Target> + '_ {
        self.targets.iter().map(|t| t.as_ref())
    }

    pub fn target(&self, target_id: Id) -> Option<&Target> {
        self.targets().find(|t| t.id == target_id)
    }

    pub fn position(&self, target_id: Id) -> Option<usize> {
        self.targets.iter().position(|t| t.id == target_id)
    }

    /// Every target and style id, in document order.
    pub fn ids(&self) -> Vec<Id> {
        let mut out = Vec::new();
        for target in self.targets() {
            out.push(target.id);
            out.extend(target.styles.iter().map(|s| s.id));
        }
        out
    }

    /// Names and values in order, without ids. Two documents with equal outlines encode to
    /// the same flat object.
    pub fn outline(&self) -> Vec<(String, Vec<String>)> {
        self.targets()
            .map(|t| {
                (
                    t.name.clone(),
                    t.styles.iter().map(|s| s.value.clone()).collect(),
                )
            })
            .collect()
    }

    pub(crate) fn shared_targets(&self) -> &[Arc<Target>] {
        &self.targets
    }

    pub(crate) fn with_shared_targets(targets: Vec<Arc<Target>>) -> Self {
        Self { targets }
    }

    /// Rebuild with `edit` applied to the target with `target_id`. `edit` returns `None` to
    /// signal no change, in which case the result shares every target with `self`.
    pub(crate) fn map_target(
        &self,
        target_id: Id,
        edit: impl FnOnce(&Target) -> Option<Target>,
    ) -> Self {
        let Some(idx) = self.position(target_id) else {
            return self.clone();
        };
        let Some(updated) = edit(self.targets[idx].as_ref()) else {
            return self.clone();
        };
        let mut targets = self.targets.clone();
        targets[idx] = Arc::new(updated);
        Self { targets }
    }

    #[must_use]
    pub fn add_target(&self) -> Self {
        self.add_target_named(statics::DEFAULT_TARGET_NAME)
    }

    /// Append an empty target with the given name.
    #[must_use]
    pub fn add_target_named(&self, name: &str) -> Self {
        let mut targets = self.targets.clone();
        targets.push(Arc::new(Target::new(name, Vec::new())));
        Self { targets }
    }

    #[must_use]
    pub fn update_target_name(&self, target_id: Id, name: &str) -> Self {
        self.map_target(target_id, |t| {
            Some(Target {
                name: name.to_string(),
                ..t.clone()
            })
        })
    }

    #[must_use]
    pub fn delete_target(&self, target_id: Id) -> Self {
        if self.position(target_id).is_none() {
            return self.clone();
        }
        Self {
            targets: self
                .targets
                .iter()
                .filter(|t| t.id != target_id)
                .cloned()
                .collect(),
        }
    }

    /// Insert a deep copy right after the original.
    #[must_use]
    pub fn duplicate_target(&self, target_id: Id) -> Self {
        let Some(idx) = self.position(target_id) else {
            return self.clone();
        };
        let copy = self.targets[idx].duplicate();
        let mut targets = self.targets.clone();
        targets.insert(idx + 1, Arc::new(copy));
        Self { targets }
    }

    #[must_use]
    pub fn add_style(&self, target_id: Id) -> Self {
        self.add_style_with(target_id, statics::DEFAULT_STYLE_VALUE)
    }

    /// Append a style with the given value to the target's styles.
    #[must_use]
    pub fn add_style_with(&self, target_id: Id, value: &str) -> Self {
        self.map_target(target_id, |t| {
            let mut target = t.clone();
            target.styles.push(Style::new(value));
            Some(target)
        })
    }

    #[must_use]
    pub fn update_style_value(&self, target_id: Id, style_id: Id, value: &str) -> Self {
        self.map_target(target_id, |t| {
            let idx = t.style_position(style_id)?;
            let mut target = t.clone();
            target.styles[idx].value = value.to_string();
            Some(target)
        })
    }

    #[must_use]
    pub fn delete_style(&self, target_id: Id, style_id: Id) -> Self {
        self.map_target(target_id, |t| {
            let idx = t.style_position(style_id)?;
            let mut target = t.clone();
            target.styles.remove(idx);
            Some(target)
        })
    }

    #[must_use]
    pub fn duplicate_style(&self, target_id: Id, style_id: Id) -> Self {
        self.map_target(target_id, |t| {
            let idx = t.style_position(style_id)?;
            let mut target = t.clone();
            let copy = target.styles[idx].duplicate();
            target.styles.insert(idx + 1, copy);
            Some(target)
        })
    }
}
