//! Ordered sequence of drawable items.

use crate::items::DisplayItem;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The canonical, paint-ordered list of everything on the canvas.
///
/// Items own all of their data, so `clone()` is a deep copy: a snapshot never
/// shares points or glyphs with the live list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, returning its index.
    pub fn push(&mut self, item: impl Into<DisplayItem>) -> usize {
        self.items.push(item.into());
        self.items.len() - 1
    }

    /// Append `point` to the last item when it is a stroke.
    ///
    /// Returns `false` without touching anything when the list is empty or
    /// ends with a stamp.
    pub fn extend_last_stroke(&mut self, point: Point) -> bool {
        match self.items.last_mut().and_then(DisplayItem::as_stroke_mut) {
            Some(stroke) => {
                stroke.add_point(point);
                true
            }
            None => false,
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Independent deep copy of the current contents.
    pub fn snapshot(&self) -> DisplayList {
        self.clone()
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DisplayItem> {
        self.items.get(index)
    }

    pub fn last(&self) -> Option<&DisplayItem> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Union of all item bounds, or `None` for an empty list.
    pub fn bounds(&self) -> Option<Rect> {
        self.items
            .iter()
            .map(DisplayItem::bounds)
            .reduce(|acc, rect| acc.union(rect))
    }

    /// Serialize to JSON (diagnostics only; sessions are not persisted).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DisplayItem;
    type IntoIter = std::slice::Iter<'a, DisplayItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<DisplayItem> for DisplayList {
    fn from_iter<I: IntoIterator<Item = DisplayItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
