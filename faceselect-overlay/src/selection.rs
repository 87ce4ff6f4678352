use crate::error::{OverlayError, Result};

/// Single-selection state over a list of `count` faces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    count: usize,
    selected: Option<usize>,
}

impl Selection {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn current(&self) -> Option<usize> {
        self.selected
    }

    /// Select `index`, or deselect it if it is already the selection.
    pub fn toggle(&mut self, index: usize) -> Result<Option<usize>> {
        if index >= self.count {
            return Err(OverlayError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        self.selected = match self.selected {
            Some(cur) if cur == index => None,
            _ => Some(index),
        };
        Ok(self.selected)
    }

    pub fn clear(&mut self) -> Option<usize> {
        self.selected = None;
        None
    }

    /// Drop any selection and rebind to a new face count.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.selected = None;
    }
}
