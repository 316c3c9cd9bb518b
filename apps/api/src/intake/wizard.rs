//! Step-by-step form input over the same draft the other modes edit.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormStep {
    pub id: u8,
    pub title: &'static str,
}

pub const FORM_STEPS: [FormStep; 5] = [
    FormStep { id: 1, title: "Personal Information" },
    FormStep { id: 2, title: "Professional Summary" },
    FormStep { id: 3, title: "Work Experience" },
    FormStep { id: 4, title: "Education" },
    FormStep { id: 5, title: "Skills & Languages" },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Tracks the visible step. Navigation clamps at both ends.
#[derive(Debug, Clone, Default)]
pub struct FormWizard {
    current: usize,
}

impl FormWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> FormStep {
        FORM_STEPS[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> FormStep {
        self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> FormStep {
        self.go_to(self.current.saturating_sub(1))
    }

    pub fn go_to(&mut self, index: usize) -> FormStep {
        self.current = index.min(FORM_STEPS.len() - 1);
        self.current()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == FORM_STEPS.len() - 1
    }

    /// Percentage of steps reached, counting the current one.
    pub fn progress(&self) -> u8 {
        (((self.current + 1) * 100) / FORM_STEPS.len()) as u8
    }
}

/// Appends an empty item (fresh id, type defaults) and returns its index.
pub fn add_item<T: Default>(items: &mut Vec<T>) -> usize {
    items.push(T::default());
    items.len() - 1
}

pub fn update_item<T>(
    items: &mut [T],
    index: usize,
    edit: impl FnOnce(&mut T),
) -> Result<(), EditError> {
    let len = items.len();
    let item = items
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { index, len })?;
    edit(item);
    Ok(())
}

pub fn remove_item<T>(items: &mut Vec<T>, index: usize) -> Result<T, EditError> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}
