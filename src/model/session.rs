// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::question::Question;

/// Title shown until an admin sets one.
pub const DEFAULT_TITLE: &str = "Meeting Title";

/// The single shared document: title plus the ordered question list.
///
/// Question positions are 0-based and contiguous; deleting position `i`
/// shifts all later questions down by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    title: String,
    questions: Vec<Question>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            questions: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_mut(&mut self) -> &mut Vec<Question> {
        &mut self.questions
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
