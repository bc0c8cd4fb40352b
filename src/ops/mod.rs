// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the session document.
//!
//! Operations apply in memory against a snapshot the store loads under its
//! mutation lock. Invalid input (blank text, out-of-range index) is not an
//! error; it leaves the document unchanged and the caller reports success.

use crate::model::{Question, Session, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOp {
    SetTitle {
        title: String,
    },
    AddQuestion {
        text: String,
        submitted_at: Timestamp,
    },
    DeleteQuestion {
        index: usize,
    },
}

/// Whether an op actually touched the document. Unchanged applies skip the
/// persist so the backing file stays byte-for-byte identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    Unchanged,
}

impl Applied {
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

pub fn apply_op(session: &mut Session, op: &SessionOp) -> Applied {
    match op {
        SessionOp::SetTitle { title } => {
            if title.trim().is_empty() {
                return Applied::Unchanged;
            }
            // Stored raw, untrimmed; escaping is the display layer's concern.
            session.set_title(title.clone());
            Applied::Changed
        }
        SessionOp::AddQuestion { text, submitted_at } => {
            if text.trim().is_empty() {
                return Applied::Unchanged;
            }
            session
                .questions_mut()
                .push(Question::new(text.clone(), submitted_at.clone()));
            Applied::Changed
        }
        SessionOp::DeleteQuestion { index } => {
            if *index >= session.questions().len() {
                return Applied::Unchanged;
            }
            session.questions_mut().remove(*index);
            Applied::Changed
        }
    }
}

#[cfg(test)]
mod tests;
