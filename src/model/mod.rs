// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A session holds the meeting title and the ordered list of submitted
//! questions; order is append order and is the basis for positional deletes.

pub mod question;
pub mod session;

pub use question::{Question, Timestamp, TimestampError};
pub use session::{Session, DEFAULT_TITLE};
