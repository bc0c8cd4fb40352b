// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sidepanel — a shared meeting Q&A side panel.
//!
//! One session document (a meeting title plus privately submitted questions)
//! persisted as a single JSON file, served as a public submission view and an
//! admin moderation view.

pub mod model;
pub mod ops;
pub mod store;
pub mod web;
