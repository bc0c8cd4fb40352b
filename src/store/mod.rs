// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the session document on disk.
//!
//! The store module reads/writes the single JSON file shared by every view of
//! the panel and serializes all mutations against it.

pub mod session_file;

pub use session_file::{CorruptSource, SessionFile, StoreError, WriteDurability};
