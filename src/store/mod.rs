// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for life plans on disk.
//!
//! The store module reads/writes the plan folder format: one JSON snapshot of
//! the whole document under a fixed key, written atomically after mutations.

pub mod plan_folder;

pub use plan_folder::{PlanFolder, StoreError, WriteDurability, PLAN_STORE_KEY};
