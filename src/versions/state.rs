//
//  jiratool
//  versions/state.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lifecycle state of a version as observed by this tool.

use std::fmt;

use serde::Serialize;

use crate::api::Version;

/// Rendered in place of a missing release date.
const UNKNOWN_DATE: &str = "unbekannt";

/// Combination of the `archived` and `released` flags.
///
/// `Unreleased → Released` is the only transition the tool performs; the
/// archived flag is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VersionState {
    Unreleased,
    Released { date: Option<String> },
    Archived,
    ArchivedReleased { date: Option<String> },
}

impl VersionState {
    pub fn of(version: &Version) -> Self {
        let date = version.release_date.clone();
        match (version.archived, version.released) {
            (true, true) => Self::ArchivedReleased { date },
            (true, false) => Self::Archived,
            (false, true) => Self::Released { date },
            (false, false) => Self::Unreleased,
        }
    }
}

impl fmt::Display for VersionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArchivedReleased { date } => write!(
                f,
                "archiviert (released am {})",
                date.as_deref().unwrap_or(UNKNOWN_DATE)
            ),
            Self::Archived => write!(f, "archiviert"),
            Self::Released { date } => {
                write!(f, "released am {}", date.as_deref().unwrap_or(UNKNOWN_DATE))
            }
            Self::Unreleased => write!(f, "nicht released"),
        }
    }
}
