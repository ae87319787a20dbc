// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session errors.

use spotlight_bubble::TooltipPosition;
use thiserror::Error;

/// A configuration that cannot be shown.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Arrow positions point at an anchor, so one is required.
    #[error("tooltip position {position:?} requires an anchor element")]
    MissingAnchor {
        /// The position that was requested.
        position: TooltipPosition,
    },
}

/// Why [`OverlaySession::show`](crate::OverlaySession::show) refused to run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowError {
    /// The overlay is already on screen.
    #[error("overlay is already shown")]
    AlreadyShown,
    /// The session has been dismissed and cannot be reused.
    #[error("overlay session was dismissed")]
    Dismissed,
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of showing an overlay.
pub type ShowResult<T> = Result<T, ShowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ShowError::from(ConfigError::MissingAnchor {
            position: TooltipPosition::Top,
        });
        assert_eq!(err.to_string(), "tooltip position Top requires an anchor element");
        assert_eq!(ShowError::AlreadyShown.to_string(), "overlay is already shown");
    }
}
