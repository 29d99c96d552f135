//! Calculation policy.

use serde::{Deserialize, Serialize};

/// Policy toggles fixed for the duration of one calculation run.
///
/// # Example
///
/// ```
/// use vt_engine::models::Policy;
///
/// assert!(!Policy::default().consider_alternating_saturdays);
/// assert!(Policy::with_alternating_saturdays().consider_alternating_saturdays);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Count every other Saturday of the worked period as a compensable day.
    #[serde(default)]
    pub consider_alternating_saturdays: bool,
}

impl Policy {
    /// A policy with alternating-Saturday coverage enabled.
    pub fn with_alternating_saturdays() -> Self {
        Self {
            consider_alternating_saturdays: true,
        }
    }
}
