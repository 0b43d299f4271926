use std::fmt;

/// Something a reducer survived but wants surfaced for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A child intent arrived for a route case that is no longer active and
    /// was dropped.
    StaleRoute {
        scene: &'static str,
        active: Option<String>,
        addressed: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::StaleRoute {
                scene,
                active,
                addressed,
            } => write!(
                f,
                "{scene}: dropped intent for route {addressed} while route is {}",
                active.as_deref().unwrap_or("None")
            ),
        }
    }
}
