//! Health reporter state.

/// Text rendered for every failed health check.
pub const UNHEALTHY_TEXT: &str = "Status: Unhealthy";

/// Colour class of the rendered status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthTone {
    /// Server answered with a status document.
    Healthy,
    /// Any failure to obtain a status document.
    Unhealthy,
}

impl HealthTone {
    /// CSS colour used for the line.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Healthy => "green",
            Self::Unhealthy => "red",
        }
    }
}

/// Rendered health status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthLine {
    /// Colour class.
    pub tone: HealthTone,
    /// Line text.
    pub text: String,
}

impl HealthLine {
    /// Line for a status string reported by the server.
    #[must_use]
    pub fn healthy(status: &str) -> Self {
        Self {
            tone: HealthTone::Healthy,
            text: format!("Status: {status}"),
        }
    }

    /// Fixed line shown for any failure.
    #[must_use]
    pub fn unhealthy() -> Self {
        Self {
            tone: HealthTone::Unhealthy,
            text: UNHEALTHY_TEXT.to_string(),
        }
    }

    /// Inline style attribute for the paragraph.
    #[must_use]
    pub fn style(&self) -> String {
        format!("color: {};", self.tone.color())
    }
}

/// Health region content; empty until a check completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthState {
    /// Most recent line, if any check has run.
    pub line: Option<HealthLine>,
}
