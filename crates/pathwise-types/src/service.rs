//! Assessment service descriptors.
//!
//! The five assessment forms share one request/response flow and differ
//! only in the data captured here: endpoint, required inputs, and the
//! label restored on the submit control once a request settles.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// One of the five single-purpose assessment forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Assessment,
    Skills,
    Resume,
    Market,
    Learning,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Assessment,
        ServiceKind::Skills,
        ServiceKind::Resume,
        ServiceKind::Market,
        ServiceKind::Learning,
    ];

    pub fn descriptor(&self) -> &'static ServiceDescriptor {
        match self {
            ServiceKind::Assessment => &ASSESSMENT,
            ServiceKind::Skills => &SKILLS,
            ServiceKind::Resume => &RESUME,
            ServiceKind::Market => &MARKET,
            ServiceKind::Learning => &LEARNING,
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Assessment => write!(f, "assessment"),
            ServiceKind::Skills => write!(f, "skills"),
            ServiceKind::Resume => write!(f, "resume"),
            ServiceKind::Market => write!(f, "market"),
            ServiceKind::Learning => write!(f, "learning"),
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assessment" | "assess" => Ok(ServiceKind::Assessment),
            "skills" => Ok(ServiceKind::Skills),
            "resume" => Ok(ServiceKind::Resume),
            "market" => Ok(ServiceKind::Market),
            "learning" => Ok(ServiceKind::Learning),
            other => Err(format!("unknown service: '{other}'")),
        }
    }
}

/// A panel inside the service dialog: the chat widget or one of the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServicePanel {
    Chat,
    Form(ServiceKind),
}

impl ServicePanel {
    /// Title shown in the service dialog header.
    pub fn title(&self) -> &'static str {
        match self {
            ServicePanel::Chat => "AI Chat Assistant",
            ServicePanel::Form(ServiceKind::Assessment) => "Career Assessment",
            ServicePanel::Form(ServiceKind::Skills) => "Skills Analysis",
            ServicePanel::Form(ServiceKind::Resume) => "Resume Enhancement",
            ServicePanel::Form(ServiceKind::Market) => "Market Insights",
            ServicePanel::Form(ServiceKind::Learning) => "Learning Resources",
        }
    }
}

/// A required input of an assessment form.
///
/// `choices` is empty for free-text inputs and lists the radio options
/// otherwise.
#[derive(Debug, Serialize)]
pub struct FieldSpec {
    /// JSON key sent to the backend.
    pub name: &'static str,
    pub label: &'static str,
    pub choices: &'static [&'static str],
}

impl FieldSpec {
    pub fn is_choice(&self) -> bool {
        !self.choices.is_empty()
    }
}

/// Everything that distinguishes one assessment flow from another.
#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub kind: ServiceKind,
    pub endpoint: &'static str,
    pub fields: &'static [FieldSpec],
    pub idle_icon: &'static str,
    pub idle_label: &'static str,
    /// Shown when any required input is missing.
    pub missing_input: &'static str,
}

impl ServiceDescriptor {
    pub fn idle_state(&self) -> SubmitState {
        SubmitState::Idle {
            icon: self.idle_icon,
            label: self.idle_label,
        }
    }
}

/// Visual state of a form's submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmitState {
    Idle {
        icon: &'static str,
        label: &'static str,
    },
    Processing,
}

impl SubmitState {
    pub const PROCESSING_ICON: &'static str = "fas fa-spinner fa-spin";
    pub const PROCESSING_LABEL: &'static str = "Processing...";

    pub fn is_enabled(&self) -> bool {
        matches!(self, SubmitState::Idle { .. })
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SubmitState::Idle { icon, .. } => icon,
            SubmitState::Processing => Self::PROCESSING_ICON,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Idle { label, .. } => label,
            SubmitState::Processing => Self::PROCESSING_LABEL,
        }
    }
}

static ASSESSMENT: ServiceDescriptor = ServiceDescriptor {
    kind: ServiceKind::Assessment,
    endpoint: "/api/assess",
    fields: &[
        FieldSpec {
            name: "q1",
            label: "Preferred work environment?",
            choices: &["Office", "Remote", "Hybrid", "Outdoors"],
        },
        FieldSpec {
            name: "q2",
            label: "Work style preference?",
            choices: &["Team collaboration", "Independent work", "Leadership", "Mixed"],
        },
        FieldSpec {
            name: "q3",
            label: "Task preference?",
            choices: &["Creative tasks", "Analytical tasks", "People-focused", "Technical tasks"],
        },
        FieldSpec {
            name: "q4",
            label: "Work-life balance priority?",
            choices: &["High flexibility", "Standard hours", "Results-focused", "Structured schedule"],
        },
        FieldSpec {
            name: "q5",
            label: "Routine preference?",
            choices: &["Varied daily tasks", "Consistent routine", "Project-based", "Mixed routine"],
        },
    ],
    idle_icon: "fas fa-search",
    idle_label: "Get Career Recommendations",
    missing_input: "Please answer all questions",
};

static SKILLS: ServiceDescriptor = ServiceDescriptor {
    kind: ServiceKind::Skills,
    endpoint: "/api/skills",
    fields: &[
        FieldSpec {
            name: "current_skills",
            label: "Current skills",
            choices: &[],
        },
        FieldSpec {
            name: "target_role",
            label: "Target role",
            choices: &[],
        },
    ],
    idle_icon: "fas fa-chart-line",
    idle_label: "Analyze Skills Gap",
    missing_input: "Please fill both fields",
};

static RESUME: ServiceDescriptor = ServiceDescriptor {
    kind: ServiceKind::Resume,
    endpoint: "/api/resume",
    fields: &[
        FieldSpec {
            name: "job_role",
            label: "Job role",
            choices: &[],
        },
        FieldSpec {
            name: "experience_level",
            label: "Experience level",
            choices: &["Entry Level", "Mid Level", "Senior Level"],
        },
    ],
    idle_icon: "fas fa-magic",
    idle_label: "Get Resume Tips",
    missing_input: "Please fill both fields",
};

static MARKET: ServiceDescriptor = ServiceDescriptor {
    kind: ServiceKind::Market,
    endpoint: "/api/market",
    fields: &[
        FieldSpec {
            name: "field",
            label: "Field",
            choices: &[],
        },
        FieldSpec {
            name: "location",
            label: "Location",
            choices: &[],
        },
    ],
    idle_icon: "fas fa-chart-pie",
    idle_label: "Get Market Insights",
    missing_input: "Please fill both fields",
};

static LEARNING: ServiceDescriptor = ServiceDescriptor {
    kind: ServiceKind::Learning,
    endpoint: "/api/learning",
    fields: &[
        FieldSpec {
            name: "skill",
            label: "Skill to learn",
            choices: &[],
        },
        FieldSpec {
            name: "learning_style",
            label: "Learning style",
            choices: &["Visual", "Hands-on", "Reading", "Video-based"],
        },
    ],
    idle_icon: "fas fa-book",
    idle_label: "Find Resources",
    missing_input: "Please fill both fields",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_kind_matches() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.descriptor().kind, kind);
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(ServiceKind::Assessment.descriptor().endpoint, "/api/assess");
        assert_eq!(ServiceKind::Learning.descriptor().endpoint, "/api/learning");
    }

    #[test]
    fn test_assessment_has_five_questions() {
        let names: Vec<_> = ServiceKind::Assessment
            .descriptor()
            .fields
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["q1", "q2", "q3", "q4", "q5"]);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Skills".parse::<ServiceKind>().unwrap(), ServiceKind::Skills);
        assert_eq!("assess".parse::<ServiceKind>().unwrap(), ServiceKind::Assessment);
        assert!("cooking".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn test_submit_state() {
        let idle = ServiceKind::Market.descriptor().idle_state();
        assert!(idle.is_enabled());
        assert_eq!(idle.label(), "Get Market Insights");
        assert_eq!(idle.icon(), "fas fa-chart-pie");

        assert!(!SubmitState::Processing.is_enabled());
        assert_eq!(SubmitState::Processing.label(), "Processing...");
    }

    #[test]
    fn test_panel_titles() {
        assert_eq!(ServicePanel::Chat.title(), "AI Chat Assistant");
        assert_eq!(
            ServicePanel::Form(ServiceKind::Resume).title(),
            "Resume Enhancement"
        );
    }
}
