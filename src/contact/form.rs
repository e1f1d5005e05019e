//! Contact form fields, validation, and submission state

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Kind of engagement the visitor is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// GIS System Architecture
    GisSystem,
    /// Drone Data & GIS Integration
    DroneGis,
    /// Spatial Data Consulting
    SpatialConsulting,
    /// AI + GIS Research
    AiGis,
    /// Anything else
    Other,
}

impl ProjectType {
    /// All project types in display order
    pub fn all() -> Vec<Self> {
        vec![
            Self::GisSystem,
            Self::DroneGis,
            Self::SpatialConsulting,
            Self::AiGis,
            Self::Other,
        ]
    }

    /// Display label
    pub fn label(&self) -> &str {
        match self {
            Self::GisSystem => "GIS System Architecture",
            Self::DroneGis => "Drone Data & GIS Integration",
            Self::SpatialConsulting => "Spatial Data Consulting",
            Self::AiGis => "AI + GIS Research",
            Self::Other => "Other",
        }
    }
}

/// Budget bracket; `None` on the form means "prefer not to say"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetRange {
    /// Under $5,000
    Under5k,
    /// $5,000 to $20,000
    From5kTo20k,
    /// $20,000 to $50,000
    From20kTo50k,
    /// $50,000 and up
    Over50k,
}

impl BudgetRange {
    /// All brackets in display order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Under5k,
            Self::From5kTo20k,
            Self::From20kTo50k,
            Self::Over50k,
        ]
    }

    /// Display label
    pub fn label(&self) -> &str {
        match self {
            Self::Under5k => "Under $5,000",
            Self::From5kTo20k => "$5,000 - $20,000",
            Self::From20kTo50k => "$20,000 - $50,000",
            Self::Over50k => "$50,000+",
        }
    }
}

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Full name (required)
    Name,
    /// Company or institution (required)
    Organization,
    /// Project type selector (required)
    ProjectType,
    /// Budget selector (optional)
    Budget,
    /// Free-text message (required)
    Message,
}

impl FormField {
    /// All fields in tab order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Name,
            Self::Organization,
            Self::ProjectType,
            Self::Budget,
            Self::Message,
        ]
    }

    /// Field label
    pub fn label(&self) -> &str {
        match self {
            Self::Name => "Name",
            Self::Organization => "Organization",
            Self::ProjectType => "Project Type",
            Self::Budget => "Budget Range",
            Self::Message => "Message",
        }
    }

    /// Whether the form cannot be submitted without this field
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Budget)
    }

    /// Whether the field is a selector rather than free text
    pub fn is_select(&self) -> bool {
        matches!(self, Self::ProjectType | Self::Budget)
    }
}

/// Submission lifecycle of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Editable, nothing sent yet
    Idle,
    /// Waiting for the mailer
    Submitting,
    /// Inquiry delivered
    Success,
    /// Delivery failed; the form is editable again
    Error(String),
}

/// Validated inquiry handed to a mailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    /// Visitor's name
    pub name: String,
    /// Company or institution
    pub organization: String,
    /// Kind of project
    pub project_type: ProjectType,
    /// Budget bracket, if shared
    pub budget: Option<BudgetRange>,
    /// Message body
    pub message: String,
}

/// Contact form contents and state
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Full name
    pub name: String,
    /// Company or institution
    pub organization: String,
    /// Selected project type
    pub project_type: Option<ProjectType>,
    /// Selected budget bracket
    pub budget: Option<BudgetRange>,
    /// Message body
    pub message: String,
    state: FormState,
}

impl ContactForm {
    /// Create an empty, idle form
    pub fn new() -> Self {
        Self {
            name: String::new(),
            organization: String::new(),
            project_type: None,
            budget: None,
            message: String::new(),
            state: FormState::Idle,
        }
    }

    /// Current submission state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether fields may be edited
    pub fn is_editable(&self) -> bool {
        matches!(self.state, FormState::Idle | FormState::Error(_))
    }

    /// Mutable access to a text field, `None` for selectors
    pub fn text_field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Organization => Some(&mut self.organization),
            FormField::Message => Some(&mut self.message),
            FormField::ProjectType | FormField::Budget => None,
        }
    }

    /// Step the project type selector forward (`forward`) or backward
    pub fn cycle_project_type(&mut self, forward: bool) {
        self.project_type = cycle(&ProjectType::all(), self.project_type, forward, false);
    }

    /// Step the budget selector; cycling passes through "prefer not to say"
    pub fn cycle_budget(&mut self, forward: bool) {
        self.budget = cycle(&BudgetRange::all(), self.budget, forward, true);
    }

    /// First required field that is still blank
    pub fn first_missing_field(&self) -> Option<FormField> {
        if self.name.trim().is_empty() {
            return Some(FormField::Name);
        }
        if self.organization.trim().is_empty() {
            return Some(FormField::Organization);
        }
        if self.project_type.is_none() {
            return Some(FormField::ProjectType);
        }
        if self.message.trim().is_empty() {
            return Some(FormField::Message);
        }
        None
    }

    /// Validate the fields into an inquiry
    pub fn validate(&self) -> Result<ContactInquiry> {
        if let Some(field) = self.first_missing_field() {
            return Err(Error::Validation(format!("{} is required", field.label())));
        }
        let project_type = self
            .project_type
            .ok_or_else(|| Error::Validation("Project Type is required".to_string()))?;

        Ok(ContactInquiry {
            name: self.name.trim().to_string(),
            organization: self.organization.trim().to_string(),
            project_type,
            budget: self.budget,
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and move to `Submitting`
    ///
    /// On a validation error the state is left untouched. Submitting twice
    /// is rejected.
    pub fn begin_submit(&mut self) -> Result<ContactInquiry> {
        if self.state == FormState::Submitting {
            return Err(Error::Validation("Submission already in progress".to_string()));
        }
        let inquiry = self.validate()?;
        self.state = FormState::Submitting;
        Ok(inquiry)
    }

    /// Record the mailer's outcome
    pub fn finish_submit(&mut self, outcome: Result<()>) {
        self.state = match outcome {
            Ok(()) => FormState::Success,
            Err(e) => FormState::Error(e.to_string()),
        };
    }

    /// Clear every field and return to `Idle`
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Move a selector one step through `options`, optionally via an empty slot
fn cycle<T: Copy + PartialEq>(
    options: &[T],
    current: Option<T>,
    forward: bool,
    allow_none: bool,
) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let last = options.len() - 1;
    let position = current.and_then(|value| options.iter().position(|o| *o == value));

    let next = match (position, forward) {
        (None, true) => Some(0),
        (None, false) => Some(last),
        (Some(i), true) if i < last => Some(i + 1),
        (Some(_), true) => None,
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    };

    match next {
        Some(i) => Some(options[i]),
        None if allow_none => None,
        None if forward => Some(options[0]),
        None => Some(options[last]),
    }
}
