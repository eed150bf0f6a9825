//! Step schemas for the submission form and their composition into one validator.
//!
//! Each [`StepSchema`] owns a disjoint set of draft fields and the rules that check them.
//! [`SubmissionSchema`] is the field-wise union of the five steps, built once and shared.
//!
//! Known gap: `otherType` is not required when "Other" is among the selected types. The
//! form only reveals the field; no rule enforces it.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use url::Url;

use super::draft::SubmissionDraft;
use super::steps::WizardStep;

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_BIO_CHARS: usize = 200;
pub const HEIGHT_RANGE_CM: RangeInclusive<u16> = 100..=250;

const INVALID_URL: &str = "Please enter a valid URL.";

/// A message attached to one form field, e.g. `name` or `socials.instagram`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field failure raised by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|error| error.field.as_str()).collect();
        write!(f, "validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

type Rule = fn(&SubmissionDraft, &mut ValidationErrors);

/// Validator for the fields owned by a single wizard step.
#[derive(Clone)]
pub struct StepSchema {
    step: WizardStep,
    fields: &'static [&'static str],
    rules: Vec<Rule>,
}

impl fmt::Debug for StepSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepSchema")
            .field("step", &self.step)
            .field("fields", &self.fields)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl StepSchema {
    pub fn new(step: WizardStep, fields: &'static [&'static str], rules: Vec<Rule>) -> Self {
        Self {
            step,
            fields,
            rules,
        }
    }

    pub fn basic_info() -> Self {
        Self::new(
            WizardStep::BasicInfo,
            &["name", "profilePicture", "location", "bio"],
            vec![check_name, check_profile_picture, check_bio],
        )
    }

    pub fn artist_types() -> Self {
        Self::new(
            WizardStep::ArtistTypes,
            &["types", "otherType"],
            vec![check_types],
        )
    }

    pub fn identity_attributes() -> Self {
        Self::new(
            WizardStep::IdentityAttributes,
            &[
                "skinTone",
                "bodyType",
                "height",
                "ageRange",
                "sexualOrientation",
                "selfDescribeOrientation",
            ],
            vec![check_height],
        )
    }

    pub fn social_links() -> Self {
        Self::new(WizardStep::SocialLinks, &["socials"], vec![check_socials])
    }

    pub fn review() -> Self {
        Self::new(WizardStep::ReviewSubmit, &[], Vec::new())
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub fn validate(&self, draft: &SubmissionDraft) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in &self.rules {
            rule(draft, &mut errors);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("field '{field}' is claimed by both {first:?} and {second:?}")]
    FieldCollision {
        field: &'static str,
        first: WizardStep,
        second: WizardStep,
    },
    #[error("expected a schema for {expected:?}, found {found:?}")]
    StepOrder {
        expected: WizardStep,
        found: Option<WizardStep>,
    },
}

/// The combined validator: one step schema per wizard step, with disjoint fields.
#[derive(Debug, Clone)]
pub struct SubmissionSchema {
    steps: Vec<StepSchema>,
}

impl SubmissionSchema {
    /// The five standard step schemas.
    pub fn standard_steps() -> Vec<StepSchema> {
        vec![
            StepSchema::basic_info(),
            StepSchema::artist_types(),
            StepSchema::identity_attributes(),
            StepSchema::social_links(),
            StepSchema::review(),
        ]
    }

    pub fn standard() -> Self {
        Self {
            steps: Self::standard_steps(),
        }
    }

    /// Merges step schemas, rejecting overlapping fields or steps out of wizard order.
    pub fn compose(steps: Vec<StepSchema>) -> Result<Self, SchemaError> {
        for (index, expected) in WizardStep::ordered().into_iter().enumerate() {
            let found = steps.get(index).map(StepSchema::step);
            if found != Some(expected) {
                return Err(SchemaError::StepOrder { expected, found });
            }
        }
        if steps.len() != WizardStep::COUNT {
            return Err(SchemaError::StepOrder {
                expected: WizardStep::last(),
                found: steps.get(WizardStep::COUNT).map(StepSchema::step),
            });
        }

        let mut claimed: Vec<(&'static str, WizardStep)> = Vec::new();
        for schema in &steps {
            for &field in schema.fields() {
                if let Some((_, first)) = claimed.iter().find(|(name, _)| *name == field) {
                    return Err(SchemaError::FieldCollision {
                        field,
                        first: *first,
                        second: schema.step(),
                    });
                }
                claimed.push((field, schema.step()));
            }
        }

        Ok(Self { steps })
    }

    pub fn step(&self, step: WizardStep) -> &StepSchema {
        &self.steps[step.index()]
    }

    /// Union of every step's fields.
    pub fn fields(&self) -> BTreeSet<&'static str> {
        self.steps
            .iter()
            .flat_map(|schema| schema.fields().iter().copied())
            .collect()
    }

    /// Validates only the fields owned by `step`.
    pub fn validate_step(
        &self,
        step: WizardStep,
        draft: &SubmissionDraft,
    ) -> Result<(), ValidationErrors> {
        self.step(step).validate(draft)
    }

    /// Validates the whole draft against every step.
    pub fn validate(&self, draft: &SubmissionDraft) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for schema in &self.steps {
            if let Err(step_errors) = schema.validate(draft) {
                errors.extend(step_errors);
            }
        }
        errors.into_result()
    }
}

impl Default for SubmissionSchema {
    fn default() -> Self {
        Self::standard()
    }
}

fn is_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

fn check_name(draft: &SubmissionDraft, errors: &mut ValidationErrors) {
    if draft.name.chars().count() < MIN_NAME_CHARS {
        errors.push("name", "Name must be at least 2 characters.");
    }
}

fn check_profile_picture(draft: &SubmissionDraft, errors: &mut ValidationErrors) {
    if !is_url(&draft.profile_picture) {
        errors.push("profilePicture", INVALID_URL);
    }
}

fn check_bio(draft: &SubmissionDraft, errors: &mut ValidationErrors) {
    let too_long = draft
        .bio
        .as_deref()
        .is_some_and(|bio| bio.chars().count() > MAX_BIO_CHARS);
    if too_long {
        errors.push("bio", "Bio must not exceed 200 characters.");
    }
}

fn check_types(draft: &SubmissionDraft, errors: &mut ValidationErrors) {
    if draft.types.is_empty() {
        errors.push("types", "Please select at least one artist type.");
    }
}

fn check_height(draft: &SubmissionDraft, errors: &mut ValidationErrors) {
    if let Some(height) = &draft.height {
        if !HEIGHT_RANGE_CM.contains(&height.value) {
            errors.push("height.value", "Height must be between 100 and 250 cm.");
        }
    }
}

fn check_socials(draft: &SubmissionDraft, errors: &mut ValidationErrors) {
    for (platform, url) in &draft.socials {
        if !url.is_empty() && !is_url(url) {
            errors.push(format!("socials.{}", platform.id()), INVALID_URL);
        }
    }
}
