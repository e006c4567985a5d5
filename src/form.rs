//! The submission form.
//!
//! Fields are optional so that an untouched field stays absent from the
//! serialized request body; render-time defaults (`""` / `false`) are applied
//! by the accessors, never stored. The checkbox fields are a deprecated part
//! of the wire contract: the backend tolerates them but the form no longer
//! renders them.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) full_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) part_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) contract: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) internship: Option<bool>,
}

/// A single-field update produced by an edit event. The checkbox variants
/// survive for the deprecated fields; nothing in the UI emits them today.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub(crate) enum FieldPatch {
    JobTitle(String),
    FullTime(bool),
    PartTime(bool),
    Contract(bool),
    Internship(bool),
}

impl JobForm {
    /// Merge one field into the form, preserving every other field. Any text
    /// is accepted verbatim, including the empty string.
    pub(crate) fn apply(&mut self, patch: FieldPatch) {
        match patch {
            FieldPatch::JobTitle(value) => self.job_title = Some(value),
            FieldPatch::FullTime(value) => self.full_time = Some(value),
            FieldPatch::PartTime(value) => self.part_time = Some(value),
            FieldPatch::Contract(value) => self.contract = Some(value),
            FieldPatch::Internship(value) => self.internship = Some(value),
        }
    }

    /// The title as rendered: empty string while the field is untouched.
    pub(crate) fn job_title(&self) -> &str {
        self.job_title.as_deref().unwrap_or("")
    }
}
