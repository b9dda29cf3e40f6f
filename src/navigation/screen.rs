//! What the presentation layer renders: routes, pages and screens.

use std::collections::HashMap;

use serde::Serialize;

use crate::directory::ErrorBody;
use crate::record::{Record, RecordDraft};

/// Navigation phase gating user interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    /// A page load is in flight; detail content shows a placeholder.
    Loading,
    /// A form submission is in flight; the submit control is disabled.
    Submitting,
}

/// A page the user can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Show(String),
    Edit(String),
    Create,
}

/// A form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(RecordDraft),
    Update(String, RecordDraft),
    Delete(String),
}

impl Submission {
    /// Build a create submission from a form map.
    pub fn create_from_form(form: &HashMap<String, String>) -> Self {
        Submission::Create(RecordDraft::from_form(form))
    }

    /// Build an update submission from a form map.
    pub fn update_from_form(id: impl Into<String>, form: &HashMap<String, String>) -> Self {
        Submission::Update(id.into(), RecordDraft::from_form(form))
    }
}

/// Content of the main area beside the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Prompt to pick a contact or create one.
    Index,
    Show(Record),
    Edit {
        record: Record,
        /// Inline validation error from the last failed submission.
        error: Option<String>,
    },
    Create {
        error: Option<String>,
    },
}

impl Page {
    /// Inline form error, if this page is a form showing one.
    pub fn form_error(&self) -> Option<&str> {
        match self {
            Page::Edit { error, .. } | Page::Create { error } => error.as_deref(),
            _ => None,
        }
    }
}

/// Everything on screen after the last applied operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    /// Nothing has loaded yet.
    #[default]
    Blank,
    Directory {
        contacts: Vec<Record>,
        page: Page,
    },
    /// Full-page error replacing the whole directory.
    Error(ErrorBody),
}

/// The main area as it should be drawn right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    Placeholder,
    Page(&'a Page),
    Error(&'a ErrorBody),
    Blank,
}

/// Rendering contract for a form's submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmitControl {
    fn new(idle: &'static str, busy: &'static str, phase: Phase) -> Self {
        let submitting = phase == Phase::Submitting;
        Self {
            label: if submitting { busy } else { idle },
            disabled: submitting,
        }
    }
}

/// Snapshot of the navigation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub phase: Phase,
    /// Route of the last applied navigation.
    pub route: Option<Route>,
    pub screen: Screen,
}

impl NavigationState {
    /// Contact list shown beside the main area.
    pub fn contacts(&self) -> &[Record] {
        match &self.screen {
            Screen::Directory { contacts, .. } => contacts,
            _ => &[],
        }
    }

    pub fn page(&self) -> Option<&Page> {
        match &self.screen {
            Screen::Directory { page, .. } => Some(page),
            _ => None,
        }
    }

    /// The main area, with the previous page hidden while loading.
    pub fn content(&self) -> Content<'_> {
        match (&self.screen, self.phase) {
            (_, Phase::Loading) => Content::Placeholder,
            (Screen::Directory { page, .. }, _) => Content::Page(page),
            (Screen::Error(body), _) => Content::Error(body),
            (Screen::Blank, _) => Content::Blank,
        }
    }

    /// Submit control of the current page, if it has one.
    pub fn submit_control(&self) -> Option<SubmitControl> {
        match self.page()? {
            Page::Edit { .. } | Page::Create { .. } => {
                Some(SubmitControl::new("Save", "Saving...", self.phase))
            }
            Page::Show(_) => Some(SubmitControl::new("Delete", "Deleting...", self.phase)),
            Page::Index => None,
        }
    }
}
