//! Navigation: the phase controller between the directory and the UI.
//!
//! A [`Navigator`] runs page loads ([`Route`]) and form submissions
//! ([`Submission`]) against a shared [`Directory`](crate::Directory) and
//! keeps a [`NavigationState`] the presentation layer renders from:
//!
//! - `Loading` while a page loads; the main area shows a placeholder.
//! - `Submitting` while a form submits; its submit control is disabled.
//! - `Idle` otherwise.
//!
//! Validation failures land inline on the form. Missing contacts and store
//! failures land on a full-page error.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use contact_directory::navigation::{Navigator, Route, Submission};
//!
//! let navigator = Navigator::new(Arc::new(directory));
//! navigator.navigate(Route::Create).await;
//! navigator.submit(Submission::Create(RecordDraft::new("Ana", "000"))).await;
//! assert!(matches!(navigator.state().route, Some(Route::Show(_))));
//! ```

mod navigator;
mod screen;

pub use navigator::{Navigator, Settled};
pub use screen::{
    Content, NavigationState, Page, Phase, Route, Screen, SubmitControl, Submission,
};
