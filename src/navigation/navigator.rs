//! Navigator - sequences page loads and submissions over a directory.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use super::screen::{NavigationState, Page, Phase, Route, Screen, Submission};
use crate::directory::{Directory, DirectoryError};
use crate::record::Record;
use crate::store::BlobStore;

/// How an operation settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The result is now on screen.
    Applied,
    /// A newer operation started first; the result was dropped.
    Superseded,
}

struct Inner {
    generation: u64,
    state: NavigationState,
}

/// Navigation phase controller.
///
/// Every `navigate` or `submit` takes a new generation when it starts. When
/// it finishes, its result is applied only if no other operation started in
/// the meantime, so a slow stale load can never overwrite a newer page.
/// Superseded submissions may still have mutated the directory.
pub struct Navigator<S> {
    directory: Arc<Directory<S>>,
    inner: Mutex<Inner>,
    phase: watch::Sender<Phase>,
}

impl<S: BlobStore> Navigator<S> {
    pub fn new(directory: Arc<Directory<S>>) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            directory,
            inner: Mutex::new(Inner {
                generation: 0,
                state: NavigationState::default(),
            }),
            phase,
        }
    }

    pub fn directory(&self) -> &Arc<Directory<S>> {
        &self.directory
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NavigationState {
        self.lock().state.clone()
    }

    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Watch phase transitions.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Load a page: the contact list plus, for `Show`/`Edit`, the contact.
    ///
    /// A missing contact or a failing store ends on a full-page error.
    pub async fn navigate(&self, route: Route) -> Settled {
        let generation = self.begin(Phase::Loading);
        self.load_and_finish(generation, route).await
    }

    /// Submit a form.
    ///
    /// Success redirects: create and update to the contact's page, delete to
    /// the index. A validation failure stays on the form with the message
    /// inline. Any other failure ends on a full-page error.
    pub async fn submit(&self, submission: Submission) -> Settled {
        let generation = self.begin(Phase::Submitting);
        debug!(generation, "submission started");

        let (outcome, fallback) = match submission {
            Submission::Create(draft) => {
                let outcome = self.directory.create(draft).await;
                (outcome.map(|record| Route::Show(record.id)), None)
            }
            Submission::Update(id, draft) => {
                let fallback = Record::from_draft(id.clone(), draft.clone());
                let outcome = self.directory.update(&id, draft).await;
                (outcome.map(|record| Route::Show(record.id)), Some(fallback))
            }
            Submission::Delete(id) => {
                let outcome = self.directory.delete(&id).await;
                (outcome.map(|()| Route::Index), None)
            }
        };

        match outcome {
            // The redirect takes over the submission's generation in one step,
            // so a navigation started after the write always outranks it.
            Ok(redirect) => match self.begin_if_current(generation, Phase::Loading) {
                Some(generation) => self.load_and_finish(generation, redirect).await,
                None => {
                    debug!(generation, "submission superseded before redirect");
                    Settled::Superseded
                }
            },
            Err(DirectoryError::Invalid(message)) => self.finish(generation, |inner| {
                show_form_error(&mut inner.state.screen, message, fallback)
            }),
            Err(err) => {
                debug!(generation, status = err.status_code(), "submission failed");
                self.finish(generation, |inner| {
                    inner.state.screen = Screen::Error(err.body());
                })
            }
        }
    }

    async fn load_and_finish(&self, generation: u64, route: Route) -> Settled {
        debug!(generation, ?route, "navigation started");

        let screen = self.load(&route).await;
        self.finish(generation, |inner| {
            inner.state.route = Some(route);
            inner.state.screen = screen;
        })
    }

    async fn load(&self, route: &Route) -> Screen {
        let id = match route {
            Route::Index | Route::Create => {
                let page = match route {
                    Route::Create => Page::Create { error: None },
                    _ => Page::Index,
                };
                return match self.directory.list().await {
                    Ok(contacts) => Screen::Directory { contacts, page },
                    Err(err) => Screen::Error(err.body()),
                };
            }
            Route::Show(id) | Route::Edit(id) => id,
        };

        let (contacts, record) =
            tokio::join!(self.directory.list(), self.directory.retrieve(id));
        let (contacts, record) = match (contacts, record) {
            (Ok(contacts), Ok(record)) => (contacts, record),
            (Err(err), _) | (_, Err(err)) => return Screen::Error(err.body()),
        };
        let page = match route {
            Route::Edit(_) => Page::Edit {
                record,
                error: None,
            },
            _ => Page::Show(record),
        };
        Screen::Directory { contacts, page }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, phase: Phase) -> u64 {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state.phase = phase;
        self.phase.send_replace(phase);
        inner.generation
    }

    /// Start a new generation only if `generation` is still the latest.
    fn begin_if_current(&self, generation: u64, phase: Phase) -> Option<u64> {
        let mut inner = self.lock();
        if inner.generation != generation {
            return None;
        }
        inner.generation += 1;
        inner.state.phase = phase;
        self.phase.send_replace(phase);
        Some(inner.generation)
    }

    fn finish(&self, generation: u64, apply: impl FnOnce(&mut Inner)) -> Settled {
        let mut inner = self.lock();
        if inner.generation != generation {
            debug!(
                generation,
                current = inner.generation,
                "dropping superseded result"
            );
            return Settled::Superseded;
        }
        apply(&mut inner);
        inner.state.phase = Phase::Idle;
        self.phase.send_replace(Phase::Idle);
        Settled::Applied
    }
}

fn show_form_error(screen: &mut Screen, message: String, fallback: Option<Record>) {
    let error = Some(message);
    match screen {
        Screen::Directory { page, .. } => {
            *page = match (std::mem::replace(page, Page::Index), fallback) {
                (Page::Edit { record, .. }, None) => Page::Edit { record, error },
                (Page::Edit { record, .. }, Some(submitted)) if record.id == submitted.id => {
                    Page::Edit { record, error }
                }
                (_, Some(record)) => Page::Edit { record, error },
                (_, None) => Page::Create { error },
            };
        }
        _ => {
            let page = match fallback {
                Some(record) => Page::Edit { record, error },
                None => Page::Create { error },
            };
            *screen = Screen::Directory {
                contacts: Vec::new(),
                page,
            };
        }
    }
}
