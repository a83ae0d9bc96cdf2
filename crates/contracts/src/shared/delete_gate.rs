//! Delete-confirmation gate.
//!
//! ```text
//! Closed --open--> Open(locked) --input matches--> Open(unlocked)
//!    ^                 |                               |
//!    |              close                           confirm
//!    |                 v                               v
//!    +------------- Closed <--- success --- Open(in flight) --- failure ---> Open(error)
//! ```
//!
//! A failed delete keeps the modal open with the error and does not reload
//! the list; only a successful delete closes the gate.

use crate::domain::common::EntityId;
use crate::shared::api_error::ApiError;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// What the user must type before the destructive action unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationPolicy {
    /// The same word for every record
    FixedWord(&'static str),
    /// `{prefix}-{slugified name}`, e.g. "eliminar-acme-corp"
    NameSlug(&'static str),
}

impl ConfirmationPolicy {
    pub fn required_text(&self, name: &str) -> String {
        match self {
            ConfirmationPolicy::FixedWord(word) => (*word).to_string(),
            ConfirmationPolicy::NameSlug(prefix) => format!("{}-{}", prefix, slugify(name)),
        }
    }
}

/// Every whitespace run becomes a single `-`, then lowercase
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name, "-").to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: EntityId,
    pub name: String,
    pub required: String,
    pub typed: String,
    pub in_flight: bool,
    pub error: Option<String>,
}

/// Result of resolving a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Record removed; the caller reloads the list
    Deleted,
    /// Server refused or transport failed; gate stays open
    Failed(String),
    /// The gate no longer shows this request (closed or reopened meanwhile)
    Ignored { server_deleted: bool },
}

impl GateOutcome {
    /// Whether the list must be fetched again.
    ///
    /// Only a delete the server accepted changes the collection; a refused
    /// one leaves the list as it is.
    pub fn reloads_list(&self) -> bool {
        matches!(
            self,
            GateOutcome::Deleted | GateOutcome::Ignored { server_deleted: true }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteGate {
    #[default]
    Closed,
    Open(PendingDelete),
}

impl DeleteGate {
    /// Open the gate for a record, locked, with an empty confirmation field
    pub fn open(id: EntityId, name: &str, policy: ConfirmationPolicy) -> Self {
        DeleteGate::Open(PendingDelete {
            id,
            name: name.to_string(),
            required: policy.required_text(name),
            typed: String::new(),
            in_flight: false,
            error: None,
        })
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DeleteGate::Open(_))
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        match self {
            DeleteGate::Open(p) => Some(p),
            DeleteGate::Closed => None,
        }
    }

    /// Record what the user typed. Exact, case-sensitive comparison happens in `is_unlocked`.
    pub fn input(&mut self, text: &str) {
        if let DeleteGate::Open(p) = self {
            p.typed = text.to_string();
        }
    }

    pub fn is_unlocked(&self) -> bool {
        match self {
            DeleteGate::Open(p) => p.typed == p.required,
            DeleteGate::Closed => false,
        }
    }

    /// Whether the confirm button should be enabled
    pub fn can_confirm(&self) -> bool {
        self.is_unlocked() && self.pending().map(|p| !p.in_flight).unwrap_or(false)
    }

    /// Start the delete. Returns the id to delete, or `None` if still locked
    /// or a request is already in flight.
    pub fn confirm(&mut self) -> Option<EntityId> {
        if !self.can_confirm() {
            return None;
        }
        match self {
            DeleteGate::Open(p) => {
                p.in_flight = true;
                p.error = None;
                Some(p.id)
            }
            DeleteGate::Closed => None,
        }
    }

    /// Apply the server's answer for the delete of `id`.
    ///
    /// Answers for a record the gate is no longer showing are ignored.
    pub fn resolve(&mut self, id: EntityId, result: Result<(), ApiError>) -> GateOutcome {
        let ignored = GateOutcome::Ignored {
            server_deleted: result.is_ok(),
        };
        let DeleteGate::Open(p) = self else {
            return ignored;
        };
        if !p.in_flight || p.id != id {
            return ignored;
        }
        match result {
            Ok(()) => {
                *self = DeleteGate::Closed;
                GateOutcome::Deleted
            }
            Err(e) => {
                let message = e.to_string();
                p.in_flight = false;
                p.error = Some(message.clone());
                GateOutcome::Failed(message)
            }
        }
    }

    /// Close button, backdrop click or Escape
    pub fn close(&mut self) {
        *self = DeleteGate::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SLUG: ConfirmationPolicy = ConfirmationPolicy::NameSlug("eliminar");
    const WORD: ConfirmationPolicy = ConfirmationPolicy::FixedWord("eliminar");

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Acme Corp"), "acme-corp");
        assert_eq!(slugify("Plásticos  del\tNorte"), "plásticos-del-norte");
        assert_eq!(slugify(" Lead"), "-lead");
    }

    #[test]
    fn test_required_text_per_policy() {
        assert_eq!(WORD.required_text("Acme Corp"), "eliminar");
        assert_eq!(SLUG.required_text("Acme Corp"), "eliminar-acme-corp");
    }

    #[test]
    fn test_opens_locked() {
        let gate = DeleteGate::open(EntityId(3), "Acme Corp", SLUG);
        assert!(gate.is_open());
        assert!(!gate.is_unlocked());
        assert_eq!(gate.pending().map(|p| p.typed.as_str()), Some(""));
    }

    #[test]
    fn test_unlocks_only_on_exact_match() {
        let mut gate = DeleteGate::open(EntityId(3), "Acme Corp", SLUG);
        for wrong in ["eliminar", "eliminar-acme", "Eliminar-acme-corp", "eliminar-acme-corp ", "eliminar acme corp"] {
            gate.input(wrong);
            assert!(!gate.is_unlocked(), "unlocked by {wrong:?}");
        }
        gate.input("eliminar-acme-corp");
        assert!(gate.is_unlocked());
        gate.input("eliminar-acme-cor");
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_confirm_requires_unlock() {
        let mut gate = DeleteGate::open(EntityId(5), "Cobre", WORD);
        assert_eq!(gate.confirm(), None);
        gate.input("eliminar");
        assert_eq!(gate.confirm(), Some(EntityId(5)));
        // second click while the request is in flight is ignored
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_successful_delete_closes() {
        let mut gate = DeleteGate::open(EntityId(5), "Cobre", WORD);
        gate.input("eliminar");
        gate.confirm();
        let outcome = gate.resolve(EntityId(5), Ok(()));
        assert_eq!(outcome, GateOutcome::Deleted);
        assert!(outcome.reloads_list());
        assert_eq!(gate, DeleteGate::Closed);
    }

    #[test]
    fn test_failed_delete_stays_open_with_error() {
        let mut gate = DeleteGate::open(EntityId(5), "Cobre", WORD);
        gate.input("eliminar");
        gate.confirm();
        let outcome = gate.resolve(EntityId(5), Err(ApiError::Rejected("en uso".to_string())));
        assert_eq!(outcome, GateOutcome::Failed("en uso".to_string()));
        // refused delete: the list is not fetched again
        assert!(!outcome.reloads_list());
        assert!(gate.is_open());
        let p = gate.pending().unwrap();
        assert_eq!(p.error.as_deref(), Some("en uso"));
        assert!(!p.in_flight);
        // user may retry without retyping
        assert!(gate.can_confirm());
    }

    #[test]
    fn test_resolve_after_close_is_ignored() {
        let mut gate = DeleteGate::open(EntityId(5), "Cobre", WORD);
        gate.input("eliminar");
        gate.confirm();
        gate.close();
        let outcome = gate.resolve(EntityId(5), Ok(()));
        assert_eq!(outcome, GateOutcome::Ignored { server_deleted: true });
        // the record is gone on the server, so the list still refreshes
        assert!(outcome.reloads_list());
        assert_eq!(gate, DeleteGate::Closed);
    }

    #[test]
    fn test_refused_after_close_does_not_reload() {
        let mut gate = DeleteGate::open(EntityId(5), "Cobre", WORD);
        gate.input("eliminar");
        gate.confirm();
        gate.close();
        let outcome = gate.resolve(EntityId(5), Err(ApiError::Rejected("en uso".to_string())));
        assert_eq!(outcome, GateOutcome::Ignored { server_deleted: false });
        assert!(!outcome.reloads_list());
    }

    #[test]
    fn test_stale_answer_for_other_record_is_ignored() {
        let mut gate = DeleteGate::open(EntityId(5), "Cobre", WORD);
        gate.input("eliminar");
        gate.confirm();
        gate.close();

        let mut gate = DeleteGate::open(EntityId(6), "Latón", WORD);
        gate.input("eliminar");
        gate.confirm();
        assert_eq!(
            gate.resolve(EntityId(5), Ok(())),
            GateOutcome::Ignored { server_deleted: true }
        );
        assert!(gate.is_open());
        assert_eq!(gate.resolve(EntityId(6), Ok(())), GateOutcome::Deleted);
    }

    #[test]
    fn test_input_on_closed_gate_is_noop() {
        let mut gate = DeleteGate::Closed;
        gate.input("eliminar");
        assert!(!gate.is_unlocked());
        assert_eq!(gate.confirm(), None);
    }
}
