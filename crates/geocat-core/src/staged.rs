// ── Staged-mutation state machine ──
//
// Every create/update/delete runs the same pipeline:
//
//     Idle → Staged(intent) → Confirming → Committing → Idle
//                  ↑               └── cancel ──→ Idle
//
// One pending intent at a time; staging over a pending intent replaces
// it. The network call is reachable only through `begin_commit`, which
// itself is reachable only from `Confirming` -- there is no auto-save
// path, and "confirming with nothing staged" is unrepresentable.

/// A captured mutation request, not yet sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent<D> {
    Create(D),
    Update { id: String, draft: D },
    Delete { id: String },
}

impl<D> Intent<D> {
    /// The verb used in confirmation copy and acknowledgments.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create(_) => "add",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Machine state. `Committing` no longer holds the intent -- it has
/// been handed to the caller for the single network call.
#[derive(Debug, Clone, PartialEq)]
enum Stage<D> {
    Idle,
    Staged(Intent<D>),
    Confirming(Intent<D>),
    Committing,
}

/// The confirmation gate in front of every mutation.
#[derive(Debug)]
pub struct StagedMutation<D> {
    stage: Stage<D>,
}

impl<D> Default for StagedMutation<D> {
    fn default() -> Self {
        Self { stage: Stage::Idle }
    }
}

impl<D> StagedMutation<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.stage, Stage::Idle)
    }

    /// The pending intent, if one is staged or awaiting confirmation.
    pub fn pending(&self) -> Option<&Intent<D>> {
        match &self.stage {
            Stage::Staged(intent) | Stage::Confirming(intent) => Some(intent),
            _ => None,
        }
    }

    // ── Staging ──────────────────────────────────────────────────────

    pub fn stage_create(&mut self, draft: D) {
        self.stage = Stage::Staged(Intent::Create(draft));
    }

    pub fn stage_update(&mut self, id: impl Into<String>, draft: D) {
        self.stage = Stage::Staged(Intent::Update {
            id: id.into(),
            draft,
        });
    }

    pub fn stage_delete(&mut self, id: impl Into<String>) {
        self.stage = Stage::Staged(Intent::Delete { id: id.into() });
    }

    // ── Confirmation gate ────────────────────────────────────────────

    /// Move a staged intent into the confirmation step, returning the
    /// blocking prompt to show. `None` when nothing is staged.
    pub fn request_confirmation(&mut self, noun: &str) -> Option<String> {
        match std::mem::replace(&mut self.stage, Stage::Idle) {
            Stage::Staged(intent) => {
                let prompt = format!("Are you sure you want to {} this {noun}?", intent.verb());
                self.stage = Stage::Confirming(intent);
                Some(prompt)
            }
            other => {
                self.stage = other;
                None
            }
        }
    }

    /// Confirm: hand the intent to the caller for exactly one network
    /// call. Only reachable from `Confirming`.
    pub fn begin_commit(&mut self) -> Option<Intent<D>> {
        match std::mem::replace(&mut self.stage, Stage::Idle) {
            Stage::Confirming(intent) => {
                self.stage = Stage::Committing;
                Some(intent)
            }
            other => {
                self.stage = other;
                None
            }
        }
    }

    /// The commit resolved (either way); back to idle.
    pub fn finish_commit(&mut self) {
        if matches!(self.stage, Stage::Committing) {
            self.stage = Stage::Idle;
        }
    }

    /// Discard the pending intent without any network call.
    pub fn cancel(&mut self) {
        if !matches!(self.stage, Stage::Committing) {
            self.stage = Stage::Idle;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn stage_then_cancel_discards_the_intent() {
        let mut gate: StagedMutation<()> = StagedMutation::new();
        gate.stage_delete("x1");
        assert!(gate.pending().is_some());

        gate.cancel();
        assert!(gate.is_idle());
        assert!(gate.begin_commit().is_none());
    }

    #[test]
    fn cancel_works_from_confirming_too() {
        let mut gate: StagedMutation<()> = StagedMutation::new();
        gate.stage_delete("x1");
        gate.request_confirmation("city").unwrap();
        gate.cancel();
        assert!(gate.is_idle());
    }

    #[test]
    fn commit_requires_the_confirmation_step() {
        let mut gate: StagedMutation<()> = StagedMutation::new();
        gate.stage_delete("x1");
        // Skipping request_confirmation: the intent must not be released.
        assert!(gate.begin_commit().is_none());
        assert!(gate.pending().is_some());
    }

    #[test]
    fn confirmed_intent_is_released_exactly_once() {
        let mut gate: StagedMutation<()> = StagedMutation::new();
        gate.stage_delete("x1");
        gate.request_confirmation("city").unwrap();

        let intent = gate.begin_commit().unwrap();
        assert_eq!(intent, Intent::Delete { id: "x1".into() });
        // Second call yields nothing.
        assert!(gate.begin_commit().is_none());

        gate.finish_commit();
        assert!(gate.is_idle());
    }

    #[test]
    fn staging_overwrites_a_pending_intent() {
        let mut gate: StagedMutation<&'static str> = StagedMutation::new();
        gate.stage_create("first");
        gate.stage_delete("x2");

        gate.request_confirmation("city").unwrap();
        assert_eq!(gate.begin_commit().unwrap(), Intent::Delete { id: "x2".into() });
    }

    #[test]
    fn confirmation_copy_names_the_action_and_noun() {
        let mut gate: StagedMutation<&'static str> = StagedMutation::new();
        gate.stage_delete("x1");
        assert_eq!(
            gate.request_confirmation("city").unwrap(),
            "Are you sure you want to delete this city?"
        );

        gate.stage_create("draft");
        assert_eq!(
            gate.request_confirmation("city").unwrap(),
            "Are you sure you want to add this city?"
        );
    }

    #[test]
    fn repeated_confirmation_request_keeps_the_intent() {
        let mut gate: StagedMutation<()> = StagedMutation::new();
        gate.stage_delete("x1");
        gate.request_confirmation("city").unwrap();

        // Asking again while already confirming is a no-op, not a cancel.
        assert!(gate.request_confirmation("city").is_none());
        assert_eq!(gate.pending(), Some(&Intent::Delete { id: "x1".into() }));
        assert!(gate.begin_commit().is_some());
    }

    #[test]
    fn request_confirmation_with_nothing_staged_is_none() {
        let mut gate: StagedMutation<()> = StagedMutation::new();
        assert!(gate.request_confirmation("city").is_none());
    }
}
