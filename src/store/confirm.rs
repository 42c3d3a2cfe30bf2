//! Confirmation collaborator consulted before destructive operations.

/// Asks the user to approve a destructive, irreversible action.
///
/// Delete is the only destructive operation in the store, so this is the
/// seam between `NoteStore::remove_confirmed` and whatever interaction
/// layer is present (a TTY prompt in the CLI, a stub in tests).
pub trait Confirm {
    /// Returns true if the action described by `message` should proceed.
    fn confirm_destructive(&self, message: &str) -> bool;
}

/// Approves everything. Backs `--force` and non-interactive callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm_destructive(&self, _message: &str) -> bool {
        true
    }
}

/// Declines everything. Test stub.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm_destructive(&self, _message: &str) -> bool {
        false
    }
}
