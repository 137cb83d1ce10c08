use azmoon_core::models::TestDefinition;

/// Result of applying a patch to an in-memory document.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    /// The document was modified and needs to be written back.
    Changed { detail: String },
    /// The fix was already in place; nothing to write.
    Unchanged,
}

/// One impl per corrective fix. Each impl targets a single questionnaire and
/// must be idempotent: applying it to an already-fixed document returns
/// `Unchanged`.
pub trait Patch: Send + Sync {
    /// Slug of the questionnaire this patch targets.
    fn slug(&self) -> &str;

    /// One-line description of what the patch corrects.
    fn summary(&self) -> &str;

    fn apply(&self, def: &mut TestDefinition) -> PatchOutcome;
}
