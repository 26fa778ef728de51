// crates/org-lineage-resolver/src/lib.rs
// ============================================================================
// Module: Org Lineage Resolver
// Description: Upward hierarchy resolution from a child to the root.
// Purpose: Produce enriched leaf-to-root ancestor chains.
// Dependencies: org-lineage-core, serde, thiserror
// ============================================================================

//! ## Overview
//! Given a child entity (account or organizational unit), the resolver walks
//! `ListParents` upward until the organization root, resolving each
//! intermediate organizational unit to its display name. The walk is bounded
//! by a depth constant against cyclic or non-terminating provider
//! responses, and every failure names the child being resolved and the step
//! that failed.
//! Invariants:
//! - The returned path is leaf-to-root ordered and ends at a ROOT step.
//! - Exactly one parent per entity; anything else is a protocol break.
//! - OU name lookups are memoized for one resolution pass only.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod path;
pub mod resolver;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use path::AncestorStep;
pub use path::AncestryPath;
pub use resolver::HierarchyResolver;
pub use resolver::MAX_RESOLUTION_DEPTH;
pub use resolver::ResolveError;
pub use resolver::ResolveStep;
