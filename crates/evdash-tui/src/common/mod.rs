//! Shared leaf types for dashboard features.
//!
//! Contains types with no feature dependencies (tasks, text helpers).
//!
//! IMPORTANT: This module must NOT import UiEvent or feature-specific state
//! to avoid circular dependencies.

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskMeta, TaskSeq, TaskStarted, Tasks};
pub use text::{
    sanitize_for_display, truncate_start_with_ellipsis, truncate_with_ellipsis, wrap_text,
};
