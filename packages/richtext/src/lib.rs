//! # Pagecraft Richtext
//!
//! Range-based rich text formatting for the page builder.
//!
//! A piece of rich text is a plain string plus a set of [`FormattedRange`]s
//! layered over it. The functions here are pure: they take text and ranges
//! and return new values, never touching shared state.
//!
//! ## Responsibilities
//!
//! - Render text + ranges into markup ([`apply_ranges`], [`render_block`])
//! - Maintain the range set as formatting is applied ([`add_or_update_range`])
//! - Drop ranges invalidated by a text edit ([`reconcile_after_edit`])
//! - List handling: per-line range splitting and list-mode inference
//!
//! ## Offsets
//!
//! All range offsets are measured in characters, not bytes. Ranges that do
//! not land on valid positions are skipped during rendering and dropped
//! during reconciliation; nothing in this crate raises on bad input.

mod formatting;
mod lists;
mod ranges;
mod render;

pub use formatting::{FormattedRange, ListType, TextFormatting};
pub use lists::{infer_list_type, split_lines};
pub use ranges::{add_or_update_range, reconcile_after_edit};
pub use render::{apply_ranges, render_block};
