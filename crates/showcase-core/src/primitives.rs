//! # Primitives
//!
//! Hardcoded constants for the showcase CORE.
//!
//! These values are compiled into the binary and are immutable at runtime.
//! Limits only apply at the request boundary; the filter engine itself
//! accepts any well-typed input.

/// Display label of the industry wildcard.
///
/// Records tagged with this label match every industry selection. In code
/// the wildcard is `Industry::Any`; the label only exists on the wire and in
/// catalog data files.
pub const ALL_INDUSTRIES_LABEL: &str = "All Industries";

/// Maximum length (in bytes) of a free-text search query.
pub const MAX_QUERY_LENGTH: usize = 256;

/// Maximum number of selected values in a single facet.
pub const MAX_SELECTIONS_PER_FACET: usize = 64;

// =============================================================================
// LEAD CAPTURE LIMITS
// =============================================================================

/// Maximum length for the submitter's name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for the free-text message of a lead.
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Maximum number of category tags on a single lead.
pub const MAX_LEAD_TAGS: usize = 32;

/// Maximum number of free-form extra fields on a single lead.
pub const MAX_EXTRA_FIELDS: usize = 32;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;
