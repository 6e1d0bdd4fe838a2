//! Precompiled patterns for the Markdown subset.
//!
//! Compiled once on first use and shared across threads. Line-scoped rules
//! use CRLF mode so `.` and the `^`/`$` anchors treat `\r` as a line break.

use regex::Regex;
use std::sync::LazyLock;

/// Fenced code block with an optional language identifier.
pub static FENCED_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([A-Za-z0-9_]+)?\n((?s:.*?))```").unwrap());

pub static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^### (.+)$").unwrap());

pub static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^## (.+)$").unwrap());

pub static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^# (.+)$").unwrap());

/// Backtick span without inner backticks. May cross line breaks.
pub static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

pub static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?R)\*\*(.+?)\*\*").unwrap());

pub static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?R)\*(.+?)\*").unwrap());

pub static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^- (.+)$").unwrap());

/// Ordered item marker. The number itself is dropped.
pub static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^[0-9]+\. (.+)$").unwrap());

/// Any non-empty line.
pub static LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^.+$").unwrap());

pub static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
