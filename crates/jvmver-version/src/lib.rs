//! Version ordering for JVM artifact coordinates.
//!
//! Maven and Ivy version strings follow no single scheme: SemVer, dotted
//! numbers, qualifiers such as `RC1` or `-SNAPSHOT`, dates, and free text all
//! appear in the wild. This crate accepts any string and orders it the way
//! the JVM packaging ecosystem does.
//!
//! The pipeline is `tokenizer` (raw `(separator, item)` stream), `process`
//! (abbreviation expansion and trailing-zero elision), then `compare`
//! (item-wise lexicographic ordering). [`Version`] ties these together and
//! caches the parsed items; [`conflict`] holds the helpers a resolver uses to
//! pick winners.

pub mod compare;
pub mod conflict;
pub mod item;
pub mod process;
pub mod tokenizer;
pub mod version;

pub use item::{Item, Tag};
pub use tokenizer::{tokenize, Separator, Tokens};
pub use version::Version;
