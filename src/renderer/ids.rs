//! Unique element identifiers for icon bodies
//!
//! Icon bodies often define gradients, masks or clip paths referenced by id.
//! Two copies of the same icon on one page would collide, so every id found in
//! a body is rewritten to a fresh one before rendering.
//!
//! Bodies are scanned as text, not parsed. This relies on the well-formed
//! subset of markup icon sets use: `id="..."` preceded by whitespace, and
//! references written as `="#id"` or `(#id)`. Any attribute whose whole value
//! equals a found id is rewritten too.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

const ID_ATTR: &str = "id=\"";

/// Default prefix for generated ids
pub const DEFAULT_ID_PREFIX: &str = "svg-id";

/// Source of unique element ids
///
/// The counter only ever increases, so ids are never reused for the lifetime
/// of the generator. Use [`IdGenerator::global`] for process-wide uniqueness
/// and a local generator to isolate tests.
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
    prefix: Option<String>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Generator whose ids carry a timestamp and random component
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
            prefix: None,
        }
    }

    /// Generator with a fixed prefix, producing `<prefix><n>`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            prefix: Some(prefix.into()),
        }
    }

    /// Process-wide generator
    pub fn global() -> &'static IdGenerator {
        static GLOBAL: IdGenerator = IdGenerator::new();
        &GLOBAL
    }

    /// Number of ids issued so far
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Next id with the given prefix
    pub fn next_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}{n}")
    }

    fn body_prefix(&self) -> String {
        if let Some(prefix) = &self.prefix {
            return prefix.clone();
        }
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let random = Uuid::new_v4().as_u128() & 0xff_ffff;
        format!("{DEFAULT_ID_PREFIX}-{millis:x}-{random:x}-")
    }

    /// Replace every id in `body` and its references with fresh ids
    pub fn replace_ids(&self, body: &str) -> String {
        let ids = find_ids(body);
        if ids.is_empty() {
            return body.to_string();
        }

        let prefix = self.body_prefix();
        let mut result = body.to_string();
        for id in ids {
            let new_id = self.next_id(&prefix);
            tracing::trace!(old = id, new = %new_id, "replacing icon id");
            result = result
                .replace(&format!("=\"{id}\""), &format!("=\"{new_id}\""))
                .replace(&format!("=\"#{id}\""), &format!("=\"#{new_id}\""))
                .replace(&format!("(#{id})"), &format!("(#{new_id})"));
        }
        result
    }
}

/// Find the distinct ids declared in a body, in order of appearance
///
/// An id is the value of an `id="..."` attribute preceded by whitespace: the
/// run of non-whitespace characters after the opening quote, up to its last
/// quote.
pub fn find_ids(body: &str) -> Vec<&str> {
    let mut ids: Vec<&str> = Vec::new();
    let mut pos = 0;

    while let Some((offset, ch)) = body[pos..].char_indices().find(|(_, c)| c.is_whitespace()) {
        pos += offset + ch.len_utf8();
        let Some(rest) = body[pos..].strip_prefix(ID_ATTR) else {
            continue;
        };
        let run_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if let Some(quote) = rest[..run_end].rfind('"').filter(|q| *q > 0) {
            let id = &rest[..quote];
            if !ids.contains(&id) {
                ids.push(id);
            }
            pos += ID_ATTR.len() + quote + 1;
        }
    }
    ids
}
