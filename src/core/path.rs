// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/path.rs
//!
//! Slash-delimited menu path handling
//!
//! A menu path addresses a node in the menu tree by its display labels:
//! `"File/Recent/Clear List"` names the item "Clear List" inside the
//! "Recent" sub-menu of the "File" menu. Segments are matched by exact
//! text equality against node labels.
//!
//! There is no escaping mechanism: a `/` inside a display label cannot be
//! addressed. This is a structural constraint of the path syntax, not
//! something the resolver works around.

use std::fmt;

/// A slash-delimited path into the menu tree.
///
/// Wraps the raw string; splitting is done lazily on access. Empty
/// segments (from leading, trailing, or doubled slashes) are preserved
/// and simply never match any label during resolution.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MenuPath {
    raw: String,
}

impl MenuPath {
    /// Wraps a raw path string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw path string as supplied by the caller.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Iterates over the path's segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('/')
    }

    /// The display label of the node the path names.
    ///
    /// This is the substring after the last `/`, or the whole string when
    /// the path has no `/`.
    pub fn leaf(&self) -> &str {
        match self.raw.rsplit_once('/') {
            Some((_, leaf)) => leaf,
            None => &self.raw,
        }
    }

    /// The path of the parent container, or `None` when the path has a
    /// single segment (its parent is the root bar).
    pub fn parent(&self) -> Option<MenuPath> {
        self.raw
            .rsplit_once('/')
            .map(|(prefix, _)| MenuPath::new(prefix))
    }
}

impl fmt::Display for MenuPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for MenuPath {
    fn from(raw: &str) -> Self {
        MenuPath::new(raw)
    }
}
