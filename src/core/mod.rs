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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the toolkit-independent data structures and
//! algorithms for menu management, including:
//! - Type definitions for the menu tree (nodes, items, icons, commands)
//! - Slash-delimited path parsing
//! - Linear path resolution over the tree
//!
//! All business logic is isolated from the embedding window and any host
//! toolkit, enabling unit testing without a display server.

pub mod error;
pub mod path;
pub mod resolver;
pub mod types;

pub use error::MenuError;
pub use path::MenuPath;
pub use resolver::{find, find_item};
pub use types::*;

#[cfg(test)]
mod tests;
