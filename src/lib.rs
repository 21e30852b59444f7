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

//! Menupath
//!
//! A path-addressed menu bar and toolbar builder with a typed widget
//! tree, independent of any host toolkit.
//!
//! # Features
//!
//! - **Path addressing:** `"File/Recent/Clear List"` locates nodes by
//!   exact display-label matching, one segment per tree level
//! - **Typed tree:** menus, items, and separators are a single sum type
//!   with exhaustive matching, no runtime type checks
//! - **Commands:** actions are concrete callback values supplied by the
//!   caller; a failing action is logged and never destabilises the UI
//! - **Toolbar mirroring:** buttons and toggles copy an existing menu
//!   item's icon, tooltip, and commands, addressed by the same path
//! - **Outline snapshots:** serde-serialisable mirror of both trees
//!
//! # Architecture
//!
//! - **`core`:** paths, node types, resolution, errors
//! - **`window`:** `MainWindow` owning the menu bar and toolbar, builder
//!   operations, toolbar entries, outline snapshots
//!
//! # Examples
//!
//! ## Building a menu and mirroring it on the toolbar
//!
//! ```
//! use menupath::core::Command;
//! use menupath::window::MainWindow;
//!
//! let mut window = MainWindow::new("Editor", 800, 600);
//!
//! window.add_submenu("File", 'F')?;
//! window.add_menu_item("File/Open", "Open a file", 'O', None, Command::new(|| Ok(())))?;
//! window.add_menu_separator("File")?;
//! window.add_menu_item("File/Exit", "Quit", 'x', None, Command::new(|| Ok(())))?;
//!
//! let button = window.add_toolbar_button("File/Open")?;
//! assert_eq!(button.tooltip(), "Open a file");
//! # Ok::<(), menupath::core::MenuError>(())
//! ```
//!
//! ## Toggle buttons retrieved by name
//!
//! ```
//! use menupath::core::Command;
//! use menupath::window::MainWindow;
//!
//! let mut window = MainWindow::new("Editor", 800, 600);
//! window.add_submenu("View", 'V')?;
//! window.add_menu_item("View/Grid", "Toggle the grid", 'G', None, Command::new(|| Ok(())))?;
//! window.add_toolbar_toggle("View/Grid", true)?;
//!
//! let toggle = window.toolbar_toggle("View/Grid").expect("registered above");
//! assert!(toggle.is_selected());
//! # Ok::<(), menupath::core::MenuError>(())
//! ```

pub mod core;
pub mod window;

// Re-export commonly used types for convenience
pub use crate::core::{Command, Icon, MenuError, MenuPath};
pub use crate::window::MainWindow;
