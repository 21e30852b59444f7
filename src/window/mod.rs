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

//! src/window/mod.rs
//!
//! The embedding window surface
//!
//! `MainWindow` owns the menu bar and the toolbar and exposes the
//! path-addressed builder operations: sub-menus, action items, and
//! separators attach into the menu tree; toolbar buttons and toggles
//! mirror existing menu items located by the same path strings.
//!
//! Every operation resolves its path before constructing or attaching
//! anything, so a failed operation leaves both trees untouched.
//!
//! # Module Structure
//!
//! ```text
//! window/
//! ├── mod.rs       // This file - MainWindow and builder operations
//! ├── toolbar.rs   // Toolbar entries mirroring menu items
//! └── outline.rs   // Serialisable snapshot of the widget trees
//! ```

pub mod outline;
pub mod toolbar;

pub use outline::WindowOutline;
pub use toolbar::{Toolbar, ToolbarButton, ToolbarEntry, ToolbarToggle};

use crate::core::resolver::{self, Target};
use crate::core::{Command, Icon, MenuBar, MenuError, MenuItem, MenuNode, MenuPath, SubMenu};

#[cfg(test)]
mod tests;

/// A window owning one menu bar and one toolbar.
///
/// All operations are single-threaded one-shot tree mutations, expected
/// to run on the host toolkit's UI thread. There is no removal API; the
/// trees live until the window is dropped.
///
/// # Example
/// ```
/// use menupath::core::Command;
/// use menupath::window::MainWindow;
///
/// let mut window = MainWindow::new("Editor", 800, 600);
/// window.add_submenu("File", 'F')?;
/// window.add_menu_item(
///     "File/Open",
///     "Open a file",
///     'O',
///     None,
///     Command::new(|| Ok(())),
/// )?;
/// window.add_toolbar_button("File/Open")?;
/// # Ok::<(), menupath::core::MenuError>(())
/// ```
#[derive(Debug)]
pub struct MainWindow {
    title: String,
    width: u32,
    height: u32,
    menu_bar: MenuBar,
    toolbar: Toolbar,
}

impl MainWindow {
    /// Creates a window with an empty menu bar and toolbar.
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            menu_bar: MenuBar::new(),
            toolbar: Toolbar::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn menu_bar(&self) -> &MenuBar {
        &self.menu_bar
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// Appends a new sub-menu at `path`.
    ///
    /// The parent (everything before the last `/`, or the root bar) must
    /// already exist; the new menu is named by the leaf segment.
    pub fn add_submenu(&mut self, path: &str, mnemonic: char) -> Result<(), MenuError> {
        let path = MenuPath::new(path);
        match resolver::locate_parent_mut(&mut self.menu_bar, &path)? {
            Target::Bar(children) | Target::Popup(children) => {
                children.push(MenuNode::SubMenu(SubMenu::new(path.leaf(), mnemonic)));
                Ok(())
            }
            Target::Item(_) => Err(MenuError::NotAMenu(path.to_string())),
        }
    }

    /// Appends a new action item at `path`, bound to `command`.
    ///
    /// The parent must be an existing sub-menu; attaching an item
    /// directly to the root bar is rejected.
    pub fn add_menu_item(
        &mut self,
        path: &str,
        tooltip: &str,
        mnemonic: char,
        icon: Option<Icon>,
        command: Command,
    ) -> Result<(), MenuError> {
        let path = MenuPath::new(path);
        match resolver::locate_parent_mut(&mut self.menu_bar, &path)? {
            Target::Popup(children) => {
                children.push(MenuNode::Item(MenuItem::new(
                    path.leaf(),
                    tooltip,
                    mnemonic,
                    icon,
                    command,
                )));
                Ok(())
            }
            Target::Bar(_) => Err(MenuError::BarAttachment(path.to_string())),
            Target::Item(_) => Err(MenuError::NotAMenu(path.to_string())),
        }
    }

    /// Appends a separator inside the sub-menu at `path`.
    ///
    /// Unlike the other builders this resolves the node at `path` itself,
    /// not its parent.
    pub fn add_menu_separator(&mut self, path: &str) -> Result<(), MenuError> {
        let path = MenuPath::new(path);
        match resolver::locate_mut(&mut self.menu_bar, &path)? {
            Target::Popup(children) => {
                children.push(MenuNode::Separator);
                Ok(())
            }
            Target::Bar(_) | Target::Item(_) => Err(MenuError::NotAMenu(path.to_string())),
        }
    }

    /// Appends a toolbar button mirroring the menu item at `path`.
    ///
    /// The button copies the item's icon, tooltip, and every registered
    /// command. The created button is returned so the owner can adjust
    /// it afterwards.
    pub fn add_toolbar_button(&mut self, path: &str) -> Result<&mut ToolbarButton, MenuError> {
        let path = MenuPath::new(path);
        let item = resolver::find_item(&self.menu_bar, &path)?;
        let button = ToolbarButton::new(
            item.icon().cloned(),
            item.tooltip().to_string(),
            item.commands().to_vec(),
        );
        match self.toolbar.push(ToolbarEntry::Button(button)) {
            ToolbarEntry::Button(button) => Ok(button),
            _ => unreachable!("pushed entry is a button"),
        }
    }

    /// Appends a toggle button mirroring the menu item at `path`.
    ///
    /// The toggle starts in the given `selected` state and is tagged with
    /// the path string as its name for later retrieval via
    /// [`toolbar_toggle`](Self::toolbar_toggle). Duplicate names are not
    /// rejected; lookups return the first match.
    pub fn add_toolbar_toggle(&mut self, path: &str, selected: bool) -> Result<(), MenuError> {
        let menu_path = MenuPath::new(path);
        let item = resolver::find_item(&self.menu_bar, &menu_path)?;
        let toggle = ToolbarToggle::new(
            path.to_string(),
            selected,
            item.icon().cloned(),
            item.tooltip().to_string(),
            item.commands().to_vec(),
        );
        self.toolbar.push(ToolbarEntry::Toggle(toggle));
        Ok(())
    }

    /// Appends a separator to the toolbar. Never fails; no path involved.
    pub fn add_toolbar_separator(&mut self) {
        self.toolbar.push(ToolbarEntry::Separator);
    }

    /// Finds a toolbar toggle by the path it was registered under.
    pub fn toolbar_toggle(&self, path: &str) -> Option<&ToolbarToggle> {
        self.toolbar.find_toggle(path)
    }

    /// Mutable variant of [`toolbar_toggle`](Self::toolbar_toggle).
    pub fn toolbar_toggle_mut(&mut self, path: &str) -> Option<&mut ToolbarToggle> {
        self.toolbar.find_toggle_mut(path)
    }

    /// Activates the menu item at `path`, firing its commands.
    ///
    /// Command failures are logged, never propagated; only path
    /// resolution can fail here.
    pub fn activate(&self, path: &str) -> Result<(), MenuError> {
        let path = MenuPath::new(path);
        resolver::find_item(&self.menu_bar, &path)?.activate();
        Ok(())
    }
}
