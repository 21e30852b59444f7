//! src/core/types.rs
//!
//! Core type definitions for the menu and toolbar tree
//!
//! This module defines the fundamental types of the widget model:
//! - `Command`: a concrete callback value fired when an entry is activated
//! - `Icon`: an image resource loaded once at construction
//! - `MenuItem`: a leaf entry that triggers its commands on activation
//! - `SubMenu` / `PopupMenu`: a named menu and its drop-down container
//! - `MenuNode`: the tagged variant over all tree entries
//! - `MenuBar`: the root bar owning the top-level menus
//!
//! The tree is a plain sum type with exhaustive matching; there are no
//! runtime type checks and no back-references. Display order is insertion
//! order throughout.

use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::core::error::MenuError;

/// A callback fired when a menu item or toolbar entry is activated.
///
/// Commands are supplied directly by the caller as closures, function
/// pointers, or any `Fn` value. Cloning a command is cheap and shares the
/// underlying callback, which is how toolbar entries mirror the handlers
/// of their source menu item.
///
/// # Example
/// ```
/// use menupath::core::Command;
///
/// let cmd = Command::new(|| {
///     println!("opening file chooser");
///     Ok(())
/// });
/// cmd.invoke().unwrap();
/// ```
#[derive(Clone)]
pub struct Command {
    callback: Rc<dyn Fn() -> anyhow::Result<()>>,
}

impl Command {
    /// Wraps a callback value.
    pub fn new(callback: impl Fn() -> anyhow::Result<()> + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Runs the callback, propagating its result to the caller.
    ///
    /// Activation sites (menu items, toolbar entries) do not propagate:
    /// they log failures and keep going, so one broken action never
    /// destabilises the rest of the UI.
    pub fn invoke(&self) -> anyhow::Result<()> {
        (self.callback)()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Command")
    }
}

/// An icon resource: a name plus the raw image bytes, read once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Icon {
    resource: String,
    data: Vec<u8>,
}

impl Icon {
    /// Loads an icon from a bundled resource file.
    ///
    /// The bytes are read exactly once, at construction; the icon is
    /// cloned (not re-read) when mirrored onto toolbar entries.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| MenuError::Icon {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            resource: path.display().to_string(),
            data,
        })
    }

    /// Builds an icon from in-memory bytes.
    pub fn from_bytes(resource: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            resource: resource.into(),
            data,
        }
    }

    /// The resource name the icon was loaded from.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The raw image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// A leaf menu entry that fires its commands on activation.
#[derive(Clone, Debug)]
pub struct MenuItem {
    label: String,
    tooltip: String,
    mnemonic: char,
    icon: Option<Icon>,
    commands: Vec<Command>,
}

impl MenuItem {
    /// Creates an item with a single command.
    pub fn new(
        label: impl Into<String>,
        tooltip: impl Into<String>,
        mnemonic: char,
        icon: Option<Icon>,
        command: Command,
    ) -> Self {
        Self {
            label: label.into(),
            tooltip: tooltip.into(),
            mnemonic,
            icon,
            commands: vec![command],
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn mnemonic(&self) -> char {
        self.mnemonic
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// All commands registered on this item, in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Registers an additional command, listener-style.
    pub fn add_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Fires every registered command in order.
    ///
    /// A failing command is logged and skipped; the remaining commands
    /// still run. User-triggered actions are best-effort by policy.
    pub fn activate(&self) {
        for command in &self.commands {
            if let Err(err) = command.invoke() {
                log::warn!("Menu action '{}' failed: {err:#}", self.label);
            }
        }
    }
}

/// The drop-down container implicitly owned by every sub-menu.
///
/// Path segments name the sub-menu, never the pop-up; resolution descends
/// through a matched sub-menu straight into its pop-up's children.
#[derive(Debug, Default)]
pub struct PopupMenu {
    children: Vec<MenuNode>,
}

impl PopupMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<MenuNode> {
        &mut self.children
    }
}

/// A named menu with a keyboard mnemonic and an owned pop-up.
#[derive(Debug)]
pub struct SubMenu {
    label: String,
    mnemonic: char,
    popup: PopupMenu,
}

impl SubMenu {
    pub fn new(label: impl Into<String>, mnemonic: char) -> Self {
        Self {
            label: label.into(),
            mnemonic,
            popup: PopupMenu::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mnemonic(&self) -> char {
        self.mnemonic
    }

    pub fn popup(&self) -> &PopupMenu {
        &self.popup
    }

    pub(crate) fn popup_mut(&mut self) -> &mut PopupMenu {
        &mut self.popup
    }
}

/// A single entry in a menu container.
#[derive(Debug)]
pub enum MenuNode {
    /// A named menu containing further entries in its pop-up.
    SubMenu(SubMenu),
    /// A leaf action item.
    Item(MenuItem),
    /// A visual divider; has no label and never matches a path segment.
    Separator,
}

impl MenuNode {
    /// The display label used for path matching, if the node has one.
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuNode::SubMenu(menu) => Some(menu.label()),
            MenuNode::Item(item) => Some(item.label()),
            MenuNode::Separator => None,
        }
    }
}

/// The root menu bar: an ordered sequence of top-level entries.
#[derive(Debug, Default)]
pub struct MenuBar {
    entries: Vec<MenuNode>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MenuNode] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<MenuNode> {
        &mut self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
