//! src/window/toolbar.rs
//!
//! Toolbar entries mirroring menu items
//!
//! Toolbar buttons do not hold a back-reference into the menu tree: at
//! creation time they copy the source item's icon, tooltip, and every
//! registered command. Toggle buttons additionally carry the source path
//! string as an identifying name so they can be retrieved later, plus a
//! boolean selected state.

use crate::core::{Command, Icon};

/// A plain toolbar button cloned from a menu item.
#[derive(Clone, Debug)]
pub struct ToolbarButton {
    icon: Option<Icon>,
    tooltip: String,
    commands: Vec<Command>,
}

impl ToolbarButton {
    pub(crate) fn new(icon: Option<Icon>, tooltip: String, commands: Vec<Command>) -> Self {
        Self {
            icon,
            tooltip,
            commands,
        }
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Replaces the tooltip; the owner may retitle a returned button.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }

    /// Fires every copied command in order, logging failures.
    pub fn activate(&self) {
        for command in &self.commands {
            if let Err(err) = command.invoke() {
                log::warn!("Toolbar action '{}' failed: {err:#}", self.tooltip);
            }
        }
    }
}

/// A toggle button cloned from a menu item, named by its source path.
#[derive(Clone, Debug)]
pub struct ToolbarToggle {
    name: String,
    selected: bool,
    icon: Option<Icon>,
    tooltip: String,
    commands: Vec<Command>,
}

impl ToolbarToggle {
    pub(crate) fn new(
        name: String,
        selected: bool,
        icon: Option<Icon>,
        tooltip: String,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            name,
            selected,
            icon,
            tooltip,
            commands,
        }
    }

    /// The identifying name: the menu path the toggle was created from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Flips the selected state, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Fires every copied command in order, logging failures.
    pub fn activate(&self) {
        for command in &self.commands {
            if let Err(err) = command.invoke() {
                log::warn!("Toolbar toggle '{}' failed: {err:#}", self.name);
            }
        }
    }
}

/// A single slot in the toolbar.
#[derive(Debug)]
pub enum ToolbarEntry {
    Button(ToolbarButton),
    Toggle(ToolbarToggle),
    Separator,
}

/// The window's toolbar: an ordered sequence of entries.
#[derive(Debug, Default)]
pub struct Toolbar {
    entries: Vec<ToolbarEntry>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ToolbarEntry] {
        &self.entries
    }

    pub(crate) fn push(&mut self, entry: ToolbarEntry) -> &mut ToolbarEntry {
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan for a toggle button by its identifying name.
    ///
    /// Duplicate names are never rejected at registration; lookup returns
    /// the first match in toolbar order.
    pub fn find_toggle(&self, name: &str) -> Option<&ToolbarToggle> {
        self.entries.iter().find_map(|entry| match entry {
            ToolbarEntry::Toggle(toggle) if toggle.name() == name => Some(toggle),
            _ => None,
        })
    }

    /// Mutable variant of [`find_toggle`](Self::find_toggle).
    pub fn find_toggle_mut(&mut self, name: &str) -> Option<&mut ToolbarToggle> {
        self.entries.iter_mut().find_map(|entry| match entry {
            ToolbarEntry::Toggle(toggle) if toggle.name() == name => Some(toggle),
            _ => None,
        })
    }
}
