//! src/window/outline.rs
//!
//! Serialisable snapshot of the widget trees
//!
//! An outline is a command-free mirror of a window's menu bar and
//! toolbar: labels, tooltips, mnemonics, icon resource names, and the
//! tree shape, with nothing callable inside. It serialises cleanly with
//! serde and doubles as the comparison surface for tree-shape tests.

use serde::{Deserialize, Serialize};

use crate::core::{MenuItem, MenuNode, SubMenu};
use crate::window::toolbar::ToolbarEntry;
use crate::window::MainWindow;

/// Snapshot of one menu tree entry.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeOutline {
    /// A sub-menu and the contents of its pop-up.
    Menu {
        label: String,
        mnemonic: char,
        children: Vec<NodeOutline>,
    },
    /// A leaf action item.
    Item {
        label: String,
        tooltip: String,
        mnemonic: char,
        icon: Option<String>,
    },
    /// A visual divider.
    Separator,
}

impl NodeOutline {
    fn from_node(node: &MenuNode) -> Self {
        match node {
            MenuNode::SubMenu(menu) => Self::from_menu(menu),
            MenuNode::Item(item) => Self::from_item(item),
            MenuNode::Separator => NodeOutline::Separator,
        }
    }

    fn from_menu(menu: &SubMenu) -> Self {
        NodeOutline::Menu {
            label: menu.label().to_string(),
            mnemonic: menu.mnemonic(),
            children: menu.popup().children().iter().map(Self::from_node).collect(),
        }
    }

    fn from_item(item: &MenuItem) -> Self {
        NodeOutline::Item {
            label: item.label().to_string(),
            tooltip: item.tooltip().to_string(),
            mnemonic: item.mnemonic(),
            icon: item.icon().map(|icon| icon.resource().to_string()),
        }
    }
}

/// Snapshot of one toolbar slot.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolbarOutline {
    Button {
        tooltip: String,
        icon: Option<String>,
    },
    Toggle {
        name: String,
        selected: bool,
        tooltip: String,
        icon: Option<String>,
    },
    Separator,
}

impl ToolbarOutline {
    fn from_entry(entry: &ToolbarEntry) -> Self {
        match entry {
            ToolbarEntry::Button(button) => ToolbarOutline::Button {
                tooltip: button.tooltip().to_string(),
                icon: button.icon().map(|icon| icon.resource().to_string()),
            },
            ToolbarEntry::Toggle(toggle) => ToolbarOutline::Toggle {
                name: toggle.name().to_string(),
                selected: toggle.is_selected(),
                tooltip: toggle.tooltip().to_string(),
                icon: toggle.icon().map(|icon| icon.resource().to_string()),
            },
            ToolbarEntry::Separator => ToolbarOutline::Separator,
        }
    }
}

/// Snapshot of a whole window's menu bar and toolbar.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WindowOutline {
    pub title: String,
    pub menus: Vec<NodeOutline>,
    pub toolbar: Vec<ToolbarOutline>,
}

impl MainWindow {
    /// Takes a command-free snapshot of the window's widget trees.
    pub fn outline(&self) -> WindowOutline {
        WindowOutline {
            title: self.title().to_string(),
            menus: self
                .menu_bar()
                .entries()
                .iter()
                .map(NodeOutline::from_node)
                .collect(),
            toolbar: self
                .toolbar()
                .entries()
                .iter()
                .map(ToolbarOutline::from_entry)
                .collect(),
        }
    }
}
