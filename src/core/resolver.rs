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

//! src/core/resolver.rs
//!
//! Menu tree resolution
//!
//! Resolves slash-delimited paths against a `MenuBar` by walking segments
//! from the root and scanning each container's immediate children for an
//! exact label match. Sub-menus and action items are both eligible
//! matches; separators have no label and never match.
//!
//! Descent through a matched sub-menu continues inside its pop-up's
//! children: a menu's entries live in its automatically-created pop-up,
//! but path segments name the menu itself.
//!
//! Resolution is linear and re-walks the tree on every call. Menu trees
//! are small and rarely queried, so no index is kept.
//!
//! Any failed lookup fails the whole resolution with the caller's full
//! path string and leaves no partial result.

use crate::core::error::MenuError;
use crate::core::path::MenuPath;
use crate::core::types::{MenuBar, MenuItem, MenuNode};

/// A resolved position in the tree, borrowed mutably for attachment.
#[derive(Debug)]
pub(crate) enum Target<'a> {
    /// The root bar's entry list.
    Bar(&'a mut Vec<MenuNode>),
    /// A sub-menu's pop-up entry list.
    Popup(&'a mut Vec<MenuNode>),
    /// A leaf action item.
    Item(&'a mut MenuItem),
}

/// Resolves `path` to an attachment target.
///
/// Walks one segment at a time. A matched sub-menu exposes its pop-up's
/// children for the next segment; a matched item with segments remaining
/// fails the lookup. Returns `MenuError::NotFound` carrying the full
/// path on the first segment with no matching child.
pub(crate) fn locate_mut<'a>(
    bar: &'a mut MenuBar,
    path: &MenuPath,
) -> Result<Target<'a>, MenuError> {
    let mut target = Target::Bar(bar.entries_mut());
    for segment in path.segments() {
        let children = match target {
            Target::Bar(children) | Target::Popup(children) => children,
            Target::Item(_) => return Err(MenuError::NotFound(path.to_string())),
        };
        let matched = children
            .iter_mut()
            .find(|node| node.label() == Some(segment))
            .ok_or_else(|| MenuError::NotFound(path.to_string()))?;
        target = match matched {
            MenuNode::SubMenu(menu) => Target::Popup(menu.popup_mut().children_mut()),
            MenuNode::Item(item) => Target::Item(item),
            // Separators carry no label, so they cannot have matched.
            MenuNode::Separator => return Err(MenuError::NotFound(path.to_string())),
        };
    }
    Ok(target)
}

/// Resolves the container that `path`'s final segment attaches to.
///
/// With no `/` in the path the parent is the root bar; otherwise the
/// prefix before the last `/` is resolved as a node lookup. A failed
/// prefix lookup reports the caller's full path, not the prefix.
pub(crate) fn locate_parent_mut<'a>(
    bar: &'a mut MenuBar,
    path: &MenuPath,
) -> Result<Target<'a>, MenuError> {
    match path.parent() {
        Some(prefix) => {
            locate_mut(bar, &prefix).map_err(|_| MenuError::NotFound(path.to_string()))
        }
        None => Ok(Target::Bar(bar.entries_mut())),
    }
}

/// Resolves `path` to a shared reference on the matched node.
///
/// Same traversal as [`locate_mut`], for read-only callers.
pub fn find<'a>(bar: &'a MenuBar, path: &MenuPath) -> Result<&'a MenuNode, MenuError> {
    let mut children: &[MenuNode] = bar.entries();
    let mut matched: Option<&MenuNode> = None;
    for segment in path.segments() {
        if let Some(previous) = matched {
            children = match previous {
                MenuNode::SubMenu(menu) => menu.popup().children(),
                _ => return Err(MenuError::NotFound(path.to_string())),
            };
        }
        let node = children
            .iter()
            .find(|node| node.label() == Some(segment))
            .ok_or_else(|| MenuError::NotFound(path.to_string()))?;
        matched = Some(node);
    }
    matched.ok_or_else(|| MenuError::NotFound(path.to_string()))
}

/// Resolves `path` and requires the result to be a leaf action item.
pub fn find_item<'a>(bar: &'a MenuBar, path: &MenuPath) -> Result<&'a MenuItem, MenuError> {
    match find(bar, path)? {
        MenuNode::Item(item) => Ok(item),
        _ => Err(MenuError::NotAnItem(path.to_string())),
    }
}
