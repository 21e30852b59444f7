use std::cell::Cell;
use std::rc::Rc;

use crate::core::{Command, Icon, MenuError};
use crate::window::{MainWindow, ToolbarEntry};

fn counting_command(counter: &Rc<Cell<u32>>) -> Command {
    let counter = Rc::clone(counter);
    Command::new(move || {
        counter.set(counter.get() + 1);
        Ok(())
    })
}

/// A window with File/Open (iconned) and View/Grid items.
fn sample_window(counter: &Rc<Cell<u32>>) -> MainWindow {
    let mut window = MainWindow::new("Test", 640, 480);
    window.add_submenu("File", 'F').expect("bar accepts menus");
    window
        .add_menu_item(
            "File/Open",
            "Open a file",
            'O',
            Some(Icon::from_bytes("icons/open.png", vec![1, 2, 3])),
            counting_command(counter),
        )
        .expect("File accepts items");
    window.add_submenu("View", 'V').expect("bar accepts menus");
    window
        .add_menu_item("View/Grid", "Toggle the grid", 'G', None, counting_command(counter))
        .expect("View accepts items");
    window
}

#[test]
fn test_button_copies_icon_tooltip_and_commands() {
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);

    let button = window.add_toolbar_button("File/Open").expect("item exists");
    assert_eq!(button.tooltip(), "Open a file");
    assert_eq!(
        button.icon().map(|icon| icon.resource()),
        Some("icons/open.png")
    );

    // Menu item and button fire the same handler
    button.activate();
    window.activate("File/Open").expect("item exists");
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_button_requires_an_action_item() {
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);

    let err = window.add_toolbar_button("File").expect_err("File is a menu");
    assert!(matches!(err, MenuError::NotAnItem(path) if path == "File"));
    assert!(window.toolbar().is_empty());
}

#[test]
fn test_button_requires_an_existing_path() {
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);

    let err = window.add_toolbar_button("File/Print").expect_err("no such item");
    assert!(matches!(err, MenuError::NotFound(path) if path == "File/Print"));
    assert!(window.toolbar().is_empty());
}

#[test]
fn test_returned_button_is_mutable() {
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);

    let button = window.add_toolbar_button("File/Open").expect("item exists");
    button.set_tooltip("Open…");

    match &window.toolbar().entries()[0] {
        ToolbarEntry::Button(button) => assert_eq!(button.tooltip(), "Open…"),
        _ => panic!("expected a button"),
    }
}

#[test]
fn test_toggle_is_found_by_path_name() {
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);
    window.add_toolbar_toggle("View/Grid", true).expect("item exists");

    let toggle = window.toolbar_toggle("View/Grid").expect("registered above");
    assert!(toggle.is_selected());
    assert_eq!(toggle.tooltip(), "Toggle the grid");
}

#[test]
fn test_toggle_lookup_misses_unknown_names() {
    let counter = Rc::new(Cell::new(0));
    let window = sample_window(&counter);
    assert!(window.toolbar_toggle("View/Grid").is_none());
}

#[test]
fn test_duplicate_toggle_names_first_match_wins() {
    // Duplicate names are never rejected at registration; lookup returns
    // the earliest toggle in toolbar order
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);
    window.add_toolbar_toggle("View/Grid", true).expect("item exists");
    window.add_toolbar_toggle("View/Grid", false).expect("item exists");

    let toggle = window.toolbar_toggle("View/Grid").expect("two registered");
    assert!(toggle.is_selected());
}

#[test]
fn test_toggle_state_mutation() {
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);
    window.add_toolbar_toggle("View/Grid", false).expect("item exists");

    {
        let toggle = window.toolbar_toggle_mut("View/Grid").expect("registered");
        assert!(toggle.toggle());
    }
    assert!(window.toolbar_toggle("View/Grid").expect("registered").is_selected());

    window
        .toolbar_toggle_mut("View/Grid")
        .expect("registered")
        .set_selected(false);
    assert!(!window.toolbar_toggle("View/Grid").expect("registered").is_selected());
}

#[test]
fn test_toggle_shares_the_item_handler() {
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);
    window.add_toolbar_toggle("View/Grid", false).expect("item exists");

    window.toolbar_toggle("View/Grid").expect("registered").activate();
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_toolbar_separator_and_order() {
    let counter = Rc::new(Cell::new(0));
    let mut window = sample_window(&counter);
    window.add_toolbar_button("File/Open").expect("item exists");
    window.add_toolbar_separator();
    window.add_toolbar_toggle("View/Grid", true).expect("item exists");

    let entries = window.toolbar().entries();
    assert_eq!(entries.len(), 3);
    assert!(matches!(entries[0], ToolbarEntry::Button(_)));
    assert!(matches!(entries[1], ToolbarEntry::Separator));
    assert!(matches!(entries[2], ToolbarEntry::Toggle(_)));
}
