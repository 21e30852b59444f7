use crate::core::{Command, Icon};
use crate::window::outline::{NodeOutline, ToolbarOutline, WindowOutline};
use crate::window::MainWindow;

fn noop() -> Command {
    Command::new(|| Ok(()))
}

fn sample_window() -> MainWindow {
    let mut window = MainWindow::new("Editor", 800, 600);
    window.add_submenu("File", 'F').expect("bar accepts menus");
    window
        .add_menu_item(
            "File/Open",
            "Open a file",
            'O',
            Some(Icon::from_bytes("icons/open.png", vec![1])),
            noop(),
        )
        .expect("File accepts items");
    window.add_menu_separator("File").expect("File is a menu");
    window
        .add_menu_item("File/Exit", "Quit", 'x', None, noop())
        .expect("File accepts items");
    window.add_toolbar_button("File/Open").expect("item exists");
    window.add_toolbar_separator();
    window.add_toolbar_toggle("File/Exit", false).expect("item exists");
    window
}

#[test]
fn test_outline_mirrors_the_trees() {
    let expected = WindowOutline {
        title: "Editor".to_string(),
        menus: vec![NodeOutline::Menu {
            label: "File".to_string(),
            mnemonic: 'F',
            children: vec![
                NodeOutline::Item {
                    label: "Open".to_string(),
                    tooltip: "Open a file".to_string(),
                    mnemonic: 'O',
                    icon: Some("icons/open.png".to_string()),
                },
                NodeOutline::Separator,
                NodeOutline::Item {
                    label: "Exit".to_string(),
                    tooltip: "Quit".to_string(),
                    mnemonic: 'x',
                    icon: None,
                },
            ],
        }],
        toolbar: vec![
            ToolbarOutline::Button {
                tooltip: "Open a file".to_string(),
                icon: Some("icons/open.png".to_string()),
            },
            ToolbarOutline::Separator,
            ToolbarOutline::Toggle {
                name: "File/Exit".to_string(),
                selected: false,
                tooltip: "Quit".to_string(),
                icon: None,
            },
        ],
    };

    assert_eq!(sample_window().outline(), expected);
}

#[test]
fn test_outline_serialises_to_json_and_back() {
    let outline = sample_window().outline();
    let json = serde_json::to_string(&outline).expect("outline serialises");
    let parsed: WindowOutline = serde_json::from_str(&json).expect("outline parses");
    assert_eq!(parsed, outline);
}

#[test]
fn test_outline_tags_node_kinds() {
    let json = serde_json::to_string(&sample_window().outline()).expect("outline serialises");
    assert!(json.contains("\"kind\":\"menu\""));
    assert!(json.contains("\"kind\":\"separator\""));
    assert!(json.contains("\"kind\":\"toggle\""));
}
