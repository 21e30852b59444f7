//! CLI entry point for menupath
//!
//! Builds a sample editor window and provides commands for printing its
//! menu tree, exporting the outline as JSON, and activating actions by
//! path.

use clap::{Parser, Subcommand};
use colored::*;
use menupath::core::Command;
use menupath::window::outline::{NodeOutline, ToolbarOutline};
use menupath::window::MainWindow;

mod logger;

#[derive(Parser)]
#[command(name = "menupath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample window's menu tree and toolbar
    Tree,

    /// Print the sample window's outline as JSON
    Json,

    /// Activate the menu item at the given path
    Activate {
        /// Slash-delimited menu path, e.g. "File/Open"
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init()?;
    let cli = Cli::parse();
    let window = sample_window()?;

    match cli.command {
        Commands::Tree => print_tree(&window),
        Commands::Json => println!("{}", serde_json::to_string_pretty(&window.outline())?),
        Commands::Activate { path } => window.activate(&path)?,
    }

    Ok(())
}

/// Builds the demo window: a small editor-style menu and toolbar.
fn sample_window() -> anyhow::Result<MainWindow> {
    let mut window = MainWindow::new("Menupath Demo", 800, 600);

    window.add_submenu("File", 'F')?;
    window.add_menu_item("File/New", "Create a new document", 'N', None, say("new document"))?;
    window.add_menu_item("File/Open", "Open a document", 'O', None, say("open chooser"))?;
    window.add_menu_item("File/Save", "Save the document", 'S', None, say("saved"))?;
    window.add_menu_separator("File")?;
    window.add_menu_item("File/Exit", "Quit the demo", 'x', None, say("bye"))?;

    window.add_submenu("Edit", 'E')?;
    window.add_menu_item("Edit/Undo", "Undo the last change", 'U', None, say("undo"))?;
    window.add_menu_item("Edit/Redo", "Redo the last change", 'R', None, say("redo"))?;

    window.add_submenu("View", 'V')?;
    window.add_menu_item("View/Grid", "Toggle the grid", 'G', None, say("grid toggled"))?;
    window.add_submenu("View/Zoom", 'Z')?;
    window.add_menu_item("View/Zoom/In", "Zoom in", 'I', None, say("zoom in"))?;
    window.add_menu_item("View/Zoom/Out", "Zoom out", 'O', None, say("zoom out"))?;

    window.add_toolbar_button("File/New")?;
    window.add_toolbar_button("File/Open")?;
    window.add_toolbar_button("File/Save")?;
    window.add_toolbar_separator();
    window.add_toolbar_toggle("View/Grid", true)?;

    Ok(window)
}

/// A command that just announces itself on stdout.
fn say(message: &'static str) -> Command {
    Command::new(move || {
        println!("{} {message}", "→".cyan());
        Ok(())
    })
}

/// Render the menu tree and toolbar to stdout.
fn print_tree(window: &MainWindow) {
    let outline = window.outline();

    println!("{}", outline.title.bold());
    for node in &outline.menus {
        print_node(node, 1);
    }

    println!();
    println!("{}", "Toolbar".bold());
    for entry in &outline.toolbar {
        match entry {
            ToolbarOutline::Button { tooltip, .. } => {
                println!("  [{}] {tooltip}", "btn".green());
            }
            ToolbarOutline::Toggle { name, selected, tooltip, .. } => {
                let state = if *selected { "on".green() } else { "off".red() };
                println!("  [{}] {tooltip} ({name}, {state})", "tgl".green());
            }
            ToolbarOutline::Separator => println!("  {}", "───".dimmed()),
        }
    }
}

fn print_node(node: &NodeOutline, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        NodeOutline::Menu { label, mnemonic, children } => {
            println!("{indent}{} ({mnemonic})", label.blue().bold());
            for child in children {
                print_node(child, depth + 1);
            }
        }
        NodeOutline::Item { label, tooltip, .. } => {
            println!("{indent}{label} {}", format!("- {tooltip}").as_str().dimmed());
        }
        NodeOutline::Separator => println!("{indent}{}", "───".dimmed()),
    }
}
