//! Terminal rendering module for rich markdown output
//!
//! [`TerminalRenderer`] prints markdown through termimad with a plain-text
//! fallback. [`TerminalMap`] uses it to stand in for a map view.

use anyhow::Result;
use log::warn;
use termimad::{crossterm::style::Color, MadSkin};
use waymark_core::{Camera, MapRenderer, MapStyle, MarkerCommand};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                // Keep the hash marks visible on headers
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// A map view that prints what it is asked to draw.
pub struct TerminalMap {
    output: TerminalRenderer,
    drawn: usize,
}

impl TerminalMap {
    pub fn new(output: TerminalRenderer) -> Self {
        Self { output, drawn: 0 }
    }

    /// The terminal used for everything that is not a map update.
    pub fn output(&self) -> &TerminalRenderer {
        &self.output
    }

    /// Number of markers currently on the map.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    fn print(&self, markdown: &str) {
        if let Err(e) = self.output.render(markdown) {
            warn!("Failed to render map update: {e}");
        }
    }
}

impl MapRenderer for TerminalMap {
    fn apply(&mut self, commands: &[MarkerCommand]) {
        let mut markdown = String::new();
        for command in commands {
            match command {
                MarkerCommand::Create { .. } => self.drawn += 1,
                MarkerCommand::Destroy { .. } => self.drawn = self.drawn.saturating_sub(1),
                MarkerCommand::Resize { .. } => {}
            }
            markdown.push_str(&format!("`{command}`\n"));
        }
        self.print(&markdown);
    }

    fn move_camera(&mut self, camera: &Camera) {
        self.print(&format!("*camera: {camera}*\n"));
    }

    fn load_style(&mut self, style: MapStyle) {
        self.print(&format!("*style: {} ({})*\n", style, style.uri()));
    }
}
