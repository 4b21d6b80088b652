//! Clipboard export of the current scene.

use crate::error::Result;
use crate::plot::Scene;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy the scene summary; returns the number of lines copied.
pub fn copy_scene(scene: &Scene) -> Result<usize> {
    let text = scene.describe();
    copy_to_clipboard(&text)?;
    Ok(text.lines().count())
}
