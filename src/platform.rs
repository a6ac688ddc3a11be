//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit and language shortcuts
/// - macOS: SUPER (Cmd key) is also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Whether a key event carries the platform shortcut modifier (or plain Ctrl)
pub fn has_shortcut_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
