// winit physical-key mapping for keytick.
//
// Feeds winit keyboard events into a KeyEventSink so a winit-driven loop
// can use the keytick timer table without touching raw key codes.

use keytick::{Key, KeyEventSink};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Feed a window event into `sink`.
///
/// Only keyboard input with a mapped physical key is delivered; key
/// repeats are forwarded as-is (the table ignores duplicate downs).
/// Returns true when the event was delivered and the table is configured
/// to swallow input, meaning the caller should treat it as consumed.
pub fn forward_window_event(sink: &KeyEventSink, event: &WindowEvent) -> bool {
    if let WindowEvent::KeyboardInput { event, .. } = event {
        forward_key(sink, event.physical_key, event.state)
    } else {
        false
    }
}

/// Feed a single physical-key transition into `sink`. Same return
/// contract as [`forward_window_event`].
pub fn forward_key(sink: &KeyEventSink, physical_key: PhysicalKey, state: ElementState) -> bool {
    let PhysicalKey::Code(code) = physical_key else {
        return false;
    };
    let Some(key) = from_key_code(code) else {
        log::debug!("dropping unmapped key code {code:?}");
        return false;
    };
    match state {
        ElementState::Pressed => sink.key_down(key),
        ElementState::Released => sink.key_up(key),
    }
}

/// Map a winit physical key code to [`Key`].
///
/// Left/right modifier pairs collapse onto the single Shift/Ctrl/Alt
/// keys of the table; keys the table does not know yield `None`.
pub fn from_key_code(code: KeyCode) -> Option<Key> {
    Some(match code {
        // Letters
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        // Top-row digits
        KeyCode::Digit0 => Key::Num0,
        KeyCode::Digit1 => Key::Num1,
        KeyCode::Digit2 => Key::Num2,
        KeyCode::Digit3 => Key::Num3,
        KeyCode::Digit4 => Key::Num4,
        KeyCode::Digit5 => Key::Num5,
        KeyCode::Digit6 => Key::Num6,
        KeyCode::Digit7 => Key::Num7,
        KeyCode::Digit8 => Key::Num8,
        KeyCode::Digit9 => Key::Num9,

        // Function keys
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,

        // Control and navigation
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::ShiftLeft => Key::Shift,
        KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft => Key::Ctrl,
        KeyCode::ControlRight => Key::Ctrl,
        KeyCode::AltLeft => Key::Alt,
        KeyCode::AltRight => Key::Alt,
        KeyCode::Pause => Key::PauseBreak,
        KeyCode::CapsLock => Key::CapsLock,
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Space,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::End => Key::End,
        KeyCode::Home => Key::Home,
        KeyCode::ArrowLeft => Key::LeftArrow,
        KeyCode::ArrowUp => Key::UpArrow,
        KeyCode::ArrowRight => Key::RightArrow,
        KeyCode::ArrowDown => Key::DownArrow,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,

        // OS keys
        KeyCode::SuperLeft => Key::LeftWindows,
        KeyCode::SuperRight => Key::RightWindows,

        // Numpad
        KeyCode::Numpad0 => Key::Numpad0,
        KeyCode::Numpad1 => Key::Numpad1,
        KeyCode::Numpad2 => Key::Numpad2,
        KeyCode::Numpad3 => Key::Numpad3,
        KeyCode::Numpad4 => Key::Numpad4,
        KeyCode::Numpad5 => Key::Numpad5,
        KeyCode::Numpad6 => Key::Numpad6,
        KeyCode::Numpad7 => Key::Numpad7,
        KeyCode::Numpad8 => Key::Numpad8,
        KeyCode::Numpad9 => Key::Numpad9,
        KeyCode::NumpadMultiply => Key::Multiply,
        KeyCode::NumpadAdd => Key::Add,
        KeyCode::NumpadSubtract => Key::Subtract,
        KeyCode::NumpadDecimal => Key::DecimalPoint,
        KeyCode::NumpadDivide => Key::Divide,

        // Locks
        KeyCode::NumLock => Key::NumLock,
        KeyCode::ScrollLock => Key::ScrollLock,

        // Punctuation
        KeyCode::Semicolon => Key::Semicolon,
        KeyCode::Equal => Key::EqualSign,
        KeyCode::Comma => Key::Comma,
        KeyCode::Minus => Key::Dash,
        KeyCode::Period => Key::Period,
        KeyCode::Slash => Key::ForwardSlash,
        KeyCode::Backquote => Key::GraveAccent,
        KeyCode::BracketLeft => Key::OpenBracket,
        KeyCode::Backslash => Key::BackSlash,
        KeyCode::BracketRight => Key::CloseBracket,
        KeyCode::Quote => Key::SingleQuote,

        _ => return None,
    })
}
