use serde::{Deserialize, Serialize};

/// Symbolic identifier for a physical keyboard key.
///
/// Every key carries a stable integer code (see [`Key::code`]) inside the
/// table's key-code space. Raw platform codes enter through
/// [`Key::from_code`], which rejects anything outside this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    // Control and navigation
    Backspace,
    Tab,
    Enter,
    Shift,
    Ctrl,
    Alt,
    PauseBreak,
    CapsLock,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    LeftArrow,
    UpArrow,
    RightArrow,
    DownArrow,
    Insert,
    Delete,

    // Top-row digits
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // OS keys
    LeftWindows,
    RightWindows,

    // Numpad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    Multiply,
    Add,
    Subtract,
    DecimalPoint,
    Divide,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Locks
    NumLock,
    ScrollLock,

    // Punctuation
    Semicolon,
    EqualSign,
    Comma,
    Dash,
    Period,
    ForwardSlash,
    GraveAccent,
    OpenBracket,
    BackSlash,
    CloseBracket,
    SingleQuote,
}

impl Key {
    /// Number of known keys.
    pub const COUNT: usize = 98;

    /// Every known key, ordered by code.
    pub const ALL: [Key; Self::COUNT] = [
        Key::Backspace,
        Key::Tab,
        Key::Enter,
        Key::Shift,
        Key::Ctrl,
        Key::Alt,
        Key::PauseBreak,
        Key::CapsLock,
        Key::Escape,
        Key::Space,
        Key::PageUp,
        Key::PageDown,
        Key::End,
        Key::Home,
        Key::LeftArrow,
        Key::UpArrow,
        Key::RightArrow,
        Key::DownArrow,
        Key::Insert,
        Key::Delete,
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::LeftWindows,
        Key::RightWindows,
        Key::Numpad0,
        Key::Numpad1,
        Key::Numpad2,
        Key::Numpad3,
        Key::Numpad4,
        Key::Numpad5,
        Key::Numpad6,
        Key::Numpad7,
        Key::Numpad8,
        Key::Numpad9,
        Key::Multiply,
        Key::Add,
        Key::Subtract,
        Key::DecimalPoint,
        Key::Divide,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::NumLock,
        Key::ScrollLock,
        Key::Semicolon,
        Key::EqualSign,
        Key::Comma,
        Key::Dash,
        Key::Period,
        Key::ForwardSlash,
        Key::GraveAccent,
        Key::OpenBracket,
        Key::BackSlash,
        Key::CloseBracket,
        Key::SingleQuote,
    ];

    /// Stable key code for this key.
    pub fn code(self) -> u8 {
        match self {
            Key::Backspace => 8,
            Key::Tab => 9,
            Key::Enter => 13,
            Key::Shift => 16,
            Key::Ctrl => 17,
            Key::Alt => 18,
            Key::PauseBreak => 19,
            Key::CapsLock => 20,
            Key::Escape => 27,
            Key::Space => 32,
            Key::PageUp => 33,
            Key::PageDown => 34,
            Key::End => 35,
            Key::Home => 36,
            Key::LeftArrow => 37,
            Key::UpArrow => 38,
            Key::RightArrow => 39,
            Key::DownArrow => 40,
            Key::Insert => 45,
            Key::Delete => 46,
            Key::Num0 => 48,
            Key::Num1 => 49,
            Key::Num2 => 50,
            Key::Num3 => 51,
            Key::Num4 => 52,
            Key::Num5 => 53,
            Key::Num6 => 54,
            Key::Num7 => 55,
            Key::Num8 => 56,
            Key::Num9 => 57,
            Key::A => 65,
            Key::B => 66,
            Key::C => 67,
            Key::D => 68,
            Key::E => 69,
            Key::F => 70,
            Key::G => 71,
            Key::H => 72,
            Key::I => 73,
            Key::J => 74,
            Key::K => 75,
            Key::L => 76,
            Key::M => 77,
            Key::N => 78,
            Key::O => 79,
            Key::P => 80,
            Key::Q => 81,
            Key::R => 82,
            Key::S => 83,
            Key::T => 84,
            Key::U => 85,
            Key::V => 86,
            Key::W => 87,
            Key::X => 88,
            Key::Y => 89,
            Key::Z => 90,
            Key::LeftWindows => 91,
            Key::RightWindows => 92,
            Key::Numpad0 => 96,
            Key::Numpad1 => 97,
            Key::Numpad2 => 98,
            Key::Numpad3 => 99,
            Key::Numpad4 => 100,
            Key::Numpad5 => 101,
            Key::Numpad6 => 102,
            Key::Numpad7 => 103,
            Key::Numpad8 => 104,
            Key::Numpad9 => 105,
            Key::Multiply => 106,
            Key::Add => 107,
            Key::Subtract => 109,
            Key::DecimalPoint => 110,
            Key::Divide => 111,
            Key::F1 => 112,
            Key::F2 => 113,
            Key::F3 => 114,
            Key::F4 => 115,
            Key::F5 => 116,
            Key::F6 => 117,
            Key::F7 => 118,
            Key::F8 => 119,
            Key::F9 => 120,
            Key::F10 => 121,
            Key::F11 => 122,
            Key::F12 => 123,
            Key::NumLock => 144,
            Key::ScrollLock => 145,
            Key::Semicolon => 186,
            Key::EqualSign => 187,
            Key::Comma => 188,
            Key::Dash => 189,
            Key::Period => 190,
            Key::ForwardSlash => 191,
            Key::GraveAccent => 192,
            Key::OpenBracket => 219,
            Key::BackSlash => 220,
            Key::CloseBracket => 221,
            Key::SingleQuote => 222,
        }
    }

    /// Look up the key for a raw code. Codes outside the table yield
    /// `None`; callers decide whether to drop or report them.
    pub fn from_code(code: u8) -> Option<Key> {
        Some(match code {
            8 => Key::Backspace,
            9 => Key::Tab,
            13 => Key::Enter,
            16 => Key::Shift,
            17 => Key::Ctrl,
            18 => Key::Alt,
            19 => Key::PauseBreak,
            20 => Key::CapsLock,
            27 => Key::Escape,
            32 => Key::Space,
            33 => Key::PageUp,
            34 => Key::PageDown,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::LeftArrow,
            38 => Key::UpArrow,
            39 => Key::RightArrow,
            40 => Key::DownArrow,
            45 => Key::Insert,
            46 => Key::Delete,
            48 => Key::Num0,
            49 => Key::Num1,
            50 => Key::Num2,
            51 => Key::Num3,
            52 => Key::Num4,
            53 => Key::Num5,
            54 => Key::Num6,
            55 => Key::Num7,
            56 => Key::Num8,
            57 => Key::Num9,
            65 => Key::A,
            66 => Key::B,
            67 => Key::C,
            68 => Key::D,
            69 => Key::E,
            70 => Key::F,
            71 => Key::G,
            72 => Key::H,
            73 => Key::I,
            74 => Key::J,
            75 => Key::K,
            76 => Key::L,
            77 => Key::M,
            78 => Key::N,
            79 => Key::O,
            80 => Key::P,
            81 => Key::Q,
            82 => Key::R,
            83 => Key::S,
            84 => Key::T,
            85 => Key::U,
            86 => Key::V,
            87 => Key::W,
            88 => Key::X,
            89 => Key::Y,
            90 => Key::Z,
            91 => Key::LeftWindows,
            92 => Key::RightWindows,
            96 => Key::Numpad0,
            97 => Key::Numpad1,
            98 => Key::Numpad2,
            99 => Key::Numpad3,
            100 => Key::Numpad4,
            101 => Key::Numpad5,
            102 => Key::Numpad6,
            103 => Key::Numpad7,
            104 => Key::Numpad8,
            105 => Key::Numpad9,
            106 => Key::Multiply,
            107 => Key::Add,
            109 => Key::Subtract,
            110 => Key::DecimalPoint,
            111 => Key::Divide,
            112 => Key::F1,
            113 => Key::F2,
            114 => Key::F3,
            115 => Key::F4,
            116 => Key::F5,
            117 => Key::F6,
            118 => Key::F7,
            119 => Key::F8,
            120 => Key::F9,
            121 => Key::F10,
            122 => Key::F11,
            123 => Key::F12,
            144 => Key::NumLock,
            145 => Key::ScrollLock,
            186 => Key::Semicolon,
            187 => Key::EqualSign,
            188 => Key::Comma,
            189 => Key::Dash,
            190 => Key::Period,
            191 => Key::ForwardSlash,
            192 => Key::GraveAccent,
            219 => Key::OpenBracket,
            220 => Key::BackSlash,
            221 => Key::CloseBracket,
            222 => Key::SingleQuote,
            _ => return None,
        })
    }
}
