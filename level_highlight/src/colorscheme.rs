use std::fmt;

use crate::Level;

/// Префикс управляющей последовательности ANSI.
pub const ESC_START: &str = "\x1b[";
/// Окончание управляющей последовательности.
pub const ESC_END: &str = "m";
pub const BOLD: &str = "1;";
pub const RED_FG: &str = "31";
pub const GREEN_FG: &str = "32";
pub const BLUE_FG: &str = "34";
pub const CYAN_FG: &str = "36";
pub const DEFAULT_FG: &str = "39";
/// Сброс стиля и возврат цвета по умолчанию.
pub const SET_DEFAULT_COLOR: &str = "\x1b[0;39m";

/// Код цвета ANSI: параметры между `ESC[` и `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCode(&'static str);

impl ColorCode {
    /// `BOLD` + `RED_FG`.
    pub const BOLD_RED: ColorCode = ColorCode(concat!("1;", "31"));
    pub const RED: ColorCode = ColorCode(RED_FG);
    pub const GREEN: ColorCode = ColorCode(GREEN_FG);
    pub const BLUE: ColorCode = ColorCode(BLUE_FG);
    pub const CYAN: ColorCode = ColorCode(CYAN_FG);
    pub const DEFAULT: ColorCode = ColorCode(DEFAULT_FG);

    /// Создать код из произвольных параметров SGR (например `"38;5;214"`).
    pub const fn new(params: &'static str) -> Self {
        Self(params)
    }

    /// Параметры SGR без обрамления.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Открывающая последовательность `ESC[<код>m`.
    pub fn escape(&self) -> String {
        format!("{ESC_START}{}{ESC_END}", self.0)
    }

    /// Раскрасить текст и вернуть цвет по умолчанию после него.
    pub fn paint(&self, text: &str) -> String {
        format!("{ESC_START}{}{ESC_END}{text}{SET_DEFAULT_COLOR}", self.0)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        ColorCode::DEFAULT
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ESC_START}{}{ESC_END}", self.0)
    }
}

/// Резолвер цвета по уровню. `None` означает неизвестный уровень.
pub type ColorResolver = fn(Option<Level>) -> ColorCode;

/// Палитра подсветки уровней по умолчанию.
pub fn highlight(level: Option<Level>) -> ColorCode {
    match level {
        Some(Level::Error) => ColorCode::BOLD_RED,
        Some(Level::Warn) => ColorCode::RED,
        Some(Level::Info) => ColorCode::GREEN,
        Some(Level::Debug) => ColorCode::BLUE,
        Some(Level::Trace) => ColorCode::CYAN,
        None => ColorCode::DEFAULT,
    }
}

pub fn resolve(level: Level) -> ColorCode {
    highlight(Some(level))
}

/// Цвет по имени уровня; нераспознанное имя даёт цвет по умолчанию.
pub fn resolve_name(name: &str) -> ColorCode {
    highlight(Level::from_str(name))
}

/// Цвет по числовому коду уровня; неизвестный код даёт цвет по умолчанию.
pub fn resolve_code(code: i32) -> ColorCode {
    highlight(Level::from_code(code))
}

/// Без подсветки: для любого уровня цвет по умолчанию.
pub fn monochrome(_level: Option<Level>) -> ColorCode {
    ColorCode::DEFAULT
}
