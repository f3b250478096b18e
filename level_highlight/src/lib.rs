// SUBSYSTEM: common-types-logging
//! Подсветка уровня логов ANSI-цветом для консольного вывода `tracing`.
//! Уровень превращается в код цвета, форматтер оборачивает им метку уровня:
//! `2025.1205.10:15:30 \x1b[1;31mERROR\x1b[0;39m db::migrator: Migration failed`
/*
## МИССИЯ ФАЙЛА
- Краткая цель: Сопоставить уровню лога код цвета ANSI и встроить его в строку лога.
- Роль в системе: Подключаемый форматтер событий для tracing-subscriber.

## ПОЛОЖЕНИЕ В СИСТЕМЕ
- Крейт (crate): level_highlight
- Модуль (module): level_highlight::lib
- Связанные файлы/модули: level.rs, colorscheme.rs, format.rs, bin/demo.rs

## ВНЕШНИЕ ЗАВИСИМОСТИ
- Crates: chrono, tracing, tracing-subscriber
- Внутренние модули: level, colorscheme, format

## ПУБЛИЧНЫЙ ИНТЕРФЕЙС (API)
- Перечисления (enum): Level — уровни логов TRACE..ERROR.
- Структуры (struct): ColorCode — код цвета ANSI; HighlightFormat — форматтер событий.
- Функции/методы:
  - highlight: `fn highlight(level: Option<Level>) -> ColorCode` — палитра по умолчанию.
  - resolve: `fn resolve(level: Level) -> ColorCode` — цвет известного уровня.
  - resolve_name: `fn resolve_name(name: &str) -> ColorCode` — цвет по имени уровня.
  - resolve_code: `fn resolve_code(code: i32) -> ColorCode` — цвет по числовому коду.

## АЛГОРИТМЫ И ПОТОКИ ДАННЫХ
- Фиксированная таблица: ERROR → 1;31, WARN → 31, INFO → 32, DEBUG → 34, TRACE → 36,
  всё остальное → 39.
- Форматтер пишет timestamp, окрашенный уровень, target и поля события; после уровня
  цвет сбрасывается последовательностью `ESC[0;39m`.

## ВЗАИМОДЕЙСТВИЯ
- Каналы/очереди: нет.
- Сеть/файлы: не используются; вывод выполняет writer подписчика tracing.

## ТЕСТЫ
- Модульные: таблица цветов, неизвестные уровни, разбор уровней, вывод форматтера.

## ПРИМЕРЫ ИСПОЛЬЗОВАНИЯ
- `tracing_subscriber::fmt().event_format(HighlightFormat::new()).init()`
- `resolve(Level::Warn).paint("WARN")`

## ИСТОРИЯ ИЗМЕНЕНИЙ
- Stardate 2026.1017: Форматтер событий для tracing-subscriber.
*/

pub mod colorscheme;
pub mod format;
mod level;

pub use colorscheme::{highlight, resolve, resolve_code, resolve_name, ColorCode, ColorResolver};
pub use format::HighlightFormat;
pub use level::Level;
