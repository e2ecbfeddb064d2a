use console::Style;
use once_cell::sync::Lazy;

pub static BANNER: Lazy<Style> = Lazy::new(|| Style::new().magenta().underlined());
pub static MENU: Lazy<Style> = Lazy::new(|| Style::new().blue());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static INVALID: Lazy<Style> = Lazy::new(|| Style::new().red());
pub static HIGHLIGHT: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
pub static BAR: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static AXIS: Lazy<Style> = Lazy::new(|| Style::new().dim());
