mod prompt;
mod renderer;
mod spinner;
mod style;
mod theme;

pub use prompt::answered;
pub use renderer::TerminalRenderer;
pub use spinner::Spinner;
pub use style::Style;
pub use theme::Theme;
