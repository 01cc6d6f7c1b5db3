use console::style;
use std::fmt::Display;

/// Deep orange: outer flames, title mark
pub fn ember<D: Display>(text: D) -> String {
    style(text).color256(166).to_string()
}

/// Bright orange bold: flame core while burning
pub fn flame<D: Display>(text: D) -> String {
    style(text).color256(208).bold().to_string()
}

/// Dim orange: banked fire at rest
pub fn glow<D: Display>(text: D) -> String {
    style(text).color256(130).dim().to_string()
}

/// Light grey: the reply, read from the ashes
pub fn ash<D: Display>(text: D) -> String {
    style(text).color256(250).to_string()
}

/// White bold: titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: subtitles, footer, decorative lines
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Green: confirmed values in status output
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Yellow: warnings, missing settings
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}
