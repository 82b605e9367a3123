use console::style;

use crate::types::{Grade, Rgb};

/// Styled terminal output for command handlers
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress informational lines; errors and warnings still print
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    pub fn header(&self, message: &str) {
        if !self.quiet {
            println!("\n{}", style(message).bold().underlined());
        }
    }

    pub fn section(&self, message: &str) {
        if !self.quiet {
            println!("\n{}", style(message).bold());
            println!("{}", "─".repeat(40));
        }
    }

    /// Aligned `label: value` line
    pub fn field(&self, label: &str, value: impl std::fmt::Display) {
        if !self.quiet {
            println!("  {:<14} {}", style(format!("{}:", label)).dim(), value);
        }
    }

    pub fn item(&self, message: &str) {
        if !self.quiet {
            println!("  • {}", message);
        }
    }

    /// Hex value behind a color block, where the terminal supports it
    pub fn swatch(hex: &str) -> String {
        match Rgb::parse_hex(hex) {
            Some(rgb) => format!("{} {}", style("■").color256(ansi256(rgb)), hex),
            None => hex.to_string(),
        }
    }

    /// Grade colored by band
    pub fn grade(grade: Grade) -> String {
        match grade {
            Grade::APlus | Grade::A => style(grade).green().bold().to_string(),
            Grade::BPlus | Grade::B | Grade::CPlus | Grade::C => {
                style(grade).yellow().bold().to_string()
            }
            Grade::D | Grade::F => style(grade).red().bold().to_string(),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// Nearest color in the 6x6x6 cube of the 256-color palette
fn ansi256(rgb: Rgb) -> u8 {
    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    16 + 36 * level(rgb.r) + 6 * level(rgb.g) + level(rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi256_cube_corners() {
        assert_eq!(ansi256(Rgb { r: 0, g: 0, b: 0 }), 16);
        assert_eq!(ansi256(Rgb { r: 255, g: 255, b: 255 }), 231);
        assert_eq!(ansi256(Rgb { r: 255, g: 0, b: 0 }), 196);
    }

    #[test]
    fn test_swatch_keeps_malformed_value() {
        assert_eq!(Output::swatch("teal"), "teal");
    }
}
