// Fri Aug 28 2026 - Alex

use colored::*;

pub struct Banner {
    title: String,
    subtitle: Option<String>,
    version: Option<String>,
    style: BannerStyle,
    use_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    Simple,
    Fancy,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            version: None,
            style: BannerStyle::Fancy,
            use_color: true,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_style(mut self, style: BannerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render(&self) -> String {
        match self.style {
            BannerStyle::Simple => self.render_simple(),
            BannerStyle::Fancy => self.render_fancy(),
        }
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }

    fn render_simple(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("=== {} ===", self.title));

        if let Some(subtitle) = &self.subtitle {
            lines.push(subtitle.clone());
        }

        if let Some(version) = &self.version {
            lines.push(format!("Version: {}", version));
        }

        lines.join("\n")
    }

    fn render_fancy(&self) -> String {
        let ascii_art = r#"
  ____ _____ ____    ____      _ _ _     _
 | __ )_   _/ ___|  / ___|___ | | (_) __| | ___ _ __
 |  _ \ | || |     | |   / _ \| | | |/ _` |/ _ \ '__|
 | |_) || || |___  | |__| (_) | | | | (_| |  __/ |
 |____/ |_| \____|  \____\___/|_|_|_|\__,_|\___|_|
        "#;

        let mut lines = Vec::new();

        if self.use_color {
            for line in ascii_art.lines() {
                lines.push(line.cyan().bold().to_string());
            }
        } else {
            lines.push(ascii_art.to_string());
        }

        lines.push(String::new());

        if let Some(subtitle) = &self.subtitle {
            let centered = format!("{:^56}", subtitle);
            if self.use_color {
                lines.push(centered.yellow().to_string());
            } else {
                lines.push(centered);
            }
        }

        if let Some(version) = &self.version {
            let centered = format!("{:^56}", format!("v{}", version));
            if self.use_color {
                lines.push(centered.green().to_string());
            } else {
                lines.push(centered);
            }
        }

        lines.push(String::new());

        lines.join("\n")
    }

    pub fn print_default() {
        Banner::new("BTC Collider")
            .with_subtitle("Concurrent Balance Probe")
            .with_version(env!("CARGO_PKG_VERSION"))
            .print();
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new("BTC Collider").with_subtitle("Concurrent Balance Probe")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_banner_layout() {
        let rendered = Banner::new("Probe")
            .with_subtitle("sub")
            .with_version("1.0.0")
            .with_style(BannerStyle::Simple)
            .render();

        assert_eq!(rendered, "=== Probe ===\nsub\nVersion: 1.0.0");
    }

    #[test]
    fn test_fancy_banner_without_color() {
        let rendered = Banner::new("Probe")
            .with_color(false)
            .with_version("1.0.0")
            .render();

        assert!(rendered.contains("v1.0.0"));
    }
}
