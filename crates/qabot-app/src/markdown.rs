//! Markdown rendering for assistant replies.

use termimad::crossterm::style::{Attribute, Color};
use termimad::MadSkin;

const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 100;

pub struct MarkdownRenderer {
    skin: MadSkin,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default();

        skin.headers[0].set_fg(Color::Yellow);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[1].set_fg(Color::Blue);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[2].set_fg(Color::Cyan);

        skin.inline_code.set_fg(Color::Yellow);
        skin.code_block.set_fg(Color::White);
        skin.bold.add_attr(Attribute::Bold);
        skin.italic.set_fg(Color::Cyan);
        skin.quote_mark.set_fg(Color::Blue);
        skin.bullet.set_fg(Color::Green);

        Self { skin }
    }

    /// Styled terminal text, wrapped to `width` columns (clamped to 40-100).
    pub fn render(&self, markdown: &str, width: usize) -> String {
        let width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        self.skin.text(markdown, Some(width)).to_string()
    }

    /// Current terminal width in columns.
    pub fn terminal_width() -> usize {
        usize::from(termimad::terminal_size().0)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_markers_are_consumed() {
        let out = MarkdownRenderer::new().render("some **bold** words", 80);
        assert!(out.contains("bold"));
        assert!(!out.contains("**"));
    }

    #[test]
    fn inline_code_loses_backticks() {
        let out = MarkdownRenderer::new().render("run `cargo fmt` first", 80);
        assert!(out.contains("cargo fmt"));
        assert!(!out.contains('`'));
    }

    #[test]
    fn code_block_body_survives() {
        let md = "Example:\n\n```\nfn main() {}\n```\n";
        let out = MarkdownRenderer::new().render(md, 80);
        assert!(out.contains("fn main() {}"));
        assert!(!out.contains("```"));
    }

    #[test]
    fn plain_korean_text_passes_through() {
        let out = MarkdownRenderer::new().render("안녕하세요!", 80);
        assert!(out.contains("안녕하세요!"));
    }
}
