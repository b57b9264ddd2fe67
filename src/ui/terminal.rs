//! ANSI terminal implementation of [`Renderer`].
//!
//! The terminal is append-only: replacing the list reprints the header and
//! every preview, appending prints only the new rows with continued
//! numbering. Output goes to any `std::io::Write`, so tests render into a
//! `Vec<u8>`.

use crate::app::Overlay;
use crate::domain::error::Result;
use crate::ui::components;
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BookDetail, BookPreview, DropdownOption, ShowMoreLabel};
use std::io::Write;

/// Title shown in the header bar.
pub const APP_TITLE: &str = "Book Connect";

/// Renders the catalog as styled lines of text.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
    cols: usize,
    /// Number of previews currently on screen, for row numbering.
    shown: usize,
    genres: Vec<DropdownOption>,
    authors: Vec<DropdownOption>,
}

impl<W: Write> TerminalRenderer<W> {
    #[must_use]
    pub fn new(out: W, theme: Theme, cols: usize) -> Self {
        Self {
            out,
            theme,
            cols,
            shown: 0,
            genres: Vec::new(),
            authors: Vec::new(),
        }
    }

    /// Number of previews on screen.
    #[must_use]
    pub const fn shown(&self) -> usize {
        self.shown
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn replace_list(&mut self, items: &[BookPreview]) -> Result<()> {
        components::render_header(&mut self.out, APP_TITLE, &self.theme, self.cols)?;
        components::render_table_headers(&mut self.out, &self.theme, self.cols)?;
        components::render_table_rows(&mut self.out, items, 1, &self.theme, self.cols)?;
        self.shown = items.len();
        self.out.flush()?;
        Ok(())
    }

    fn append_list(&mut self, items: &[BookPreview]) -> Result<()> {
        components::render_table_rows(&mut self.out, items, self.shown + 1, &self.theme, self.cols)?;
        self.shown += items.len();
        self.out.flush()?;
        Ok(())
    }

    fn toggle_empty_message(&mut self, show: bool) -> Result<()> {
        if show {
            components::render_empty_state(&mut self.out, &self.theme, self.cols)?;
        }
        Ok(())
    }

    fn update_show_more(&mut self, label: &ShowMoreLabel) -> Result<()> {
        components::render_rule(&mut self.out, &self.theme, self.cols)?;
        components::render_show_more(&mut self.out, label, &self.theme, self.cols)?;
        components::render_footer(&mut self.out, &self.theme, self.cols)?;
        self.out.flush()?;
        Ok(())
    }

    fn show_detail(&mut self, detail: &BookDetail) -> Result<()> {
        components::render_rule(&mut self.out, &self.theme, self.cols)?;
        components::render_detail(&mut self.out, detail, &self.theme, self.cols)?;
        components::render_rule(&mut self.out, &self.theme, self.cols)?;
        self.out.flush()?;
        Ok(())
    }

    fn apply_theme(&mut self, theme: &Theme) -> Result<()> {
        self.theme = theme.clone();
        writeln!(
            self.out,
            "{}{}theme: {}{}",
            Theme::bg(&self.theme.colors.color_light),
            Theme::fg(&self.theme.colors.color_dark),
            self.theme.name,
            Theme::reset()
        )?;
        Ok(())
    }

    fn populate_filters(&mut self, genres: &[DropdownOption], authors: &[DropdownOption]) -> Result<()> {
        self.genres = genres.to_vec();
        self.authors = authors.to_vec();
        Ok(())
    }

    fn open_overlay(&mut self, overlay: Overlay) -> Result<()> {
        match overlay {
            Overlay::Search => components::render_search_overlay(
                &mut self.out,
                &self.genres,
                &self.authors,
                &self.theme,
                self.cols,
            )?,
            Overlay::Settings => {
                components::render_settings_overlay(&mut self.out, &self.theme.name, &self.theme, self.cols)?;
            }
            // the card itself is drawn by show_detail
            Overlay::Detail => {}
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeMode;

    fn preview(id: &str, title: &str) -> BookPreview {
        BookPreview {
            id: id.to_string(),
            image: String::new(),
            title: title.to_string(),
            author: "Ada Writer".to_string(),
        }
    }

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn append_continues_numbering() {
        let mut r = TerminalRenderer::new(Vec::new(), Theme::default(), 60);
        r.replace_list(&[preview("a", "Alpha"), preview("b", "Beta")]).unwrap();
        r.append_list(&[preview("c", "Gamma")]).unwrap();
        assert_eq!(r.shown(), 3);

        let text = output(r);
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("1."));
        assert!(text.contains("3."));
        assert!(text.contains("Gamma"));
    }

    #[test]
    fn replace_resets_count() {
        let mut r = TerminalRenderer::new(Vec::new(), Theme::default(), 60);
        r.replace_list(&[preview("a", "Alpha"), preview("b", "Beta")]).unwrap();
        r.replace_list(&[]).unwrap();
        assert_eq!(r.shown(), 0);
    }

    #[test]
    fn empty_message_only_when_shown() {
        let mut r = TerminalRenderer::new(Vec::new(), Theme::default(), 80);
        r.toggle_empty_message(false).unwrap();
        assert!(output(r).is_empty());

        let mut r = TerminalRenderer::new(Vec::new(), Theme::default(), 80);
        r.toggle_empty_message(true).unwrap();
        assert!(output(r).contains(components::EMPTY_MESSAGE));
    }

    #[test]
    fn show_more_label_is_printed() {
        let mut r = TerminalRenderer::new(Vec::new(), Theme::default(), 80);
        r.update_show_more(&ShowMoreLabel::new(7)).unwrap();
        assert!(output(r).contains("[ Show more (7) ]"));
    }

    #[test]
    fn detail_card_shows_subtitle_and_description() {
        let mut r = TerminalRenderer::new(Vec::new(), Theme::default(), 40);
        r.show_detail(&BookDetail {
            id: "wp".to_string(),
            image: "https://covers.example/wp.jpg".to_string(),
            title: "War and Peace".to_string(),
            subtitle: "Leo Tolstoy (1869)".to_string(),
            description: "A long novel about Russian society during the Napoleonic era.".to_string(),
        })
        .unwrap();

        let text = output(r);
        assert!(text.contains("Leo Tolstoy (1869)"));
        assert!(text.contains("https://covers.example/wp.jpg"));
        assert!(text.contains("Napoleonic era."));
    }

    #[test]
    fn theme_switch_changes_palette() {
        let mut r = TerminalRenderer::new(Vec::new(), Theme::from_mode(ThemeMode::Day), 40);
        r.apply_theme(&Theme::from_mode(ThemeMode::Night)).unwrap();
        assert_eq!(r.theme().name, "night");
        assert!(output(r).contains("theme: night"));
    }

    #[test]
    fn search_overlay_lists_dropdown_values() {
        let mut r = TerminalRenderer::new(Vec::new(), Theme::default(), 120);
        let genres = vec![DropdownOption { value: "any".into(), label: "All Genres".into() }];
        let authors = vec![
            DropdownOption { value: "any".into(), label: "All Authors".into() },
            DropdownOption { value: "a1".into(), label: "Ada Writer".into() },
        ];
        r.populate_filters(&genres, &authors).unwrap();
        r.open_overlay(Overlay::Search).unwrap();

        let text = output(r);
        assert!(text.contains("any (All Genres)"));
        assert!(text.contains("a1 (Ada Writer)"));
    }
}
