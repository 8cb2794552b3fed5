use docdex_content::Fragment;
use docdex_content::FragmentOrigin;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Text;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

/// The content display surface. Fragment bodies are markup and are shown
/// verbatim; the pane never parses them.
#[derive(Debug, Default)]
pub(crate) struct ContentPane {
    html: String,
    origin: Option<FragmentOrigin>,
    scroll: u16,
}

impl ContentPane {
    pub(crate) fn show(&mut self, fragment: Fragment) {
        self.html = fragment.html;
        self.origin = Some(fragment.origin);
        self.scroll = 0;
    }

    pub(crate) fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub(crate) fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    #[cfg(test)]
    pub(crate) fn body(&self) -> &str {
        &self.html
    }

    #[cfg(test)]
    pub(crate) fn origin(&self) -> Option<FragmentOrigin> {
        self.origin
    }

    pub(crate) fn render(&self, frame: &mut Frame, area: Rect) {
        let title = match self.origin {
            None => " Documentation (loading) ".to_string(),
            Some(FragmentOrigin::Store) => " Documentation ".to_string(),
            Some(FragmentOrigin::Fallback) => " Documentation (placeholder) ".to_string(),
            Some(FragmentOrigin::NotFound) => " Documentation (not found) ".to_string(),
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let body = if self.origin.is_none() {
            Text::from("Loading…".dim())
        } else {
            Text::raw(self.html.as_str())
        };
        let paragraph = Paragraph::new(body)
            .style(Style::default())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
