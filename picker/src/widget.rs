use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect, Spacing};
use ratatui::style::{Color, Style, Stylize};
use ratatui::symbols::block::ONE_EIGHTH as I;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, HighlightSpacing, List, ListItem, Paragraph, StatefulWidget, Widget, Wrap};

use super::*;

pub struct Picker<'s> {
  state: &'s PickerState,
  title: Option<Line<'s>>,
}

impl<'s> Picker<'s> {
  pub fn new(state: &'s PickerState) -> Self {
    Self { state, title: None }
  }

  pub fn title(mut self, title: impl Into<Line<'s>>) -> Self {
    self.title = Some(title.into());
    self
  }

  fn block<'a>() -> Block<'a> {
    Block::bordered().border_type(BorderType::Rounded).fg(Color::Rgb(0, 255, 251))
  }

  fn default_title(&self) -> Line<'static> {
    match self.state.mode() {
      PickerMode::File => Line::raw(" Select Media File "),
      PickerMode::Directory => Line::raw(" Select Output Directory "),
    }
  }

  fn draw_list(&self, visible: &[PickerEntry]) -> List<'s> {
    let filter = self.state.filter();
    let title = self.title.clone().unwrap_or_else(|| self.default_title());

    visible
      .iter()
      .map(|entry| ListItem::new(entry.apply_colors(filter)))
      .collect::<List>()
      .block(Self::block().title_top(title.centered().white()).title_bottom(self.hotkeys().centered()))
      .highlight_spacing(HighlightSpacing::Always)
      .highlight_style(Style::new().bg(Color::Rgb(50, 80, 70)).fg(Color::White).bold())
      .highlight_symbol("▶ ")
  }

  fn draw_filter(&self, visible: &[PickerEntry]) -> Paragraph<'static> {
    let filter = self.state.filter();
    let cursor = self.state.filter.cursor();
    let mut line = Line::default();

    line.push_span(Span::raw(filter[..cursor].to_string()));
    match filter[cursor..].chars().next() {
      Some(chr) => {
        line.push_span(Span::raw(chr.to_string()).dark_gray().on_white());
        line.push_span(Span::raw(filter[cursor + chr.len_utf8()..].to_string()));
      }
      None => line.push_span(Span::raw(" ").dark_gray().on_white()),
    }

    let counter = Line::raw(format!(" {} / {} ", visible.len(), self.state.total()))
      .fg(Color::DarkGray)
      .right_aligned();
    let block = Self::block()
      .title_top(Line::raw(" Filter ").white().left_aligned())
      .title_top(counter)
      .title_bottom(Line::raw(self.state.cwd().display().to_string()).yellow());

    let scroll = filter[..cursor].chars().count().saturating_sub(10) as u16;
    Paragraph::new(line).scroll((0, scroll)).block(block)
  }

  fn draw_details(&self, selected: Option<&PickerEntry>) -> Paragraph<'static> {
    let block = Self::block().title_top(Line::raw(" Details ").white().centered());

    let mut lines = match self.state.error() {
      Some(error) => vec![Line::raw(error.to_string()).red(), Line::default()],
      None => Vec::new(),
    };
    if let Some(selected) = selected {
      lines.extend(selected.details());
    }

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(block)
  }

  fn hotkeys(&self) -> Line<'static> {
    let enter = match self.state.mode() {
      PickerMode::File => " Open/Pick",
      PickerMode::Directory => " Pick",
    };

    Line::from_iter([
      Span::raw(" "),
      Span::raw("[ENTER]").fg(Color::Green),
      Span::raw(enter),
      Span::raw(" "),
      Span::raw(I),
      Span::raw(" "),
      Span::raw("[TAB/ALT←]").fg(Color::Blue),
      Span::raw(" In/Up"),
      Span::raw(" "),
      Span::raw(I),
      Span::raw(" "),
      Span::raw("[ESC]").fg(Color::Red),
      Span::raw(" Cancel "),
    ])
  }
}

impl Widget for Picker<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let visible = self.state.visible();
    let mut list_state = self.state.list_state.clone();
    let selected = list_state.selected().and_then(|i| visible.get(i));

    let [left, details_area] = Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)])
      .spacing(Spacing::Space(1))
      .areas(area);
    let [list_area, filter_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(left);

    Clear.render(area, buf);
    StatefulWidget::render(self.draw_list(&visible), list_area, buf, &mut list_state);
    self.draw_filter(&visible).render(filter_area, buf);
    self.draw_details(selected).render(details_area, buf);
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  fn buffer_text(buf: &Buffer) -> String {
    buf.content().iter().map(|cell| cell.symbol()).collect()
  }

  #[tokio::test]
  async fn test_renders_entries_and_cwd() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("clip.mkv"), b"abc").unwrap();
    let state = PickerState::open(PickerMode::File, tmp.path().to_path_buf()).await;

    let area = Rect::new(0, 0, 120, 20);
    let mut buf = Buffer::empty(area);
    Picker::new(&state).render(area, &mut buf);

    let text = buffer_text(&buf);
    assert!(text.contains("clip.mkv"));
    assert!(text.contains("Select Media File"));
    assert!(text.contains("1 / 1"));
  }
}
