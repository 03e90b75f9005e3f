use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::Widget;
use ratatui::style::{Color, Style, Stylize};
use ratatui::symbols::block::ONE_EIGHTH as I;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use strum::VariantArray;

use super::*;
use crate::convert::OutputFormat;
use crate::ui::blk;
use crate::widgets::line_with_hotkey;

impl<E> App<E> {
  fn draw_header(&self) -> Paragraph<'_> {
    let block = blk()
      .title_top(Line::raw(" 🎞  Media Convert ").left_aligned())
      .title_top(Line::from_iter(self.state.as_spans()).right_aligned());

    Paragraph::new(Line::raw(self.session.status()).fg(Color::White)).block(block)
  }

  fn draw_path(&self, title: &'static str, path: Option<&Path>) -> Paragraph<'static> {
    let value = match path {
      Some(path) => Span::raw(path.display().to_string()).fg(Color::White),
      None => Span::raw("None").fg(Color::DarkGray).italic(),
    };

    Paragraph::new(Line::from(value)).block(blk().title_top(title))
  }

  fn draw_formats(&self) -> Tabs<'static> {
    let titles = OutputFormat::VARIANTS.iter().map(|format| format.to_string());
    let mut tabs = Tabs::new(titles)
      .block(blk().title_top(" Output Format ").title_bottom(Line::raw(" [←/→] change ").right_aligned()))
      .style(Style::new().fg(Color::DarkGray))
      .highlight_style(Style::new().fg(Color::Black).bg(Color::Rgb(0, 255, 251)).bold())
      .divider(I);

    if let Some(format) = self.session.format() {
      tabs = tabs.select(format.index());
    }
    tabs
  }

  fn draw_convert_button(&self) -> Paragraph<'static> {
    let (label, color) = if self.state.is_converting() {
      (Line::raw("Converting…"), Color::Yellow)
    } else if self.session.is_convert_enabled() {
      (line_with_hotkey("convert", false, Some(Color::Green), Some(Color::White)), Color::Green)
    } else {
      (Line::raw("convert").fg(Color::DarkGray), Color::DarkGray)
    };

    Paragraph::new(label.centered()).block(blk().fg(color))
  }

  fn draw_hotkeys(&self) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, label) in ["input", "output", "convert", "quit"].into_iter().enumerate() {
      if index > 0 {
        spans.push(Span::raw(I));
      }
      spans.extend(line_with_hotkey(label, true, Some(Color::Blue), Some(Color::White)).spans);
    }
    Line::from(spans).centered()
  }
}

impl<E> Widget for &App<E> {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    let [header, input, output, formats, button, activity, footer] = Layout::vertical([
      Constraint::Length(3),
      Constraint::Length(3),
      Constraint::Length(3),
      Constraint::Length(3),
      Constraint::Length(3),
      Constraint::Fill(1),
      Constraint::Length(1),
    ])
    .areas(area);
    let [button, _] = Layout::horizontal([Constraint::Length(24), Constraint::Fill(1)]).areas(button);

    self.draw_header().render(header, buf);
    self.draw_path(" Input File ", self.session.input_file()).render(input, buf);
    self.draw_path(" Output Directory ", self.session.output_directory()).render(output, buf);
    self.draw_formats().render(formats, buf);
    self.draw_convert_button().render(button, buf);
    self.logs.render(activity, buf);
    self.draw_hotkeys().render(footer, buf);

    if let Some(ref popup) = self.popup {
      popup.render(area, buf)
    }
  }
}
