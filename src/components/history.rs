use crate::domain::models::HistoryEntry;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub struct HistoryView<'a> {
    pub entries: &'a [HistoryEntry],
    pub theme: &'a Theme,
}

impl StatefulWidget for HistoryView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.entries.is_empty() {
            let hint = Paragraph::new(Line::from(vec![
                Span::styled(" Nothing run yet. Press ", self.theme.dimmed),
                Span::styled(" Ctrl+K ", self.theme.footer_segment_key),
                Span::styled(" to open the palette.", self.theme.dimmed),
            ]));
            hint.render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let icon = entry.item.icon.as_deref().unwrap_or("•");
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", entry.timestamp), self.theme.timestamp),
                    Span::styled(format!("{icon} "), self.theme.icon),
                    Span::styled(entry.item.label.as_str(), self.theme.list_item),
                    Span::styled(format!("  {}", entry.item.group_name()), self.theme.dimmed),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(self.theme.list_selected);
        StatefulWidget::render(list, area, buf, state);
    }
}
