use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use super::theme::{indicators, Theme};

pub struct SidebarProps<'a> {
    pub area: Rect,
    pub titles: &'a [String],
    pub active: Option<usize>,
    pub cursor: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

pub fn render_sidebar(frame: &mut Frame<'_>, props: SidebarProps<'_>) {
    let border = if props.focused {
        props.theme.border_focused
    } else {
        props.theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Conversations ");
    let inner = block.inner(props.area);
    frame.render_widget(block, props.area);

    let height = inner.height as usize;
    let skip = props.cursor.saturating_sub(height.saturating_sub(1));
    let items: Vec<ListItem> = props
        .titles
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(idx, title)| build_item(idx, title, &props))
        .collect();
    frame.render_widget(List::new(items), inner);
}

fn build_item(idx: usize, title: &str, props: &SidebarProps<'_>) -> ListItem<'static> {
    let marker = if props.active == Some(idx) {
        Span::styled(format!("{} ", indicators::ACTIVE), props.theme.accent)
    } else {
        Span::raw("  ")
    };
    let mut item = ListItem::new(Line::from(vec![marker, Span::raw(title.to_string())]));
    if props.focused && idx == props.cursor {
        item = item.style(props.theme.selected);
    }
    item
}
