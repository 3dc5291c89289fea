use iced::widget::{Column, Row, Space, container, mouse_area, text};
use iced::{Element, Length, alignment, mouse};
use sidemenu::{Chevron, MenuRow, NodeId};

use crate::theme::{MenuTheme, menu_style, row_style};

const ROW_FONT_SIZE: f32 = 14.0;
const ICON_FONT_SIZE: f32 = 12.0;
const ROW_VERTICAL_PADDING: f32 = 6.0;
const ROW_HORIZONTAL_PADDING: f32 = 10.0;
const DEFAULT_INDENT_WIDTH: f32 = 14.0;

/// Data handed to a custom row content renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemContent<'a> {
    pub icon: Option<&'a str>,
    pub value: Option<&'a str>,
    pub label: &'a str,
}

impl<'a> From<&'a MenuRow> for ItemContent<'a> {
    fn from(row: &'a MenuRow) -> Self {
        Self {
            icon: row.icon.as_deref(),
            value: row.value.as_deref(),
            label: &row.label,
        }
    }
}

type PressAction<'a, Message> = dyn Fn(NodeId) -> Message + 'a;
type ContentRenderer<'a, Message> =
    dyn Fn(ItemContent<'a>) -> Element<'a, Message> + 'a;

/// Renders realized menu rows as an `iced` column.
pub struct MenuView<'a, Message: Clone + 'a> {
    rows: &'a [MenuRow],
    rtl: bool,
    theme: MenuTheme,
    on_press: Option<Box<PressAction<'a, Message>>>,
    render_content: Option<Box<ContentRenderer<'a, Message>>>,
    indent_width: f32,
    spacing: f32,
}

impl<'a, Message> MenuView<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a view over `rows` with the default theme.
    ///
    /// Resolve the configured theme once with [`MenuTheme::from_name`] and
    /// hand it over through [`MenuView::theme`].
    pub fn new(rows: &'a [MenuRow], rtl: bool) -> Self {
        Self {
            rows,
            rtl,
            theme: MenuTheme::default(),
            on_press: None,
            render_content: None,
            indent_width: DEFAULT_INDENT_WIDTH,
            spacing: 0.0,
        }
    }

    /// Emit a message when an item row is clicked.
    pub fn on_press(
        mut self,
        on_press: impl Fn(NodeId) -> Message + 'a,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Replace the default icon, label and chevron content of item rows.
    pub fn render_menu_item_content(
        mut self,
        render: impl Fn(ItemContent<'a>) -> Element<'a, Message> + 'a,
    ) -> Self {
        self.render_content = Some(Box::new(render));
        self
    }

    pub fn theme(mut self, theme: MenuTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Set indentation width per nesting level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the menu.
    pub fn view(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(self.spacing);

        for row in self.rows {
            column = column.push(self.row_element(row));
        }

        let theme = self.theme;
        container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| menu_style(&theme))
            .into()
    }

    fn row_element(&self, row: &'a MenuRow) -> Element<'a, Message> {
        let content = match (&self.render_content, row.divider) {
            (Some(render), false) => render(ItemContent::from(row)),
            _ => default_content(row, self.rtl),
        };

        let mut line = Row::new().spacing(0.0);
        let indent = indent_for(row.level, self.indent_width);
        let indent: Option<Element<'a, Message>> = (indent > 0.0)
            .then(|| Space::new().width(Length::Fixed(indent)).into());

        if self.rtl {
            line = line.push(content);
            if let Some(indent) = indent {
                line = line.push(indent);
            }
        } else {
            if let Some(indent) = indent {
                line = line.push(indent);
            }
            line = line.push(content);
        }

        let style = row_style(&self.theme, row);
        let element: Element<'a, Message> = container(line)
            .padding([ROW_VERTICAL_PADDING, ROW_HORIZONTAL_PADDING])
            .width(Length::Fill)
            .style(move |_| style)
            .into();

        match (&self.on_press, row.divider) {
            (Some(on_press), false) => mouse_area(element)
                .on_press(on_press(row.node))
                .interaction(mouse::Interaction::Pointer)
                .into(),
            _ => element,
        }
    }
}

/// Leading space for a row at `level`; top-level rows are flush.
pub fn indent_for(level: usize, indent_width: f32) -> f32 {
    level.saturating_sub(1) as f32 * indent_width.max(0.0)
}

/// Glyph drawn for a chevron.
pub fn chevron_glyph(chevron: Chevron) -> &'static str {
    match chevron {
        Chevron::Down => "\u{25BE}",
        Chevron::Left => "\u{25C2}",
        Chevron::Right => "\u{25B8}",
    }
}

fn default_content<'a, Message: 'a>(
    row: &'a MenuRow,
    rtl: bool,
) -> Element<'a, Message> {
    let align = if rtl {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    };

    let label = text(row.label.as_str())
        .size(ROW_FONT_SIZE)
        .width(Length::Fill)
        .align_x(align)
        .align_y(alignment::Vertical::Center);
    if row.divider {
        return label.into();
    }

    let mut parts: Vec<Element<'a, Message>> = Vec::new();
    if let Some(icon) = row.icon.as_deref() {
        parts.push(text(icon).size(ICON_FONT_SIZE).into());
    }
    parts.push(label.into());
    if let Some(chevron) = row.chevron {
        parts.push(text(chevron_glyph(chevron)).size(ROW_FONT_SIZE).into());
    }
    if rtl {
        parts.reverse();
    }

    Row::with_children(parts)
        .spacing(8.0)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .into()
}
