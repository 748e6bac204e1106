// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the toast layer.
//!
//! Toasts are drawn as small cards with a variant-colored accent border, an
//! icon glyph, the message, an optional action button and a dismiss button.
//! Every color and dimension comes from the registry's [`ToastTheme`].

use super::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::sink::{ToastLayer, ToastPlacement, ToastPosition};
use crate::theme::{Theme, ToastTheme};
use crate::toast::{ToastMessage, ToastRecord, ToastVariant};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Shadow, Vector};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view<'a>(record: &ToastRecord, theme: &ToastTheme) -> Element<'a, ToastMessage> {
        let card = CardStyle::new(theme, record.variant());
        let accent = card.accent;
        let text_color = card.text;

        let icon = Text::new(record.icon().to_string())
            .size(sizing::ICON_MD)
            .style(move |_theme: &iced::Theme| text::Style {
                color: Some(accent),
            });
        let message = Text::new(record.message().to_string())
            .size(theme.font_size)
            .style(move |_theme: &iced::Theme| text::Style {
                color: Some(text_color),
            });

        // Layout: [icon] [message] [action?] [dismiss?]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(action) = record.action() {
            let label = Text::new(action.text.clone()).size(typography::CAPTION);
            content = content.push(
                button(label)
                    .on_press(ToastMessage::Action(record.id().clone()))
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |_theme: &iced::Theme, status| action_button_style(accent, status)),
            );
        }

        if record.closable() {
            content = content.push(
                button(Text::new("×").size(sizing::ICON_SM))
                    .on_press(ToastMessage::Dismiss(record.id().clone()))
                    .padding(spacing::XXS)
                    .style(move |_theme: &iced::Theme, status| {
                        dismiss_button_style(text_color, status)
                    }),
            );
        }

        Container::new(content)
            .width(Length::Fixed(theme.width.max(sizing::TOAST_MIN_WIDTH)))
            .padding(spacing::SM)
            .style(move |_theme: &iced::Theme| card.container_style())
            .into()
    }
}

/// Renders whatever the layer currently holds.
pub fn view_layer<'a>(layer: &ToastLayer, theme: &Theme) -> Element<'a, ToastMessage> {
    view_toasts(&layer.toasts(), layer.placement(), &theme.toast)
}

/// Renders a stack of toasts pinned according to `placement`.
pub fn view_toasts<'a>(
    toasts: &[ToastRecord],
    placement: ToastPlacement,
    theme: &ToastTheme,
) -> Element<'a, ToastMessage> {
    if toasts.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let (horizontal, vertical) = alignment_for(placement.position);
    let cards: Vec<Element<'a, ToastMessage>> = toasts
        .iter()
        .map(|record| Toast::view(record, theme))
        .collect();

    let stack = Column::with_children(cards)
        .spacing(theme.gap)
        .align_x(horizontal);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(placement.offset)
        .into()
}

/// Screen alignment of the toast stack for a position.
#[must_use]
pub fn alignment_for(position: ToastPosition) -> (alignment::Horizontal, alignment::Vertical) {
    use alignment::{Horizontal, Vertical};

    match position {
        ToastPosition::TopLeft => (Horizontal::Left, Vertical::Top),
        ToastPosition::Top => (Horizontal::Center, Vertical::Top),
        ToastPosition::TopRight => (Horizontal::Right, Vertical::Top),
        ToastPosition::BottomLeft => (Horizontal::Left, Vertical::Bottom),
        ToastPosition::Bottom => (Horizontal::Center, Vertical::Bottom),
        ToastPosition::BottomRight => (Horizontal::Right, Vertical::Bottom),
    }
}

/// Theme tokens resolved for one card, copied so style closures own them.
#[derive(Debug, Clone, Copy)]
struct CardStyle {
    background: Color,
    text: Color,
    accent: Color,
    shadow: Color,
    radius: f32,
    border_width: f32,
    shadow_blur: f32,
}

impl CardStyle {
    fn new(theme: &ToastTheme, variant: ToastVariant) -> Self {
        let accent = match variant {
            ToastVariant::Success => theme.accents.success,
            ToastVariant::Info => theme.accents.info,
            ToastVariant::Error => theme.accents.error,
            ToastVariant::Warn => theme.accents.warn,
        };
        Self {
            background: theme.background.into(),
            text: theme.text.into(),
            accent: accent.into(),
            shadow: theme.shadow.into(),
            radius: theme.radius,
            border_width: theme.border_width,
            shadow_blur: theme.shadow_blur,
        }
    }

    fn container_style(self) -> container::Style {
        container::Style {
            background: Some(iced::Background::Color(self.background)),
            border: iced::Border {
                color: self.accent,
                width: self.border_width,
                radius: self.radius.into(),
            },
            shadow: Shadow {
                color: self.shadow,
                offset: Vector::new(0.0, self.shadow_blur / 3.0),
                blur_radius: self.shadow_blur,
            },
            text_color: Some(self.text),
            ..Default::default()
        }
    }
}

fn no_shadow() -> Shadow {
    Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    }
}

/// Style function for the action button: accent text, tinted on hover.
fn action_button_style(accent: Color, status: button::Status) -> button::Style {
    let tint = |alpha: f32| Some(iced::Background::Color(Color { a: alpha, ..accent }));
    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => tint(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => tint(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: accent,
        border: iced::Border {
            color: accent,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: no_shadow(),
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(text_color: Color, status: button::Status) -> button::Style {
    let hover = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..text_color
        }))
    };
    let (background, text_color) = match status {
        button::Status::Active => (None, text_color),
        button::Status::Hovered => (hover(opacity::OVERLAY_SUBTLE), text_color),
        button::Status::Pressed => (hover(opacity::OVERLAY_MEDIUM), text_color),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: no_shadow(),
        snap: true,
    }
}
