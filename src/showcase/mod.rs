// SPDX-License-Identifier: MPL-2.0
//! Interactive demo application for the design system.
//!
//! A single window with controls that raise every toast variant, switch the
//! theme preset and clear the toast stack. The toast layer is stacked above
//! the controls and re-read from the registry on every redraw.

mod subscription;

use crate::config::UiConfig;
use crate::runtime::UiRuntime;
use crate::theme::{ButtonTheme, ButtonVariantTheme, ThemeMode};
use crate::toast::{ToastMessage, ToastOptions, ToastVariant};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toast::view_layer;
use iced::widget::{button, column, row, stack, text, Container, Text};
use iced::{alignment, window, Color, Element, Length, Subscription, Task, Theme};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 480.0;

/// Startup options resolved by the binary.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub config: UiConfig,
    /// Overrides the configured theme mode when set.
    pub theme_mode: Option<ThemeMode>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Raise(ToastVariant),
    RaisePersistent,
    ClearToasts,
    ToggleTheme,
    Toast(ToastMessage),
    Tick(Instant),
}

/// Root state of the showcase window.
pub struct App {
    runtime: UiRuntime,
    raised: u32,
    undo_count: Rc<Cell<u32>>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("raised", &self.raised)
            .field("undo_count", &self.undo_count.get())
            .field("toasts", &self.runtime.toasts().len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a reusable boot function; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    #[must_use]
    pub fn new(flags: Flags) -> Self {
        let mut config = flags.config;
        if let Some(mode) = flags.theme_mode {
            config.theme_mode = mode;
        }
        Self::from_runtime(UiRuntime::new(config))
    }

    /// Builds the app around an existing runtime.
    #[must_use]
    pub fn from_runtime(runtime: UiRuntime) -> Self {
        Self {
            runtime,
            raised: 0,
            undo_count: Rc::new(Cell::new(0)),
        }
    }

    #[must_use]
    pub fn runtime(&self) -> &UiRuntime {
        &self.runtime
    }

    #[must_use]
    pub fn undo_count(&self) -> u32 {
        self.undo_count.get()
    }

    fn title(&self) -> String {
        match self.runtime.toasts().len() {
            0 => "Glacier UI".to_string(),
            n => format!("Glacier UI ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        if self.runtime.theme().dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Raise(variant) => {
                self.raised += 1;
                let text = format!("{} toast #{}", variant_label(variant), self.raised);
                let toasts = self.runtime.toasts_mut();
                match variant {
                    ToastVariant::Success => toasts.success(text, ToastOptions::new()),
                    ToastVariant::Info => toasts.info(text, ToastOptions::new()),
                    ToastVariant::Error => toasts.error(text, ToastOptions::new()),
                    ToastVariant::Warn => toasts.warn(text, ToastOptions::new()),
                };
            }
            Message::RaisePersistent => {
                self.raised += 1;
                let undo_count = Rc::clone(&self.undo_count);
                let options = ToastOptions::new()
                    .persistent()
                    .action("Undo", move |id| {
                        undo_count.set(undo_count.get() + 1);
                        tracing::info!(toast = %id, "undo requested");
                    })
                    .on_close(|id, reason| {
                        tracing::debug!(toast = %id, ?reason, "persistent toast closed");
                    });
                self.runtime
                    .toasts_mut()
                    .info("Item moved to trash", options);
            }
            Message::ClearToasts => self.runtime.toasts_mut().clear(),
            Message::ToggleTheme => {
                let next = self.runtime.config().theme_mode.toggled();
                self.runtime.set_theme_mode(next);
            }
            Message::Toast(toast_message) => {
                self.runtime.toasts_mut().handle_message(&toast_message);
            }
            Message::Tick(_) => {
                self.runtime.toasts_mut().tick();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let theme = self.runtime.theme();
        let buttons = &theme.button;

        let heading = Text::new("Glacier UI").size(typography::BODY * 2.0);
        let hint = Text::new(format!(
            "{} active, {} undone",
            self.runtime.toasts().len(),
            self.undo_count()
        ))
        .size(typography::CAPTION);

        let variants = row![
            themed_button(
                "Success",
                buttons,
                &buttons.primary,
                Message::Raise(ToastVariant::Success)
            ),
            themed_button(
                "Info",
                buttons,
                &buttons.secondary,
                Message::Raise(ToastVariant::Info)
            ),
            themed_button(
                "Warning",
                buttons,
                &buttons.secondary,
                Message::Raise(ToastVariant::Warn)
            ),
            themed_button(
                "Error",
                buttons,
                &buttons.danger,
                Message::Raise(ToastVariant::Error)
            ),
        ]
        .spacing(spacing::XS);

        let theme_label = if theme.dark { "Light theme" } else { "Dark theme" };
        let controls = row![
            themed_button(
                "Persistent",
                buttons,
                &buttons.primary,
                Message::RaisePersistent
            ),
            themed_button("Clear", buttons, &buttons.secondary, Message::ClearToasts),
            themed_button(theme_label, buttons, &buttons.secondary, Message::ToggleTheme),
        ]
        .spacing(spacing::XS);

        let content = column![heading, variants, controls, hint]
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center);

        let base = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XL);

        let toasts = view_layer(self.runtime.toast_layer(), &theme).map(Message::Toast);

        stack![base, toasts].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.runtime.toasts().has_pending_expiry())
    }
}

fn variant_label(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Success => "Success",
        ToastVariant::Info => "Info",
        ToastVariant::Error => "Error",
        ToastVariant::Warn => "Warning",
    }
}

/// A button styled from the registry's button tokens.
fn themed_button<'a>(
    label: &str,
    tokens: &ButtonTheme,
    variant: &ButtonVariantTheme,
    on_press: Message,
) -> Element<'a, Message> {
    let background: Color = variant.background.into();
    let hover: Color = variant.hover_background.into();
    let text_color: Color = variant.text.into();
    let border: Color = variant.border.into();
    let radius = tokens.radius;

    button(text(label.to_string()).size(tokens.font_size))
        .on_press(on_press)
        .height(Length::Fixed(tokens.height))
        .padding([0.0, tokens.padding_x])
        .style(move |_theme: &Theme, status: button::Status| {
            let fill = match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                button::Status::Active | button::Status::Disabled => background,
            };
            button::Style {
                background: Some(iced::Background::Color(fill)),
                text_color,
                border: iced::Border {
                    color: border,
                    width: 1.0,
                    radius: radius.into(),
                },
                shadow: iced::Shadow::default(),
                snap: true,
            }
        })
        .into()
}
