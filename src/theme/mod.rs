// SPDX-License-Identifier: MPL-2.0
//! Typed theme tree.
//!
//! A [`Theme`] maps each component to its style tokens. Components read the
//! tokens they need at render time from the
//! [`ConfigRegistry`](crate::registry::ConfigRegistry). Every node has a
//! matching `*Patch` type, so branding can override a single token several
//! levels deep without restating its siblings:
//!
//! ```
//! use glacier_ui::theme::{ButtonPatch, ButtonVariantPatch, Color, Patchable, Theme, ThemePatch};
//!
//! let mut theme = Theme::default();
//! theme.apply(ThemePatch {
//!     button: Some(ButtonPatch {
//!         primary: Some(ButtonVariantPatch {
//!             background: Some("#722ed1".parse().unwrap()),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! });
//!
//! assert_eq!(theme.button.primary.background, Color::rgb8(0x72, 0x2e, 0xd1));
//! assert_eq!(theme.button.height, Theme::default().button.height);
//! ```

mod color;
mod mode;
pub mod palette;
mod patch;

pub use color::{Color, ColorParseError};
pub use mode::ThemeMode;
pub use patch::Patchable;

use patch::theme_node;

theme_node! {
    /// Colors for one button variant.
    pub struct ButtonVariantTheme => ButtonVariantPatch {
        background: Color = palette::PRIMARY_500,
        hover_background: Color = palette::PRIMARY_600,
        text: Color = palette::WHITE,
        border: Color = palette::PRIMARY_500,
    }
}

theme_node! {
    /// Button tokens.
    pub struct ButtonTheme => ButtonPatch {
        height: f32 = 32.0,
        padding_x: f32 = 16.0,
        radius: f32 = 4.0,
        font_size: f32 = 14.0,
        primary: ButtonVariantTheme = ButtonVariantTheme::default(),
        secondary: ButtonVariantTheme = ButtonVariantTheme {
            background: palette::WHITE,
            hover_background: palette::GRAY_50,
            text: palette::GRAY_900,
            border: palette::GRAY_200,
        },
        danger: ButtonVariantTheme = ButtonVariantTheme {
            background: palette::ERROR_500,
            hover_background: palette::ERROR_600,
            text: palette::WHITE,
            border: palette::ERROR_500,
        },
    }
}

theme_node! {
    /// Checkbox tokens.
    pub struct CheckboxTheme => CheckboxPatch {
        size: f32 = 16.0,
        radius: f32 = 2.0,
        border: Color = palette::GRAY_200,
        checked_background: Color = palette::PRIMARY_500,
        check_mark: Color = palette::WHITE,
        disabled_background: Color = palette::GRAY_50,
    }
}

theme_node! {
    /// Radio tokens.
    pub struct RadioTheme => RadioPatch {
        size: f32 = 16.0,
        border: Color = palette::GRAY_200,
        checked_border: Color = palette::PRIMARY_500,
        dot: Color = palette::PRIMARY_500,
    }
}

theme_node! {
    /// Switch tokens.
    pub struct SwitchTheme => SwitchPatch {
        width: f32 = 44.0,
        height: f32 = 22.0,
        track_off: Color = palette::GRAY_300,
        track_on: Color = palette::PRIMARY_500,
        thumb: Color = palette::WHITE,
    }
}

theme_node! {
    /// Modal dialog tokens.
    pub struct ModalTheme => ModalPatch {
        width: f32 = 520.0,
        padding: f32 = 24.0,
        radius: f32 = 8.0,
        title_size: f32 = 16.0,
        background: Color = palette::WHITE,
        text: Color = palette::GRAY_900,
        mask: Color = palette::MASK,
    }
}

theme_node! {
    /// Accent color per toast variant.
    pub struct ToastAccents => ToastAccentsPatch {
        success: Color = palette::SUCCESS_500,
        info: Color = palette::INFO_500,
        error: Color = palette::ERROR_500,
        warn: Color = palette::WARNING_500,
    }
}

theme_node! {
    /// Toast card tokens.
    pub struct ToastTheme => ToastPatch {
        width: f32 = 320.0,
        radius: f32 = 8.0,
        gap: f32 = 8.0,
        border_width: f32 = 2.0,
        shadow_blur: f32 = 12.0,
        font_size: f32 = 14.0,
        background: Color = palette::WHITE,
        text: Color = palette::GRAY_900,
        shadow: Color = Color::rgba8(0x00, 0x00, 0x00, 0x26),
        accents: ToastAccents = ToastAccents::default(),
    }
}

theme_node! {
    /// Loading indicator tokens.
    pub struct LoadingTheme => LoadingPatch {
        size: f32 = 24.0,
        color: Color = palette::PRIMARY_500,
        /// Colors cycled by the dot indicator. Replaced as a whole by a patch.
        dot_colors: Vec<Color> = vec![palette::PRIMARY_400, palette::PRIMARY_500, palette::PRIMARY_700],
        period_ms: u32 = 800,
    }
}

theme_node! {
    /// Tooltip tokens.
    pub struct TooltipTheme => TooltipPatch {
        background: Color = palette::GRAY_900,
        text: Color = palette::WHITE,
        radius: f32 = 4.0,
        max_width: f32 = 250.0,
        font_size: f32 = 12.0,
    }
}

theme_node! {
    /// Dropdown and menu tokens.
    pub struct DropdownTheme => DropdownPatch {
        background: Color = palette::WHITE,
        border: Color = palette::GRAY_100,
        item_hover: Color = palette::GRAY_50,
        item_text: Color = palette::GRAY_900,
        item_height: f32 = 32.0,
        radius: f32 = 4.0,
    }
}

theme_node! {
    /// Tab strip tokens.
    pub struct TabsTheme => TabsPatch {
        active_text: Color = palette::PRIMARY_500,
        inactive_text: Color = palette::GRAY_700,
        indicator: Color = palette::PRIMARY_500,
        indicator_height: f32 = 2.0,
    }
}

theme_node! {
    /// Root theme: one section per component.
    pub struct Theme => ThemePatch {
        font_family: String = "Inter".to_string(),
        dark: bool = false,
        button: ButtonTheme = ButtonTheme::default(),
        checkbox: CheckboxTheme = CheckboxTheme::default(),
        radio: RadioTheme = RadioTheme::default(),
        switch: SwitchTheme = SwitchTheme::default(),
        modal: ModalTheme = ModalTheme::default(),
        toast: ToastTheme = ToastTheme::default(),
        loading: LoadingTheme = LoadingTheme::default(),
        tooltip: TooltipTheme = TooltipTheme::default(),
        dropdown: DropdownTheme = DropdownTheme::default(),
        tabs: TabsTheme = TabsTheme::default(),
    }
}

impl Theme {
    /// Light preset; identical to [`Theme::default`].
    #[must_use]
    pub fn light() -> Self {
        Self::default()
    }

    /// Dark preset: the light tree with surfaces and text inverted.
    #[must_use]
    pub fn dark() -> Self {
        let mut theme = Self::light();
        theme.apply(dark_overrides());
        theme
    }

    /// Preset for the given mode. `System` follows the OS appearance.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

fn dark_overrides() -> ThemePatch {
    ThemePatch {
        dark: Some(true),
        button: Some(ButtonPatch {
            primary: Some(ButtonVariantPatch {
                background: Some(palette::PRIMARY_400),
                hover_background: Some(palette::PRIMARY_500),
                border: Some(palette::PRIMARY_400),
                ..Default::default()
            }),
            secondary: Some(ButtonVariantPatch {
                background: Some(palette::GRAY_800),
                hover_background: Some(palette::GRAY_700),
                text: Some(palette::WHITE),
                border: Some(palette::GRAY_700),
            }),
            ..Default::default()
        }),
        checkbox: Some(CheckboxPatch {
            border: Some(palette::GRAY_400),
            disabled_background: Some(palette::GRAY_800),
            ..Default::default()
        }),
        radio: Some(RadioPatch {
            border: Some(palette::GRAY_400),
            ..Default::default()
        }),
        switch: Some(SwitchPatch {
            track_off: Some(palette::GRAY_700),
            ..Default::default()
        }),
        modal: Some(ModalPatch {
            background: Some(palette::GRAY_800),
            text: Some(palette::WHITE),
            mask: Some(palette::MASK_STRONG),
            ..Default::default()
        }),
        toast: Some(ToastPatch {
            background: Some(palette::GRAY_800),
            text: Some(palette::WHITE),
            shadow: Some(Color::rgba8(0x00, 0x00, 0x00, 0x80)),
            ..Default::default()
        }),
        tooltip: Some(TooltipPatch {
            background: Some(palette::GRAY_100),
            text: Some(palette::GRAY_900),
            ..Default::default()
        }),
        dropdown: Some(DropdownPatch {
            background: Some(palette::GRAY_800),
            border: Some(palette::GRAY_700),
            item_hover: Some(palette::GRAY_700),
            item_text: Some(palette::WHITE),
            ..Default::default()
        }),
        tabs: Some(TabsPatch {
            active_text: Some(palette::PRIMARY_400),
            inactive_text: Some(palette::GRAY_200),
            indicator: Some(palette::PRIMARY_400),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn light_theme_has_light_surfaces() {
        let theme = Theme::light();
        assert!(!theme.dark);
        assert!(theme.modal.background.luminance() > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surfaces_and_keeps_geometry() {
        let light = Theme::light();
        let dark = Theme::dark();

        assert!(dark.dark);
        assert!(dark.toast.background.luminance() < light.toast.background.luminance());
        assert!(dark.toast.text.luminance() > light.toast.text.luminance());
        assert_eq!(dark.toast.width, light.toast.width);
        assert_eq!(dark.button.height, light.button.height);
    }

    #[test]
    fn both_presets_keep_semantic_accents() {
        assert_eq!(Theme::light().toast.accents, Theme::dark().toast.accents);
    }

    #[test]
    fn for_mode_selects_preset() {
        assert_eq!(Theme::for_mode(ThemeMode::Light), Theme::light());
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
    }

    #[test]
    fn partial_patch_parses_from_toml() {
        let patch: ThemePatch = toml::from_str(
            r##"
            font_family = "IBM Plex Sans"

            [button.primary]
            background = "#722ed1"

            [loading]
            dot_colors = ["#ff0000", "#00ff00"]
            "##,
        )
        .expect("valid theme patch");

        let mut theme = Theme::default();
        theme.apply(patch);

        assert_eq!(theme.font_family, "IBM Plex Sans");
        assert_eq!(theme.button.primary.background, Color::rgb8(0x72, 0x2e, 0xd1));
        assert_eq!(theme.button.primary.text, palette::WHITE);
        assert_eq!(
            theme.loading.dot_colors,
            vec![Color::rgb8(0xff, 0, 0), Color::rgb8(0, 0xff, 0)]
        );
    }

    #[test]
    fn unknown_token_is_rejected() {
        let result = toml::from_str::<ThemePatch>("[button]\nheigth = 40.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_color_is_rejected() {
        let result = toml::from_str::<ThemePatch>("[toast]\nbackground = \"white\"\n");
        assert!(result.is_err());
    }
}
