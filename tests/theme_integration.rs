// SPDX-License-Identifier: MPL-2.0
//! Property tests for theme deep-merge and toast capacity.

use glacier_ui::config::ToastConfig;
use glacier_ui::registry::ConfigRegistry;
use glacier_ui::theme::{
    Color, LoadingPatch, Patchable, Theme, ThemePatch, ToastAccentsPatch, ToastPatch, TooltipPatch,
};
use glacier_ui::toast::{ManualClock, ToastManager, ToastOptions};
use proptest::prelude::*;
use std::rc::Rc;
use std::time::Duration;

fn arb_color() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8, u8)>().prop_map(|(r, g, b, a)| Color::rgba8(r, g, b, a))
}

fn arb_size() -> impl Strategy<Value = f32> {
    (0u16..2000).prop_map(|n| f32::from(n) / 4.0)
}

fn arb_tooltip() -> impl Strategy<Value = TooltipPatch> {
    (
        proptest::option::of(arb_color()),
        proptest::option::of(arb_color()),
        proptest::option::of(arb_size()),
        proptest::option::of(arb_size()),
    )
        .prop_map(|(background, text, radius, max_width)| TooltipPatch {
            background,
            text,
            radius,
            max_width,
            ..Default::default()
        })
}

fn arb_toast() -> impl Strategy<Value = ToastPatch> {
    (
        proptest::option::of(arb_size()),
        proptest::option::of(arb_size()),
        proptest::option::of(arb_color()),
        proptest::option::of(arb_color()),
    )
        .prop_map(|(width, gap, success, error)| ToastPatch {
            width,
            gap,
            accents: (success.is_some() || error.is_some()).then(|| ToastAccentsPatch {
                success,
                error,
                ..Default::default()
            }),
            ..Default::default()
        })
}

fn arb_loading() -> impl Strategy<Value = LoadingPatch> {
    (
        proptest::option::of(proptest::collection::vec(arb_color(), 0..5)),
        proptest::option::of(100u32..2000),
    )
        .prop_map(|(dot_colors, period_ms)| LoadingPatch {
            dot_colors,
            period_ms,
            ..Default::default()
        })
}

fn arb_patch() -> impl Strategy<Value = ThemePatch> {
    (
        proptest::option::of("[A-Za-z ]{1,16}"),
        proptest::option::of(arb_tooltip()),
        proptest::option::of(arb_toast()),
        proptest::option::of(arb_loading()),
    )
        .prop_map(|(font_family, tooltip, toast, loading)| ThemePatch {
            font_family,
            tooltip,
            toast,
            loading,
            ..Default::default()
        })
}

proptest! {
    /// Registering the same patch twice equals registering it once.
    #[test]
    fn register_theme_is_idempotent(patch in arb_patch()) {
        let once = ConfigRegistry::new();
        once.register_theme(patch.clone());

        let twice = ConfigRegistry::new();
        twice.register_theme(patch.clone());
        twice.register_theme(patch);

        prop_assert_eq!(&*once.theme(), &*twice.theme());
    }

    /// Sections and tokens the patch does not name keep their value.
    #[test]
    fn register_theme_preserves_untouched_tokens(patch in arb_patch()) {
        let registry = ConfigRegistry::new();
        let before = registry.theme();
        registry.register_theme(patch.clone());
        let after = registry.theme();

        prop_assert_eq!(&after.button, &before.button);
        prop_assert_eq!(&after.modal, &before.modal);
        prop_assert_eq!(after.dark, before.dark);
        prop_assert_eq!(after.tooltip.font_size, before.tooltip.font_size);
        prop_assert_eq!(after.toast.accents.info, before.toast.accents.info);
        prop_assert_eq!(after.toast.radius, before.toast.radius);

        if patch.tooltip.is_none() {
            prop_assert_eq!(&after.tooltip, &before.tooltip);
        }
        if patch.loading.as_ref().and_then(|l| l.dot_colors.as_ref()).is_none() {
            prop_assert_eq!(&after.loading.dot_colors, &before.loading.dot_colors);
        }
    }

    /// Every token the patch names, at any depth, takes the patch value.
    #[test]
    fn register_theme_overrides_named_tokens(patch in arb_patch()) {
        let registry = ConfigRegistry::new();
        registry.register_theme(patch.clone());
        let theme = registry.theme();

        if let Some(font_family) = &patch.font_family {
            prop_assert_eq!(&theme.font_family, font_family);
        }
        if let Some(tooltip) = &patch.tooltip {
            if let Some(background) = tooltip.background {
                prop_assert_eq!(theme.tooltip.background, background);
            }
            if let Some(max_width) = tooltip.max_width {
                prop_assert_eq!(theme.tooltip.max_width, max_width);
            }
        }
        if let Some(toast) = &patch.toast {
            if let Some(width) = toast.width {
                prop_assert_eq!(theme.toast.width, width);
            }
            if let Some(success) = toast.accents.as_ref().and_then(|a| a.success) {
                prop_assert_eq!(theme.toast.accents.success, success);
            }
        }
        if let Some(dots) = patch.loading.as_ref().and_then(|l| l.dot_colors.as_ref()) {
            // Arrays replace wholesale, never element-wise.
            prop_assert_eq!(&theme.loading.dot_colors, dots);
        }
    }

    /// Merging two patches then applying equals applying them in order.
    #[test]
    fn merged_patch_matches_sequential_apply(first in arb_patch(), second in arb_patch()) {
        let mut sequential = Theme::default();
        sequential.apply(first.clone());
        sequential.apply(second.clone());

        let mut merged = first;
        merged.merge(second);
        let mut combined = Theme::default();
        combined.apply(merged);

        prop_assert_eq!(sequential, combined);
    }

    /// The active list never exceeds the configured capacity.
    #[test]
    fn active_toasts_never_exceed_capacity(
        max_count in 1usize..8,
        durations in proptest::collection::vec(0u64..50, 0..40),
    ) {
        let clock = ManualClock::new();
        let registry = Rc::new(ConfigRegistry::new());
        let mut toasts = ToastManager::with_clock(
            Rc::clone(&registry),
            ToastConfig { max_count: Some(max_count), ..Default::default() },
            Rc::new(clock.clone()),
        );

        for (step, duration_ms) in durations.into_iter().enumerate() {
            toasts.info(
                format!("toast {step}"),
                ToastOptions::new().duration(Duration::from_millis(duration_ms)),
            );
            prop_assert!(toasts.len() <= max_count);
            prop_assert_eq!(registry.default_layer().len(), toasts.len());

            clock.advance(Duration::from_millis(10));
            toasts.tick();
            prop_assert!(toasts.len() <= max_count);
        }
    }
}
