// SPDX-License-Identifier: MPL-2.0
//! Structural deep-merge for theme trees.
//!
//! Every theme node gets a generated patch type whose fields are all optional.
//! Applying a patch walks the tree one level at a time: nested nodes recurse,
//! leaf tokens are replaced. `Vec` tokens are leaves, so an array in a patch
//! replaces the whole array instead of being merged element by element.

use super::Color;

/// A value that can be updated from a partial description of itself.
pub trait Patchable {
    /// Partial form of `Self`. Leaves use `Self`; nodes use a generated struct.
    type Patch;

    /// Writes every field present in `patch` into `self`.
    fn apply(&mut self, patch: Self::Patch);

    /// Folds `overlay` into `base` so that applying the result equals applying
    /// `base` then `overlay`.
    fn merge_patch(base: &mut Self::Patch, overlay: Self::Patch);

    /// Converts a complete value into a patch that sets every field.
    fn into_patch(self) -> Self::Patch;
}

macro_rules! leaf_tokens {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Patchable for $ty {
                type Patch = $ty;

                fn apply(&mut self, patch: $ty) {
                    *self = patch;
                }

                fn merge_patch(base: &mut $ty, overlay: $ty) {
                    *base = overlay;
                }

                fn into_patch(self) -> $ty {
                    self
                }
            }
        )*
    };
}

leaf_tokens!(bool, u32, f32, String, Color);

impl<T> Patchable for Vec<T> {
    type Patch = Vec<T>;

    fn apply(&mut self, patch: Vec<T>) {
        *self = patch;
    }

    fn merge_patch(base: &mut Vec<T>, overlay: Vec<T>) {
        *base = overlay;
    }

    fn into_patch(self) -> Vec<T> {
        self
    }
}

/// Declares a theme node, its defaults, and its patch type.
///
/// ```ignore
/// theme_node! {
///     /// Tooltip tokens.
///     pub struct TooltipTheme => TooltipPatch {
///         background: Color = palette::GRAY_900,
///         max_width: f32 = 250.0,
///     }
/// }
/// ```
macro_rules! theme_node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $patch:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        #[doc = concat!("Partial [`", stringify!($name), "`]. Absent fields keep their current value.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $patch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<<$ty as $crate::theme::Patchable>::Patch>,
            )*
        }

        impl $patch {
            /// Returns `true` when the patch sets nothing.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Folds `overlay` into this patch; `overlay` wins on conflicts.
            pub fn merge(&mut self, overlay: $patch) {
                <$name as $crate::theme::Patchable>::merge_patch(self, overlay);
            }
        }

        impl $crate::theme::Patchable for $name {
            type Patch = $patch;

            fn apply(&mut self, patch: $patch) {
                $(
                    if let Some(value) = patch.$field {
                        $crate::theme::Patchable::apply(&mut self.$field, value);
                    }
                )*
            }

            fn merge_patch(base: &mut $patch, overlay: $patch) {
                $(
                    if let Some(value) = overlay.$field {
                        match base.$field.as_mut() {
                            Some(existing) => {
                                <$ty as $crate::theme::Patchable>::merge_patch(existing, value)
                            }
                            None => base.$field = Some(value),
                        }
                    }
                )*
            }

            fn into_patch(self) -> $patch {
                $patch {
                    $(
                        $field: Some($crate::theme::Patchable::into_patch(self.$field)),
                    )*
                }
            }
        }

        impl From<$name> for $patch {
            fn from(node: $name) -> Self {
                $crate::theme::Patchable::into_patch(node)
            }
        }
    };
}

pub(crate) use theme_node;
