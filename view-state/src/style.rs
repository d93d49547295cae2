//! Utility-class composition for the shared button.
//!
//! Classes carry their own `dark:` variants; the active theme only decides
//! whether the document root has the `dark` class.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Text,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center font-medium rounded-md transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-500";

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary-950 text-white hover:bg-primary-800 dark:bg-white dark:text-primary-950 dark:hover:bg-primary-100",
            Self::Secondary => "bg-accent-600 text-white hover:bg-accent-700 dark:bg-accent-500 dark:hover:bg-accent-600",
            Self::Outline => "border border-primary-950 text-primary-950 hover:bg-primary-50 dark:border-white dark:text-white dark:hover:bg-primary-800/30",
            Self::Text => "text-primary-950 hover:text-primary-700 hover:bg-primary-50 dark:text-white dark:hover:text-primary-200 dark:hover:bg-primary-800/30",
        }
    }
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-base",
            Self::Lg => "px-6 py-3 text-lg",
        }
    }
}

/// Full class list for a button. `icon` is `None` when the button has no
/// icon; `extra` is appended verbatim.
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    icon: Option<IconPosition>,
    extra: &str,
) -> String {
    let icon_classes = match icon {
        None => "",
        Some(IconPosition::Left) => "space-x-2",
        Some(IconPosition::Right) => "flex-row-reverse space-x-2 space-x-reverse",
    };
    [BUTTON_BASE, variant.classes(), size.classes(), icon_classes, extra]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default(), None, "");
        assert!(classes.starts_with("inline-flex"));
        assert!(classes.contains("bg-primary-950"));
        assert!(classes.ends_with("px-4 py-2 text-base"));
    }

    #[test]
    fn right_icon_reverses_the_row() {
        let classes = button_classes(
            ButtonVariant::Outline,
            ButtonSize::Lg,
            Some(IconPosition::Right),
            "w-full",
        );
        assert!(classes.contains("border-primary-950"));
        assert!(classes.contains("flex-row-reverse space-x-2 space-x-reverse"));
        assert!(classes.ends_with("w-full"));
        assert!(!classes.contains("  "));
    }
}
