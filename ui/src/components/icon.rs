use dioxus::prelude::*;

/// Glyphs the site uses, by name. The artwork itself comes from the icon
/// font; the text glyph is only a fallback while it loads.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum IconName {
    Menu,
    Close,
    Sun,
    Moon,
    ArrowRight,
    Send,
    CheckCircle,
    MapPin,
    Phone,
    Mail,
    Clock,
    Twitter,
    Instagram,
    Linkedin,
    Lightbulb,
    Layers,
    Zap,
    LineChart,
    RefreshCw,
    Settings,
}

impl IconName {
    pub fn glyph(self) -> &'static str {
        match self {
            IconName::Menu => "≡",
            IconName::Close => "✕",
            IconName::Sun => "☀",
            IconName::Moon => "☾",
            IconName::ArrowRight => "→",
            IconName::Send => "➤",
            IconName::CheckCircle => "✓",
            IconName::MapPin => "⌖",
            IconName::Phone => "☎",
            IconName::Mail => "✉",
            IconName::Clock => "◷",
            IconName::Twitter => "𝕏",
            IconName::Instagram => "◎",
            IconName::Linkedin => "in",
            IconName::Lightbulb => "✦",
            IconName::Layers => "❏",
            IconName::Zap => "ϟ",
            IconName::LineChart => "↗",
            IconName::RefreshCw => "↻",
            IconName::Settings => "⚙",
        }
    }
}

#[component]
pub fn Icon(name: IconName, #[props(default, into)] class: String) -> Element {
    rsx! {
        span {
            class: "icon inline-flex items-center justify-center {class}",
            "data-icon": "{name}",
            "aria-hidden": "true",
            "{name.glyph()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(IconName::ArrowRight.to_string(), "arrow-right");
        assert_eq!(IconName::RefreshCw.to_string(), "refresh-cw");
        for icon in IconName::iter() {
            assert!(!icon.glyph().is_empty());
        }
    }
}
