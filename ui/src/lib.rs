// The client-side Dioxus application for the Black And White site.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod content;
pub mod hooks;
mod sections;
pub mod theme;

use sections::about::About;
use sections::contact::Contact;
use sections::features::Features;
use sections::footer::Footer;
use sections::header::Header;
use sections::hero::Hero;
use sections::team::Team;
use theme::use_theme_provider;
use view_state::prefs::SitePrefs;

const TAILWIND_CONFIG: &str = r#"
tailwind.config = {
    darkMode: 'class',
    theme: {
        extend: {
            colors: {
                primary: {
                    50: '#f7f7f7', 100: '#e3e3e3', 200: '#c8c8c8', 300: '#a4a4a4',
                    400: '#818181', 500: '#666666', 600: '#515151', 700: '#434343',
                    800: '#383838', 900: '#1a1a1a', 950: '#0a0a0a',
                },
                accent: {
                    400: '#fb923c', 500: '#f97316', 600: '#ea580c',
                },
            },
            fontFamily: {
                sans: ['Inter', 'system-ui', 'sans-serif'],
            },
        },
    },
};
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let site_css = r#"
    /* --- BASE --- */
    html { scroll-behavior: smooth; }
    body { margin: 0; font-family: 'Inter', system-ui, sans-serif; }

    .container-custom { width: 100%; max-width: 80rem; margin: 0 auto; padding: 0 1rem; }
    @media (min-width: 640px) { .container-custom { padding: 0 1.5rem; } }
    @media (min-width: 1024px) { .container-custom { padding: 0 2rem; } }

    .section-padding { padding: 5rem 0; }
    @media (min-width: 768px) { .section-padding { padding: 7rem 0; } }

    .heading-xl { font-size: 2.5rem; line-height: 1.1; font-weight: 800; letter-spacing: -0.025em; }
    .heading-lg { font-size: 2rem; line-height: 1.2; font-weight: 700; letter-spacing: -0.025em; }
    .text-gradient {
        background: linear-gradient(90deg, currentColor, #818181);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    @media (min-width: 768px) {
        .heading-xl { font-size: 4rem; }
        .heading-lg { font-size: 2.75rem; }
    }

    /* --- HOVER EFFECTS --- */
    .hover-lift { transition: transform 300ms ease-out, box-shadow 300ms ease-out; }
    .hover-lift:hover { transform: translateY(-4px); box-shadow: 0 20px 40px rgba(0,0,0,0.12); }
    .hover-grow { transition: transform 300ms ease-out; }
    .hover-grow:hover { transform: scale(1.05); }
    .hover-accent { transition: color 300ms ease-out; }
    .hover-accent:hover { color: #f97316; }
    .hover-glow { transition: box-shadow 300ms ease-out; }
    .hover-glow:hover { box-shadow: 0 0 24px rgba(249,115,22,0.35); }

    .feature-card { transform-style: preserve-3d; }

    /* --- HERO BACKDROP --- */
    .grid-line { position: absolute; background: currentColor; opacity: 0.06; }

    @keyframes pulse-glow {
        0%, 100% { opacity: 0.3; transform: scale(1); }
        50% { opacity: 0.6; transform: scale(1.1); }
    }
    .pulse-glow { animation: pulse-glow 6s ease-in-out infinite; }
    .pulse-glow-late { animation: pulse-glow 6s ease-in-out 3s infinite; }

    @keyframes scroll-hint {
        0%, 100% { transform: translateY(0); opacity: 1; }
        50% { transform: translateY(10px); opacity: 0.4; }
    }
    .scroll-hint { animation: scroll-hint 2s ease-in-out infinite; }
    .scroll-hint-bar { width: 2px; height: 2rem; background: currentColor; border-radius: 1px; }

    /* --- MOBILE MENU --- */
    @keyframes menu-slide {
        from { opacity: 0; transform: translateY(-8px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .menu-slide { animation: menu-slide 200ms ease-out; }
"#;

    let prefs = use_context_provider(SitePrefs::from_env);
    let theme = use_theme_provider(prefs.default_theme);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Black And White | Minimal Design Studio" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Script { "{TAILWIND_CONFIG}" }
        style {
            "{site_css}"
        }
        div {
            class: "{theme.current().root_class()}",
            div {
                class: "flex flex-col min-h-screen bg-white text-primary-950 dark:bg-primary-950 dark:text-white transition-colors duration-300",
                Header {}
                main {
                    class: "flex-grow",
                    Hero {}
                    Features {}
                    About {}
                    Team {}
                    Contact {}
                }
                Footer {}
            }
        }
    }
}
