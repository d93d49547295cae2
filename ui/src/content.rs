//! Copy and static data shown on the page.

use crate::components::icon::IconName;

pub const SITE_NAME: &str = "Black And White";
pub const TAGLINE: &str =
    "Creating exceptional digital experiences through minimalist design and powerful functionality.";

pub const ADDRESS: &str = "123 Design Street, Creative City, 10001";
pub const PHONE: &str = "+1 (555) 123-4567";
pub const EMAIL: &str = "hello@blackandwhite.com";
pub const HOURS: &str = "Mon - Fri: 9am - 6pm";

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "Features", href: "#features" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Team", href: "#team" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const TRUSTED_BY: [&str; 4] = ["Acme Inc", "GlobalTech", "Startup Co", "Branding Pro"];

pub struct Feature {
    pub icon: IconName,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: IconName::Lightbulb,
        title: "Innovative Design",
        description: "Our minimalist approach creates beautiful interfaces that blend form and function seamlessly.",
    },
    Feature {
        icon: IconName::Layers,
        title: "Scalable Architecture",
        description: "Build on a foundation that grows with your business, from startup to enterprise scale.",
    },
    Feature {
        icon: IconName::Zap,
        title: "Lightning Fast",
        description: "Optimized performance ensures your applications run at peak efficiency across all devices.",
    },
    Feature {
        icon: IconName::LineChart,
        title: "Data Driven",
        description: "Make informed decisions with powerful analytics and clear visualizations of key metrics.",
    },
    Feature {
        icon: IconName::RefreshCw,
        title: "Continuous Updates",
        description: "Stay ahead with regular updates, new features, and ongoing improvement cycles.",
    },
    Feature {
        icon: IconName::Settings,
        title: "Fully Customizable",
        description: "Tailor every aspect of your experience with flexible configuration options.",
    },
];

pub struct Achievement {
    pub number: &'static str,
    pub text: &'static str,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { number: "5+", text: "Years Experience" },
    Achievement { number: "200+", text: "Projects Completed" },
    Achievement { number: "50+", text: "Happy Clients" },
    Achievement { number: "15+", text: "Industry Awards" },
];

pub const BENEFITS: [&str; 6] = [
    "Cutting-edge digital solutions",
    "Expert team of designers and developers",
    "Proven track record of success",
    "Dedicated support and maintenance",
    "Competitive pricing and flexible plans",
    "Seamless integration with existing systems",
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

impl TeamMember {
    /// `Emma Carter` -> `emma.carter@blackandwhite.com`. Only the first
    /// space becomes a dot.
    pub fn email(&self) -> String {
        format!("{}@blackandwhite.com", self.name.to_lowercase().replacen(' ', ".", 1))
    }
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Emma Carter",
        role: "Founder & CEO",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    TeamMember {
        name: "Michael Robinson",
        role: "Creative Director",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    TeamMember {
        name: "Sarah Jackson",
        role: "Lead Developer",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    TeamMember {
        name: "David Kim",
        role: "UX/UI Designer",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
];

pub struct ContactInfo {
    pub icon: IconName,
    pub title: &'static str,
    pub content: &'static str,
}

pub const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo { icon: IconName::MapPin, title: "Visit Us", content: ADDRESS },
    ContactInfo { icon: IconName::Phone, title: "Call Us", content: PHONE },
    ContactInfo { icon: IconName::Mail, title: "Email Us", content: EMAIL },
    ContactInfo { icon: IconName::Clock, title: "Working Hours", content: HOURS },
];

pub const SOCIAL_PLATFORMS: [&str; 4] = ["Twitter", "LinkedIn", "Instagram", "GitHub"];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Sitemap"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_emails() {
        assert_eq!(TEAM[0].email(), "emma.carter@blackandwhite.com");
        assert_eq!(TEAM[3].email(), "david.kim@blackandwhite.com");
        let member = TeamMember { name: "Ana Maria Lopez", role: "", image: "" };
        assert_eq!(member.email(), "ana.maria lopez@blackandwhite.com");
    }

    #[test]
    fn nav_links_point_at_section_ids() {
        for link in &NAV_LINKS {
            assert_eq!(link.href, format!("#{}", link.name.to_lowercase()));
        }
    }
}
