//! Hard-coded page copy and image references.

use crate::components::icons::Icon;

pub const BRAND: &str = "Soltriks";
pub const PAGE_TITLE: &str = "Soltriks - Smart Software. Serious Security.";

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Services", anchor: "#services" },
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Contact", anchor: "#contact" },
];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1700936655679-83f4b37d7d74";
pub const HERO_HEADLINE: &str = "Smart Software.";
pub const HERO_HEADLINE_ACCENT: &str = "Serious Security.";
pub const HERO_SUBTITLE: &str = "Empowering businesses, governments, and logistics with cutting-edge custom software solutions, enterprise-grade security, and intelligent digital platforms.";

pub const SERVICES_HEADING: &str = "Our Solutions";
pub const SERVICES_INTRO: &str = "Comprehensive software solutions designed to transform your business operations with security, efficiency, and innovation at the core.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: Icon::Truck,
        title: "E-Logistics",
        description: "Streamline your supply chain with intelligent logistics management and real-time tracking.",
        image: "https://images.pexels.com/photos/16053029/pexels-photo-16053029.jpeg",
    },
    Service {
        icon: Icon::Users,
        title: "Smart Attendance",
        description: "Advanced biometric and AI-powered attendance systems for accurate workforce management.",
        image: "https://images.pexels.com/photos/6694477/pexels-photo-6694477.jpeg",
    },
    Service {
        icon: Icon::Scan,
        title: "eScan",
        description: "Secure document scanning and digital archival solutions with OCR capabilities.",
        image: "https://images.unsplash.com/photo-1598777092715-ad79ed3907e0",
    },
    Service {
        icon: Icon::MessageSquare,
        title: "Fletushka",
        description: "Collaborative platform for seamless team communication and project management.",
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b",
    },
];

pub const FEATURES_INTRO: &str = "We deliver enterprise-grade solutions with uncompromising security, scalability, and performance for businesses of all sizes.";
pub const FEATURES_IMAGE: &str = "https://images.unsplash.com/photo-1573497701175-00c200fd57f0";

pub const FEATURES: [&str; 4] = [
    "Enterprise-grade security and compliance",
    "Custom solutions tailored to your needs",
    "24/7 dedicated support and maintenance",
    "Scalable architecture for future growth",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Projects Delivered" },
    Stat { value: "99.9%", label: "Uptime Guarantee" },
    Stat { value: "150+", label: "Happy Clients" },
    Stat { value: "24/7", label: "Support Available" },
];

pub const TESTIMONIALS_HEADING: &str = "What Our Clients Say";
pub const TESTIMONIALS_INTRO: &str = "Trusted by industry leaders across government, logistics, and enterprise sectors.";
pub const TESTIMONIAL_STARS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Soltriks transformed our logistics operations with their E-Logistics platform. Efficiency increased by 40% in just 3 months.",
        author: "Sarah Johnson",
        role: "COO, LogiTech Solutions",
    },
    Testimonial {
        quote: "The security and reliability of their solutions gave us complete confidence in our digital transformation journey.",
        author: "Michael Chen",
        role: "CTO, SecureGov",
    },
    Testimonial {
        quote: "Outstanding support and custom development. They truly understand enterprise needs and deliver beyond expectations.",
        author: "Elena Rodriguez",
        role: "IT Director, GlobalCorp",
    },
];

pub const CTA_HEADING: &str = "Ready to Transform Your Business?";
pub const CTA_TEXT: &str = "Join hundreds of satisfied clients who trust Soltriks for their mission-critical software solutions.";

pub const FOOTER_IMAGE: &str = "https://images.unsplash.com/photo-1599580546666-c26f15e00933";
pub const FOOTER_TAGLINE: &str = "Empowering businesses with smart software solutions and serious security.";
pub const COPYRIGHT: &str = "© 2024 Soltriks. All rights reserved. Built with ❤️ for innovation.";

pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn" },
    SocialLink { icon: Icon::Twitter, label: "Twitter" },
    SocialLink { icon: Icon::Github, label: "GitHub" },
];

pub struct LinkColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [LinkColumn; 2] = [
    LinkColumn {
        title: "Services",
        links: &["E-Logistics", "Smart Attendance", "eScan", "Fletushka"],
    },
    LinkColumn {
        title: "Company",
        links: &["About Us", "Careers", "Blog", "Privacy Policy"],
    },
];

pub struct ContactLine {
    pub icon: Icon,
    pub text: &'static str,
}

pub const CONTACT_LINES: [ContactLine; 3] = [
    ContactLine { icon: Icon::Mail, text: "contact@soltriks.com" },
    ContactLine { icon: Icon::Phone, text: "+1 (555) 123-4567" },
    ContactLine { icon: Icon::MapPin, text: "123 Tech Plaza, Innovation District" },
];

/// CSS background with a dark slate overlay on top of `image`.
pub fn overlay_background(image: &str, alpha: f64) -> String {
    format!(
        "background-image: linear-gradient(rgba(15, 23, 42, {a}), rgba(15, 23, 42, {a})), url('{image}');",
        a = alpha,
        image = image,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_in_declared_order() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["E-Logistics", "Smart Attendance", "eScan", "Fletushka"]);
    }

    #[test]
    fn stats_in_declared_order() {
        let values: Vec<&str> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, ["500+", "99.9%", "150+", "24/7"]);
    }

    #[test]
    fn three_testimonials() {
        let authors: Vec<&str> = TESTIMONIALS.iter().map(|t| t.author).collect();
        assert_eq!(authors, ["Sarah Johnson", "Michael Chen", "Elena Rodriguez"]);
    }

    #[test]
    fn footer_services_match_service_cards() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(FOOTER_COLUMNS[0].links, titles.as_slice());
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|link| link.anchor.starts_with('#')));
    }

    #[test]
    fn overlay_wraps_image() {
        let css = overlay_background("https://example.com/a.jpg", 0.85);
        assert_eq!(
            css,
            "background-image: linear-gradient(rgba(15, 23, 42, 0.85), rgba(15, 23, 42, 0.85)), url('https://example.com/a.jpg');"
        );
    }
}
