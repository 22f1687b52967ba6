//! Static page copy.

use atelier_effects::AnimatedCounter;

pub const FIRST_NAME: &str = "ALI";
pub const LAST_NAME: &str = "KRAYEM";
pub const TAGLINE: &str = "DIGITAL CREATOR";
pub const HERO_LINES: [&str; 2] = ["AI VISUAL CREATOR", "AI CONTENT PRODUCTION"];
pub const TRUST_LINE: &str = "CINEMATIC AI  •  COMMERCIAL VISUALS";
/// Delay before the hero headline starts typing.
pub const HERO_TYPE_DELAY_MS: u64 = 1500;
/// Milliseconds per typed character.
pub const HERO_TYPE_SPEED_MS: u64 = 80;

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm an AI content creator working on high-level visual production.",
    "I collaborate with individuals, creatives, and brands to transform ideas into striking \
     visual content, adapting each project to its concept while keeping the vision clear and \
     visually consistent.",
    "My focus is on crafting ultra-realistic cinematic scenes, premium advertising visuals, \
     professional studio photography, and social media content designed for attention and \
     impact.",
];

pub const STATS: [AnimatedCounter; 3] = [
    AnimatedCounter::new(8, "+", "Years Experience"),
    AnimatedCounter::new(500, "+", "Projects Done"),
    AnimatedCounter::new(2, "M+", "Followers"),
];

/// A titled blurb, used for services and process steps.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Entry; 4] = [
    Entry {
        title: "Cinematic Video Production",
        description: "AI-generated cinematic scenes and short films.",
    },
    Entry {
        title: "Commercial & Advertising Visuals",
        description: "AI concept ads and commercial visuals for brands.",
    },
    Entry {
        title: "Photography & Studio Imagery",
        description: "AI-generated studio-quality imagery (no physical shoots).",
    },
    Entry {
        title: "Social Media Visual Content",
        description: "AI visuals optimized for digital platforms.",
    },
];

pub const PROCESS: [Entry; 4] = [
    Entry {
        title: "Discovery",
        description: "Understanding your vision and goals",
    },
    Entry {
        title: "Creation",
        description: "AI-powered content development",
    },
    Entry {
        title: "Refinement",
        description: "Polishing to perfection",
    },
    Entry {
        title: "Delivery",
        description: "Final assets ready to elevate your brand",
    },
];

/// A gallery piece.
#[derive(Debug, Clone, Copy)]
pub struct Work {
    pub title: &'static str,
    pub category: &'static str,
    pub badge: Option<&'static str>,
}

const VISUAL: &str = "AI-Generated Visual";
const CONCEPT: Option<&str> = Some("Concept Project");

pub const PORTFOLIO: [Work; 8] = [
    Work { title: "Visual Concept — Mountain Landscape", category: VISUAL, badge: None },
    Work { title: "Visual Concept — Portrait", category: VISUAL, badge: None },
    Work { title: "Visual Concept — Cosmetic Product", category: VISUAL, badge: CONCEPT },
    Work { title: "Visual Concept — City Aerial", category: VISUAL, badge: None },
    Work { title: "Visual Concept — Jewelry Product", category: VISUAL, badge: CONCEPT },
    Work { title: "Visual Concept — Architectural Property", category: VISUAL, badge: CONCEPT },
    Work { title: "Visual Concept — Human Eye Close-Up", category: VISUAL, badge: None },
    Work { title: "Visual Concept — Minimal Still Life", category: VISUAL, badge: None },
];

pub const CONTACT_BLURB: &str = "Whether you have a project in mind, want to collaborate, or \
     just want to say hello, I'd love to hear from you. Fill out the form or reach out directly.";

/// Label and value pairs listed beside the form.
pub const CONTACT_INFO: [(&str, &str); 3] = [
    ("Email", "hello@alikrayem.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Location", "Los Angeles, CA"),
];

pub const SOCIALS: [(&str, &str); 3] = [
    ("Instagram", "@aibyalii"),
    ("TikTok", "@mirakyl404"),
    ("LinkedIn", "—"),
];

pub const COPYRIGHT_HOLDER: &str = "Ali Krayem";
