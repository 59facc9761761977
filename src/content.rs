//! Static page copy. Everything here is fixed at startup; links that the
//! operator may want to swap live in [`crate::config::LinksConfig`].

use ratatui::style::Color;

/// Anchor in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct HeroContent {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub subheading: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub icons: [(&'static str, &'static str, Color); 3],
}

#[derive(Debug, Clone, Copy)]
pub struct WhyCard {
    pub glyph: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub accent: Color,
}

#[derive(Debug, Clone, Copy)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image_url: &'static str,
    pub video_url: &'static str,
}

/// Entry of the rotating tools carousel
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub sample_prompt: &'static str,
    pub glyph: &'static str,
    pub color: Color,
}

/// Which configured form a mission card opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionForm {
    Join,
    SubmitIdea,
    UploadCreation,
    Feedback,
}

#[derive(Debug, Clone, Copy)]
pub struct Mission {
    pub id: &'static str,
    pub title: &'static str,
    pub instruction: &'static str,
    pub cta_text: &'static str,
    pub accent: Color,
    pub form: MissionForm,
}

pub const BRAND: &str = "Everyone’s AI";

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: "why",
        label: "Why AI?",
    },
    NavItem {
        id: "stories",
        label: "Stories",
    },
    NavItem {
        id: "learn",
        label: "Learn Tools",
    },
    NavItem {
        id: "get-involved",
        label: "Get Involved",
    },
];

pub const HERO: HeroContent = HeroContent {
    badge: "For explorers of all ages",
    headline: "Making AI friendly —",
    headline_accent: "for everyone.",
    subheading: "Let’s explore AI the way we explore a new world — with curiosity, not complexity.",
    cta_primary: "Spark your idea",
    cta_secondary: "Read stories",
    icons: [
        ("☺", "Friendly", Color::Cyan),
        ("✦", "Magic", Color::Magenta),
        ("❏", "Stories", Color::LightRed),
    ],
};

pub const WHY_HEADING: &str = "Why explore AI?";
pub const WHY_INTRO: &str = "Exploring AI today prepares us for the world of tomorrow. AI helps us learn faster, imagine more, and solve simple problems beautifully.";

pub const WHY_CARDS: [WhyCard; 3] = [
    WhyCard {
        glyph: "✎",
        title: "For Kids",
        body: "A creative buddy that helps you write stories, draw imaginary worlds, and answer \"why?\" a million times a day.",
        accent: Color::Magenta,
    },
    WhyCard {
        glyph: "◷",
        title: "For Parents & Teachers",
        body: "A time-saving assistant that helps plan lessons, brainstorm dinner ideas, and simplify complex topics.",
        accent: Color::Cyan,
    },
    WhyCard {
        glyph: "☻",
        title: "For Elders",
        body: "A patient companion for revisiting memories, learning new hobbies, and composing beautiful letters to family.",
        accent: Color::LightRed,
    },
];

pub const STORIES_HEADING: &str = "Stories from the Frontier";
pub const STORIES_INTRO: &str = "Discover how simple AI tools help people create easier, happier moments every day. And see how these small changes make everyday life feel a little more creative and empowering.";

pub const STORIES: [Story; 4] = [
    Story {
        id: "1",
        title: "Maya and the Helpful Robot",
        excerpt: "Maya learns how a small chatbot helped her finish a story — and she keeps writing.",
        image_url: "https://placehold.co/800x600/5B21B6/FFF?text=Maya+and+Helpful+Robot",
        video_url: "https://www.youtube.com/watch?v=DBQH_ZwASJ4&t=3s",
    },
    Story {
        id: "2",
        title: "Grandpa’s First AI Question",
        excerpt: "A grandfather asks one simple question and sparks a curious conversation.",
        image_url: "https://placehold.co/800x600/06B6D4/FFF?text=Grandpa+and+AI",
        video_url: "https://www.youtube.com/watch?v=0B3cI1wE7lw",
    },
    Story {
        id: "3",
        title: "The Teacher’s Tiny Assistant",
        excerpt: "A teacher uses a short prompt to create a lesson plan in minutes.",
        image_url: "https://placehold.co/800x600/F43F5E/FFF?text=Teacher+and+Laptop",
        video_url: "https://www.youtube.com/watch?v=hJP5GqnTrNo",
    },
    Story {
        id: "4",
        title: "The Parent’s Creative Hour",
        excerpt: "AI helps a family turn a rainy afternoon into a craft and story workshop.",
        image_url: "https://placehold.co/800x600/F59E0B/FFF?text=Family+Crafting+Time",
        video_url: "https://www.youtube.com/watch?v=h6gBU7BnQeY",
    },
];

pub const TOOLS_HEADING: &str = "Meet the Tools";
pub const TOOLS_INTRO: &str =
    "These are the tools our explorers use on their journey. Tap one to begin your own.";

pub const TOOLS: [Tool; 6] = [
    Tool {
        id: "chatgpt",
        name: "ChatGPT",
        description: "A conversation partner for ideas.",
        href: "https://chat.openai.com/",
        sample_prompt: "Tell me a bedtime story about a brave toaster.",
        glyph: "✉",
        color: Color::Green,
    },
    Tool {
        id: "dalle",
        name: "DALL·E",
        description: "Turn words into paintings.",
        href: "https://labs.openai.com/",
        sample_prompt: "A futuristic city made of candy, digital art.",
        glyph: "▣",
        color: Color::Blue,
    },
    Tool {
        id: "runway",
        name: "Runway",
        description: "Magic wand for video editing.",
        href: "https://runwayml.com/",
        sample_prompt: "Make the clouds in this video move faster.",
        glyph: "▶",
        color: Color::Magenta,
    },
    Tool {
        id: "midjourney",
        name: "Midjourney",
        description: "Dreamy, artistic image creation.",
        href: "https://www.midjourney.com/",
        sample_prompt: "Portrait of a cat admiral, oil painting style.",
        glyph: "✒",
        color: Color::LightMagenta,
    },
    Tool {
        id: "synthesia",
        name: "Synthesia",
        description: "Create avatars that speak.",
        href: "https://www.synthesia.io/",
        sample_prompt: "Say 'Hello class!' in a friendly voice.",
        glyph: "♫",
        color: Color::LightBlue,
    },
    Tool {
        id: "stablediffusion",
        name: "Stable Diffusion",
        description: "Open creative image generation.",
        href: "https://stability.ai/",
        sample_prompt: "A photograph of an astronaut riding a horse on Mars.",
        glyph: "</>",
        color: Color::LightRed,
    },
];

pub const MISSIONS_HEADING: &str = "Choose Your Mission";
pub const MISSIONS_INTRO: &str =
    "Choose your mission — small entries welcome, big smiles guaranteed.";

pub const MISSIONS: [Mission; 4] = [
    Mission {
        id: "join",
        title: "Join the AI comunity",
        instruction: "The AI community building the future. The platform where the machine learning community collaborates on models, datasets, and applications. Explore AI Apps.",
        cta_text: "Sign Up Now",
        accent: Color::Magenta,
        form: MissionForm::Join,
    },
    Mission {
        id: "submit",
        title: "Submit your idea",
        instruction: "Tried something interesting with AI? Share your idea and help our community explore new possibilities.",
        cta_text: "Share Idea",
        accent: Color::Cyan,
        form: MissionForm::SubmitIdea,
    },
    Mission {
        id: "share",
        title: "Share your creation",
        instruction: "Share a link to your live website or hosted project so we can explore your work in action. Don’t forget to include your GitHub, GitLab, or code repository link so we can review the source as well.",
        cta_text: "Upload Now",
        accent: Color::LightRed,
        form: MissionForm::UploadCreation,
    },
    Mission {
        id: "feedback",
        title: "Community Feedback",
        instruction: "Tell us what’s working well and what we can make better. Your feedback guides us in building a friendlier and more accessible AI journey for everyone.",
        cta_text: "Give Feedback",
        accent: Color::Yellow,
        form: MissionForm::Feedback,
    },
];

pub const SIGNUP_HEADING: &str = "Ready to start your journey?";
pub const SIGNUP_BODY: &str = "Join 10,000+ explorers discovering the fun side of AI every week. No technical skills required.";
pub const SIGNUP_PLACEHOLDER: &str = "Enter your email";
pub const SIGNUP_BUTTON: &str = "Join Now";
pub const SIGNUP_FOOTNOTE: &str = "Unsubscribe at any time.";
pub const SIGNUP_EMPTY_EMAIL: &str = "Please enter your email before joining.";

pub const FOOTER_BLURB: &str = "Making the future friendly, one story at a time. Designed for humans of all ages to explore artificial intelligence with curiosity.";
pub const FOOTER_OWNER: &str = "Nirmal S Samson";
pub const FOOTER_LEGAL: [&str; 3] = ["Privacy Policy", "Terms of Service", "Accessibility"];

/// (label, url) pairs shown as contact icons in the footer
pub const CONTACT_LINKS: [(&str, &str); 3] = [
    ("Email", "mailto:nirmalsamson1017@gmail.com"),
    ("GitHub", "https://github.com/Nirmal1710"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/nirmal-s-samson-000231349/",
    ),
];

/// Footer "Explore" column: (label, section id)
pub const FOOTER_EXPLORE: [(&str, &str); 4] = [
    ("Why AI?", "why"),
    ("Stories", "stories"),
    ("Tools", "learn"),
    ("Get Involved", "get-involved"),
];
