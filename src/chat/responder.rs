//! Keyword responder
//!
//! Replies are chosen by walking [`REPLY_RULES`] in order and returning the
//! canned reply of the first rule with a keyword contained in the lowercased
//! input. Specific, actionable intents come before general topics, and
//! greetings come last, so text hitting several rules resolves to the earliest.

/// What a visitor's message is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Consulting services on offer
    Services,
    /// GIS work and past projects
    Work,
    /// Collaboration, hiring, getting in touch
    Collaboration,
    /// Drone survey work
    Drone,
    /// AI and machine learning research
    Ai,
    /// Plain greeting
    Greeting,
    /// Nothing matched
    Fallback,
}

impl Intent {
    /// Canned reply for this intent
    pub fn reply(&self) -> &'static str {
        match self {
            Self::Services => "Scotch specializes in GIS System Architecture, Drone Data & GIS Integration, Spatial Data Consulting, and AI-powered geospatial solutions. Would you like to explore any of these in detail?",
            Self::Work => "Scotch has built spatial systems that governments and financial institutions rely on, from enterprise GIS platforms to drone survey pipelines. His work spans PostGIS, GeoDjango, and cutting-edge AI integration. Check out the Work page for case studies!",
            Self::Collaboration => "I'd love to connect you with Scotch! Head over to the Contact page to send an inquiry, or feel free to describe your spatial challenge here and I can help you figure out the best approach.",
            Self::Drone => "Scotch is designing next-generation spatial systems using drone technology combined with AI. This includes automated survey pipelines, orthomosaic processing, and real-time aerial data integration with existing GIS infrastructure.",
            Self::Ai => "AI + GIS is one of Scotch's key research areas. This includes using machine learning for spatial pattern recognition, automated feature extraction from satellite and drone imagery, and predictive geospatial analytics.",
            Self::Greeting => "Hey! Great to have you here. I can tell you about Scotch's spatial consulting services, GIS projects, or help you get in touch. What are you curious about?",
            Self::Fallback => "That's a great question! While I'm currently running in demo mode, Scotch would love to discuss this further. You can reach out via the Contact page, or ask me about his services, GIS projects, or drone + AI research.",
        }
    }
}

/// One entry of the priority table
#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    /// Intent selected when this rule matches
    pub intent: Intent,
    /// Lowercase substrings that trigger the rule
    pub keywords: &'static [&'static str],
}

impl ReplyRule {
    /// Check the rule against already-lowercased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in priority order; the first match wins
pub const REPLY_RULES: [ReplyRule; 6] = [
    ReplyRule {
        intent: Intent::Services,
        keywords: &["service", "offer"],
    },
    ReplyRule {
        intent: Intent::Work,
        keywords: &["gis", "work", "project"],
    },
    ReplyRule {
        intent: Intent::Collaboration,
        keywords: &["collaborate", "hire", "contact"],
    },
    ReplyRule {
        intent: Intent::Drone,
        keywords: &["drone"],
    },
    ReplyRule {
        intent: Intent::Ai,
        keywords: &["ai", "artificial intelligence", "machine learning"],
    },
    ReplyRule {
        intent: Intent::Greeting,
        keywords: &["hello", "hi", "hey"],
    },
];

/// Classify a visitor message into an intent
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

/// Pick the canned reply for a visitor message
pub fn classify_and_reply(text: &str) -> &'static str {
    classify(text).reply()
}
