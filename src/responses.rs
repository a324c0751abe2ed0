//! Pre-authored assistant replies.
//!
//! Pure lookup: each intent maps to exactly one fixed reply string. No
//! templating, no randomness. The only personalized text in the engine is
//! the intake flow's thank-you and summary, which live in [`crate::lead`].

use crate::intent::Intent;

/// Opening line the UI renders when the assistant is first opened. The
/// conversation log itself starts empty; this is display-only.
pub const GREETING: &str = "Hello! I'm Salman's AI assistant. I can help you explore his portfolio, discuss project requirements, schedule consultations, or answer any questions about his services.";

/// The fixed reply for a classified intent.
///
/// [`Intent::ProjectInquiry`] is the one intent the turn controller does
/// not answer from this table: it starts the lead intake and replies with
/// the intake's opening prompt instead. The entry here is only used if a
/// host calls the generator directly.
pub fn reply_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Greeting => "Hello! I'm pleased to assist you today. I can provide information about Salman's portfolio, discuss your project requirements, or help schedule a consultation. How may I help you with your specific needs?",
        Intent::Portfolio => "Salman has developed an impressive portfolio across multiple disciplines. His work includes responsive web applications, AI-driven solutions, and creative design projects. Would you like to explore a specific category of his work? I can provide detailed examples from his web development, AI implementations, or design projects.",
        Intent::Contact => "You can reach Salman directly at contact@salmankhan.dev or through the contact form on this site. For a more personalized approach, I'd be happy to help schedule a consultation call to discuss your project requirements in detail. Would that be helpful for you?",
        Intent::Scheduling => "I'd be pleased to assist with scheduling a consultation. Salman is available Monday through Friday, 9am to 6pm PKT. He offers both video and voice calls depending on your preference. What date and time would work best for your schedule? Once confirmed, you'll receive a calendar invitation with all the necessary details.",
        Intent::Skills => "Salman brings extensive expertise across multiple domains. His core competencies include full-stack web development with React and Next.js, AI/ML implementations using Python and TensorFlow, blockchain technologies, and professional UI/UX design. He also has significant experience with cloud infrastructure, database optimization, and responsive design principles. Which specific area would you like to explore further?",
        Intent::Pricing => "Pricing is tailored to each project's specific requirements and scope. Salman offers flexible engagement models including fixed-price projects, hourly rates, and retainer arrangements. To provide you with an accurate estimate, could you share some details about your project's scope, timeline, and objectives? This will help us determine the most suitable approach for your needs.",
        Intent::ProjectInquiry => "I'd be delighted to discuss your project requirements. To help Salman understand your needs better and provide the most relevant solutions, could you share some details about your project?",
        Intent::Thanks => "You're most welcome! It's been my pleasure to assist you. Is there anything else I can help you with regarding Salman's services or your project requirements? Feel free to reach out anytime you need further information or assistance.",
        Intent::WebDev => "Salman specializes in creating responsive, high-performance web applications using modern technologies like React, Next.js, and TypeScript. His web development services include e-commerce platforms, AI-integrated tools, custom web applications, and progressive web apps. Each solution is built with scalability, security, and optimal user experience in mind. Would you like to see specific examples from his web development portfolio or discuss a particular web project you have in mind?",
        Intent::Design => "Salman offers comprehensive design services including brand identity development, UI/UX design, logo creation, and 3D graphics. His design philosophy centers on the perfect balance between aesthetic appeal and functional user experience. Each design project begins with thorough research and conceptualization to ensure the final product aligns perfectly with the client's brand and objectives. Would you like to explore his design portfolio or discuss a specific design project you're considering?",
        Intent::AiMl => "Salman has extensive expertise in AI and machine learning implementations. His work includes developing custom AI solutions, creating intelligent automation workflows, building predictive analytics systems, and implementing natural language processing applications. He's proficient with Python, TensorFlow, PyTorch, and various AI frameworks. Would you like to discuss a specific AI project or explore case studies of his previous AI implementations?",
        Intent::Blockchain => "Salman has significant experience with blockchain technologies and Web3 development. His expertise includes smart contract development, decentralized application (dApp) creation, and blockchain integration with existing systems. He's worked with Ethereum, Solidity, and various Web3 frameworks to deliver secure and efficient blockchain solutions. Would you like to discuss a specific blockchain project or learn more about his approach to Web3 development?",
        Intent::Timeline => "Project timelines vary based on scope, complexity, and specific requirements. Salman is known for delivering high-quality work within agreed timeframes. For a typical web development project, the timeline might range from 2-8 weeks, while smaller design projects might be completed in 1-2 weeks. To provide a more accurate timeline for your specific project, could you share some details about its scope and requirements?",
        Intent::Process => "Salman follows a structured process to ensure project success. This typically begins with a detailed discovery phase to understand your requirements, followed by planning and conceptualization. Development or design work proceeds with regular check-ins and feedback sessions. Before delivery, all work undergoes thorough testing and quality assurance. After launch, ongoing support is available to address any questions or adjustments. Would you like more details about a specific phase of this process?",
        Intent::General => "Thank you for your interest in Salman's services. To provide you with the most relevant information, could you specify which aspect of his expertise you're interested in? Whether it's web development, design, AI solutions, or another area, I'm here to guide you through the options and help you determine the best approach for your specific needs.",
    }
}

/// Quick-action buttons the UI renders below the scrollback. Pressing one
/// submits a fixed utterance through the normal turn path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Portfolio,
    Services,
    Contact,
    StartProject,
}

impl QuickAction {
    pub const ALL: &'static [Self] = &[
        Self::Portfolio,
        Self::Services,
        Self::Contact,
        Self::StartProject,
    ];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Portfolio => "Portfolio",
            Self::Services => "Services",
            Self::Contact => "Contact",
            Self::StartProject => "Start Project",
        }
    }

    /// The utterance the button submits.
    pub fn utterance(&self) -> &'static str {
        match self {
            Self::Portfolio => "Show me the portfolio",
            Self::Services => "What services do you offer?",
            Self::Contact => "How can I contact Salman?",
            Self::StartProject => "I want to start a project",
        }
    }
}
