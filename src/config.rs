/// `localStorage` key holding the signup email.
pub const EMAIL_STORAGE_KEY: &str = "studyflow_email";

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "studyflow_theme";

/// Copy for one product agent, shown in the detail dialog.
#[derive(Clone, PartialEq, Debug)]
pub struct AgentInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const AGENTS: [AgentInfo; 3] = [
    AgentInfo {
        id: "rag",
        title: "RAG Agent - Answers From Your Own Materials",
        description: "Upload lecture notes, slides, and textbook chapters, then ask questions in \
            plain language. The RAG agent pulls the relevant passages out of your own materials \
            and answers with citations, so you can jump straight to the source page instead of \
            trusting a black box.",
    },
    AgentInfo {
        id: "planner",
        title: "Planner Agent - Personalized Study Scheduling",
        description: "Tell the planner your exam dates, deadlines, and weekly availability. It \
            builds a realistic study schedule, spreads revision over spaced sessions, and quietly \
            rebalances the plan whenever you miss a day or finish early.",
    },
    AgentInfo {
        id: "explainer",
        title: "Explainer Agent - Concepts Made Simple",
        description: "Stuck on a definition that will not click? The explainer rephrases it in \
            plain language, walks through a worked example step by step, and checks your \
            understanding with a quick follow-up question before moving on.",
    },
];

/// Look up an agent by its card id. Unknown ids resolve to `None`.
pub fn agent_info(id: &str) -> Option<&'static AgentInfo> {
    AGENTS.iter().find(|agent| agent.id == id)
}
