//! Prompt Builder
//!
//! Standardized prompt construction for summarizer requests. Sections render
//! in insertion order with a blank line between them.

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Role definition with the task it is asked to perform
    Role { expertise: String, task: String },
    /// Numbered objectives, each with a bold title and a description
    Objectives(Vec<(String, String)>),
    /// Raw text section
    Text(String),
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role definition section
    pub fn role(mut self, expertise: &str, task: &str) -> Self {
        self.sections.push(PromptSection::Role {
            expertise: expertise.to_string(),
            task: task.to_string(),
        });
        self
    }

    /// Add a numbered objectives section
    pub fn objectives(mut self, objectives: &[(&str, &str)]) -> Self {
        self.sections.push(PromptSection::Objectives(
            objectives
                .iter()
                .map(|(title, desc)| (title.to_string(), desc.to_string()))
                .collect(),
        ));
        self
    }

    /// Add text section
    pub fn text(mut self, content: &str) -> Self {
        self.sections
            .push(PromptSection::Text(content.to_string()));
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut blocks = Vec::with_capacity(self.sections.len());

        for section in self.sections {
            let block = match section {
                PromptSection::Role { expertise, task } => {
                    format!("You are a {}. {}", expertise, task)
                }
                PromptSection::Objectives(objectives) => objectives
                    .iter()
                    .enumerate()
                    .map(|(i, (title, desc))| format!("{}. **{}** - {}", i + 1, title, desc))
                    .collect::<Vec<_>>()
                    .join("\n"),
                PromptSection::Text(content) => content,
            };
            blocks.push(block);
        }

        blocks.join("\n\n")
    }
}

/// Documentation sections requested from the summarizer, in output order
pub const DOCUMENTATION_SECTIONS: [(&str, &str); 8] = [
    (
        "Service Overview",
        "What this service does, its purpose and main functionality",
    ),
    ("Architecture", "High-level architecture and key components"),
    (
        "API Documentation",
        "Endpoints, request/response formats, authentication",
    ),
    (
        "Setup & Installation",
        "How to set up and run the service",
    ),
    (
        "Configuration",
        "Environment variables, config files, and settings",
    ),
    ("Usage Examples", "Code examples and common use cases"),
    ("Dependencies", "Key libraries and external services"),
    (
        "Development",
        "How to contribute, build, test, and deploy",
    ),
];

/// Build the service documentation prompt around an assembled context
pub fn documentation_prompt(context: &str) -> String {
    PromptBuilder::new()
        .role(
            "technical documentation expert",
            "Generate comprehensive service documentation based on the following repository analysis:",
        )
        .text(context)
        .text("Generate a well-structured markdown document that includes:")
        .objectives(&DOCUMENTATION_SECTIONS)
        .text(
            "Make the documentation clear, comprehensive, and developer-friendly. \
             Use proper markdown formatting with headers, code blocks, and tables where appropriate.",
        )
        .build()
}
