use super::model::ValidatedStoryRequest;
use regex::Regex;
use std::sync::OnceLock;

/// Speech collaborators only receive this many characters of the story
pub const MAX_NARRATION_CHARS: usize = 300;

/// Build the instruction sent to the text collaborator
pub fn story_prompt(req: &ValidatedStoryRequest) -> String {
    let mut prompt = format!(
        "Create a short interactive story for a child.\n\
         - Age: {}\n\
         - Reading level: {}\n\
         - Theme: {}\n\
         - Gender: {}\n",
        req.age, req.reading_level, req.theme, req.gender
    );

    if let Some(description) = &req.description {
        prompt.push_str(&format!("- Additional Preferences: {}\n", description));
    }

    prompt.push_str("- Format: Markdown with headings and chapters\n");
    prompt
}

pub fn image_prompt(theme: &str) -> String {
    format!("cute colorful illustration for children about {}", theme)
}

pub fn video_prompt(story_text: &str) -> String {
    format!(
        "A short animated scene about {}, child friendly, colorful",
        story_text
    )
}

fn non_narratable() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("static pattern compiles"))
}

/// Strip everything except ASCII letters, digits and whitespace, then keep
/// the first [`MAX_NARRATION_CHARS`] characters
pub fn narration_text(story_text: &str) -> String {
    non_narratable()
        .replace_all(story_text, "")
        .chars()
        .take(MAX_NARRATION_CHARS)
        .collect()
}
