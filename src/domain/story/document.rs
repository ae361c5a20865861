/// Uppercase the first letter of every run of cased letters and lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Data URIs and text that make up one storybook
#[derive(Debug, Clone)]
pub struct StorybookParts<'a> {
    pub theme: &'a str,
    pub image_uri: &'a str,
    pub story_text: &'a str,
    pub audio_uri: &'a str,
    pub video_uri: Option<&'a str>,
}

/// Interpolate the parts into the markdown storybook template
pub fn compose(parts: &StorybookParts<'_>) -> String {
    let mut document = format!(
        "\n# 📖 Adaptive Storybook: {}\n\n![Illustration]({})\n\n{}\n\n---\n\n🔊 [Listen to narration]({})\n",
        title_case(parts.theme),
        parts.image_uri,
        parts.story_text,
        parts.audio_uri
    );

    if let Some(video_uri) = parts.video_uri {
        document.push_str(&format!("\n🎬 [Watch the animation]({})\n", video_uri));
    }

    document
}
