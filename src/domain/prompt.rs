//! Style-conditioned prompt construction.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, StyleSet};

/// Style clause used when no style is selected.
pub const FALLBACK_STYLE_DESCRIPTION: &str = "General Hip-Hop";

const SYSTEM_INSTRUCTION_TEMPLATE: &str = "\
You are a world-class record producer and ad-lib specialist for a major music label.
Your task is to take raw lyrics and provide professional-grade ad-libs that enhance the rhythm, energy, and storytelling of the song.

Target vibe: {{ style_description }}

Rules:
1. Insert ad-libs at the end of lines or in pauses where they make musical sense.
2. Always format an ad-lib as parenthetical text immediately after the lyric it punctuates: Lyric text (Ad-lib!).
3. Match the energy and vocabulary of every ad-lib to the selected vibe: {{ style_description }}.
4. Provide a \"signatureCall\" (a catchphrase for the intro).
5. Provide a list of 5-8 \"generalAdLibs\" that can be used throughout.
6. Provide a brief \"vibeAnalysis\" of why these ad-libs work for this vibe.
7. Propose 2-3 targeted \"lyricSuggestions\" that rewrite specific lines toward the conventions of {{ style_labels }}:
   - aggressive styles: sharper slang and tighter cadence
   - classic styles: stronger imagery and internal rhyme
   - melodic styles: smoother phrasing and vocal flourish
   Each suggestion names the original line, the suggested change, and the reason.
8. Return ONLY JSON matching the response schema. No prose before or after it.";

const SYSTEM_INSTRUCTION_NAME: &str = "system_instruction";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Shared strict environment with the system instruction template preloaded.
fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(SYSTEM_INSTRUCTION_NAME, SYSTEM_INSTRUCTION_TEMPLATE)
            .expect("system instruction template must parse");
        env
    })
}

/// Rendered prompt for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_content: String,
}

/// Joined `Label (Descriptor)` text for the selected styles.
pub fn style_description(styles: &StyleSet) -> String {
    if styles.is_empty() {
        return FALLBACK_STYLE_DESCRIPTION.to_string();
    }
    styles.iter().map(|style| style.info().description()).collect::<Vec<_>>().join(", ")
}

/// Build the system instruction and user content for `lyrics` under `styles`.
///
/// Callers are expected to pass a non-empty style set.
pub fn build_prompt(lyrics: &str, styles: &StyleSet) -> Result<Prompt, AppError> {
    let style_labels =
        if styles.is_empty() { FALLBACK_STYLE_DESCRIPTION.to_string() } else { styles.labels() };

    let system_instruction = environment()
        .get_template(SYSTEM_INSTRUCTION_NAME)
        .and_then(|template| {
            template.render(context! {
                style_description => style_description(styles),
                style_labels => style_labels,
            })
        })
        .map_err(|e| AppError::Prompt(e.to_string()))?;

    Ok(Prompt { system_instruction, user_content: lyrics.to_string() })
}
