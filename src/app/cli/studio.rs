use std::path::Path;

use dialoguer::{Editor, MultiSelect, Select};

use crate::app::api;
use crate::app::studio::{EventOutcome, Studio};
use crate::domain::{
    AppError, Phase, SessionEvent, SessionState, StyleId, StyleSet, library, render_terminal,
};
use crate::ports::{ClipboardWriter, CopyStatus, GenerationClient};
use crate::services::ArboardClipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    EditLyrics,
    ToggleStyles,
    Generate,
    CopyScript,
    CopyAdLib,
    Reset,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::EditLyrics,
        MenuItem::ToggleStyles,
        MenuItem::Generate,
        MenuItem::CopyScript,
        MenuItem::CopyAdLib,
        MenuItem::Reset,
        MenuItem::Quit,
    ];

    fn label(self, session: &SessionState) -> String {
        match self {
            MenuItem::EditLyrics => "Edit lyrics".to_string(),
            MenuItem::ToggleStyles => format!("Styles [{}]", session.styles().labels()),
            MenuItem::Generate => match session.can_generate() {
                Ok(()) => "Generate ad-libs".to_string(),
                Err(blocked) => format!("Generate ad-libs ({})", blocked),
            },
            MenuItem::CopyScript => "Copy full script".to_string(),
            MenuItem::CopyAdLib => "Copy a single ad-lib".to_string(),
            MenuItem::Reset => "Reset session".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

pub(super) fn run_studio(config: Option<&Path>) -> Result<(), AppError> {
    let mut studio = api::open_studio(config)?;

    loop {
        print_status(studio.session());

        let items: Vec<String> =
            MenuItem::ALL.iter().map(|item| item.label(studio.session())).collect();
        let selection = Select::new()
            .with_prompt("Studio")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Interaction(format!("Failed to read selection: {}", err)))?;

        let Some(index) = selection else { break };
        match MenuItem::ALL[index] {
            MenuItem::EditLyrics => {
                if let Some(text) = edit_lyrics(studio.session().lyrics())? {
                    studio.handle(SessionEvent::LyricsEdited(text));
                }
            }
            MenuItem::ToggleStyles => {
                for style in pick_styles(studio.session().styles())? {
                    studio.handle(SessionEvent::StyleToggled(style));
                }
            }
            MenuItem::Generate => run_generate(&mut studio),
            MenuItem::CopyScript => {
                let status = match ArboardClipboard::new() {
                    Ok(mut clipboard) => studio.copy_script(&mut clipboard),
                    Err(err) => CopyStatus::Failed(err.to_string()),
                };
                report_copy(&status, "full script");
            }
            MenuItem::CopyAdLib => copy_single_ad_lib(&studio)?,
            MenuItem::Reset => {
                studio.handle(SessionEvent::ResetRequested);
                println!("Session reset.");
            }
            MenuItem::Quit => break,
        }
    }

    Ok(())
}

fn print_status(session: &SessionState) {
    let lines = session.lyrics().lines().filter(|line| !line.trim().is_empty()).count();
    println!();
    println!(
        "Lyrics: {} line(s) | Styles: {} | {}",
        lines,
        session.styles().labels(),
        session.phase().label()
    );
    if let Phase::Failure(message) = session.phase() {
        println!("⚠️  {}", message);
    }
}

fn run_generate<C: GenerationClient>(studio: &mut Studio<C>) {
    println!("🎙️  {}", library::loading_step(0));
    match studio.handle(SessionEvent::GenerateRequested) {
        EventOutcome::Generated => {
            if let Some(result) = studio.result() {
                print!("{}", render_terminal(result));
            }
        }
        EventOutcome::Failed(message) => eprintln!("⚠️  {}", message),
        EventOutcome::Blocked(blocked) => println!("Cannot generate yet: {}", blocked),
        EventOutcome::Applied | EventOutcome::Ignored => {}
    }
}

fn edit_lyrics(current: &str) -> Result<Option<String>, AppError> {
    Editor::new()
        .edit(current)
        .map_err(|err| AppError::Interaction(format!("Failed to open editor: {}", err)))
}

fn pick_styles(current: &StyleSet) -> Result<Vec<StyleId>, AppError> {
    let items: Vec<String> = StyleId::ALL.iter().map(|style| style.info().description()).collect();
    let checked: Vec<bool> = StyleId::ALL.iter().map(|style| current.contains(*style)).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Styles (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&checked)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select styles: {}", err)))?;

    Ok(chosen.map(|indices| style_toggles(current, &indices)).unwrap_or_default())
}

/// Styles whose membership differs between `current` and the chosen catalog indices.
fn style_toggles(current: &StyleSet, chosen: &[usize]) -> Vec<StyleId> {
    StyleId::ALL
        .iter()
        .enumerate()
        .filter(|(index, style)| current.contains(**style) != chosen.contains(index))
        .map(|(_, style)| *style)
        .collect()
}

fn copy_single_ad_lib<C: GenerationClient>(studio: &Studio<C>) -> Result<(), AppError> {
    let generated = studio.result().map(|result| result.general_ad_libs.clone()).unwrap_or_default();
    let items = ad_lib_choices(&generated);

    let selection = Select::new()
        .with_prompt("Ad-lib to copy")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select ad-lib: {}", err)))?;

    if let Some(index) = selection {
        let text = &items[index];
        let status = match ArboardClipboard::new() {
            Ok(mut clipboard) => clipboard.copy(text),
            Err(err) => CopyStatus::Failed(err.to_string()),
        };
        report_copy(&status, text);
    }
    Ok(())
}

/// Generated ad-libs first, then the stock library.
fn ad_lib_choices(generated: &[String]) -> Vec<String> {
    generated
        .iter()
        .cloned()
        .chain(library::SAMPLE_LIBRARY.iter().map(|entry| entry.to_string()))
        .collect()
}

fn report_copy(status: &CopyStatus, what: &str) {
    match status {
        CopyStatus::Copied => println!("✅ Copied {}", what),
        CopyStatus::NothingToCopy => println!("Nothing to copy yet. Generate first."),
        CopyStatus::Failed(message) => eprintln!("⚠️  Could not copy: {}", message),
    }
}
