//! Display and clipboard text derived from a `GenerationResult`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::GenerationResult;

static AD_LIB_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("ad-lib span pattern must compile"));

const NOTES_HEADER: &str = "=== EXECUTIVE PRODUCER NOTES ===";
const REPORT_HEADER: &str = "=== LYRIC ENHANCEMENT REPORT ===";
const SIGNATURE_HEADER: &str = "=== SIGNATURE TAG ===";
const SCRIPT_HEADER: &str = "=== LIVE RECORDING SCRIPT ===";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Spoken,
    AdLib,
}

/// One trimmed piece of an annotated lyric line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn is_ad_lib(&self) -> bool {
        self.kind == SegmentKind::AdLib
    }
}

/// Split a single line on parenthesized spans, keeping order and dropping blank pieces.
pub fn split_line(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for span in AD_LIB_SPAN.find_iter(line) {
        push_segment(&mut segments, &line[cursor..span.start()]);
        push_segment(&mut segments, span.as_str());
        cursor = span.end();
    }
    push_segment(&mut segments, &line[cursor..]);
    segments
}

fn push_segment(segments: &mut Vec<Segment>, part: &str) {
    let text = part.trim();
    if text.is_empty() {
        return;
    }
    let kind = if text.starts_with('(') && text.ends_with(')') {
        SegmentKind::AdLib
    } else {
        SegmentKind::Spoken
    };
    segments.push(Segment { kind, text: text.to_string() });
}

/// Split annotated lyrics line by line. Blank lines yield empty segment lists.
pub fn split_annotated(text: &str) -> Vec<Vec<Segment>> {
    text.split('\n').map(split_line).collect()
}

/// Plain-text script for clipboard export.
pub fn render_full_script(result: &GenerationResult) -> String {
    let mut out = String::new();

    out.push_str(NOTES_HEADER);
    out.push('\n');
    out.push_str(&result.vibe_analysis);
    out.push_str("\n\n");

    if !result.lyric_suggestions.is_empty() {
        out.push_str(REPORT_HEADER);
        out.push('\n');
        let report = result
            .lyric_suggestions
            .iter()
            .map(|s| {
                format!(
                    "• ORIGINAL: \"{}\"\n  SUGGESTED: \"{}\"\n  LOGIC: {}",
                    s.original_line, s.suggested_change, s.reason
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push_str(&report);
        out.push_str("\n\n");
    }

    if !result.signature_call.is_empty() {
        out.push_str(SIGNATURE_HEADER);
        out.push('\n');
        out.push_str(&format!("\"{}\"\n\n", result.signature_call));
    }

    out.push_str(SCRIPT_HEADER);
    out.push('\n');
    let body = split_annotated(&result.annotated_lyrics)
        .iter()
        .map(|segments| segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push_str(&body);

    out
}

/// Human-readable rendering for the terminal.
pub fn render_terminal(result: &GenerationResult) -> String {
    let mut out = String::new();

    out.push_str("Executive Producer's Notes\n");
    out.push_str(&format!("  \"{}\"\n", result.vibe_analysis));

    if !result.lyric_suggestions.is_empty() {
        out.push_str("\nLyric Enhancement Report\n");
        for suggestion in &result.lyric_suggestions {
            out.push_str(&format!("  - {}\n", suggestion.original_line));
            out.push_str(&format!("  + {}\n", suggestion.suggested_change));
            out.push_str(&format!("    Logic: {}\n", suggestion.reason));
        }
    }

    out.push_str("\nBooth Monitor\n");
    for (index, segments) in split_annotated(&result.annotated_lyrics).iter().enumerate() {
        let number = format!("{:03}", index + 1);
        if segments.is_empty() {
            out.push_str(&format!("{}\n", number));
            continue;
        }
        for (position, segment) in segments.iter().enumerate() {
            let gutter = if position == 0 { number.as_str() } else { "   " };
            let indent = if segment.is_ad_lib() { "      " } else { "  " };
            out.push_str(&format!("{}{}{}\n", gutter, indent, segment.text));
        }
    }

    if !result.signature_call.is_empty() {
        out.push_str(&format!("\nSignature Catchphrase\n  \"{}\"\n", result.signature_call));
    }

    if !result.general_ad_libs.is_empty() {
        out.push_str(&format!("\nStock Energy Shots\n  {}\n", result.general_ad_libs.join("  ")));
    }

    out
}
