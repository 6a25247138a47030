//! Response schema sent with each generation call.
//!
//! Descriptions are generation hints for the model; validation happens in
//! `GenerationResult::decode`.

use serde_json::{Value, json};

/// Top-level fields the model must emit.
pub const REQUIRED_FIELDS: [&str; 5] =
    ["annotatedLyrics", "generalAdLibs", "vibeAnalysis", "signatureCall", "lyricSuggestions"];

/// Fields of each `lyricSuggestions` element.
pub const SUGGESTION_FIELDS: [&str; 3] = ["originalLine", "suggestedChange", "reason"];

/// Schema in the Gemini `responseSchema` dialect.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "annotatedLyrics": {
                "type": "STRING",
                "description": "The full lyrics with ad-libs in parentheses."
            },
            "generalAdLibs": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 5-8 short punchy ad-libs like 'Skrrt', 'Pah', etc."
            },
            "vibeAnalysis": {
                "type": "STRING",
                "description": "A brief explanation of the artistic direction."
            },
            "signatureCall": {
                "type": "STRING",
                "description": "An intro catchphrase or signature tag."
            },
            "lyricSuggestions": {
                "type": "ARRAY",
                "description": "2-3 targeted rewrites of specific lyric lines in the selected styles.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "originalLine": {
                            "type": "STRING",
                            "description": "The lyric line as written."
                        },
                        "suggestedChange": {
                            "type": "STRING",
                            "description": "The rewritten line."
                        },
                        "reason": {
                            "type": "STRING",
                            "description": "Why the rewrite fits the selected styles."
                        }
                    },
                    "required": SUGGESTION_FIELDS
                }
            }
        },
        "required": REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_required_field_is_declared_with_description() {
        let schema = response_schema();
        let properties = schema["properties"].as_object().unwrap();
        for field in REQUIRED_FIELDS {
            let property = &properties[field];
            assert!(property["type"].is_string(), "{field} has no type");
            assert!(property["description"].as_str().is_some_and(|d| !d.is_empty()));
        }
        assert_eq!(schema["required"].as_array().unwrap().len(), REQUIRED_FIELDS.len());
    }

    #[test]
    fn suggestion_items_require_all_fields() {
        let schema = response_schema();
        let items = &schema["properties"]["lyricSuggestions"]["items"];
        assert_eq!(items["type"], "OBJECT");
        let required: Vec<&str> =
            items["required"].as_array().unwrap().iter().filter_map(Value::as_str).collect();
        assert_eq!(required, SUGGESTION_FIELDS);
        for field in SUGGESTION_FIELDS {
            assert_eq!(items["properties"][field]["type"], "STRING");
        }
    }

    #[test]
    fn general_ad_libs_is_string_array() {
        let schema = response_schema();
        let field = &schema["properties"]["generalAdLibs"];
        assert_eq!(field["type"], "ARRAY");
        assert_eq!(field["items"]["type"], "STRING");
    }
}
