//! Extraction of the JSON object embedded in a model's free-text reply.
//!
//! Models are asked to answer with JSON only, but routinely wrap it in prose
//! ("Here are your menus: {...} Enjoy!"). The decoder takes everything from
//! the first `{` to the last `}` and parses that span. There is no brace
//! balancing and no partial recovery: one malformed character anywhere in
//! the span fails the whole decode.

use serde_json::Value;
use tracing::warn;

use crate::error::DecodeError;

/// Number of characters of the raw reply included in failure logs.
const PREVIEW_CHARS: usize = 100;

/// Decode the JSON object spanning the first `{` to the last `}` of `text`.
pub fn extract_json(text: &str) -> Result<Value, DecodeError> {
    let span = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            warn!(preview = %preview(text), "No JSON object in model reply");
            return Err(DecodeError::NoJsonFound);
        }
    };

    serde_json::from_str(span).map_err(|e| {
        warn!(error = %e, preview = %preview(text), "Model reply JSON failed to parse");
        DecodeError::Malformed(e)
    })
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().nth(PREVIEW_CHARS).is_some() {
        out.push_str("...");
    }
    out
}
