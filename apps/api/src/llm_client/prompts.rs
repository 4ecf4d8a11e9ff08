// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction fragment for replies that must be a single fenced JSON object.
/// The maps tool rules out `responseMimeType: application/json`, so the shape
/// can only be requested in prose.
pub const FENCED_JSON_ONLY: &str = "IMPORTANTE: Responde ÚNICAMENTE con un objeto JSON \
    válido dentro de bloques de código markdown.";

/// Substitutes `{key}` placeholders in a single left-to-right pass.
///
/// Values are inserted verbatim and never rescanned, so user text that happens
/// to contain `{country}` stays literal. Unknown placeholders are left as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
