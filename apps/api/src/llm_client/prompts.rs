// Cross-cutting prompt fragments. Feature prompts live next to the feature
// (see screening/prompts.rs).

/// System prompt fragment that forbids commentary around the answer.
pub const NO_COMMENTARY: &str = "Do NOT include explanations, headings or apologies. \
    Do NOT use markdown code fences.";
