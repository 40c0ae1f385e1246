// Prompt fragments shared by every model-backed feature.
// Feature-specific prompts live in that feature's own prompts.rs.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a careful career analyst. \
    Respond with a single valid JSON object and nothing else: \
    no markdown code fences, no commentary before or after the object.";

/// Market framing shared by every projection prompt.
pub const INDIAN_MARKET_INSTRUCTION: &str = "\
    Consider Indian job market conditions, salary ranges in INR, and career \
    progression patterns typical for Indian employers.";
