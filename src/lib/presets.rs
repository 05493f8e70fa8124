//! Fixed model presets backing each launch mode.

/// A model served by Ollama together with the notes shown by `llm-models info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelPreset {
    pub model_id: &'static str,
    pub size: &'static str,
    pub quantization: &'static str,
    pub description: &'static str,
    pub use_case: &'static str,
}

pub const PRIMARY_PRESET: ModelPreset = ModelPreset {
    model_id: "qwen2.5-coder:7b-instruct-q8_0",
    size: "7B",
    quantization: "Q8",
    description: "Primary coding model - highest quality",
    use_case: "Production code, critical bugs, complex algorithms",
};

pub const FAST_PRESET: ModelPreset = ModelPreset {
    model_id: "qwen2.5-coder:7b-instruct-q4_K_M",
    size: "7B",
    quantization: "Q4",
    description: "Fast model for quick iterations",
    use_case: "Prototypes, simple scripts, testing",
};

pub const EXTENDED_PRESET: ModelPreset = ModelPreset {
    model_id: "qwen2.5-coder:7b-instruct-q6_K",
    size: "7B",
    quantization: "Q6",
    description: "Extended context variant",
    use_case: "Multi-file refactoring, large files",
};

pub const COMPLEX_PRESET: ModelPreset = ModelPreset {
    model_id: "qwen2.5-coder:14b-instruct-q4_K_M",
    size: "14B",
    quantization: "Q4",
    description: "Complex reasoning model",
    use_case: "Architecture, design patterns, complex tasks",
};

/// Returns true when `model_id` shows up in the text printed by `ollama list`.
///
/// Matches on the first column only, so `foo:7b` does not match `foo:7b-q4`.
pub fn is_listed(model_id: &str, list_output: &str) -> bool {
    list_output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .any(|name| name == model_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_OUTPUT: &str = "\
NAME                                 ID              SIZE      MODIFIED
qwen2.5-coder:7b-instruct-q8_0       a1b2c3d4e5f6    8.1 GB    2 days ago
qwen2.5-coder:7b-instruct-q4_K_M     0f9e8d7c6b5a    4.7 GB    3 weeks ago
";

    #[test]
    fn listed_models_match_on_exact_name() {
        assert!(is_listed(PRIMARY_PRESET.model_id, LIST_OUTPUT));
        assert!(is_listed(FAST_PRESET.model_id, LIST_OUTPUT));
        assert!(!is_listed(EXTENDED_PRESET.model_id, LIST_OUTPUT));
        assert!(!is_listed("qwen2.5-coder:7b", LIST_OUTPUT));
    }

    #[test]
    fn header_and_blank_output_never_match() {
        assert!(!is_listed("NAME", ""));
        assert!(!is_listed(COMPLEX_PRESET.model_id, "\n\n"));
    }
}
