// Prompts for the resume evaluator. Each service that needs LLM calls
// defines its own prompts.rs alongside it.

/// System instruction fixing the evaluator's persona, domain focus, scoring
/// range, and the hard requirement to conform to the declared output schema.
pub const ANALYZE_SYSTEM: &str = "You are an expert AI Resume Analyzer for Data Science and AI roles. \
    Your task is to objectively evaluate the provided resume text. \
    Strictly adhere to the required JSON output format. \
    The Overall_Score must be between 0 and 100. \
    Base your evaluation on relevance to Data Science, Machine Learning, and AI Engineering.";

/// User message template. `{resume_text}` is replaced with the cleaned
/// extraction output, delimited so the model can tell content from framing.
pub const ANALYZE_PROMPT_TEMPLATE: &str = "Analyze the following resume text for a Data Scientist role:\n\n\
    --- RESUME CONTENT ---\n\
    {resume_text}\n\
    ----------------------";

/// Sampling temperature for evaluation calls. Kept low so grading stays as
/// objective as the model allows.
pub const ANALYZE_TEMPERATURE: f32 = 0.2;
