//! Per-intent refinement templates used by the reference service.

use crate::catalog::IntentId;

struct Template {
    prefix: &'static str,
    suffix: &'static str,
}

fn template(intent: IntentId) -> Template {
    match intent {
        IntentId::ImageGeneration => Template {
            prefix: "Create a detailed image prompt for AI generation: ",
            suffix: "\n\nAdditional requirements:\n\
                     - Specify artistic style, lighting, composition\n\
                     - Include technical details like camera angle, resolution preferences\n\
                     - Mention color palette and mood\n\
                     - Be specific about subject details and environment",
        },
        IntentId::CodeGeneration => Template {
            prefix: "Generate clean, well-documented code for: ",
            suffix: "\n\nRequirements:\n\
                     - Include proper error handling\n\
                     - Add comprehensive comments\n\
                     - Follow best practices and conventions\n\
                     - Provide usage examples\n\
                     - Consider edge cases and validation",
        },
        IntentId::Research => Template {
            prefix: "Conduct thorough research on: ",
            suffix: "\n\nResearch guidelines:\n\
                     - Provide credible sources and citations\n\
                     - Include multiple perspectives\n\
                     - Analyze current trends and developments\n\
                     - Present factual, unbiased information\n\
                     - Structure findings logically",
        },
        IntentId::GeneralKnowledge => Template {
            prefix: "Provide comprehensive information about: ",
            suffix: "\n\nResponse format:\n\
                     - Start with a clear definition or overview\n\
                     - Include relevant examples and context\n\
                     - Explain key concepts and relationships\n\
                     - Use accessible language\n\
                     - Provide practical applications where relevant",
        },
        IntentId::LatestInfo => Template {
            prefix: "Find the most current information about: ",
            suffix: "\n\nInformation requirements:\n\
                     - Focus on recent developments and updates\n\
                     - Include dates and timeline context\n\
                     - Verify information from multiple sources\n\
                     - Highlight what's new or changed\n\
                     - Provide context for recent events",
        },
    }
}

/// Wrap `base_prompt` in the template for `intent`.
///
/// Unknown intents return the base prompt unchanged.
pub fn refine_prompt(base_prompt: &str, intent: &str) -> String {
    match intent.parse::<IntentId>() {
        Ok(intent) => {
            let Template { prefix, suffix } = template(intent);
            format!("{prefix}{base_prompt}{suffix}")
        }
        Err(_) => base_prompt.to_string(),
    }
}
