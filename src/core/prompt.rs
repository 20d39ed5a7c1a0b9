// src/core/prompt.rs — Prompt synthesis for theme generation

use minijinja::{context, Environment};

use crate::infra::errors::TweakAgentError;

/// Fixed instruction placed at the top of every prompt.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert UI designer for Shadcn/UI and Tailwind CSS.
Output ONLY valid JSON representing a theme.
The JSON must have 'name' (string) and 'styles' (object).
'styles' object must match the structure of Shadcn themes (colors for light/dark, radius, etc).";

const TEMPLATE_NAME: &str = "theme_prompt";

const THEME_PROMPT_TEMPLATE: &str = "\
{{ system }}

Task: Create variation #{{ variation }} for the goal: {{ goal }}. Ensure it is unique.";

/// Renders the per-iteration prompt. The template is compiled once.
pub struct PromptBuilder {
    env: Environment<'static>,
}

impl PromptBuilder {
    pub fn new() -> Result<Self, TweakAgentError> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, THEME_PROMPT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// `variation` is 1-based.
    pub fn build(&self, goal: &str, variation: u32) -> Result<String, TweakAgentError> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let prompt = template.render(context! {
            system => SYSTEM_INSTRUCTION,
            goal => goal,
            variation => variation,
        })?;
        Ok(prompt)
    }
}
