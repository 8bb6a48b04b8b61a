//! Prompt text rendering.
//!
//! Decorations are applied in a fixed order: question mark, default
//! annotation, trailing space. Callers and tests rely on the exact output,
//! e.g. `Name? [bob] ` with every decoration enabled.

use lineprompt_core::FormattingPolicy;

/// Placeholder standing in for the question text in a template.
pub const PLACEHOLDER: &str = "%s";

/// Decorate `text` according to `policy`.
///
/// `force_question_mark` adds the `?` even when the policy disables it but
/// cannot remove one the policy asks for. `default` is only shown when the
/// policy enables inline defaults.
pub fn render_prompt(
    text: &str,
    policy: &FormattingPolicy,
    force_question_mark: bool,
    default: Option<&str>,
) -> String {
    let mut prompt = String::from(text);

    if policy.append_question_mark || force_question_mark {
        prompt.push('?');
    }

    if policy.show_default_in_prompt {
        if let Some(default) = default {
            prompt.push_str(" [");
            prompt.push_str(default);
            prompt.push(']');
        }
    }

    if policy.append_space {
        prompt.push(' ');
    }

    prompt
}

/// Render the prompt template with [`PLACEHOLDER`] in place of the question.
///
/// # Example
/// ```
/// use lineprompt_core::FormattingPolicy;
/// use lineprompt_prompt::format::render_template;
///
/// let template = render_template(&FormattingPolicy::standard(), false, Some("this is my default"));
/// assert_eq!(template, "%s? [this is my default] ");
/// ```
pub fn render_template(
    policy: &FormattingPolicy,
    force_question_mark: bool,
    default: Option<&str>,
) -> String {
    render_prompt(PLACEHOLDER, policy, force_question_mark, default)
}

/// Render one entry of a selection list, `position` being 1-based.
pub fn render_choice(position: usize, choice: &str) -> String {
    format!("  {} - {}\n", position, choice)
}
