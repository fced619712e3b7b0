//! Message templates, one per failure kind.

use crate::typography::MixinMatch;

/// A unique variable can replace the value.
pub fn expected_var(variable: &str, value: &str) -> String {
    format!("Use variable '{variable}' instead of plain value '{value}'")
}

/// Several variables could replace the value; a human picks.
pub fn expected_one_of_vars(variables: &[String], value: &str) -> String {
    let mut message = format!("Use variables instead of plain value '{value}':\n");
    for variable in variables {
        message.push_str(" - ");
        message.push_str(variable);
        message.push('\n');
    }
    message
}

/// A unique mixin can replace the typography declarations.
pub fn expected_mixin(mixin: &str) -> String {
    format!("Use mixin '{mixin}' instead of plain values")
}

/// Several mixins could replace the typography declarations.
pub fn expected_one_of_mixins(mixins: &[MixinMatch]) -> String {
    let mut message = String::from("Use mixins instead of plain values:\n");
    for mixin in mixins {
        let props: Vec<&str> = mixin.props.values().map(String::as_str).collect();
        message.push_str(&format!(" - {} ({})\n", mixin.name, props.join("|")));
    }
    message
}

/// A dark-palette color is referenced directly.
pub fn no_dark_colors(variable: &str) -> String {
    format!("Use the light palette instead of dark color '{variable}'")
}
