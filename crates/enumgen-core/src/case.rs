/// Convert an underscore-separated identifier to camelCase.
///
/// Underscores are dropped and capitalize the next retained character.
/// Every other character is lowercased, so `LESS_OR_EQUAL` becomes
/// `lessOrEqual`. A leading underscore capitalizes the first letter
/// (`_FOO` -> `Foo`), and runs of underscores act like a single one.
pub fn snake_to_camel(snake: &str) -> String {
    let mut camel = String::with_capacity(snake.len());
    let mut capitalize_next = false;

    for ch in snake.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            camel.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            camel.extend(ch.to_lowercase());
        }
    }

    camel
}
