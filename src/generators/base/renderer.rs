use super::fields::FieldRegistry;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitute every `{{KEY}}` known to the registry in a single pass.
///
/// Substituted values are never rescanned, so a value containing a
/// placeholder token is emitted as-is. Unknown placeholders are left
/// untouched and there is no escape syntax for literal braces.
pub fn render(template: &str, fields: &FieldRegistry) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let resolved = after_open.find(CLOSE).and_then(|end| {
            fields
                .lookup(&after_open[..end])
                .map(|value| (value, end + CLOSE.len()))
        });

        match resolved {
            Some((value, consumed)) => {
                output.push_str(value);
                rest = &after_open[consumed..];
            }
            None => {
                // Advance by one brace so overlapping openers like "{{{{KEY}}" still resolve
                output.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Placeholder names left in rendered text, in order of appearance
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        match after_open.find(CLOSE) {
            Some(end) => {
                names.push(after_open[..end].to_string());
                rest = &after_open[end + CLOSE.len()..];
            }
            None => break,
        }
    }

    names
}
