use crate::error::GenError;
use crate::mapping::EnumMapping;

/// Format a mapping as a brace-initializer list, one line per element.
///
/// ```text
/// {
/// 	{"never", VK_COMPARE_OP_NEVER},
/// 	{"less", VK_COMPARE_OP_LESS}
/// }
/// ```
///
/// The last pair has no trailing comma. An empty mapping is rejected with
/// [`GenError::EmptyInput`] rather than emitting a table the lookup code
/// cannot use.
pub fn format_output(mapping: &EnumMapping) -> Result<Vec<String>, GenError> {
    if mapping.is_empty() {
        return Err(GenError::EmptyInput);
    }

    let last = mapping.len() - 1;
    let mut lines = Vec::with_capacity(mapping.len() + 2);
    lines.push("{".to_string());
    for (index, (display, original)) in mapping.iter().enumerate() {
        let separator = if index == last { "" } else { "," };
        lines.push(format!("\t{{\"{display}\", {original}}}{separator}"));
    }
    lines.push("}".to_string());

    Ok(lines)
}

/// Join formatted lines into file contents, newline-terminating each one.
pub fn render(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|line| line.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
