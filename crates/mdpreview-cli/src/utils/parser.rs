use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Component '{component}' cannot be empty in '{assignment}'.")]
    EmptyComponent {
        component: &'static str,
        assignment: String,
    },
}

/// Splits a `KEY=VALUE` override into its trimmed parts.
pub fn parse_assignment(assignment: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(assignment.to_string()))?;
    let (key, value) = (key.trim(), value.trim());

    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            assignment: assignment.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            assignment: assignment.to_string(),
        });
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("locator.marker=a=b").unwrap(),
            ("locator.marker", "a=b")
        );
        assert_eq!(
            parse_assignment(" locator.group = g ").unwrap(),
            ("locator.group", "g")
        );
    }

    #[test]
    fn parse_assignment_requires_separator() {
        assert_eq!(
            parse_assignment("locator.marker"),
            Err(ParseError::MissingSeparator("locator.marker".to_string()))
        );
    }

    #[test]
    fn parse_assignment_rejects_empty_parts() {
        assert!(matches!(
            parse_assignment("=value"),
            Err(ParseError::EmptyComponent {
                component: "key",
                ..
            })
        ));
        assert!(matches!(
            parse_assignment("locator.group="),
            Err(ParseError::EmptyComponent {
                component: "value",
                ..
            })
        ));
    }
}
