use crate::error::ConditionError;
use model::core::value::Value;
use std::collections::HashMap;

/// Query expression matching every document in a collection.
pub const MATCH_ALL: &str = "*:*";

/// A query template produced by the host's condition compiler, with
/// `{{name}}` placeholders standing in for stream variables. The template is
/// immutable; each execution binds the current event's values into a fresh
/// query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledCondition {
    template: String,
}

impl CompiledCondition {
    pub fn new(template: &str) -> Self {
        let trimmed = template.trim();
        CompiledCondition {
            template: if trimmed.is_empty() {
                MATCH_ALL.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    pub fn match_all() -> Self {
        CompiledCondition::new(MATCH_ALL)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the final query string, substituting every placeholder with its
    /// bound value.
    pub fn bind(&self, parameters: &HashMap<String, Value>) -> Result<String, ConditionError> {
        let mut query = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find("{{") {
            query.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or_else(|| ConditionError::UnterminatedPlaceholder(self.template.clone()))?;
            let name = after[..close].trim();
            let value = parameters
                .get(name)
                .ok_or_else(|| ConditionError::UnboundPlaceholder(name.to_string()))?;
            query.push_str(&render_literal(value));
            rest = &after[close + 2..];
        }
        query.push_str(rest);
        Ok(query)
    }
}

fn render_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", escape_query_value(s)),
        Value::Null => "\"\"".to_string(),
        other => other.to_string(),
    }
}

/// Escape the Lucene query metacharacters inside a string literal.
pub fn escape_query_value(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(
            ch,
            '+' | '-'
                | '&'
                | '|'
                | '!'
                | '('
                | ')'
                | '{'
                | '}'
                | '['
                | ']'
                | '^'
                | '"'
                | '~'
                | '*'
                | '?'
                | ':'
                | '/'
                | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, Value)]) -> HashMap<String, Value> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn empty_condition_matches_all() {
        assert_eq!(CompiledCondition::new("").template(), MATCH_ALL);
        assert_eq!(CompiledCondition::new("   ").template(), MATCH_ALL);
        assert_eq!(
            CompiledCondition::match_all().bind(&HashMap::new()).unwrap(),
            MATCH_ALL
        );
    }

    #[test]
    fn binds_placeholders_in_order() {
        let condition = CompiledCondition::new("age:{{age}} AND name:{{name}}");
        let query = condition
            .bind(&params(&[
                ("age", Value::Int(23)),
                ("name", Value::String("first1".to_string())),
            ]))
            .unwrap();
        assert_eq!(query, "age:23 AND name:\"first1\"");
    }

    #[test]
    fn escapes_query_metacharacters_in_strings() {
        let condition = CompiledCondition::new("date:{{date}}");
        let query = condition
            .bind(&params(&[(
                "date",
                Value::String("1970-03-01 23:34:34".to_string()),
            )]))
            .unwrap();
        assert_eq!(query, "date:\"1970\\-03\\-01 23\\:34\\:34\"");
    }

    #[test]
    fn unbound_placeholder_is_an_error() {
        let condition = CompiledCondition::new("age:{{age}}");
        assert_eq!(
            condition.bind(&HashMap::new()),
            Err(ConditionError::UnboundPlaceholder("age".to_string()))
        );
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let condition = CompiledCondition::new("age:{{age");
        assert!(matches!(
            condition.bind(&HashMap::new()),
            Err(ConditionError::UnterminatedPlaceholder(_))
        ));
    }

    #[test]
    fn null_binds_as_empty_phrase() {
        let condition = CompiledCondition::new("name:{{name}}");
        let query = condition.bind(&params(&[("name", Value::Null)])).unwrap();
        assert_eq!(query, "name:\"\"");
    }
}
