//! Append-only, player-facing message log.

/// Message log read by the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    lines: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines appended at or after `index`.
    pub fn since(&self, index: usize) -> &[String] {
        &self.lines[index.min(self.lines.len())..]
    }

    /// The last `count` lines, oldest first.
    pub fn recent(&self, count: usize) -> &[String] {
        self.since(self.lines.len().saturating_sub(count))
    }
}

/// Expands `{key}` placeholders in `template`.
///
/// `{you}` and `{You}` always resolve to the second person. Unknown keys are
/// kept verbatim.
pub fn format_report(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &tail[..close];
        match key {
            "you" => out.push_str("you"),
            "You" => out.push_str("You"),
            _ => match substitutions.iter().find(|(name, _)| *name == key) {
                Some((_, value)) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            },
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_pronouns_and_named_keys() {
        let line = format_report("{You} pick up the {item}.", &[("item", "spare drive core")]);
        assert_eq!(line, "You pick up the spare drive core.");
    }

    #[test]
    fn unknown_and_unterminated_keys_are_kept() {
        assert_eq!(format_report("{who} waits", &[]), "{who} waits");
        assert_eq!(format_report("broken {brace", &[]), "broken {brace");
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let mut log = MessageLog::new();
        for line in ["a", "b", "c"] {
            log.push(line);
        }
        assert_eq!(log.recent(2), ["b".to_string(), "c".to_string()]);
        assert_eq!(log.since(5), &[] as &[String]);
    }
}
