//! Regex rules that mark up lines
//!
//! A rule is written `COLOR=REGEX`. A `*` after the color marks every
//! match instead of just the first one, e.g. `red*=error|fail`.

use regex::Regex;
use tracing::debug;

use super::color::Color;
use super::markup::Markup;
use super::reflow::reflow;
use super::run::Run;
use crate::error::Result;

/// A compiled rule producing markups for each line
#[derive(Debug, Clone)]
pub struct Marker {
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Mark every match rather than only the first
    pub all: bool,
    /// Color given to matches
    pub color: Color,
    /// Declaration index among all rules
    pub priority: i32,
}

impl Marker {
    pub fn new(pattern: Regex, all: bool, color: Color, priority: i32) -> Self {
        Self { pattern, all, color, priority }
    }

    /// Build a marker from a `COLOR=REGEX` argument.
    ///
    /// Returns `Ok(None)` for arguments that are not rules: no `=`, or an
    /// empty color or pattern.
    pub fn from_rule(arg: &str, priority: i32) -> Result<Option<Self>> {
        let Some((color, pattern)) = arg.trim_start().split_once('=') else {
            return Ok(None);
        };
        if color.is_empty() || pattern.is_empty() {
            return Ok(None);
        }

        let (color, all) = match color.strip_suffix('*') {
            Some(color) => (color, true),
            None => (color, false),
        };

        let color = Color::parse(color)?;
        let pattern = Regex::new(pattern)?;
        Ok(Some(Self::new(pattern, all, color, priority)))
    }

    /// Produce markups for the matches in a line
    pub fn mark<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Markup> + 'a {
        let limit = if self.all { usize::MAX } else { 1 };
        self.pattern
            .find_iter(line)
            .take(limit)
            .map(move |m| Markup::new(Run::between(m.start(), m.end()), self.color, self.priority))
    }
}

/// All rules of a run plus the ambient color used for unmarked text
#[derive(Debug, Clone)]
pub struct RuleSet {
    markers: Vec<Marker>,
    ambient: Color,
}

impl RuleSet {
    pub fn new(ambient: Color) -> Self {
        Self {
            markers: Vec::new(),
            ambient,
        }
    }

    /// Build markers from rule arguments in declaration order.
    ///
    /// Priorities follow the position among accepted rules, so later rules
    /// win over earlier ones where they overlap.
    pub fn from_rules<I, S>(rules: I, ambient: Color) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(ambient);
        for rule in rules {
            let rule = rule.as_ref();
            let priority = set.next_priority();
            match Marker::from_rule(rule, priority)? {
                Some(marker) => {
                    debug!(rule, priority, color = %marker.color, all = marker.all, "added rule");
                    set.markers.push(marker);
                }
                None => debug!(rule, "ignoring argument that is not a rule"),
            }
        }
        Ok(set)
    }

    fn next_priority(&self) -> i32 {
        i32::try_from(self.markers.len()).unwrap_or(i32::MAX)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Resolve a line into ordered, non-overlapping colored spans
    pub fn resolve(&self, line: &str) -> Vec<Markup> {
        let baseline = Markup::baseline(line, self.ambient);
        let marked = self.markers.iter().flat_map(|marker| marker.mark(line));
        reflow(std::iter::once(baseline).chain(marked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecolorError;
    use crate::markup::color::ConsoleColor;
    use pretty_assertions::assert_eq;

    fn layout<'a>(line: &'a str, spans: &[Markup]) -> Vec<(&'a str, Color)> {
        spans.iter().map(|m| (&line[m.run.index..m.run.end()], m.color)).collect()
    }

    #[test]
    fn test_from_rule() {
        let marker = Marker::from_rule("red=\\d+", 3).unwrap().unwrap();
        assert!(!marker.all);
        assert_eq!(marker.color, Color::new(Some(ConsoleColor::Red), None));
        assert_eq!(marker.priority, 3);
        assert_eq!(marker.pattern.as_str(), "\\d+");
    }

    #[test]
    fn test_from_rule_match_all_and_pattern_with_equals() {
        let marker = Marker::from_rule("  /blue*=a=b", 0).unwrap().unwrap();
        assert!(marker.all);
        assert_eq!(marker.color, Color::new(None, Some(ConsoleColor::Blue)));
        assert_eq!(marker.pattern.as_str(), "a=b");
    }

    #[test]
    fn test_from_rule_skips_non_rules() {
        assert!(Marker::from_rule("no-equals-sign", 0).unwrap().is_none());
        assert!(Marker::from_rule("=pattern", 0).unwrap().is_none());
        assert!(Marker::from_rule("red=", 0).unwrap().is_none());
    }

    #[test]
    fn test_from_rule_errors() {
        assert!(matches!(Marker::from_rule("purple=x", 0), Err(RecolorError::UnknownColor(_))));
        assert!(matches!(Marker::from_rule("red=(", 0), Err(RecolorError::Pattern(_))));
    }

    #[test]
    fn test_mark_first_only() {
        let marker = Marker::from_rule("red=o", 0).unwrap().unwrap();
        let markups: Vec<_> = marker.mark("foo boo").collect();
        assert_eq!(markups.len(), 1);
        assert_eq!(markups[0].run, Run::new(1, 1));
    }

    #[test]
    fn test_mark_all() {
        let marker = Marker::from_rule("red*=o+", 2).unwrap().unwrap();
        let runs: Vec<_> = marker.mark("foo boo").map(|m| m.run).collect();
        assert_eq!(runs, vec![Run::new(1, 2), Run::new(5, 2)]);
        assert!(marker.mark("foo boo").all(|m| m.priority == 2));
    }

    #[test]
    fn test_mark_no_match() {
        let marker = Marker::from_rule("red*=x", 0).unwrap().unwrap();
        assert_eq!(marker.mark("foo").count(), 0);
    }

    #[test]
    fn test_rule_priorities_follow_declaration_order() {
        let rules = RuleSet::from_rules(["red=a", "ignored", "blue=b"], Color::ambient()).unwrap();
        let priorities: Vec<_> = rules.markers().iter().map(|m| m.priority).collect();
        assert_eq!(priorities, vec![0, 1]);
    }

    #[test]
    fn test_resolve_without_matches() {
        let rules = RuleSet::from_rules(["red=x"], Color::ambient()).unwrap();
        let line = "abcdef";
        assert_eq!(layout(line, &rules.resolve(line)), vec![("abcdef", Color::ambient())]);
    }

    #[test]
    fn test_resolve_overlapping_rules() {
        let red = Color::new(Some(ConsoleColor::Red), None);
        let blue = Color::new(Some(ConsoleColor::Blue), None);
        let line = "abcdef";

        let rules = RuleSet::from_rules(["red=bcd", "blue=def"], Color::ambient()).unwrap();
        assert_eq!(
            layout(line, &rules.resolve(line)),
            vec![("a", Color::ambient()), ("bc", red), ("def", blue)]
        );

        let rules = RuleSet::from_rules(["blue=def", "red=bcd"], Color::ambient()).unwrap();
        assert_eq!(
            layout(line, &rules.resolve(line)),
            vec![("a", Color::ambient()), ("bcd", red), ("ef", blue)]
        );
    }

    #[test]
    fn test_resolve_first_match_only_leaves_rest_plain() {
        let rules = RuleSet::from_rules(["green=ab"], Color::ambient()).unwrap();
        let line = "ab-ab";
        assert_eq!(
            layout(line, &rules.resolve(line)),
            vec![("ab", Color::new(Some(ConsoleColor::Green), None)), ("-ab", Color::ambient())]
        );
    }

    #[test]
    fn test_resolve_empty_line() {
        let rules = RuleSet::from_rules(["red*=x*"], Color::ambient()).unwrap();
        assert!(rules.resolve("").is_empty());
    }
}
