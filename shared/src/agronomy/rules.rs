//! Ordered, table-driven classification
//!
//! Range-to-label chains are written as a list of rules evaluated top to
//! bottom; the first rule whose predicate holds decides the outcome.

/// A single predicate/outcome pair
pub struct Rule<I: ?Sized + 'static, O: 'static> {
    pub name: &'static str,
    pub matches: fn(&I) -> bool,
    pub outcome: O,
}

/// An ordered rule list with the outcome used when nothing matches
pub struct RuleTable<I: ?Sized + 'static, O: 'static> {
    rules: &'static [Rule<I, O>],
    fallback: O,
}

impl<I: ?Sized + 'static, O: 'static> RuleTable<I, O> {
    pub const fn new(rules: &'static [Rule<I, O>], fallback: O) -> Self {
        Self { rules, fallback }
    }

    /// First matching rule, if any
    pub fn first_match(&self, input: &I) -> Option<&'static Rule<I, O>> {
        self.rules.iter().find(|rule| (rule.matches)(input))
    }

    pub fn rules(&self) -> &'static [Rule<I, O>] {
        self.rules
    }
}

impl<I: ?Sized + 'static, O: Copy + 'static> RuleTable<I, O> {
    pub fn evaluate(&self, input: &I) -> O {
        self.first_match(input)
            .map(|rule| rule.outcome)
            .unwrap_or(self.fallback)
    }
}
