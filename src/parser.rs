use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

use crate::ast::{Assignment, FlagToken};

#[derive(Parser)]
#[grammar = "src/flag.pest"]
pub struct FlagParser;

impl FlagParser {
    /// Parse a single command-line token as a flag.
    ///
    /// Returns `None` for tokens without a leading dash, which are plain
    /// positional arguments.
    pub fn parse_token(token: &str) -> Option<FlagToken<'_>> {
        let flag = FlagParser::parse(Rule::flag, token).ok()?.next()?;
        let name = flag.into_inner().find(|p| p.as_rule() == Rule::name)?;
        let text = name.as_str();

        let assignment = name
            .into_inner()
            .find(|p| p.as_rule() == Rule::assignment)
            .and_then(Self::parse_assignment);

        Some(FlagToken {
            name: text,
            assignment,
        })
    }

    fn parse_assignment(pair: Pair<'_, Rule>) -> Option<Assignment<'_>> {
        let mut inner = pair.into_inner();

        let key = inner.next()?.as_str();
        let value = inner.next().map(|p| p.as_str()).unwrap_or_default();

        Some(Assignment { key, value })
    }
}
