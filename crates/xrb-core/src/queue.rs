//! Queue building: scan a token sequence for keyword hits and produce the
//! ordered, deduplicated list of command jobs for one message.

use crate::commands::{Arity, Keyword, MARKER};
use crate::validate;

/// One validated command invocation awaiting dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandJob {
    pub keyword: Keyword,
    /// Primary argument, the query target. Absent for no-argument keywords.
    pub target: Option<String>,
    /// Optional sub-field selector, e.g. a version field or a contact
    /// address category.
    pub opt_arg: Option<String>,
}

/// Scan `tokens` and build the job queue.
///
/// Identical invocations (same keyword, target and sub-field) collapse to
/// their first occurrence; the relative order of distinct jobs is preserved.
/// Invalid invocations are dropped silently.
pub fn build(tokens: &[&str]) -> Vec<CommandJob> {
    let mut queue: Vec<CommandJob> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        let Some(keyword) = Keyword::parse(token) else {
            continue;
        };

        let job = if keyword.arity() == Arity::None {
            CommandJob {
                keyword,
                target: None,
                opt_arg: None,
            }
        } else {
            if !validate::is_valid(tokens, index) {
                continue;
            }
            // A following command must not be swallowed as a sub-field
            // argument.
            let opt_arg = tokens
                .get(index + 2)
                .filter(|t| !t.starts_with(MARKER))
                .map(|t| t.to_string());
            CommandJob {
                keyword,
                target: tokens.get(index + 1).map(|t| t.to_string()),
                opt_arg,
            }
        };

        if !queue.contains(&job) {
            queue.push(job);
        }
    }

    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn jobs(body: &str) -> Vec<CommandJob> {
        build(&tokenize(body))
    }

    #[test]
    fn single_no_arg_command() {
        let queue = jobs("!help");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].keyword, Keyword::Help);
        assert_eq!(queue[0].target, None);
        assert_eq!(queue[0].opt_arg, None);
    }

    #[test]
    fn command_with_target_and_sub_field() {
        let queue = jobs("!version example.com os");
        assert_eq!(
            queue,
            vec![CommandJob {
                keyword: Keyword::Version,
                target: Some("example.com".to_string()),
                opt_arg: Some("os".to_string()),
            }]
        );
    }

    #[test]
    fn invalid_target_drops_the_job() {
        assert!(jobs("!version not_a_domain").is_empty());
        assert!(jobs("!uptime").is_empty());
    }

    #[test]
    fn exact_duplicates_collapse_to_first_occurrence() {
        let queue = jobs("!uptime a.com !uptime a.com");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].keyword, Keyword::Uptime);
        assert_eq!(queue[0].target.as_deref(), Some("a.com"));
    }

    #[test]
    fn same_command_different_targets_both_survive() {
        let queue = jobs("!uptime a.com !uptime b.com");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].target.as_deref(), Some("a.com"));
        assert_eq!(queue[1].target.as_deref(), Some("b.com"));
    }

    #[test]
    fn a_following_command_is_not_swallowed_as_sub_field() {
        let queue = jobs("!version a.com !uptime b.com");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].keyword, Keyword::Version);
        assert_eq!(queue[0].opt_arg, None);
        assert_eq!(queue[1].keyword, Keyword::Uptime);
    }

    #[test]
    fn order_of_first_occurrence_is_preserved() {
        let queue = jobs("!xep 45 !help !xep 45 !version a.com");
        let keywords: Vec<_> = queue.iter().map(|j| j.keyword).collect();
        assert_eq!(keywords, vec![Keyword::Xep, Keyword::Help, Keyword::Version]);
    }

    #[test]
    fn building_twice_is_idempotent() {
        let tokens = tokenize("!help !version a.com os !xep 45 name !help");
        assert_eq!(build(&tokens), build(&tokens));
    }

    #[test]
    fn surrounding_chatter_is_ignored() {
        let queue = jobs("hey bot, please run !uptime example.com for me");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].target.as_deref(), Some("example.com"));
        assert_eq!(queue[0].opt_arg.as_deref(), Some("for"));
    }
}
