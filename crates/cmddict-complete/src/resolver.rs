//! Candidate lookup and best-match selection

use cmddict_core::{CommandDescriptor, CommandDictionary};
use serde::{Deserialize, Serialize};

/// Commands whose aliases are prefixed by a token
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// The scanned token
    pub token: String,
    /// Command indices in dictionary order
    pub candidates: Vec<usize>,
}

impl MatchResult {
    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// The alias chosen as closest to the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMatch {
    /// Command index in the dictionary
    pub command: usize,
    /// Index of the chosen alias within the command's aliases
    pub alias: usize,
    /// The alias is exactly the token
    pub perfect: bool,
}

/// A [`MatchResult`] with the best candidate moved to the front
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankedMatches {
    /// The scanned token
    pub token: String,
    /// Command indices, best first
    pub candidates: Vec<usize>,
    /// Selected candidate, `None` when nothing matched
    pub best: Option<BestMatch>,
}

impl RankedMatches {
    /// Whether the best candidate spells the token exactly
    pub fn is_perfect_match(&self) -> bool {
        self.best.is_some_and(|best| best.perfect)
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Case-sensitive prefix test; the empty token matches nothing
pub fn alias_matches(alias: &str, token: &str) -> bool {
    !token.is_empty() && alias.starts_with(token)
}

fn command_matches(cmd: &CommandDescriptor, token: &str) -> bool {
    cmd.aliases.iter().any(|alias| alias_matches(alias, token))
}

/// Every command with at least one alias prefixed by `token`, in dictionary order
pub fn find_matches(dict: &CommandDictionary, token: &str) -> MatchResult {
    let candidates = if token.is_empty() {
        Vec::new()
    } else {
        dict.commands()
            .iter()
            .enumerate()
            .filter(|(_, cmd)| command_matches(cmd, token))
            .map(|(index, _)| index)
            .collect()
    };

    MatchResult {
        token: token.to_string(),
        candidates,
    }
}

/// Pick the candidate closest to the token and swap it to the front
///
/// An alias spelling the token exactly wins at once. Otherwise the shortest
/// matching alias wins, the earliest one on equal length. Only the front slot
/// and the winner's slot change places.
pub fn select_best_match(dict: &CommandDictionary, result: MatchResult) -> RankedMatches {
    let MatchResult {
        token,
        mut candidates,
    } = result;
    let token_len = token.chars().count();

    // (slot in candidates, best match, alias length)
    let mut best: Option<(usize, BestMatch, usize)> = None;
    'search: for (slot, &command) in candidates.iter().enumerate() {
        let Some(cmd) = dict.command(command) else {
            continue;
        };
        for (alias_index, alias) in cmd.aliases.iter().enumerate() {
            if !alias_matches(alias, &token) {
                continue;
            }
            let len = alias.chars().count();
            if len == token_len {
                let found = BestMatch {
                    command,
                    alias: alias_index,
                    perfect: true,
                };
                best = Some((slot, found, len));
                break 'search;
            }
            if best.map_or(true, |(_, _, best_len)| len < best_len) {
                let found = BestMatch {
                    command,
                    alias: alias_index,
                    perfect: false,
                };
                best = Some((slot, found, len));
            }
        }
    }

    if let Some((slot, _, _)) = best {
        candidates.swap(0, slot);
    }

    RankedMatches {
        token,
        candidates,
        best: best.map(|(_, found, _)| found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmddict_core::argument;

    fn dict() -> CommandDictionary {
        CommandDictionary::builder("test")
            .register_command(["tx", "translatex"], "", vec![argument("float", "n", None)])
            .register_command(["ty", "translatey"], "", vec![argument("float", "n", None)])
            .register_command(["t", "translate"], "", vec![argument("vec3", "v", None)])
            .register_command(["csgu", "csgunion"], "", Vec::new())
            .register_command(["csgs", "csgsubstract"], "", Vec::new())
            .register_command(["csgsl", "csgsubstractloss"], "", Vec::new())
            .build()
    }

    #[test]
    fn empty_token_matches_nothing() {
        let result = find_matches(&dict(), "");
        assert!(result.is_empty());
        assert_eq!(result.token, "");
        assert!(select_best_match(&dict(), result).best.is_none());
    }

    #[test]
    fn prefix_matches_keep_dictionary_order() {
        assert_eq!(find_matches(&dict(), "t").candidates, vec![0, 1, 2]);
        assert_eq!(find_matches(&dict(), "translatey").candidates, vec![1]);
        assert_eq!(find_matches(&dict(), "csgs").candidates, vec![4, 5]);
        assert!(find_matches(&dict(), "T").is_empty());
        assert!(find_matches(&dict(), "zz").is_empty());
    }

    #[test]
    fn perfect_match_is_swapped_to_front() {
        let dict = dict();
        let ranked = select_best_match(&dict, find_matches(&dict, "t"));
        assert!(ranked.is_perfect_match());
        assert_eq!(ranked.best, Some(BestMatch { command: 2, alias: 0, perfect: true }));
        // Single swap: the former front candidate takes the winner's slot
        assert_eq!(ranked.candidates, vec![2, 1, 0]);
    }

    #[test]
    fn shortest_longer_alias_wins_without_perfect_match() {
        let dict = dict();
        let ranked = select_best_match(&dict, find_matches(&dict, "csg"));
        assert!(!ranked.is_perfect_match());
        assert_eq!(ranked.best.map(|b| (b.command, b.alias)), Some((3, 0)));
        assert_eq!(ranked.candidates, vec![3, 4, 5]);
    }

    #[test]
    fn ties_go_to_the_earliest_candidate() {
        let dict = dict();
        let ranked = select_best_match(&dict, find_matches(&dict, "translate"));
        // "translate" itself is exact
        assert_eq!(ranked.best.map(|b| b.command), Some(2));

        let ranked = select_best_match(&dict, find_matches(&dict, "transl"));
        assert!(!ranked.is_perfect_match());
        // translatex, translatey and translate share the prefix; translate is shortest
        assert_eq!(ranked.best.map(|b| (b.command, b.alias)), Some((2, 1)));

        let ranked = select_best_match(&dict, find_matches(&dict, "csgsu"));
        // csgsubstract (12) beats csgsubstractloss (16)
        assert_eq!(ranked.best.map(|b| b.command), Some(4));
    }

    #[test]
    fn non_matching_short_alias_is_not_considered() {
        let dict = dict();
        // "tx" has the token length but is not prefixed by "tr"
        let ranked = select_best_match(&dict, find_matches(&dict, "tr"));
        assert!(!ranked.is_perfect_match());
        assert_eq!(ranked.best.map(|b| (b.command, b.alias)), Some((2, 1)));
    }

    #[test]
    fn stale_indices_are_skipped() {
        let dict = dict();
        let result = MatchResult {
            token: "tx".into(),
            candidates: vec![42, 0],
        };
        let ranked = select_best_match(&dict, result);
        assert_eq!(ranked.candidates, vec![0, 42]);
        assert!(ranked.is_perfect_match());
    }
}
