//! Rewrites a raw token stream into the canonical item sequence.
//!
//! Two rules apply while walking the stream left to right:
//! - `a`, `b` and `m` directly followed by a non-zero number expand to
//!   `alpha`, `beta` and `milestone` (`1.0a1` is `1.0-alpha-1`);
//! - after a numeric item, a run of `.0` segments is dropped unless it is
//!   followed by more numbers, a `min`/`max` sentinel or build metadata
//!   (`1.0.0` is `1`, `1.0.1` keeps its zero).

use std::collections::VecDeque;

use crate::item::Item;
use crate::tokenizer::{Separator, Tokens};

/// Produce the canonical item sequence. Never returns an empty vector.
pub fn post_process(tokens: Tokens) -> Vec<Item> {
    let Tokens { first, rest } = tokens;
    let mut rest: VecDeque<(Separator, Item)> = rest.into();
    let mut items = Vec::with_capacity(rest.len() + 1);
    let mut current = first;

    loop {
        if current.is_numeric() {
            let zeros = trailing_zero_run(&rest);
            if zeros > 0 && zero_run_is_redundant(rest.get(zeros)) {
                rest.drain(..zeros);
            }
        }

        items.push(expand_abbreviation(current, rest.front()));

        match rest.pop_front() {
            Some((_, item)) => current = item,
            None => break,
        }
    }

    items
}

/// Length of the leading run of `.0` tokens.
fn trailing_zero_run(rest: &VecDeque<(Separator, Item)>) -> usize {
    rest.iter()
        .take_while(|(sep, item)| *sep == Separator::Dot && item.is_numeric() && item.is_empty())
        .count()
}

fn zero_run_is_redundant(next: Option<&(Separator, Item)>) -> bool {
    match next {
        None => true,
        Some((sep, item)) => {
            *sep != Separator::Plus && !item.is_sentinel() && !item.is_numeric()
        }
    }
}

fn expand_abbreviation(item: Item, next: Option<&(Separator, Item)>) -> Item {
    let followed_by_number = matches!(
        next,
        Some((Separator::None, n)) if n.is_numeric() && !n.is_empty()
    );
    if !followed_by_number {
        return item;
    }
    let expanded = match &item {
        Item::Tag(tag) => match tag.value() {
            "a" => Some("alpha"),
            "b" => Some("beta"),
            "m" => Some("milestone"),
            _ => None,
        },
        _ => None,
    };
    expanded.map_or(item, Item::tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn items(input: &str) -> Vec<String> {
        post_process(tokenize(input))
            .iter()
            .map(|item| format!("{}:{item}", item.kind()))
            .collect()
    }

    #[test]
    fn trailing_zeros_are_dropped() {
        assert_eq!(items("1.0"), vec!["number:1"]);
        assert_eq!(items("1.0.0"), vec!["number:1"]);
        assert_eq!(items("1.2.0.0"), vec!["number:1", "number:2"]);
    }

    #[test]
    fn zeros_before_more_precision_are_kept() {
        assert_eq!(items("1.0.1"), vec!["number:1", "number:0", "number:1"]);
        assert_eq!(
            items("1.0.0.12345678901"),
            vec!["number:1", "number:0", "number:0", "bignumber:12345678901"]
        );
    }

    #[test]
    fn zeros_before_qualifier_are_dropped() {
        assert_eq!(items("1.0-rc"), vec!["number:1", "tag:rc"]);
        assert_eq!(items("2.0.0.Final"), vec!["number:2", "tag:final"]);
    }

    #[test]
    fn zeros_before_sentinel_or_metadata_are_kept() {
        assert_eq!(items("1.0.max"), vec!["number:1", "number:0", "max:max"]);
        assert_eq!(items("1.0.x"), vec!["number:1", "number:0", "max:max"]);
        assert_eq!(
            items("1.0.0+abc"),
            vec!["number:1", "number:0", "number:0", "build-metadata:+abc"]
        );
    }

    #[test]
    fn zeros_after_hyphen_are_not_elided() {
        assert_eq!(items("1-0"), vec!["number:1", "number:0"]);
    }

    #[test]
    fn abbreviations_expand_before_numbers() {
        assert_eq!(items("1.0a1"), vec!["number:1", "tag:alpha", "number:1"]);
        assert_eq!(items("1.0b2"), vec!["number:1", "tag:beta", "number:2"]);
        assert_eq!(items("1.0m3"), vec!["number:1", "tag:milestone", "number:3"]);
    }

    #[test]
    fn abbreviations_stay_without_number() {
        assert_eq!(items("1.0a"), vec!["number:1", "tag:a"]);
        assert_eq!(items("1.0-a-1"), vec!["number:1", "tag:a", "number:1"]);
        assert_eq!(items("1.0a0"), vec!["number:1", "tag:a", "number:0"]);
    }

    #[test]
    fn never_empty() {
        assert_eq!(items(""), vec!["number:0"]);
        assert_eq!(items("."), vec!["number:0"]);
        assert_eq!(items("0.0.0"), vec!["number:0"]);
    }
}
