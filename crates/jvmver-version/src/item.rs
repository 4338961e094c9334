//! The items a version string is made of, and how two items compare.
//!
//! Every item has a fixed `order` rank and a sign relative to the neutral
//! element (`Number(0)`). Items of the same kind compare by value; items of
//! different kinds compare by that sign first and by rank second, giving
//! `Min < Tag < Number/BigNumber < BuildMetadata < Max` among items on the
//! same side of neutral.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

/// Level assigned to qualifiers that are not in the well-known table.
const OTHER_LEVEL: i32 = -5;

/// One lexical unit of a version string.
#[derive(Debug, Clone)]
pub enum Item {
    /// A run of fewer than ten digits.
    Number(u32),
    /// A run of ten or more digits.
    BigNumber(BigUint),
    /// A qualifier such as `rc`, `alpha`, `jre`, lowercased.
    Tag(Tag),
    /// Everything after a top-level `+`. Never affects precedence.
    BuildMetadata(String),
    /// Sorts below any real segment (`min`).
    Min,
    /// Sorts above any real segment (`max`, `.x`, `.*`, `.+`).
    Max,
}

impl Item {
    /// The neutral element; comparing a version against nothing is the same
    /// as comparing it against this.
    pub const EMPTY: Item = Item::Number(0);

    /// Fixed rank used to break ties between items of different kinds.
    pub fn order(&self) -> i32 {
        match self {
            Item::Number(_) | Item::BigNumber(_) => 0,
            Item::Tag(_) => -1,
            Item::BuildMetadata(_) => 1,
            Item::Min => -8,
            Item::Max => 8,
        }
    }

    /// Sign of this item relative to the neutral element.
    pub fn compare_to_empty(&self) -> Ordering {
        match self {
            Item::Number(n) => n.cmp(&0),
            Item::BigNumber(n) => {
                if n.is_zero() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            Item::Tag(tag) => tag.level().cmp(&0),
            Item::BuildMetadata(_) => Ordering::Equal,
            Item::Min => Ordering::Less,
            Item::Max => Ordering::Greater,
        }
    }

    /// Whether this item is equivalent to the neutral element.
    pub fn is_empty(&self) -> bool {
        self.compare_to_empty() == Ordering::Equal
    }

    /// `Number` or `BigNumber`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Item::Number(_) | Item::BigNumber(_))
    }

    /// `Min` or `Max`, the bounds that sort outside every real segment.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Item::Min | Item::Max)
    }

    /// Short lowercase name of the variant (`"number"`, `"tag"`,
    /// `"build-metadata"`, ...), used in textual and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Number(_) => "number",
            Item::BigNumber(_) => "bignumber",
            Item::Tag(_) => "tag",
            Item::BuildMetadata(_) => "build-metadata",
            Item::Min => "min",
            Item::Max => "max",
        }
    }

    /// Shorthand for `Item::Tag(Tag::new(value))`.
    pub fn tag(value: impl Into<String>) -> Self {
        Item::Tag(Tag::new(value))
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Item::Number(a), Item::Number(b)) => a.cmp(b),
            (Item::BigNumber(a), Item::BigNumber(b)) => a.cmp(b),
            (Item::Number(a), Item::BigNumber(b)) => BigUint::from(*a).cmp(b),
            (Item::BigNumber(a), Item::Number(b)) => a.cmp(&BigUint::from(*b)),
            (Item::Tag(a), Item::Tag(b)) => a.cmp(b),
            (Item::BuildMetadata(_), Item::BuildMetadata(_)) => Ordering::Equal,
            _ => self
                .compare_to_empty()
                .cmp(&other.compare_to_empty())
                .then_with(|| self.order().cmp(&other.order())),
        }
    }
}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Item {}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Number(n) => write!(f, "{n}"),
            Item::BigNumber(n) => write!(f, "{n}"),
            Item::Tag(tag) => f.write_str(tag.value()),
            Item::BuildMetadata(meta) => write!(f, "+{meta}"),
            Item::Min => f.write_str("min"),
            Item::Max => f.write_str("max"),
        }
    }
}

/// A qualifier with its precedence level.
///
/// Well-known qualifiers share a level with their aliases (`cr` is `rc`,
/// `ga` is `final`). Anything else lands in a common bucket below `alpha` and
/// is ordered alphabetically within it. Single-letter `a`/`b`/`m` are only
/// recognized once expanded (see [`crate::process`]); on their own they are
/// ordinary words.
#[derive(Debug, Clone)]
pub struct Tag {
    value: String,
    level: i32,
}

impl Tag {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into().to_lowercase();
        let level = qualifier_level(&value);
        Self { value, level }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    /// Qualifiers that sort below the plain release.
    pub fn is_pre_release(&self) -> bool {
        self.level < 0
    }

    fn is_other(&self) -> bool {
        self.level == OTHER_LEVEL
    }
}

fn qualifier_level(value: &str) -> i32 {
    match value {
        "ga" | "final" | "" => 0,
        "snapshot" => -1,
        "rc" | "cr" => -2,
        "beta" => -3,
        "alpha" => -4,
        "dev" => -6,
        "sp" | "bin" => 1,
        _ => OTHER_LEVEL,
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.level.cmp(&other.level) {
            Ordering::Equal if self.is_other() => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Tag {}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(digits: &str) -> Item {
        Item::BigNumber(digits.parse().unwrap())
    }

    #[test]
    fn qualifier_levels() {
        assert_eq!(Tag::new("GA").level(), 0);
        assert_eq!(Tag::new("final").level(), 0);
        assert_eq!(Tag::new("SNAPSHOT").level(), -1);
        assert_eq!(Tag::new("cr").level(), Tag::new("rc").level());
        assert_eq!(Tag::new("beta").level(), -3);
        assert_eq!(Tag::new("alpha").level(), -4);
        assert_eq!(Tag::new("a").level(), OTHER_LEVEL);
        assert_eq!(Tag::new("b").level(), OTHER_LEVEL);
        assert_eq!(Tag::new("jre").level(), OTHER_LEVEL);
        assert_eq!(Tag::new("dev").level(), -6);
        assert_eq!(Tag::new("bin").level(), 1);
    }

    #[test]
    fn tag_is_lowercased() {
        assert_eq!(Tag::new("RC").value(), "rc");
    }

    #[test]
    fn unrecognized_tags_order_alphabetically() {
        assert!(Item::tag("android") < Item::tag("jre"));
        assert_eq!(Item::tag("jre"), Item::tag("JRE"));
    }

    #[test]
    fn recognized_aliases_are_equal() {
        assert_eq!(Item::tag("cr"), Item::tag("rc"));
        assert_eq!(Item::tag("ga"), Item::tag("final"));
    }

    #[test]
    fn unrecognized_tag_sorts_between_alpha_and_dev() {
        assert!(Item::tag("dev") < Item::tag("jre"));
        assert!(Item::tag("jre") < Item::tag("alpha"));
    }

    #[test]
    fn mixed_numeric_widths() {
        assert!(Item::Number(999_999_999) < big("1000000000"));
        assert!(big("99999999999") > Item::Number(1));
        assert_eq!(big("0000000007"), Item::Number(7));
    }

    #[test]
    fn build_metadata_ignores_payload() {
        assert_eq!(
            Item::BuildMetadata("a".into()),
            Item::BuildMetadata("z".into())
        );
    }

    #[test]
    fn cross_kind_ranking() {
        // same sign: order decides
        assert!(Item::Number(1) > Item::tag("sp"));
        assert!(Item::BuildMetadata(String::new()) > Item::Number(0));
        // different sign: sign decides
        assert!(Item::Number(0) > Item::tag("rc"));
        assert!(Item::Number(0) < Item::tag("sp"));
        assert!(Item::Min < Item::tag("dev"));
        assert!(Item::Max > big("12345678901234"));
        assert_eq!(Item::Min, Item::Min);
        assert_eq!(Item::Max, Item::Max);
    }

    #[test]
    fn compare_to_empty_signs() {
        assert!(Item::EMPTY.is_empty());
        assert!(big("0000000000").is_empty());
        assert!(Item::tag("final").is_empty());
        assert!(Item::BuildMetadata("x".into()).is_empty());
        assert_eq!(Item::Min.compare_to_empty(), Ordering::Less);
        assert_eq!(Item::Max.compare_to_empty(), Ordering::Greater);
        assert_eq!(Item::tag("rc").compare_to_empty(), Ordering::Less);
    }

    #[test]
    fn display() {
        assert_eq!(Item::Number(12).to_string(), "12");
        assert_eq!(Item::tag("Beta").to_string(), "beta");
        assert_eq!(Item::Max.to_string(), "max");
        assert_eq!(Item::BuildMetadata("sha.1".into()).to_string(), "+sha.1");
        assert_eq!(Item::BuildMetadata(String::new()).to_string(), "+");
        assert_eq!(Item::BuildMetadata("sha.1".into()).kind(), "build-metadata");
    }
}
