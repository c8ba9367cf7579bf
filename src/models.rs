//! View Models
//!
//! Plain snapshots of model entities for rendering. Built inside a
//! `RankList` read so views never hold a borrow of the list.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tier_list_core::{contrast_color, Item, MirrorEntry, Tier};

/// Characters that would end or break a CSS `url("...")`
const CSS_URL: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'\'').add(b'(').add(b')').add(b'\\');

/// Colored label of a tier row or shortcut entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierHead {
    pub name: String,
    pub color: String,
}

impl TierHead {
    pub fn of_tier(tier: &Tier) -> Self {
        Self {
            name: tier.name.clone(),
            color: tier.color.clone(),
        }
    }

    pub fn of_entry(entry: &MirrorEntry) -> Self {
        Self {
            name: entry.name.clone(),
            color: entry.color.clone(),
        }
    }

    pub fn style(&self) -> String {
        tier_head_style(&self.color)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCard {
    pub image: String,
    /// May contain markup
    pub text: String,
    pub tooltip: String,
}

impl ItemCard {
    pub fn of_item(item: &Item) -> Self {
        Self {
            image: item.image.clone(),
            text: item.text.clone(),
            tooltip: item.tooltip.clone(),
        }
    }

    pub fn style(&self) -> String {
        item_style(&self.image)
    }
}

/// Background plus readable text color. Unparseable colors are passed
/// through for the browser to resolve and get white text.
pub fn tier_head_style(color: &str) -> String {
    format!(
        "background-color: {}; color: {};",
        color.replace(';', ""),
        contrast_color(color).as_css()
    )
}

pub fn item_style(image: &str) -> String {
    if image.trim().is_empty() {
        return String::new();
    }
    format!("background-image: url(\"{}\");", utf8_percent_encode(image.trim(), CSS_URL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#FF7F7F", "background-color: #FF7F7F; color: black;")]
    #[case("#000", "background-color: #000; color: white;")]
    #[case("rgb(255, 255, 255)", "background-color: rgb(255, 255, 255); color: black;")]
    #[case("tomato", "background-color: tomato; color: white;")]
    #[case("red; display: none", "background-color: red display: none; color: white;")]
    fn test_tier_head_style(#[case] color: &str, #[case] expected: &str) {
        assert_eq!(tier_head_style(color), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("img/a.png", "background-image: url(\"img/a.png\");")]
    #[case("a b\".png", "background-image: url(\"a%20b%22.png\");")]
    #[case("x).png", "background-image: url(\"x%29.png\");")]
    fn test_item_style(#[case] image: &str, #[case] expected: &str) {
        assert_eq!(item_style(image), expected);
    }
}
