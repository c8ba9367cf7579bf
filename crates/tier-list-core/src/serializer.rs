//! JSON Import / Export
//!
//! The only wire format:
//!
//! ```json
//! { "rows": [ { "name": "S", "color": "#FF7F7F", "items": [ { "image": "", "text": "", "tooltip": "" } ] } ],
//!   "unsorted": [ { "image": "", "text": "", "tooltip": "" } ] }
//! ```
//!
//! Imports parse the whole document before touching the model, so a
//! malformed input never leaves a partial import behind.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ImportMode};
use crate::domain::{Container, DomainError, DomainResult, ItemId, TierId};
use crate::rank_list::RankList;

// ========================
// Wire types
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDoc {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDoc {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub items: Vec<ItemDoc>,
}

/// Full list document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub rows: Vec<RowDoc>,
    pub unsorted: Vec<ItemDoc>,
}

/// Flat items-only document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsDocument {
    pub items: Vec<ItemDoc>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// What an import added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub tiers: Vec<TierId>,
    pub items: Vec<ItemId>,
}

// ========================
// Serializer
// ========================

/// Import/export with the row defaults and import mode of a configuration
#[derive(Debug, Clone)]
pub struct Serializer {
    default_name: String,
    default_color: String,
    mode: ImportMode,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Serializer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_name: config.default_tier_name.clone(),
            default_color: config.default_tier_color.clone(),
            mode: config.import_mode,
        }
    }

    pub fn with_mode(mut self, mode: ImportMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ImportMode {
        self.mode
    }

    /// Snapshot the model in tier, item and bucket order
    pub fn export(&self, list: &RankList) -> Document {
        let item_doc = |id: &ItemId| {
            list.item(*id).map(|item| ItemDoc {
                image: item.image.clone(),
                text: item.text.clone(),
                tooltip: item.tooltip.clone(),
            })
        };
        Document {
            rows: list
                .tiers()
                .iter()
                .map(|tier| RowDoc {
                    name: Some(tier.name.clone()),
                    color: Some(tier.color.clone()),
                    items: tier.items().iter().filter_map(item_doc).collect(),
                })
                .collect(),
            unsorted: list.bucket().iter().filter_map(item_doc).collect(),
        }
    }

    pub fn export_json(&self, list: &RankList, pretty: bool) -> DomainResult<String> {
        let doc = self.export(list);
        let text = if pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        };
        text.map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// Parse a full list document and add it to `list`
    pub fn import(&self, list: &mut RankList, text: &str) -> DomainResult<ImportReport> {
        let doc: Document = parse(text)?;
        Ok(self.apply(list, doc))
    }

    /// Parse a flat `{ "items": [...] }` document into the bucket.
    /// Tiers are left alone regardless of the import mode.
    pub fn import_items_only(&self, list: &mut RankList, text: &str) -> DomainResult<ImportReport> {
        let doc: ItemsDocument = parse(text)?;
        let mut report = ImportReport::default();
        for item in &doc.items {
            report.items.push(add_item_doc(list, Container::Bucket, item)?);
        }
        tracing::info!(items = report.items.len(), "items imported");
        Ok(report)
    }

    /// Add an already-parsed document
    pub fn apply(&self, list: &mut RankList, doc: Document) -> ImportReport {
        if self.mode == ImportMode::Replace {
            list.clear();
        }
        let mut report = ImportReport::default();
        for row in doc.rows {
            let name = row.name.as_deref().unwrap_or(&self.default_name);
            let color = row.color.as_deref().unwrap_or(&self.default_color);
            let tier = list.add_tier(name, color);
            report.tiers.push(tier);
            for item in &row.items {
                // the tier was created just above
                if let Ok(id) = add_item_doc(list, Container::Tier(tier), item) {
                    report.items.push(id);
                }
            }
        }
        for item in &doc.unsorted {
            if let Ok(id) = add_item_doc(list, Container::Bucket, item) {
                report.items.push(id);
            }
        }
        tracing::info!(
            tiers = report.tiers.len(),
            items = report.items.len(),
            mode = ?self.mode,
            "list imported"
        );
        report
    }

    /// Build a fresh list from a document
    pub fn load(&self, text: &str, with_mirror: bool) -> DomainResult<RankList> {
        let doc: Document = parse(text)?;
        let mut list = if with_mirror {
            RankList::with_mirror()
        } else {
            RankList::new()
        };
        self.apply(&mut list, doc);
        Ok(list)
    }
}

fn parse<T: serde::de::DeserializeOwned>(text: &str) -> DomainResult<T> {
    serde_json::from_str(text).map_err(|e| {
        tracing::warn!(error = %e, "rejected import");
        DomainError::MalformedInput(e.to_string())
    })
}

fn add_item_doc(list: &mut RankList, container: Container, item: &ItemDoc) -> DomainResult<ItemId> {
    list.add_item(container, &item.image, &item.text, &item.tooltip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RankList {
        let mut list = RankList::with_mirror();
        let s = list.add_tier("S", "#FF7F7F");
        let _empty = list.add_tier("A", "rgb(255, 191, 127)");
        list.add_item(Container::Tier(s), "s1.png", "<i>One</i>", "first").unwrap();
        list.add_item(Container::Tier(s), "s2.png", "Two", "").unwrap();
        list.add_item(Container::Bucket, "u.png", "Loose", "later").unwrap();
        list
    }

    #[test]
    fn test_export_shape() {
        let serializer = Serializer::default();
        let text = serializer.export_json(&sample(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "rows": [
                    { "name": "S", "color": "#FF7F7F", "items": [
                        { "image": "s1.png", "text": "<i>One</i>", "tooltip": "first" },
                        { "image": "s2.png", "text": "Two", "tooltip": "" }
                    ]},
                    { "name": "A", "color": "rgb(255, 191, 127)", "items": [] }
                ],
                "unsorted": [ { "image": "u.png", "text": "Loose", "tooltip": "later" } ]
            })
        );
    }

    #[test]
    fn test_round_trip() {
        let serializer = Serializer::default();
        let source = sample();
        let text = serializer.export_json(&source, true).unwrap();
        let restored = serializer.load(&text, true).unwrap();
        assert_eq!(serializer.export(&restored), serializer.export(&source));
        restored.verify().unwrap();
    }

    #[test]
    fn test_import_empty_document() {
        let mut list = RankList::new();
        let report = Serializer::default()
            .import(&mut list, r#"{"rows":[],"unsorted":[]}"#)
            .unwrap();
        assert!(list.is_empty());
        assert_eq!(report, ImportReport::default());
    }

    #[test]
    fn test_import_rejects_garbage_without_mutation() {
        let serializer = Serializer::default();
        let mut list = sample();
        let before = serializer.export(&list);
        for bad in [
            "not json",
            r#"{"rows":[]}"#,
            r#"{"unsorted":[]}"#,
            r#"{"rows":[{"name":"S"}],"unsorted":[]}"#,
            r#"{"rows":{},"unsorted":[]}"#,
            r#"{"rows":[],"unsorted":[{"text": 5}]}"#,
        ] {
            let err = serializer.import(&mut list, bad).unwrap_err();
            assert!(matches!(err, DomainError::MalformedInput(_)), "{bad}");
        }
        assert_eq!(serializer.export(&list), before);
        // ids were not consumed by the failed attempts
        assert_eq!(list.tier_count(), 2);
    }

    #[test]
    fn test_import_defaults_missing_fields() {
        let mut list = RankList::new();
        let text = json!({
            "rows": [ { "items": [ { "text": "only text" }, { "image": null } ] }, { "name": "Named", "color": null, "items": [] } ],
            "unsorted": []
        })
        .to_string();
        let report = Serializer::default().import(&mut list, &text).unwrap();
        assert_eq!(report.tiers.len(), 2);
        let first = &list.tiers()[0];
        assert_eq!((first.name.as_str(), first.color.as_str()), ("New Tier", "#FFF"));
        let second = &list.tiers()[1];
        assert_eq!((second.name.as_str(), second.color.as_str()), ("Named", "#FFF"));
        let item = list.item(first.items()[0]).unwrap();
        assert_eq!((item.image.as_str(), item.text.as_str(), item.tooltip.as_str()), ("", "only text", ""));
    }

    #[test]
    fn test_append_and_replace_modes() {
        let text = r##"{"rows":[{"name":"Z","color":"#000","items":[]}],"unsorted":[]}"##;

        let mut appended = sample();
        Serializer::default().import(&mut appended, text).unwrap();
        let names: Vec<_> = appended.tiers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["S", "A", "Z"]);
        assert_eq!(appended.item_count(), 3);

        let mut replaced = sample();
        Serializer::default()
            .with_mode(ImportMode::Replace)
            .import(&mut replaced, text)
            .unwrap();
        let names: Vec<_> = replaced.tiers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Z"]);
        assert_eq!(replaced.item_count(), 0);
        replaced.verify().unwrap();
    }

    #[test]
    fn test_import_items_only() {
        let serializer = Serializer::default();
        let mut list = sample();
        let tiers = serializer.export(&list).rows;
        let report = serializer
            .import_items_only(&mut list, r#"{"items":[{"image":"a.png","text":"A","tooltip":"a"},{"text":"B"}]}"#)
            .unwrap();
        assert_eq!(report.items.len(), 2);
        assert_eq!(list.bucket().len(), 3);
        assert_eq!(serializer.export(&list).rows, tiers);

        let err = serializer.import_items_only(&mut list, r#"{"rows":[]}"#).unwrap_err();
        assert!(matches!(err, DomainError::MalformedInput(_)));
        assert_eq!(list.bucket().len(), 3);
    }
}
