use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{DataSource, Group, Item};

/// A sequence element before the collection shape is known.
#[derive(Deserialize)]
struct Entry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    items: Option<Vec<Item>>,
}

impl DataSource {
    fn from_entries(entries: Vec<Entry>) -> Self {
        let grouped = entries.first().is_some_and(|e| e.items.is_some());
        if grouped {
            Self::Grouped(
                entries
                    .into_iter()
                    .map(|e| Group {
                        label: e.label,
                        items: e.items.unwrap_or_default(),
                    })
                    .collect(),
            )
        } else {
            Self::Flat(
                entries
                    .into_iter()
                    .map(|e| Item {
                        id: e.id,
                        label: e.label,
                        value: e.value,
                        disabled: e.disabled,
                    })
                    .collect(),
            )
        }
    }
}

impl Serialize for DataSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flat(items) => items.serialize(serializer),
            Self::Grouped(groups) => groups.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DataSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        let source = Self::from_entries(entries);
        mdebug!(
            grouped = source.is_grouped(),
            len = source.len(),
            "DataSource::deserialize"
        );
        Ok(source)
    }
}
