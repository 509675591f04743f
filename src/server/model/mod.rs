use serde::{Deserialize, Deserializer};

pub(crate) mod bill;
pub(crate) mod config;
pub(crate) mod ledger;
pub(crate) mod menu;
pub(crate) mod payment;

pub(crate) type GuestId = i64;
pub(crate) type OrderId = i64;
pub(crate) type BillId = i64;
pub(crate) type MenuItemId = i64;

/// Identifiers arrive either as json numbers or numeric strings,
/// both are normalized to `i64` on ingestion.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl TryFrom<RawId> for i64 {
    type Error = String;

    fn try_from(raw: RawId) -> Result<Self, Self::Error> {
        match raw {
            RawId::Number(n) => Ok(n),
            RawId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("invalid identifier: {s:?}")),
        }
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    i64::try_from(RawId::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawId>::deserialize(deserializer)?
        .into_iter()
        .map(|raw| i64::try_from(raw).map_err(serde::de::Error::custom))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize_id")]
        id: i64,
        #[serde(default, deserialize_with = "deserialize_ids")]
        ids: Vec<i64>,
    }

    #[test]
    fn ids_from_numbers_and_strings() {
        let probe: Probe = serde_json::from_value(json!({ "id": "7", "ids": [1, "2", " 3 "] })).unwrap();
        assert_eq!(probe.id, 7);
        assert_eq!(probe.ids, vec![1, 2, 3]);

        let probe: Probe = serde_json::from_value(json!({ "id": 9 })).unwrap();
        assert_eq!(probe.id, 9);
        assert!(probe.ids.is_empty());
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(serde_json::from_value::<Probe>(json!({ "id": "table-4" })).is_err());
        assert!(serde_json::from_value::<Probe>(json!({ "id": 1.5 })).is_err());
    }
}
