use serde::{Deserialize, Deserializer};

// web forms send ids as strings, scripts send them as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

impl NumberOrString {
    fn into_i64(self) -> Result<i64, String> {
        match self {
            NumberOrString::Number(v) => Ok(v),
            NumberOrString::String(s) => match s.trim().parse::<i64>() {
                Ok(v) => Ok(v),
                Err(_) => Err(format!("Wrong value {s}, can not parse to i64")),
            },
        }
    }
}

pub fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<NumberOrString>::deserialize(deserializer)?
        .into_iter()
        .map(|id| id.into_i64().map_err(serde::de::Error::custom))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Ids {
        #[serde(deserialize_with = "deserialize_ids")]
        ids: Vec<i64>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let parsed: Ids = serde_json::from_str(r#"{"ids": [1, "2", " 3 "]}"#).unwrap();
        assert_eq!(parsed.ids, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_words() {
        assert!(serde_json::from_str::<Ids>(r#"{"ids": ["one"]}"#).is_err());
    }
}
