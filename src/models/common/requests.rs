use serde::{Deserialize, Deserializer, de};
use ts_rs::TS;

// 资源ID查询参数 (?id=<int>)，空值视为未提供
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "registry.ts")]
pub struct IdQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid id '{raw}': {e}"))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::QueryPayloadError;
    use actix_web::web::Query;

    fn parse(query: &str) -> Result<IdQuery, QueryPayloadError> {
        Query::<IdQuery>::from_query(query).map(Query::into_inner)
    }

    #[test]
    fn test_id_query_values() {
        assert_eq!(parse("id=7").unwrap().id, Some(7));
        assert_eq!(parse("id=").unwrap().id, None);
        assert_eq!(parse("").unwrap().id, None);
        assert!(parse("id=abc").is_err());
    }
}
