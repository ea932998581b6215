use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::CoreError;

/// A document field that the API can report distinct values for.
///
/// Each field has two names: the document key it is stored under and the
/// route segment it is served from (`sector` is served at `/api/unique/sectors`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    EndYear,
    Intensity,
    Sector,
    Topic,
    Insight,
    Url,
    Region,
    StartYear,
    Impact,
    Added,
    Published,
    Country,
    Relevance,
    Pestle,
    Source,
    Title,
    Likelihood,
}

impl Field {
    /// Every supported field, in the order the routes are registered.
    pub const ALL: [Field; 17] = [
        Field::EndYear,
        Field::Intensity,
        Field::Sector,
        Field::Topic,
        Field::Insight,
        Field::Url,
        Field::Region,
        Field::StartYear,
        Field::Impact,
        Field::Added,
        Field::Published,
        Field::Country,
        Field::Relevance,
        Field::Pestle,
        Field::Source,
        Field::Title,
        Field::Likelihood,
    ];

    /// The key this field is stored under in a record.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Field::EndYear => "end_year",
            Field::Intensity => "intensity",
            Field::Sector => "sector",
            Field::Topic => "topic",
            Field::Insight => "insight",
            Field::Url => "url",
            Field::Region => "region",
            Field::StartYear => "start_year",
            Field::Impact => "impact",
            Field::Added => "added",
            Field::Published => "published",
            Field::Country => "country",
            Field::Relevance => "relevance",
            Field::Pestle => "pestle",
            Field::Source => "source",
            Field::Title => "title",
            Field::Likelihood => "likelihood",
        }
    }

    /// The segment under `/api/unique/` that serves this field.
    #[must_use]
    pub const fn route_segment(self) -> &'static str {
        match self {
            Field::EndYear => "end_years",
            Field::Intensity => "intensities",
            Field::Sector => "sectors",
            Field::Topic => "topics",
            Field::Insight => "insights",
            Field::Url => "urls",
            Field::Region => "regions",
            Field::StartYear => "start_years",
            Field::Impact => "impacts",
            // These three were never pluralised.
            Field::Added => "added",
            Field::Published => "published",
            Field::Pestle => "pestle",
            Field::Country => "countries",
            Field::Relevance => "relevances",
            Field::Source => "sources",
            Field::Title => "titles",
            Field::Likelihood => "likelihoods",
        }
    }

    /// Resolve a route segment to its field.
    ///
    /// Matching is exact; `Sectors` and `sector` do not resolve.
    #[must_use]
    pub fn from_route_segment(segment: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.route_segment() == segment)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    /// Parse a route segment, as found in `/api/unique/{segment}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_route_segment(s).ok_or_else(|| CoreError::UnknownField {
            segment: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sector_is_served_at_plural_segment() {
        assert_eq!(Field::Sector.route_segment(), "sectors");
        assert_eq!(Field::from_route_segment("sectors"), Some(Field::Sector));
    }

    #[test]
    fn unpluralised_segments_resolve() {
        assert_eq!(Field::from_route_segment("added"), Some(Field::Added));
        assert_eq!(Field::from_route_segment("published"), Some(Field::Published));
        assert_eq!(Field::from_route_segment("pestle"), Some(Field::Pestle));
    }

    #[test]
    fn document_key_is_not_a_route_segment() {
        assert_eq!(Field::from_route_segment("sector"), None);
        assert_eq!(Field::from_route_segment("country"), None);
        assert_eq!(Field::from_route_segment("Sectors"), None);
        assert_eq!(Field::from_route_segment(""), None);
    }

    #[test]
    fn segments_and_keys_are_unique() {
        let segments: HashSet<_> = Field::ALL.iter().map(|f| f.route_segment()).collect();
        let keys: HashSet<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(segments.len(), Field::ALL.len(), "route segments must not collide");
        assert_eq!(keys.len(), Field::ALL.len(), "document keys must not collide");
    }

    #[test]
    fn from_str_unknown_segment_returns_unknown_field() {
        let err = match "colours".parse::<Field>() {
            Ok(f) => panic!("expected error, got {f:?}"),
            Err(e) => e,
        };
        assert!(
            matches!(&err, CoreError::UnknownField { segment } if segment == "colours"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn serde_uses_document_key() {
        let json = match serde_json::to_string(&Field::StartYear) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "\"start_year\"");
    }

    #[test]
    fn display_shows_document_key() {
        assert_eq!(Field::EndYear.to_string(), "end_year");
        assert_eq!(Field::Likelihood.to_string(), "likelihood");
    }
}
