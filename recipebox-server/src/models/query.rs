//! List query parameters - filtering and sorting
//!
//! `GET /api/recipes` resolves its query string into exactly one
//! [`ListMode`]. Filters take precedence over sorting; with neither the
//! default newest-first listing is used.

/// Raw query string for the list endpoint.
///
/// Values stay as strings so a malformed bound degrades to "absent"
/// instead of rejecting the whole request. A repeated key keeps its
/// first value.
#[derive(Debug, Default, Clone)]
pub struct ListParams {
    pub min_protein: Option<String>,
    pub max_protein: Option<String>,
    pub min_carbs: Option<String>,
    pub max_carbs: Option<String>,
    pub vegan: Option<String>,
    pub vegetarian: Option<String>,
    pub gluten_free: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// How the list endpoint reads from the store
#[derive(Debug, Clone, PartialEq)]
pub enum ListMode {
    Filter(RecipeFilter),
    Sort(SortColumn, SortOrder),
    All,
}

impl ListParams {
    /// Collect decoded `key=value` pairs. Unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "minProtein" => &mut params.min_protein,
                "maxProtein" => &mut params.max_protein,
                "minCarbs" => &mut params.min_carbs,
                "maxCarbs" => &mut params.max_carbs,
                "vegan" => &mut params.vegan,
                "vegetarian" => &mut params.vegetarian,
                "glutenFree" => &mut params.gluten_free,
                "sortBy" => &mut params.sort_by,
                "order" => &mut params.order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    fn has_filters(&self) -> bool {
        [
            &self.min_protein,
            &self.max_protein,
            &self.min_carbs,
            &self.max_carbs,
            &self.vegan,
            &self.vegetarian,
            &self.gluten_free,
        ]
        .iter()
        .any(|p| p.is_some())
    }

    pub fn mode(&self) -> ListMode {
        if self.has_filters() {
            ListMode::Filter(RecipeFilter {
                min_protein: parse_bound(self.min_protein.as_deref()),
                max_protein: parse_bound(self.max_protein.as_deref()),
                min_carbs: parse_bound(self.min_carbs.as_deref()),
                max_carbs: parse_bound(self.max_carbs.as_deref()),
                vegan_only: parse_flag(self.vegan.as_deref()),
                vegetarian_only: parse_flag(self.vegetarian.as_deref()),
                gluten_free_only: parse_flag(self.gluten_free.as_deref()),
            })
        } else if let Some(sort_by) = &self.sort_by {
            ListMode::Sort(
                SortColumn::from_param(sort_by),
                SortOrder::from_param(self.order.as_deref().unwrap_or("desc")),
            )
        } else {
            ListMode::All
        }
    }
}

/// AND-ed filter criteria. `None` bounds and `false` flags are skipped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecipeFilter {
    pub min_protein: Option<f64>,
    pub max_protein: Option<f64>,
    pub min_carbs: Option<f64>,
    pub max_carbs: Option<f64>,
    pub vegan_only: bool,
    pub vegetarian_only: bool,
    pub gluten_free_only: bool,
}

impl RecipeFilter {
    /// Drop negative bounds, which clients send to mean "no bound"
    pub fn normalized(mut self) -> Self {
        for bound in [
            &mut self.min_protein,
            &mut self.max_protein,
            &mut self.min_carbs,
            &mut self.max_carbs,
        ] {
            if bound.is_some_and(|v| v < 0.0 || !v.is_finite()) {
                *bound = None;
            }
        }
        self
    }
}

/// Columns the list endpoint may order by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    CookTime,
    Difficulty,
    CreatedAt,
}

impl SortColumn {
    /// Unknown names fall back to `created_at`
    pub fn from_param(value: &str) -> Self {
        match value {
            "cook_time" => Self::CookTime,
            "difficulty" => Self::Difficulty,
            _ => Self::CreatedAt,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::CookTime => "cook_time",
            Self::Difficulty => "difficulty",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `asc` sorts descending
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(raw.map(str::trim), Some("true") | Some("1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn params(query: &str) -> ListParams {
        let uri: Uri = format!("/api/recipes?{query}").parse().unwrap();
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri).unwrap();
        ListParams::from_pairs(pairs)
    }

    #[test]
    fn no_params_lists_all() {
        assert_eq!(params("").mode(), ListMode::All);
    }

    #[test]
    fn filters_take_precedence_over_sort() {
        let mode = params("minProtein=10&sortBy=cook_time").mode();
        match mode {
            ListMode::Filter(filter) => assert_eq!(filter.min_protein, Some(10.0)),
            other => panic!("expected filter mode, got {other:?}"),
        }
    }

    #[test]
    fn presence_of_flag_selects_filter_even_when_false() {
        let mode = params("vegan=false").mode();
        assert_eq!(mode, ListMode::Filter(RecipeFilter::default()));
    }

    #[test]
    fn flags_accept_true_and_one() {
        let ListMode::Filter(filter) =
            params("vegan=true&vegetarian=1&glutenFree=yes").mode()
        else {
            panic!("expected filter mode");
        };
        assert!(filter.vegan_only);
        assert!(filter.vegetarian_only);
        assert!(!filter.gluten_free_only);
    }

    #[test]
    fn malformed_and_negative_bounds_are_absent() {
        let ListMode::Filter(filter) =
            params("minProtein=abc&maxCarbs=-1&minCarbs=2.5").mode()
        else {
            panic!("expected filter mode");
        };
        assert_eq!(filter.min_protein, None);
        assert_eq!(filter.max_carbs, None);
        assert_eq!(filter.min_carbs, Some(2.5));
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let ListMode::Filter(filter) =
            params("vegan=true&vegan=false&minProtein=5&minProtein=50").mode()
        else {
            panic!("expected filter mode");
        };
        assert!(filter.vegan_only);
        assert_eq!(filter.min_protein, Some(5.0));
    }

    #[test]
    fn trailing_garbage_in_bound_is_absent() {
        let ListMode::Filter(filter) = params("minProtein=10abc").mode() else {
            panic!("expected filter mode");
        };
        assert_eq!(filter.min_protein, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(params("page=2&title=Oats").mode(), ListMode::All);
    }

    #[test]
    fn sort_defaults_to_descending() {
        let mode = params("sortBy=cook_time").mode();
        assert_eq!(mode, ListMode::Sort(SortColumn::CookTime, SortOrder::Desc));

        let mode = params("sortBy=difficulty&order=asc").mode();
        assert_eq!(mode, ListMode::Sort(SortColumn::Difficulty, SortOrder::Asc));
    }

    #[test]
    fn unknown_sort_column_falls_back() {
        assert_eq!(SortColumn::from_param("title; DROP TABLE recipes"), SortColumn::CreatedAt);
        assert_eq!(SortOrder::from_param("sideways"), SortOrder::Desc);
    }

    #[test]
    fn normalized_drops_negative_bounds() {
        let filter = RecipeFilter {
            min_protein: Some(-1.0),
            max_protein: Some(30.0),
            ..Default::default()
        }
        .normalized();
        assert_eq!(filter.min_protein, None);
        assert_eq!(filter.max_protein, Some(30.0));
    }
}
