use std::collections::BTreeMap;

use thiserror::Error;

use crate::db::Category;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no categories available")]
pub struct NoCategories;

/// Builds the `id -> name` mapping shared by the category and question listings.
pub fn format_categories(categories: Vec<Category>) -> Result<BTreeMap<i64, String>, NoCategories> {
    if categories.is_empty() {
        return Err(NoCategories);
    }
    Ok(categories.into_iter().map(|c| (c.id, c.name)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_ids_to_names() {
        let formatted = format_categories(vec![
            Category {
                id: 2,
                name: "Art".to_owned(),
            },
            Category {
                id: 1,
                name: "Science".to_owned(),
            },
        ])
        .unwrap();
        let expected = BTreeMap::from([(1, "Science".to_owned()), (2, "Art".to_owned())]);
        assert_eq!(formatted, expected);
    }

    #[test]
    fn empty_list_is_not_found() {
        assert_eq!(format_categories(vec![]), Err(NoCategories));
    }
}
