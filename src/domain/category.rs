/// The canonical expense categories, in the order they appear in the
/// exported spreadsheet. The list is advisory: an expense may carry any
/// category string, and the exporter appends unknown categories after
/// these in first-seen order.
pub const CANONICAL_CATEGORIES: [&str; 14] = [
    "Rent",
    "Wifi",
    "Mobile phone plan",
    "Hydro/Electricity",
    "Insurance",
    "Groceries",
    "Eating Out",
    "Coffee",
    "Alcohol",
    "Travel",
    "Laundry",
    "Shopping",
    "Miscellaneous",
    "Vacation / Entertainment",
];

/// Owned copy of the canonical category list, for callers that assemble
/// their own ordering or append to it.
pub fn canonical_categories() -> Vec<String> {
    CANONICAL_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
