/// One allow-listed table: its name and its insertable columns in statement
/// order. The auto-generated `id` primary key is never listed; the store
/// assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl TableDef {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

pub const CATEGORIES: TableDef = TableDef {
    name: "categories",
    columns: &["name", "description"],
};

pub const REPORTERS: TableDef = TableDef {
    name: "reporters",
    columns: &["name", "email"],
};

pub const PUBLISHERS: TableDef = TableDef {
    name: "publishers",
    columns: &[
        "name",
        "email",
        "phone_number",
        "head_office_add",
        "website",
        "facebook",
        "twitter",
        "linkedin",
        "instagram",
    ],
};

pub const NEWS: TableDef = TableDef {
    name: "news",
    columns: &[
        "category_id",
        "reporter_id",
        "publisher_id",
        "datetime",
        "title",
        "body",
        "link",
    ],
};

pub const IMAGES: TableDef = TableDef {
    name: "images",
    columns: &["news_id", "image_url"],
};

pub const SUMMARIES: TableDef = TableDef {
    name: "summaries",
    columns: &["news_id", "summary_text"],
};

/// The full identifier allow-list. Table and column names outside this set
/// are rejected before any SQL is assembled, so caller-supplied identifiers
/// can never reach statement text.
pub const TABLES: [TableDef; 6] = [CATEGORIES, REPORTERS, PUBLISHERS, NEWS, IMAGES, SUMMARIES];

pub fn lookup(table_name: &str) -> Option<&'static TableDef> {
    TABLES.iter().find(|t| t.name == table_name)
}
