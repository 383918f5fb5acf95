//! Statements and row mapping shared by the gallery read and write adapters.
//!
//! Table names come from `ParentType::table_name`, never from input.

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{DatabaseBackend, DbErr, QueryResult, Statement, Value};
use uuid::Uuid;

use crate::gallery::application::domain::{
    entities::{GalleryItem, NewGalleryItem, ParentRef, ParentType},
    parent_fields::ParentFields,
    sequence::Sequenced,
};

pub(super) const GALLERY_COLUMNS: &str =
    "id, parent_id, parent_type, image_url, alt_text, order_index, created_at";

fn stmt(sql: &str, values: Vec<Value>) -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}

fn scope_values(parent: &ParentRef) -> Vec<Value> {
    vec![parent.id().into(), parent.parent_type().as_i16().into()]
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// =====================================================
// Gallery rows
// =====================================================

pub(super) fn select_scope_stmt(parent: &ParentRef) -> Statement {
    stmt(
        &format!(
            r#"
            SELECT {GALLERY_COLUMNS}
            FROM galleries
            WHERE parent_id = $1 AND parent_type = $2
            ORDER BY order_index ASC, created_at ASC, id ASC
            "#
        ),
        scope_values(parent),
    )
}

pub(super) fn max_order_index_stmt(parent: &ParentRef) -> Statement {
    stmt(
        r#"
        SELECT MAX(order_index) AS max_index
        FROM galleries
        WHERE parent_id = $1 AND parent_type = $2
        "#,
        scope_values(parent),
    )
}

pub(super) fn delete_scope_stmt(parent: &ParentRef) -> Statement {
    stmt(
        "DELETE FROM galleries WHERE parent_id = $1 AND parent_type = $2",
        scope_values(parent),
    )
}

/// One multi-row INSERT; placeholders are generated, values are bound.
pub(super) fn insert_rows_stmt(rows: &[GalleryItem]) -> Statement {
    const PER_ROW: usize = 7;

    let tuples: Vec<String> = (0..rows.len())
        .map(|r| {
            let placeholders: Vec<String> = (1..=PER_ROW)
                .map(|c| format!("${}", r * PER_ROW + c))
                .collect();
            format!("({})", placeholders.join(", "))
        })
        .collect();

    let values: Vec<Value> = rows
        .iter()
        .flat_map(|row| -> [Value; 7] {
            [
                row.id.into(),
                row.parent.id().into(),
                row.parent.parent_type().as_i16().into(),
                row.image_url.clone().into(),
                row.alt_text.clone().into(),
                row.order_index.into(),
                row.created_at.fixed_offset().into(),
            ]
        })
        .collect();

    stmt(
        &format!(
            "INSERT INTO galleries ({GALLERY_COLUMNS}) VALUES {}",
            tuples.join(", ")
        ),
        values,
    )
}

/// Ids and timestamps are assigned here so the inserted rows can be
/// returned without a read-back.
pub(super) fn new_rows(
    parent: &ParentRef,
    rows: impl IntoIterator<Item = Sequenced<NewGalleryItem>>,
) -> Vec<GalleryItem> {
    let now = Utc::now();
    rows.into_iter()
        .map(|seq| GalleryItem {
            id: Uuid::new_v4(),
            parent: *parent,
            image_url: seq.item.image_url,
            alt_text: seq.item.alt_text,
            order_index: seq.order_index,
            created_at: now,
        })
        .collect()
}

pub(super) fn gallery_item_from_row(row: &QueryResult) -> Result<GalleryItem, DbErr> {
    let id: Uuid = row.try_get("", "id")?;
    let parent_id: Uuid = row.try_get("", "parent_id")?;
    let parent_type: i16 = row.try_get("", "parent_type")?;
    let image_url: String = row.try_get("", "image_url")?;
    let alt_text: Option<String> = row.try_get("", "alt_text")?;
    let order_index: i32 = row.try_get("", "order_index")?;
    let created_at: DateTime<FixedOffset> = row.try_get("", "created_at")?;

    let parent_type = ParentType::from_i16(parent_type)
        .ok_or_else(|| DbErr::Custom(format!("unknown parent_type {parent_type}")))?;

    Ok(GalleryItem {
        id,
        parent: ParentRef::new(parent_type, parent_id),
        image_url,
        alt_text: alt_text.unwrap_or_default(),
        order_index,
        created_at: created_at.with_timezone(&Utc),
    })
}

// =====================================================
// Parent rows
// =====================================================

pub(super) fn insert_parent_stmt(
    parent: &ParentRef,
    fields: &ParentFields,
    now: DateTime<FixedOffset>,
) -> Statement {
    let table = parent.parent_type().table_name();
    let mut columns = vec![
        "id",
        "title_en",
        "title_ku",
        "title_ar",
        "description_en",
        "description_ku",
        "description_ar",
        "created_at",
        "updated_at",
    ];
    let mut values: Vec<Value> = vec![
        parent.id().into(),
        fields.title.en.trim().to_string().into(),
        non_empty(&fields.title.ku).into(),
        non_empty(&fields.title.ar).into(),
        non_empty(&fields.description.en).into(),
        non_empty(&fields.description.ku).into(),
        non_empty(&fields.description.ar).into(),
        now.into(),
        now.into(),
    ];
    if parent.parent_type() == ParentType::Event {
        columns.push("event_date");
        values.push(fields.event_date.into());
    }

    let placeholders: Vec<String> = (1..=values.len()).map(|i| format!("${i}")).collect();
    stmt(
        &format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        ),
        values,
    )
}

pub(super) fn update_parent_stmt(parent: &ParentRef, fields: &ParentFields) -> Statement {
    let table = parent.parent_type().table_name();
    let mut assignments = vec![
        "title_en = $2",
        "title_ku = $3",
        "title_ar = $4",
        "description_en = $5",
        "description_ku = $6",
        "description_ar = $7",
    ];
    let mut values: Vec<Value> = vec![
        parent.id().into(),
        fields.title.en.trim().to_string().into(),
        non_empty(&fields.title.ku).into(),
        non_empty(&fields.title.ar).into(),
        non_empty(&fields.description.en).into(),
        non_empty(&fields.description.ku).into(),
        non_empty(&fields.description.ar).into(),
    ];
    if parent.parent_type() == ParentType::Event {
        assignments.push("event_date = $8");
        values.push(fields.event_date.into());
    }

    stmt(
        &format!(
            "UPDATE {table} SET {} WHERE id = $1",
            assignments.join(", ")
        ),
        values,
    )
}

/// Row lock held until the surrounding transaction ends.
pub(super) fn lock_primary_image_stmt(parent: &ParentRef) -> Statement {
    stmt(
        &format!(
            "SELECT primary_image_url FROM {} WHERE id = $1 FOR UPDATE",
            parent.parent_type().table_name()
        ),
        vec![parent.id().into()],
    )
}

pub(super) fn primary_image_stmt(parent: &ParentRef) -> Statement {
    stmt(
        &format!(
            "SELECT primary_image_url FROM {} WHERE id = $1",
            parent.parent_type().table_name()
        ),
        vec![parent.id().into()],
    )
}

pub(super) fn set_primary_image_stmt(parent: &ParentRef, image_url: Option<&str>) -> Statement {
    stmt(
        &format!(
            "UPDATE {} SET primary_image_url = $2 WHERE id = $1",
            parent.parent_type().table_name()
        ),
        vec![parent.id().into(), image_url.map(str::to_string).into()],
    )
}

pub(super) fn delete_parent_stmt(parent: &ParentRef) -> Statement {
    stmt(
        &format!(
            "DELETE FROM {} WHERE id = $1",
            parent.parent_type().table_name()
        ),
        vec![parent.id().into()],
    )
}
