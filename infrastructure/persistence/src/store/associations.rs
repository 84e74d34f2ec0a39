//! Writes to the `product_stores` association table.
//!
//! These run on a caller-owned connection so they can share a transaction
//! with the product write they belong to.

use sqlx::PgConnection;

/// Inserts one association row per store id. Existing pairs are left untouched.
pub async fn insert_for_product(
    conn: &mut PgConnection,
    product_id: i32,
    store_ids: &[i32],
) -> Result<(), sqlx::Error> {
    for store_id in store_ids {
        sqlx::query(
            "INSERT INTO product_stores (product_id, store_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(product_id)
        .bind(store_id)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Removes every association of a product, returning how many rows went away.
pub async fn delete_for_product(
    conn: &mut PgConnection,
    product_id: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM product_stores WHERE product_id = $1")
        .bind(product_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}
