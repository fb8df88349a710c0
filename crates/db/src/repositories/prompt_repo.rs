//! Repository for the `prompts` table.
//!
//! Every read and write is owner-scoped: the caller's user id is part of
//! the WHERE clause, so a record owned by someone else is indistinguishable
//! from a record that does not exist.

use sqlx::PgPool;

use promptly_core::types::DbId;

use crate::models::prompt::{CreatePrompt, PromptRecord, UpdatePrompt};

/// Column list for `prompts` queries.
const COLUMNS: &str = "\
    id, user_id, title, task, role, tone, format, \
    date_context, additional_context, generated_prompt, category, \
    is_public, likes, usage_count, created_at, updated_at";

/// Escape LIKE wildcards in a user-supplied search term so `%` and `_`
/// match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Provides owner-scoped CRUD operations for saved prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Create a new prompt owned by `user_id`, returning the full row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePrompt,
    ) -> Result<PromptRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts \
                (user_id, title, task, role, tone, format, \
                 date_context, additional_context, generated_prompt, category) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptRecord>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.task)
            .bind(&input.role)
            .bind(&input.tone)
            .bind(&input.format)
            .bind(&input.date_context)
            .bind(&input.additional_context)
            .bind(&input.generated_prompt)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a prompt by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<PromptRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, PromptRecord>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's prompts, newest first, with optional category and
    /// case-insensitive substring search over title/task/generated_prompt.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        category: Option<&str>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PromptRecord>, sqlx::Error> {
        let (where_clause, next_param) = Self::filter_clause(category, search);
        let query = format!(
            "SELECT {COLUMNS} FROM prompts {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${next_param} OFFSET ${}",
            next_param + 1
        );

        let mut q = sqlx::query_as::<_, PromptRecord>(&query).bind(user_id);
        if let Some(c) = category {
            q = q.bind(c);
        }
        if let Some(s) = search {
            q = q.bind(format!("%{}%", escape_like(s)));
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count the owner's prompts matching the same filters as [`Self::list`].
    pub async fn count(
        pool: &PgPool,
        user_id: DbId,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = Self::filter_clause(category, search);
        let query = format!("SELECT COUNT(*) FROM prompts {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query).bind(user_id);
        if let Some(c) = category {
            q = q.bind(c);
        }
        if let Some(s) = search {
            q = q.bind(format!("%{}%", escape_like(s)));
        }
        q.fetch_one(pool).await
    }

    /// Build the shared WHERE clause for list/count. Returns the clause and
    /// the index of the next free bind parameter.
    fn filter_clause(category: Option<&str>, search: Option<&str>) -> (String, usize) {
        let mut conditions = vec!["user_id = $1".to_string()];
        let mut param_idx: usize = 2;

        if category.is_some() {
            conditions.push(format!("category = ${param_idx}"));
            param_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${param_idx} OR task ILIKE ${param_idx} \
                 OR generated_prompt ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        (format!("WHERE {}", conditions.join(" AND ")), param_idx)
    }

    /// Partially update a prompt, scoped to its owner. Returns the updated
    /// row, or `None` when the record is absent or owned by someone else.
    ///
    /// `updated_at` is bumped atomically with the field merge; the owner
    /// column is never touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdatePrompt,
    ) -> Result<Option<PromptRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET \
                title = COALESCE($3, title), \
                task = COALESCE($4, task), \
                role = COALESCE($5, role), \
                tone = COALESCE($6, tone), \
                format = COALESCE($7, format), \
                date_context = COALESCE($8, date_context), \
                additional_context = COALESCE($9, additional_context), \
                generated_prompt = COALESCE($10, generated_prompt), \
                category = COALESCE($11, category), \
                is_public = COALESCE($12, is_public), \
                updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptRecord>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.task)
            .bind(&input.role)
            .bind(&input.tone)
            .bind(&input.format)
            .bind(&input.date_context)
            .bind(&input.additional_context)
            .bind(&input.generated_prompt)
            .bind(&input.category)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt, scoped to its owner. Returns whether a row was
    /// actually removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically increment the usage counter, scoped to the owner.
    /// Returns the new count, or `None` when the record is absent or not
    /// owned by the caller.
    pub async fn increment_usage(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "UPDATE prompts SET usage_count = usage_count + 1 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING usage_count",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_escaping() {
        assert_eq!(escape_like("50%_done"), "50\\%\\_done");
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn filter_clause_param_indices() {
        let (clause, next) = PromptRepo::filter_clause(None, None);
        assert_eq!(clause, "WHERE user_id = $1");
        assert_eq!(next, 2);

        let (clause, next) = PromptRepo::filter_clause(Some("coding"), Some("regex"));
        assert!(clause.contains("category = $2"));
        assert!(clause.contains("ILIKE $3"));
        assert_eq!(next, 4);
    }
}
