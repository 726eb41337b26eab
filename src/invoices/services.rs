use super::models::{
    CreateInvoiceRequest, Invoice, InvoiceCompanyRow, InvoiceDetail, UpdateInvoiceRequest,
};
use crate::common::ApiError;
use sqlx::SqlitePool;
use tracing::info;

pub struct InvoicesService {
    db: SqlitePool,
}

impl InvoicesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all invoices
    pub async fn get_all_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(invoices)
    }

    /// Get one invoice by id, with its issuing company joined in and
    /// nested in place of the bare company code.
    pub async fn get_invoice_by_id(&self, id: i64) -> Result<InvoiceDetail, ApiError> {
        let row = sqlx::query_as::<_, InvoiceCompanyRow>(
            r#"
            SELECT i.id, i.amt, i.paid, i.add_date, i.paid_date,
                   c.code, c.name, c.description
            FROM invoices AS i
            JOIN companies AS c ON i.comp_code = c.code
            WHERE i.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Invoice with id {} doesn't exist", id)))?;

        Ok(InvoiceDetail::from(row))
    }

    /// Create a new invoice. New invoices start unpaid, with the add
    /// date stamped server-side and no paid date.
    ///
    /// The company code is not pre-checked: an unknown code fails the
    /// foreign key constraint and propagates as a database error.
    pub async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<Invoice, ApiError> {
        let add_date = chrono::Utc::now().to_rfc3339();

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date)
            VALUES (?, ?, ?, ?, NULL)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(&request.comp_code)
        .bind(request.amt)
        .bind(false)
        .bind(&add_date)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!(
            "Created invoice: {} for company {}",
            invoice.id, invoice.comp_code
        );

        Ok(invoice)
    }

    /// Replace the amount of an invoice.
    pub async fn update_invoice(
        &self,
        id: i64,
        request: UpdateInvoiceRequest,
    ) -> Result<Invoice, ApiError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET amt = ?
            WHERE id = ?
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(request.amt)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Invoice with id {} doesn't exist", id)))?;

        info!("Updated invoice: {}", id);

        Ok(invoice)
    }

    /// Delete an invoice by id.
    pub async fn delete_invoice(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Invoice with id {} doesn't exist",
                id
            )));
        }

        info!("Deleted invoice: {}", id);

        Ok(())
    }
}
