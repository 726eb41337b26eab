use super::models::{Company, CompanyDetail, CreateCompanyRequest, UpdateCompanyRequest};
use crate::common::{slugify, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct CompaniesService {
    db: SqlitePool,
}

impl CompaniesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all companies
    pub async fn get_all_companies(&self) -> Result<Vec<Company>, ApiError> {
        let companies = sqlx::query_as::<_, Company>(
            r#"
            SELECT code, name, description
            FROM companies
            ORDER BY code ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(companies)
    }

    /// Get one company by code, together with the ids of its invoices.
    ///
    /// The two queries are independent and not transactionally coupled.
    pub async fn get_company_by_code(&self, code: &str) -> Result<CompanyDetail, ApiError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            SELECT code, name, description
            FROM companies
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Can't find company with the code {}", code)))?;

        let invoice_ids = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM invoices WHERE comp_code = ? ORDER BY id ASC",
        )
        .bind(code)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(CompanyDetail {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices: invoice_ids,
        })
    }

    /// Create a new company, deriving its code from the name.
    ///
    /// No uniqueness pre-check: a duplicate code surfaces as a store-level
    /// constraint failure and propagates as a database error.
    pub async fn create_company(&self, request: CreateCompanyRequest) -> Result<Company, ApiError> {
        let code = slugify(&request.name);

        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES (?, ?, ?)
            RETURNING code, name, description
            "#,
        )
        .bind(&code)
        .bind(&request.name)
        .bind(&request.description)
        .fetch_one(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!("Created company: {} ({})", company.name, company.code);

        Ok(company)
    }

    /// Replace the name and description of a company.
    pub async fn update_company(
        &self,
        code: &str,
        request: UpdateCompanyRequest,
    ) -> Result<Company, ApiError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = ?, description = ?
            WHERE code = ?
            RETURNING code, name, description
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(code)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Can't find company with the code {}", code)))?;

        info!("Updated company: {}", code);

        Ok(company)
    }

    /// Delete a company by code.
    pub async fn delete_company(&self, code: &str) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM companies WHERE code = ?")
            .bind(code)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Can't find company with the code {}",
                code
            )));
        }

        info!("Deleted company: {}", code);

        Ok(())
    }
}
