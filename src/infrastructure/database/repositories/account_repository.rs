use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{
    Account, AccountRepository, AccountRole, DomainError, DomainResult, NewAccountDto,
};
use crate::infrastructure::database::entities::account;

pub struct SeaOrmAccountRepository {
    db: DatabaseConnection,
}

impl SeaOrmAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: account::AccountRole) -> AccountRole {
    match role {
        account::AccountRole::Student => AccountRole::Student,
        account::AccountRole::Landlord => AccountRole::Landlord,
    }
}

fn domain_role_to_entity(role: AccountRole) -> account::AccountRole {
    match role {
        AccountRole::Student => account::AccountRole::Student,
        AccountRole::Landlord => account::AccountRole::Landlord,
    }
}

fn account_model_to_domain(model: account::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        name: model.name,
        role: entity_role_to_domain(model.role),
        created_at: model.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        let model = account::Entity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(account_model_to_domain))
    }

    async fn insert(&self, dto: NewAccountDto) -> DomainResult<Account> {
        let new_account = account::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            email: Set(dto.email),
            password_hash: Set(dto.password_hash),
            name: Set(dto.name),
            role: Set(domain_role_to_entity(dto.role)),
            created_at: Set(Utc::now()),
        };

        let model = new_account.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("Email already registered".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(account_model_to_domain(model))
    }
}

// ── Tests ──────────────────────────────────────────────────────
