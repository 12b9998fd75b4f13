//! Director business rules.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{Director, NewDirector};
use crate::domain::repo::DirectorsRepository;
use crate::domain::service::validate_name;

pub struct DirectorsService<D> {
    db: DatabaseConnection,
    directors: Arc<D>,
}

impl<D: DirectorsRepository> DirectorsService<D> {
    pub fn new(db: DatabaseConnection, directors: Arc<D>) -> Self {
        Self { db, directors }
    }

    /// Directors collide on name; the unique index backs up this pre-check.
    #[instrument(skip(self, new_director), fields(director_name = %new_director.name))]
    pub async fn add_director(&self, new_director: NewDirector) -> Result<Director, DomainError> {
        validate_name("name", &new_director.name)?;

        let txn = self.db.begin().await?;

        if self
            .directors
            .find_by_name(&txn, &new_director.name)
            .await?
            .is_some()
        {
            return Err(DomainError::already_exists("director", new_director.name));
        }

        let director = Director {
            id: Uuid::new_v4(),
            name: new_director.name,
        };
        let director = self.directors.insert(&txn, director).await?;

        txn.commit().await?;
        info!(director_id = %director.id, "director added");
        Ok(director)
    }

    pub async fn list_directors(&self) -> Result<Vec<Director>, DomainError> {
        self.directors.list(&self.db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::service::hotels::tests::{mem_db, seed_director, MemDirectors, MemState};

    async fn service(state: Arc<MemState>) -> DirectorsService<MemDirectors> {
        DirectorsService::new(mem_db().await, Arc::new(MemDirectors(state)))
    }

    #[tokio::test]
    async fn add_director_with_colliding_name_fails() {
        let state = Arc::new(MemState::default());
        seed_director(&state, "Ivanov");
        let svc = service(state.clone()).await;

        let err = svc
            .add_director(NewDirector {
                name: "Ivanov".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyExists { entity: "director", .. }));
        assert_eq!(state.directors.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_director_returns_generated_id() {
        let state = Arc::new(MemState::default());
        let svc = service(state.clone()).await;

        let director = svc
            .add_director(NewDirector {
                name: "Petrov".into(),
            })
            .await
            .unwrap();

        assert!(!director.id.is_nil());
        assert_eq!(svc.list_directors().await.unwrap(), vec![director]);
    }
}
