use std::marker::PhantomData;
use std::sync::Arc;

use models::record::Record;
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::lookup::Lookup;
use crate::record::repository::RecordRepository;
use crate::record::transform::Transform;

/// Create/read/update/delete over one record kind.
///
/// Updates are reconciled against the stored record: the existing row is
/// fetched, its mutable fields overwritten and the row saved back, so the
/// caller can never replace `created` or the id. Absence is reported as
/// [`Lookup::NotFound`] (or `false` for delete) rather than as an error;
/// only store failures surface as `Err`.
pub struct RecordService<T: Transform> {
    repo: Arc<dyn RecordRepository<T::Entity>>,
    kind: PhantomData<fn() -> T>,
}

impl<T: Transform> Clone for RecordService<T> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo), kind: PhantomData }
    }
}

impl<T: Transform> RecordService<T> {
    pub fn new<R>(repo: Arc<R>) -> Self
    where
        R: RecordRepository<T::Entity> + 'static,
    {
        Self { repo, kind: PhantomData }
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn list(&self) -> Result<Vec<T::Model>, ServiceError> {
        let rows = self.repo.find_all().await?;
        info!(count = rows.len(), "listed records");
        Ok(rows.into_iter().map(T::to_model).collect())
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn get(&self, id: i32) -> Result<Lookup<T::Model>, ServiceError> {
        match self.repo.find_by_id(id).await? {
            Lookup::Found(entity) => {
                info!(id, "record found");
                Ok(Lookup::Found(T::to_model(entity)))
            }
            Lookup::NotFound => {
                warn!(id, "unable to locate record");
                Ok(Lookup::NotFound)
            }
        }
    }

    /// Insert a new record; a non-positive id on the input is ignored.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::student::StudentData;
    /// use service::record::repository::mock::InMemoryRepository;
    /// use service::student::{Student, StudentService};
    ///
    /// let svc = StudentService::new(Arc::new(InMemoryRepository::<StudentData>::new()));
    /// let input = Student { first_name: "Ann".into(), student_number: "S100".into(), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert!(created.id > 0);
    /// assert!(created.created.is_some());
    /// ```
    #[instrument(skip(self, model), fields(kind = T::KIND))]
    pub async fn create(&self, model: T::Model) -> Result<T::Model, ServiceError> {
        info!(input = ?model, "create");
        let saved = self.repo.save(T::to_entity(model)).await?;
        info!(id = ?saved.id(), "record created");
        Ok(T::to_model(saved))
    }

    /// Overwrite the mutable fields of an existing record.
    ///
    /// Never inserts: an unknown id yields `NotFound` without touching the
    /// store. The fetch and the save are separate store calls, so two
    /// concurrent updates of one id are last-write-wins.
    #[instrument(skip(self, model), fields(kind = T::KIND))]
    pub async fn update(&self, model: T::Model) -> Result<Lookup<T::Model>, ServiceError> {
        let id = T::model_id(&model);
        info!(id, input = ?model, "update");
        let mut entity = match self.repo.find_by_id(id).await? {
            Lookup::Found(entity) => entity,
            Lookup::NotFound => {
                warn!(id, "unable to locate record; nothing updated");
                return Ok(Lookup::NotFound);
            }
        };
        T::overwrite(&mut entity, model);
        let saved = self.repo.save(entity).await?;
        info!(id, result = ?saved, "record updated");
        Ok(Lookup::Found(T::to_model(saved)))
    }

    /// Remove a record; `false` when no record with `id` exists.
    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            warn!(id, "unable to locate record; nothing deleted");
            return Ok(false);
        }
        let Lookup::Found(entity) = self.repo.find_by_id(id).await? else {
            warn!(id, "record disappeared before delete");
            return Ok(false);
        };
        self.repo.delete(entity).await?;
        info!(id, "record deleted");
        Ok(true)
    }
}
