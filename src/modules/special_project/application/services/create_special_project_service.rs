use async_trait::async_trait;
use tracing::info;

use crate::special_project::application::domain::entities::{
    next_sort_order_after, NewSpecialProject, SpecialProject,
};
use crate::special_project::application::ports::{
    incoming::use_cases::{CreateSpecialProjectUseCase, SpecialProjectError},
    outgoing::SpecialProjectRepository,
};

pub struct CreateSpecialProjectService<R>
where
    R: SpecialProjectRepository,
{
    repo: R,
}

impl<R> CreateSpecialProjectService<R>
where
    R: SpecialProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CreateSpecialProjectUseCase for CreateSpecialProjectService<R>
where
    R: SpecialProjectRepository,
{
    async fn execute(&self, input: NewSpecialProject) -> Result<SpecialProject, SpecialProjectError> {
        input.validate()?;

        let sort_order = match input.sort_order {
            Some(order) => order,
            None => next_sort_order_after(self.repo.max_sort_order().await?),
        };

        let project = self.repo.insert(input.image_url.trim(), sort_order).await?;
        info!(id = %project.id, sort_order, "Special project created");
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::special_projects::InMemorySpecialProjects;

    fn input(url: &str, sort_order: Option<i32>) -> NewSpecialProject {
        NewSpecialProject {
            image_url: url.to_string(),
            sort_order,
        }
    }

    #[tokio::test]
    async fn missing_sort_order_takes_the_next_one() {
        let repo = InMemorySpecialProjects::new();
        repo.seed("/api/cloud/files/a", 4);
        let service = CreateSpecialProjectService::new(repo.clone());

        let created = service.execute(input(" /api/cloud/files/b ", None)).await.unwrap();

        assert_eq!(created.sort_order, 5);
        assert_eq!(created.image_url, "/api/cloud/files/b");
        assert_eq!(repo.rows().len(), 2);
    }

    #[tokio::test]
    async fn taken_sort_order_is_duplicate_ordering() {
        let repo = InMemorySpecialProjects::new();
        repo.seed("/api/cloud/files/a", 1);

        let err = CreateSpecialProjectService::new(repo.clone())
            .execute(input("/api/cloud/files/b", Some(1)))
            .await
            .unwrap_err();

        assert_eq!(err, SpecialProjectError::DuplicateOrdering("sort_order".into()));
        assert_eq!(repo.rows().len(), 1);
    }

    #[tokio::test]
    async fn blank_url_is_rejected_before_any_write() {
        let repo = InMemorySpecialProjects::new();

        let err = CreateSpecialProjectService::new(repo.clone())
            .execute(input("", Some(0)))
            .await
            .unwrap_err();

        assert!(matches!(err, SpecialProjectError::Validation(ref e) if e.has("image_url")));
        assert!(repo.rows().is_empty());
    }
}
