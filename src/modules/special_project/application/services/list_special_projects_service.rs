use async_trait::async_trait;

use crate::special_project::application::domain::entities::SpecialProject;
use crate::special_project::application::ports::{
    incoming::use_cases::{ListSpecialProjectsUseCase, SpecialProjectError},
    outgoing::SpecialProjectRepository,
};

pub struct ListSpecialProjectsService<R>
where
    R: SpecialProjectRepository,
{
    repo: R,
}

impl<R> ListSpecialProjectsService<R>
where
    R: SpecialProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListSpecialProjectsUseCase for ListSpecialProjectsService<R>
where
    R: SpecialProjectRepository,
{
    async fn execute(&self) -> Result<Vec<SpecialProject>, SpecialProjectError> {
        Ok(self.repo.list().await?)
    }
}
