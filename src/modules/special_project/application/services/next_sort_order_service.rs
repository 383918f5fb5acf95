use async_trait::async_trait;

use crate::special_project::application::domain::entities::next_sort_order_after;
use crate::special_project::application::ports::{
    incoming::use_cases::{NextSortOrderUseCase, SpecialProjectError},
    outgoing::SpecialProjectRepository,
};

pub struct NextSortOrderService<R>
where
    R: SpecialProjectRepository,
{
    repo: R,
}

impl<R> NextSortOrderService<R>
where
    R: SpecialProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> NextSortOrderUseCase for NextSortOrderService<R>
where
    R: SpecialProjectRepository,
{
    async fn execute(&self) -> Result<i32, SpecialProjectError> {
        let max = self.repo.max_sort_order().await?;
        Ok(next_sort_order_after(max))
    }
}
